pub mod participant;
pub mod plan;
pub mod roster;
pub mod summary;

pub use participant::{Ledger, Participant, ParticipantId};
pub use plan::{CheckpointEvent, KickoffRole, RotationPlan, Substitution};
pub use roster::{random_names, NAME_POOL};
pub use summary::{MatchStats, MinuteStats, PlayerSummary, SeriesSummary};

//! Rotation CLI Library
//!
//! Roster input → rotation_core series → CSV schedule + playing-time summary

pub mod input;
pub mod report;
pub mod schedule_csv;

pub use input::{parse_count, parse_roster, prompt, InputError, SeriesInput, MAX_ROSTER};
pub use report::{render_summary, write_json, SummaryDocument};
pub use schedule_csv::{write_schedule, write_schedule_file, DEFAULT_OUTPUT_PATH};

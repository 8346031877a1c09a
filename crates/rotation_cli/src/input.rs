//! Series input: parsing, prompting and validation.
//!
//! The rotation engine trusts its input; everything it needs checked is
//! checked here, each failure with its own message.

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use rotation_core::RotationConfig;
use thiserror::Error;

/// Largest roster a team may register.
pub const MAX_ROSTER: usize = 18;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("Number of matches must be at least 1")]
    TooFewMatches,

    #[error("Match duration must be at least {min} minutes, got {found}")]
    DurationTooShort { min: u32, found: u32 },

    #[error("Roster needs at least {min} players, got {found}")]
    RosterTooSmall { min: usize, found: usize },

    #[error("Roster allows at most {max} players, got {found}")]
    RosterTooLarge { max: usize, found: usize },

    #[error("Duplicate player name: '{0}'")]
    DuplicateName(String),
}

/// Validated input for one series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesInput {
    pub names: Vec<String>,
    pub match_count: u32,
    pub match_duration: u32,
}

impl SeriesInput {
    pub fn new(
        names: Vec<String>,
        match_count: u32,
        match_duration: u32,
        config: &RotationConfig,
    ) -> Result<Self, InputError> {
        if match_count < 1 {
            return Err(InputError::TooFewMatches);
        }
        if match_duration < config.interval_minutes {
            return Err(InputError::DurationTooShort {
                min: config.interval_minutes,
                found: match_duration,
            });
        }
        validate_roster(&names, config)?;
        Ok(Self {
            names,
            match_count,
            match_duration,
        })
    }
}

pub fn parse_count(field: &'static str, raw: &str) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    // Negative numbers are numeric; let the range checks reject them.
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(u32::try_from(value.max(0)).unwrap_or(u32::MAX));
    }
    Err(InputError::NotANumber {
        field,
        value: trimmed.to_string(),
    })
}

/// Split a comma separated roster, trimming names and dropping empty entries.
pub fn parse_roster(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn validate_roster(names: &[String], config: &RotationConfig) -> Result<(), InputError> {
    let min = config.min_roster();
    if names.len() < min {
        return Err(InputError::RosterTooSmall {
            min,
            found: names.len(),
        });
    }
    if names.len() > MAX_ROSTER {
        return Err(InputError::RosterTooLarge {
            max: MAX_ROSTER,
            found: names.len(),
        });
    }
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(InputError::DuplicateName(name.clone()));
        }
    }
    Ok(())
}

/// Print `message` and read one line. Returns the line without its terminator.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<String> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

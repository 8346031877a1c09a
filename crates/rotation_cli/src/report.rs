//! Playing-time summary: console table and JSON document.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rotation_core::{SeriesSchedule, SeriesSummary};
use serde::Serialize;

const NAME_WIDTH: usize = 15;
const COLUMN_WIDTH: usize = 10;

/// Render the summary table shown after a schedule is generated.
/// Players are listed alphabetically.
pub fn render_summary(summary: &SeriesSummary) -> String {
    let match_count = summary
        .players
        .first()
        .map(|p| p.minutes_by_match.len())
        .unwrap_or(summary.matches.len());

    let mut out = String::new();
    let _ = writeln!(out, "\n=== Playing Time Summary ===");

    let mut header = format!("{:<NAME_WIDTH$}", "Player");
    for m in 1..=match_count {
        let _ = write!(header, " {:<COLUMN_WIDTH$}", format!("Match {m}"));
    }
    let _ = write!(header, " {:<COLUMN_WIDTH$} {:<COLUMN_WIDTH$}", "Total", "GK");
    let _ = writeln!(out, "{}", header.trim_end());
    let _ = writeln!(
        out,
        "{}",
        "-".repeat(NAME_WIDTH + match_count * (COLUMN_WIDTH + 1) + 2 * (COLUMN_WIDTH + 1))
    );

    let mut players: Vec<_> = summary.players.iter().collect();
    players.sort_by(|a, b| a.name.cmp(&b.name));
    for p in players {
        let mut row = format!("{:<NAME_WIDTH$}", p.name);
        for minutes in &p.minutes_by_match {
            let _ = write!(row, " {:<COLUMN_WIDTH$}", format!("{minutes} min"));
        }
        let _ = write!(
            row,
            " {:<COLUMN_WIDTH$} {:<COLUMN_WIDTH$}",
            format!("{} min", p.total_minutes),
            format!("{} match(es)", p.special_role_count)
        );
        let _ = writeln!(out, "{}", row.trim_end());
    }

    let _ = writeln!(out);
    for m in &summary.matches {
        let _ = writeln!(
            out,
            "Match {}: avg {:.1} min (min {}, max {})",
            m.match_number, m.stats.avg, m.stats.min, m.stats.max
        );
    }

    if let Some(overall) = summary.overall {
        let _ = writeln!(
            out,
            "\nOutfield minutes (all matches): avg {:.1} min (min {}, max {})",
            overall.avg, overall.min, overall.max
        );
    }
    let _ = writeln!(
        out,
        "Goalkeeper experience: {} / {} players",
        summary.role_experienced,
        summary.roster_size()
    );
    out
}

/// JSON document written by `--summary-json`.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryDocument {
    pub version: String,
    /// RFC3339
    pub generated_at: String,
    pub match_count: u32,
    pub match_duration: u32,
    pub summary: SeriesSummary,
}

impl SummaryDocument {
    pub fn new(schedule: &SeriesSchedule) -> Self {
        Self {
            version: rotation_core::VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            match_count: schedule.match_count,
            match_duration: schedule.match_duration,
            summary: schedule.summary(),
        }
    }
}

/// Serialize `value` as pretty JSON to `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    fs::write(path, json).with_context(|| format!("Failed to write JSON file: {}", path.display()))?;
    tracing::info!(path = %path.display(), "json written");
    Ok(())
}

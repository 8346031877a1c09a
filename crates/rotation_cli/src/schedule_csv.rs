//! Schedule CSV writer
//!
//! One block per match:
//!
//! ```text
//! Match 1
//! Minute, <player>, <player>, ...
//! 0,      SM,       SM(GK),   RM, ...
//! 3,      OUT,      ,         IN, ...      (substitution checkpoints only)
//! 15,     ,         ,         ,   ...      (final whistle)
//! <blank>
//! ```
//!
//! Columns follow roster order. Markers: `SM` starts outfield, `SM(GK)`
//! starts in goal, `RM` starts on the bench, `IN`/`OUT` at a substitution.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use rotation_core::{RotationPlan, SeriesSchedule};

/// Lets spreadsheet tools detect UTF-8 (player names are often non-ASCII).
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub const DEFAULT_OUTPUT_PATH: &str = "soccer_schedule.csv";

/// Write every match block of `schedule` to `writer` (no BOM).
pub fn write_schedule<W: Write>(writer: W, schedule: &SeriesSchedule) -> Result<()> {
    let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    let names: Vec<&str> = schedule
        .participants()
        .iter()
        .map(|p| p.name.as_str())
        .collect();

    for plan in &schedule.plans {
        write_match(&mut csv, &names, plan)?;
    }

    csv.flush().context("Failed to flush schedule CSV")?;
    Ok(())
}

fn write_match<W: Write>(
    csv: &mut csv::Writer<W>,
    names: &[&str],
    plan: &RotationPlan,
) -> Result<()> {
    csv.write_record([format!("Match {}", plan.match_number)])?;

    let mut header = Vec::with_capacity(names.len() + 1);
    header.push("Minute");
    header.extend_from_slice(names);
    csv.write_record(&header)?;

    let mut kickoff = Vec::with_capacity(names.len() + 1);
    kickoff.push("0");
    kickoff.extend(names.iter().map(|name| plan.kickoff_role(name).label()));
    csv.write_record(&kickoff)?;

    for (minute, swaps) in plan.substitutions() {
        let mut markers: HashMap<&str, &str> = HashMap::with_capacity(swaps.len() * 2);
        for swap in swaps {
            markers.insert(swap.outgoing.as_str(), "OUT");
        }
        for swap in swaps {
            markers.insert(swap.incoming.as_str(), "IN");
        }
        let mut row = Vec::with_capacity(names.len() + 1);
        row.push(minute.to_string());
        row.extend(
            names
                .iter()
                .map(|name| markers.get(name).copied().unwrap_or("").to_string()),
        );
        csv.write_record(&row)?;
    }

    let mut closing = Vec::with_capacity(names.len() + 1);
    closing.push(plan.duration.to_string());
    closing.extend(names.iter().map(|_| String::new()));
    csv.write_record(&closing)?;

    csv.write_record(names.iter().map(|_| "").chain(Some("")))?;
    Ok(())
}

/// Write the schedule to `path` with a UTF-8 BOM, creating parent directories.
pub fn write_schedule_file(path: &Path, schedule: &SeriesSchedule) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let mut file = fs::File::create(path)
        .with_context(|| format!("Failed to create schedule file: {}", path.display()))?;
    file.write_all(UTF8_BOM)
        .with_context(|| format!("Failed to write schedule file: {}", path.display()))?;
    write_schedule(&mut file, schedule)
        .with_context(|| format!("Failed to write schedule file: {}", path.display()))?;

    tracing::info!(path = %path.display(), matches = schedule.plans.len(), "schedule written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotation_core::RotationConfig;
    use tempfile::tempdir;

    fn roster(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("P{}", i + 1)).collect()
    }

    fn read_rows(bytes: &[u8]) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes)
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_match_block_layout() -> Result<()> {
        let schedule = SeriesSchedule::generate(roster(10), 1, 12, &RotationConfig::default());
        let mut buf = Vec::new();
        write_schedule(&mut buf, &schedule)?;
        let rows = read_rows(&buf);

        assert_eq!(rows[0], vec!["Match 1"]);
        assert_eq!(rows[1][0], "Minute");
        assert_eq!(&rows[1][1..], roster(10).as_slice());

        let kickoff = &rows[2];
        assert_eq!(kickoff[0], "0");
        assert_eq!(kickoff[1], "SM(GK)");
        assert_eq!(kickoff.iter().filter(|c| *c == "SM").count(), 7);
        assert_eq!(kickoff.iter().filter(|c| *c == "RM").count(), 2);

        // minute 3: P2, P3 off for P9, P10
        assert_eq!(rows[3][0], "3");
        assert_eq!(rows[3][2], "OUT");
        assert_eq!(rows[3][3], "OUT");
        assert_eq!(rows[3][9], "IN");
        assert_eq!(rows[3][10], "IN");

        let closing = rows.iter().rev().nth(1).unwrap();
        assert_eq!(closing[0], "12");
        assert!(closing[1..].iter().all(String::is_empty));
        Ok(())
    }

    #[test]
    fn test_substitution_rows_follow_checkpoint_order() -> Result<()> {
        let schedule = SeriesSchedule::generate(roster(13), 2, 20, &RotationConfig::default());
        let mut buf = Vec::new();
        write_schedule(&mut buf, &schedule)?;
        let rows = read_rows(&buf);

        let first_block_end = rows
            .iter()
            .position(|r| r.first().map(String::as_str) == Some("Match 2"))
            .unwrap();
        let minutes: Vec<u32> = rows[3..first_block_end - 2]
            .iter()
            .map(|r| r[0].parse().unwrap())
            .collect();
        let mut sorted = minutes.clone();
        sorted.sort_unstable();
        assert_eq!(minutes, sorted);

        let expected: Vec<u32> = schedule.plans[0].substitutions().map(|(m, _)| m).collect();
        assert_eq!(minutes, expected);
        Ok(())
    }

    #[test]
    fn test_file_has_bom_and_parent_dirs() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out").join("schedule.csv");
        let schedule = SeriesSchedule::generate(roster(9), 1, 9, &RotationConfig::default());
        write_schedule_file(&path, &schedule)?;

        let bytes = fs::read(&path)?;
        assert!(bytes.starts_with(UTF8_BOM));
        let rows = read_rows(&bytes[UTF8_BOM.len()..]);
        assert_eq!(rows[0], vec!["Match 1"]);
        Ok(())
    }
}

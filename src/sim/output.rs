use std::path::Path;

use crate::error::Result;
use crate::models::Doneness;
use crate::sim::runner::{SimSummary, TrialResult};

/// Truncate a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write every trial to a CSV file.
pub fn write_csv(results: &[TrialResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "trial",
        "overall_match",
        "quality",
        "doneness",
        "reward",
        "mistake",
        "meter",
    ])?;

    for result in results {
        let doneness = result.doneness.map(|d| d.label()).unwrap_or("none");
        wtr.write_record([
            result.trial.to_string(),
            result.overall_match.to_string(),
            format!("{:.1}", result.quality),
            doneness.to_string(),
            format!("{:.0}", result.reward),
            result.mistake.to_string(),
            format!("{:.1}", result.meter),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the batch summary to a JSON file with truncated floats.
pub fn write_summary_json(summary: &SimSummary, path: &Path) -> Result<()> {
    let doneness: Vec<serde_json::Value> = Doneness::ALL
        .iter()
        .map(|d| {
            serde_json::json!({
                "doneness": d.label(),
                "count": summary.doneness_counts[*d as usize],
            })
        })
        .collect();

    let json = serde_json::json!({
        "trials": summary.trials,
        "matches": summary.matches,
        "mistakes": summary.mistakes,
        "match_rate": truncate(summary.match_rate(), 3),
        "avg_quality": truncate(summary.avg_quality, 2),
        "avg_reward": truncate(summary.avg_reward, 2),
        "doneness": doneness,
    });

    std::fs::write(path, serde_json::to_string_pretty(&json)?)?;
    Ok(())
}

/// Print the batch summary.
pub fn print_summary(summary: &SimSummary) {
    println!();
    println!("=== Balance summary ===");
    println!("Trials:      {}", summary.trials);
    println!(
        "Matches:     {} ({:.1}%)",
        summary.matches,
        summary.match_rate() * 100.0
    );
    println!("Mistakes:    {}", summary.mistakes);
    println!("Avg quality: {:.1}", summary.avg_quality);
    println!("Avg reward:  {:.1}", summary.avg_reward);
    println!();

    for d in Doneness::ALL {
        let count = summary.doneness_counts[d as usize];
        let share = if summary.trials > 0 {
            count as f64 / summary.trials as f64 * 100.0
        } else {
            0.0
        };
        println!("{:<12} {:>5} ({:.1}%)", d.label(), count, share);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_summary() -> SimSummary {
        SimSummary {
            trials: 10,
            matches: 7,
            mistakes: 1,
            avg_quality: 83.456,
            avg_reward: 77.7,
            doneness_counts: [1, 2, 5, 1, 1],
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(1.23456, 3), 1.235);
        assert_eq!(truncate(1.0, 2), 1.0);
    }

    #[test]
    fn test_write_summary_json() {
        let file = NamedTempFile::new().unwrap();
        write_summary_json(&sample_summary(), file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["trials"], 10);
        assert_eq!(parsed["match_rate"], 0.7);
    }

    #[test]
    fn test_write_csv_has_header_and_rows() {
        let results = vec![TrialResult {
            trial: 0,
            overall_match: true,
            quality: 100.0,
            doneness: Some(Doneness::Perfect),
            reward: 100.0,
            mistake: false,
            meter: 100.0,
        }];

        let file = NamedTempFile::new().unwrap();
        write_csv(&results, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("trial,"));
        assert!(lines.next().unwrap().contains("perfect"));
    }
}

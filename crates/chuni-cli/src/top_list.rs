//! Top rating list built from a JSON file of best scores.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chuni_core::{CalculatorConfig, ScoreRecord, TopRatings, rate_all};
use tracing::debug;

/// Rate every record in the file and keep the best charts.
///
/// The file holds a JSON array of `{"chart": {...}, "level": "13.5", "score": 1007500}`.
pub fn load_top(path: &Path, config: &CalculatorConfig) -> Result<TopRatings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read score list {}", path.display()))?;
    let records: Vec<ScoreRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse score list {}", path.display()))?;

    let rated: Vec<ScoreRecord> = records
        .into_iter()
        .filter(|record| record.chart.difficulty.is_rated())
        .collect();
    let entries = rate_all(&rated, config.precision);
    debug!("Rated {} records from {}", entries.len(), path.display());

    Ok(TopRatings::from_entries(entries, config.top_capacity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_top() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"chart": {{"song_id": 1, "difficulty": "Master"}}, "level": "13.5", "score": 1009000}},
                {{"chart": {{"song_id": 2, "difficulty": "Expert"}}, "level": "12.0", "score": 975000}},
                {{"chart": {{"song_id": 3, "difficulty": "WorldsEnd"}}, "level": "15.0", "score": 1010000}}
            ]"#
        )
        .unwrap();

        let config = CalculatorConfig::default();
        let top = load_top(file.path(), &config).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top.entries()[0].rating.to_string(), "15.65");
        assert_eq!(top.entries()[1].rating.to_string(), "12");
        assert_eq!(top.capacity(), 30);
    }

    #[test]
    fn test_load_top_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(load_top(file.path(), &CalculatorConfig::default()).is_err());
    }
}

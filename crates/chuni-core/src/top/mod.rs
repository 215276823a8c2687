//! Top rating list: the best chart ratings whose average feeds the player
//! rating, and the effect a new play would have on it.

mod projection;

pub use projection::{IncreaseTarget, TopProjection};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::{ChartKey, Level};
use crate::config::top::{AVERAGE_PRECISION, TOP_K};
use crate::decimal::ExactDecimal;
use crate::error::Result;
use crate::rating::RatingEntry;

/// Rating-descending list of at most `capacity` chart ratings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopRatings {
    entries: Vec<RatingEntry>,
    capacity: usize,
}

impl Default for TopRatings {
    fn default() -> Self {
        Self::new(TOP_K)
    }
}

impl TopRatings {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Keep the best rating per chart, then the best `capacity` charts.
    pub fn from_entries(entries: impl IntoIterator<Item = RatingEntry>, capacity: usize) -> Self {
        let mut entries: Vec<RatingEntry> = entries.into_iter().collect();
        // Stable sort keeps input order among equal ratings.
        entries.sort_by(|a, b| b.rating.cmp(&a.rating));

        let mut seen = std::collections::HashSet::new();
        entries.retain(|entry| seen.insert(entry.chart));
        entries.truncate(capacity);

        debug!("Top list holds {} of {} charts", entries.len(), capacity);
        Self { entries, capacity }
    }

    /// Parse a JSON array of [`RatingEntry`] values.
    pub fn from_json(json: &str, capacity: usize) -> Result<Self> {
        let entries: Vec<RatingEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries, capacity))
    }

    pub fn entries(&self) -> &[RatingEntry] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn get(&self, chart: &ChartKey) -> Option<&RatingEntry> {
        self.entries.iter().find(|entry| entry.chart == *chart)
    }

    /// Lowest rating on the list.
    pub fn lowest(&self) -> Option<&ExactDecimal> {
        self.entries.last().map(|entry| &entry.rating)
    }

    pub fn total(&self) -> ExactDecimal {
        self.entries.iter().map(|entry| &entry.rating).sum()
    }

    /// Sum divided by the list capacity, truncated to four places.
    ///
    /// Empty slots count as zero, so a short list averages low.
    pub fn average(&self) -> ExactDecimal {
        self.average_of(&self.total())
    }

    pub(crate) fn average_of(&self, total: &ExactDecimal) -> ExactDecimal {
        total
            .div(&ExactDecimal::from(self.capacity.max(1)), AVERAGE_PRECISION)
            .rescale(AVERAGE_PRECISION)
    }

    /// Rating a new play on `chart` would push out of the list.
    ///
    /// A chart already listed replaces its own entry; any other chart replaces
    /// the lowest entry. `None` when nothing would be displaced: the list is
    /// not full yet, the chart's ceiling is not above the lowest entry, or its
    /// listed entry is already at the ceiling.
    pub fn displaced(&self, chart: &ChartKey, level: Level) -> Option<ExactDecimal> {
        if !self.is_full() {
            debug!("Top list holds {} of {}, nothing to displace", self.len(), self.capacity);
            return None;
        }
        let ceiling = level.max_rating();
        let lowest = self.lowest()?.clone();

        if ceiling <= lowest {
            debug!("{} at level {} cannot beat the lowest entry {}", chart, level, lowest);
            return None;
        }

        match self.get(chart) {
            Some(entry) if entry.is_capped() => {
                debug!("{} is already at its ceiling {}", chart, ceiling);
                None
            }
            Some(entry) => Some(entry.rating.clone()),
            None => Some(lowest),
        }
    }

    /// 1-based position a rating would take: the first entry it meets or beats.
    ///
    /// `None` when the rating is below every entry.
    pub fn rank_of(&self, rating: &ExactDecimal) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| *rating >= entry.rating)
            .map(|index| index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Difficulty;

    pub(super) fn entry(song_id: u32, tenths: u32, rating: &str) -> RatingEntry {
        RatingEntry {
            chart: ChartKey::new(song_id, Difficulty::Master),
            level: Level::from_tenths(tenths),
            rating: rating.parse().unwrap(),
        }
    }

    /// Thirty charts rated 15.00 down to 14.71.
    pub(super) fn full_list() -> TopRatings {
        let entries = (0..30).map(|i| {
            let hundredths = 1500 - i;
            entry(i, 140, &format!("{}.{:02}", hundredths / 100, hundredths % 100))
        });
        TopRatings::from_entries(entries, 30)
    }

    #[test]
    fn test_from_entries_sorts_and_truncates() {
        let entries = vec![
            entry(1, 130, "13.2"),
            entry(2, 130, "14.8"),
            entry(3, 130, "14.1"),
        ];
        let top = TopRatings::from_entries(entries, 2);
        let ratings: Vec<String> = top.entries().iter().map(|e| e.rating.to_string()).collect();
        assert_eq!(ratings, vec!["14.8", "14.1"]);
        assert!(top.is_full());
    }

    #[test]
    fn test_from_entries_keeps_best_per_chart() {
        let entries = vec![entry(1, 130, "13.2"), entry(1, 130, "14.0"), entry(2, 130, "13.9")];
        let top = TopRatings::from_entries(entries, 30);
        assert_eq!(top.len(), 2);
        assert_eq!(top.entries()[0].rating.to_string(), "14");
    }

    #[test]
    fn test_average_divides_by_capacity() {
        let top = TopRatings::from_entries(vec![entry(1, 130, "15"), entry(2, 130, "15")], 30);
        assert_eq!(top.total().to_string(), "30");
        assert_eq!(top.average().to_fixed(4), "1.0000");

        // Sum of 15.00 .. 14.71 is 445.65; 445.65 / 30 = 14.855
        assert_eq!(full_list().average().to_fixed(4), "14.8550");
    }

    #[test]
    fn test_displaced_lowest_entry() {
        let top = full_list();
        let chart = ChartKey::new(999, Difficulty::Master);
        let displaced = top.displaced(&chart, Level::from_tenths(135)).unwrap();
        assert_eq!(displaced.to_string(), "14.71");
    }

    #[test]
    fn test_displaced_own_entry() {
        let top = full_list();
        let chart = ChartKey::new(3, Difficulty::Master);
        let displaced = top.displaced(&chart, Level::from_tenths(140)).unwrap();
        assert_eq!(displaced.to_string(), "14.97");
    }

    #[test]
    fn test_displaced_ceiling_too_low() {
        let top = full_list();
        let chart = ChartKey::new(999, Difficulty::Expert);
        // 12.5 + 2.15 = 14.65 < 14.71
        assert_eq!(top.displaced(&chart, Level::from_tenths(125)), None);
    }

    #[test]
    fn test_displaced_capped_entry() {
        let top = TopRatings::from_entries(vec![entry(5, 128, "14.95")], 30);
        let chart = ChartKey::new(5, Difficulty::Master);
        assert_eq!(top.displaced(&chart, Level::from_tenths(128)), None);
    }

    #[test]
    fn test_displaced_short_list() {
        let top = TopRatings::from_entries(vec![entry(1, 140, "15.1")], 30);
        let chart = ChartKey::new(2, Difficulty::Master);
        assert_eq!(top.displaced(&chart, Level::from_tenths(100)), None);
        // Own entry on a short list
        let own = ChartKey::new(1, Difficulty::Master);
        assert_eq!(top.displaced(&own, Level::from_tenths(140)), None);
        assert_eq!(TopRatings::new(30).displaced(&chart, Level::from_tenths(150)), None);
    }

    #[test]
    fn test_rank_of() {
        let top = full_list();
        assert_eq!(top.rank_of(&"15.2".parse().unwrap()), Some(1));
        assert_eq!(top.rank_of(&"14.995".parse().unwrap()), Some(2));
        assert_eq!(top.rank_of(&"14.71".parse().unwrap()), Some(30));
        assert_eq!(top.rank_of(&"14.70".parse().unwrap()), None);

        let short = TopRatings::from_entries(vec![entry(1, 140, "15.1")], 30);
        assert_eq!(short.rank_of(&"11".parse().unwrap()), None);
        assert_eq!(short.rank_of(&"15.1".parse().unwrap()), Some(1));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"chart": {"song_id": 1, "difficulty": "Master"}, "level": "14.0", "rating": "15.20"},
            {"chart": {"song_id": 2, "difficulty": "Ultima"}, "level": 14.5, "rating": 16.1}
        ]"#;
        let top = TopRatings::from_json(json, 30).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top.entries()[0].chart.song_id, 2);
        assert!(TopRatings::from_json("{", 30).is_err());
    }
}

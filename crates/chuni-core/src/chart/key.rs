use serde::{Deserialize, Serialize};

use super::{Difficulty, Level};
use crate::error::{Error, Result};

/// Identifies one chart: a song plus a difficulty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartKey {
    pub song_id: u32,
    pub difficulty: Difficulty,
}

impl ChartKey {
    pub fn new(song_id: u32, difficulty: Difficulty) -> Self {
        Self {
            song_id,
            difficulty,
        }
    }
}

impl std::fmt::Display for ChartKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.song_id, self.difficulty)
    }
}

/// Static chart data consumed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    pub key: ChartKey,
    pub level: Level,
    pub total_judge_count: u32,
}

impl Chart {
    pub fn new(key: ChartKey, level: Level, total_judge_count: u32) -> Result<Self> {
        if total_judge_count == 0 {
            return Err(Error::InvalidNoteCount);
        }
        Ok(Self {
            key,
            level,
            total_judge_count,
        })
    }
}

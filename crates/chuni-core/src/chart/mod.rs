//! Chart-related types.
//!
//! This module contains types for identifying charts and their static data:
//! - `Difficulty` - difficulty slots (BASIC, ADVANCED, EXPERT, MASTER, ULTIMA, WORLD'S END)
//! - `Level` - chart constant with one fractional digit
//! - `ChartKey`, `Chart` - chart identifiers and the data the engine consumes

mod difficulty;
mod key;
mod level;

pub use difficulty::*;
pub use key::*;
pub use level::*;

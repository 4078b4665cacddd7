pub mod engine;
pub mod executor;

pub use engine::{MatchEngine, Origin, ResultSet};
pub use executor::{FilterCompletion, FilterExecutor};

pub mod config;
pub mod search;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use config::{ConfigError, Icon, SearchBoxConfig};
pub use search::{FilterCompletion, FilterExecutor, MatchEngine, Origin, ResultSet};
pub use widgets::{Row, RowPool, SearchBox, SuggestionList};

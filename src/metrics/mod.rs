pub mod format;
pub mod summary;

pub use format::format_currency;
pub use summary::{summarize, yearly_table, SummaryError, SummaryStatistics};

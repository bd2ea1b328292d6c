//! Headless page controllers. Each one owns the state a screen renders and
//! exposes the user intents it accepts as methods.
mod dashboard;
mod detail;
mod editor;
mod list;

pub use dashboard::{Dashboard, DashboardSummary, RECENT_LIMIT};
pub use detail::TransactionDetail;
pub use editor::TransactionEditor;
pub use list::TransactionList;

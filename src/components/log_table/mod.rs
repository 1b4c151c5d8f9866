mod component;
mod format;
mod state;
mod types;

pub use component::LogTable;
pub use types::{LogDocument, LogRecord};

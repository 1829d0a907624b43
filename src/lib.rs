pub mod error;
pub mod export;
pub mod format;
pub mod preview;
pub mod process;

pub use error::{ConvertError, Result};
pub use format::{convert, format_all, format_row, prefix_for, Conversion};
pub use process::normalize::{normalize, Row, Table, REQUIRED_COLUMNS};
pub use process::ParseOptions;

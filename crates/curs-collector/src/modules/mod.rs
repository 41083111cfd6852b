//! Collector operations.

pub mod collect;
pub mod convert;
pub mod output;

pub use collect::{collect_snapshot, run_collect};
pub use convert::convert_from_file;
pub use output::{load_snapshot, save_snapshot};

//! Domain model: collected snapshot and conversions over it.

pub mod convert;
pub mod snapshot;

pub use convert::{convert, Conversion};
pub use snapshot::{Snapshot, SourceReport, SNAPSHOT_DATE_FORMAT};

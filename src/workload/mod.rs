//! Workload providers and result consumers.
//!
//! The simulation core neither reads input nor prints output. This module
//! holds the collaborators on either side of it:
//!
//! - **Sources** (`ProcessSource`): `TextSource` for the
//!   `id,arrival,burst` line format, `RandomWorkload` for seeded
//!   synthetic process sets.
//! - **Sinks** (`ResultSink`): `TableReport` renders the text results
//!   table.

mod generator;
mod report;
mod source;

pub use generator::RandomWorkload;
pub use report::{report_all, ResultSink, TableReport};
pub use source::{parse_process_list, ProcessSource, SourceError, TextSource};

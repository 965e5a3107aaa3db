//! Process scheduling domain models.
//!
//! Provides the data types shared by every scheduling policy: the
//! immutable input description of a process, the per-run timing record,
//! and the execution timeline a run produces.
//!
//! # Lifecycle
//!
//! | Stage | Type | Mutability |
//! |-------|------|------------|
//! | Input | `ProcessSpec` | immutable |
//! | Policy run | `ProcessRecord` | owned and mutated by one run |
//! | Output | `ProcessRecord` + `Timeline` | read-only |

mod process;
mod timeline;

pub use process::{ProcessRecord, ProcessSpec};
pub use timeline::{ExecutionSlice, Timeline};

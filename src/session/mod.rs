//! Session module - phase machine state, selection, and the frame log
//!
//! Re-exports only. All logic in submodules.

mod history;
mod log;
mod selection;
mod state;

pub use history::AngleHistory;
pub use log::{LogRecord, SessionLog, CSV_HEADER};
pub use selection::{Exercise, InputMode};
pub use state::{PendingReset, Session, SourceState};

pub use crate::classifier::ExercisePhase;

//! Pipeline module - per-frame orchestration
//!
//! Re-exports only. All logic in submodules.

mod frame;

pub use frame::{process_frame, FrameOutcome};

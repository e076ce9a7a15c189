//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod controls;
mod landmarks;
mod state;

pub use landmarks::{
    // WASM entry points
    process_landmarks,
    tick,
    leg_skeleton,
    FrameReport,
};

pub use controls::{
    select_exercise,
    switch_mode,
    configure,
    current_config,
    camera_error,
    current_phase,
    completed_reps,
    log_len,
    angle_history,
    export_log_csv,
    export_log_json,
    no_data_message,
    // Messages
    CAMERA_REQUIRED,
    NO_DATA,
};

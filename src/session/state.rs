//! Session state - everything that survives from one frame to the next
//!
//! One `Session` per page. The bridge keeps it in a thread-local; tests
//! build their own. All switches happen inside a single `&mut self` call,
//! so no frame can see a half-applied switch.

use chrono::{DateTime, TimeDelta, Utc};

use super::history::AngleHistory;
use super::log::{LogRecord, SessionLog};
use super::selection::{Exercise, InputMode};
use crate::classifier::{ExercisePhase, SitUpStep};
use crate::config::FormConfig;
use crate::pose::AngleSet;

/// Delayed return to idle scheduled by a completed sit-up
///
/// Keyed by the phase version at schedule time. Any later transition bumps
/// the version, so a reset that fires afterwards is stale and discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingReset {
    pub version: u64,
    pub due: DateTime<Utc>,
}

/// Whether the live camera can deliver frames
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SourceState {
    #[default]
    Available,
    Unavailable(String),
}

pub struct Session {
    config: FormConfig,
    exercise: Exercise,
    mode: InputMode,
    phase: ExercisePhase,
    /// Bumped on every phase change
    phase_version: u64,
    pending_reset: Option<PendingReset>,
    history: AngleHistory,
    completed_reps: u32,
    source: SourceState,
    log: SessionLog,
}

impl Session {
    pub fn new(config: FormConfig) -> Self {
        let history = AngleHistory::new(config.history_len);
        Self {
            config,
            exercise: Exercise::default(),
            mode: InputMode::default(),
            phase: ExercisePhase::Idle,
            phase_version: 0,
            pending_reset: None,
            history,
            completed_reps: 0,
            source: SourceState::Available,
            log: SessionLog::new(),
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn phase(&self) -> ExercisePhase {
        self.phase
    }

    pub fn phase_version(&self) -> u64 {
        self.phase_version
    }

    pub fn pending_reset(&self) -> Option<PendingReset> {
        self.pending_reset
    }

    pub fn history(&self) -> &AngleHistory {
        &self.history
    }

    pub fn completed_reps(&self) -> u32 {
        self.completed_reps
    }

    pub fn source(&self) -> &SourceState {
        &self.source
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    // ========================================================================
    // SELECTION & MODE
    // ========================================================================

    /// Replace thresholds and timings. The history is rebuilt at the new length.
    pub fn set_config(&mut self, config: FormConfig) {
        self.history = AngleHistory::new(config.history_len);
        self.config = config;
        tracing::info!("session configuration replaced");
    }

    /// Select an exercise; always restarts the phase machine
    pub fn select_exercise(&mut self, exercise: Exercise) {
        self.exercise = exercise;
        self.reset_phase();
        tracing::info!(exercise = exercise.name(), "exercise selected");
    }

    /// Switch input mode. Returns false when already in `mode`.
    ///
    /// A real switch resets the phase, drops the log and the rep count, and
    /// re-arms the live source.
    pub fn switch_mode(&mut self, mode: InputMode) -> bool {
        if self.mode == mode {
            return false;
        }

        self.mode = mode;
        self.reset_phase();
        self.log.clear();
        self.completed_reps = 0;
        self.source = SourceState::Available;
        tracing::info!(mode = mode.as_str(), "input mode switched");
        true
    }

    /// Camera acquisition failed; halts live processing only
    pub fn mark_source_unavailable(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!(%reason, "live source unavailable");
        self.source = SourceState::Unavailable(reason);
    }

    /// Error text if live frames should currently be refused
    pub fn live_source_error(&self) -> Option<&str> {
        match (&self.mode, &self.source) {
            (InputMode::Live, SourceState::Unavailable(reason)) => Some(reason),
            _ => None,
        }
    }

    // ========================================================================
    // PHASE MACHINE
    // ========================================================================

    /// No pose in this frame. Live mode restarts the phase machine; upload
    /// mode keeps it, since seeking produces gaps that are not lost reps.
    pub fn tracking_lost(&mut self) {
        if self.mode == InputMode::Live {
            self.reset_phase();
        }
    }

    /// Fire the delayed idle reset if it is due. Returns true if the phase
    /// was actually reset.
    pub fn fire_due_reset(&mut self, now: DateTime<Utc>) -> bool {
        let Some(pending) = self.pending_reset else {
            return false;
        };
        if now < pending.due {
            return false;
        }

        self.pending_reset = None;
        if pending.version != self.phase_version {
            tracing::debug!(
                scheduled = pending.version,
                current = self.phase_version,
                "discarding superseded idle reset"
            );
            return false;
        }

        self.set_phase(ExercisePhase::Idle);
        true
    }

    /// Apply one sit-up step computed from this frame's angles
    pub(crate) fn apply_sit_up(&mut self, step: &SitUpStep, angles: AngleSet, now: DateTime<Utc>) {
        self.history.push(angles);
        self.set_phase(step.next_phase);

        if step.completed_rep() {
            self.completed_reps += 1;
            let delay = TimeDelta::milliseconds(i64::from(self.config.reset_delay_ms));
            self.pending_reset = Some(PendingReset {
                version: self.phase_version,
                due: now + delay,
            });
            tracing::debug!(reps = self.completed_reps, "sit-up completed, idle reset scheduled");
        }
    }

    pub(crate) fn record(&mut self, record: LogRecord) {
        self.log.push(record);
    }

    /// Export the log as CSV; `None` when nothing was recorded
    pub fn export_csv(&self) -> Option<String> {
        self.log.to_csv()
    }

    /// Export the log as JSON; `None` when nothing was recorded
    pub fn export_json(&self) -> Option<String> {
        self.log.to_json()
    }

    fn set_phase(&mut self, phase: ExercisePhase) {
        if self.phase == phase {
            return;
        }
        tracing::debug!(from = self.phase.as_str(), to = phase.as_str(), "phase transition");
        self.phase = phase;
        self.phase_version += 1;
    }

    fn reset_phase(&mut self) {
        self.set_phase(ExercisePhase::Idle);
        self.pending_reset = None;
        self.history.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

//! Feedback labels shown to the user and written to the log

use serde::Serialize;

/// Outcome of the lunge check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LungeVerdict {
    IncorrectOrAbsent,
    DetectedLegsNotOpen,
    DetectedCorrect,
}

impl LungeVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            LungeVerdict::IncorrectOrAbsent => "Incorrect Lunge or No Lunge",
            LungeVerdict::DetectedLegsNotOpen => "Lunge Detected but Legs Not Open Properly",
            LungeVerdict::DetectedCorrect => "Lunge Detected: Correct",
        }
    }
}

/// Prompt produced by one step of the sit-up state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SitUpCue {
    /// Knees not bent, or holding the completed posture
    KeepGoing,
    StartLyingDown,
    LyingDetected,
    SittingDetected,
    /// One-shot, only on the frame that completes the rep
    DetectedCorrect,
}

impl SitUpCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SitUpCue::KeepGoing => "Keep going...",
            SitUpCue::StartLyingDown => "Start by lying down with knees bent",
            SitUpCue::LyingDetected => "Lie down detected, now sit up",
            SitUpCue::SittingDetected => "Sitting up detected, now lie back down",
            SitUpCue::DetectedCorrect => "Sit-up Detected: Correct",
        }
    }
}

/// Severity the page colours the feedback text with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FeedbackLevel {
    /// Green
    Correct,
    /// Yellow: stance held but form off, or a rep half done
    Warning,
    /// Red
    Incorrect,
    /// White
    Neutral,
}

impl FeedbackLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackLevel::Correct => "correct",
            FeedbackLevel::Warning => "warning",
            FeedbackLevel::Incorrect => "incorrect",
            FeedbackLevel::Neutral => "neutral",
        }
    }

    /// CSS colour for the feedback text
    pub fn color(&self) -> &'static str {
        match self {
            FeedbackLevel::Correct => "#00ff00",
            FeedbackLevel::Warning => "#ffff00",
            FeedbackLevel::Incorrect => "#ff0000",
            FeedbackLevel::Neutral => "#ffffff",
        }
    }
}

/// Per-frame feedback for whichever exercise is selected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Feedback {
    Lunge(LungeVerdict),
    SitUp(SitUpCue),
    NoPose,
}

impl Feedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feedback::Lunge(verdict) => verdict.as_str(),
            Feedback::SitUp(cue) => cue.as_str(),
            Feedback::NoPose => "No pose detected",
        }
    }

    /// True for a correctly executed lunge frame or a completed sit-up
    pub fn is_correct(&self) -> bool {
        self.level() == FeedbackLevel::Correct
    }

    pub fn level(&self) -> FeedbackLevel {
        match self {
            Feedback::Lunge(LungeVerdict::DetectedCorrect) => FeedbackLevel::Correct,
            Feedback::Lunge(LungeVerdict::DetectedLegsNotOpen) => FeedbackLevel::Warning,
            Feedback::Lunge(LungeVerdict::IncorrectOrAbsent) => FeedbackLevel::Incorrect,
            Feedback::SitUp(SitUpCue::DetectedCorrect) => FeedbackLevel::Correct,
            Feedback::SitUp(SitUpCue::LyingDetected | SitUpCue::SittingDetected) => {
                FeedbackLevel::Warning
            }
            Feedback::SitUp(SitUpCue::StartLyingDown | SitUpCue::KeepGoing) => FeedbackLevel::Neutral,
            Feedback::NoPose => FeedbackLevel::Neutral,
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_detections_are_correct() {
        assert!(Feedback::Lunge(LungeVerdict::DetectedCorrect).is_correct());
        assert!(Feedback::SitUp(SitUpCue::DetectedCorrect).is_correct());
        assert!(!Feedback::Lunge(LungeVerdict::DetectedLegsNotOpen).is_correct());
        assert!(!Feedback::SitUp(SitUpCue::SittingDetected).is_correct());
        assert!(!Feedback::NoPose.is_correct());
    }

    #[test]
    fn test_level_for_every_label() {
        let expected = [
            (Feedback::Lunge(LungeVerdict::DetectedCorrect), FeedbackLevel::Correct),
            (Feedback::Lunge(LungeVerdict::DetectedLegsNotOpen), FeedbackLevel::Warning),
            (Feedback::Lunge(LungeVerdict::IncorrectOrAbsent), FeedbackLevel::Incorrect),
            (Feedback::SitUp(SitUpCue::DetectedCorrect), FeedbackLevel::Correct),
            (Feedback::SitUp(SitUpCue::LyingDetected), FeedbackLevel::Warning),
            (Feedback::SitUp(SitUpCue::SittingDetected), FeedbackLevel::Warning),
            (Feedback::SitUp(SitUpCue::StartLyingDown), FeedbackLevel::Neutral),
            (Feedback::SitUp(SitUpCue::KeepGoing), FeedbackLevel::Neutral),
            (Feedback::NoPose, FeedbackLevel::Neutral),
        ];
        for (label, level) in expected {
            assert_eq!(label.level(), level, "{label}");
        }
    }

    #[test]
    fn test_level_colors() {
        assert_eq!(FeedbackLevel::Correct.color(), "#00ff00");
        assert_eq!(FeedbackLevel::Warning.color(), "#ffff00");
        assert_eq!(FeedbackLevel::Incorrect.color(), "#ff0000");
        assert_eq!(FeedbackLevel::Neutral.color(), "#ffffff");
        assert_eq!(FeedbackLevel::Warning.as_str(), "warning");
    }

    #[test]
    fn test_labels_have_no_commas() {
        // Labels go into an unquoted CSV column
        let all = [
            Feedback::Lunge(LungeVerdict::IncorrectOrAbsent),
            Feedback::Lunge(LungeVerdict::DetectedLegsNotOpen),
            Feedback::Lunge(LungeVerdict::DetectedCorrect),
            Feedback::SitUp(SitUpCue::KeepGoing),
            Feedback::SitUp(SitUpCue::StartLyingDown),
            Feedback::SitUp(SitUpCue::LyingDetected),
            Feedback::SitUp(SitUpCue::SittingDetected),
            Feedback::SitUp(SitUpCue::DetectedCorrect),
            Feedback::NoPose,
        ];
        for label in all {
            assert!(!label.as_str().contains(','), "{label}");
        }
    }
}

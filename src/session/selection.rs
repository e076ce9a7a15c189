//! Exercise and input-mode selectors

use std::str::FromStr;

use serde::Serialize;

use crate::error::FormError;

/// Exercise chosen in the page's selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Exercise {
    #[default]
    Lunge,
    SitUp,
}

impl Exercise {
    /// Numeric id used by the selector and the log
    pub fn id(&self) -> i32 {
        match self {
            Exercise::Lunge => 1,
            Exercise::SitUp => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Exercise::Lunge => "lunge",
            Exercise::SitUp => "sit-up",
        }
    }
}

impl TryFrom<i32> for Exercise {
    type Error = FormError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Exercise::Lunge),
            2 => Ok(Exercise::SitUp),
            other => Err(FormError::UnknownExercise(other)),
        }
    }
}

/// Where frames come from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum InputMode {
    /// Continuous camera stream
    #[default]
    Live,
    /// Pre-recorded video, may be seeked
    Upload,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Live => "live",
            InputMode::Upload => "upload",
        }
    }
}

impl FromStr for InputMode {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(InputMode::Live),
            "upload" => Ok(InputMode::Upload),
            _ => Err(FormError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_ids() {
        assert_eq!(Exercise::try_from(1).unwrap(), Exercise::Lunge);
        assert_eq!(Exercise::try_from(2).unwrap(), Exercise::SitUp);
        assert_eq!(Exercise::SitUp.id(), 2);
        assert!(matches!(Exercise::try_from(3), Err(FormError::UnknownExercise(3))));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("live".parse::<InputMode>().unwrap(), InputMode::Live);
        assert_eq!(" Upload ".parse::<InputMode>().unwrap(), InputMode::Upload);
        assert!(matches!("replay".parse::<InputMode>(), Err(FormError::UnknownMode(_))));
    }
}

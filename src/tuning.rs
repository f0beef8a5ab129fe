//! Physics tuning
//!
//! Runtime copy of the physics constants in [`crate::consts`]. Defaults are the
//! shipped values; a page can override any subset through JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable physics parameters (all per-tick quantities)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub max_pull: f32,
    pub launch_power: f32,
    pub grab_tolerance: f32,
    pub ground_restitution: f32,
    pub ground_friction: f32,
    pub wall_restitution: f32,
    pub block_damping_x: f32,
    pub block_bounce_y: f32,
    pub rest_epsilon: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            max_pull: MAX_PULL,
            launch_power: LAUNCH_POWER,
            grab_tolerance: GRAB_TOLERANCE,
            ground_restitution: GROUND_RESTITUTION,
            ground_friction: GROUND_FRICTION,
            wall_restitution: WALL_RESTITUTION,
            block_damping_x: BLOCK_DAMPING_X,
            block_bounce_y: BLOCK_BOUNCE_Y,
            rest_epsilon: REST_EPSILON,
        }
    }
}

/// Why a tuning override was rejected
#[derive(Debug)]
pub enum TuningError {
    /// The override was not valid JSON for [`Tuning`]
    Parse(serde_json::Error),
    /// A value must be positive and finite
    NotPositive { field: &'static str, value: f32 },
    /// A value must be zero or more and finite
    Negative { field: &'static str, value: f32 },
    /// A damping coefficient must be in (0, 1]
    CoefficientOutOfRange { field: &'static str, value: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning json: {}", e),
            TuningError::NotPositive { field, value } => {
                write!(f, "{} must be positive and finite (got {})", field, value)
            }
            TuningError::Negative { field, value } => {
                write!(f, "{} must be non-negative and finite (got {})", field, value)
            }
            TuningError::CoefficientOutOfRange { field, value } => {
                write!(f, "{} must be in (0, 1] (got {})", field, value)
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()
    }

    /// Check every value is usable, returning the tuning unchanged if so
    pub fn validate(self) -> Result<Self, TuningError> {
        let positive = [
            ("gravity", self.gravity),
            ("max_pull", self.max_pull),
            ("launch_power", self.launch_power),
            ("rest_epsilon", self.rest_epsilon),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        if !(self.grab_tolerance.is_finite() && self.grab_tolerance >= 0.0) {
            return Err(TuningError::Negative {
                field: "grab_tolerance",
                value: self.grab_tolerance,
            });
        }

        let coefficients = [
            ("ground_restitution", self.ground_restitution),
            ("ground_friction", self.ground_friction),
            ("wall_restitution", self.wall_restitution),
            ("block_damping_x", self.block_damping_x),
            ("block_bounce_y", self.block_bounce_y),
        ];
        for (field, value) in coefficients {
            if !(value > 0.0 && value <= 1.0) {
                return Err(TuningError::CoefficientOutOfRange { field, value });
            }
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_consts() {
        let t = Tuning::default();
        assert_eq!(t.gravity, GRAVITY);
        assert_eq!(t.max_pull, MAX_PULL);
        assert_eq!(t.rest_epsilon, REST_EPSILON);
        assert!(t.clone().validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let t = Tuning::from_json(r#"{ "gravity": 0.5, "max_pull": 120 }"#).unwrap();
        assert_eq!(t.gravity, 0.5);
        assert_eq!(t.max_pull, 120.0);
        // Untouched fields keep their defaults
        assert_eq!(t.launch_power, LAUNCH_POWER);
        assert_eq!(t.wall_restitution, WALL_RESTITUTION);
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Tuning::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_positive_gravity() {
        let err = Tuning::from_json(r#"{ "gravity": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::NotPositive {
                field: "gravity",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_energy_gaining_bounce() {
        let err = Tuning::from_json(r#"{ "ground_restitution": 1.5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::CoefficientOutOfRange { .. }));
        assert!(err.to_string().contains("ground_restitution"));
    }

    #[test]
    fn test_negative_grab_tolerance_is_reported_as_negative() {
        let err = Tuning::from_json(r#"{"grab_tolerance": -2.0}"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Negative {
                field: "grab_tolerance",
                ..
            }
        ));
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_zero_grab_tolerance_accepted() {
        let t = Tuning::from_json(r#"{"grab_tolerance": 0.0}"#).unwrap();
        assert_eq!(t.grab_tolerance, 0.0);
    }
}

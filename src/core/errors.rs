//!    Error handling
//!
//! This module provides error handling using anyhow.
//! The joystick logic itself cannot fail; errors only come from the host
//! side: bad command line values or entities missing the components the
//! controller expects.

pub use anyhow::{anyhow, ensure, Context};
use anyhow::Result;

/// Result type alias for convenience throughout the application
pub type StickResult<T> = Result<T>;

/// Reports a missing component on an entity the caller handed us
#[macro_export]
macro_rules! missing_component {
    ($entity:expr, $component:expr) => {
        anyhow::anyhow!(
            "Entity {:?} has no {} component",
            $entity,
            $component
        )
    };
}

/// Validation helpers that return anyhow errors
pub fn validate_finite(name: &str, value: f32) -> StickResult<()> {
    ensure!(value.is_finite(), "{} must be finite, got: {}", name, value);
    Ok(())
}

pub fn validate_positive(name: &str, value: f32) -> StickResult<()> {
    validate_finite(name, value)?;
    ensure!(value > 0.0, "{} must be greater than zero, got: {}", name, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_pass() {
        assert!(validate_finite("offset", -120.0).is_ok());
        assert!(validate_finite("offset", f32::NAN).is_err());
        assert!(validate_finite("offset", f32::INFINITY).is_err());
    }

    #[test]
    fn positive_rejects_zero() {
        assert!(validate_positive("size", 1.0).is_ok());
        let err = validate_positive("size", 0.0).unwrap_err();
        assert!(err.to_string().contains("size must be greater than zero"));
    }
}

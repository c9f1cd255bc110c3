//! Current and maximum progress values.

use crate::error::{ProgressBarError, Result};

/// Default upper bound of the progress value.
pub const DEFAULT_MAX_PROGRESS: f32 = 100.0;

/// The bar's progress value and its upper bound.
///
/// `max_progress` is always strictly positive. `progress` may exceed it
/// through the instant setters; [`fraction`](Self::fraction) clamps for
/// drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressState {
    progress: f32,
    max_progress: f32,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            progress: 0.0,
            max_progress: DEFAULT_MAX_PROGRESS,
        }
    }
}

impl ProgressState {
    /// Validates and creates a state.
    pub fn new(progress: f32, max_progress: f32) -> Result<Self> {
        validate_max_progress(max_progress)?;
        if progress.is_nan() || progress < 0.0 {
            return Err(ProgressBarError::invalid(
                "progress",
                progress,
                "must not be negative",
            ));
        }
        Ok(Self {
            progress,
            max_progress,
        })
    }

    /// Current value.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Upper bound.
    pub fn max_progress(&self) -> f32 {
        self.max_progress
    }

    /// `progress / max_progress` clamped to `[0, 1]`; NaN reads as empty.
    pub fn fraction(&self) -> f32 {
        let fraction = self.progress / self.max_progress;
        if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        }
    }

    /// Length of the filled part of an interior of `extent` pixels.
    pub fn bar_length(&self, extent: f32) -> f32 {
        self.fraction() * extent.max(0.0)
    }

    /// Whether `value` is a valid animation target.
    pub(crate) fn accepts_target(&self, value: f32) -> bool {
        (0.0..=self.max_progress).contains(&value)
    }

    pub(crate) fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
    }

    pub(crate) fn set_max_progress(&mut self, max_progress: f32) -> Result<()> {
        validate_max_progress(max_progress)?;
        self.max_progress = max_progress;
        Ok(())
    }
}

fn validate_max_progress(max_progress: f32) -> Result<()> {
    if max_progress.is_nan() || max_progress <= 0.0 {
        return Err(ProgressBarError::invalid(
            "max_progress",
            max_progress,
            "must be greater than zero",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_max() {
        for max in [0.0, -5.0, f32::NAN] {
            let err = ProgressState::new(0.0, max).unwrap_err();
            assert_eq!(err.field(), Some("max_progress"));
        }
    }

    #[test]
    fn rejects_negative_progress() {
        let err = ProgressState::new(-1.0, 100.0).unwrap_err();
        assert_eq!(err.field(), Some("progress"));
    }

    #[test]
    fn fraction_is_clamped() {
        let mut state = ProgressState::default();
        state.set_progress(150.0);
        assert_eq!(state.fraction(), 1.0);
        state.set_progress(-20.0);
        assert_eq!(state.fraction(), 0.0);
        state.set_progress(f32::NAN);
        assert_eq!(state.fraction(), 0.0);
    }

    #[test]
    fn bar_length_stays_within_the_extent() {
        for progress in [0.0, 12.5, 50.0, 99.9, 100.0, 400.0] {
            let state = ProgressState::new(progress, 100.0).unwrap();
            let length = state.bar_length(250.0);
            assert!((0.0..=250.0).contains(&length));
        }
        let state = ProgressState::new(50.0, 100.0).unwrap();
        assert_eq!(state.bar_length(-10.0), 0.0);
    }

    #[test]
    fn failed_max_update_keeps_the_old_value() {
        let mut state = ProgressState::default();
        assert!(state.set_max_progress(0.0).is_err());
        assert_eq!(state.max_progress(), DEFAULT_MAX_PROGRESS);
        state.set_max_progress(10.0).unwrap();
        assert_eq!(state.max_progress(), 10.0);
    }
}

//! Objective scoring.
//!
//! Maps the measured ratings of a change onto an [`ObjectiveStatus`]. Report
//! destinations consume the status; they never recompute it.

use crate::enums::ObjectiveStatus;
use crate::feedback::Feedback;

/// Ratings are rounded to one decimal upstream, so differences smaller than
/// half a step are measurement noise, not movement.
const RATING_EPSILON: f64 = 0.05;

/// Score a change against the target rating.
///
/// The new-code rating is compared to the target first; a change that meets
/// the target is `Achieved` regardless of direction. Below target, the
/// baseline decides between `Improved`, `Worsened`, and `Unchanged`. Without
/// enough data the status is `Unknown`.
#[must_use]
pub fn determine_status(feedback: &Feedback, target_rating: f64) -> ObjectiveStatus {
    let Some(new_code) = feedback.new_code_rating else {
        return ObjectiveStatus::Unknown;
    };

    if new_code >= target_rating - RATING_EPSILON {
        return ObjectiveStatus::Achieved;
    }

    let Some(baseline) = feedback.baseline_rating else {
        return ObjectiveStatus::Unknown;
    };

    if new_code > baseline + RATING_EPSILON {
        ObjectiveStatus::Improved
    } else if new_code < baseline - RATING_EPSILON {
        ObjectiveStatus::Worsened
    } else {
        ObjectiveStatus::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn feedback(baseline: Option<f64>, new_code: Option<f64>) -> Feedback {
        Feedback {
            baseline_rating: baseline,
            new_code_rating: new_code,
            ..Feedback::default()
        }
    }

    #[test]
    fn no_new_code_rating_is_unknown() {
        let status = determine_status(&feedback(Some(3.0), None), 3.5);
        assert_eq!(status, ObjectiveStatus::Unknown);
    }

    #[test]
    fn meeting_the_target_is_achieved() {
        let status = determine_status(&feedback(Some(3.0), Some(3.5)), 3.5);
        assert_eq!(status, ObjectiveStatus::Achieved);
    }

    #[test]
    fn exceeding_the_target_is_achieved_even_below_baseline() {
        let status = determine_status(&feedback(Some(4.8), Some(4.0)), 3.5);
        assert_eq!(status, ObjectiveStatus::Achieved);
    }

    #[test]
    fn below_target_without_baseline_is_unknown() {
        let status = determine_status(&feedback(None, Some(3.0)), 3.5);
        assert_eq!(status, ObjectiveStatus::Unknown);
    }

    #[test]
    fn below_target_above_baseline_is_improved() {
        let status = determine_status(&feedback(Some(2.8), Some(3.2)), 3.5);
        assert_eq!(status, ObjectiveStatus::Improved);
    }

    #[test]
    fn below_target_below_baseline_is_worsened() {
        let status = determine_status(&feedback(Some(3.4), Some(2.9)), 3.5);
        assert_eq!(status, ObjectiveStatus::Worsened);
    }

    #[test]
    fn rating_noise_within_epsilon_is_unchanged() {
        let status = determine_status(&feedback(Some(3.0), Some(3.04)), 3.5);
        assert_eq!(status, ObjectiveStatus::Unchanged);
        let status = determine_status(&feedback(Some(3.0), Some(2.96)), 3.5);
        assert_eq!(status, ObjectiveStatus::Unchanged);
    }
}

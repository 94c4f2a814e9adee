// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure signup quota rules.
//!
//! Each rule is an independent, side-effect-free predicate over a
//! pre-computed count and a limit: the check denies exactly when
//! `observed_count >= limit`, and a denial carries a reason string naming
//! the limit that was hit. The validation orchestrator in the core crate
//! selects which rules apply for a given phase and feeds them live counts.

use serde::{Deserialize, Serialize};

/// Maximum active kakad signups per volunteer per month (Phase 1).
pub const KAKAD_LIMIT: i64 = 2;

/// Maximum active robe signups per volunteer per month (Phase 1).
pub const ROBE_LIMIT: i64 = 4;

/// Maximum active Thursday signups per volunteer per month (Phase 1).
pub const THURSDAY_LIMIT: i64 = 1;

/// Maximum total active signups per volunteer per month during Phase 1.
pub const PHASE1_TOTAL_LIMIT: i64 = 6;

/// Maximum signups created during the Phase-2 window per volunteer per month.
pub const PHASE2_ADDITIONAL_LIMIT: i64 = 2;

/// Maximum total active signups per volunteer per month during Phase 2.
pub const RUNNING_TOTAL_LIMIT: i64 = 8;

/// The outcome of evaluating a single rule.
///
/// `reason` is non-empty exactly when `allowed` is false. Denied results
/// double as the violation entries returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Whether the rule permits the signup.
    pub allowed: bool,
    /// Human-readable reason naming the limit hit; empty when allowed.
    pub reason: String,
}

impl RuleResult {
    /// Creates an allowing result.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            allowed: true,
            reason: String::new(),
        }
    }

    /// Creates a denying result with the given reason.
    #[must_use]
    pub const fn denied(reason: String) -> Self {
        Self {
            allowed: false,
            reason,
        }
    }
}

/// Checks that the kakad signup count has not reached the limit.
#[must_use]
pub fn check_kakad_limit(kakad_count: i64, limit: i64) -> RuleResult {
    if kakad_count >= limit {
        return RuleResult::denied(format!("Kakad limit reached ({kakad_count}/{limit})"));
    }
    RuleResult::ok()
}

/// Checks that the robe signup count has not reached the limit.
#[must_use]
pub fn check_robe_limit(robe_count: i64, limit: i64) -> RuleResult {
    if robe_count >= limit {
        return RuleResult::denied(format!("Robe limit reached ({robe_count}/{limit})"));
    }
    RuleResult::ok()
}

/// Checks that the Thursday signup count has not reached the limit.
#[must_use]
pub fn check_thursday_limit(thursday_count: i64, limit: i64) -> RuleResult {
    if thursday_count >= limit {
        return RuleResult::denied(format!(
            "Thursday limit reached ({thursday_count}/{limit})"
        ));
    }
    RuleResult::ok()
}

/// Checks that the month's total signups have not reached the Phase-1 cap.
#[must_use]
pub fn check_phase1_total(total_count: i64, limit: i64) -> RuleResult {
    if total_count >= limit {
        return RuleResult::denied(format!(
            "Phase 1 total limit reached ({total_count}/{limit})"
        ));
    }
    RuleResult::ok()
}

/// Checks that the signups created during the Phase-2 window have not
/// reached the additional-signup cap.
///
/// The count is scoped by signup *creation* date, not shift date.
#[must_use]
pub fn check_phase2_additional(phase2_count: i64, limit: i64) -> RuleResult {
    if phase2_count >= limit {
        return RuleResult::denied(format!(
            "Phase 2 additional limit reached ({phase2_count}/{limit})"
        ));
    }
    RuleResult::ok()
}

/// Checks that the month's total signups have not reached the running cap.
#[must_use]
pub fn check_running_total(total_count: i64, limit: i64) -> RuleResult {
    if total_count >= limit {
        return RuleResult::denied(format!(
            "Running total limit reached ({total_count}/{limit})"
        ));
    }
    RuleResult::ok()
}

/// Checks that a shift has not reached its capacity.
///
/// Unlike the quota rules, the limit here is the candidate shift's own
/// capacity rather than a fixed constant.
#[must_use]
pub fn check_capacity(current_signups: i64, capacity: i64) -> RuleResult {
    if current_signups >= capacity {
        return RuleResult::denied(format!("Shift is full ({current_signups}/{capacity})"));
    }
    RuleResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kakad_under_limit_ok() {
        assert_eq!(check_kakad_limit(1, KAKAD_LIMIT), RuleResult::ok());
    }

    #[test]
    fn test_kakad_at_limit_rejected() {
        let result: RuleResult = check_kakad_limit(2, KAKAD_LIMIT);
        assert!(!result.allowed);
        assert_eq!(result.reason, "Kakad limit reached (2/2)");
    }

    #[test]
    fn test_robe_under_limit_ok() {
        assert_eq!(check_robe_limit(3, ROBE_LIMIT), RuleResult::ok());
    }

    #[test]
    fn test_robe_at_limit_rejected() {
        let result: RuleResult = check_robe_limit(4, ROBE_LIMIT);
        assert!(!result.allowed);
        assert_eq!(result.reason, "Robe limit reached (4/4)");
    }

    #[test]
    fn test_thursday_under_limit_ok() {
        assert_eq!(check_thursday_limit(0, THURSDAY_LIMIT), RuleResult::ok());
    }

    #[test]
    fn test_thursday_at_limit_rejected() {
        let result: RuleResult = check_thursday_limit(1, THURSDAY_LIMIT);
        assert!(!result.allowed);
        assert_eq!(result.reason, "Thursday limit reached (1/1)");
    }

    #[test]
    fn test_phase1_total_under_limit_ok() {
        assert_eq!(check_phase1_total(5, PHASE1_TOTAL_LIMIT), RuleResult::ok());
    }

    #[test]
    fn test_phase1_total_at_limit_rejected() {
        let result: RuleResult = check_phase1_total(6, PHASE1_TOTAL_LIMIT);
        assert!(!result.allowed);
        assert_eq!(result.reason, "Phase 1 total limit reached (6/6)");
    }

    #[test]
    fn test_phase2_additional_under_limit_ok() {
        assert_eq!(
            check_phase2_additional(1, PHASE2_ADDITIONAL_LIMIT),
            RuleResult::ok()
        );
    }

    #[test]
    fn test_phase2_additional_at_limit_rejected() {
        let result: RuleResult = check_phase2_additional(2, PHASE2_ADDITIONAL_LIMIT);
        assert!(!result.allowed);
        assert_eq!(result.reason, "Phase 2 additional limit reached (2/2)");
    }

    #[test]
    fn test_running_total_under_limit_ok() {
        assert_eq!(check_running_total(7, RUNNING_TOTAL_LIMIT), RuleResult::ok());
    }

    #[test]
    fn test_running_total_at_limit_rejected() {
        let result: RuleResult = check_running_total(8, RUNNING_TOTAL_LIMIT);
        assert!(!result.allowed);
        assert_eq!(result.reason, "Running total limit reached (8/8)");
    }

    #[test]
    fn test_capacity_available_ok() {
        assert_eq!(check_capacity(0, 1), RuleResult::ok());
        assert_eq!(check_capacity(2, 3), RuleResult::ok());
    }

    #[test]
    fn test_capacity_full_rejected() {
        let result: RuleResult = check_capacity(3, 3);
        assert!(!result.allowed);
        assert_eq!(result.reason, "Shift is full (3/3)");
    }

    #[test]
    fn test_over_capacity_rejected() {
        // Over-capacity can appear after a capacity reduction; still denied.
        let result: RuleResult = check_capacity(4, 3);
        assert!(!result.allowed);
        assert_eq!(result.reason, "Shift is full (4/3)");
    }

    #[test]
    fn test_denied_reasons_are_nonempty_exactly_when_denied() {
        let allowed: RuleResult = check_kakad_limit(0, KAKAD_LIMIT);
        assert!(allowed.allowed && allowed.reason.is_empty());

        let denied: RuleResult = check_kakad_limit(2, KAKAD_LIMIT);
        assert!(!denied.allowed && !denied.reason.is_empty());
    }
}

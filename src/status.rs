//! Aggregate health derivation from collected risk severities.

use serde::{Deserialize, Serialize};

use crate::model::RiskItem;

/// Green/Amber/Red rollup shown on the status badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateStatus {
    Green,
    Amber,
    Red,
}

impl AggregateStatus {
    /// Derive the overall status from the risk register.
    ///
    /// Any critical impact dominates any number of highs; an empty register
    /// is Green. Total over arbitrary input - no other signal participates.
    pub fn classify(risks: &[RiskItem]) -> Self {
        if risks.iter().any(|r| r.impact.eq_ignore_ascii_case("critical")) {
            AggregateStatus::Red
        } else if risks.iter().any(|r| r.impact.eq_ignore_ascii_case("high")) {
            AggregateStatus::Amber
        } else {
            AggregateStatus::Green
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AggregateStatus::Green => "Green",
            AggregateStatus::Amber => "Amber",
            AggregateStatus::Red => "Red",
        }
    }

    /// Brand fill for badges carrying this status.
    pub fn color_hex(self) -> &'static str {
        match self {
            AggregateStatus::Green => GREEN_HEX,
            AggregateStatus::Amber => AMBER_HEX,
            AggregateStatus::Red => RED_HEX,
        }
    }
}

pub const GREEN_HEX: &str = "2E7D32";
pub const AMBER_HEX: &str = "F9A825";
pub const RED_HEX: &str = "C62828";

/// Brand color for an impact/severity string. Unrecognized values read as
/// low-severity green, matching the badge mapping table.
pub fn color_for_impact(impact: &str) -> &'static str {
    if impact.eq_ignore_ascii_case("critical") || impact.eq_ignore_ascii_case("red") {
        RED_HEX
    } else if impact.eq_ignore_ascii_case("high") || impact.eq_ignore_ascii_case("amber") {
        AMBER_HEX
    } else {
        GREEN_HEX
    }
}

/// Scope/Schedule line on the engagement-status slide.
///
/// These two track only the presence of high-impact risks; a critical-only
/// register turns the overall badge Red while Scope and Schedule stay Green.
pub fn scope_schedule_status(risks: &[RiskItem]) -> AggregateStatus {
    if risks.iter().any(|r| r.impact.eq_ignore_ascii_case("high")) {
        AggregateStatus::Amber
    } else {
        AggregateStatus::Green
    }
}

/// Fold a raw upstream lifecycle string into the fixed display buckets used
/// by the Action Items table legend.
pub fn bucket_action_status(status: &str, impact: &str) -> &'static str {
    let s = status.to_ascii_lowercase();
    match s.as_str() {
        "done" | "completed" | "closed" => "Complete",
        "blocked" => "Blocked",
        _ if impact.eq_ignore_ascii_case("critical") || impact.eq_ignore_ascii_case("high") => {
            "At Risk"
        }
        "not started" | "todo" => "Not Started",
        _ => "In Progress",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk(impact: &str) -> RiskItem {
        RiskItem {
            description: "desc".to_string(),
            impact: impact.to_string(),
            probability: "Med".to_string(),
            action: "act - owner".to_string(),
            status: "open".to_string(),
        }
    }

    #[test]
    fn empty_register_is_green() {
        assert_eq!(AggregateStatus::classify(&[]), AggregateStatus::Green);
    }

    #[test]
    fn high_yields_amber_and_critical_dominates() {
        assert_eq!(
            AggregateStatus::classify(&[risk("High")]),
            AggregateStatus::Amber
        );
        assert_eq!(
            AggregateStatus::classify(&[risk("high"), risk("HIGH"), risk("Critical")]),
            AggregateStatus::Red
        );
        assert_eq!(
            AggregateStatus::classify(&[risk("cRiTiCaL")]),
            AggregateStatus::Red
        );
    }

    #[test]
    fn scope_schedule_ignore_critical() {
        assert_eq!(
            scope_schedule_status(&[risk("Critical")]),
            AggregateStatus::Green
        );
        assert_eq!(scope_schedule_status(&[risk("high")]), AggregateStatus::Amber);
        assert_eq!(scope_schedule_status(&[]), AggregateStatus::Green);
    }

    #[test]
    fn action_status_buckets() {
        assert_eq!(bucket_action_status("Done", "Medium"), "Complete");
        assert_eq!(bucket_action_status("closed", "High"), "Complete");
        assert_eq!(bucket_action_status("blocked", "Low"), "Blocked");
        assert_eq!(bucket_action_status("open", "High"), "At Risk");
        assert_eq!(bucket_action_status("todo", "Medium"), "Not Started");
        assert_eq!(bucket_action_status("update", "Medium"), "In Progress");
    }

    #[test]
    fn impact_colors_follow_badge_mapping() {
        assert_eq!(color_for_impact("Critical"), RED_HEX);
        assert_eq!(color_for_impact("high"), AMBER_HEX);
        assert_eq!(color_for_impact("Low"), GREEN_HEX);
        assert_eq!(color_for_impact("anything"), GREEN_HEX);
    }
}

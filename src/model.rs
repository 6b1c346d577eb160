//! Unified report model - the single structure all downstream renderers consume.

use serde::{Deserialize, Serialize};

use crate::status::bucket_action_status;

/// Maximum number of action items carried into the deck.
pub const MAX_ACTIONS: usize = 12;
/// Maximum number of risk items carried into the deck.
pub const MAX_RISKS: usize = 10;
/// Maximum number of accomplishment bullets.
pub const MAX_ACCOMPLISHMENTS: usize = 8;
/// Maximum number of next-step bullets.
pub const MAX_NEXT_STEPS: usize = 8;

/// Placeholder mitigation text for risks with no follow-up recorded upstream.
pub const FALLBACK_MITIGATION: &str = "Mitigation TBD";
/// Placeholder owner for risks with no owner recorded upstream.
pub const FALLBACK_OWNER: &str = "Owner TBD";

/// The uniform sub-shape extracted from every source's heterogeneous records.
///
/// Field naming differs per upstream system (`title`/`name`/`topic`,
/// `impact`/`risk`/`priority`, ...); extraction maps each onto this shape with
/// per-source defaults so absent fields are never fatal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceItem {
    pub title: String,
    pub owner: String,
    pub status: String,
    pub impact: String,
    pub detail: String,
    pub action: String,
}

impl SourceItem {
    /// Whether the item's severity signal warrants a risk entry.
    pub fn is_high_severity(&self) -> bool {
        self.impact.eq_ignore_ascii_case("high") || self.impact.eq_ignore_ascii_case("critical")
    }
}

/// One row of the Action Items table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    pub description: String,
    pub owner: String,
    pub status: String,
    pub comments: String,
}

impl ActionItem {
    /// Derive an action row from a source item. The raw lifecycle string is
    /// folded into the fixed display buckets (Complete/Blocked/At Risk/...).
    pub fn from_source(item: &SourceItem) -> Self {
        Self {
            description: item.title.clone(),
            owner: item.owner.clone(),
            status: bucket_action_status(&item.status, &item.impact).to_string(),
            comments: item.action.clone(),
        }
    }
}

/// One row of the Risk & Issue register.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskItem {
    pub description: String,
    pub impact: String,
    pub probability: String,
    pub action: String,
    pub status: String,
}

impl RiskItem {
    /// Derive a risk row from a high-severity source item.
    ///
    /// No probability signal exists upstream, so it is always "Med". The
    /// action column pairs the follow-up text with the owner, substituting
    /// placeholders when either is missing.
    pub fn from_source(item: &SourceItem) -> Self {
        let mitigation = if item.action.is_empty() {
            FALLBACK_MITIGATION
        } else {
            item.action.as_str()
        };
        let owner = if item.owner.is_empty() {
            FALLBACK_OWNER
        } else {
            item.owner.as_str()
        };
        let description = if item.detail.is_empty() {
            item.title.clone()
        } else {
            format!("{} - {}", item.title, item.detail)
        };
        Self {
            description,
            impact: item.impact.clone(),
            probability: "Med".to_string(),
            action: format!("{mitigation} - {owner}"),
            status: item.status.clone(),
        }
    }
}

/// Everything the deck renderer needs, folded from all four sources.
///
/// Immutable once built; lives only for the duration of one rendering pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnifiedReport {
    pub actions: Vec<ActionItem>,
    pub risks: Vec<RiskItem>,
    pub accomplishments: Vec<String>,
    pub next_steps: Vec<String>,
    /// Labels of the sources that contributed at least one item, in
    /// processing order. Feeds the status summary sentence only.
    pub sources: Vec<String>,
}

impl UnifiedReport {
    /// Apply the per-collection caps. Called once, after every source item
    /// has been visited - the caps are independent, so a source that exhausts
    /// the action cap can still contribute accomplishments and next steps.
    pub fn truncate_to_caps(&mut self) {
        self.actions.truncate(MAX_ACTIONS);
        self.risks.truncate(MAX_RISKS);
        self.accomplishments.truncate(MAX_ACCOMPLISHMENTS);
        self.next_steps.truncate(MAX_NEXT_STEPS);
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
            && self.risks.is_empty()
            && self.accomplishments.is_empty()
            && self.next_steps.is_empty()
    }
}

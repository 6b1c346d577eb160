//! Source payload extraction and normalization.
//!
//! Each upstream export (chat, CRM, document store, knowledge search) ships a
//! differently-shaped JSON payload. One extractor per source knows its wrapper
//! rule and collection key and maps every record onto the uniform
//! [`SourceItem`] shape; [`normalize`] folds all four into a
//! [`UnifiedReport`]. Extraction is total: malformed input yields empty
//! collections, never an error.

use serde_json::Value;

use crate::model::{ActionItem, RiskItem, SourceItem, UnifiedReport};

/// Longest detail text carried over from a raw-text export.
const RAW_TEXT_DETAIL_CAP: usize = 800;

/// The four upstream payloads, already materialized as JSON.
///
/// `None` stands for a missing or unparseable input file and behaves exactly
/// like an empty collection.
#[derive(Debug, Clone, Default)]
pub struct SourcePayloads {
    pub chat: Option<Value>,
    pub crm: Option<Value>,
    pub documents: Option<Value>,
    pub search: Option<Value>,
}

impl SourcePayloads {
    fn get(&self, kind: SourceKind) -> Option<&Value> {
        match kind {
            SourceKind::Chat => self.chat.as_ref(),
            SourceKind::Crm => self.crm.as_ref(),
            SourceKind::Documents => self.documents.as_ref(),
            SourceKind::Search => self.search.as_ref(),
        }
    }
}

/// One upstream system, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Chat,
    Crm,
    Documents,
    Search,
}

impl SourceKind {
    /// Processing order: chat, CRM, documents, search.
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Chat,
        SourceKind::Crm,
        SourceKind::Documents,
        SourceKind::Search,
    ];

    /// The one well-known collection key inside this source's payload.
    pub fn collection_key(self) -> &'static str {
        match self {
            SourceKind::Chat => "messages",
            SourceKind::Crm => "opportunities",
            SourceKind::Documents => "documents",
            SourceKind::Search => "insights",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Chat => "Chat",
            SourceKind::Crm => "CRM",
            SourceKind::Documents => "Documents",
            SourceKind::Search => "Search",
        }
    }

    /// Input file name under the `inputs/` root.
    pub fn input_file(self) -> &'static str {
        match self {
            SourceKind::Chat => "chat.json",
            SourceKind::Crm => "crm.json",
            SourceKind::Documents => "documents.json",
            SourceKind::Search => "search.json",
        }
    }

    /// Only chat and CRM items surface risks, regardless of severity.
    pub fn contributes_risks(self) -> bool {
        matches!(self, SourceKind::Chat | SourceKind::Crm)
    }

    /// Extract this source's items from an arbitrary payload.
    ///
    /// Unwraps the optional `data` envelope, coerces raw-text exports into a
    /// single synthetic item, and maps every record of the collection onto
    /// the uniform shape. Anything unexpected reads as empty.
    pub fn extract_items(self, payload: &Value) -> Vec<SourceItem> {
        let payload = unwrap_data(payload);

        if payload.get(self.collection_key()).is_none() {
            if let Some(text) = payload.get("raw_text").and_then(Value::as_str) {
                if !text.is_empty() {
                    return vec![self.raw_text_item(text)];
                }
            }
            return Vec::new();
        }

        match payload.get(self.collection_key()).and_then(Value::as_array) {
            Some(records) => records.iter().map(|r| self.item_from_record(r)).collect(),
            None => Vec::new(),
        }
    }

    fn item_from_record(self, record: &Value) -> SourceItem {
        match self {
            SourceKind::Chat => SourceItem {
                title: str_field(record, "title", "Channel update"),
                owner: str_field(record, "owner", "Unknown"),
                status: str_field(record, "status", "update"),
                impact: str_field(record, "impact", "Medium"),
                detail: str_field(record, "detail", ""),
                action: str_field(record, "action", ""),
            },
            SourceKind::Crm => SourceItem {
                title: format!(
                    "{} - {}",
                    str_field(record, "account", "Account"),
                    str_field(record, "name", "Opportunity")
                ),
                owner: str_field(record, "owner", "Unknown"),
                status: str_field(record, "stage", "Unknown"),
                impact: str_field(record, "risk", "Medium"),
                detail: str_field(record, "detail", ""),
                action: str_field(record, "next_step", ""),
            },
            SourceKind::Documents => SourceItem {
                title: str_field(record, "title", "Document update"),
                owner: str_field(record, "owner", "Unknown"),
                status: str_field(record, "state", "updated"),
                impact: str_field(record, "priority", "Medium"),
                detail: str_field(record, "summary", ""),
                action: str_field(record, "required_action", ""),
            },
            SourceKind::Search => SourceItem {
                title: str_field(record, "topic", "Knowledge signal"),
                owner: str_field(record, "owner", "Unknown"),
                status: str_field(record, "state", "info"),
                impact: str_field(record, "priority", "Medium"),
                detail: str_field(record, "summary", ""),
                action: str_field(record, "follow_up", ""),
            },
        }
    }

    /// Synthetic item for payloads that carry only a `raw_text` export.
    fn raw_text_item(self, text: &str) -> SourceItem {
        let title = match self {
            SourceKind::Chat => "Chat weekly updates",
            SourceKind::Crm => "CRM pipeline signal",
            SourceKind::Documents => "Document store weekly extract",
            SourceKind::Search => "Search weekly signal",
        };
        let status = match self {
            SourceKind::Chat => "update",
            SourceKind::Crm => "Unknown",
            SourceKind::Documents => "updated",
            SourceKind::Search => "info",
        };
        SourceItem {
            title: title.to_string(),
            owner: format!("{} feed", self.label()),
            status: status.to_string(),
            impact: "Medium".to_string(),
            detail: text.chars().take(RAW_TEXT_DETAIL_CAP).collect(),
            action: String::new(),
        }
    }
}

/// Live-fetch exports nest the real content one level under `data`.
fn unwrap_data(payload: &Value) -> &Value {
    match payload.get("data") {
        Some(inner) if inner.is_object() => inner,
        _ => payload,
    }
}

fn str_field(record: &Value, key: &str, default: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Fold all four payloads into one unified report.
///
/// Every item of every source is visited in order - each yields one action
/// item, at most one accomplishment (detail, falling back to title), at most
/// one next step (follow-up text when present), and, for risk-eligible
/// sources, at most one risk gated on the high/critical severity check. The
/// caps are applied once, after the full pass.
pub fn normalize(payloads: &SourcePayloads) -> UnifiedReport {
    let mut report = UnifiedReport::default();

    for kind in SourceKind::ALL {
        let items = match payloads.get(kind) {
            Some(payload) => kind.extract_items(payload),
            None => Vec::new(),
        };
        if !items.is_empty() {
            report.sources.push(kind.label().to_string());
        }
        for item in &items {
            report.actions.push(ActionItem::from_source(item));
            if !item.detail.is_empty() {
                report.accomplishments.push(item.detail.clone());
            } else if !item.title.is_empty() {
                report.accomplishments.push(item.title.clone());
            }
            if !item.action.is_empty() {
                report.next_steps.push(item.action.clone());
            }
            if kind.contributes_risks() && item.is_high_severity() {
                report.risks.push(RiskItem::from_source(item));
            }
        }
    }

    report.truncate_to_caps();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MAX_ACTIONS, MAX_NEXT_STEPS};
    use crate::status::AggregateStatus;
    use serde_json::json;

    #[test]
    fn malformed_payloads_read_as_empty() {
        for junk in [json!("nonsense"), json!(42), json!([1, 2]), json!(null)] {
            assert!(SourceKind::Chat.extract_items(&junk).is_empty());
        }
        let payloads = SourcePayloads {
            chat: Some(json!("not an object")),
            crm: Some(json!({"wrong_key": []})),
            documents: None,
            search: Some(json!({"insights": "not a list"})),
        };
        let report = normalize(&payloads);
        assert!(report.is_empty());
        assert!(report.sources.is_empty());
    }

    #[test]
    fn data_envelope_is_unwrapped() {
        let wrapped = json!({"data": {"messages": [{"title": "Standup"}]}});
        let items = SourceKind::Chat.extract_items(&wrapped);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Standup");
        // A non-object `data` value is not an envelope.
        let not_wrapped = json!({"data": "x", "messages": [{"title": "Standup"}]});
        assert_eq!(SourceKind::Chat.extract_items(&not_wrapped).len(), 1);
    }

    #[test]
    fn crm_records_use_composite_title_and_stage() {
        let payload = json!({"opportunities": [
            {"account": "Acme", "name": "Renewal", "stage": "Negotiation", "risk": "High",
             "detail": "Pricing pushback", "next_step": "Exec alignment call"}
        ]});
        let items = SourceKind::Crm.extract_items(&payload);
        assert_eq!(items[0].title, "Acme - Renewal");
        assert_eq!(items[0].status, "Negotiation");
        assert_eq!(items[0].impact, "High");
        assert_eq!(items[0].action, "Exec alignment call");
    }

    #[test]
    fn absent_fields_get_source_defaults() {
        let items = SourceKind::Documents.extract_items(&json!({"documents": [{}]}));
        assert_eq!(items[0].title, "Document update");
        assert_eq!(items[0].owner, "Unknown");
        assert_eq!(items[0].status, "updated");
        assert_eq!(items[0].impact, "Medium");
        assert_eq!(items[0].detail, "");
    }

    #[test]
    fn raw_text_export_coerces_to_one_item() {
        let long_text: String = "x".repeat(900);
        let payload = json!({"data": {"raw_text": long_text}});
        let items = SourceKind::Search.extract_items(&payload);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Search weekly signal");
        assert_eq!(items[0].detail.chars().count(), 800);

        // Present collection key wins over raw_text.
        let both = json!({"raw_text": "ignored", "insights": []});
        assert!(SourceKind::Search.extract_items(&both).is_empty());
        // Empty raw_text yields nothing.
        assert!(SourceKind::Search
            .extract_items(&json!({"raw_text": ""}))
            .is_empty());
    }

    #[test]
    fn risk_gating_per_source_and_severity() {
        let payloads = SourcePayloads {
            chat: Some(json!({"messages": [
                {"title": "Outage", "impact": "critical"},
                {"title": "FYI", "impact": "Low"},
            ]})),
            crm: Some(json!({"opportunities": [
                {"account": "Acme", "name": "Renewal", "risk": "HIGH"},
            ]})),
            documents: Some(json!({"documents": [
                {"title": "Runbook gap", "priority": "Critical"},
            ]})),
            search: Some(json!({"insights": [
                {"topic": "Churn signal", "priority": "High"},
            ]})),
        };
        let report = normalize(&payloads);
        // Document/search items never surface risks, whatever their severity.
        assert_eq!(report.risks.len(), 2);
        assert_eq!(report.risks[0].impact, "critical");
        assert_eq!(report.risks[1].impact, "HIGH");
        assert_eq!(report.actions.len(), 5);
    }

    #[test]
    fn later_sources_contribute_past_an_exhausted_action_cap() {
        let messages: Vec<Value> = (0..15).map(|i| json!({"title": format!("m{i}")})).collect();
        let payloads = SourcePayloads {
            chat: Some(json!({"messages": messages})),
            crm: None,
            documents: None,
            search: Some(json!({"insights": [
                {"topic": "Late signal", "follow_up": "Schedule review"}
            ]})),
        };
        let report = normalize(&payloads);
        assert_eq!(report.actions.len(), MAX_ACTIONS);
        // The action cap was exhausted by chat, yet search still lands its
        // next step - caps are independent and applied at the end.
        assert_eq!(report.next_steps, vec!["Schedule review".to_string()]);
        assert!(report.next_steps.len() <= MAX_NEXT_STEPS);
        assert_eq!(report.sources, vec!["Chat", "Search"]);
    }

    #[test]
    fn empty_default_shapes_yield_green_empty_report() {
        let payloads = SourcePayloads {
            chat: Some(json!({"messages": []})),
            crm: Some(json!({"opportunities": []})),
            documents: Some(json!({"documents": []})),
            search: Some(json!({"insights": []})),
        };
        let report = normalize(&payloads);
        assert!(report.is_empty());
        assert_eq!(AggregateStatus::classify(&report.risks), AggregateStatus::Green);
    }

    #[test]
    fn critical_chat_item_populates_every_collection() {
        let payloads = SourcePayloads {
            chat: Some(json!({"messages": [{
                "title": "API outage", "owner": "Sam", "impact": "Critical",
                "detail": "Prod down", "action": "Page on-call - Sam"
            }]})),
            ..Default::default()
        };
        let report = normalize(&payloads);
        assert_eq!(report.actions.len(), 1);
        assert_eq!(report.accomplishments, vec!["Prod down".to_string()]);
        assert_eq!(report.next_steps, vec!["Page on-call - Sam".to_string()]);
        assert_eq!(report.risks.len(), 1);
        assert_eq!(report.risks[0].impact, "Critical");
        assert_eq!(AggregateStatus::classify(&report.risks), AggregateStatus::Red);
    }
}

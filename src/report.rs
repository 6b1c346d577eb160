//! Pipeline orchestration: source inputs -> unified model -> deck artifact.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde_json::Value;
use thiserror::Error;

use crate::deck::{artifact_file_name, build_deck};
use crate::pptx::{self, PptxError};
use crate::sources::{normalize, SourceKind, SourcePayloads};
use crate::status::AggregateStatus;

/// Default reporting-period label.
pub const DEFAULT_PERIOD: &str = "Current reporting period";
/// Default customer name.
pub const DEFAULT_CUSTOMER: &str = "Ventia";
/// Default engagement name.
pub const DEFAULT_ENGAGEMENT: &str = "Supply Chain";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to render deck: {0}")]
    Render(#[from] PptxError),
    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write artifact {}: {source}", path.display())]
    WriteArtifact {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Run parameters supplied by the CLI layer.
#[derive(Debug, Clone)]
pub struct ReportParams {
    pub period: String,
    pub customer_name: String,
    pub engagement_name: String,
    /// Render date; injectable so tests stay deterministic.
    pub report_date: NaiveDate,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD.to_string(),
            customer_name: DEFAULT_CUSTOMER.to_string(),
            engagement_name: DEFAULT_ENGAGEMENT.to_string(),
            report_date: Local::now().date_naive(),
        }
    }
}

/// Read one source payload. Missing files and parse failures both read as an
/// absent payload - the normalizer treats them as empty collections.
fn read_source(path: &Path) -> Option<Value> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Load all four source payloads from the inputs directory.
pub fn load_payloads(inputs_dir: &Path) -> SourcePayloads {
    SourcePayloads {
        chat: read_source(&inputs_dir.join(SourceKind::Chat.input_file())),
        crm: read_source(&inputs_dir.join(SourceKind::Crm.input_file())),
        documents: read_source(&inputs_dir.join(SourceKind::Documents.input_file())),
        search: read_source(&inputs_dir.join(SourceKind::Search.input_file())),
    }
}

/// Run the full pipeline and write the deck under `outputs_dir`.
///
/// Input reads and rendering are synchronous; the final artifact write is the
/// one async boundary and is awaited here. On failure nothing is retried and
/// no partial-file cleanup is guaranteed. Returns the resolved output path.
pub async fn build_report(
    inputs_dir: &Path,
    outputs_dir: &Path,
    params: &ReportParams,
) -> Result<PathBuf, ReportError> {
    let payloads = load_payloads(inputs_dir);
    let report = normalize(&payloads);
    let status = AggregateStatus::classify(&report.risks);
    let deck = build_deck(&report, status, params);
    let bytes = pptx::write_pptx(&deck)?;

    std::fs::create_dir_all(outputs_dir).map_err(|source| ReportError::OutputDir {
        path: outputs_dir.to_path_buf(),
        source,
    })?;
    let path = outputs_dir.join(artifact_file_name(
        &params.customer_name,
        &params.engagement_name,
        params.report_date,
    ));
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| ReportError::WriteArtifact {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ReportParams {
        ReportParams {
            report_date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn builds_deck_from_materialized_inputs() {
        let root = tempfile::tempdir().unwrap();
        let inputs = root.path().join("inputs");
        std::fs::create_dir_all(&inputs).unwrap();
        std::fs::write(
            inputs.join("chat.json"),
            r#"{"messages": [{"title": "API outage", "owner": "Sam", "impact": "Critical",
                "detail": "Prod down", "action": "Page on-call - Sam"}]}"#,
        )
        .unwrap();

        let outputs = root.path().join("outputs");
        let path = build_report(&inputs, &outputs, &params()).await.unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "ventia_supply-chain_ps_weekly_status_2026-08-07.pptx"
        );
        let bytes = std::fs::read(&path).unwrap();
        assert!(!bytes.is_empty());
        // The artifact is a zip package ("PK" local file header).
        assert_eq!(&bytes[..2], b"PK");
    }

    #[tokio::test]
    async fn missing_and_malformed_inputs_still_produce_a_deck() {
        let root = tempfile::tempdir().unwrap();
        let inputs = root.path().join("inputs");
        std::fs::create_dir_all(&inputs).unwrap();
        std::fs::write(inputs.join("crm.json"), "{not json").unwrap();
        // chat/documents/search files absent entirely.

        let outputs = root.path().join("outputs");
        let path = build_report(&inputs, &outputs, &params()).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn reruns_resolve_to_the_same_artifact_path() {
        let root = tempfile::tempdir().unwrap();
        let inputs = root.path().join("inputs");
        let outputs = root.path().join("outputs");
        let first = build_report(&inputs, &outputs, &params()).await.unwrap();
        let second = build_report(&inputs, &outputs, &params()).await.unwrap();
        assert_eq!(first, second);
    }
}

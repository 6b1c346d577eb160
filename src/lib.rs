//! # Acta
//!
//! Consolidates weekly status signals from four upstream systems (team chat,
//! CRM, document store, knowledge search) into one unified report model and
//! renders it as a fixed-template 11-slide PPTX status deck.
//!
//! ## Pipeline
//!
//! - **Normalize**: schema-tolerant extraction folds four JSON payloads into
//!   one [`UnifiedReport`]
//! - **Classify**: a Green/Amber/Red rollup derived purely from risk
//!   severities
//! - **Render**: a declarative slide template serialized as a PPTX package

pub mod config;
pub mod deck;
pub mod model;
pub mod pptx;
pub mod report;
pub mod sources;
pub mod status;

pub use config::Config;
pub use model::UnifiedReport;
pub use report::{build_report, ReportParams};
pub use sources::{normalize, SourcePayloads};
pub use status::AggregateStatus;

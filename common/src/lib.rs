//! Defect Report Common Library
//!
//! Format-agnostic core shared by the CLI and sibling generators:
//! text segmentation, styled-run building, layout estimation,
//! aggregation, and the spreadsheet emitter.

pub mod aggregate;
pub mod error;
pub mod export;
pub mod layout;
pub mod richtext;
pub mod segment;
pub mod types;

pub use aggregate::{aggregate, category_label, ExportRecord};
pub use error::{Error, Result};
pub use richtext::{fix_runs, item_label, runs_text, FixRun, RunKind};
pub use segment::{segment, Segmented};
pub use types::{
    DefectItem, InspectionPayload, InspectionRow, NamedTable, PhotoRef, ReportContext, RowStatus,
};

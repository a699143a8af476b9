//! Defect report exporter
//!
//! Takes the nested inspection payload (category tables -> checklist
//! rows -> defects), resolves catalog citations, fetches photos, and
//! writes one styled Excel report. The format-agnostic core lives in
//! `defect-report-common`.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;

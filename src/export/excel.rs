//! Excel report driver
//!
//! Orchestration only: aggregate, prefetch photos in record order, hand
//! the records to the emitter core, write the file.

use crate::error::{ReportError, Result};
use crate::fetch::PhotoFetcher;
use chrono::Local;
use defect_report_common::aggregate::{aggregate, ExportRecord};
use defect_report_common::export::{generate_report_buffer, ImageData};
use defect_report_common::types::{NamedTable, ReportContext};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Build the report and write it into `output_dir`.
///
/// Returns `Ok(None)` when no failed row carries a defect; no file is
/// produced in that case. Photos are prefetched strictly in record
/// order because image anchors are written relative to the row in
/// progress; only the two slots of a single record run concurrently.
pub async fn export_report(
    tables: &[NamedTable],
    ctx: &ReportContext,
    fetcher: Option<&PhotoFetcher>,
    output_dir: &Path,
) -> Result<Option<PathBuf>> {
    let records = aggregate(tables, ctx);
    if records.is_empty() {
        return Ok(None);
    }

    let images = match fetcher {
        Some(fetcher) => prefetch_photos(&records, fetcher).await,
        None => HashMap::new(),
    };

    let buffer = generate_report_buffer(&records, |filename| images.get(filename).cloned())
        .map_err(|e| ReportError::ExcelGeneration(e.to_string()))?;

    let output_path = output_dir.join(report_file_name(ctx));
    std::fs::write(&output_path, &buffer)?;
    Ok(Some(output_path))
}

/// Fetch every photo referenced by `records`, record by record. A photo
/// that resolves to `None` is simply absent from the returned map.
async fn prefetch_photos(
    records: &[ExportRecord],
    fetcher: &PhotoFetcher,
) -> HashMap<String, ImageData> {
    let total: u64 = records.iter().map(|r| r.photo_filenames.len() as u64).sum();
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} รูป")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut images = HashMap::new();
    for record in records {
        match record.photo_filenames.as_slice() {
            [] => {}
            [one] => {
                if let Some(image) = fetcher.fetch(one).await {
                    images.insert(one.clone(), image);
                }
                bar.inc(1);
            }
            [first, second, ..] => {
                let (a, b) = tokio::join!(fetcher.fetch(first), fetcher.fetch(second));
                if let Some(image) = a {
                    images.insert(first.clone(), image);
                }
                if let Some(image) = b {
                    images.insert(second.clone(), image);
                }
                bar.inc(2);
            }
        }
    }
    bar.finish_and_clear();
    images
}

/// `{store_code}_{branch}_{timestamp}.xlsx`; the timestamp avoids
/// collisions between runs.
fn report_file_name(ctx: &ReportContext) -> String {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let code = if ctx.store_code.is_empty() {
        "report"
    } else {
        ctx.store_code.as_str()
    };
    if ctx.branch_name.is_empty() {
        format!("{}_{}.xlsx", code, stamp)
    } else {
        format!("{}_{}_{}.xlsx", code, ctx.branch_name, stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_file_name() {
        let ctx = ReportContext {
            store_code: "S-0042".to_string(),
            branch_name: "ลาดพร้าว".to_string(),
            ..Default::default()
        };
        let name = report_file_name(&ctx);
        assert!(name.starts_with("S-0042_ลาดพร้าว_"));
        assert!(name.ends_with(".xlsx"));
    }

    #[test]
    fn test_report_file_name_fallbacks() {
        let name = report_file_name(&ReportContext::default());
        assert!(name.starts_with("report_"));
        assert!(name.ends_with(".xlsx"));
    }
}

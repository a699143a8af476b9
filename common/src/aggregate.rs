//! Flattening of the nested inspection payload into export records
//!
//! One record per defect on a failed row, numbered with a single
//! run-wide sequence. The shared header fields ride on the first record
//! only (merged-header presentation).

use crate::richtext::{self, FixRun};
use crate::types::{NamedTable, ReportContext, RowStatus};

/// One line of the output document. Derived, never persisted.
#[derive(Debug, Clone, Default)]
pub struct ExportRecord {
    /// Global 1-based sequence, across all tables and rows.
    pub sequence_no: u32,
    /// Category label of the source table; empty for unmapped groups.
    pub category: String,
    /// Item-cell text, `"{seq}. {name}"`.
    pub item_label: String,
    /// Fix-cell runs; empty means a blank cell.
    pub fix_runs: Vec<FixRun>,
    /// At most two filenames, input order.
    pub photo_filenames: Vec<String>,
    /// Populated only on the first record of the run.
    pub context: Option<ReportContext>,
}

/// Category label for a table group key. Unknown keys map to an empty
/// string, not an error.
pub fn category_label(group_key: &str) -> &'static str {
    match group_key {
        "structure" => "โครงสร้างอาคาร",
        "electrical" => "ระบบไฟฟ้า",
        "sanitary" => "ระบบสุขาภิบาล",
        "fire" => "ระบบป้องกันอัคคีภัย",
        "environment" => "สภาพแวดล้อมและความสะอาด",
        _ => "",
    }
}

/// Fold state threaded through the table walk; kept explicit so the
/// numbering and first-record rules are testable in isolation.
struct AggState {
    seq: u32,
    first_emitted: bool,
}

/// Flatten `tables` into export records.
///
/// Rows with `status != Ng` or an empty defect list are skipped. An
/// empty result means the export run is a no-op; callers must not emit
/// a zero-row document.
pub fn aggregate(tables: &[NamedTable], ctx: &ReportContext) -> Vec<ExportRecord> {
    let mut records = Vec::new();
    let mut state = AggState {
        seq: 0,
        first_emitted: false,
    };
    for table in tables {
        aggregate_table(table, ctx, &mut state, &mut records);
    }
    records
}

fn aggregate_table(
    table: &NamedTable,
    ctx: &ReportContext,
    state: &mut AggState,
    out: &mut Vec<ExportRecord>,
) {
    let category = category_label(&table.group_key);

    for row in &table.rows {
        if row.status != RowStatus::Ng || row.defects.is_empty() {
            continue;
        }
        for defect in &row.defects {
            state.seq += 1;
            let context = if state.first_emitted {
                None
            } else {
                state.first_emitted = true;
                Some(ctx.clone())
            };

            out.push(ExportRecord {
                sequence_no: state.seq,
                category: category.to_string(),
                item_label: richtext::item_label(Some(state.seq), &defect.display_name),
                fix_runs: richtext::fix_runs(&defect.suggestion_text),
                photo_filenames: defect
                    .photos
                    .iter()
                    .take(2)
                    .map(|p| p.filename.clone())
                    .collect(),
                context,
            });
        }
    }
}

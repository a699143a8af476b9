//! Citation catalog lookup
//!
//! One request per export run resolving catalog-referenced defects into
//! display text. Unlike photo fetches, a catalog failure is fatal: the
//! report would otherwise name defects with empty labels.

use crate::error::{ReportError, Result};
use defect_report_common::types::{NamedTable, RowStatus};
use serde::Deserialize;

/// One legal/technical citation catalog entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CitationEntry {
    pub id: String,
    pub label: String,
    pub suggestion_text: String,
}

/// True when any exported defect references a catalog entry rather
/// than free text (`"other"` ids are free text). Passed rows never
/// reach the report, so their references must not trigger a fetch that
/// could fail the run.
pub fn needs_catalog(tables: &[NamedTable]) -> bool {
    tables
        .iter()
        .flat_map(|t| &t.rows)
        .filter(|r| r.status == RowStatus::Ng && !r.defects.is_empty())
        .flat_map(|r| &r.defects)
        .any(|d| matches!(d.citation_ref_id.as_deref(), Some(id) if id != "other"))
}

/// Fetch the full catalog.
pub async fn fetch_catalog(client: &reqwest::Client, url: &str) -> Result<Vec<CitationEntry>> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ReportError::CatalogFetch(e.to_string()))?;
    if !response.status().is_success() {
        return Err(ReportError::CatalogFetch(format!("HTTP {}", response.status())));
    }
    response
        .json::<Vec<CitationEntry>>()
        .await
        .map_err(|e| ReportError::CatalogFetch(e.to_string()))
}

/// Resolve catalog-referenced defects against catalog entries.
///
/// The catalog label is authoritative for a referenced defect: the
/// display name is derived, never user-supplied, so a stale payload
/// label is replaced. The suggestion text is user-edited and only
/// filled when empty. Unknown ids keep the defect's own fields.
pub fn resolve_defects(tables: &mut [NamedTable], catalog: &[CitationEntry]) {
    for table in tables {
        for row in &mut table.rows {
            for defect in &mut row.defects {
                let Some(id) = defect.citation_ref_id.as_deref() else {
                    continue;
                };
                if id == "other" {
                    continue;
                }
                if let Some(entry) = catalog.iter().find(|e| e.id == id) {
                    defect.display_name = entry.label.clone();
                    if defect.suggestion_text.is_empty() {
                        defect.suggestion_text = entry.suggestion_text.clone();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use defect_report_common::types::{DefectItem, InspectionRow, RowStatus};

    fn table_with(defect: DefectItem) -> NamedTable {
        NamedTable {
            group_key: "fire".to_string(),
            rows: vec![InspectionRow {
                label: String::new(),
                status: RowStatus::Ng,
                defects: vec![defect],
            }],
        }
    }

    #[test]
    fn test_needs_catalog() {
        let free_text = table_with(DefectItem {
            citation_ref_id: Some("other".to_string()),
            display_name: "อื่น ๆ".to_string(),
            ..Default::default()
        });
        assert!(!needs_catalog(&[free_text]));

        let no_ref = table_with(DefectItem::default());
        assert!(!needs_catalog(&[no_ref]));

        let referenced = table_with(DefectItem {
            citation_ref_id: Some("c-101".to_string()),
            ..Default::default()
        });
        assert!(needs_catalog(&[referenced]));
    }

    #[test]
    fn test_passed_rows_never_trigger_catalog_fetch() {
        // A reference on a passed row is never exported, so it must not
        // cost a fetch that could fail the run
        let passed = NamedTable {
            group_key: "fire".to_string(),
            rows: vec![InspectionRow {
                label: String::new(),
                status: RowStatus::Ok,
                defects: vec![DefectItem {
                    citation_ref_id: Some("c-101".to_string()),
                    ..Default::default()
                }],
            }],
        };
        assert!(!needs_catalog(&[passed]));
    }

    #[test]
    fn test_resolve_sets_label_and_fills_empty_suggestion() {
        let mut tables = vec![table_with(DefectItem {
            citation_ref_id: Some("c-101".to_string()),
            display_name: String::new(),
            suggestion_text: "ข้อความเดิม".to_string(),
            ..Default::default()
        })];
        let catalog = vec![CitationEntry {
            id: "c-101".to_string(),
            label: "ทางหนีไฟถูกปิดกั้น".to_string(),
            suggestion_text: "(มาตรา 8) เปิดทางหนีไฟ".to_string(),
        }];

        resolve_defects(&mut tables, &catalog);
        let defect = &tables[0].rows[0].defects[0];
        assert_eq!(defect.display_name, "ทางหนีไฟถูกปิดกั้น");
        // User-edited suggestion text is not overwritten
        assert_eq!(defect.suggestion_text, "ข้อความเดิม");
    }

    #[test]
    fn test_resolve_replaces_stale_label() {
        // For a referenced defect the display name is derived from the
        // catalog, so a stale payload label does not shadow it
        let mut tables = vec![table_with(DefectItem {
            citation_ref_id: Some("c-101".to_string()),
            display_name: "ชื่อเก่าที่ค้างอยู่".to_string(),
            ..Default::default()
        })];
        let catalog = vec![CitationEntry {
            id: "c-101".to_string(),
            label: "ทางหนีไฟถูกปิดกั้น".to_string(),
            suggestion_text: String::new(),
        }];

        resolve_defects(&mut tables, &catalog);
        assert_eq!(tables[0].rows[0].defects[0].display_name, "ทางหนีไฟถูกปิดกั้น");
    }

    #[test]
    fn test_unknown_id_left_as_is() {
        let mut tables = vec![table_with(DefectItem {
            citation_ref_id: Some("missing".to_string()),
            ..Default::default()
        })];
        resolve_defects(&mut tables, &[]);
        assert_eq!(tables[0].rows[0].defects[0].display_name, "");
    }

    #[test]
    fn test_other_id_never_resolved() {
        let mut tables = vec![table_with(DefectItem {
            citation_ref_id: Some("other".to_string()),
            display_name: "ข้อความผู้ใช้".to_string(),
            ..Default::default()
        })];
        let catalog = vec![CitationEntry {
            id: "other".to_string(),
            label: "ไม่ควรถูกใช้".to_string(),
            suggestion_text: String::new(),
        }];
        resolve_defects(&mut tables, &catalog);
        assert_eq!(tables[0].rows[0].defects[0].display_name, "ข้อความผู้ใช้");
    }
}

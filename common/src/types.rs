//! Input data model for the defect report exporter
//!
//! Mirrors the JSON payload assembled by the admin backend:
//! category tables -> checklist rows -> defect items.

use serde::{Deserialize, Serialize};

/// Checklist row result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    /// Passed.
    #[default]
    Ok,
    /// Failed; only these rows reach the report.
    Ng,
}

/// Photo attached to a defect.
///
/// `src` is a transient object URL from a fresh upload; `filename` is
/// the durable handle used to rebuild a fetch URL at export time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhotoRef {
    pub filename: String,
    pub src: Option<String>,
}

/// One reported defect on a checklist row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefectItem {
    /// Citation catalog id, `"other"`, or absent for free text.
    pub citation_ref_id: Option<String>,

    /// Resolved label: catalog name, or user text when there is no
    /// catalog reference.
    pub display_name: String,

    /// Free text; may embed `(...)` citation fragments of its own even
    /// when `citation_ref_id` is set (legacy mixed data).
    pub suggestion_text: String,

    /// Only the first two entries are exported; extras are ignored.
    pub photos: Vec<PhotoRef>,
}

/// One checklist line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InspectionRow {
    pub label: String,
    pub status: RowStatus,
    pub defects: Vec<DefectItem>,
}

/// One category table of checklist rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedTable {
    /// Group key, mapped to a category label at aggregation time.
    pub group_key: String,
    pub rows: Vec<InspectionRow>,
}

/// Header fields shared by the whole export run. Resolved once per
/// invocation, immutable thereafter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportContext {
    pub store_name: String,
    pub branch_name: String,
    pub store_code: String,
    pub inspection_date: String,
}

/// Full input for one export run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InspectionPayload {
    pub context: ReportContext,
    pub tables: Vec<NamedTable>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_status_deserialize() {
        let row: InspectionRow =
            serde_json::from_str(r#"{"label": "ผนังกันไฟ", "status": "ng"}"#)
                .expect("deserialize failed");
        assert_eq!(row.status, RowStatus::Ng);
        assert!(row.defects.is_empty());
    }

    #[test]
    fn test_defect_item_defaults() {
        // Missing fields fall back to empty defaults, never an error
        let defect: DefectItem = serde_json::from_str(r#"{}"#).expect("deserialize failed");
        assert!(defect.citation_ref_id.is_none());
        assert_eq!(defect.display_name, "");
        assert_eq!(defect.suggestion_text, "");
        assert!(defect.photos.is_empty());
    }

    #[test]
    fn test_defect_item_camel_case() {
        let json = r#"{
            "citationRefId": "c-101",
            "displayName": "ถังดับเพลิงหมดอายุ",
            "suggestionText": "(มาตรา 5) เปลี่ยนถังใหม่",
            "photos": [{"filename": "a.jpg"}, {"filename": "b.jpg", "src": "blob:x"}]
        }"#;
        let defect: DefectItem = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(defect.citation_ref_id.as_deref(), Some("c-101"));
        assert_eq!(defect.display_name, "ถังดับเพลิงหมดอายุ");
        assert_eq!(defect.photos.len(), 2);
        assert_eq!(defect.photos[1].src.as_deref(), Some("blob:x"));
    }

    #[test]
    fn test_payload_roundtrip() {
        let payload = InspectionPayload {
            context: ReportContext {
                store_name: "ร้านตัวอย่าง".to_string(),
                branch_name: "สาขาลาดพร้าว".to_string(),
                store_code: "S-0042".to_string(),
                inspection_date: "2026-08-20".to_string(),
            },
            tables: vec![NamedTable {
                group_key: "fire".to_string(),
                rows: vec![InspectionRow {
                    label: "ทางหนีไฟ".to_string(),
                    status: RowStatus::Ng,
                    defects: vec![DefectItem::default()],
                }],
            }],
        };

        let json = serde_json::to_string(&payload).expect("serialize failed");
        assert!(json.contains("\"storeCode\":\"S-0042\""));
        assert!(json.contains("\"groupKey\":\"fire\""));
        assert!(json.contains("\"status\":\"ng\""));

        let restored: InspectionPayload = serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(restored.context, payload.context);
        assert_eq!(restored.tables.len(), 1);
        assert_eq!(restored.tables[0].rows[0].status, RowStatus::Ng);
    }

    #[test]
    fn test_payload_missing_context() {
        let payload: InspectionPayload =
            serde_json::from_str(r#"{"tables": []}"#).expect("deserialize failed");
        assert_eq!(payload.context, ReportContext::default());
    }
}

//! Spreadsheet emitter
//!
//! Drives the segmenter output, run builder, height estimator and image
//! placement into one styled worksheet. Orchestration only: any change
//! to segmentation or estimation belongs in the modules that own them.
//!
//! Image anchors are written relative to the row in progress, so records
//! must be emitted strictly in aggregation order. One export run per
//! workbook; concurrent invocations are not supported.

use crate::aggregate::ExportRecord;
use crate::error::{Error, Result};
use crate::layout::{
    center_offset_px, estimate_lines, px_to_pt, row_height_pt, IMAGE_HEIGHT_PX,
    IMAGE_TOP_INSET_PX, ROW_PADDING_PT,
};
use crate::richtext::{runs_text, RunKind};
use crate::types::ReportContext;
use rust_xlsxwriter::*;

/// Fetched photo bytes plus the sniffed format tag.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub data: Vec<u8>,
    /// "png" or "jpeg"; best-effort tag, not validation.
    pub extension: String,
}

/// Sniff the image format from magic bytes. Unrecognized payloads are
/// tagged "png" and left for the embedding API to reject.
pub fn sniff_image_extension(data: &[u8]) -> &'static str {
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "jpeg"
    } else {
        "png"
    }
}

// Column layout: index, header, width in character units
const COL_SEQ: u16 = 0;
const COL_STORE: u16 = 1;
const COL_DATE: u16 = 2;
const COL_CATEGORY: u16 = 3;
const COL_ITEM: u16 = 4;
const COL_FIX: u16 = 5;
const COL_PHOTO_FIRST: u16 = 6;

pub const ITEM_COL_WIDTH: f64 = 40.0;
pub const FIX_COL_WIDTH: f64 = 45.0;
pub const PHOTO_COL_WIDTH: f64 = 20.0;

const HEADERS: &[(u16, &str, f64)] = &[
    (COL_SEQ, "ลำดับ", 6.0),
    (COL_STORE, "สถานประกอบการ", 22.0),
    (COL_DATE, "วันที่ตรวจ", 14.0),
    (COL_CATEGORY, "หมวด", 18.0),
    (COL_ITEM, "รายการข้อบกพร่อง", ITEM_COL_WIDTH),
    (COL_FIX, "ข้อกฎหมาย / ข้อเสนอแนะ", FIX_COL_WIDTH),
    (COL_PHOTO_FIRST, "รูปภาพ 1", PHOTO_COL_WIDTH),
    (COL_PHOTO_FIRST + 1, "รูปภาพ 2", PHOTO_COL_WIDTH),
];

const HEADER_ROW_HEIGHT_PT: f64 = 24.0;

/// Store display for the context cell: name plus branch when present.
fn store_display(ctx: &ReportContext) -> String {
    if ctx.branch_name.is_empty() {
        ctx.store_name.clone()
    } else {
        format!("{} สาขา {}", ctx.store_name, ctx.branch_name)
    }
}

/// Generate the report workbook into a buffer.
///
/// # Arguments
/// * `records` - aggregated records, already in emission order
/// * `image_loader` - resolves a photo filename to bytes; `None` skips
///   the slot silently
pub fn generate_report_buffer<F>(records: &[ExportRecord], image_loader: F) -> Result<Vec<u8>>
where
    F: Fn(&str) -> Option<ImageData>,
{
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("รายงานข้อบกพร่อง")
        .map_err(|e| Error::Excel(format!("sheet name: {}", e)))?;

    let header_format = Format::new()
        .set_bold()
        .set_font_size(11.0)
        .set_background_color(Color::RGB(0xD9E1F2))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    // Short categorical columns center, long text columns left/top
    let center_format = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::Top)
        .set_text_wrap()
        .set_border(FormatBorder::Thin);

    let text_format = Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::Top)
        .set_text_wrap()
        .set_border(FormatBorder::Thin);

    let photo_cell_format = Format::new().set_border(FormatBorder::Thin);

    // Run-level formats for the fix cell
    let citation_run = Format::new().set_bold().set_font_color(Color::RGB(0xC00000));
    let plain_run = Format::new();

    for (col, title, width) in HEADERS {
        worksheet
            .set_column_width(*col, *width)
            .map_err(|e| Error::Excel(format!("column width: {}", e)))?;
        worksheet
            .write_string_with_format(0, *col, *title, &header_format)
            .map_err(|e| Error::Excel(format!("header: {}", e)))?;
    }
    worksheet
        .set_row_height(0, HEADER_ROW_HEIGHT_PT)
        .map_err(|e| Error::Excel(format!("header height: {}", e)))?;

    let formats = RowFormats {
        center: &center_format,
        text: &text_format,
        photo_cell: &photo_cell_format,
        citation_run: &citation_run,
        plain_run: &plain_run,
    };

    for (idx, record) in records.iter().enumerate() {
        let row = (idx + 1) as u32;
        write_record(worksheet, row, record, &image_loader, &formats)?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Excel(format!("save: {}", e)))
}

struct RowFormats<'a> {
    center: &'a Format,
    text: &'a Format,
    photo_cell: &'a Format,
    citation_run: &'a Format,
    plain_run: &'a Format,
}

fn write_record<F>(
    worksheet: &mut Worksheet,
    row: u32,
    record: &ExportRecord,
    image_loader: &F,
    formats: &RowFormats,
) -> Result<()>
where
    F: Fn(&str) -> Option<ImageData>,
{
    worksheet
        .write_number_with_format(row, COL_SEQ, record.sequence_no as f64, formats.center)
        .map_err(|e| Error::Excel(format!("sequence cell: {}", e)))?;

    // Shared header fields appear on the first record only; later rows
    // keep the cells blank but bordered
    match &record.context {
        Some(ctx) => {
            worksheet
                .write_string_with_format(row, COL_STORE, &store_display(ctx), formats.center)
                .map_err(|e| Error::Excel(format!("store cell: {}", e)))?;
            worksheet
                .write_string_with_format(row, COL_DATE, &ctx.inspection_date, formats.center)
                .map_err(|e| Error::Excel(format!("date cell: {}", e)))?;
        }
        None => {
            worksheet
                .write_blank(row, COL_STORE, formats.center)
                .map_err(|e| Error::Excel(format!("store cell: {}", e)))?;
            worksheet
                .write_blank(row, COL_DATE, formats.center)
                .map_err(|e| Error::Excel(format!("date cell: {}", e)))?;
        }
    }

    worksheet
        .write_string_with_format(row, COL_CATEGORY, &record.category, formats.center)
        .map_err(|e| Error::Excel(format!("category cell: {}", e)))?;

    worksheet
        .write_string_with_format(row, COL_ITEM, &record.item_label, formats.text)
        .map_err(|e| Error::Excel(format!("item cell: {}", e)))?;

    write_fix_cell(worksheet, row, record, formats)?;
    let has_photo = place_photos(worksheet, row, record, image_loader, formats)?;

    // Row height: max over the estimating cells plus the image height
    let item_lines = estimate_lines(&record.item_label, ITEM_COL_WIDTH);
    let fix_lines = estimate_lines(&runs_text(&record.fix_runs), FIX_COL_WIDTH);
    let mut height = row_height_pt(item_lines.max(fix_lines));
    if has_photo {
        height = height.max(px_to_pt(IMAGE_HEIGHT_PX) + ROW_PADDING_PT);
    }
    worksheet
        .set_row_height(row, height)
        .map_err(|e| Error::Excel(format!("row height: {}", e)))?;

    Ok(())
}

/// Fix cell: rich string when a citation run is present, plain string
/// for clean-only text, bordered blank otherwise.
fn write_fix_cell(
    worksheet: &mut Worksheet,
    row: u32,
    record: &ExportRecord,
    formats: &RowFormats,
) -> Result<()> {
    match record.fix_runs.as_slice() {
        [] => {
            worksheet
                .write_blank(row, COL_FIX, formats.text)
                .map_err(|e| Error::Excel(format!("fix cell: {}", e)))?;
        }
        [only] if only.kind == RunKind::Plain => {
            worksheet
                .write_string_with_format(row, COL_FIX, &only.text, formats.text)
                .map_err(|e| Error::Excel(format!("fix cell: {}", e)))?;
        }
        runs => {
            let rich: Vec<(&Format, &str)> = runs
                .iter()
                .map(|run| match run.kind {
                    RunKind::Citation => (formats.citation_run, run.text.as_str()),
                    RunKind::Plain => (formats.plain_run, run.text.as_str()),
                })
                .collect();
            worksheet
                .write_rich_string_with_format(row, COL_FIX, &rich, formats.text)
                .map_err(|e| Error::Excel(format!("fix cell: {}", e)))?;
        }
    }
    Ok(())
}

/// Embed up to two photos in the fixed photo columns, scaled to the
/// shared display height and centered horizontally. A slot whose bytes
/// could not be resolved stays blank.
fn place_photos<F>(
    worksheet: &mut Worksheet,
    row: u32,
    record: &ExportRecord,
    image_loader: &F,
    formats: &RowFormats,
) -> Result<bool>
where
    F: Fn(&str) -> Option<ImageData>,
{
    let mut has_photo = false;

    for slot in 0..2u16 {
        let col = COL_PHOTO_FIRST + slot;
        worksheet
            .write_blank(row, col, formats.photo_cell)
            .map_err(|e| Error::Excel(format!("photo cell: {}", e)))?;

        let Some(filename) = record.photo_filenames.get(slot as usize) else {
            continue;
        };
        let Some(image_data) = image_loader(filename) else {
            continue;
        };

        // A payload that fetched but does not decode (e.g. a proxy
        // answering 200 with an error page) is skipped like a failed
        // fetch; the slot stays blank
        let Ok(image) = Image::new_from_buffer(&image_data.data) else {
            continue;
        };

        let scale = IMAGE_HEIGHT_PX / image.height();
        let display_width = image.width() * scale;
        let image = image
            .set_scale_width(scale)
            .set_scale_height(scale)
            .set_object_movement(ObjectMovement::DontMoveOrSizeWithCells);

        let x_offset = center_offset_px(PHOTO_COL_WIDTH, display_width).round() as u32;
        worksheet
            .insert_image_with_offset(row, col, &image, x_offset, IMAGE_TOP_INSET_PX)
            .map_err(|e| Error::Excel(format!("image embed ({}): {}", filename, e)))?;
        has_photo = true;
    }

    Ok(has_photo)
}

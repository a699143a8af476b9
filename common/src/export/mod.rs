#[cfg(feature = "excel")]
pub mod excel_core;

#[cfg(feature = "excel")]
pub use excel_core::{generate_report_buffer, sniff_image_extension, ImageData};

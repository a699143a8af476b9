use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("การตั้งค่าไม่ถูกต้อง: {0}")]
    Config(String),

    #[error("ไม่พบไฟล์: {0}")]
    FileNotFound(String),

    #[error("ดึงบัญชีข้อกฎหมายไม่สำเร็จ: {0}")]
    CatalogFetch(String),

    #[error("สร้างไฟล์ Excel ไม่สำเร็จ: {0}")]
    ExcelGeneration(String),

    #[error("JSON ไม่ถูกต้อง: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO ผิดพลาด: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP ผิดพลาด: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

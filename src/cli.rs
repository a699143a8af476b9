use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "defect-report")]
#[command(about = "เครื่องมือส่งออกรายงานข้อบกพร่องจากการตรวจสถานประกอบการ", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// สร้างรายงาน Excel จากไฟล์ผลการตรวจ (JSON)
    Export {
        /// ไฟล์ผลการตรวจ (JSON)
        #[arg(required = true)]
        input: PathBuf,

        /// โฟลเดอร์ปลายทาง (ค่าเริ่มต้น: โฟลเดอร์ปัจจุบัน)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// URL พร็อกซีรูปภาพ (แทนค่าในไฟล์ตั้งค่า)
        #[arg(long)]
        proxy_base: Option<String>,

        /// URL ที่เก็บรูปภาพภายนอก
        #[arg(long)]
        remote_base: Option<String>,

        /// URL บัญชีข้อกฎหมาย
        #[arg(long)]
        catalog_url: Option<String>,

        /// ข้ามการดึงรูปภาพทั้งหมด
        #[arg(long)]
        skip_photos: bool,
    },

    /// แสดง/แก้ไขการตั้งค่า
    Config {
        /// ตั้งค่า URL พร็อกซีรูปภาพ
        #[arg(long)]
        set_proxy_base: Option<String>,

        /// ตั้งค่า URL ที่เก็บรูปภาพภายนอก
        #[arg(long)]
        set_remote_base: Option<String>,

        /// ตั้งค่า URL บัญชีข้อกฎหมาย
        #[arg(long)]
        set_catalog_url: Option<String>,

        /// แสดงการตั้งค่าปัจจุบัน
        #[arg(long)]
        show: bool,
    },
}

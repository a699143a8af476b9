use clap::Parser;
use defect_report::{catalog, cli, config, error, export, fetch};

use cli::{Cli, Commands};
use config::Config;
use defect_report_common::types::InspectionPayload;
use error::{ReportError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Export {
            input,
            output,
            proxy_base,
            remote_base,
            catalog_url,
            skip_photos,
        } => {
            println!("📋 defect-report - ส่งออกรายงานข้อบกพร่อง\n");

            if !input.exists() {
                return Err(ReportError::FileNotFound(input.display().to_string()));
            }

            let mut config = config;
            if let Some(v) = proxy_base {
                config.proxy_base = v;
            }
            if let Some(v) = remote_base {
                config.remote_base = v;
            }
            if let Some(v) = catalog_url {
                config.catalog_url = v;
            }

            println!("[1/3] อ่านผลการตรวจ...");
            let content = std::fs::read_to_string(&input)?;
            let mut payload: InspectionPayload = serde_json::from_str(&content)?;
            println!("✔ {} หมวด\n", payload.tables.len());

            let client = reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout_seconds))
                .build()?;

            println!("[2/3] เทียบบัญชีข้อกฎหมาย...");
            if catalog::needs_catalog(&payload.tables) {
                let entries = catalog::fetch_catalog(&client, &config.catalog_url).await?;
                catalog::resolve_defects(&mut payload.tables, &entries);
                println!("✔ บัญชี {} รายการ\n", entries.len());
            } else {
                println!("✔ ไม่มีรายการอ้างอิงบัญชี\n");
            }

            println!("[3/3] ดึงรูปภาพและสร้างรายงาน...");
            let fetcher = if skip_photos {
                None
            } else {
                Some(fetch::PhotoFetcher::new(
                    client,
                    &config.proxy_base,
                    &config.remote_base,
                ))
            };

            let output_dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));
            match export::export_report(
                &payload.tables,
                &payload.context,
                fetcher.as_ref(),
                &output_dir,
            )
            .await?
            {
                Some(path) => {
                    println!("✔ บันทึกแล้ว: {}", path.display());
                    println!("\n✅ เสร็จสิ้น");
                }
                None => {
                    println!("ไม่มีรายการที่ไม่ผ่านการตรวจ จึงไม่สร้างไฟล์รายงาน");
                }
            }
        }

        Commands::Config {
            set_proxy_base,
            set_remote_base,
            set_catalog_url,
            show,
        } => {
            let mut config = config;
            let mut changed = false;

            if let Some(v) = set_proxy_base {
                config.proxy_base = v;
                changed = true;
            }
            if let Some(v) = set_remote_base {
                config.remote_base = v;
                changed = true;
            }
            if let Some(v) = set_catalog_url {
                config.catalog_url = v;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ บันทึกการตั้งค่าแล้ว");
            }

            if show || !changed {
                println!("การตั้งค่า:");
                println!("  พร็อกซีรูปภาพ: {}", config.proxy_base);
                println!("  ที่เก็บรูปภาพ: {}", config.remote_base);
                println!("  บัญชีข้อกฎหมาย: {}", config.catalog_url);
                println!("  timeout: {} วินาที", config.timeout_seconds);
            }
        }
    }

    Ok(())
}

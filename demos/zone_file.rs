//! Zone file export and import using the Cloudflare client.
//!
//! Usage: `cargo run --example zone_file -- export zone.txt`
//! or `cargo run --example zone_file -- import zone.txt`.

use cloudflare_client::{CloudflareClientBuilder, CloudflareResult, DnsRecordOperations};
use std::{env, path::Path};

#[tokio::main]
async fn main() -> CloudflareResult<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let zone_id = env::var("CLOUDFLARE_ZONE_ID").expect("CLOUDFLARE_ZONE_ID not set");
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "export".to_string());
    let file = args.next().unwrap_or_else(|| "zone.txt".to_string());

    let client = CloudflareClientBuilder::from_env()?.build()?;
    let records = client.zones().dns_records();

    match command.as_str() {
        "export" => {
            let zone = records.export(&zone_id).await?;
            tokio::fs::write(&file, &zone)
                .await
                .expect("failed to write zone file");
            println!("Exported {} bytes to {}", zone.len(), file);
        }
        "import" => {
            let response = records.import(&zone_id, Path::new(&file), false).await?;
            match response.result {
                Some(summary) if response.success => println!(
                    "Imported {} of {} parsed records",
                    summary.recs_added, summary.total_records_parsed
                ),
                _ => eprintln!("Import rejected: {:?}", response.errors),
            }
        }
        "scan" => {
            let scan = records.scan(&zone_id).await?.into_result()?;
            println!("Scan added {} records", scan.recs_added);
        }
        other => eprintln!("Unknown command '{}', expected export, import or scan", other),
    }

    Ok(())
}

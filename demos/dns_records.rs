//! DNS record management using the Cloudflare client.
//!
//! This program reads credentials from the environment (or a `.env` file),
//! lists the A records of a zone, creates a TXT record, updates it and
//! removes it again.
//!
//! Run with `RUST_LOG=debug` to see every request.

use cloudflare_client::{
    CloudflareClientBuilder, CloudflareResult, DisplayOptions, DnsContent, DnsRecordFilter,
    DnsRecordOperations, DnsRecordType, ModifiedDnsRecord, NewDnsRecord, OrderType,
};
use std::env;

#[tokio::main]
async fn main() -> CloudflareResult<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let zone_id = env::var("CLOUDFLARE_ZONE_ID").expect("CLOUDFLARE_ZONE_ID not set");
    let record_name = env::var("CLOUDFLARE_TEST_RECORD").unwrap_or_else(|_| "demo".to_string());

    let client = CloudflareClientBuilder::from_env()?.build()?;
    let records = client.zones().dns_records();

    // 1. List the first page of A records, ordered by name.
    let filter = DnsRecordFilter::default().record_type(DnsRecordType::A);
    let display = DisplayOptions::paged(1, 20)?
        .order(OrderType::Asc)
        .order_by("name");
    let page = records.get(&zone_id, Some(&filter), Some(&display)).await?;

    if !page.success {
        eprintln!("Listing rejected: {:?}", page.errors);
        return Ok(());
    }
    for record in page.result.unwrap_or_default() {
        println!(
            "  • {} {} {} (ttl {})",
            record.name,
            record.record_type(),
            record.content.content().unwrap_or_default(),
            record.ttl
        );
    }

    // 2. Create a TXT record.
    let mut new_record = NewDnsRecord::new(
        record_name,
        DnsContent::TXT {
            content: "hello from cloudflare_client".to_string(),
        },
    );
    new_record.ttl = Some(120);
    new_record.comment = Some("created by the dns_records demo".to_string());

    let created = records.add(&zone_id, &new_record).await?.into_result()?;
    println!("\nCreated {} ({})", created.name, created.id);

    // 3. Change only its content.
    let changes = ModifiedDnsRecord {
        content: Some("updated by cloudflare_client".to_string()),
        ..Default::default()
    };
    let updated = records
        .update(&zone_id, &created.id, &changes)
        .await?
        .into_result()?;
    println!("Updated content: {:?}", updated.content.content());

    // 4. Clean up.
    let deleted = records.delete(&zone_id, &created.id).await?.into_result()?;
    println!("Deleted {}", deleted.id);

    // 5. Count every record in the zone.
    let all = records.get_all(&zone_id, None).await?;
    println!("\nZone holds {} records", all.len());

    Ok(())
}

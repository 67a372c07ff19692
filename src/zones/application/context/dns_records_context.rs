//! DNS record operations under `/zones/{zone_id}/dns_records`.

use crate::{
    core::{
        domain::{
            error::CloudflareResult,
            model::{
                api_response::ApiResponse,
                display_options::DisplayOptions,
                dns_record::{
                    DeletedDnsRecord, DnsRecord, DnsRecordImport, DnsRecordScan,
                    ModifiedDnsRecord, NewDnsRecord,
                },
                dns_record_filter::DnsRecordFilter,
            },
        },
        infrastructure::{
            api_client::ApiClient, endpoints::DnsRecordEndpoint, query_builder::build_query,
        },
    },
    zones::application::request::import_request::DnsRecordImportRequest,
};
use async_trait::async_trait;
use log::debug;
use std::path::Path;

/// Page size used by [`DnsRecordOperations::get_all`].
pub const LIST_ALL_PAGE_SIZE: u32 = 100;

/// Operations on the DNS records of a zone.
///
/// Each method performs one HTTP exchange, except [`get_all`](Self::get_all)
/// which walks every page. Provider rejections (`success: false` with a 2xx
/// status) are returned as envelopes; transport, status and decoding failures
/// are returned as `Err`.
#[async_trait]
pub trait DnsRecordOperations: Send + Sync {
    /// Creates a record. `POST zones/{zone_id}/dns_records`
    async fn add(
        &self,
        zone_id: &str,
        record: &NewDnsRecord,
    ) -> CloudflareResult<ApiResponse<DnsRecord>>;

    /// Lists one page of records. `GET zones/{zone_id}/dns_records`
    async fn get(
        &self,
        zone_id: &str,
        filter: Option<&DnsRecordFilter>,
        display: Option<&DisplayOptions>,
    ) -> CloudflareResult<ApiResponse<Vec<DnsRecord>>>;

    /// Fetches a single record. `GET zones/{zone_id}/dns_records/{record_id}`
    async fn get_details(
        &self,
        zone_id: &str,
        record_id: &str,
    ) -> CloudflareResult<ApiResponse<DnsRecord>>;

    /// Applies a partial update. `PUT zones/{zone_id}/dns_records/{record_id}`
    ///
    /// Fields left `None` in `record` are not sent and stay unchanged.
    async fn update(
        &self,
        zone_id: &str,
        record_id: &str,
        record: &ModifiedDnsRecord,
    ) -> CloudflareResult<ApiResponse<DnsRecord>>;

    /// Deletes a record. `DELETE zones/{zone_id}/dns_records/{record_id}`
    async fn delete(
        &self,
        zone_id: &str,
        record_id: &str,
    ) -> CloudflareResult<ApiResponse<DeletedDnsRecord>>;

    /// Exports the zone as BIND zone-file text. `GET zones/{zone_id}/dns_records/export`
    async fn export(&self, zone_id: &str) -> CloudflareResult<String>;

    /// Uploads a zone file. `POST zones/{zone_id}/dns_records/import`
    async fn import_request(
        &self,
        zone_id: &str,
        request: DnsRecordImportRequest,
    ) -> CloudflareResult<ApiResponse<DnsRecordImport>>;

    /// Triggers provider-side record discovery. `POST zones/{zone_id}/dns_records/scan`
    async fn scan(&self, zone_id: &str) -> CloudflareResult<ApiResponse<DnsRecordScan>>;

    /// Reads a zone file from disk and imports it.
    ///
    /// `proxied` decides whether proxiable imported records are proxied.
    async fn import(
        &self,
        zone_id: &str,
        file: &Path,
        proxied: bool,
    ) -> CloudflareResult<ApiResponse<DnsRecordImport>> {
        let request = DnsRecordImportRequest::from_file(file)
            .await?
            .proxied(proxied);
        self.import_request(zone_id, request).await
    }

    /// Lists every record matching `filter`, following pagination.
    ///
    /// # Errors
    /// Fails with `CloudflareError::Rejected` if the provider rejects any page.
    async fn get_all(
        &self,
        zone_id: &str,
        filter: Option<&DnsRecordFilter>,
    ) -> CloudflareResult<Vec<DnsRecord>> {
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let display = DisplayOptions::paged(page, LIST_ALL_PAGE_SIZE)?;
            let response = self.get(zone_id, filter, Some(&display)).await?;
            let info = response.result_info;
            let batch = response.into_result()?;
            let fetched = batch.len();
            records.extend(batch);

            debug!(
                "Fetched page {} of DNS records for zone {} ({} records, {} total)",
                page,
                zone_id,
                fetched,
                records.len()
            );

            match info {
                Some(info) if fetched > 0 && info.has_next_page() => page += 1,
                _ => break,
            }
        }

        Ok(records)
    }
}

/// DNS record operations bound to a client.
#[derive(Debug, Clone, Copy)]
pub struct DnsRecordsContext<'a> {
    api_client: &'a ApiClient,
}

impl<'a> DnsRecordsContext<'a> {
    pub(crate) fn new(api_client: &'a ApiClient) -> Self {
        Self { api_client }
    }
}

#[async_trait]
impl<'a> DnsRecordOperations for DnsRecordsContext<'a> {
    async fn add(
        &self,
        zone_id: &str,
        record: &NewDnsRecord,
    ) -> CloudflareResult<ApiResponse<DnsRecord>> {
        debug!(
            "Creating {} record {} in zone {}",
            record.content.record_type(),
            record.name,
            zone_id
        );
        self.api_client
            .post(&DnsRecordEndpoint::Create.path(zone_id), Some(record))
            .await
    }

    async fn get(
        &self,
        zone_id: &str,
        filter: Option<&DnsRecordFilter>,
        display: Option<&DisplayOptions>,
    ) -> CloudflareResult<ApiResponse<Vec<DnsRecord>>> {
        let query = build_query(filter, display);
        self.api_client
            .get(&DnsRecordEndpoint::List.path(zone_id), &query)
            .await
    }

    async fn get_details(
        &self,
        zone_id: &str,
        record_id: &str,
    ) -> CloudflareResult<ApiResponse<DnsRecord>> {
        self.api_client
            .get(&DnsRecordEndpoint::Details(record_id).path(zone_id), &[])
            .await
    }

    async fn update(
        &self,
        zone_id: &str,
        record_id: &str,
        record: &ModifiedDnsRecord,
    ) -> CloudflareResult<ApiResponse<DnsRecord>> {
        if record.is_empty() {
            debug!(
                "Updating DNS record {} in zone {} with an empty patch",
                record_id, zone_id
            );
        } else {
            debug!("Updating DNS record {} in zone {}", record_id, zone_id);
        }
        self.api_client
            .put(&DnsRecordEndpoint::Update(record_id).path(zone_id), record)
            .await
    }

    async fn delete(
        &self,
        zone_id: &str,
        record_id: &str,
    ) -> CloudflareResult<ApiResponse<DeletedDnsRecord>> {
        debug!("Deleting DNS record {} in zone {}", record_id, zone_id);
        self.api_client
            .delete(&DnsRecordEndpoint::Delete(record_id).path(zone_id))
            .await
    }

    async fn export(&self, zone_id: &str) -> CloudflareResult<String> {
        self.api_client
            .get_text(&DnsRecordEndpoint::Export.path(zone_id))
            .await
    }

    async fn import_request(
        &self,
        zone_id: &str,
        request: DnsRecordImportRequest,
    ) -> CloudflareResult<ApiResponse<DnsRecordImport>> {
        debug!(
            "Importing zone file {} ({} bytes) into zone {}",
            request.file_name(),
            request.contents().len(),
            zone_id
        );
        self.api_client
            .post_multipart(&DnsRecordEndpoint::Import.path(zone_id), request.into_form())
            .await
    }

    async fn scan(&self, zone_id: &str) -> CloudflareResult<ApiResponse<DnsRecordScan>> {
        debug!("Scanning DNS records of zone {}", zone_id);
        self.api_client
            .post::<(), _>(&DnsRecordEndpoint::Scan.path(zone_id), None)
            .await
    }
}

use crate::{
    core::infrastructure::api_client::ApiClient,
    zones::application::context::dns_records_context::DnsRecordsContext,
};

/// Entry point for zone-scoped resources.
#[derive(Debug, Clone, Copy)]
pub struct ZonesContext<'a> {
    api_client: &'a ApiClient,
}

impl<'a> ZonesContext<'a> {
    pub(crate) fn new(api_client: &'a ApiClient) -> Self {
        Self { api_client }
    }

    /// DNS record operations.
    pub fn dns_records(&self) -> DnsRecordsContext<'a> {
        DnsRecordsContext::new(self.api_client)
    }
}

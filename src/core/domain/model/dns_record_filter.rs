use crate::core::domain::model::dns_record::DnsRecordType;

/// Predicate applied to DNS record listings.
///
/// Unset fields do not constrain the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsRecordFilter {
    /// Exact record name.
    pub name: Option<String>,
    /// Exact record content.
    pub content: Option<String>,
    pub record_type: Option<DnsRecordType>,
    /// Require every predicate to match instead of any of them.
    pub match_all: bool,
}

impl DnsRecordFilter {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn record_type(mut self, record_type: DnsRecordType) -> Self {
        self.record_type = Some(record_type);
        self
    }

    pub fn match_all(mut self, match_all: bool) -> Self {
        self.match_all = match_all;
        self
    }
}

//! Endpoint path construction.
//!
//! Identifiers are inserted verbatim; the provider validates them.

pub(crate) const ZONES: &str = "zones";
pub(crate) const DNS_RECORDS: &str = "dns_records";
pub(crate) const EXPORT: &str = "export";
pub(crate) const IMPORT: &str = "import";
pub(crate) const SCAN: &str = "scan";

/// An operation on the DNS records of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DnsRecordEndpoint<'a> {
    List,
    Create,
    Details(&'a str),
    Update(&'a str),
    Delete(&'a str),
    Export,
    Import,
    Scan,
}

impl DnsRecordEndpoint<'_> {
    /// Returns `zones/{zone_id}/dns_records[/{id}][/{action}]`.
    pub(crate) fn path(&self, zone_id: &str) -> String {
        let base = format!("{}/{}/{}", ZONES, zone_id, DNS_RECORDS);
        match self {
            DnsRecordEndpoint::List | DnsRecordEndpoint::Create => base,
            DnsRecordEndpoint::Details(id)
            | DnsRecordEndpoint::Update(id)
            | DnsRecordEndpoint::Delete(id) => format!("{}/{}", base, id),
            DnsRecordEndpoint::Export => format!("{}/{}", base, EXPORT),
            DnsRecordEndpoint::Import => format!("{}/{}", base, IMPORT),
            DnsRecordEndpoint::Scan => format!("{}/{}", base, SCAN),
        }
    }
}

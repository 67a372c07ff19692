//! Domain models for DNS records under `/zones/{zone_id}/dns_records`.
//!
//! Record-type specific fields are modelled by [`DnsContent`], a union keyed
//! by the record `type`, flattened into the record entities.

use crate::core::domain::{error::ValidationError, value_object::serde_helpers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt,
    net::{Ipv4Addr, Ipv6Addr},
    str::FromStr,
};

/// TTL value the provider interprets as "automatic".
pub const AUTOMATIC_TTL: u32 = 1;

/// DNS resource record type.
///
/// Tokens outside the listed set are kept verbatim in [`DnsRecordType::Unknown`],
/// so records of types the provider adds later still parse.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DnsRecordType {
    A,
    AAAA,
    CAA,
    CERT,
    CNAME,
    DNSKEY,
    DS,
    HTTPS,
    LOC,
    MX,
    NAPTR,
    NS,
    PTR,
    SMIMEA,
    SPF,
    SRV,
    SSHFP,
    SVCB,
    TLSA,
    TXT,
    URI,
    Unknown(String),
}

impl DnsRecordType {
    const ALL: [DnsRecordType; 21] = [
        DnsRecordType::A,
        DnsRecordType::AAAA,
        DnsRecordType::CAA,
        DnsRecordType::CERT,
        DnsRecordType::CNAME,
        DnsRecordType::DNSKEY,
        DnsRecordType::DS,
        DnsRecordType::HTTPS,
        DnsRecordType::LOC,
        DnsRecordType::MX,
        DnsRecordType::NAPTR,
        DnsRecordType::NS,
        DnsRecordType::PTR,
        DnsRecordType::SMIMEA,
        DnsRecordType::SPF,
        DnsRecordType::SRV,
        DnsRecordType::SSHFP,
        DnsRecordType::SVCB,
        DnsRecordType::TLSA,
        DnsRecordType::TXT,
        DnsRecordType::URI,
    ];

    /// Returns the wire token, e.g. `"AAAA"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            DnsRecordType::A => "A",
            DnsRecordType::AAAA => "AAAA",
            DnsRecordType::CAA => "CAA",
            DnsRecordType::CERT => "CERT",
            DnsRecordType::CNAME => "CNAME",
            DnsRecordType::DNSKEY => "DNSKEY",
            DnsRecordType::DS => "DS",
            DnsRecordType::HTTPS => "HTTPS",
            DnsRecordType::LOC => "LOC",
            DnsRecordType::MX => "MX",
            DnsRecordType::NAPTR => "NAPTR",
            DnsRecordType::NS => "NS",
            DnsRecordType::PTR => "PTR",
            DnsRecordType::SMIMEA => "SMIMEA",
            DnsRecordType::SPF => "SPF",
            DnsRecordType::SRV => "SRV",
            DnsRecordType::SSHFP => "SSHFP",
            DnsRecordType::SVCB => "SVCB",
            DnsRecordType::TLSA => "TLSA",
            DnsRecordType::TXT => "TXT",
            DnsRecordType::URI => "URI",
            DnsRecordType::Unknown(token) => token,
        }
    }
}

impl fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DnsRecordType {
    type Err = ValidationError;

    /// Known tokens match case-insensitively; any other alphanumeric token
    /// becomes [`DnsRecordType::Unknown`] unchanged.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(known) = Self::ALL.iter().find(|t| t.as_str().eq_ignore_ascii_case(s)) {
            return Ok(known.clone());
        }
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::Format(format!(
                "Invalid DNS record type: '{}'",
                s
            )));
        }
        Ok(DnsRecordType::Unknown(s.to_string()))
    }
}

impl Serialize for DnsRecordType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DnsRecordType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// Record-type specific payload.
///
/// Serialized flat alongside the record's other fields, with `type` as the tag.
/// Types without a dedicated variant round-trip through [`DnsContent::Other`].
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "RawDnsContent", into = "RawDnsContent")]
pub enum DnsContent {
    A { content: Ipv4Addr },
    AAAA { content: Ipv6Addr },
    CNAME { content: String },
    NS { content: String },
    PTR { content: String },
    TXT { content: String },
    MX { content: String, priority: u16 },
    /// `content` and `priority` are the provider's rendering of `data`.
    SRV {
        data: SrvData,
        content: Option<String>,
        priority: Option<u16>,
    },
    CAA {
        data: CaaData,
        content: Option<String>,
    },
    Other {
        record_type: DnsRecordType,
        content: Option<String>,
        priority: Option<u16>,
        data: Option<serde_json::Value>,
    },
}

impl DnsContent {
    /// Returns the record type this payload belongs to.
    #[must_use]
    pub fn record_type(&self) -> DnsRecordType {
        match self {
            DnsContent::A { .. } => DnsRecordType::A,
            DnsContent::AAAA { .. } => DnsRecordType::AAAA,
            DnsContent::CNAME { .. } => DnsRecordType::CNAME,
            DnsContent::NS { .. } => DnsRecordType::NS,
            DnsContent::PTR { .. } => DnsRecordType::PTR,
            DnsContent::TXT { .. } => DnsRecordType::TXT,
            DnsContent::MX { .. } => DnsRecordType::MX,
            DnsContent::SRV { .. } => DnsRecordType::SRV,
            DnsContent::CAA { .. } => DnsRecordType::CAA,
            DnsContent::Other { record_type, .. } => record_type.clone(),
        }
    }

    /// Returns the textual `content` as sent on the wire, if the type has one.
    #[must_use]
    pub fn content(&self) -> Option<String> {
        match self {
            DnsContent::A { content } => Some(content.to_string()),
            DnsContent::AAAA { content } => Some(content.to_string()),
            DnsContent::CNAME { content }
            | DnsContent::NS { content }
            | DnsContent::PTR { content }
            | DnsContent::TXT { content }
            | DnsContent::MX { content, .. } => Some(content.clone()),
            DnsContent::SRV { content, .. }
            | DnsContent::CAA { content, .. }
            | DnsContent::Other { content, .. } => content.clone(),
        }
    }

    /// Returns the record priority, which only MX (and some untyped records) carry.
    #[must_use]
    pub fn priority(&self) -> Option<u16> {
        match self {
            DnsContent::MX { priority, .. } => Some(*priority),
            DnsContent::SRV { data, priority, .. } => Some(priority.unwrap_or(data.priority)),
            DnsContent::Other { priority, .. } => *priority,
            _ => None,
        }
    }
}

/// Structured data of an SRV record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SrvData {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

/// Structured data of a CAA record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CaaData {
    pub flags: u8,
    pub tag: String,
    pub value: String,
}

/// Wire shape of [`DnsContent`].
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RawDnsContent {
    #[serde(rename = "type")]
    record_type: DnsRecordType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

impl RawDnsContent {
    fn require_content(&mut self) -> Result<String, ValidationError> {
        self.content.take().ok_or_else(|| ValidationError::Field {
            field: "content".to_string(),
            message: format!("{} record requires content", self.record_type),
        })
    }

    fn require_data<T: serde::de::DeserializeOwned>(&mut self) -> Result<T, ValidationError> {
        let data = self.data.take().ok_or_else(|| ValidationError::Field {
            field: "data".to_string(),
            message: format!("{} record requires data", self.record_type),
        })?;
        serde_json::from_value(data).map_err(|e| {
            ValidationError::Format(format!("Invalid {} data: {}", self.record_type, e))
        })
    }
}

impl TryFrom<RawDnsContent> for DnsContent {
    type Error = ValidationError;

    fn try_from(mut raw: RawDnsContent) -> Result<Self, Self::Error> {
        let content = match raw.record_type.clone() {
            DnsRecordType::A => {
                let text = raw.require_content()?;
                DnsContent::A {
                    content: text.parse().map_err(|_| {
                        ValidationError::Format(format!("Invalid IPv4 address: {}", text))
                    })?,
                }
            }
            DnsRecordType::AAAA => {
                let text = raw.require_content()?;
                DnsContent::AAAA {
                    content: text.parse().map_err(|_| {
                        ValidationError::Format(format!("Invalid IPv6 address: {}", text))
                    })?,
                }
            }
            DnsRecordType::CNAME => DnsContent::CNAME {
                content: raw.require_content()?,
            },
            DnsRecordType::NS => DnsContent::NS {
                content: raw.require_content()?,
            },
            DnsRecordType::PTR => DnsContent::PTR {
                content: raw.require_content()?,
            },
            DnsRecordType::TXT => DnsContent::TXT {
                content: raw.require_content()?,
            },
            DnsRecordType::MX => DnsContent::MX {
                content: raw.require_content()?,
                priority: raw.priority.ok_or_else(|| ValidationError::Field {
                    field: "priority".to_string(),
                    message: "MX record requires priority".to_string(),
                })?,
            },
            DnsRecordType::SRV => DnsContent::SRV {
                data: raw.require_data()?,
                content: raw.content,
                priority: raw.priority,
            },
            DnsRecordType::CAA => DnsContent::CAA {
                data: raw.require_data()?,
                content: raw.content,
            },
            record_type => DnsContent::Other {
                record_type,
                content: raw.content,
                priority: raw.priority,
                data: raw.data,
            },
        };
        Ok(content)
    }
}

impl From<DnsContent> for RawDnsContent {
    fn from(content: DnsContent) -> Self {
        let record_type = content.record_type();
        let text = content.content();
        let (priority, data) = match content {
            DnsContent::MX { priority, .. } => (Some(priority), None),
            DnsContent::SRV { data, priority, .. } => (priority, serde_json::to_value(data).ok()),
            DnsContent::CAA { data, .. } => (None, serde_json::to_value(data).ok()),
            DnsContent::Other { priority, data, .. } => (priority, data),
            _ => (None, None),
        };
        RawDnsContent {
            record_type,
            content: text,
            priority,
            data,
        }
    }
}

/// A DNS record as returned by the provider.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DnsRecord {
    /// Provider-assigned identifier, unique within the zone.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    /// Fully qualified record name.
    pub name: String,
    #[serde(flatten)]
    pub content: DnsContent,
    /// Time to live in seconds; [`AUTOMATIC_TTL`] means automatic.
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxiable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<String>,
}

impl DnsRecord {
    #[must_use]
    pub fn record_type(&self) -> DnsRecordType {
        self.content.record_type()
    }
}

/// Payload for creating a record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewDnsRecord {
    pub name: String,
    #[serde(flatten)]
    pub content: DnsContent,
    /// Omitted means the provider default (automatic).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl NewDnsRecord {
    /// Creates a record payload with provider defaults for everything but name and content.
    pub fn new(name: impl Into<String>, content: DnsContent) -> Self {
        Self {
            name: name.into(),
            content,
            ttl: None,
            proxied: None,
            comment: None,
            tags: Vec::new(),
        }
    }
}

/// Partial update payload.
///
/// Only fields that are `Some` are serialized; the provider leaves every
/// other field of the record unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ModifiedDnsRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<DnsRecordType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ModifiedDnsRecord {
    /// Returns true when the payload would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Result of a delete: only the identifier of the removed record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeletedDnsRecord {
    pub id: String,
}

/// Summary of a zone-file import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsRecordImport {
    pub recs_added: u32,
    pub total_records_parsed: u32,
}

/// Summary of a provider-side record scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsRecordScan {
    pub recs_added: u32,
    pub total_records_parsed: u32,
}

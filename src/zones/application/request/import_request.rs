use crate::core::domain::error::{CloudflareError, CloudflareResult};
use reqwest::multipart::{Form, Part};
use std::path::Path;

const FILE_FIELD: &str = "file";
const PROXIED_FIELD: &str = "proxied";
const DEFAULT_FILE_NAME: &str = "zone.txt";

/// A BIND zone file to upload to `/zones/{zone_id}/dns_records/import`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecordImportRequest {
    file_name: String,
    contents: Vec<u8>,
    proxied: bool,
}

impl DnsRecordImportRequest {
    /// Creates a request from in-memory zone file contents.
    pub fn new(file_name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
            proxied: false,
        }
    }

    /// Reads the zone file from disk.
    ///
    /// # Errors
    /// Returns `CloudflareError::File` if the file cannot be read.
    pub async fn from_file(path: impl AsRef<Path>) -> CloudflareResult<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path)
            .await
            .map_err(|source| CloudflareError::File {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
        Ok(Self::new(file_name, contents))
    }

    /// Whether imported records that can be proxied should be proxied.
    pub fn proxied(mut self, proxied: bool) -> Self {
        self.proxied = proxied;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn is_proxied(&self) -> bool {
        self.proxied
    }

    pub(crate) fn into_form(self) -> Form {
        Form::new()
            .part(
                FILE_FIELD,
                Part::bytes(self.contents).file_name(self.file_name),
            )
            .text(PROXIED_FIELD, self.proxied.to_string())
    }
}

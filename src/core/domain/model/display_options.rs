use crate::core::domain::error::{CloudflareResult, ValidationError};
use std::num::NonZeroU32;

/// Sort direction of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    Asc,
    Desc,
}

impl OrderType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Asc => "asc",
            OrderType::Desc => "desc",
        }
    }
}

/// Pagination and ordering of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub page: Option<NonZeroU32>,
    pub per_page: Option<NonZeroU32>,
    pub order: Option<OrderType>,
    /// Field to sort by, passed through verbatim (e.g. `"type"`, `"name"`).
    pub order_by: Option<String>,
}

impl DisplayOptions {
    /// Creates options for one page of a listing.
    ///
    /// # Errors
    /// Returns `CloudflareError::Validation` when `page` or `per_page` is zero.
    pub fn paged(page: u32, per_page: u32) -> CloudflareResult<Self> {
        Ok(Self {
            page: Some(positive("page", page)?),
            per_page: Some(positive("per_page", per_page)?),
            ..Self::default()
        })
    }

    pub fn order(mut self, order: OrderType) -> Self {
        self.order = Some(order);
        self
    }

    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(field.into());
        self
    }
}

fn positive(field: &str, value: u32) -> Result<NonZeroU32, ValidationError> {
    NonZeroU32::new(value).ok_or_else(|| ValidationError::Field {
        field: field.to_string(),
        message: "must be at least 1".to_string(),
    })
}

//! Translation of filter and display options into query parameters.

use crate::core::domain::model::{
    display_options::DisplayOptions, dns_record_filter::DnsRecordFilter,
};

pub(crate) const PAGE: &str = "page";
pub(crate) const PER_PAGE: &str = "per_page";
pub(crate) const ORDER: &str = "order";
pub(crate) const ORDER_BY: &str = "order_by";
pub(crate) const NAME: &str = "name";
pub(crate) const CONTENT: &str = "content";
pub(crate) const TYPE: &str = "type";
pub(crate) const MATCH: &str = "match";

/// Ordered query key/value pairs.
pub(crate) type QueryPairs = Vec<(&'static str, String)>;

/// Types that contribute query parameters to a request.
///
/// Only fields that differ from their default are emitted.
pub(crate) trait QueryParameters {
    fn query_pairs(&self) -> QueryPairs;
}

impl QueryParameters for DisplayOptions {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(page) = self.page {
            pairs.push((PAGE, page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push((PER_PAGE, per_page.to_string()));
        }
        if let Some(order) = self.order {
            pairs.push((ORDER, order.as_str().to_string()));
        }
        if let Some(order_by) = &self.order_by {
            pairs.push((ORDER_BY, order_by.clone()));
        }
        pairs
    }
}

impl QueryParameters for DnsRecordFilter {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(name) = &self.name {
            pairs.push((NAME, name.clone()));
        }
        if let Some(content) = &self.content {
            pairs.push((CONTENT, content.clone()));
        }
        if let Some(record_type) = &self.record_type {
            pairs.push((TYPE, record_type.as_str().to_string()));
        }
        if self.match_all {
            pairs.push((MATCH, "all".to_string()));
        }
        pairs
    }
}

/// Builds the query of a listing: display options first, then the filter.
pub(crate) fn build_query(
    filter: Option<&DnsRecordFilter>,
    display: Option<&DisplayOptions>,
) -> QueryPairs {
    let mut pairs = display.map(QueryParameters::query_pairs).unwrap_or_default();
    pairs.extend(filter.map(QueryParameters::query_pairs).unwrap_or_default());
    pairs
}

//! Limit/offset pagination for the named-resource list endpoints
//! (`/pokemon`, `/type`).

use url::Url;

use super::Query;

/// Page window for a list endpoint. The upstream defaults to 20 entries
/// starting at offset 0 when either parameter is left out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Maximum number of entries to return. `None` uses the API default.
    pub limit: Option<u32>,
    /// Number of entries to skip.
    pub offset: Option<u32>,
}

impl Query for ListQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        if let Some(offset) = self.offset {
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string());
        }
        url
    }
}

impl ListQuery {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

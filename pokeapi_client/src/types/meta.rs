use serde::{Deserialize, Serialize};

/// A `{name, url}` reference to another upstream resource.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Numeric id taken from the last path segment of the resource URL
    /// (`.../pokemon/25/` -> `25`).
    pub fn id(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}

/// One page of a named-resource list endpoint.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NamedResourceList {
    /// Total number of resources the endpoint knows about, across all pages.
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

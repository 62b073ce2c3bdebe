use serde::{Deserialize, Deserializer, Serialize};

/// One page of a resource listing: `{content, totalPages, totalElements}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub content: Vec<T>,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_pages: u32, total_elements: u64) -> Self {
        Self {
            content,
            total_pages,
            total_elements,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, 0)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Arguments handed to a paginated producer
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
    pub search: String,
}

impl PageQuery {
    pub fn new(page: u32, size: u32, search: impl Into<String>) -> Self {
        Self {
            page,
            size,
            search: search.into(),
        }
    }

    /// `page`, `size`, and `search` only when it is not blank
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        let term = self.search.trim();
        if !term.is_empty() {
            params.push(("search", term.to_string()));
        }
        params
    }
}

//! Pagination engine for list endpoints.
//!
//! A [`Page`] is a window over an ordered collection plus the metadata list
//! endpoints return: total result/page counts and next/previous page URLs.
//! Its serialized form **is** the wire list document, so the fake controller
//! builds pages and the client deserializes them with the same type.

use serde::{Deserialize, Serialize};

const DEFAULT_PAGE: usize = 1;
const DEFAULT_PER_PAGE: usize = 10;

/// Parameters of a paginated query (`page`, `results-per-page`).
///
/// Parsing is lenient: missing, non-numeric, or zero values silently fall
/// back to the defaults (page 1, 10 results per page) rather than being
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// Page number, 1-indexed.
    pub page: usize,
    /// Number of items per page.
    pub per_page: usize,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageQuery {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// Build a query from raw `page` / `results-per-page` parameter values,
    /// defaulting each independently on absence or parse failure.
    pub fn from_params(page: Option<&str>, per_page: Option<&str>) -> Self {
        Self {
            page: parse_or(page, DEFAULT_PAGE),
            per_page: parse_or(per_page, DEFAULT_PER_PAGE),
        }
    }
}

fn parse_or(value: Option<&str>, default: usize) -> usize {
    match value.and_then(|v| v.parse::<usize>().ok()) {
        Some(n) if n >= 1 => n,
        _ => default,
    }
}

impl<'de> Deserialize<'de> for PageQuery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            page: Option<String>,
            #[serde(default, rename = "results-per-page")]
            results_per_page: Option<String>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::from_params(
            raw.page.as_deref(),
            raw.results_per_page.as_deref(),
        ))
    }
}

/// One window of an ordered collection, in the wire list-document shape.
///
/// Constructed fresh per request from the current state of the backing
/// collection; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub total_results: usize,
    pub total_pages: usize,
    #[serde(default)]
    pub prev_url: Option<String>,
    #[serde(default)]
    pub next_url: Option<String>,
    pub resources: Vec<T>,
}

impl<T: Clone> Page<T> {
    /// Compute the window of `items` selected by `query`.
    ///
    /// `base_path` is the path of the list endpoint (no query string); next
    /// and previous URLs are built from it and the adjacent page numbers,
    /// and omitted at the last and first page respectively. A page past the
    /// end yields an empty window with the counts intact.
    pub fn build(items: &[T], base_path: &str, query: PageQuery) -> Self {
        let page = query.page.max(1);
        let per_page = query.per_page.max(1);

        let total_results = items.len();
        let total_pages = if total_results == 0 {
            0
        } else {
            total_results.div_ceil(per_page)
        };

        let start = (page - 1).saturating_mul(per_page);
        let end = usize::min(start.saturating_add(per_page), total_results);
        let resources = if start >= total_results {
            Vec::new()
        } else {
            items[start..end].to_vec()
        };

        Self {
            total_results,
            total_pages,
            prev_url: (page > 1).then(|| page_url(base_path, page - 1, per_page)),
            next_url: (page < total_pages).then(|| page_url(base_path, page + 1, per_page)),
            resources,
        }
    }
}

impl<T> Page<T> {
    /// Convert the resources while preserving the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            total_results: self.total_results,
            total_pages: self.total_pages,
            prev_url: self.prev_url,
            next_url: self.next_url,
            resources: self.resources.into_iter().map(f).collect(),
        }
    }
}

fn page_url(base_path: &str, page: usize, per_page: usize) -> String {
    format!("{base_path}?page={page}&results-per-page={per_page}")
}

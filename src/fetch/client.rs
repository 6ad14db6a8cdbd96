use crate::error::Error;
use crate::fetch::params::SearchParams;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru/vacancies";

/// Envelope returned by the vacancies endpoint, and the shape of a
/// merged multi-page fetch: the item list plus result counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VacancyPage {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub found: u64,
    #[serde(default)]
    pub pages: u64,
}

/// Blocking client for the vacancy search API. One request at a time;
/// no retries.
pub struct VacancyClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl VacancyClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        VacancyClient {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch a single page exactly as addressed by `params`. The body is
    /// returned untouched; a transport or HTTP error fails the call.
    pub fn fetch_page(&self, params: &SearchParams) -> Result<Value, Error> {
        let query = params.to_query();
        debug!("GET {} (page {})", self.base_url, params.page);

        self.http
            .get(&self.base_url)
            .query(&query)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.json::<Value>())
            .map_err(|source| Error::Request {
                url: self.base_url.clone(),
                source,
            })
    }

    /// Fetch the given pages sequentially and merge them into one
    /// envelope. A page that fails is logged and skipped, so partial
    /// results still come back; `found` and `pages` are taken from the
    /// first page that succeeds.
    pub fn fetch_pages(&self, params: &SearchParams, pages: &[u32]) -> VacancyPage {
        let mut merged = VacancyPage::default();
        let mut take_counters = true;

        for &page in pages {
            match self.fetch_page(&params.with_page(page)) {
                Ok(body) => match serde_json::from_value::<VacancyPage>(body) {
                    Ok(fetched) => {
                        merge_page(&mut merged, fetched, take_counters);
                        take_counters = false;
                    }
                    Err(err) => warn!("page {page} returned an unexpected shape: {err}"),
                },
                Err(err) => warn!("skipping page {page}: {err}"),
            }
        }

        merged
    }

    /// Probe the total page count for a search (page 0, one item per
    /// page), backing the fetch-everything mode.
    pub fn total_pages(&self, params: &SearchParams) -> Result<u64, Error> {
        let mut probe = params.with_page(0);
        probe.per_page = 1;

        let body = self.fetch_page(&probe)?;
        Ok(body.get("pages").and_then(Value::as_u64).unwrap_or(1))
    }
}

impl Default for VacancyClient {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_page(merged: &mut VacancyPage, fetched: VacancyPage, take_counters: bool) {
    if take_counters {
        merged.found = fetched.found;
        merged.pages = fetched.pages;
    }
    merged.items.extend(fetched.items);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_parses_with_missing_counters() {
        let page: VacancyPage = serde_json::from_value(json!({
            "items": [{"name": "A"}]
        }))
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.found, 0);
        assert_eq!(page.pages, 0);
    }

    #[test]
    fn test_envelope_ignores_extra_metadata() {
        let page: VacancyPage = serde_json::from_value(json!({
            "items": [],
            "found": 12,
            "pages": 3,
            "per_page": 4,
            "clusters": null
        }))
        .unwrap();
        assert_eq!(page.found, 12);
        assert_eq!(page.pages, 3);
    }

    #[test]
    fn test_merge_concatenates_items_in_order() {
        let mut merged = VacancyPage::default();
        merge_page(
            &mut merged,
            VacancyPage {
                items: vec![json!({"id": 1})],
                found: 5,
                pages: 3,
            },
            true,
        );
        merge_page(
            &mut merged,
            VacancyPage {
                items: vec![json!({"id": 2}), json!({"id": 3})],
                found: 999,
                pages: 999,
            },
            false,
        );

        assert_eq!(merged.items.len(), 3);
        assert_eq!(merged.items[0], json!({"id": 1}));
        // Counters come from the first merged page only.
        assert_eq!(merged.found, 5);
        assert_eq!(merged.pages, 3);
    }

    #[test]
    fn test_counters_come_from_first_successful_page() {
        // If the first requested page failed, the first page that merges
        // still supplies the counters.
        let mut merged = VacancyPage::default();
        merge_page(
            &mut merged,
            VacancyPage {
                items: vec![],
                found: 42,
                pages: 2,
            },
            true,
        );
        assert_eq!(merged.found, 42);
    }

    #[test]
    fn test_merged_envelope_serializes_back_to_json() {
        let merged = VacancyPage {
            items: vec![json!({"id": 1})],
            found: 1,
            pages: 1,
        };
        let value = serde_json::to_value(&merged).unwrap();
        assert_eq!(value, json!({"items": [{"id": 1}], "found": 1, "pages": 1}));
    }
}

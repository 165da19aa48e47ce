//! Google Books volumes API client

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::{
    BookCatalog, BookSummary, CatalogError, UNKNOWN, UNTITLED, VolumeDetail, VolumePage,
    VolumeSearch,
};

#[derive(Debug, Deserialize)]
struct GoogleBooksResponse {
    #[serde(rename = "totalItems", default)]
    total_items: u64,
    items: Option<Vec<GoogleBookItem>>,
}

#[derive(Debug, Deserialize)]
struct GoogleBookItem {
    #[serde(default)]
    id: String,
    #[serde(rename = "volumeInfo", default)]
    volume_info: GoogleVolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleVolumeInfo {
    title: Option<String>,
    subtitle: Option<String>,
    authors: Option<Vec<String>>,
    publisher: Option<String>,
    published_date: Option<String>,
    description: Option<String>,
    page_count: Option<u32>,
    categories: Option<Vec<String>>,
    language: Option<String>,
    preview_link: Option<String>,
    image_links: Option<GoogleImageLinks>,
}

#[derive(Debug, Deserialize)]
struct GoogleImageLinks {
    thumbnail: Option<String>,
    // smallThumbnail is also available but often too small
}

impl From<GoogleBookItem> for BookSummary {
    fn from(item: GoogleBookItem) -> Self {
        let info = item.volume_info;

        let authors = match info.authors {
            Some(authors) if !authors.is_empty() => authors.join(", "),
            _ => UNKNOWN.to_string(),
        };

        Self {
            external_id: item.id,
            title: info.title.unwrap_or_else(|| UNTITLED.to_string()),
            authors,
            publisher: info.publisher.unwrap_or_else(|| UNKNOWN.to_string()),
            published_date: info.published_date.unwrap_or_else(|| UNKNOWN.to_string()),
            thumbnail_url: info.image_links.and_then(|links| links.thumbnail),
        }
    }
}

impl From<GoogleBookItem> for VolumeDetail {
    fn from(mut item: GoogleBookItem) -> Self {
        let info = &mut item.volume_info;
        let subtitle = info.subtitle.take();
        let description = info.description.take();
        let page_count = info.page_count.take();
        let categories = info.categories.take().unwrap_or_default();
        let language = info.language.take();
        let preview_link = info.preview_link.take();

        Self {
            summary: BookSummary::from(item),
            subtitle,
            description,
            page_count,
            categories,
            language,
            preview_link,
        }
    }
}

/// HTTP client for the Google Books volumes API
#[derive(Debug, Clone)]
pub struct GoogleBooksClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GoogleBooksClient {
    /// `base_url` is the API root, e.g. `https://www.googleapis.com/books/v1`
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn volumes_url(&self) -> Result<Url, CatalogError> {
        Url::parse(&format!("{}/volumes", self.base_url))
            .map_err(|e| CatalogError::InvalidResponse(format!("Invalid base URL: {}", e)))
    }

    fn append_key(&self, url: &mut Url) {
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, CatalogError> {
        self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout
            } else {
                CatalogError::Network(e.to_string())
            }
        })
    }
}

#[async_trait]
impl BookCatalog for GoogleBooksClient {
    async fn search_volumes(&self, request: &VolumeSearch) -> Result<VolumePage, CatalogError> {
        let mut url = self.volumes_url()?;
        url.query_pairs_mut()
            .append_pair("q", &request.query)
            .append_pair("maxResults", &request.max_results.to_string())
            .append_pair("startIndex", &request.start_index.to_string())
            .append_pair("printType", "books");
        self.append_key(&mut url);

        tracing::debug!(
            "Google Books search q={:?} startIndex={} maxResults={}",
            request.query,
            request.start_index,
            request.max_results
        );

        let resp = self.get(url).await?;
        if !resp.status().is_success() {
            return Err(CatalogError::Api {
                status: resp.status().as_u16(),
            });
        }

        let parsed: GoogleBooksResponse = resp
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))?;

        Ok(VolumePage {
            total_items: parsed.total_items,
            items: parsed
                .items
                .unwrap_or_default()
                .into_iter()
                .map(BookSummary::from)
                .collect(),
        })
    }

    async fn get_volume(&self, volume_id: &str) -> Result<Option<VolumeDetail>, CatalogError> {
        let mut url = self.volumes_url()?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidResponse("Base URL cannot have a path".to_string()))?
            .push(volume_id);
        self.append_key(&mut url);

        tracing::debug!("Google Books lookup id={:?}", volume_id);

        let resp = self.get(url).await?;
        match resp.status() {
            StatusCode::NOT_FOUND => return Ok(None),
            status if !status.is_success() => {
                return Err(CatalogError::Api {
                    status: status.as_u16(),
                });
            }
            _ => {}
        }

        let item: GoogleBookItem = resp
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))?;

        Ok(Some(VolumeDetail::from(item)))
    }
}

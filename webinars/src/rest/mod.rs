pub mod endpoints;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use crate::config::ZoomConfig;
use crate::error::{Result, ZoomError};
use crate::types::{Page, PaginationRequest};

/// HTTP client wrapper for the Zoom REST API.
///
/// Every call takes a [`CancellationToken`]. The whole round trip, body read
/// included, is raced against it; on cancellation the in-flight future is
/// dropped, which releases the connection.
#[derive(Debug, Clone)]
pub struct ZoomHttpClient {
    client: Client,
    base_url: Url,
    access_token: Option<String>,
}

impl ZoomHttpClient {
    /// Client without credentials, mostly useful against mock servers.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_config(&ZoomConfig::default().with_base_url(base_url))
    }

    pub fn from_config(config: &ZoomConfig) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(|e| ZoomError::Config(format!("invalid base url {:?}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ZoomError::Config(format!(
                "base url {:?} cannot carry a path",
                config.base_url
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ZoomError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            access_token: config.access_token.clone(),
        })
    }

    /// Base URL with `segments` appended, each one percent-encoded.
    pub fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ZoomError::Config("base url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.url_for(segments)?;
        debug!(%method, %url, "dispatching request");
        let mut req = self
            .client
            .request(method, url)
            .header("accept", "application/json");
        if let Some(token) = &self.access_token {
            req = req.bearer_auth(token);
        }
        Ok(req)
    }

    /// Send the request and read the whole body, unless `cancel` fires first.
    async fn execute(&self, req: RequestBuilder, cancel: &CancellationToken) -> Result<Vec<u8>> {
        if cancel.is_cancelled() {
            return Err(ZoomError::Cancelled);
        }

        let round_trip = async {
            let resp = req.send().await?;
            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                warn!(status = status.as_u16(), "request failed");
                return Err(ZoomError::RemoteRequestFailed {
                    status: Some(status.as_u16()),
                    message: body,
                });
            }
            Ok::<_, ZoomError>(resp.bytes().await?.to_vec())
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("request cancelled");
                Err(ZoomError::Cancelled)
            }
            result = round_trip => result,
        }
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        cancel: &CancellationToken,
    ) -> Result<T> {
        let req = self.request(Method::GET, segments)?.query(query);
        let body = self.execute(req, cancel).await?;
        decode(&body)
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<T> {
        let req = self.request(Method::POST, segments)?.json(body);
        let body = self.execute(req, cancel).await?;
        decode(&body)
    }

    /// DELETE a resource. Any response body is discarded.
    pub async fn delete(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        cancel: &CancellationToken,
    ) -> Result<()> {
        let req = self.request(Method::DELETE, segments)?.query(query);
        self.execute(req, cancel).await?;
        Ok(())
    }

    /// Fetch exactly one page of a listing.
    ///
    /// `listing_key` names the array in the response envelope (e.g.
    /// `webinars`). Never advances on its own; ask for
    /// [`PaginationRequest::next`] to get the following page.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        listing_key: &str,
        page: PaginationRequest,
        cancel: &CancellationToken,
    ) -> Result<Page<T>> {
        let page_size = page.page_size().to_string();
        let page_number = page.page_number().to_string();
        let req = self
            .request(Method::GET, segments)?
            .query(&[("page_size", page_size.as_str()), ("page", page_number.as_str())]);
        let body = self.execute(req, cancel).await?;
        let decoded = decode_page(&body, listing_key, page)?;
        debug!(
            listing_key,
            page_number = decoded.page_number,
            items = decoded.items.len(),
            total_records = decoded.total_records,
            "decoded page"
        );
        Ok(decoded)
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| ZoomError::DecodingFailed(e.to_string()))
}

/// Pagination fields shared by every listing envelope; the listing array
/// itself lands in `rest`.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    page_count: Option<u32>,
    #[serde(default)]
    page_number: Option<u32>,
    #[serde(default)]
    page_size: Option<u32>,
    #[serde(default)]
    total_records: Option<u64>,
    #[serde(default)]
    next_page_token: Option<String>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// Decode a listing envelope into a [`Page`].
///
/// Metadata the server leaves out falls back to the request (page number,
/// page size) or is derived from what is present (total pages).
pub(crate) fn decode_page<T: DeserializeOwned>(
    body: &[u8],
    listing_key: &str,
    request: PaginationRequest,
) -> Result<Page<T>> {
    let mut envelope: Envelope = decode(body)?;

    let items: Vec<T> = match envelope.rest.remove(listing_key) {
        Some(Value::Null) => Vec::new(),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| ZoomError::DecodingFailed(format!("{listing_key}: {e}")))?,
        None => {
            return Err(ZoomError::DecodingFailed(format!(
                "response envelope has no `{listing_key}` field"
            )))
        }
    };

    let page_size = envelope.page_size.unwrap_or(request.page_size());
    let total_records = envelope.total_records.unwrap_or(items.len() as u64);
    let total_pages = match envelope.page_count {
        Some(count) => count,
        None if page_size == 0 => 0,
        None => u32::try_from(total_records.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX),
    };

    Ok(Page {
        items,
        page_number: envelope.page_number.unwrap_or(request.page_number()),
        page_size,
        total_records,
        total_pages,
        next_page_token: envelope.next_page_token.filter(|t| !t.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_page() -> PaginationRequest {
        PaginationRequest::new(30, 1).unwrap()
    }

    #[test]
    fn url_for_appends_segments() {
        let client = ZoomHttpClient::new("https://api.zoom.us/v2/").unwrap();
        let url = client.url_for(&["users", "me", "webinars"]).unwrap();
        assert_eq!(url.as_str(), "https://api.zoom.us/v2/users/me/webinars");
    }

    #[test]
    fn url_for_encodes_segments() {
        let client = ZoomHttpClient::new("http://localhost:9000").unwrap();
        let url = client.url_for(&["users", "a b/c", "webinars"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/users/a%20b%2Fc/webinars");
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let err = ZoomHttpClient::new("not a url").unwrap_err();
        assert!(matches!(err, ZoomError::Config(_)));
    }

    #[test]
    fn decode_page_reads_envelope() {
        let body = br#"{
            "page_count": 3,
            "page_number": 2,
            "page_size": 30,
            "total_records": 75,
            "next_page_token": "",
            "webinars": [1, 2, 3]
        }"#;
        let page: Page<u32> = decode_page(body, "webinars", first_page()).unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.page_number, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_records, 75);
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn decode_page_derives_total_pages() {
        let body = br#"{"page_size": 300, "total_records": 301, "webinars": []}"#;
        let page: Page<u32> = decode_page(body, "webinars", first_page()).unwrap();
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page_number, 1);
    }

    #[test]
    fn decode_page_requires_listing_key() {
        let body = br#"{"page_count": 1, "total_records": 0, "meetings": []}"#;
        let err = decode_page::<u32>(body, "webinars", first_page()).unwrap_err();
        assert!(matches!(err, ZoomError::DecodingFailed(_)));
    }

    #[test]
    fn decode_page_rejects_wrong_item_shape() {
        let body = br#"{"webinars": ["not a number"]}"#;
        let err = decode_page::<u32>(body, "webinars", first_page()).unwrap_err();
        assert!(matches!(err, ZoomError::DecodingFailed(_)));
    }

    #[test]
    fn decode_page_rejects_non_json() {
        let err = decode_page::<u32>(b"<html>", "webinars", first_page()).unwrap_err();
        assert!(matches!(err, ZoomError::DecodingFailed(_)));
    }
}

//! Hosted store connector speaking the PostgREST HTTP dialect

use async_trait::async_trait;
use lawcases_core::{CaseQuery, LawCasesError, StoreConfig};
use lawcases_types::CaseRecord;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_RANGE};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use super::traits::{Connector, Page};

/// Path under the project URL where tables are exposed
const REST_PATH: &str = "rest/v1/";

/// Connector for a hosted store reached over HTTP
pub struct PostgrestConnector {
    client: reqwest::Client,
    base: Url,
}

/// Error body returned by PostgREST
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

impl PostgrestConnector {
    /// Create a connector for the store described by `store`
    ///
    /// No request is made until the first query.
    pub fn new(store: &StoreConfig) -> Result<Self, LawCasesError> {
        let base = rest_base(&store.url)?;

        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(store.key.trim())
            .map_err(|_| LawCasesError::Config("Store key contains invalid characters".to_string()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", store.key.trim()))
            .map_err(|_| LawCasesError::Config("Store key contains invalid characters".to_string()))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = store.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| LawCasesError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base })
    }

    /// URL selecting the page described by `query`
    pub(crate) fn request_url(&self, query: &CaseQuery) -> Result<Url, LawCasesError> {
        let mut url = self.table_url(&query.table)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            if let Some(filter) = &query.filter {
                pairs.append_pair(&filter.column, &format!("eq.{}", filter.value));
            }
            let direction = if query.order.descending { "desc" } else { "asc" };
            pairs.append_pair("order", &format!("{}.{}", query.order.column, direction));
            pairs.append_pair("offset", &query.range.from.to_string());
            pairs.append_pair("limit", &query.range.limit().to_string());
        }
        Ok(url)
    }

    fn table_url(&self, table: &str) -> Result<Url, LawCasesError> {
        self.base
            .join(table)
            .map_err(|e| LawCasesError::Config(format!("Invalid table '{}': {}", table, e)))
    }
}

/// Resolve the REST root for a project URL, accepting URLs that already
/// include the REST path
fn rest_base(url: &str) -> Result<Url, LawCasesError> {
    let trimmed = url.trim().trim_end_matches('/');
    let root = if trimmed.ends_with(REST_PATH.trim_end_matches('/')) {
        format!("{}/", trimmed)
    } else {
        format!("{}/{}", trimmed, REST_PATH)
    };

    Url::parse(&root).map_err(|e| LawCasesError::Config(format!("Invalid store url '{}': {}", url, e)))
}

/// Total from a `Content-Range` header such as `0-9/42` or `*/42`
pub(crate) fn parse_content_range(value: &str) -> Option<u64> {
    let (_, total) = value.trim().rsplit_once('/')?;
    total.trim().parse().ok()
}

/// Best available description of a failed store response
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.filter(|m| !m.is_empty()) {
            return match parsed.details.filter(|d| !d.is_empty()) {
                Some(details) => format!("{} ({})", message, details),
                None => message,
            };
        }
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[async_trait]
impl Connector for PostgrestConnector {
    async fn fetch_page(&self, query: &CaseQuery) -> Result<Page, LawCasesError> {
        let url = self.request_url(query)?;

        let response = self
            .client
            .get(url)
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(|e| LawCasesError::Database(format!("Store request failed: {}", e)))?;

        let status = response.status();
        let total = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range);

        // Offsets past the last row are answered with 416 and the real total.
        if status == StatusCode::RANGE_NOT_SATISFIABLE {
            return Ok(Page {
                rows: Vec::new(),
                total,
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LawCasesError::DataAccess(error_message(status, &body)));
        }

        let rows: Vec<CaseRecord> = response
            .json()
            .await
            .map_err(|e| LawCasesError::DataAccess(format!("Malformed store response: {}", e)))?;

        Ok(Page { rows, total })
    }

    async fn health_check(&self, table: &str) -> Result<(), LawCasesError> {
        let mut url = self.table_url(table)?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("limit", "0");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LawCasesError::Database(format!("Store request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(LawCasesError::DataAccess(error_message(status, &body)))
        }
    }

    async fn close(&self) -> Result<(), LawCasesError> {
        Ok(())
    }

    fn connector_type(&self) -> &'static str {
        "postgrest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{RawQuery, State};
    use axum::http::{HeaderMap as AxumHeaders, StatusCode as AxumStatus};
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::Router;
    use lawcases_core::{CasesConfig, ListParams};
    use lawcases_types::Connector as ConnectorType;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Seen {
        requests: Arc<Mutex<Vec<(Option<String>, AxumHeaders)>>>,
    }

    /// Serve `router` on an ephemeral port and return its base URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn connector(url: &str) -> PostgrestConnector {
        PostgrestConnector::new(&StoreConfig::new(ConnectorType::Postgrest, url, "anon-key")).unwrap()
    }

    fn query(page: u32, size: u32, case_type: Option<&str>) -> CaseQuery {
        let params = ListParams::new(page, size, case_type.map(str::to_string));
        CaseQuery::for_params(&CasesConfig::default(), &params)
    }

    #[test]
    fn test_rest_base() {
        assert_eq!(
            rest_base("https://abc.supabase.co").unwrap().as_str(),
            "https://abc.supabase.co/rest/v1/"
        );
        assert_eq!(
            rest_base("https://abc.supabase.co/rest/v1/").unwrap().as_str(),
            "https://abc.supabase.co/rest/v1/"
        );
        assert!(rest_base("not a url").is_err());
    }

    #[test]
    fn test_request_url() {
        let connector = connector("https://abc.supabase.co");
        let url = connector.request_url(&query(2, 5, Some("civil"))).unwrap();
        assert_eq!(
            url.as_str(),
            "https://abc.supabase.co/rest/v1/law_cases?select=*&case_type=eq.civil&order=crawl_time.desc&offset=5&limit=5"
        );
    }

    #[test]
    fn test_request_url_encodes_filter_value() {
        let connector = connector("https://abc.supabase.co");
        let url = connector.request_url(&query(1, 10, Some("婚姻 & family"))).unwrap();
        let filter = url
            .query_pairs()
            .find(|(k, _)| k == "case_type")
            .map(|(_, v)| v.into_owned());
        assert_eq!(filter.as_deref(), Some("eq.婚姻 & family"));
        assert!(url.query_pairs().all(|(k, _)| k != "type"));
    }

    #[test]
    fn test_parse_content_range() {
        assert_eq!(parse_content_range("0-4/12"), Some(12));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range("*/*"), None);
        assert_eq!(parse_content_range("garbage"), None);
    }

    #[test]
    fn test_error_message() {
        let body = r#"{"code":"42703","details":null,"hint":null,"message":"column law_cases.kind does not exist"}"#;
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, body),
            "column law_cases.kind does not exist"
        );
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, "upstream down"), "upstream down");
        assert_eq!(error_message(StatusCode::UNAUTHORIZED, ""), "Unauthorized");
    }

    #[tokio::test]
    async fn test_fetch_page_sends_query_and_reads_total() {
        let seen = Seen::default();
        let router = Router::new()
            .route(
                "/rest/v1/law_cases",
                get(
                    |State(seen): State<Seen>, headers: AxumHeaders, RawQuery(raw): RawQuery| async move {
                        seen.requests.lock().unwrap().push((raw, headers));
                        (
                            [("content-range", "5-6/12")],
                            axum::Json(json!([
                                {"id": 6, "case_type": "civil", "crawl_time": "2024-05-02T10:00:00"},
                                {"id": 5, "case_type": "civil", "crawl_time": "2024-05-01T10:00:00"}
                            ])),
                        )
                    },
                ),
            )
            .with_state(seen.clone());
        let base = serve(router).await;

        let page = connector(&base)
            .fetch_page(&query(2, 5, Some("civil")))
            .await
            .unwrap();

        assert_eq!(page.total, Some(12));
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.rows[0]["id"], 6);

        let requests = seen.requests.lock().unwrap();
        let (raw, headers) = &requests[0];
        assert_eq!(
            raw.as_deref(),
            Some("select=*&case_type=eq.civil&order=crawl_time.desc&offset=5&limit=5")
        );
        assert_eq!(headers["apikey"], "anon-key");
        assert_eq!(headers["authorization"], "Bearer anon-key");
        assert_eq!(headers["prefer"], "count=exact");
    }

    #[tokio::test]
    async fn test_fetch_page_reports_store_error() {
        let router = Router::new().route(
            "/rest/v1/law_cases",
            get(|| async {
                (
                    AxumStatus::BAD_REQUEST,
                    axum::Json(json!({"code": "42P01", "message": "relation \"law_cases\" does not exist"})),
                )
                    .into_response()
            }),
        );
        let base = serve(router).await;

        let err = connector(&base)
            .fetch_page(&query(1, 10, None))
            .await
            .unwrap_err();

        assert!(matches!(&err, LawCasesError::DataAccess(msg) if msg.contains("does not exist")));
    }

    #[tokio::test]
    async fn test_fetch_page_past_the_end_is_empty() {
        let router = Router::new().route(
            "/rest/v1/law_cases",
            get(|| async {
                (
                    AxumStatus::RANGE_NOT_SATISFIABLE,
                    [("content-range", "*/12")],
                    axum::Json(json!({"message": "Requested range not satisfiable"})),
                )
            }),
        );
        let base = serve(router).await;

        let page = connector(&base)
            .fetch_page(&query(9, 5, None))
            .await
            .unwrap();

        assert!(page.rows.is_empty());
        assert_eq!(page.total, Some(12));
    }

    #[tokio::test]
    async fn test_unreachable_store_is_a_database_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = connector(&format!("http://{}", addr))
            .fetch_page(&query(1, 10, None))
            .await
            .unwrap_err();

        assert!(matches!(err, LawCasesError::Database(_)));
    }

    #[tokio::test]
    async fn test_health_check() {
        let router = Router::new().route("/rest/v1/law_cases", get(|| async { axum::Json(json!([])) }));
        let base = serve(router).await;

        assert!(connector(&base).health_check("law_cases").await.is_ok());
        assert!(connector(&base).health_check("missing").await.is_err());
    }
}

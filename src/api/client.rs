use crate::api::cache::{CacheStats, ResponseCache};
use crate::api::retry::{retry_with_backoff, RetryPolicy};
use crate::config::{AggregatorConfig, ApiConfig};
use crate::errors::{ApiError, ApiResult};
use crate::types::rewards::PoolsSummary;
use crate::types::supply::SupplySnapshot;
use crate::utils::denom::to_display_units;
use crate::utils::number::{is_meaningful_text, parse_leading_number};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const TOTAL_SUPPLY_ENDPOINT: &str = "supply/total";
pub const CIRCULATING_SUPPLY_ENDPOINT: &str = "supply/circulating";

const BASE_DENOM_SUFFIX: &str = "ulava";

/// Join a base URL and an endpoint path with exactly one `/` between them
pub fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Interpret a supply response body as an amount of LAVA
///
/// Bodies may be bare numbers or JSON strings. Values carrying a `ulava`
/// suffix are converted to LAVA. Placeholder text (`null`, `n/a`, `0`, ...)
/// and non-positive amounts are rejected.
pub fn parse_supply_text(endpoint: &str, body: &str) -> ApiResult<f64> {
    let invalid = |message: &str| ApiError::InvalidResponse {
        endpoint: endpoint.to_string(),
        message: message.to_string(),
    };

    let text = body.trim().trim_matches('"').trim();
    if !is_meaningful_text(text) {
        return Err(invalid("no meaningful supply value"));
    }

    let amount = parse_leading_number(text).ok_or_else(|| invalid("supply is not a number"))?;
    let amount = if text.to_lowercase().ends_with(BASE_DENOM_SUFFIX) {
        to_display_units(amount, BASE_DENOM_SUFFIX).0
    } else {
        amount
    };

    if amount > 0.0 {
        Ok(amount)
    } else {
        Err(invalid("supply must be positive"))
    }
}

fn build_http_client(timeout_ms: u64) -> ApiResult<Client> {
    Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()
        .map_err(|e| ApiError::RequestFailed {
            endpoint: "http client".to_string(),
            message: e.to_string(),
        })
}

async fn fetch_text(http: &Client, url: &str, endpoint: &str) -> ApiResult<String> {
    let request_failed = |e: reqwest::Error| ApiError::RequestFailed {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    };

    let response = http.get(url).send().await.map_err(request_failed)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::HttpStatus {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        });
    }
    response.text().await.map_err(request_failed)
}

/// Client for the jsinfobe REST backend
pub struct JsinfobeClient {
    http: Client,
    base_url: String,
    policy: RetryPolicy,
    cache: ResponseCache,
}

impl JsinfobeClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        if !config.is_configured() {
            return Err(ApiError::NotConfigured(
                "JSINFOBE_REST_URL is not set".to_string(),
            ));
        }

        Ok(Self {
            http: build_http_client(config.timeout_ms)?,
            base_url: config.jsinfobe_rest_url.trim().to_string(),
            policy: RetryPolicy::from_config(config),
            cache: ResponseCache::new(Duration::from_secs(config.cache_ttl_seconds)),
        })
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        join_url(&self.base_url, endpoint)
    }

    /// Response body for `endpoint`, served from cache while fresh
    pub async fn get_text(&self, endpoint: &str) -> ApiResult<String> {
        if let Some(body) = self.cache.get(endpoint) {
            return Ok(body);
        }

        let url = self.endpoint_url(endpoint);
        debug!("GET {}", url);
        let body = retry_with_backoff(endpoint, &self.policy, || {
            fetch_text(&self.http, &url, endpoint)
        })
        .await?;

        self.cache.put(endpoint, body.clone());
        Ok(body)
    }

    pub async fn total_supply(&self) -> ApiResult<f64> {
        let body = self.get_text(TOTAL_SUPPLY_ENDPOINT).await?;
        parse_supply_text(TOTAL_SUPPLY_ENDPOINT, &body)
    }

    pub async fn circulating_supply(&self) -> ApiResult<f64> {
        let body = self.get_text(CIRCULATING_SUPPLY_ENDPOINT).await?;
        parse_supply_text(CIRCULATING_SUPPLY_ENDPOINT, &body)
    }

    /// Total and circulating supply, fetched concurrently
    pub async fn supply_snapshot(&self) -> ApiResult<SupplySnapshot> {
        let (total, circulating) =
            futures::try_join!(self.total_supply(), self.circulating_supply())?;
        info!(
            "Fetched supply: total {} LAVA, circulating {} LAVA",
            total, circulating
        );
        let stats = self.get_cache_stats();
        debug!(
            "Response cache: {} requests, {:.1}% hit rate",
            stats.total_requests(),
            stats.hit_rate()
        );
        Ok(SupplySnapshot::live(total, circulating))
    }

    pub fn get_cache_stats(&self) -> CacheStats {
        self.cache.get_stats()
    }
}

/// Supply snapshot from the backend, or the last-known figures on any failure
pub async fn fetch_supply_snapshot(config: &ApiConfig) -> SupplySnapshot {
    let result = match JsinfobeClient::new(config) {
        Ok(client) => client.supply_snapshot().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("Supply fetch failed, using last-known supply: {}", e);
            SupplySnapshot::fallback()
        }
    }
}

/// Client for the rewards-pools aggregator
pub struct PoolsClient {
    http: Client,
    url: String,
    policy: RetryPolicy,
}

impl PoolsClient {
    /// Timeout and retry policy are shared with the backend settings
    pub fn new(aggregator: &AggregatorConfig, api: &ApiConfig) -> ApiResult<Self> {
        if aggregator.pools_url.trim().is_empty() {
            return Err(ApiError::NotConfigured(
                "aggregator.pools_url is empty".to_string(),
            ));
        }

        Ok(Self {
            http: build_http_client(api.timeout_ms)?,
            url: aggregator.pools_url.trim().to_string(),
            policy: RetryPolicy::from_config(api),
        })
    }

    pub async fn fetch_summary(&self) -> ApiResult<PoolsSummary> {
        let endpoint = "pools";
        let body =
            retry_with_backoff(endpoint, &self.policy, || fetch_text(&self.http, &self.url, endpoint))
                .await?;
        parse_pools_summary(endpoint, &body)
    }
}

pub fn parse_pools_summary(endpoint: &str, body: &str) -> ApiResult<PoolsSummary> {
    serde_json::from_str(body).map_err(|e| ApiError::InvalidResponse {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

pub async fn fetch_pools_summary(
    aggregator: &AggregatorConfig,
    api: &ApiConfig,
) -> ApiResult<PoolsSummary> {
    PoolsClient::new(aggregator, api)?.fetch_summary().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::supply_distribution::{FALLBACK_CIRCULATING_SUPPLY, FALLBACK_TOTAL_SUPPLY};
    use crate::types::supply::SupplySource;

    // Nothing listens on the discard port; requests fail fast with a refused connection
    fn unreachable_config() -> ApiConfig {
        ApiConfig {
            jsinfobe_rest_url: "http://127.0.0.1:9/".to_string(),
            timeout_ms: 2_000,
            retry_count: 0,
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://jsinfo.example/", "/supply/total"),
            "https://jsinfo.example/supply/total"
        );
        assert_eq!(
            join_url("https://jsinfo.example", "supply/circulating"),
            "https://jsinfo.example/supply/circulating"
        );
    }

    #[test]
    fn test_parse_supply_text() {
        assert_eq!(parse_supply_text("t", "985088593.5").unwrap(), 985_088_593.5);
        assert_eq!(parse_supply_text("t", "\"277075327\"\n").unwrap(), 277_075_327.0);
        assert_eq!(
            parse_supply_text("t", "985088593000000ulava").unwrap(),
            985_088_593.0
        );
    }

    #[test]
    fn test_parse_supply_text_rejects_placeholders() {
        for body in ["", "null", "\"undefined\"", "0", "N/A", "abc", "-5"] {
            assert!(
                matches!(
                    parse_supply_text("supply/total", body),
                    Err(ApiError::InvalidResponse { .. })
                ),
                "accepted {:?}",
                body
            );
        }
    }

    #[test]
    fn test_parse_pools_summary() {
        let summary = parse_pools_summary(
            "pools",
            r#"{"total_past_rewards": "413416.7", "total_requests": 12, "extra": true}"#,
        )
        .unwrap();
        assert_eq!(summary.total_past_rewards_usd(), 413_416.7);
        assert!(parse_pools_summary("pools", "<html>").is_err());
    }

    #[test]
    fn test_client_requires_base_url() {
        let result = JsinfobeClient::new(&ApiConfig::default());
        assert!(matches!(result, Err(ApiError::NotConfigured(_))));

        let client = JsinfobeClient::new(&unreachable_config()).unwrap();
        assert_eq!(
            client.endpoint_url(TOTAL_SUPPLY_ENDPOINT),
            "http://127.0.0.1:9/supply/total"
        );
    }

    #[tokio::test]
    async fn test_cached_response_skips_network() {
        let client = JsinfobeClient::new(&unreachable_config()).unwrap();
        client
            .cache
            .put(TOTAL_SUPPLY_ENDPOINT, "985088593".to_string());
        client
            .cache
            .put(CIRCULATING_SUPPLY_ENDPOINT, "277075327000000ulava".to_string());

        let snapshot = client.supply_snapshot().await.unwrap();
        assert_eq!(snapshot.source, SupplySource::Live);
        assert_eq!(snapshot.total_supply, 985_088_593.0);
        assert_eq!(snapshot.circulating_supply, 277_075_327.0);
        let stats = client.get_cache_stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.total_requests(), 2);
    }

    #[tokio::test]
    async fn test_unconfigured_backend_falls_back() {
        let snapshot = fetch_supply_snapshot(&ApiConfig::default()).await;
        assert_eq!(snapshot.source, SupplySource::Fallback);
        assert_eq!(snapshot.total_supply, FALLBACK_TOTAL_SUPPLY);
        assert_eq!(snapshot.circulating_supply, FALLBACK_CIRCULATING_SUPPLY);
    }

    #[tokio::test]
    async fn test_unreachable_backend_falls_back() {
        let snapshot = fetch_supply_snapshot(&unreachable_config()).await;
        assert_eq!(snapshot.source, SupplySource::Fallback);
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use thiserror::Error;
use tokio::sync::OnceCell;

use super::consent::ConsentStore;
use super::retry::RetryPolicy;

/// Failure inside an analytics sink; never surfaced to callers
#[derive(Debug, Error)]
#[error("analytics sink error: {0}")]
pub struct SinkError(pub String);

/// Heavier product-analytics sink (third-party SDK)
///
/// Must be initialized before use; initialization is expensive and may fail
/// transiently, so the dispatcher performs it lazily and at most once in
/// flight.
#[async_trait]
pub trait ProductSink: Send + Sync {
    async fn init(&self) -> Result<(), SinkError>;
    async fn log_event(&self, name: &str, params: &Value) -> Result<(), SinkError>;
}

/// Lightweight first-party stats sink
///
/// Its runtime handle is injected into the page asynchronously, so it may
/// not be attached yet when an event fires.
#[async_trait]
pub trait StatsSink: Send + Sync {
    fn is_attached(&self) -> bool;
    async fn track(&self, name: &str, data: &Value) -> Result<(), SinkError>;
}

/// Download platform for the download-click convenience event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Mac,
}

impl Platform {
    fn as_str(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Mac => "mac",
        }
    }

    fn button_type(self) -> &'static str {
        match self {
            Platform::Android => "google_play",
            Platform::Mac => "mac_app",
        }
    }
}

/// Consent-gated analytics dispatcher
///
/// Decides per event whether to forward it to zero, one, or both sinks based
/// on the stored consent value, read synchronously before every call. Sink
/// failures are swallowed: tracking is best-effort and must never become a
/// user-visible error. Failures are logged at debug level only, which the
/// production filter discards.
pub struct Dispatcher {
    consent: Arc<dyn ConsentStore>,
    product: Arc<dyn ProductSink>,
    stats: Arc<dyn StatsSink>,
    retry: RetryPolicy,
    product_ready: OnceCell<()>,
}

impl Dispatcher {
    pub fn new(
        consent: Arc<dyn ConsentStore>,
        product: Arc<dyn ProductSink>,
        stats: Arc<dyn StatsSink>,
    ) -> Self {
        Self {
            consent,
            product,
            stats,
            retry: RetryPolicy::default(),
            product_ready: OnceCell::new(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Track an event on the product-analytics sink (requires full consent)
    ///
    /// The sink is initialized lazily on first use. Concurrent calls collapse
    /// into a single initialization attempt; a failed attempt leaves the
    /// guard clear so a later call can retry instead of being poisoned.
    pub async fn track_event(&self, name: &str, params: Value) {
        if !self.consent.load().allows_product_analytics() {
            return;
        }

        let ready = self
            .product_ready
            .get_or_try_init(|| async { self.product.init().await })
            .await;

        if let Err(e) = ready {
            tracing::debug!("Product analytics initialization failed: {}", e);
            return;
        }

        if let Err(e) = self.product.log_event(name, &params).await {
            tracing::debug!("Product analytics event dropped: {}", e);
        }
    }

    /// Track an event on the lightweight stats sink (necessary or full consent)
    ///
    /// If the sink's runtime handle is not attached yet, waits under the
    /// configured bounded backoff schedule, then gives up silently.
    pub async fn track_lightweight_event(&self, name: &str, data: Value) {
        if !self.consent.load().allows_stats() {
            return;
        }

        for attempt in 1..=self.retry.max_attempts {
            if self.stats.is_attached() {
                if let Err(e) = self.stats.track(name, &data).await {
                    tracing::debug!("Stats event dropped: {}", e);
                }
                return;
            }
            if attempt < self.retry.max_attempts {
                tokio::time::sleep(self.retry.delay(attempt)).await;
            }
        }

        tracing::debug!("Stats sink never attached; dropping event {}", name);
    }

    /// Track a download button click
    pub async fn track_download_click(&self, platform: Platform) {
        self.track_event(
            "download_button_click",
            json!({
                "platform": platform.as_str(),
                "button_type": platform.button_type(),
                "timestamp": Utc::now().to_rfc3339(),
            }),
        )
        .await;
    }

    /// Track a page view
    pub async fn track_page_view(&self, page_path: &str, page_title: Option<&str>) {
        self.track_event(
            "page_view",
            json!({
                "page_path": page_path,
                "page_title": page_title,
            }),
        )
        .await;
    }
}

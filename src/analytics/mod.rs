//! Consent-gated analytics dispatch
//!
//! Client-side decision layer: every tracking call consults the stored
//! consent value before touching either analytics sink. The heavier
//! product-analytics sink is initialized lazily with an at-most-once
//! in-flight guard; the lightweight stats sink is polled for attachment
//! under a bounded backoff schedule.

pub mod consent;
pub mod dispatcher;
pub mod retry;

pub use consent::{Consent, ConsentStore, MemoryConsentStore};
pub use dispatcher::{Dispatcher, Platform, ProductSink, SinkError, StatsSink};
pub use retry::RetryPolicy;

// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the `created` / `updated` stamps written by the gateway.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

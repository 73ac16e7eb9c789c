//! Dual-mode persistence for the catalog and orders.
//!
//! The store is a capability picked once at startup: [`live::LiveStore`] when a
//! database is configured, [`demo::DemoStore`] otherwise. Handlers only ever
//! see the trait, so a missing database is a mode of operation, not an error.
//! Both implementations return normalized JSON documents of the same shape.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::{Order, Product};

pub mod demo;
pub mod live;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("malformed document: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Result of a seed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// No database configured; nothing to seed.
    NotConfigured,
    /// The product collection already holds records; left untouched.
    AlreadySeeded,
    /// Starter records inserted.
    Seeded { count: usize },
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All products as normalized JSON documents, in insertion order, capped
    /// at `limit`.
    async fn list_products(&self, limit: i64) -> Result<Vec<Value>, StoreError>;

    /// The product with the given slug as a normalized JSON document, with
    /// any detail overlay applied. `None` when the slug is unknown.
    async fn product_by_slug(&self, slug: &str) -> Result<Option<Value>, StoreError>;

    /// Record an order and return its identifier as a string.
    async fn insert_order(&self, order: &Order) -> Result<String, StoreError>;

    /// Insert the starter catalog unless products already exist.
    async fn seed_products(&self, starter: &[Product]) -> Result<SeedOutcome, StoreError>;
}

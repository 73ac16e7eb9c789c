//! In-memory demo catalog, active when no database is configured.
//!
//! Reads come from the fixed showcase catalog and are deterministic; orders
//! are accepted without persistence and always answer with the literal
//! `demo-order` identifier, so callers must not treat it as unique.

use async_trait::async_trait;
use serde_json::Value;

use crate::catalog;
use crate::models::{Order, Product};
use crate::normalize::normalize;
use crate::store::{CatalogStore, SeedOutcome, StoreError};

/// Identifier returned for every demo-mode order.
pub const DEMO_ORDER_ID: &str = "demo-order";

#[derive(Clone, Copy, Debug, Default)]
pub struct DemoStore;

fn to_document(product: &Product) -> Result<Value, StoreError> {
    Ok(normalize(serde_json::to_value(product)?))
}

/// Merge `overlay`'s fields onto `base`. Overlay fields win on key collision;
/// base fields without a counterpart pass through unchanged. Non-mapping
/// inputs leave the base as-is.
fn merge_overlay(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (k, v) in overlay {
                base.insert(k, v);
            }
            Value::Object(base)
        }
        (base, _) => base,
    }
}

#[async_trait]
impl CatalogStore for DemoStore {
    async fn list_products(&self, limit: i64) -> Result<Vec<Value>, StoreError> {
        catalog::demo_products()
            .iter()
            .take(limit.max(0) as usize)
            .map(to_document)
            .collect()
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Option<Value>, StoreError> {
        let products = catalog::demo_products();
        let Some(product) = products.iter().find(|p| p.slug == slug) else {
            return Ok(None);
        };
        let mut doc = to_document(product)?;
        if let Some(detail) = catalog::detail_for(slug) {
            doc = merge_overlay(doc, normalize(serde_json::to_value(&detail)?));
        }
        Ok(Some(doc))
    }

    async fn insert_order(&self, _order: &Order) -> Result<String, StoreError> {
        Ok(DEMO_ORDER_ID.to_string())
    }

    async fn seed_products(&self, _starter: &[Product]) -> Result<SeedOutcome, StoreError> {
        Ok(SeedOutcome::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn listing_is_deterministic_and_complete() {
        let store = DemoStore;
        let first = store.list_products(48).await.unwrap();
        let second = store.list_products(48).await.unwrap();
        assert_eq!(first.len(), 6);
        assert_eq!(first, second);
        assert_eq!(first[0]["id"], json!("demo1"));
        assert_eq!(first[0]["slug"], json!("3d-printed-diamond-cut-led-frame"));
    }

    #[tokio::test]
    async fn listing_respects_the_cap() {
        let store = DemoStore;
        assert_eq!(store.list_products(2).await.unwrap().len(), 2);
        assert_eq!(store.list_products(0).await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn detail_lookup_merges_overlay_and_keeps_base_fields() {
        let store = DemoStore;
        let doc = store
            .product_by_slug("crystal-acrylic-night-lamp")
            .await
            .unwrap()
            .expect("known slug");
        // base fields survive
        assert_eq!(doc["title"], json!("Crystal Acrylic Night Lamp"));
        assert_eq!(doc["price"], json!(1599.0));
        assert_eq!(doc["id"], json!("demo3"));
        // overlay fields are present
        assert!(doc["features"].is_array());
        assert_eq!(doc["specs"][0]["label"], json!("Material"));
        assert!(doc["shipping"].is_string());
    }

    #[tokio::test]
    async fn slug_without_overlay_yields_bare_product() {
        let store = DemoStore;
        let doc = store
            .product_by_slug("magic-mirror-photo-frame")
            .await
            .unwrap()
            .expect("known slug");
        assert_eq!(doc["id"], json!("demo6"));
        assert!(doc.get("features").is_none());
    }

    #[tokio::test]
    async fn unknown_slug_is_absent() {
        let store = DemoStore;
        assert!(store.product_by_slug("nonexistent-slug").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn orders_get_the_fixed_demo_id() {
        let store = DemoStore;
        let order: Order = serde_json::from_value(json!({
            "items": [{"product_slug": "crystal-acrylic-night-lamp", "unit_price": 1599}],
            "subtotal": 1599,
            "total": 1599
        }))
        .unwrap();
        assert_eq!(store.insert_order(&order).await.unwrap(), DEMO_ORDER_ID);
        assert_eq!(store.insert_order(&order).await.unwrap(), DEMO_ORDER_ID);
    }

    #[tokio::test]
    async fn seeding_reports_not_configured() {
        let store = DemoStore;
        let outcome = store.seed_products(&crate::catalog::starter_products()).await.unwrap();
        assert_eq!(outcome, SeedOutcome::NotConfigured);
    }

    #[test]
    fn overlay_fields_win_on_collision() {
        let base = json!({"title": "Base", "price": 10, "keep": true});
        let overlay = json!({"title": "Overlay", "extra": [1, 2]});
        let merged = merge_overlay(base, overlay);
        assert_eq!(merged["title"], json!("Overlay"));
        assert_eq!(merged["price"], json!(10));
        assert_eq!(merged["keep"], json!(true));
        assert_eq!(merged["extra"], json!([1, 2]));
    }
}

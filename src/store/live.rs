//! Postgres-backed store.
//!
//! Products and orders are kept as JSONB documents next to a store-assigned
//! UUID; reads re-attach the row id to the document and pipe it through the
//! normalizer so the wire shape matches demo mode. Seeding relies on the
//! UNIQUE slug constraint: the inserts use `ON CONFLICT DO NOTHING`, so two
//! racing seed calls cannot duplicate the starter catalog.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Order, Product};
use crate::normalize::{normalize, ID_KEY};
use crate::store::{CatalogStore, SeedOutcome, StoreError};

#[derive(Clone, Debug)]
pub struct LiveStore {
    pool: PgPool,
}

impl LiveStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn attach_id(id: Uuid, doc: Value) -> Value {
    match doc {
        Value::Object(mut map) => {
            map.insert(ID_KEY.to_string(), Value::String(id.to_string()));
            Value::Object(map)
        }
        other => other,
    }
}

#[async_trait]
impl CatalogStore for LiveStore {
    async fn list_products(&self, limit: i64) -> Result<Vec<Value>, StoreError> {
        let rows: Vec<(Uuid, Value)> =
            sqlx::query_as("SELECT id, doc FROM products ORDER BY seq LIMIT $1")
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows
            .into_iter()
            .map(|(id, doc)| normalize(attach_id(id, doc)))
            .collect())
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Option<Value>, StoreError> {
        let row: Option<(Uuid, Value)> =
            sqlx::query_as("SELECT id, doc FROM products WHERE slug = $1")
                .bind(slug)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(id, doc)| normalize(attach_id(id, doc))))
    }

    async fn insert_order(&self, order: &Order) -> Result<String, StoreError> {
        let id = Uuid::new_v4();
        let mut doc = serde_json::to_value(order)?;
        if let Value::Object(map) = &mut doc {
            map.insert(
                "created_at".to_string(),
                Value::String(Utc::now().to_rfc3339()),
            );
        }
        sqlx::query("INSERT INTO orders (id, doc) VALUES ($1, $2)")
            .bind(id)
            .bind(doc)
            .execute(&self.pool)
            .await?;
        Ok(id.to_string())
    }

    async fn seed_products(&self, starter: &[Product]) -> Result<SeedOutcome, StoreError> {
        let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        if existing > 0 {
            return Ok(SeedOutcome::AlreadySeeded);
        }
        let mut inserted = 0usize;
        for product in starter {
            let doc = serde_json::to_value(product)?;
            let result = sqlx::query(
                "INSERT INTO products (id, slug, doc) VALUES ($1, $2, $3) \
                 ON CONFLICT (slug) DO NOTHING",
            )
            .bind(Uuid::new_v4())
            .bind(&product.slug)
            .bind(doc)
            .execute(&self.pool)
            .await?;
            inserted += result.rows_affected() as usize;
        }
        if inserted == 0 {
            // lost the race to a concurrent seed
            Ok(SeedOutcome::AlreadySeeded)
        } else {
            Ok(SeedOutcome::Seeded { count: inserted })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn attach_id_overwrites_and_normalizes_to_string() {
        let id = Uuid::new_v4();
        let doc = attach_id(id, json!({"slug": "x", "price": 10}));
        assert_eq!(doc["id"], json!(id.to_string()));

        let doc = normalize(attach_id(id, json!({"id": 7, "slug": "x"})));
        assert_eq!(doc["id"], json!(id.to_string()));
    }
}

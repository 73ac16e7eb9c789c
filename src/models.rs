//! Wire and data model for the catalog and checkout.
//!
//! Field defaults and constraints mirror what the storefront clients already
//! send: plain JSON numbers for money, lowercase order statuses, `COD` as the
//! default payment method. Constraint checks live on the types themselves via
//! `validator` so handlers can reject bad payloads with field-level detail.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A catalog entry. `slug` is the canonical public lookup key; `id` is the
/// store-assigned identifier and is absent on records that have never been
/// persisted (seed input) or carries a `demo<N>` pseudo-id in demo mode.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    #[validate(range(min = 0, max = 90))]
    pub discount_percent: u8,
    #[serde(default = "default_rating")]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_category")]
    pub category: String,
}

/// A named option axis on a product, e.g. `Size` with `["Small", "Medium"]`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductVariant {
    pub name: String,
    pub options: Vec<String>,
}

/// Enrichment overlay merged onto a base product for the detail page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductDetail {
    pub features: Vec<String>,
    pub specs: Vec<SpecEntry>,
    pub whats_in_box: Vec<String>,
    pub care: Vec<String>,
    pub faqs: Vec<Faq>,
    pub shipping: String,
    pub how_to_order: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpecEntry { pub label: String, pub value: String }

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Faq { pub question: String, pub answer: String }

/// A checkout submission. Monetary fields are recorded as submitted; the API
/// does not recompute `total` from the parts and does not check that
/// `product_slug` references a live catalog entry.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct Order {
    #[validate(length(min = 1, message = "order must contain at least one item"), nested)]
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub shipping: f64,
    pub total: f64,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerInfo>,
    #[serde(default)]
    pub status: OrderStatus,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    pub product_slug: String,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity: u32,
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalization: Option<Personalization>,
}

/// Free-form customization captured per line item.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Personalization {
    pub photo_url: Option<String>,
    pub name: Option<String>,
    pub message: Option<String>,
    pub size: Option<String>,
    pub light_color: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "COD")]
    Cod,
    Prepaid,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
}

fn default_rating() -> f64 { 4.8 }
fn default_quantity() -> u32 { 1 }
fn default_category() -> String { "frames".to_string() }

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_order() -> serde_json::Value {
        json!({
            "items": [{"product_slug": "crystal-acrylic-night-lamp", "unit_price": 1599}],
            "subtotal": 1599,
            "total": 1599
        })
    }

    #[test]
    fn order_defaults_match_client_contract() {
        let order: Order = serde_json::from_value(minimal_order()).unwrap();
        assert_eq!(order.items[0].quantity, 1);
        assert_eq!(order.discount, 0.0);
        assert_eq!(order.shipping, 0.0);
        assert_eq!(order.payment_method, PaymentMethod::Cod);
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.validate().is_ok());
    }

    #[test]
    fn empty_items_rejected() {
        let mut doc = minimal_order();
        doc["items"] = json!([]);
        let order: Order = serde_json::from_value(doc).unwrap();
        let errs = order.validate().unwrap_err();
        assert!(errs.to_string().contains("at least one item"));
    }

    #[test]
    fn out_of_range_item_fields_rejected() {
        let mut doc = minimal_order();
        doc["items"][0]["quantity"] = json!(0);
        let order: Order = serde_json::from_value(doc).unwrap();
        assert!(order.validate().is_err());

        let mut doc = minimal_order();
        doc["items"][0]["unit_price"] = json!(-1);
        let order: Order = serde_json::from_value(doc).unwrap();
        assert!(order.validate().is_err());
    }

    #[test]
    fn payment_method_uses_literal_wire_names() {
        assert_eq!(serde_json::to_value(PaymentMethod::Cod).unwrap(), json!("COD"));
        assert_eq!(serde_json::to_value(PaymentMethod::Prepaid).unwrap(), json!("Prepaid"));
        assert_eq!(serde_json::to_value(OrderStatus::Pending).unwrap(), json!("pending"));
    }

    #[test]
    fn product_constraints_enforced() {
        let product: Product = serde_json::from_value(json!({
            "title": "Frame",
            "slug": "frame",
            "price": 100,
            "discount_percent": 95
        }))
        .unwrap();
        assert!(product.validate().is_err());
    }
}

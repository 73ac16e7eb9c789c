//! SurpriseSoul storefront API.
//!
//! Serves the personalized-gift catalog, product detail pages and checkout
//! submissions. Persistence is dual-mode: Postgres when `DATABASE_URL` is
//! configured, otherwise a built-in demo catalog with the exact same wire
//! shape, so the storefront keeps working without a database.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod routes;
pub mod store;

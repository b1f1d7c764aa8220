//! Inpaint API Proxy library
//!
//! Modules:
//! - `api`: Axum HTTP handlers and router setup used by the binary.
//! - `inpaint`: Wire types and the thin client for the upstream inpainting service.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `UpstreamConfig`,
//! `InpaintClient`, and `InpaintRequest`.
pub mod api;
pub mod inpaint;
pub mod config;
pub mod error;

pub use config::{Config, UpstreamConfig};
pub use inpaint::client::InpaintClient;
pub use inpaint::types::InpaintRequest;

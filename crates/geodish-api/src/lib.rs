//! # geodish-api - Backend Gateway
//!
//! HTTP gateway between the terminal client and the GeoDish backend.
//! Owns the remote operations (country catalog, random dish, saved
//! recipes, health) and normalizes the backend's payload drift so the
//! rest of the client only sees canonical types.
//!
//! ## Public API
//!
//! - [`GeoDishClient`] - One method per remote operation
//! - [`ApiError`] - Transport / status / decode / duplicate-save taxonomy
//! - [`decode`] - Tolerant list-payload normalization (also used by tests)

pub mod assets;
pub mod client;
pub mod decode;
pub mod error;

pub use client::{GeoDishClient, HealthResponse, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};

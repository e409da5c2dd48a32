//! Shared types for the Showroom inventory manager
//!
//! Common types used across crates: car data models, create/update
//! payloads, and wire-level response structures.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::ErrorBody;
pub use models::{Car, CarCreate, CarTags, CarUpdate, Image};

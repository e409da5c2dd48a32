//! Showroom Client - client core for the car inventory backend
//!
//! Provides the typed HTTP bindings for the inventory API and the image
//! upload gateway, plus the stateful pieces built on top of them: the
//! edit-session photo-set reconciler and the client-side inventory
//! query layer.

pub mod config;
pub mod error;
pub mod gateway;
pub mod inventory;
pub mod photos;
pub mod repository;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gateway::{HttpImageGateway, ImageFile, ImageUploadGateway};
pub use inventory::InventoryQueryEngine;
pub use photos::{ImageDiff, PhotoSetReconciler};
pub use repository::{CarRepository, HttpCarRepository};
pub use session::CarEditSession;

// Re-export shared types for convenience
pub use shared::models::{Car, CarCreate, CarTags, CarUpdate, Image};

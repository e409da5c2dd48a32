//! Car Model

use serde::{Deserialize, Serialize};

/// Car entity
///
/// `id` is assigned by the backend on creation and never changes.
/// `images` is kept in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: CarTags,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Free-text tag set carried by every car
///
/// All three keys are always present; empty strings are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarTags {
    pub car_type: String,
    pub company: String,
    pub dealer: String,
}

impl CarTags {
    /// All tag values, in declaration order.
    pub fn values(&self) -> [&str; 3] {
        [&self.car_type, &self.company, &self.dealer]
    }
}

/// A hosted image: the stable URL plus the opaque handle the upload
/// gateway needs for deletion/management.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub public_id: String,
}

/// Create car payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarCreate {
    pub title: String,
    pub description: String,
    pub tags: CarTags,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl CarCreate {
    /// A car must carry a non-empty title; everything else is free text.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        Ok(())
    }
}

/// Update car payload
///
/// Field values are the full desired state; `add_images`/`delete_images`
/// carry the reconciled photo-set diff for this save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarUpdate {
    pub title: String,
    pub description: String,
    pub tags: CarTags,
    #[serde(rename = "addImages")]
    pub add_images: Vec<String>,
    #[serde(rename = "deleteImages")]
    pub delete_images: Vec<String>,
}

//! Car edit session
//!
//! Coordinates field edits and the photo-set reconciler into one atomic
//! update request against the repository.

use std::sync::Arc;

use shared::models::{Car, CarTags, CarUpdate, Image};

use crate::ClientResult;
use crate::gateway::{ImageFile, ImageUploadGateway};
use crate::photos::PhotoSetReconciler;
use crate::repository::CarRepository;

/// Editable fields recognized by [`CarEditSession::set_field`]
///
/// Everything else is a deliberate no-op, mirroring permissive form
/// binding without untyped dictionary access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Description,
    CarType,
    Company,
    Dealer,
}

impl Field {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Field::Title),
            "description" => Some(Field::Description),
            "car_type" => Some(Field::CarType),
            "company" => Some(Field::Company),
            "dealer" => Some(Field::Dealer),
            _ => None,
        }
    }
}

/// One edit session over a single car record
///
/// Created when an edit view opens, submitted or discarded when it
/// closes. Pending image changes survive failed submissions so the user
/// can retry; they are cleared only by a confirmed success.
pub struct CarEditSession<R, G> {
    repository: Arc<R>,
    gateway: Arc<G>,
    car_id: String,
    title: String,
    description: String,
    tags: CarTags,
    photos: PhotoSetReconciler,
    last_error: Option<String>,
}

// Implemented manually so it does not impose `R: Debug`/`G: Debug` bounds
// on the generic collaborators.
impl<R, G> std::fmt::Debug for CarEditSession<R, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarEditSession")
            .field("car_id", &self.car_id)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("tags", &self.tags)
            .field("photos", &self.photos)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}

impl<R, G> CarEditSession<R, G>
where
    R: CarRepository,
    G: ImageUploadGateway,
{
    /// Fetch the car and open a session seeded from the server state.
    pub async fn load(
        repository: Arc<R>,
        gateway: Arc<G>,
        car_id: impl Into<String>,
    ) -> ClientResult<Self> {
        let car_id = car_id.into();
        let car = repository.get(&car_id).await?;

        Ok(Self {
            repository,
            gateway,
            car_id,
            title: car.title,
            description: car.description,
            tags: car.tags,
            photos: PhotoSetReconciler::new(car.images),
            last_error: None,
        })
    }

    /// Update one editable field; unrecognized names are ignored.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        let Some(field) = Field::parse(name) else {
            tracing::debug!(field = %name, "ignoring unrecognized field");
            return;
        };

        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Description => self.description = value,
            Field::CarType => self.tags.car_type = value,
            Field::Company => self.tags.company = value,
            Field::Dealer => self.tags.dealer = value,
        }
    }

    /// Upload a file through the session's gateway and stage it.
    pub async fn add_image(&mut self, file: ImageFile) -> ClientResult<Image> {
        let result = self.photos.add_image(&*self.gateway, file).await;
        if let Err(err) = &result {
            self.last_error = Some(err.to_string());
        }
        result
    }

    /// Remove the image at `index` from the working set.
    pub fn remove_image(&mut self, index: usize) -> Option<Image> {
        self.photos.remove_image(index)
    }

    /// Submit one atomic update carrying the current field values plus
    /// the photo-set diff.
    ///
    /// On failure the session state is left untouched for retry and the
    /// failure is recorded; on success the reconciler is reset and the
    /// updated record returned.
    pub async fn submit(&mut self) -> ClientResult<Car> {
        let diff = self.photos.diff();
        let request = CarUpdate {
            title: self.title.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            add_images: diff.add_urls,
            delete_images: diff.delete_urls.into_iter().collect(),
        };

        match self.repository.update(&self.car_id, request).await {
            Ok(car) => {
                self.photos.reset();
                self.last_error = None;
                tracing::info!(car_id = %self.car_id, "car updated");
                Ok(car)
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Delete the whole car record. On success the caller is expected
    /// to navigate away; on failure the record remains.
    pub async fn delete_car(&mut self) -> ClientResult<()> {
        match self.repository.delete(&self.car_id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn car_id(&self) -> &str {
        &self.car_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &CarTags {
        &self.tags
    }

    /// Working photo set, in display order.
    pub fn images(&self) -> &[Image] {
        self.photos.current_images()
    }

    /// Photo-set reconciler state for this session.
    pub fn photos(&self) -> &PhotoSetReconciler {
        &self.photos
    }

    /// Session-local error state: the message of the last failed
    /// operation, cleared by a successful submit.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

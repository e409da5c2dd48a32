//! Photo-set reconciliation
//!
//! Tracks a car's photo list across a sequence of session-local adds
//! and removes, and computes the diff to send on save. The reconciler
//! tracks *intent* (what this session added or removed) rather than
//! re-diffing against the baseline, so an image that was added and then
//! removed in the same session never turns into a backend deletion.

use std::collections::BTreeSet;

use shared::models::Image;

use crate::ClientResult;
use crate::gateway::{ImageFile, ImageUploadGateway};

/// Diff payload for one save: urls to add in addition order, urls to
/// delete as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageDiff {
    pub add_urls: Vec<String>,
    pub delete_urls: BTreeSet<String>,
}

impl ImageDiff {
    /// True when the diff carries no work.
    pub fn is_empty(&self) -> bool {
        self.add_urls.is_empty() && self.delete_urls.is_empty()
    }
}

/// In-memory photo-set state for one edit session
///
/// Invariant: a url never sits in the pending additions and the pending
/// deletions at the same time.
#[derive(Debug, Clone)]
pub struct PhotoSetReconciler {
    /// Photo set as it existed at load time; read-only until `reset`
    baseline: Vec<Image>,
    /// Working set, in display order
    current: Vec<Image>,
    /// Images added this session, in addition order
    pending_additions: Vec<Image>,
    /// Urls of baseline images removed this session
    pending_deletions: BTreeSet<String>,
}

impl PhotoSetReconciler {
    /// Start a session from the server-provided photo set.
    pub fn new(baseline: Vec<Image>) -> Self {
        Self {
            current: baseline.clone(),
            baseline,
            pending_additions: Vec::new(),
            pending_deletions: BTreeSet::new(),
        }
    }

    /// Upload a file through the gateway and stage the resulting image.
    ///
    /// State is only touched after the gateway confirms the upload, so a
    /// failed call leaves the photo set exactly as it was. The exclusive
    /// borrow held across the await keeps any other mutation out until
    /// this upload has resolved one way or the other.
    pub async fn add_image(
        &mut self,
        gateway: &dyn ImageUploadGateway,
        file: ImageFile,
    ) -> ClientResult<Image> {
        let image = gateway.upload(file).await?;

        self.current.push(image.clone());
        self.pending_additions.push(image.clone());
        tracing::debug!(url = %image.url, "image staged for addition");
        Ok(image)
    }

    /// Remove the image at `index` from the working set.
    ///
    /// An image added this session is purely discarded: the backend
    /// never stored it, so it must not be told to delete it. A baseline
    /// image is recorded for deletion on the next save. Out-of-range
    /// indexes are a no-op.
    pub fn remove_image(&mut self, index: usize) -> Option<Image> {
        if index >= self.current.len() {
            return None;
        }
        let removed = self.current.remove(index);

        if let Some(pos) = self
            .pending_additions
            .iter()
            .position(|img| img.url == removed.url)
        {
            self.pending_additions.remove(pos);
            tracing::debug!(url = %removed.url, "discarded unsaved addition");
        } else {
            self.pending_deletions.insert(removed.url.clone());
            tracing::debug!(url = %removed.url, "image staged for deletion");
        }

        Some(removed)
    }

    /// Compute the diff for the next save. Pure read; calling it twice
    /// without intervening mutation returns identical results.
    pub fn diff(&self) -> ImageDiff {
        ImageDiff {
            add_urls: self
                .pending_additions
                .iter()
                .map(|img| img.url.clone())
                .collect(),
            delete_urls: self.pending_deletions.clone(),
        }
    }

    /// Clear the pending sets and re-baseline the working set. Called
    /// only after a confirmed successful submission.
    pub fn reset(&mut self) {
        self.pending_additions.clear();
        self.pending_deletions.clear();
        self.baseline = self.current.clone();
    }

    /// Working photo set, in display order.
    pub fn current_images(&self) -> &[Image] {
        &self.current
    }

    /// Photo set as it existed at load time.
    pub fn baseline(&self) -> &[Image] {
        &self.baseline
    }

    /// True when a save would carry image changes.
    pub fn has_changes(&self) -> bool {
        !self.pending_additions.is_empty() || !self.pending_deletions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use async_trait::async_trait;

    fn img(name: &str) -> Image {
        Image {
            url: format!("https://img.test/{name}.jpg"),
            public_id: name.to_string(),
        }
    }

    /// Gateway stub that hosts whatever it is given.
    struct StaticGateway;

    #[async_trait]
    impl ImageUploadGateway for StaticGateway {
        async fn upload(&self, file: ImageFile) -> ClientResult<Image> {
            Ok(img(&file.name))
        }
    }

    /// Gateway stub that is unreachable.
    struct DownGateway;

    #[async_trait]
    impl ImageUploadGateway for DownGateway {
        async fn upload(&self, _file: ImageFile) -> ClientResult<Image> {
            Err(ClientError::Upload("gateway unreachable".to_string()))
        }
    }

    fn file(name: &str) -> ImageFile {
        ImageFile::new(name, vec![0xff, 0xd8])
    }

    #[tokio::test]
    async fn test_add_image_appends_to_current_and_pending() {
        let mut photos = PhotoSetReconciler::new(vec![img("a")]);
        let added = photos.add_image(&StaticGateway, file("c")).await.unwrap();

        assert_eq!(added, img("c"));
        assert_eq!(photos.current_images(), &[img("a"), img("c")]);
        assert_eq!(photos.diff().add_urls, vec![img("c").url]);
        assert!(photos.diff().delete_urls.is_empty());
    }

    #[tokio::test]
    async fn test_failed_upload_leaves_state_untouched() {
        let mut photos = PhotoSetReconciler::new(vec![img("a")]);
        let err = photos.add_image(&DownGateway, file("c")).await.unwrap_err();

        assert!(matches!(err, ClientError::Upload(_)));
        assert_eq!(photos.current_images(), &[img("a")]);
        assert!(photos.diff().is_empty());
    }

    #[tokio::test]
    async fn test_removing_session_added_image_discards_it() {
        let mut photos = PhotoSetReconciler::new(vec![img("a")]);
        photos.add_image(&StaticGateway, file("c")).await.unwrap();

        let removed = photos.remove_image(1).unwrap();
        assert_eq!(removed, img("c"));
        assert_eq!(photos.current_images(), &[img("a")]);
        // Never persisted, so it must not show up as a deletion
        assert!(photos.diff().is_empty());
    }

    #[test]
    fn test_removing_baseline_image_records_deletion_once() {
        let mut photos = PhotoSetReconciler::new(vec![img("a"), img("b")]);
        photos.remove_image(1);

        let diff = photos.diff();
        assert!(diff.add_urls.is_empty());
        assert_eq!(diff.delete_urls.len(), 1);
        assert!(diff.delete_urls.contains(&img("b").url));

        // Same index again now points past the end: no-op, no duplicate entry
        assert!(photos.remove_image(1).is_none());
        assert_eq!(photos.diff().delete_urls.len(), 1);
    }

    #[tokio::test]
    async fn test_additions_and_deletions_stay_disjoint() {
        let mut photos = PhotoSetReconciler::new(vec![img("a"), img("b")]);
        photos.add_image(&StaticGateway, file("c")).await.unwrap();
        photos.add_image(&StaticGateway, file("d")).await.unwrap();
        photos.remove_image(0); // baseline a
        photos.remove_image(1); // session-added c (index shifted)
        photos.remove_image(0); // baseline b

        let diff = photos.diff();
        for url in &diff.add_urls {
            assert!(!diff.delete_urls.contains(url));
        }
        assert_eq!(diff.add_urls, vec![img("d").url]);
        assert_eq!(
            diff.delete_urls.iter().cloned().collect::<Vec<_>>(),
            vec![img("a").url, img("b").url]
        );
        assert_eq!(photos.current_images(), &[img("d")]);
    }

    #[tokio::test]
    async fn test_diff_is_idempotent() {
        let mut photos = PhotoSetReconciler::new(vec![img("a"), img("b")]);
        photos.add_image(&StaticGateway, file("c")).await.unwrap();
        photos.remove_image(1);

        assert_eq!(photos.diff(), photos.diff());
    }

    #[tokio::test]
    async fn test_reset_clears_pending_and_rebaselines() {
        let mut photos = PhotoSetReconciler::new(vec![img("a"), img("b")]);
        photos.add_image(&StaticGateway, file("c")).await.unwrap();
        photos.remove_image(1);
        assert!(photos.has_changes());

        photos.reset();
        assert!(!photos.has_changes());
        assert_eq!(photos.diff(), ImageDiff::default());
        assert_eq!(photos.baseline(), photos.current_images());

        // A post-reset removal targets the new baseline
        photos.remove_image(1);
        assert!(photos.diff().delete_urls.contains(&img("c").url));
    }
}

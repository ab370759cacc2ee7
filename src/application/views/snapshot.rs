// src/application/views/snapshot.rs
use crate::application::error::ApplicationResult;
use std::future::Future;

/// In-memory copy of a remote collection, loaded at most once.
#[derive(Debug)]
pub(super) struct Snapshot<T> {
    items: Vec<T>,
    mounted: bool,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            mounted: false,
        }
    }
}

impl<T> Snapshot<T> {
    /// Runs `fetch` on the first call only.
    ///
    /// On success the whole snapshot is replaced. On failure the error is
    /// logged, the snapshot is left as it was and the error is returned.
    pub(super) async fn load<F, Fut>(
        &mut self,
        source: &'static str,
        fetch: F,
    ) -> ApplicationResult<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApplicationResult<Vec<T>>>,
    {
        if self.mounted {
            tracing::debug!(source, "view already mounted; not fetching again");
            return Ok(());
        }
        self.mounted = true;

        match fetch().await {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(err) => {
                tracing::error!(source, error = %err, "failed to load collection");
                Err(err)
            }
        }
    }

    pub(super) fn items(&self) -> &[T] {
        &self.items
    }
}

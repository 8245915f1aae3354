//! Process-wide embedding model.
//!
//! Models are expensive to initialise and cheap to invoke, so one instance is
//! created on first use and reused until the process exits. Concurrent first
//! callers wait on the same initialisation.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

use crate::error::{EmbedError, EmbedResult};
use crate::traits::embedder::Embedder;

static SHARED_EMBEDDER: OnceCell<Arc<dyn Embedder>> = OnceCell::const_new();

/// Get the shared embedder, running `init` only if none exists yet.
///
/// A failed `init` leaves the cell empty so a later call may retry.
pub async fn shared_embedder<F, Fut>(init: F) -> EmbedResult<Arc<dyn Embedder>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = EmbedResult<Arc<dyn Embedder>>>,
{
    SHARED_EMBEDDER
        .get_or_try_init(|| async {
            let embedder = init().await?;
            info!(embedder = embedder.name(), "Embedding model initialised");
            Ok::<_, EmbedError>(embedder)
        })
        .await
        .cloned()
}

/// The shared embedder, if it has been initialised.
pub fn try_shared_embedder() -> Option<Arc<dyn Embedder>> {
    SHARED_EMBEDDER.get().cloned()
}

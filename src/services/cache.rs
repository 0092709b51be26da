use crate::core::{EffectivenessMatrix, TypeIndex};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// In-process cache for immutable reference data
///
/// Holds the effectiveness matrix and the type index so that a ranking
/// request does not reload them on every call. Entries expire after the
/// configured TTL. Ranking results are never cached.
pub struct ReferenceCache {
    matrix: moka::future::Cache<&'static str, Arc<EffectivenessMatrix>>,
    types: moka::future::Cache<&'static str, Arc<TypeIndex>>,
}

impl ReferenceCache {
    /// Create a new reference cache
    pub fn new(ttl_secs: u64) -> Self {
        let ttl = Duration::from_secs(ttl_secs);

        Self {
            matrix: moka::future::CacheBuilder::new(1).time_to_live(ttl).build(),
            types: moka::future::CacheBuilder::new(1).time_to_live(ttl).build(),
        }
    }

    /// Get the matrix, loading it with `load` on a miss
    ///
    /// Concurrent misses share a single load. A failed load is not cached.
    pub async fn matrix<F, E>(&self, load: F) -> Result<Arc<EffectivenessMatrix>, Arc<E>>
    where
        F: Future<Output = Result<EffectivenessMatrix, E>>,
        E: Send + Sync + 'static,
    {
        self.matrix
            .try_get_with(CacheKey::MATRIX, async {
                tracing::debug!("Reference cache miss: {}", CacheKey::MATRIX);
                load.await.map(Arc::new)
            })
            .await
    }

    /// Get the type index, loading it with `load` on a miss
    pub async fn type_index<F, E>(&self, load: F) -> Result<Arc<TypeIndex>, Arc<E>>
    where
        F: Future<Output = Result<TypeIndex, E>>,
        E: Send + Sync + 'static,
    {
        self.types
            .try_get_with(CacheKey::TYPE_INDEX, async {
                tracing::debug!("Reference cache miss: {}", CacheKey::TYPE_INDEX);
                load.await.map(Arc::new)
            })
            .await
    }
}

/// Cache key names
pub struct CacheKey;

impl CacheKey {
    pub const MATRIX: &'static str = "reference:matrix";
    pub const TYPE_INDEX: &'static str = "reference:types";
}

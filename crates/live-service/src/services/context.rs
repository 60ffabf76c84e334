//! Service context - dependency container for services
//!
//! Holds the primary store, the derived cache, and the token verifier.

use std::sync::Arc;

use live_cache::DerivedCache;
use live_common::auth::JwtService;
use live_core::traits::{CacheStore, PrimaryStore};

use super::error::ServiceError;

/// Service context containing all dependencies
///
/// Every service borrows the context; nothing reaches the stores through globals.
#[derive(Clone)]
pub struct ServiceContext {
    primary: Arc<dyn PrimaryStore>,
    cache: DerivedCache,
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    pub fn new(
        primary: Arc<dyn PrimaryStore>,
        cache_store: Arc<dyn CacheStore>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            primary,
            cache: DerivedCache::new(cache_store),
            jwt_service,
        }
    }

    // === Stores ===

    /// Get the primary store
    pub fn primary(&self) -> &dyn PrimaryStore {
        self.primary.as_ref()
    }

    /// Get the derived cache facade
    pub fn cache(&self) -> &DerivedCache {
        &self.cache
    }

    /// Get the raw cache store
    pub fn cache_store(&self) -> &dyn CacheStore {
        self.cache.store().as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Builder for ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    primary: Option<Arc<dyn PrimaryStore>>,
    cache_store: Option<Arc<dyn CacheStore>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(mut self, primary: Arc<dyn PrimaryStore>) -> Self {
        self.primary = Some(primary);
        self
    }

    pub fn cache_store(mut self, cache_store: Arc<dyn CacheStore>) -> Self {
        self.cache_store = Some(cache_store);
        self
    }

    pub fn jwt_service(mut self, jwt_service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(jwt_service);
        self
    }

    pub fn build(self) -> Result<ServiceContext, ServiceError> {
        Ok(ServiceContext::new(
            self.primary
                .ok_or_else(|| ServiceError::validation("primary store is required"))?,
            self.cache_store
                .ok_or_else(|| ServiceError::validation("cache store is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

//! Tag service

use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;
use crate::dto::TagsResponse;

/// Tag service
pub struct TagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TagService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The tag catalog as cached by the last bootstrap
    #[instrument(skip(self))]
    pub async fn list_tags(&self) -> ServiceResult<TagsResponse> {
        let tags = self.ctx.cache().tags().await?;
        Ok(TagsResponse::from(tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use live_cache::MemoryCacheStore;
    use live_common::JwtService;
    use live_db::MemoryPrimaryStore;

    use crate::services::CacheBootstrapper;

    #[tokio::test]
    async fn test_list_tags_newest_first() {
        let primary = Arc::new(MemoryPrimaryStore::new());
        primary.add_tag("game");
        primary.add_tag("music");
        primary.add_tag("talk:late");
        let ctx = ServiceContext::new(
            primary,
            Arc::new(MemoryCacheStore::new()),
            Arc::new(JwtService::new("secret", 60)),
        );

        assert!(TagService::new(&ctx).list_tags().await.unwrap().tags.is_empty());

        CacheBootstrapper::new(&ctx).run().await.unwrap();
        let tags = TagService::new(&ctx).list_tags().await.unwrap().tags;

        let listed: Vec<_> = tags.iter().map(|t| (t.id, t.name.as_str())).collect();
        assert_eq!(listed, [(3, "talk:late"), (2, "music"), (1, "game")]);
    }
}

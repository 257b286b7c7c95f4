//! CacheManager 定位

use flush_errors::{FlushError, FlushResult};
use flush_ports::{Cache, CacheManager, ManagerRegistry};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{debug, warn};

/// 延迟解析并缓存 CacheManager，按名称查找缓存
///
/// 管理器至多成功解析一次；解析失败不会被记住，下次调用会重试
pub struct CacheManagerLocator {
    registry: Option<Arc<dyn ManagerRegistry>>,
    manager_name: Option<String>,
    manager: OnceCell<Arc<dyn CacheManager>>,
}

impl CacheManagerLocator {
    /// 通过查找表延迟解析；`manager_name` 为空时查找唯一实例
    pub fn new(registry: Arc<dyn ManagerRegistry>, manager_name: Option<String>) -> Self {
        Self {
            registry: Some(registry),
            manager_name,
            manager: OnceCell::new(),
        }
    }

    /// 构造时直接注入
    pub fn with_manager(manager: Arc<dyn CacheManager>) -> Self {
        Self {
            registry: None,
            manager_name: None,
            manager: OnceCell::with_value(manager),
        }
    }

    pub fn manager_name(&self) -> Option<&str> {
        self.manager_name.as_deref()
    }

    /// 获取 CacheManager
    pub fn manager(&self) -> FlushResult<Arc<dyn CacheManager>> {
        self.manager.get_or_try_init(|| self.lookup_manager()).cloned()
    }

    /// 获取指定缓存，不存在时返回 CacheNotFound
    pub fn cache(&self, name: &str) -> FlushResult<Arc<dyn Cache>> {
        let manager = self.manager()?;
        manager.cache(name).ok_or_else(|| {
            warn!(cache = name, "Flush marker references a cache that does not exist");
            FlushError::cache_not_found(name)
        })
    }

    fn lookup_manager(&self) -> FlushResult<Arc<dyn CacheManager>> {
        let registry = self
            .registry
            .as_ref()
            .ok_or_else(|| FlushError::manager_resolution("No manager registry configured"))?;

        let manager = match &self.manager_name {
            Some(name) => registry.manager_by_name(name)?,
            None => registry.unique_manager()?,
        };
        debug!(manager_name = ?self.manager_name, "Resolved cache manager");
        Ok(manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimpleCacheManager;
    use crate::test_support::RecordingCache;
    use mockall::mock;

    mock! {
        Registry {}
        impl ManagerRegistry for Registry {
            fn manager_by_name(&self, name: &str) -> FlushResult<Arc<dyn CacheManager>>;
            fn unique_manager(&self) -> FlushResult<Arc<dyn CacheManager>>;
        }
    }

    fn items_manager() -> Arc<dyn CacheManager> {
        Arc::new(SimpleCacheManager::new().with_cache(RecordingCache::new("items")))
    }

    #[test]
    fn test_unique_manager_resolved_once() {
        let manager = items_manager();
        let mut registry = MockRegistry::new();
        registry
            .expect_unique_manager()
            .times(1)
            .returning(move || Ok(manager.clone()));
        registry.expect_manager_by_name().never();

        let locator = CacheManagerLocator::new(Arc::new(registry), None);
        assert_eq!(locator.cache("items").unwrap().name(), "items");
        assert_eq!(locator.cache("items").unwrap().name(), "items");
        assert!(locator.manager().is_ok());
    }

    #[test]
    fn test_named_manager_lookup() {
        let manager = items_manager();
        let mut registry = MockRegistry::new();
        registry
            .expect_manager_by_name()
            .withf(|name| name == "ehcacheManager")
            .times(1)
            .returning(move |_| Ok(manager.clone()));
        registry.expect_unique_manager().never();

        let locator = CacheManagerLocator::new(Arc::new(registry), Some("ehcacheManager".into()));
        assert_eq!(locator.manager_name(), Some("ehcacheManager"));
        assert!(locator.cache("items").is_ok());
    }

    #[test]
    fn test_manager_failure_is_retried() {
        let manager = items_manager();
        let mut calls = 0;
        let mut registry = MockRegistry::new();
        registry.expect_unique_manager().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Err(FlushError::manager_resolution("No CacheManager registered"))
            } else {
                Ok(manager.clone())
            }
        });

        let locator = CacheManagerLocator::new(Arc::new(registry), None);
        let err = locator.cache("items").err().unwrap();
        assert!(matches!(err, FlushError::ManagerResolution(_)));
        assert!(locator.cache("items").is_ok());
        // 成功后不再查找
        assert!(locator.cache("items").is_ok());
    }

    #[test]
    fn test_missing_cache_carries_name() {
        let locator = CacheManagerLocator::with_manager(items_manager());
        let err = locator.cache("orders").err().unwrap();
        assert_eq!(err, FlushError::cache_not_found("orders"));
        assert_eq!(err.cache_name(), Some("orders"));
    }
}

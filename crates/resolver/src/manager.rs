//! 显式注册的 CacheManager 与查找表

use flush_errors::{FlushError, FlushResult};
use flush_ports::{Cache, CacheManager, ManagerRegistry};
use std::collections::HashMap;
use std::sync::Arc;

/// 持有一组已注册缓存句柄的 CacheManager
#[derive(Default)]
pub struct SimpleCacheManager {
    caches: HashMap<String, Arc<dyn Cache>>,
}

impl SimpleCacheManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(mut self, cache: Arc<dyn Cache>) -> Self {
        self.register(cache);
        self
    }

    /// 同名缓存会被替换
    pub fn register(&mut self, cache: Arc<dyn Cache>) {
        self.caches.insert(cache.name().to_string(), cache);
    }
}

impl CacheManager for SimpleCacheManager {
    fn cache(&self, name: &str) -> Option<Arc<dyn Cache>> {
        self.caches.get(name).cloned()
    }

    fn cache_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.caches.keys().cloned().collect();
        names.sort();
        names
    }
}

/// 按名称注册 CacheManager 的查找表
#[derive(Default)]
pub struct StaticManagerRegistry {
    managers: Vec<(String, Arc<dyn CacheManager>)>,
}

impl StaticManagerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manager(mut self, name: impl Into<String>, manager: Arc<dyn CacheManager>) -> Self {
        let name = name.into();
        self.managers.retain(|(existing, _)| *existing != name);
        self.managers.push((name, manager));
        self
    }

    pub fn len(&self) -> usize {
        self.managers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }
}

impl ManagerRegistry for StaticManagerRegistry {
    fn manager_by_name(&self, name: &str) -> FlushResult<Arc<dyn CacheManager>> {
        self.managers
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, manager)| manager.clone())
            .ok_or_else(|| FlushError::manager_resolution(format!("No CacheManager named '{}'", name)))
    }

    fn unique_manager(&self) -> FlushResult<Arc<dyn CacheManager>> {
        match self.managers.as_slice() {
            [] => Err(FlushError::manager_resolution("No CacheManager registered")),
            [(_, manager)] => Ok(manager.clone()),
            many => {
                let names: Vec<&str> = many.iter().map(|(name, _)| name.as_str()).collect();
                Err(FlushError::manager_resolution(format!(
                    "Expected single matching CacheManager but found {}: {}",
                    many.len(),
                    names.join(", ")
                )))
            }
        }
    }
}

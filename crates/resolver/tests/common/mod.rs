//! 集成测试辅助

#![allow(dead_code)]

use async_trait::async_trait;
use flush_errors::FlushResult;
use flush_ports::{Cache, FlushMarker, MethodRef, TypeRef, Visibility};
use flush_resolver::{AttributeResolver, CacheManagerLocator, SimpleCacheManager, TypeRegistry};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// 内存缓存替身
pub struct MemoryCache {
    name: String,
    keys: Mutex<HashSet<String>>,
}

impl MemoryCache {
    pub fn with_keys(name: &str, keys: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            keys: Mutex::new(keys.iter().map(|k| k.to_string()).collect()),
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.lock().unwrap().contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.lock().unwrap().len()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    fn name(&self) -> &str {
        &self.name
    }

    async fn evict(&self, key: &str) -> FlushResult<()> {
        self.keys.lock().unwrap().remove(key);
        Ok(())
    }

    async fn clear(&self) -> FlushResult<()> {
        self.keys.lock().unwrap().clear();
        Ok(())
    }
}

pub fn service_save() -> MethodRef {
    MethodRef::of("shop.Service", "save", ["shop.Item"])
}

pub fn impl_save() -> MethodRef {
    MethodRef::of("shop.ServiceImpl", "save", ["shop.Item"])
}

pub fn service_impl() -> TypeRef {
    TypeRef::from("shop.ServiceImpl")
}

/// `Service` 接口 + `ServiceImpl` 实现，`save` 在两边都已登记
pub fn service_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry
        .method(&service_save(), Visibility::Public)
        .method(&impl_save(), Visibility::Public);
    registry
}

pub fn resolver(registry: TypeRegistry, caches: Vec<Arc<MemoryCache>>) -> AttributeResolver {
    let mut manager = SimpleCacheManager::new();
    for cache in caches {
        manager.register(cache);
    }
    AttributeResolver::new(
        Arc::new(registry),
        CacheManagerLocator::with_manager(Arc::new(manager)),
    )
}

pub fn items_marker() -> FlushMarker {
    FlushMarker::entry("items")
}

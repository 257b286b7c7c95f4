//! 缓存失效策略

use flush_errors::FlushResult;
use flush_ports::Cache;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// 解析出的失效策略：目标缓存 + 是否清空
///
/// 删除哪个 key 由拦截器根据调用参数决定，这里只决定缓存和范围
#[derive(Clone)]
pub struct FlushPolicy {
    cache: Arc<dyn Cache>,
    remove_all: bool,
}

impl FlushPolicy {
    pub fn new(cache: Arc<dyn Cache>, remove_all: bool) -> Self {
        Self { cache, remove_all }
    }

    pub fn cache(&self) -> &Arc<dyn Cache> {
        &self.cache
    }

    pub fn cache_name(&self) -> &str {
        self.cache.name()
    }

    pub fn remove_all(&self) -> bool {
        self.remove_all
    }

    /// 在被拦截的调用成功后执行驱逐
    ///
    /// `remove_all` 时清空整个缓存，否则删除 `key`；没有 key 时什么都不做
    pub async fn flush(&self, key: Option<&str>) -> FlushResult<()> {
        if self.remove_all {
            debug!(cache = self.cache_name(), "Clearing cache");
            return self.cache.clear().await;
        }
        match key {
            Some(key) => {
                debug!(cache = self.cache_name(), key, "Evicting cache entry");
                self.cache.evict(key).await
            }
            None => Ok(()),
        }
    }
}

impl PartialEq for FlushPolicy {
    fn eq(&self, other: &Self) -> bool {
        self.remove_all == other.remove_all && self.cache_name() == other.cache_name()
    }
}

impl Eq for FlushPolicy {}

impl fmt::Debug for FlushPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlushPolicy")
            .field("cache", &self.cache_name())
            .field("remove_all", &self.remove_all)
            .finish()
    }
}

impl fmt::Display for FlushPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cache={}, remove_all={}", self.cache_name(), self.remove_all)
    }
}

/// 已计算的解析结果
///
/// 未计算 = map 中没有 key；`Absent` 表示已计算且没有失效声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedPolicy {
    Absent,
    Present(FlushPolicy),
}

impl CachedPolicy {
    pub fn as_policy(&self) -> Option<&FlushPolicy> {
        match self {
            Self::Absent => None,
            Self::Present(policy) => Some(policy),
        }
    }

    pub fn into_policy(self) -> Option<FlushPolicy> {
        match self {
            Self::Absent => None,
            Self::Present(policy) => Some(policy),
        }
    }
}

impl From<Option<FlushPolicy>> for CachedPolicy {
    fn from(policy: Option<FlushPolicy>) -> Self {
        policy.map_or(Self::Absent, Self::Present)
    }
}

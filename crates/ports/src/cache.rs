//! Cache trait 定义

use async_trait::async_trait;
use flush_errors::FlushResult;
use std::sync::Arc;

/// 命名缓存句柄
///
/// 存储实现不在本库范围内，拦截器通过它执行驱逐
#[async_trait]
pub trait Cache: Send + Sync {
    /// 缓存名
    fn name(&self) -> &str;

    /// 删除单个条目
    async fn evict(&self, key: &str) -> FlushResult<()>;

    /// 清空全部条目
    async fn clear(&self) -> FlushResult<()>;
}

/// 缓存管理器 trait
pub trait CacheManager: Send + Sync {
    /// 按名称获取缓存，不存在时返回 None（不会自动创建）
    fn cache(&self, name: &str) -> Option<Arc<dyn Cache>>;

    /// 已知的缓存名
    fn cache_names(&self) -> Vec<String>;
}

/// CacheManager 查找机制
///
/// 查找失败统一返回 `FlushError::ManagerResolution`
pub trait ManagerRegistry: Send + Sync {
    /// 按名称查找
    fn manager_by_name(&self, name: &str) -> FlushResult<Arc<dyn CacheManager>>;

    /// 查找唯一实例
    fn unique_manager(&self) -> FlushResult<Arc<dyn CacheManager>>;
}

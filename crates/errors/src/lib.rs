//! flush-errors - 统一错误处理
//!
//! 解析失败不会被吞掉，也不会被缓存，原样返回给调用方

use thiserror::Error;

/// 缓存失效解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlushError {
    /// 无法定位 CacheManager
    #[error("Cache manager resolution failed: {0}")]
    ManagerResolution(String),

    /// 标记引用了不存在的缓存
    #[error("Cache '{0}' does not exist")]
    CacheNotFound(String),

    /// 缓存句柄执行驱逐时失败
    #[error("Cache error: {0}")]
    Cache(String),
}

impl FlushError {
    pub fn manager_resolution(msg: impl Into<String>) -> Self {
        Self::ManagerResolution(msg.into())
    }

    pub fn cache_not_found(name: impl Into<String>) -> Self {
        Self::CacheNotFound(name.into())
    }

    pub fn cache(msg: impl Into<String>) -> Self {
        Self::Cache(msg.into())
    }

    /// 返回 CacheNotFound 携带的缓存名
    pub fn cache_name(&self) -> Option<&str> {
        match self {
            Self::CacheNotFound(name) => Some(name),
            _ => None,
        }
    }

    /// 是否为配置类错误（修正配置后可重试）
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::ManagerResolution(_) | Self::CacheNotFound(_))
    }
}

/// Result 类型别名
pub type FlushResult<T> = Result<T, FlushError>;

//! 缓存失效标记

use std::fmt;

/// 声明式失效标记：目标缓存名 + 是否清空整个缓存
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlushMarker {
    pub cache_name: String,
    pub remove_all: bool,
}

impl FlushMarker {
    /// 只驱逐单个条目
    pub fn entry(cache_name: impl Into<String>) -> Self {
        Self {
            cache_name: cache_name.into(),
            remove_all: false,
        }
    }

    /// 清空整个缓存
    pub fn all(cache_name: impl Into<String>) -> Self {
        Self {
            cache_name: cache_name.into(),
            remove_all: true,
        }
    }
}

impl fmt::Display for FlushMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "flush(cache = {}, remove_all = {})",
            self.cache_name, self.remove_all
        )
    }
}

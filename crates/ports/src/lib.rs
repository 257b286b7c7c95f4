//! ports - 抽象 trait 层
//!
//! 定义解析器依赖的外部协作者接口：类型元数据、缓存管理器、缓存句柄

mod cache;
mod identity;
mod marker;
mod metadata;

pub use cache::*;
pub use identity::*;
pub use marker::*;
pub use metadata::*;

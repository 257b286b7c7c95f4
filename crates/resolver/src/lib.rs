//! flush-resolver - 方法级缓存失效元数据解析
//!
//! 给定方法调用及其目标类型，判断调用完成后是否需要驱逐缓存、驱逐哪个缓存、
//! 以及是删除单个条目还是清空整个缓存。结果按 (方法, 目标类型) 永久缓存。

mod key;
mod locator;
mod manager;
mod marker;
mod policy;
mod registry;
mod resolver;
mod walker;

#[cfg(test)]
mod test_support;

pub use key::*;
pub use locator::*;
pub use manager::*;
pub use marker::*;
pub use policy::*;
pub use registry::*;
pub use resolver::*;
pub use walker::*;

//! 解析缓存 key

use flush_ports::{MethodRef, TypeRef};
use std::fmt;

/// (方法, 目标类型) 组合 key，结构相等
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    method: MethodRef,
    target_type: Option<TypeRef>,
}

impl CacheKey {
    pub fn new(method: &MethodRef, target_type: Option<&TypeRef>) -> Self {
        Self {
            method: method.clone(),
            target_type: target_type.cloned(),
        }
    }

    pub fn method(&self) -> &MethodRef {
        &self.method
    }

    pub fn target_type(&self) -> Option<&TypeRef> {
        self.target_type.as_ref()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target_type {
            Some(target) => write!(f, "{} on {}", self.method, target.simple_name()),
            None => write!(f, "{}", self.method),
        }
    }
}

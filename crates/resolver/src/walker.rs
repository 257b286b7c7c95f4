//! 方法覆写查找与桥接方法展开

use flush_ports::{MetadataSource, MethodRef, TypeRef};
use std::collections::HashSet;
use std::sync::Arc;

pub struct HierarchyWalker {
    source: Arc<dyn MetadataSource>,
}

impl HierarchyWalker {
    pub fn new(source: Arc<dyn MetadataSource>) -> Self {
        Self { source }
    }

    /// 目标类型实际执行的方法，已展开桥接
    pub fn specific_method(&self, method: &MethodRef, target_type: Option<&TypeRef>) -> MethodRef {
        let most_specific = self.most_specific_method(method, target_type);
        self.bridged_method(&most_specific)
    }

    /// 在 `target_type` 及其父类链中查找覆写 `method` 的方法
    ///
    /// 目标为空、目标即声明类型、方法不可覆写或找不到覆写时返回原方法
    pub fn most_specific_method(&self, method: &MethodRef, target_type: Option<&TypeRef>) -> MethodRef {
        let Some(target) = target_type else {
            return method.clone();
        };
        if target == method.declaring_type() || !self.is_overridable(method) {
            return method.clone();
        }

        let mut visited = HashSet::new();
        let mut current = Some(target.clone());
        while let Some(ty) = current {
            if !visited.insert(ty.clone()) {
                break;
            }
            if let Some(found) = self.source.declared_method(&ty, method.signature()) {
                return found;
            }
            current = self.source.superclass(&ty);
        }
        method.clone()
    }

    /// 桥接方法返回其转发目标，否则返回原方法
    pub fn bridged_method(&self, method: &MethodRef) -> MethodRef {
        self.source
            .method_info(method)
            .and_then(|info| info.bridged)
            .unwrap_or_else(|| method.clone())
    }

    fn is_overridable(&self, method: &MethodRef) -> bool {
        self.source
            .method_info(method)
            .is_none_or(|info| info.visibility.is_overridable())
    }
}

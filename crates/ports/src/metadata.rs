//! 类型元数据 trait 定义

use crate::{AnnotatedElement, FlushMarker, MethodRef, MethodSignature, TypeRef};

/// 方法可见性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }

    /// private 方法不能被子类覆写
    pub fn is_overridable(self) -> bool {
        !matches!(self, Self::Private)
    }
}

/// 方法元数据
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MethodInfo {
    pub visibility: Visibility,
    /// 编译器生成的桥接方法所转发到的真实方法
    pub bridged: Option<MethodRef>,
}

impl MethodInfo {
    pub fn new(visibility: Visibility) -> Self {
        Self {
            visibility,
            bridged: None,
        }
    }

    pub fn bridge(visibility: Visibility, target: MethodRef) -> Self {
        Self {
            visibility,
            bridged: Some(target),
        }
    }

    pub fn is_bridge(&self) -> bool {
        self.bridged.is_some()
    }
}

/// 类型元数据来源
///
/// 实现必须是只读的：同一输入始终返回相同结果，解析结果依赖这一点被永久缓存
pub trait MetadataSource: Send + Sync {
    /// 方法元数据；未登记的方法返回 None
    fn method_info(&self, method: &MethodRef) -> Option<MethodInfo>;

    /// `owner` 自身声明（不含继承）的同签名方法
    fn declared_method(&self, owner: &TypeRef, signature: &MethodSignature) -> Option<MethodRef>;

    /// 直接父类
    fn superclass(&self, ty: &TypeRef) -> Option<TypeRef>;

    /// 元素上直接声明的标记
    fn direct_marker(&self, element: &AnnotatedElement) -> Option<FlushMarker>;

    /// 元素上其它注解所携带的标记（只展开一层）
    fn meta_markers(&self, element: &AnnotatedElement) -> Vec<FlushMarker>;
}

//! 显式注册的类型元数据表
//!
//! 在没有运行时反射的情况下，由启动代码登记类型层次、方法、桥接方法和标记，
//! 解析器通过 [`MetadataSource`] 只读访问。登记完成后再用 `Arc` 共享。

use flush_ports::{
    AnnotatedElement, FlushMarker, MetadataSource, MethodInfo, MethodRef, MethodSignature,
    TypeRef, Visibility,
};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct TypeRegistry {
    superclasses: HashMap<TypeRef, TypeRef>,
    methods: HashMap<TypeRef, HashMap<MethodSignature, MethodInfo>>,
    markers: HashMap<AnnotatedElement, FlushMarker>,
    annotations: HashMap<AnnotatedElement, Vec<TypeRef>>,
    meta_markers: HashMap<TypeRef, FlushMarker>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记 `ty extends superclass`
    pub fn extend(&mut self, ty: impl Into<TypeRef>, superclass: impl Into<TypeRef>) -> &mut Self {
        self.superclasses.insert(ty.into(), superclass.into());
        self
    }

    /// 登记方法及其可见性
    pub fn method(&mut self, method: &MethodRef, visibility: Visibility) -> &mut Self {
        self.method_entry(method).visibility = visibility;
        self
    }

    /// 登记桥接方法，`target` 为同一类型中真正的实现
    pub fn bridge(&mut self, bridge: &MethodRef, target: &MethodRef) -> &mut Self {
        self.method_entry(target);
        self.method_entry(bridge).bridged = Some(target.clone());
        self
    }

    /// 直接标记；未登记的方法按 public 登记
    pub fn mark(&mut self, element: impl Into<AnnotatedElement>, marker: FlushMarker) -> &mut Self {
        let element = element.into();
        if let AnnotatedElement::Method(method) = &element {
            self.method_entry(method);
        }
        self.markers.insert(element, marker);
        self
    }

    /// 给元素加上注解 `annotation`
    pub fn annotate(
        &mut self,
        element: impl Into<AnnotatedElement>,
        annotation: impl Into<TypeRef>,
    ) -> &mut Self {
        let element = element.into();
        if let AnnotatedElement::Method(method) = &element {
            self.method_entry(method);
        }
        self.annotations.entry(element).or_default().push(annotation.into());
        self
    }

    /// 注解类型本身携带的标记
    pub fn meta_marker(&mut self, annotation: impl Into<TypeRef>, marker: FlushMarker) -> &mut Self {
        self.meta_markers.insert(annotation.into(), marker);
        self
    }

    fn method_entry(&mut self, method: &MethodRef) -> &mut MethodInfo {
        self.methods
            .entry(method.declaring_type().clone())
            .or_default()
            .entry(method.signature().clone())
            .or_default()
    }
}

impl MetadataSource for TypeRegistry {
    fn method_info(&self, method: &MethodRef) -> Option<MethodInfo> {
        self.methods
            .get(method.declaring_type())
            .and_then(|methods| methods.get(method.signature()))
            .cloned()
    }

    fn declared_method(&self, owner: &TypeRef, signature: &MethodSignature) -> Option<MethodRef> {
        self.methods
            .get(owner)
            .filter(|methods| methods.contains_key(signature))
            .map(|_| MethodRef::new(owner.clone(), signature.clone()))
    }

    fn superclass(&self, ty: &TypeRef) -> Option<TypeRef> {
        self.superclasses.get(ty).cloned()
    }

    fn direct_marker(&self, element: &AnnotatedElement) -> Option<FlushMarker> {
        self.markers.get(element).cloned()
    }

    fn meta_markers(&self, element: &AnnotatedElement) -> Vec<FlushMarker> {
        self.annotations
            .get(element)
            .map(|annotations| {
                annotations
                    .iter()
                    .filter_map(|annotation| self.meta_markers.get(annotation).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_registers_public_method() {
        let save = MethodRef::of("ServiceImpl", "save", ["Item"]);
        let mut registry = TypeRegistry::new();
        registry.mark(&save, FlushMarker::entry("items"));

        assert_eq!(registry.method_info(&save), Some(MethodInfo::new(Visibility::Public)));
        assert_eq!(
            registry.declared_method(&"ServiceImpl".into(), save.signature()),
            Some(save.clone())
        );
        assert_eq!(
            registry.direct_marker(&(&save).into()),
            Some(FlushMarker::entry("items"))
        );
    }

    #[test]
    fn test_declared_method_is_not_inherited() {
        let base_save = MethodRef::of("BaseService", "save", ["Item"]);
        let mut registry = TypeRegistry::new();
        registry
            .extend("ServiceImpl", "BaseService")
            .method(&base_save, Visibility::Public);

        assert!(registry.declared_method(&"ServiceImpl".into(), base_save.signature()).is_none());
        assert_eq!(registry.superclass(&"ServiceImpl".into()), Some("BaseService".into()));
        assert_eq!(registry.superclass(&"BaseService".into()), None);
    }

    #[test]
    fn test_bridge_points_at_target() {
        let bridge = MethodRef::of("ServiceImpl", "save", ["Object"]);
        let target = MethodRef::of("ServiceImpl", "save", ["Item"]);
        let mut registry = TypeRegistry::new();
        registry.bridge(&bridge, &target);

        assert_eq!(registry.method_info(&bridge).and_then(|i| i.bridged), Some(target.clone()));
        assert!(!registry.method_info(&target).unwrap().is_bridge());
    }

    #[test]
    fn test_meta_markers_follow_annotation_order() {
        let ty = TypeRef::from("ServiceImpl");
        let mut registry = TypeRegistry::new();
        registry
            .meta_marker("FlushOrders", FlushMarker::all("orders"))
            .meta_marker("FlushItems", FlushMarker::entry("items"))
            .annotate(&ty, "Transactional")
            .annotate(&ty, "FlushItems")
            .annotate(&ty, "FlushOrders");

        assert_eq!(
            registry.meta_markers(&(&ty).into()),
            vec![FlushMarker::entry("items"), FlushMarker::all("orders")]
        );
        assert!(registry.direct_marker(&(&ty).into()).is_none());
        assert!(registry.meta_markers(&TypeRef::from("Other").into()).is_empty());
    }
}

//! 标记查找与解析

use crate::{CacheManagerLocator, FlushPolicy};
use flush_errors::FlushResult;
use flush_ports::{AnnotatedElement, FlushMarker, MetadataSource};
use std::sync::Arc;

pub struct MarkerResolver {
    source: Arc<dyn MetadataSource>,
    locator: CacheManagerLocator,
}

impl MarkerResolver {
    pub fn new(source: Arc<dyn MetadataSource>, locator: CacheManagerLocator) -> Self {
        Self { source, locator }
    }

    pub fn locator(&self) -> &CacheManagerLocator {
        &self.locator
    }

    /// 先查直接标记，再查元素上各注解携带的标记，取第一个
    pub fn find_marker(&self, element: &AnnotatedElement) -> Option<FlushMarker> {
        self.source
            .direct_marker(element)
            .or_else(|| self.source.meta_markers(element).into_iter().next())
    }

    /// 查找并解析为策略；缓存不存在时返回错误
    pub fn find_policy(&self, element: &AnnotatedElement) -> FlushResult<Option<FlushPolicy>> {
        self.find_marker(element)
            .map(|marker| self.parse_marker(&marker))
            .transpose()
    }

    pub fn parse_marker(&self, marker: &FlushMarker) -> FlushResult<FlushPolicy> {
        let cache = self.locator.cache(&marker.cache_name)?;
        Ok(FlushPolicy::new(cache, marker.remove_all))
    }
}

//! 缓存失效属性解析入口

use crate::{CacheKey, CacheManagerLocator, CachedPolicy, FlushPolicy, HierarchyWalker, MarkerResolver};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use flush_config::ResolverConfig;
use flush_errors::FlushResult;
use flush_ports::{AnnotatedElement, ManagerRegistry, MetadataSource, MethodRef, TypeRef};
use flush_telemetry::{LOOKUPS_TOTAL, RESOLUTION_ERRORS_TOTAL};
use metrics::counter;
use std::sync::Arc;
use tracing::debug;

/// 带缓存的失效属性解析器
///
/// 每个 (方法, 目标类型) 只完整解析一次，之后直接命中缓存；
/// "没有失效声明" 同样会被缓存。解析失败不缓存，下次调用重新解析。
pub struct AttributeResolver {
    source: Arc<dyn MetadataSource>,
    walker: HierarchyWalker,
    markers: MarkerResolver,
    public_methods_only: bool,
    cache: DashMap<CacheKey, CachedPolicy>,
}

impl AttributeResolver {
    pub fn new(source: Arc<dyn MetadataSource>, locator: CacheManagerLocator) -> Self {
        Self {
            walker: HierarchyWalker::new(source.clone()),
            markers: MarkerResolver::new(source.clone(), locator),
            source,
            public_methods_only: false,
            cache: DashMap::new(),
        }
    }

    pub fn from_config(
        config: &ResolverConfig,
        source: Arc<dyn MetadataSource>,
        registry: Arc<dyn ManagerRegistry>,
    ) -> Self {
        let locator = CacheManagerLocator::new(registry, config.manager_name.clone());
        Self::new(source, locator).public_methods_only(config.public_methods_only)
    }

    /// 只识别 public 方法上的标记（默认关闭）
    pub fn public_methods_only(mut self, enabled: bool) -> Self {
        self.public_methods_only = enabled;
        self
    }

    pub fn locator(&self) -> &CacheManagerLocator {
        self.markers.locator()
    }

    /// 已缓存的解析结果数量
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// 解析方法调用的失效策略
    ///
    /// `target_type` 为空时按方法的声明类型解析。返回 `Ok(None)` 表示无需驱逐。
    pub fn resolve(
        &self,
        method: &MethodRef,
        target_type: Option<&TypeRef>,
    ) -> FlushResult<Option<FlushPolicy>> {
        let key = CacheKey::new(method, target_type);
        if let Some(cached) = self.cache.get(&key) {
            counter!(LOOKUPS_TOTAL, "outcome" => "hit").increment(1);
            return Ok(cached.as_policy().cloned());
        }
        counter!(LOOKUPS_TOTAL, "outcome" => "miss").increment(1);

        let computed = self.compute(method, target_type).inspect_err(|err| {
            counter!(RESOLUTION_ERRORS_TOTAL).increment(1);
            debug!(method = %method, error = %err, "Flush attribute resolution failed");
        })?;

        // 并发首次解析时以先写入者为准
        let stored = match self.cache.entry(key) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                if let Some(policy) = &computed {
                    debug!(
                        method = method.name(),
                        key = %entry.key(),
                        attribute = %policy,
                        "Adding flushable method"
                    );
                }
                entry.insert(CachedPolicy::from(computed)).value().clone()
            }
        };
        Ok(stored.into_policy())
    }

    fn compute(
        &self,
        method: &MethodRef,
        target_type: Option<&TypeRef>,
    ) -> FlushResult<Option<FlushPolicy>> {
        if self.public_methods_only && !self.is_public(method) {
            return Ok(None);
        }

        // 方法可能声明在接口上，标记通常在目标类型的实现上
        let specific = self.walker.specific_method(method, target_type);

        if let Some(policy) = self.markers.find_policy(&AnnotatedElement::from(&specific))? {
            return Ok(Some(policy));
        }

        if specific != *method {
            if let Some(policy) = self.markers.find_policy(&AnnotatedElement::from(method))? {
                return Ok(Some(policy));
            }
            return self
                .markers
                .find_policy(&AnnotatedElement::from(method.declaring_type()));
        }

        Ok(None)
    }

    /// 未登记的方法视为 public
    fn is_public(&self, method: &MethodRef) -> bool {
        self.source
            .method_info(method)
            .is_none_or(|info| info.visibility.is_public())
    }
}

//! 单元测试共用的缓存替身

use async_trait::async_trait;
use flush_errors::FlushResult;
use flush_ports::Cache;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// 记录驱逐操作的缓存
pub struct RecordingCache {
    name: String,
    evicted: Mutex<Vec<String>>,
    clears: AtomicUsize,
}

impl RecordingCache {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            evicted: Mutex::new(Vec::new()),
            clears: AtomicUsize::new(0),
        })
    }

    pub fn evicted(&self) -> Vec<String> {
        self.evicted.lock().unwrap().clone()
    }

    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Cache for RecordingCache {
    fn name(&self) -> &str {
        &self.name
    }

    async fn evict(&self, key: &str) -> FlushResult<()> {
        self.evicted.lock().unwrap().push(key.to_string());
        Ok(())
    }

    async fn clear(&self) -> FlushResult<()> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

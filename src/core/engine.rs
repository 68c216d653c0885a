use crate::core::holder::DatasetHolder;
use crate::core::loader::load;
use crate::core::query::execute;
use crate::domain::model::{LoadSummary, Query, QueryOutcome};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::sync::Arc;

/// 外部呼叫端使用的入口：讀檔、解析、替換資料集、執行查詢
pub struct InsightEngine<S: Storage> {
    storage: S,
    holder: Arc<DatasetHolder>,
}

impl<S: Storage> InsightEngine<S> {
    pub fn new(storage: S) -> Self {
        Self::with_holder(storage, Arc::new(DatasetHolder::new()))
    }

    /// 共用既有的資料集容器
    pub fn with_holder(storage: S, holder: Arc<DatasetHolder>) -> Self {
        Self { storage, holder }
    }

    pub fn holder(&self) -> &Arc<DatasetHolder> {
        &self.holder
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 解析失敗時不會替換目前的資料集
    pub async fn ingest(&self, path: &str) -> Result<LoadSummary> {
        tracing::info!("📥 Reading upload from: {}", path);
        let bytes = self.storage.read_file(path).await?;
        self.ingest_bytes(&bytes, path)
    }

    pub fn ingest_bytes(&self, bytes: &[u8], source: &str) -> Result<LoadSummary> {
        let dataset = match load(bytes) {
            Ok(dataset) => dataset,
            Err(e) => {
                tracing::warn!("⚠️ Rejected upload '{}': {}", source, e);
                return Err(e);
            }
        };

        let summary = self.holder.replace_with_source(dataset, source);
        tracing::info!("📊 Loaded {} records from {}", summary.records, source);
        Ok(summary)
    }

    /// 對目前的資料集快照執行查詢
    pub fn run(&self, query: &Query) -> QueryOutcome {
        let dataset = self.holder.current();
        tracing::debug!("Running {} over {} records", query.kind(), dataset.len());
        let outcome = execute(&dataset, query);
        tracing::info!("🔎 {} returned {} results", query.kind(), outcome.len());
        outcome
    }

    /// 由外部選擇器字串執行；未知的選擇器回傳 InvalidQuery
    pub fn run_selector(&self, selector: &str, needle: Option<&str>, limit: usize) -> Result<QueryOutcome> {
        let query = Query::from_selector(selector, needle, limit)?;
        Ok(self.run(&query))
    }
}

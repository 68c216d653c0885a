use crate::domain::model::{Dataset, LoadSummary};
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct Slot {
    dataset: Arc<Dataset>,
    summary: Option<LoadSummary>,
}

/// 目前生效的資料集。`replace` 整批替換，讀取端只會看到完整的舊或新資料集。
#[derive(Debug, Default)]
pub struct DatasetHolder {
    slot: RwLock<Slot>,
}

impl DatasetHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, dataset: Dataset) {
        self.replace_with_source(dataset, "<memory>");
    }

    /// 替換資料集並記錄來源，回傳此次載入的摘要
    pub fn replace_with_source(&self, dataset: Dataset, source: &str) -> LoadSummary {
        let summary = LoadSummary {
            source: source.to_string(),
            records: dataset.len(),
            columns: dataset.columns().to_vec(),
            loaded_at: chrono::Utc::now(),
        };
        let next = Slot {
            dataset: Arc::new(dataset),
            summary: Some(summary.clone()),
        };

        // 鎖中毒時資料本身仍完整（只做整體指派），直接沿用
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = next;
        tracing::debug!("Dataset replaced ({} records)", slot.dataset.len());
        summary
    }

    /// 首次載入前回傳空資料集
    pub fn current(&self) -> Arc<Dataset> {
        let slot = self.slot.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&slot.dataset)
    }

    pub fn last_load(&self) -> Option<LoadSummary> {
        let slot = self.slot.read().unwrap_or_else(|e| e.into_inner());
        slot.summary.clone()
    }
}

use metrics_exporter_prometheus::PrometheusHandle;
use receipt_points::receipts::{ReceiptId, ReceiptRepository, RepositoryError, StoredReceipt};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local receipt store. Nothing is persisted or evicted.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReceiptRepository {
    records: Arc<Mutex<HashMap<ReceiptId, StoredReceipt>>>,
}

impl InMemoryReceiptRepository {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<ReceiptId, StoredReceipt>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("receipt store lock poisoned".to_string()))
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().map(|guard| guard.len()).unwrap_or(0)
    }
}

impl ReceiptRepository for InMemoryReceiptRepository {
    fn insert(&self, record: StoredReceipt) -> Result<StoredReceipt, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<StoredReceipt>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }
}

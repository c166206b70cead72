use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{Item, Receipt, ReceiptId};
use crate::receipts::repository::{ReceiptRepository, RepositoryError, StoredReceipt};
use crate::receipts::ReceiptService;

pub(super) fn item(description: &str, price: &str) -> Item {
    Item {
        short_description: description.to_string(),
        price: price.to_string(),
    }
}

/// Two non-qualifying items, odd day, morning purchase: 6 + 5 + 6 = 17 points.
pub(super) fn canonical_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Knorr Creamy Chicken", "28.86"),
        ],
        total: "35.35".to_string(),
    }
}

pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

pub(super) fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
        total: "9.00".to_string(),
    }
}

pub(super) fn invalid_receipt() -> Receipt {
    let mut receipt = canonical_receipt();
    receipt.purchase_time = "1:01 PM".to_string();
    receipt.total = "35,35".to_string();
    receipt
}

pub(super) fn build_service() -> (ReceiptService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ReceiptService::new(repository.clone());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ReceiptId, StoredReceipt>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ReceiptRepository for MemoryRepository {
    fn insert(&self, record: StoredReceipt) -> Result<StoredReceipt, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<StoredReceipt>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct ConflictRepository;

impl ReceiptRepository for ConflictRepository {
    fn insert(&self, _record: StoredReceipt) -> Result<StoredReceipt, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<StoredReceipt>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl ReceiptRepository for UnavailableRepository {
    fn insert(&self, _record: StoredReceipt) -> Result<StoredReceipt, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<StoredReceipt>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

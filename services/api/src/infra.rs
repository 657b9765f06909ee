use esas_triage::config::StoreConfig;
use esas_triage::workflows::screening::{
    RawAnswers, RepositoryError, ScreeningId, ScreeningRepository, StoredScreening,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct ScreeningStore {
    records: HashMap<ScreeningId, StoredScreening>,
    order: Vec<ScreeningId>,
}

/// Process-local screening store bounded by `ESAS_RECORD_CAPACITY`.
#[derive(Clone)]
pub(crate) struct InMemoryScreeningRepository {
    capacity: usize,
    store: Arc<Mutex<ScreeningStore>>,
}

impl Default for InMemoryScreeningRepository {
    fn default() -> Self {
        Self::with_capacity(StoreConfig::default().record_capacity)
    }
}

impl InMemoryScreeningRepository {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            store: Arc::new(Mutex::new(ScreeningStore::default())),
        }
    }
}

impl ScreeningRepository for InMemoryScreeningRepository {
    fn insert(&self, screening: StoredScreening) -> Result<StoredScreening, RepositoryError> {
        let mut guard = self.store.lock().expect("repository mutex poisoned");
        if guard.records.contains_key(&screening.id) {
            return Err(RepositoryError::Conflict);
        }
        if guard.records.len() >= self.capacity {
            return Err(RepositoryError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        guard.order.push(screening.id.clone());
        guard.records.insert(screening.id.clone(), screening.clone());
        Ok(screening)
    }

    fn fetch(&self, id: &ScreeningId) -> Result<Option<StoredScreening>, RepositoryError> {
        let guard = self.store.lock().expect("repository mutex poisoned");
        Ok(guard.records.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<StoredScreening>, RepositoryError> {
        let guard = self.store.lock().expect("repository mutex poisoned");
        Ok(guard
            .order
            .iter()
            .rev()
            .take(limit)
            .filter_map(|id| guard.records.get(id).cloned())
            .collect())
    }
}

/// Parse `ITEM=VALUE` pairs such as `6=2` from the command line.
pub(crate) fn parse_score(raw: &str) -> Result<(String, serde_json::Value), String> {
    let (item, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ITEM=VALUE, got '{raw}'"))?;
    let item = item.trim();
    if item.is_empty() {
        return Err(format!("missing item number in '{raw}'"));
    }
    Ok((
        item.to_string(),
        serde_json::Value::String(value.trim().to_string()),
    ))
}

/// Collect parsed pairs into an answer map; later pairs win.
pub(crate) fn answers_from_pairs(pairs: Vec<(String, serde_json::Value)>) -> RawAnswers {
    pairs.into_iter().collect()
}

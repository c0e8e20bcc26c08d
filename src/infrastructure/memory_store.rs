use crate::domain::ports::{Record, Store};

// ── Store ─────────────────────────────────────────────────────────────────────

/// Vec-backed store. Insertion order is list order.
#[derive(Debug, Clone)]
pub struct InMemoryStore<T> {
    records: Vec<T>,
}

impl<T> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Store<T> for InMemoryStore<T> {
    fn list(&self) -> &[T] {
        &self.records
    }

    fn append(&mut self, record: T) {
        self.records.push(record);
    }

    fn replace_at(&mut self, index: usize, record: T) -> Option<T> {
        let slot = self.records.get_mut(index)?;
        Some(std::mem::replace(slot, record))
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.records.len()).then(|| self.records.remove(index))
    }
}

/// A stored resource instance with a store-assigned, immutable id.
pub trait Record: Clone + Send + 'static {
    /// Resource name used in client-facing messages, e.g. `"Order"`.
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// Ordered, process-memory collection holding every record of one type.
///
/// The store does not enforce id uniqueness; callers assign ids through an
/// [`IdGenerator`] before appending.
pub trait Store<T: Record>: Send + 'static {
    fn list(&self) -> &[T];

    fn find_by_id(&self, id: &str) -> Option<&T> {
        self.list().iter().find(|record| record.id() == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.list().iter().position(|record| record.id() == id)
    }

    fn append(&mut self, record: T);

    /// Swap the record at `index` for `record`, returning the previous one.
    fn replace_at(&mut self, index: usize, record: T) -> Option<T>;

    /// Remove exactly one record. Returns `None` when `index` is out of bounds.
    fn remove_at(&mut self, index: usize) -> Option<T>;
}

/// Source of unique record ids. Ids are never reused for the process lifetime.
pub trait IdGenerator: Send + Sync + 'static {
    fn next_id(&self) -> String;
}

use super::record::WalletRecord;
use tracing::debug;

/// Session-local identity of a stored record, assigned at insertion.
///
/// Identifiers increase monotonically and are never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A record together with its session identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletEntry {
    pub id: RecordId,
    pub record: WalletRecord,
}

/// Ordered wallet records for one session, newest first.
///
/// Records are write-once: they can be prepended or removed, never edited.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: Vec<WalletEntry>,
    next_id: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record at position 0 and return its identity.
    pub fn prepend(&mut self, record: WalletRecord) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        self.entries.insert(0, WalletEntry { id, record });
        debug!(id = id.value(), len = self.entries.len(), "Wallet record stored");
        id
    }

    /// Remove the record at `position`. Out-of-range positions remove nothing.
    pub fn delete(&mut self, position: usize) -> Option<WalletEntry> {
        if position >= self.entries.len() {
            debug!(position, len = self.entries.len(), "Ignoring delete of unknown position");
            return None;
        }
        let removed = self.entries.remove(position);
        debug!(id = removed.id.value(), position, "Wallet record deleted");
        Some(removed)
    }

    /// Current records, newest first.
    pub fn list(&self) -> &[WalletEntry] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&WalletEntry> {
        self.entries.get(position)
    }

    /// Identity of the record currently at `position`.
    pub fn id_at(&self, position: usize) -> Option<RecordId> {
        self.entries.get(position).map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display number of the record at `position`: the oldest record is #1.
    pub fn label_number(&self, position: usize) -> Option<usize> {
        (position < self.entries.len()).then(|| self.entries.len() - position)
    }

    /// Drop every record. Field contents are zeroized as records drop.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tag: &str) -> WalletRecord {
        WalletRecord::new(format!("seed {}", tag), format!("pub-{}", tag), format!("sec-{}", tag))
            .unwrap()
    }

    fn public_keys(store: &SessionStore) -> Vec<String> {
        store.list().iter().map(|e| e.record.public_key().to_string()).collect()
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut store = SessionStore::new();
        store.prepend(record("1"));
        store.prepend(record("2"));
        store.prepend(record("3"));
        assert_eq!(public_keys(&store), vec!["pub-3", "pub-2", "pub-1"]);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut store = SessionStore::new();
        let a = store.prepend(record("a"));
        store.delete(0);
        let b = store.prepend(record("b"));
        assert!(b > a);
    }

    #[test]
    fn test_delete_shifts_later_records() {
        let mut store = SessionStore::new();
        store.prepend(record("1"));
        store.prepend(record("2"));
        store.prepend(record("3"));

        let removed = store.delete(1).unwrap();
        assert_eq!(removed.record.public_key(), "pub-2");
        assert_eq!(public_keys(&store), vec!["pub-3", "pub-1"]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut store = SessionStore::new();
        store.prepend(record("1"));
        store.prepend(record("2"));
        let before = store.list().to_vec();

        assert!(store.delete(5).is_none());
        assert!(store.delete(2).is_none());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_label_numbers_count_from_oldest() {
        let mut store = SessionStore::new();
        store.prepend(record("1"));
        store.prepend(record("2"));
        assert_eq!(store.label_number(0), Some(2));
        assert_eq!(store.label_number(1), Some(1));
        assert_eq!(store.label_number(2), None);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = SessionStore::new();
        store.prepend(record("1"));
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.id_at(0), None);
    }
}

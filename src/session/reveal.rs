use super::store::RecordId;
use std::collections::HashMap;

/// Per-record "secret key visible" flags.
///
/// A missing entry means hidden. Flags are keyed by record identity, so
/// removing one record never moves a flag onto another.
#[derive(Debug, Default)]
pub struct RevealState {
    flags: HashMap<RecordId, bool>,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for `id` and return the new value.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        let flag = self.flags.entry(id).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn is_revealed(&self, id: RecordId) -> bool {
        self.flags.get(&id).copied().unwrap_or(false)
    }

    /// Drop the flag of a deleted record.
    pub fn forget(&mut self, id: RecordId) {
        self.flags.remove(&id);
    }

    pub fn clear(&mut self) {
        self.flags.clear();
    }

    /// Number of records currently revealed
    pub fn revealed_count(&self) -> usize {
        self.flags.values().filter(|v| **v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::record::WalletRecord;
    use crate::session::store::SessionStore;

    fn ids(n: usize) -> Vec<RecordId> {
        let mut store = SessionStore::new();
        (0..n)
            .map(|i| {
                store.prepend(
                    WalletRecord::new("seed words", format!("pub{}", i), "sec").unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_default_hidden() {
        let state = RevealState::new();
        for id in ids(3) {
            assert!(!state.is_revealed(id));
        }
    }

    #[test]
    fn test_toggle_flips_and_restores() {
        let mut state = RevealState::new();
        let id = ids(1)[0];
        assert!(state.toggle(id));
        assert!(state.is_revealed(id));
        assert!(!state.toggle(id));
        assert!(!state.is_revealed(id));
    }

    #[test]
    fn test_flags_are_independent() {
        let mut state = RevealState::new();
        let ids = ids(2);
        state.toggle(ids[0]);
        assert!(state.is_revealed(ids[0]));
        assert!(!state.is_revealed(ids[1]));
        assert_eq!(state.revealed_count(), 1);
    }

    #[test]
    fn test_forget_resets_to_hidden() {
        let mut state = RevealState::new();
        let id = ids(1)[0];
        state.toggle(id);
        state.forget(id);
        assert!(!state.is_revealed(id));
        assert_eq!(state.revealed_count(), 0);
    }
}

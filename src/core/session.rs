//! Session token persistence.
//!
//! The token is opaque: only its presence matters on the client. An empty
//! string counts as absent.

use leptos::logging;

use crate::config::storage::TOKEN_KEY;
use crate::core::error::StorageError;
use crate::core::storage::KeyValueStore;

/// Read the stored session token, if any.
pub fn read_token<S: KeyValueStore + ?Sized>(store: &S) -> Option<String> {
    store.get_item(TOKEN_KEY).filter(|token| !token.is_empty())
}

/// Check whether a session token is stored.
pub fn has_token<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    read_token(store).is_some()
}

/// Persist a session token after sign-in.
pub fn save_token<S: KeyValueStore + ?Sized>(store: &S, token: &str) -> Result<(), StorageError> {
    store.set_item(TOKEN_KEY, token)
}

/// Remove the session token.
///
/// Best-effort: failures are logged since the caller is already signing out.
pub fn clear_token<S: KeyValueStore + ?Sized>(store: &S) {
    if let Err(e) = store.remove_item(TOKEN_KEY) {
        logging::warn!("could not clear session token: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;

    #[test]
    fn test_missing_token() {
        let store = MemoryStorage::new();
        assert_eq!(read_token(&store), None);
        assert!(!has_token(&store));
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let store = MemoryStorage::with_entries([(TOKEN_KEY, "")]);
        assert_eq!(read_token(&store), None);
        assert!(!has_token(&store));
    }

    #[test]
    fn test_any_non_empty_token_is_present() {
        for token in ["abc123", " ", "not.a.jwt", "{}"] {
            let store = MemoryStorage::with_entries([(TOKEN_KEY, token)]);
            assert_eq!(read_token(&store), Some(token.to_string()));
        }
    }

    #[test]
    fn test_save_then_clear() {
        let store = MemoryStorage::new();
        save_token(&store, "abc123").unwrap();
        assert!(has_token(&store));

        clear_token(&store);
        assert!(!has_token(&store));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let store = MemoryStorage::with_entries([("token", "abc"), ("peermall_tokens", "x")]);
        assert!(!has_token(&store));
    }
}

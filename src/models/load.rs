//! Load state of data fetched from the backend.

use crate::core::error::ApiError;

/// Remote data as seen by a component.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Apply `f` to a loaded value in place. No-op while loading or failed.
    pub fn update_ready(&mut self, f: impl FnOnce(&mut T)) {
        if let Self::Ready(value) = self {
            f(value);
        }
    }
}

impl<T> From<Result<T, ApiError>> for LoadState<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: LoadState<u8> = Ok(3).into();
        assert_eq!(ok.ready(), Some(&3));

        let err: LoadState<u8> = Err(ApiError::NotFound).into();
        assert_eq!(err, LoadState::Failed(ApiError::NotFound));
        assert_eq!(err.ready(), None);
    }

    #[test]
    fn test_update_ready_only_touches_loaded_values() {
        let mut list = LoadState::Ready(vec![1, 2]);
        list.update_ready(|v| v.push(3));
        assert_eq!(list, LoadState::Ready(vec![1, 2, 3]));

        let mut pending: LoadState<Vec<i32>> = LoadState::Loading;
        pending.update_ready(|v| v.push(3));
        assert_eq!(pending, LoadState::Loading);
    }
}

//! State of a screen's remote data: loading, loaded or failed.

use crate::client::ApiError;

/// Lifecycle of one remote read.
///
/// Screens start in `Loading`, settle in `Ready` or `Failed`, and go back to
/// `Loading` when the user retries.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    /// Request in flight.
    #[default]
    Loading,
    /// Data arrived.
    Ready(T),
    /// Request failed; the screen offers a retry.
    Failed(ApiError),
}

impl<T> Loadable<T> {
    /// Settle a finished request.
    #[must_use]
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }

    /// Whether the request is still in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded data, if any.
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Message to display when the read failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(err) => Some(err.message()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state: Loadable<u32> = Loadable::default();
        assert!(state.is_loading());
        assert_eq!(state.ready(), None);
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_from_result() {
        let ready = Loadable::from_result(Ok::<_, ApiError>(3));
        assert_eq!(ready.ready(), Some(&3));

        let failed: Loadable<u32> = Loadable::from_result(Err(ApiError::new("Invalid token")));
        assert_eq!(failed.error_message(), Some("Invalid token"));
        assert!(!failed.is_loading());
    }
}

//! # Resource
//!
//! The result container every screen renders from. A request starts as
//! `Loading` and is replaced by `Success` or `Failure` when it resolves.
//!
//! ```text
//! Loading ──▶ Success(data)
//!    │
//!    └─────▶ Failure(message)
//! ```
//!
//! Exactly one variant is ever populated, so a screen can't observe data,
//! a spinner and an error at the same time.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Resource<T> {
    /// Request issued, no outcome yet.
    #[default]
    Loading,
    /// Request completed. An empty collection is still a success.
    Success(T),
    /// Request failed. Carries the failure message for display.
    Failure(String),
}

impl<T> Resource<T> {
    /// Collapse a fallible call into a resource, keeping only the error text.
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Resource::Success(data),
            Err(e) => Resource::Failure(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Resource::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Resource<&T> {
        match self {
            Resource::Loading => Resource::Loading,
            Resource::Success(data) => Resource::Success(data),
            Resource::Failure(message) => Resource::Failure(message.clone()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Resource::Loading => Resource::Loading,
            Resource::Success(data) => Resource::Success(f(data)),
            Resource::Failure(message) => Resource::Failure(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let resource: Resource<Vec<u8>> = Resource::default();
        assert!(resource.is_loading());
        assert!(resource.data().is_none());
        assert!(resource.error().is_none());
    }

    #[test]
    fn test_from_result_ok_is_success() {
        let resource = Resource::<Vec<u8>>::from_result(Ok::<_, String>(vec![]));
        assert_eq!(resource, Resource::Success(vec![]));
        assert!(!resource.is_loading());
    }

    #[test]
    fn test_from_result_err_keeps_message() {
        let resource = Resource::<u8>::from_result(Err("connection refused"));
        assert_eq!(resource.error(), Some("connection refused"));
        assert!(resource.data().is_none());
        assert!(!resource.is_loading());
    }

    #[test]
    fn test_map_preserves_variant() {
        assert_eq!(Resource::Success(2).map(|n| n * 2), Resource::Success(4));
        assert_eq!(Resource::<u8>::Loading.map(|n| n * 2), Resource::Loading);
        assert_eq!(
            Resource::<u8>::Failure("boom".to_string()).map(|n| n * 2),
            Resource::Failure("boom".to_string())
        );
    }

    #[test]
    fn test_as_ref_borrows_data() {
        let resource = Resource::Success(String::from("dune"));
        assert_eq!(resource.as_ref().data().map(|s| s.as_str()), Some("dune"));
    }
}

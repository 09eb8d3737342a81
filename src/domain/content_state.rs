// Lifecycle of an asynchronously produced value.

use std::sync::Arc;

use crate::error::AppError;

/// Loading → Success | Error. A given load never leaves Success or Error.
#[derive(Debug, Clone)]
pub enum ContentState<T> {
    Loading,
    Success(T),
    Error(LoadFailure),
}

/// Opaque, cheaply cloneable cause of a failed load
#[derive(Debug, Clone)]
pub struct LoadFailure(Arc<AppError>);

impl LoadFailure {
    pub fn new(error: AppError) -> Self {
        Self(Arc::new(error))
    }

    pub fn cause(&self) -> &AppError {
        &self.0
    }
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AppError> for LoadFailure {
    fn from(error: AppError) -> Self {
        Self::new(error)
    }
}

impl<T> ContentState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ContentState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ContentState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ContentState::Error(_))
    }

    /// Success and Error are terminal for a load
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ContentState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            ContentState::Error(failure) => Some(failure),
            _ => None,
        }
    }

    /// Transforms the Success payload; Loading and Error pass through unchanged
    pub fn map<U, F>(self, f: F) -> ContentState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ContentState::Loading => ContentState::Loading,
            ContentState::Success(data) => ContentState::Success(f(data)),
            ContentState::Error(failure) => ContentState::Error(failure),
        }
    }

    pub fn as_ref(&self) -> ContentState<&T> {
        match self {
            ContentState::Loading => ContentState::Loading,
            ContentState::Success(data) => ContentState::Success(data),
            ContentState::Error(failure) => ContentState::Error(failure.clone()),
        }
    }

    /// Lowercase tag used in logs and DTOs
    pub fn status(&self) -> &'static str {
        match self {
            ContentState::Loading => "loading",
            ContentState::Success(_) => "success",
            ContentState::Error(_) => "error",
        }
    }
}

impl<T> Default for ContentState<T> {
    fn default() -> Self {
        ContentState::Loading
    }
}

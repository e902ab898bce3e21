//! Lifecycle of a single asynchronous fetch.
//!
//! `RemoteState` is a closed set of four variants. Render paths go through
//! [`RemoteState::fold`] (or [`RemoteState::try_fold`]) so that every load
//! outcome has to be handled at each call site.

/// State of one fetch episode: `NotAsked -> Loading -> Failure | Success`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RemoteState<T, E = String> {
    /// No fetch has been initiated
    #[default]
    NotAsked,
    /// Fetch in flight, no data yet
    Loading,
    /// Fetch completed with an error
    Failure(E),
    /// Fetch completed with data
    Success(T),
}

impl<T, E> RemoteState<T, E> {
    /// Build the terminal variant for a finished episode.
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(error) => Self::Failure(error),
        }
    }

    /// Exhaustive match: one handler per variant, no fallthrough.
    pub fn fold<'a, R>(
        &'a self,
        not_asked: impl FnOnce() -> R,
        loading: impl FnOnce() -> R,
        failure: impl FnOnce(&'a E) -> R,
        success: impl FnOnce(&'a T) -> R,
    ) -> R {
        match self {
            Self::NotAsked => not_asked(),
            Self::Loading => loading(),
            Self::Failure(error) => failure(error),
            Self::Success(data) => success(data),
        }
    }

    /// Like [`fold`](Self::fold), but handlers may fail.
    pub fn try_fold<'a, R, X>(
        &'a self,
        not_asked: impl FnOnce() -> Result<R, X>,
        loading: impl FnOnce() -> Result<R, X>,
        failure: impl FnOnce(&'a E) -> Result<R, X>,
        success: impl FnOnce(&'a T) -> Result<R, X>,
    ) -> Result<R, X> {
        self.fold(not_asked, loading, failure, success)
    }

    /// True once the episode has an outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Failure(_) | Self::Success(_))
    }

    pub fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Variant name, for logging.
    pub fn label(&self) -> &'static str {
        self.fold(|| "NotAsked", || "Loading", |_| "Failure", |_| "Success")
    }
}

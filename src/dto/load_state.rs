//! Explicit fetch lifecycle for views whose content depends on user input.

use std::fmt::Display;

use serde::Serialize;

/// `Idle -> Loading -> {Loaded, Failed}`.
///
/// A view starts `Idle` until its inputs (filter, search criteria) are
/// declared, moves to `Loading` when a fetch begins and settles on the
/// outcome. Starting a new fetch from a settled state discards the previous
/// outcome, so the latest completed response is always the one displayed.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn start(&mut self) {
        *self = LoadState::Loading;
    }

    /// Settles a pending fetch. Ignored unless the state is `Loading`.
    pub fn finish<E: Display>(&mut self, result: Result<T, E>) {
        if !matches!(self, LoadState::Loading) {
            return;
        }
        *self = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err.to_string()),
        };
    }

    /// Runs `fetch` through the full lifecycle.
    pub async fn load<E, F>(fetch: F) -> Self
    where
        E: Display,
        F: Future<Output = Result<T, E>>,
    {
        let mut state = LoadState::Idle;
        state.start();
        state.finish(fetch.await);
        state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, LoadState::Idle)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Results are displayed only for a completed, non-empty fetch.
    pub fn has_results(&self) -> bool {
        self.loaded().is_some_and(|items| !items.is_empty())
    }

    /// A completed fetch that matched nothing.
    pub fn is_empty_result(&self) -> bool {
        self.loaded().is_some_and(Vec::is_empty)
    }
}

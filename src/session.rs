//! Drives a [`SearchState`] with a [`FoodSource`].

use crate::food::FoodRecord;
use crate::state::{Action, Effect, SearchState};
use crate::{Client, Error, Result};
use async_trait::async_trait;
use tracing::{error, info};

/// Anything that can answer a food query.
#[async_trait]
pub trait FoodSource: Send + Sync {
	async fn search_food(&self, query: &str) -> Result<Vec<FoodRecord>>;
}

#[async_trait]
impl FoodSource for Client {
	async fn search_food(&self, query: &str) -> Result<Vec<FoodRecord>> {
		Client::search_food(self, query).await
	}
}

/// Result of [`SearchSession::submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
	/// Query failed local validation; nothing was sent.
	Rejected,
	/// Results replaced the list.
	Loaded { count: usize },
	/// The request failed; the state shows the generic message.
	Failed(Error),
}

pub struct SearchSession<S> {
	source: S,
	state: SearchState,
}

/// Constructors
impl<S: FoodSource> SearchSession<S> {
	pub fn new(source: S) -> Self {
		Self::with_state(source, SearchState::default())
	}

	pub fn with_state(source: S, state: SearchState) -> Self {
		SearchSession { source, state }
	}
}

impl<S: FoodSource> SearchSession<S> {
	pub fn state(&self) -> &SearchState {
		&self.state
	}

	pub fn source(&self) -> &S {
		&self.source
	}

	/// Applies a local action. A fetch effect is not run here; use
	/// [`SearchSession::submit`] for searches.
	pub fn dispatch(&mut self, action: Action) -> Effect {
		self.state.apply(action)
	}

	/// Sets the query, submits it and applies the outcome.
	pub async fn submit(&mut self, query: impl Into<String>) -> SubmitOutcome {
		self.state.apply(Action::QueryChanged(query.into()));

		let Effect::Fetch { request_id, query } = self.state.apply(Action::SearchSubmitted) else {
			return SubmitOutcome::Rejected;
		};

		match self.source.search_food(&query).await {
			Ok(records) => {
				let count = records.len();
				info!(request_id, %query, count, "food search succeeded");
				self.state.apply(Action::RequestSucceeded { request_id, records });
				SubmitOutcome::Loaded { count }
			}
			Err(err) => {
				error!(request_id, %query, error = %err, "food search failed");
				self.state.apply(Action::RequestFailed { request_id });
				SubmitOutcome::Failed(err)
			}
		}
	}
}

// region:    --- Tests


// endregion: --- Tests

use crate::food::{DisplayUnit, FoodCardView, FoodRecord, Quantity, parse_amount};
use crate::state::{Action, Effect, RequestId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{AsRefStr, Display, EnumString};
use tracing::debug;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a food name";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch food data. Try again later.";

/// What to do with a completion when a newer search was submitted meanwhile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum StalePolicy {
	/// Every completion is applied and clears the loading flag; the last one
	/// to resolve wins.
	#[default]
	LastResolvedWins,
	/// Only the completion of the latest submitted search is applied.
	LatestOnly,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
	query: String,
	foods: Vec<FoodRecord>,
	quantities: HashMap<String, Quantity>,
	unit: DisplayUnit,
	loading: bool,
	error: Option<String>,
	stale_policy: StalePolicy,
	latest_request_id: RequestId,
}

/// Constructors
impl SearchState {
	pub fn new(stale_policy: StalePolicy) -> Self {
		SearchState {
			stale_policy,
			..Default::default()
		}
	}
}

/// Getters
impl SearchState {
	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn foods(&self) -> &[FoodRecord] {
		&self.foods
	}

	pub fn unit(&self) -> DisplayUnit {
		self.unit
	}

	pub fn is_loading(&self) -> bool {
		self.loading
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn stale_policy(&self) -> StalePolicy {
		self.stale_policy
	}

	pub fn latest_request_id(&self) -> RequestId {
		self.latest_request_id
	}

	/// Current quantity of `name`, the baseline when none is stored.
	pub fn quantity(&self, name: &str) -> Quantity {
		self.quantities.get(name).copied().unwrap_or_default()
	}

	/// Exact record name matching `name` case-insensitively.
	pub fn resolve_name(&self, name: &str) -> Option<&str> {
		let name = name.trim();
		self.foods
			.iter()
			.map(|food| food.name.as_str())
			.find(|candidate| candidate.eq_ignore_ascii_case(name))
	}

	/// One card per record, in result order.
	pub fn cards(&self) -> Vec<FoodCardView> {
		self.foods
			.iter()
			.map(|food| FoodCardView::new(food, self.quantity(&food.name), self.unit))
			.collect()
	}
}

/// Reducer
impl SearchState {
	pub fn apply(&mut self, action: Action) -> Effect {
		match action {
			Action::QueryChanged(query) => {
				self.query = query;
				Effect::None
			}
			Action::SearchSubmitted => self.submit(),
			Action::RequestSucceeded { request_id, records } => {
				if self.is_stale(request_id) {
					return Effect::None;
				}
				self.quantities = records
					.iter()
					.map(|record| (record.name.clone(), Quantity::default()))
					.collect();
				self.foods = records;
				self.loading = false;
				Effect::None
			}
			Action::RequestFailed { request_id } => {
				if self.is_stale(request_id) {
					return Effect::None;
				}
				self.error = Some(FETCH_FAILED_MESSAGE.to_string());
				self.loading = false;
				Effect::None
			}
			Action::QuantityChanged { name, delta } => {
				self.adjust_quantity(&name, delta);
				Effect::None
			}
			Action::QuantitySet { name, text } => {
				match parse_amount(&text) {
					Some(value) => {
						let delta = value.saturating_sub(i64::from(self.quantity(&name).get()));
						self.adjust_quantity(&name, delta);
					}
					None => debug!(%name, %text, "ignoring non-numeric quantity"),
				}
				Effect::None
			}
			Action::UnitChanged(unit) => {
				self.unit = unit;
				Effect::None
			}
		}
	}

	fn submit(&mut self) -> Effect {
		let query = self.query.trim();
		if query.is_empty() {
			self.error = Some(EMPTY_QUERY_MESSAGE.to_string());
			return Effect::None;
		}

		let query = query.to_string();
		self.latest_request_id += 1;
		self.loading = true;
		self.error = None;

		Effect::Fetch {
			request_id: self.latest_request_id,
			query,
		}
	}

	fn is_stale(&self, request_id: RequestId) -> bool {
		let stale = self.stale_policy == StalePolicy::LatestOnly && request_id != self.latest_request_id;
		if stale {
			debug!(request_id, latest = self.latest_request_id, "dropping stale search completion");
		}
		stale
	}

	fn adjust_quantity(&mut self, name: &str, delta: i64) {
		if !self.foods.iter().any(|food| food.name == name) {
			debug!(%name, "quantity change for unknown food ignored");
			return;
		}
		let next = self.quantity(name).adjust(delta);
		self.quantities.insert(name.to_string(), next);
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;
	use crate::food::{MIN_QUANTITY, QUANTITY_STEP};

	fn banana() -> FoodRecord {
		FoodRecord::new("Banana", 105.0, 1.3, 0.3, 27.0)
	}

	fn apple() -> FoodRecord {
		FoodRecord::new("Apple", 52.0, 0.3, 0.2, 14.0)
	}

	fn submit(state: &mut SearchState, query: &str) -> RequestId {
		state.apply(Action::QueryChanged(query.to_string()));
		match state.apply(Action::SearchSubmitted) {
			Effect::Fetch { request_id, .. } => request_id,
			Effect::None => panic!("expected a fetch for {query:?}"),
		}
	}

	fn loaded(records: Vec<FoodRecord>) -> SearchState {
		let mut state = SearchState::default();
		let request_id = submit(&mut state, "fruit");
		state.apply(Action::RequestSucceeded { request_id, records });
		state
	}

	#[test]
	fn test_empty_query_is_rejected_without_fetch() {
		let mut state = SearchState::default();
		for query in ["", "   ", "\t\n"] {
			state.apply(Action::QueryChanged(query.to_string()));
			assert_eq!(state.apply(Action::SearchSubmitted), Effect::None);
			assert_eq!(state.error(), Some(EMPTY_QUERY_MESSAGE));
			assert!(!state.is_loading());
		}
	}

	#[test]
	fn test_submit_sets_loading_and_clears_error() {
		let mut state = SearchState::default();
		state.apply(Action::SearchSubmitted);
		assert!(state.error().is_some());

		state.apply(Action::QueryChanged("  banana ".to_string()));
		let effect = state.apply(Action::SearchSubmitted);
		assert_eq!(
			effect,
			Effect::Fetch {
				request_id: 1,
				query: "banana".to_string()
			}
		);
		assert!(state.is_loading());
		assert_eq!(state.error(), None);
	}

	#[test]
	fn test_success_replaces_list_and_resets_quantities() {
		let mut state = loaded(vec![banana()]);
		state.apply(Action::QuantityChanged {
			name: "Banana".to_string(),
			delta: 50,
		});
		assert_eq!(state.quantity("Banana").get(), 150);

		let request_id = submit(&mut state, "fruit");
		state.apply(Action::RequestSucceeded {
			request_id,
			records: vec![banana(), apple()],
		});

		assert!(!state.is_loading());
		assert_eq!(state.foods().len(), 2);
		assert_eq!(state.quantity("Banana").get(), 100);
		assert_eq!(state.quantity("Apple").get(), 100);
	}

	#[test]
	fn test_failure_keeps_previous_results() {
		let mut state = loaded(vec![banana()]);
		let request_id = submit(&mut state, "pizza");
		state.apply(Action::RequestFailed { request_id });

		assert!(!state.is_loading());
		assert_eq!(state.error(), Some(FETCH_FAILED_MESSAGE));
		assert_eq!(state.foods(), &[banana()]);
	}

	#[test]
	fn test_quantity_steps_and_floor() {
		let mut state = loaded(vec![banana()]);
		for _ in 0..50 {
			state.apply(Action::QuantityChanged {
				name: "Banana".to_string(),
				delta: -QUANTITY_STEP,
			});
		}
		assert_eq!(state.quantity("Banana").get(), MIN_QUANTITY);

		state.apply(Action::QuantityChanged {
			name: "Banana".to_string(),
			delta: QUANTITY_STEP,
		});
		assert_eq!(state.quantity("Banana").get(), 20);
	}

	#[test]
	fn test_quantity_change_touches_one_record() {
		let mut state = loaded(vec![banana(), apple()]);
		state.apply(Action::QuantityChanged {
			name: "Apple".to_string(),
			delta: -50,
		});
		assert_eq!(state.quantity("Apple").get(), 50);
		assert_eq!(state.quantity("Banana").get(), 100);
	}

	#[test]
	fn test_quantity_change_for_unknown_name_is_ignored() {
		let mut state = loaded(vec![banana()]);
		state.apply(Action::QuantityChanged {
			name: "Kiwi".to_string(),
			delta: 30,
		});
		assert_eq!(state.quantity("Kiwi").get(), 100);
		assert_eq!(state.cards().len(), 1);
	}

	#[test]
	fn test_quantity_set_from_text() {
		let mut state = loaded(vec![banana()]);
		let set = |state: &mut SearchState, text: &str| {
			state.apply(Action::QuantitySet {
				name: "Banana".to_string(),
				text: text.to_string(),
			});
		};

		set(&mut state, " 250 ");
		assert_eq!(state.quantity("Banana").get(), 250);

		set(&mut state, "3");
		assert_eq!(state.quantity("Banana").get(), MIN_QUANTITY);

		set(&mut state, "abc");
		assert_eq!(state.quantity("Banana").get(), MIN_QUANTITY);
	}

	#[test]
	fn test_quantity_set_floors_decimal_text() {
		let mut state = loaded(vec![banana()]);
		let set = |state: &mut SearchState, text: &str| {
			state.apply(Action::QuantitySet {
				name: "Banana".to_string(),
				text: text.to_string(),
			});
		};

		set(&mut state, "250.7");
		assert_eq!(state.quantity("Banana").get(), 250);

		set(&mut state, "9.9");
		assert_eq!(state.quantity("Banana").get(), MIN_QUANTITY);

		set(&mut state, "NaN");
		assert_eq!(state.quantity("Banana").get(), MIN_QUANTITY);
	}

	#[test]
	fn test_unit_change_keeps_values() {
		let mut state = loaded(vec![banana()]);
		let before = state.cards()[0].nutrition;
		state.apply(Action::UnitChanged(DisplayUnit::Milliliters));
		let card = &state.cards()[0];
		assert_eq!(card.nutrition, before);
		assert_eq!(card.quantity_text(), "100 milliliters");
	}

	#[test]
	fn test_cards_scale_with_quantity() {
		let mut state = loaded(vec![banana()]);
		state.apply(Action::QuantityChanged {
			name: "Banana".to_string(),
			delta: -50,
		});
		let card = &state.cards()[0];
		assert_eq!(card.calories_text(), "53 kcal");
		assert_eq!(card.protein_text(), "0.7g");
	}

	#[test]
	fn test_duplicate_names_share_quantity() {
		let mut state = loaded(vec![banana(), FoodRecord::new("Banana", 90.0, 1.0, 0.2, 23.0)]);
		state.apply(Action::QuantityChanged {
			name: "Banana".to_string(),
			delta: 100,
		});
		let cards = state.cards();
		assert_eq!(cards[0].quantity.get(), 200);
		assert_eq!(cards[1].quantity.get(), 200);
	}

	#[test]
	fn test_last_resolved_wins_by_default() {
		let mut state = SearchState::default();
		let first = submit(&mut state, "banana");
		let second = submit(&mut state, "apple");

		state.apply(Action::RequestSucceeded {
			request_id: second,
			records: vec![apple()],
		});
		state.apply(Action::RequestSucceeded {
			request_id: first,
			records: vec![banana()],
		});

		assert_eq!(state.foods(), &[banana()]);
		assert!(!state.is_loading());
	}

	#[test]
	fn test_latest_only_drops_stale_completions() {
		let mut state = SearchState::new(StalePolicy::LatestOnly);
		let first = submit(&mut state, "banana");
		let second = submit(&mut state, "apple");

		state.apply(Action::RequestFailed { request_id: first });
		assert!(state.is_loading());
		assert_eq!(state.error(), None);

		state.apply(Action::RequestSucceeded {
			request_id: second,
			records: vec![apple()],
		});
		state.apply(Action::RequestSucceeded {
			request_id: first,
			records: vec![banana()],
		});

		assert_eq!(state.foods(), &[apple()]);
		assert!(!state.is_loading());
	}

	#[test]
	fn test_resolve_name_case_insensitive() {
		let state = loaded(vec![banana(), apple()]);
		assert_eq!(state.resolve_name("banana"), Some("Banana"));
		assert_eq!(state.resolve_name(" APPLE "), Some("Apple"));
		assert_eq!(state.resolve_name("kiwi"), None);
	}
}

// endregion: --- Tests

use crate::food::{DisplayUnit, FoodRecord};

/// Monotonic id of a submitted search.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
	/// The query field was edited.
	QueryChanged(String),

	/// The search control was triggered with the current query.
	SearchSubmitted,

	RequestSucceeded {
		request_id: RequestId,
		records: Vec<FoodRecord>,
	},

	/// Failure detail is logged by whoever ran the request; the state only
	/// shows a generic message.
	RequestFailed { request_id: RequestId },

	/// Stepper tap or any signed adjustment of one record.
	QuantityChanged { name: String, delta: i64 },

	/// Text typed in a record's quantity field.
	QuantitySet { name: String, text: String },

	UnitChanged(DisplayUnit),
}

/// Work requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
	None,
	Fetch { request_id: RequestId, query: String },
}

//! Recovery of the JSON array embedded in free-form model output.
//!
//! Models asked for "only JSON" still wrap it in prose or code fences.
//! The default [`ExtractStrategy::BracketScan`] takes everything between the
//! first `[` and the last `]` (inclusive). [`ExtractStrategy::Fenced`] looks
//! inside a ```` ```json ```` block first, which survives prose that itself
//! contains brackets.

use crate::Result;
use crate::food::FoodRecord;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

// region:    --- ExtractError

pub type ExtractResult<T> = core::result::Result<T, ExtractError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
	/// No `[` anywhere in the text.
	NoOpenBracket,
	/// No `]` after the first `[`.
	NoCloseBracket,
}

impl core::fmt::Display for ExtractError {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for ExtractError {}

// endregion: --- ExtractError

// region:    --- ExtractStrategy

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ExtractStrategy {
	#[default]
	BracketScan,
	Fenced,
}

impl ExtractStrategy {
	/// Returns the JSON array slice of `text` according to this strategy.
	pub fn extract(self, text: &str) -> ExtractResult<&str> {
		match self {
			ExtractStrategy::BracketScan => extract_json_array(text),
			ExtractStrategy::Fenced => match fenced_body(text).map(extract_json_array) {
				Some(Ok(json)) => Ok(json),
				_ => extract_json_array(text),
			},
		}
	}
}

// endregion: --- ExtractStrategy

/// Slices `text` from the first `[` to the last `]`, both included.
pub fn extract_json_array(text: &str) -> ExtractResult<&str> {
	let start = text.find('[').ok_or(ExtractError::NoOpenBracket)?;
	let end = text
		.rfind(']')
		.filter(|end| *end > start)
		.ok_or(ExtractError::NoCloseBracket)?;

	Ok(&text[start..=end])
}

/// Extracts and decodes the food records contained in a model answer.
pub fn parse_food_records(text: &str, strategy: ExtractStrategy) -> Result<Vec<FoodRecord>> {
	let json = strategy.extract(text)?;
	let records = serde_json::from_str(json)?;
	Ok(records)
}

fn fenced_body(text: &str) -> Option<&str> {
	const FENCE_OPEN: &str = "```json";
	const FENCE_CLOSE: &str = "```";

	let open = text.find(FENCE_OPEN)?;
	let rest = &text[open + FENCE_OPEN.len()..];
	let close = rest.find(FENCE_CLOSE)?;
	Some(&rest[..close])
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Error;

	const BANANA: &str = r#"[{"name":"Banana","calories":105,"protein":1.3,"fats":0.3,"carbs":27}]"#;

	#[test]
	fn test_extract_bare_array() {
		assert_eq!(extract_json_array(BANANA).unwrap(), BANANA);
	}

	#[test]
	fn test_extract_array_surrounded_by_prose() {
		let text = format!("Sure! Here is the estimate:\n{BANANA}\nLet me know if you need more.");
		assert_eq!(extract_json_array(&text).unwrap(), BANANA);
	}

	#[test]
	fn test_extract_array_inside_code_fence() {
		let text = format!("```json\n{BANANA}\n```");
		assert_eq!(extract_json_array(&text).unwrap(), BANANA);
	}

	#[test]
	fn test_extract_missing_open_bracket() {
		let err = extract_json_array(r#"{"name":"Banana"}]"#).unwrap_err();
		assert_eq!(err, ExtractError::NoOpenBracket);
	}

	#[test]
	fn test_extract_missing_close_bracket() {
		let err = extract_json_array(r#"[{"name":"Banana"}"#).unwrap_err();
		assert_eq!(err, ExtractError::NoCloseBracket);
	}

	#[test]
	fn test_extract_close_before_open() {
		let err = extract_json_array("] nothing here [").unwrap_err();
		assert_eq!(err, ExtractError::NoCloseBracket);
	}

	#[test]
	fn test_extract_empty_text() {
		assert_eq!(extract_json_array("").unwrap_err(), ExtractError::NoOpenBracket);
	}

	#[test]
	fn test_parse_records_with_prose() {
		let text = format!("Here you go: {BANANA} Enjoy.");
		let records = parse_food_records(&text, ExtractStrategy::BracketScan).unwrap();

		assert_eq!(records.len(), 1);
		assert_eq!(records[0].name, "Banana");
		assert_eq!(records[0].calories, 105.0);
		assert_eq!(records[0].protein, 1.3);
		assert_eq!(records[0].fats, 0.3);
		assert_eq!(records[0].carbs, 27.0);
	}

	#[test]
	fn test_parse_records_invalid_json_is_parse_error() {
		let res = parse_food_records("[not json]", ExtractStrategy::BracketScan);
		assert!(matches!(res, Err(Error::Parse(_))));
	}

	#[test]
	fn test_parse_records_missing_bracket_is_extract_error() {
		let res = parse_food_records("I could not find that food.", ExtractStrategy::BracketScan);
		assert!(matches!(res, Err(Error::Extract(ExtractError::NoOpenBracket))));
	}

	#[test]
	fn test_bracket_scan_trips_on_bracketed_prose() {
		let text = format!("Values [approx]:\n```json\n{BANANA}\n```");
		let res = parse_food_records(&text, ExtractStrategy::BracketScan);
		assert!(matches!(res, Err(Error::Parse(_))));
	}

	#[test]
	fn test_fenced_prefers_fence_body() {
		let text = format!("Values [approx]:\n```json\n{BANANA}\n```\nSee [1].");
		let records = parse_food_records(&text, ExtractStrategy::Fenced).unwrap();
		assert_eq!(records.len(), 1);
		assert_eq!(records[0].name, "Banana");
	}

	#[test]
	fn test_fenced_falls_back_to_bracket_scan() {
		let text = format!("No fence here: {BANANA}");
		assert_eq!(ExtractStrategy::Fenced.extract(&text).unwrap(), BANANA);
	}

	#[test]
	fn test_fenced_without_array_in_fence_scans_whole_text() {
		let text = format!("```json\nnull\n```\nThe list: {BANANA}");
		assert_eq!(ExtractStrategy::Fenced.extract(&text).unwrap(), BANANA);
	}

	#[test]
	fn test_fenced_without_any_array_fails() {
		let err = ExtractStrategy::Fenced.extract("```json\nnull\n```").unwrap_err();
		assert_eq!(err, ExtractError::NoOpenBracket);
	}

	#[test]
	fn test_strategy_from_str() {
		assert_eq!("bracket-scan".parse::<ExtractStrategy>().unwrap(), ExtractStrategy::BracketScan);
		assert_eq!("fenced".parse::<ExtractStrategy>().unwrap(), ExtractStrategy::Fenced);
	}
}

// endregion: --- Tests

//! Prompt templates sent to the model.
//!
//! A template is plain text with two placeholders: `{query}` (the user's
//! food description) and `{max_items}`.

use std::borrow::Cow;

pub const QUERY_PLACEHOLDER: &str = "{query}";
pub const MAX_ITEMS_PLACEHOLDER: &str = "{max_items}";

const DETAILED_TEMPLATE: &str = r#"You are a nutrition expert.
Analyze the following food and provide the calorie count and macronutrients.
Return your response in JSON format with these fields:
[
  {
    "name": "Food Name",
    "calories": number,
    "protein": number (in grams),
    "fats": number (in grams),
    "carbs": number (in grams)
  }
]
Return up to {max_items} relevant food items. Only return JSON, no extra text.

Food description: {query}"#;

const COMPACT_TEMPLATE: &str = "You are a nutrition expert. \
For the food description below, return only a JSON array of at most {max_items} objects \
with the fields name, calories, protein, fats and carbs (grams, per 100 units). \
No prose, no markdown.

Food description: {query}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
	template: Cow<'static, str>,
}

/// Constructors
impl PromptTemplate {
	pub fn from_static(template: &'static str) -> Self {
		PromptTemplate {
			template: Cow::Borrowed(template),
		}
	}

	pub fn from_owned(template: impl Into<String>) -> Self {
		PromptTemplate {
			template: Cow::Owned(template.into()),
		}
	}

	/// Step-by-step instruction with an example object.
	pub fn detailed() -> Self {
		Self::from_static(DETAILED_TEMPLATE)
	}

	/// One-paragraph instruction.
	pub fn compact() -> Self {
		Self::from_static(COMPACT_TEMPLATE)
	}
}

impl Default for PromptTemplate {
	fn default() -> Self {
		Self::detailed()
	}
}

impl PromptTemplate {
	pub fn as_str(&self) -> &str {
		&self.template
	}

	/// Fills the placeholders. `max_items` goes first so a query that
	/// happens to contain `{max_items}` is left as typed.
	pub fn render(&self, query: &str, max_items: usize) -> String {
		self.template
			.replace(MAX_ITEMS_PLACEHOLDER, &max_items.to_string())
			.replace(QUERY_PLACEHOLDER, query)
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_detailed_render() {
		let prompt = PromptTemplate::detailed().render("banana", 5);
		assert!(prompt.starts_with("You are a nutrition expert."));
		assert!(prompt.contains("Return up to 5 relevant food items."));
		assert!(prompt.ends_with("Food description: banana"));
		assert!(!prompt.contains(QUERY_PLACEHOLDER));
	}

	#[test]
	fn test_compact_render() {
		let prompt = PromptTemplate::compact().render("two eggs", 3);
		assert!(prompt.contains("at most 3 objects"));
		assert!(prompt.ends_with("Food description: two eggs"));
	}

	#[test]
	fn test_query_placeholder_text_is_not_expanded() {
		let prompt = PromptTemplate::from_static("{query}|{max_items}").render("{max_items}", 5);
		assert_eq!(prompt, "{max_items}|5");
	}
}

// endregion: --- Tests

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Label shown next to quantities. Applies to the whole result set and
/// never converts values.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
	#[default]
	#[strum(to_string = "grams", serialize = "g")]
	Grams,
	#[strum(to_string = "milliliters", serialize = "ml")]
	Milliliters,
}

impl DisplayUnit {
	/// Short label (`g`, `ml`).
	pub fn label(self) -> &'static str {
		match self {
			DisplayUnit::Grams => "g",
			DisplayUnit::Milliliters => "ml",
		}
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_and_label() {
		assert_eq!(DisplayUnit::Grams.to_string(), "grams");
		assert_eq!(DisplayUnit::Milliliters.to_string(), "milliliters");
		assert_eq!(DisplayUnit::Milliliters.label(), "ml");
	}

	#[test]
	fn test_parse_long_and_short_forms() {
		assert_eq!("g".parse::<DisplayUnit>().unwrap(), DisplayUnit::Grams);
		assert_eq!("Grams".parse::<DisplayUnit>().unwrap(), DisplayUnit::Grams);
		assert_eq!("ml".parse::<DisplayUnit>().unwrap(), DisplayUnit::Milliliters);
		assert_eq!("milliliters".parse::<DisplayUnit>().unwrap(), DisplayUnit::Milliliters);
		assert!("cups".parse::<DisplayUnit>().is_err());
	}
}

// endregion: --- Tests

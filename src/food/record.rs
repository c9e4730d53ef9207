use crate::food::Quantity;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, DisplayFromStr, PickFirst, serde_as};

/// One food item as estimated by the model.
///
/// Nutrient values are defined at the 100-unit baseline quantity.
/// A nutrient that is missing or `null` decodes as `0.0`, and a quoted
/// number (`"1.3"`) is accepted, so a sloppy answer still renders.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
	pub name: String,

	#[serde_as(as = "DefaultOnNull<PickFirst<(_, DisplayFromStr)>>")]
	#[serde(default)]
	pub calories: f64,

	/// Grams of protein.
	#[serde_as(as = "DefaultOnNull<PickFirst<(_, DisplayFromStr)>>")]
	#[serde(default)]
	pub protein: f64,

	/// Grams of fat.
	#[serde_as(as = "DefaultOnNull<PickFirst<(_, DisplayFromStr)>>")]
	#[serde(default)]
	pub fats: f64,

	/// Grams of carbohydrate.
	#[serde_as(as = "DefaultOnNull<PickFirst<(_, DisplayFromStr)>>")]
	#[serde(default)]
	pub carbs: f64,
}

/// Constructors
impl FoodRecord {
	pub fn new(name: impl Into<String>, calories: f64, protein: f64, fats: f64, carbs: f64) -> Self {
		FoodRecord {
			name: name.into(),
			calories,
			protein,
			fats,
			carbs,
		}
	}
}

impl FoodRecord {
	/// Nutrient values at `quantity`, rounded for display.
	pub fn scaled(&self, quantity: Quantity) -> ScaledNutrition {
		ScaledNutrition {
			calories: round_whole(quantity.scale(self.calories)),
			protein: round_tenth(quantity.scale(self.protein)),
			fats: round_tenth(quantity.scale(self.fats)),
			carbs: round_tenth(quantity.scale(self.carbs)),
		}
	}
}

// region:    --- ScaledNutrition

/// Display-ready nutrient values: calories to the unit, macros to a tenth of a gram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaledNutrition {
	pub calories: f64,
	pub protein: f64,
	pub fats: f64,
	pub carbs: f64,
}

// endregion: --- ScaledNutrition

/// Rounds half away from zero to a whole number.
pub fn round_whole(value: f64) -> f64 {
	value.round()
}

/// Rounds half away from zero to one decimal place.
pub fn round_tenth(value: f64) -> f64 {
	(value * 10.0).round() / 10.0
}

// region:    --- Tests


// endregion: --- Tests

use crate::food::{DisplayUnit, FoodRecord, Quantity, ScaledNutrition};
use serde::Serialize;

/// Rendered strings for one result card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodCardView {
	pub name: String,
	pub quantity: Quantity,
	pub unit: DisplayUnit,
	pub nutrition: ScaledNutrition,
}

impl FoodCardView {
	pub fn new(record: &FoodRecord, quantity: Quantity, unit: DisplayUnit) -> Self {
		FoodCardView {
			name: record.name.clone(),
			quantity,
			unit,
			nutrition: record.scaled(quantity),
		}
	}
}

/// Formatted fields
impl FoodCardView {
	/// e.g. `105 kcal`
	pub fn calories_text(&self) -> String {
		format!("{} kcal", self.nutrition.calories as i64)
	}

	/// e.g. `100 grams`
	pub fn quantity_text(&self) -> String {
		format!("{} {}", self.quantity, self.unit)
	}

	pub fn protein_text(&self) -> String {
		grams_text(self.nutrition.protein)
	}

	pub fn fats_text(&self) -> String {
		grams_text(self.nutrition.fats)
	}

	pub fn carbs_text(&self) -> String {
		grams_text(self.nutrition.carbs)
	}
}

impl core::fmt::Display for FoodCardView {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		writeln!(f, "{}", self.name)?;
		writeln!(f, "  {} - {}", self.calories_text(), self.quantity_text())?;
		write!(
			f,
			"  Protein {} | Fats {} | Carbs {}",
			self.protein_text(),
			self.fats_text(),
			self.carbs_text()
		)
	}
}

fn grams_text(value: f64) -> String {
	format!("{value:.1}g")
}

// region:    --- Tests


// endregion: --- Tests

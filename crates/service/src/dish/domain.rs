use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

pub const DEFAULT_SPICE_LEVEL: &str = "Medium";
pub const DEFAULT_SERVINGS: i32 = 4;
pub const DEFAULT_DIFFICULTY: &str = "Medium";

fn default_spice_level() -> String { DEFAULT_SPICE_LEVEL.to_string() }
fn default_servings() -> i32 { DEFAULT_SERVINGS }
fn default_difficulty() -> String { DEFAULT_DIFFICULTY.to_string() }

/// A stored recipe as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: Uuid,
    pub name: String,
    pub ingredients: Vec<String>,
    pub preparation_steps: Vec<String>,
    /// Minutes.
    pub cooking_time: i32,
    pub origin: String,
    pub spice_level: String,
    pub servings: i32,
    pub difficulty: String,
}

/// Creation request. Optional attributes fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDish {
    pub name: String,
    pub ingredients: Vec<String>,
    pub preparation_steps: Vec<String>,
    pub cooking_time: i32,
    pub origin: String,
    #[serde(default = "default_spice_level")]
    pub spice_level: String,
    #[serde(default = "default_servings")]
    pub servings: i32,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

impl NewDish {
    /// Required-field presence is enforced by deserialization; only the name needs content.
    pub fn validate(&self) -> Result<(), ServiceError> {
        models::dish::validate_name(&self.name)?;
        Ok(())
    }

    pub fn into_dish(self, id: Uuid) -> Dish {
        Dish {
            id,
            name: self.name,
            ingredients: self.ingredients,
            preparation_steps: self.preparation_steps,
            cooking_time: self.cooking_time,
            origin: self.origin,
            spice_level: self.spice_level,
            servings: self.servings,
            difficulty: self.difficulty,
        }
    }
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishPatch {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub preparation_steps: Option<Vec<String>>,
    pub cooking_time: Option<i32>,
    pub origin: Option<String>,
    pub spice_level: Option<String>,
    pub servings: Option<i32>,
    pub difficulty: Option<String>,
}

impl DishPatch {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(name) = &self.name {
            models::dish::validate_name(name)?;
        }
        Ok(())
    }

    pub fn apply_to(self, dish: &mut Dish) {
        if let Some(v) = self.name { dish.name = v; }
        if let Some(v) = self.ingredients { dish.ingredients = v; }
        if let Some(v) = self.preparation_steps { dish.preparation_steps = v; }
        if let Some(v) = self.cooking_time { dish.cooking_time = v; }
        if let Some(v) = self.origin { dish.origin = v; }
        if let Some(v) = self.spice_level { dish.spice_level = v; }
        if let Some(v) = self.servings { dish.servings = v; }
        if let Some(v) = self.difficulty { dish.difficulty = v; }
    }
}

impl From<models::dish::Model> for Dish {
    fn from(m: models::dish::Model) -> Self {
        Dish {
            id: m.id,
            name: m.name,
            ingredients: m.ingredients.into(),
            preparation_steps: m.preparation_steps.into(),
            cooking_time: m.cooking_time,
            origin: m.origin,
            spice_level: m.spice_level,
            servings: m.servings,
            difficulty: m.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_dish_fills_defaults() {
        let input: NewDish = serde_json::from_value(json!({
            "name": "Tacos",
            "ingredients": ["Tortillas"],
            "preparationSteps": ["Assemble"],
            "cookingTime": 30,
            "origin": "Mexico"
        }))
        .unwrap();
        assert_eq!(input.spice_level, "Medium");
        assert_eq!(input.servings, 4);
        assert_eq!(input.difficulty, "Medium");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn new_dish_requires_core_fields() {
        let missing_origin = serde_json::from_value::<NewDish>(json!({
            "name": "Tacos",
            "ingredients": ["Tortillas"],
            "preparationSteps": ["Assemble"],
            "cookingTime": 30
        }));
        assert!(missing_origin.is_err());

        let blank_name: NewDish = serde_json::from_value(json!({
            "name": "  ",
            "ingredients": [],
            "preparationSteps": [],
            "cookingTime": 1,
            "origin": "x"
        }))
        .unwrap();
        assert!(matches!(blank_name.validate(), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn dish_serializes_camel_case() {
        let d = NewDish {
            name: "Sushi".into(),
            ingredients: vec!["Rice".into()],
            preparation_steps: vec!["Roll".into()],
            cooking_time: 40,
            origin: "Japan".into(),
            spice_level: "Low".into(),
            servings: 2,
            difficulty: "Hard".into(),
        }
        .into_dish(Uuid::nil());
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["preparationSteps"], json!(["Roll"]));
        assert_eq!(v["cookingTime"], 40);
        assert_eq!(v["spiceLevel"], "Low");
        assert_eq!(v["id"], Uuid::nil().to_string());
    }

    #[test]
    fn patch_only_touches_supplied_fields() {
        let mut d = NewDish {
            name: "Pad Thai".into(),
            ingredients: vec!["Rice noodles".into()],
            preparation_steps: vec!["Cook noodles".into()],
            cooking_time: 25,
            origin: "Thailand".into(),
            spice_level: "Medium".into(),
            servings: 4,
            difficulty: "Medium".into(),
        }
        .into_dish(Uuid::new_v4());
        let before = d.clone();

        let patch: DishPatch = serde_json::from_value(json!({"cookingTime": 35, "spiceLevel": "High"})).unwrap();
        patch.apply_to(&mut d);

        assert_eq!(d.cooking_time, 35);
        assert_eq!(d.spice_level, "High");
        assert_eq!(d.name, before.name);
        assert_eq!(d.ingredients, before.ingredients);
        assert_eq!(d.servings, before.servings);
    }
}

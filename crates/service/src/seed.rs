//! Fixture dishes loaded at startup for demos and manual testing.

use tracing::info;

use crate::dish::{Dish, DishRepository, DishService, NewDish};
use crate::errors::ServiceError;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample(
    name: &str,
    ingredients: &[&str],
    steps: &[&str],
    cooking_time: i32,
    origin: &str,
    spice_level: &str,
) -> NewDish {
    NewDish {
        name: name.to_string(),
        ingredients: strings(ingredients),
        preparation_steps: strings(steps),
        cooking_time,
        origin: origin.to_string(),
        spice_level: spice_level.to_string(),
        servings: crate::dish::domain::DEFAULT_SERVINGS,
        difficulty: crate::dish::domain::DEFAULT_DIFFICULTY.to_string(),
    }
}

/// The five sample dishes, in insertion order.
pub fn sample_dishes() -> Vec<NewDish> {
    vec![
        sample(
            "Spaghetti Carbonara",
            &["Spaghetti", "Eggs", "Parmesan", "Bacon", "Black Pepper"],
            &["Cook pasta", "Mix eggs and cheese", "Fry bacon", "Combine all ingredients"],
            20,
            "Italy",
            "Low",
        ),
        sample(
            "Sushi",
            &["Rice", "Nori", "Fish", "Soy Sauce", "Wasabi"],
            &["Prepare rice", "Slice fish", "Roll sushi", "Serve with soy sauce"],
            40,
            "Japan",
            "Medium",
        ),
        sample(
            "Tacos",
            &["Tortillas", "Beef", "Lettuce", "Tomato", "Cheese"],
            &["Cook beef", "Prepare toppings", "Assemble tacos"],
            30,
            "Mexico",
            "High",
        ),
        sample(
            "Pad Thai",
            &["Rice noodles", "Eggs", "Shrimp", "Peanuts", "Lime"],
            &["Cook noodles", "Stir-fry ingredients", "Mix sauce", "Serve with peanuts"],
            25,
            "Thailand",
            "Medium",
        ),
        sample(
            "Moms’s Special Stew",
            &["Beef", "Carrots", "Potatoes", "Tomato Paste", "Garlic"],
            &["Brown beef", "Add vegetables", "Simmer", "Serve hot"],
            90,
            "Family Recipe",
            "Medium",
        ),
    ]
}

/// Replace the whole store with the sample dishes.
///
/// Not safe to run against live traffic: requests between the clear and the
/// insert observe an empty store.
pub async fn seed_database<R: DishRepository + ?Sized>(svc: &DishService<R>) -> Result<Vec<Dish>, ServiceError> {
    let inserted = svc.replace_all(sample_dishes()).await?;
    info!(event = "seeded", count = inserted.len(), "sample dishes added to store");
    Ok(inserted)
}

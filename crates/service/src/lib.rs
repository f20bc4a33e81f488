//! Service layer for dish records.
//! - `dish`: domain types, repository trait with SeaORM and in-memory backends, and `DishService`.
//! - `seed`: the startup fixture.

pub mod errors;
pub mod dish;
pub mod seed;
#[cfg(test)]
pub mod test_support;

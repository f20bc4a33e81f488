use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{Dish, DishPatch, NewDish};
use crate::errors::ServiceError;

/// Persistence contract for dishes.
///
/// "Absent" outcomes are `Ok(None)`; the service decides how to report them.
#[async_trait]
pub trait DishRepository: Send + Sync {
    /// Every dish, in insertion order.
    async fn list_all(&self) -> Result<Vec<Dish>, ServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Dish>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Dish>, ServiceError>;
    /// Fails with `DuplicateName` when the name is taken.
    async fn insert(&self, dish: NewDish) -> Result<Dish, ServiceError>;
    async fn update_by_id(&self, id: Uuid, patch: DishPatch) -> Result<Option<Dish>, ServiceError>;
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Dish>, ServiceError>;
    /// Returns the number of removed dishes.
    async fn delete_all(&self) -> Result<u64, ServiceError>;
    async fn insert_many(&self, dishes: Vec<NewDish>) -> Result<Vec<Dish>, ServiceError>;
}

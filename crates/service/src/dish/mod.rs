//! Dish records: domain types, store abstraction and application service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Dish, DishPatch, NewDish};
pub use repository::DishRepository;
pub use service::DishService;

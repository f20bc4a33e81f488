use sea_orm::{entity::prelude::*, DatabaseConnection, EntityTrait, FromJsonQueryResult, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Ordered list of strings persisted as a JSONB array.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(v: Vec<String>) -> Self { Self(v) }
}

impl From<StringList> for Vec<String> {
    fn from(v: StringList) -> Self { v.0 }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dish")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Assigned by the database; gives listing its insertion order.
    pub seq: i64,
    #[sea_orm(column_type = "Text", unique)]
    pub name: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub ingredients: StringList,
    #[sea_orm(column_type = "JsonBinary")]
    pub preparation_steps: StringList,
    pub cooking_time: i32,
    #[sea_orm(column_type = "Text")]
    pub origin: String,
    pub spice_level: String,
    pub servings: i32,
    pub difficulty: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name must not be empty".into()));
    }
    Ok(())
}

/// All dishes in insertion order.
pub async fn list_ordered(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Seq)
        .all(db)
        .await
        .map_err(errors::ModelError::from_db)
}

/// Exact, case-sensitive lookup.
pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Name.eq(name))
        .one(db)
        .await
        .map_err(errors::ModelError::from_db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(validate_name("Sushi").is_ok());
        assert!(matches!(validate_name("   "), Err(errors::ModelError::Validation(_))));
        assert!(validate_name("").is_err());
    }

    #[test]
    fn string_list_is_a_plain_json_array() {
        let list = StringList(vec!["Cook pasta".into(), "Serve".into()]);
        let v = serde_json::to_value(&list).unwrap();
        assert_eq!(v, serde_json::json!(["Cook pasta", "Serve"]));
        let back: StringList = serde_json::from_value(v).unwrap();
        assert_eq!(Vec::<String>::from(back), vec!["Cook pasta", "Serve"]);
    }
}

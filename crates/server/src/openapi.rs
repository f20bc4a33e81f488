use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

#[allow(non_snake_case)]
#[derive(ToSchema)]
pub struct DishDoc {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub preparationSteps: Vec<String>,
    pub cookingTime: i32,
    pub origin: String,
    pub spiceLevel: String,
    pub servings: i32,
    pub difficulty: String,
}

#[allow(non_snake_case)]
#[derive(ToSchema)]
pub struct NewDishDoc {
    pub name: String,
    pub ingredients: Vec<String>,
    pub preparationSteps: Vec<String>,
    pub cookingTime: i32,
    pub origin: String,
    pub spiceLevel: Option<String>,
    pub servings: Option<i32>,
    pub difficulty: Option<String>,
}

#[allow(non_snake_case)]
#[derive(ToSchema)]
pub struct DishPatchDoc {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub preparationSteps: Option<Vec<String>>,
    pub cookingTime: Option<i32>,
    pub origin: Option<String>,
    pub spiceLevel: Option<String>,
    pub servings: Option<i32>,
    pub difficulty: Option<String>,
}

#[derive(ToSchema)]
pub struct DeleteDishDoc { pub message: String, pub dish: DishDoc }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::dishes::list,
        crate::routes::dishes::get_by_name,
        crate::routes::dishes::create,
        crate::routes::dishes::update,
        crate::routes::dishes::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            DishDoc,
            NewDishDoc,
            DishPatchDoc,
            DeleteDishDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "dishes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_dish_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/dishes"));
        assert!(paths.contains_key("/api/dishes/{name}"));
        assert!(paths.contains_key("/api/dishes/{id}"));
        assert!(paths.contains_key("/health"));
    }
}

use contracts::domain::category::{Category, CategoryDto};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, ApiError};

fn category_path(id: &str) -> String {
    format!("/api/seller/categories/{}", urlencoding::encode(id))
}

pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    get_json("/api/seller/categories").await
}

pub async fn create_category(dto: &CategoryDto) -> Result<Category, ApiError> {
    post_json("/api/seller/categories", dto).await
}

pub async fn update_category(id: &str, dto: &CategoryDto) -> Result<Category, ApiError> {
    put_json(&category_path(id), dto).await
}

pub async fn delete_category(id: &str) -> Result<(), ApiError> {
    delete(&category_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_path() {
        assert_eq!(category_path("c-1"), "/api/seller/categories/c-1");
        assert_eq!(category_path("a&b"), "/api/seller/categories/a%26b");
    }
}

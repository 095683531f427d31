use contracts::domain::product::{Product, ProductDto};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, ApiError};

fn product_path(id: &str) -> String {
    format!("/api/seller/products/{}", urlencoding::encode(id))
}

/// Fetch all products of the seller (paged on the client)
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    get_json("/api/seller/products").await
}

pub async fn fetch_product(id: &str) -> Result<Product, ApiError> {
    get_json(&product_path(id)).await
}

pub async fn create_product(dto: &ProductDto) -> Result<Product, ApiError> {
    post_json("/api/seller/products", dto).await
}

pub async fn update_product(id: &str, dto: &ProductDto) -> Result<Product, ApiError> {
    put_json(&product_path(id), dto).await
}

pub async fn delete_product(id: &str) -> Result<(), ApiError> {
    delete(&product_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_path_is_encoded() {
        assert_eq!(product_path("a b/c"), "/api/seller/products/a%20b%2Fc");
    }
}

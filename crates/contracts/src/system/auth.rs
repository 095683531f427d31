use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub seller: SellerInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Identity of the signed-in seller, as returned by `/api/seller/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerInfo {
    pub id: String,
    pub email: String,
    pub store_name: String,
    #[serde(default)]
    pub verified: bool,
}

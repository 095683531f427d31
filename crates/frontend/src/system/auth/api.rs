use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, SellerInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, extract_message, ApiError};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/api/seller/auth/login"))
        .json(&request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        let status = response.status();
        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| extract_message(&body))
            .unwrap_or_else(|| "Invalid email or password".to_string());
        return Err(ApiError::Status { status, message });
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Refresh access token using refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/seller/auth/refresh"))
        .json(&request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            message: "Refresh failed".to_string(),
        });
    }

    response
        .json::<RefreshResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/seller/auth/logout"))
        .json(&request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            message: "Logout failed".to_string(),
        });
    }
    Ok(())
}

/// Current seller for a given access token
pub async fn get_current_seller(access_token: &str) -> Result<SellerInfo, ApiError> {
    let response = Request::get(&api_url("/api/seller/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            message: "Session is no longer valid".to_string(),
        });
    }

    response
        .json::<SellerInfo>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

use serde::{Deserialize, Serialize};

use crate::{errors::SalonResult, models::user::Role};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> SalonResult<()> {
        crate::models::user::validate_identity(&self.name, &self.email, &self.password)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_name: String,
    pub role: Role,
}

impl TokenResponse {
    pub fn bearer(access_token: String, user_name: String, role: Role) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user_name,
            role,
        }
    }
}

//! Authentication and profile endpoints.

use serde::de::IgnoredAny;

use crate::core::client::ApiClient;
use crate::core::error::ApiResult;
use crate::core::transport::Transport;
use crate::models::{
    LoginRequest, LoginResponse, LoginStatus, RegisterRequest, RegisterResponse, UpdateUserRequest,
    User,
};

pub struct UserApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> UserApi<'a, T> {
    pub(super) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// `POST /login`
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        self.client.post("/login", credentials).await
    }

    /// `POST /register`
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse> {
        self.client.post("/register", request).await
    }

    /// `POST /logout`. Invalidates the token server-side only.
    pub async fn logout(&self) -> ApiResult<()> {
        self.client
            .post_empty::<IgnoredAny>("/logout")
            .await
            .map(|_| ())
    }

    /// `GET /check-login`
    pub async fn check_login(&self) -> ApiResult<LoginStatus> {
        self.client.get("/check-login", &()).await
    }

    /// `GET /user`
    pub async fn user_info(&self) -> ApiResult<User> {
        self.client.get("/user", &()).await
    }

    /// `PUT /user`
    pub async fn update_user_info(&self, request: &UpdateUserRequest) -> ApiResult<()> {
        self.client
            .put::<IgnoredAny, _>("/user", request)
            .await
            .map(|_| ())
    }
}

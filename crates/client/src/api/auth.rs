use api_types::user::{AuthResponse, LoginCredentials, SignupData};
use serde::de::IgnoredAny;

use super::ApiClient;
use crate::error::Result;

/// Signup and login calls. Neither sends the bearer token.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Creates an account. The created user echoed back by the server is ignored.
    pub async fn signup(&self, data: &SignupData) -> Result<()> {
        let endpoint = self.client.endpoint("users")?;
        let res = self
            .client
            .send(self.client.http().post(endpoint).json(data))
            .await?;
        self.client.handle_response::<IgnoredAny>(res).await?;
        Ok(())
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse> {
        let endpoint = self.client.endpoint("users/login")?;
        let res = self
            .client
            .send(self.client.http().post(endpoint).json(credentials))
            .await?;
        self.client.expect_body(res).await
    }
}

use reqwest::Method;

use crate::{
    api::{decode, ensure_success, ApiClient},
    error::Error,
    model::user::UserDto,
};

impl ApiClient {
    /// Retrieves the profile of the user owning the current token.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Profile of the authenticated user
    /// - `Err(Error::AuthError(AuthError::TokenExpired))` - Token rejected, session was force-logged-out
    /// - `Err(Error)` - Any other HTTP, decode or transport failure
    pub async fn get_current_user(&self) -> Result<UserDto, Error> {
        let url = self.endpoint(&["api", "users", "me"])?;

        let response = self.request(self.authorized(Method::GET, url)).await?;
        let response = ensure_success(response, "Failed to fetch user").await?;
        decode(response).await
    }
}

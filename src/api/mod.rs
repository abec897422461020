//! Blog API Bindings
//!
//! Frontend bindings to the blog REST API, organized by domain.

mod http;
mod blog;
mod comment;
mod posting;

pub use comment::NewComment;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::Session;

/// Base URL plus the optional session token for authenticated calls
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: &Session) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            token: session.token.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn token(&self) -> Result<&str, ApiError> {
        self.token.as_deref().ok_or(ApiError::Unauthorized)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = http::fetch_text("GET", &self.url(path), None, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let token = self.token()?;
        let payload = serde_json::to_string(body)?;
        http::fetch_text("POST", &self.url(path), Some(payload), Some(token)).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let token = self.token()?;
        http::fetch_text("DELETE", &self.url(path), None, Some(token)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_and_token() {
        let config = ClientConfig {
            api_base_url: "https://plog.example/api".into(),
            ..Default::default()
        };
        let anon = ApiClient::new(&config, &Session::anonymous());
        assert_eq!(anon.url("/blogs/1"), "https://plog.example/api/blogs/1");
        assert_eq!(anon.token(), Err(ApiError::Unauthorized));

        let session = Session::from_stored(Some("3".into()), Some("abc".into()));
        assert_eq!(ApiClient::new(&config, &session).token(), Ok("abc"));
    }
}

//! Reqwest implementation of [`CustomerApi`].
//!
//! A thin wrapper: one method per REST operation, no retries, no timeouts,
//! and no interpretation beyond the status checks the operations specify.
//!
//! | Operation | Method | Path          | Success                      |
//! |-----------|--------|---------------|------------------------------|
//! | list      | GET    | `/users`      | 200, array of customers      |
//! | create    | POST   | `/users`      | any 2xx, body = new customer |
//! | update    | PATCH  | `/users/{id}` | exactly 200                  |
//! | delete    | DELETE | `/users/{id}` | exactly 200                  |
//!
//! A create rejection is special-cased: the response body carries the
//! server's human-readable reason (e.g. a server-side duplicate email), and
//! the store shows that text under the form's email field.  Everything else
//! maps onto [`ApiError::Transport`] or [`ApiError::UnexpectedStatus`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use cadastro_core::{Customer, CustomerDraft};

use crate::application::customer_store::{ApiError, CustomerApi};

/// HTTP client for the REST `users` resource.
#[derive(Debug, Clone)]
pub struct HttpCustomerApi {
    client: Client,
    base_url: String,
}

impl HttpCustomerApi {
    /// Builds a client for the given base URL (e.g. `http://localhost:3000`).
    ///
    /// A trailing slash on the base URL is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[async_trait]
impl CustomerApi for HttpCustomerApi {
    async fn list(&self) -> Result<Vec<Customer>, ApiError> {
        let response = self
            .client
            .get(self.url("users"))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::UnexpectedStatus {
                operation: "list",
                status: status.as_u16(),
            });
        }
        response.json().await.map_err(transport)
    }

    async fn create(&self, draft: &CustomerDraft) -> Result<Customer, ApiError> {
        let response = self
            .client
            .post(self.url("users"))
            .json(draft)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(transport)
        } else {
            // The body is the server's rejection message, shown to the user.
            let message = response.text().await.map_err(transport)?;
            if message.is_empty() {
                Err(ApiError::UnexpectedStatus {
                    operation: "create",
                    status: status.as_u16(),
                })
            } else {
                Err(ApiError::Server(message))
            }
        }
    }

    async fn update(&self, id: &str, draft: &CustomerDraft) -> Result<(), ApiError> {
        let response = self
            .client
            .patch(self.url(&format!("users/{id}")))
            .json(draft)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::UnexpectedStatus {
                operation: "update",
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("users/{id}")))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::UnexpectedStatus {
                operation: "delete",
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_normalised() {
        let api = HttpCustomerApi::new("http://localhost:3000/");
        assert_eq!(api.url("users"), "http://localhost:3000/users");
        assert_eq!(api.url("users/7"), "http://localhost:3000/users/7");
    }

    #[test]
    fn test_bare_base_url_keeps_single_separator() {
        let api = HttpCustomerApi::new("http://localhost:3000");
        assert_eq!(api.url("users"), "http://localhost:3000/users");
    }
}

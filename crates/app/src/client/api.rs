//! HTTP client for the promotions API.

use jiff::Timestamp;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::promotions::records::PromotionUuid;

/// A promotion as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: PromotionUuid,
    pub name: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub budget: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_sales_impact: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for create and update calls. Absent fields are omitted from
/// the JSON, which the server treats as "leave unchanged" on update.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_sales_impact: Option<f64>,
}

/// Error body returned by the server for non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    message: String,
    error: String,
}

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("request failed")]
    Http(#[from] reqwest::Error),

    #[error("{message}: {error}")]
    Api {
        status: u16,
        message: String,
        error: String,
    },
}

/// HTTP client for the four promotion endpoints.
#[derive(Debug, Clone)]
pub struct PromotionsApi {
    base_url: String,
    http: Client,
}

impl PromotionsApi {
    /// Create a new client against the given API base URL, e.g.
    /// `"http://localhost:8698"`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// `GET /promotions`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn fetch_promotions(&self) -> Result<Vec<Promotion>, ApiClientError> {
        let response = self
            .http
            .get(format!("{}/promotions", self.base_url))
            .send()
            .await?;

        let response = check_status(response).await?;

        Ok(response.json().await?)
    }

    /// `POST /promotions`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn create_promotion(
        &self,
        payload: &PromotionPayload,
    ) -> Result<Promotion, ApiClientError> {
        let response = self
            .http
            .post(format!("{}/promotions", self.base_url))
            .json(payload)
            .send()
            .await?;

        let response = check_status(response).await?;

        Ok(response.json().await?)
    }

    /// `PUT /promotions/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn update_promotion(
        &self,
        promotion: PromotionUuid,
        payload: &PromotionPayload,
    ) -> Result<Promotion, ApiClientError> {
        let response = self
            .http
            .put(format!("{}/promotions/{promotion}", self.base_url))
            .json(payload)
            .send()
            .await?;

        let response = check_status(response).await?;

        Ok(response.json().await?)
    }

    /// `DELETE /promotions/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn delete_promotion(&self, promotion: PromotionUuid) -> Result<(), ApiClientError> {
        let response = self
            .http
            .delete(format!("{}/promotions/{promotion}", self.base_url))
            .send()
            .await?;

        check_status(response).await?;

        Ok(())
    }
}

/// Turns a non-2xx response into [`ApiClientError::Api`], decoding the
/// server's error body when it is present.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    match response.json::<ErrorBody>().await {
        Ok(body) => Err(ApiClientError::Api {
            status: status.as_u16(),
            message: body.message,
            error: body.error,
        }),
        Err(source) => Err(ApiClientError::Http(source)),
    }
}

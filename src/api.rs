//! REST client for the iProov enrolment API.
//!
//! Four calls, one per endpoint: claim an enrolment token, submit the
//! enrolment photo, mint an OAuth access token, and delete an enrolled
//! user. Each call expects HTTP 200 and maps anything else to an error
//! carrying the operation name, status and response body.

use reqwest::multipart;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{Config, Error};

/// `resource` label sent with enrolment token claims.
const CLAIM_RESOURCE: &str = "photo_enrol_test";

/// Image rotation sent with every photo submission.
const ROTATION: &str = "0";

/// HTTP client bound to one service base URL.
///
/// The base URL is normally [`Config::base_url`]; tests inject a local
/// mock server address instead.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

// --- API request/response types ---

#[derive(Serialize)]
struct EnrolTokenRequest<'a> {
    resource: &'a str,
    api_key: &'a str,
    secret: &'a str,
    user_id: &'a str,
}

#[derive(Deserialize)]
struct EnrolTokenResponse {
    token: String,
}

#[derive(Serialize)]
struct AccessTokenRequest<'a> {
    grant_type: &'a str,
}

#[derive(Deserialize)]
struct AccessTokenResponse {
    access_token: String,
}

impl ApiClient {
    /// Build a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        static APP_USER_AGENT: &str =
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|e| Error::Config(format!("HTTP client build failed: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Claim an enrolment token binding `username` to a new session.
    pub async fn request_enrolment_token(
        &self,
        config: &Config,
        username: &str,
    ) -> Result<String, Error> {
        const OP: &str = "create token";
        let url = format!("{}/api/v2/claim/enrol/token", self.base_url);
        let body = EnrolTokenRequest {
            resource: CLAIM_RESOURCE,
            api_key: &config.sp_key,
            secret: &config.sp_secret,
            user_id: username,
        };

        debug!(url = %url, user_id = username, "requesting enrolment token");
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Transport {
                op: OP,
                detail: e.to_string(),
            })?;

        let response = check_status(response, OP).await?;
        let parsed: EnrolTokenResponse =
            response.json().await.map_err(|e| Error::MalformedResponse {
                op: OP,
                detail: e.to_string(),
            })?;
        Ok(parsed.token)
    }

    /// Submit the enrolment photo for a previously claimed token.
    ///
    /// Reads the configured image file fully into memory first; an
    /// unreadable path aborts before any request is sent.
    pub async fn submit_photo(&self, config: &Config, token: &str) -> Result<(), Error> {
        const OP: &str = "enrol image";
        let image = std::fs::read(&config.image_path).map_err(|source| Error::Image {
            path: config.image_path.clone(),
            source,
        })?;

        let url = format!("{}/api/v2/claim/enrol/image", self.base_url);
        let form = multipart::Form::new()
            .text("api_key", config.sp_key.clone())
            .text("secret", config.sp_secret.clone())
            .text("rotation", ROTATION)
            .part(
                "image",
                multipart::Part::bytes(image).file_name("image.jpg"),
            )
            .text("token", token.to_string())
            .text("source", config.image_source.clone());

        debug!(url = %url, "submitting enrolment image");
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Transport {
                op: OP,
                detail: e.to_string(),
            })?;

        check_status(response, OP).await?;
        Ok(())
    }

    /// Mint an OAuth client-credentials access token.
    pub async fn request_access_token(&self, config: &Config) -> Result<String, Error> {
        const OP: &str = "generate access token";
        let url = format!("{}/api/v2/{}/access_token", self.base_url, config.sp_key);
        let body = AccessTokenRequest {
            grant_type: "client_credentials",
        };

        debug!(url = %url, "requesting oauth access token");
        let response = self
            .http
            .post(&url)
            .basic_auth(&config.oauth_username, Some(&config.oauth_pw))
            .form(&body)
            .send()
            .await
            .map_err(|e| Error::Transport {
                op: OP,
                detail: e.to_string(),
            })?;

        let response = check_status(response, OP).await?;
        let parsed: AccessTokenResponse =
            response.json().await.map_err(|e| Error::MalformedResponse {
                op: OP,
                detail: e.to_string(),
            })?;
        Ok(parsed.access_token)
    }

    /// Delete an enrolled user with a bearer access token.
    pub async fn delete_user(&self, access_token: &str, username: &str) -> Result<(), Error> {
        const OP: &str = "delete user";
        let url = format!("{}/api/v2/users/{}", self.base_url, username);

        debug!(url = %url, "deleting user");
        let response = self
            .http
            .delete(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| Error::Transport {
                op: OP,
                detail: e.to_string(),
            })?;

        check_status(response, OP).await?;
        info!("user '{username}' deleted");
        Ok(())
    }
}

/// Check for HTTP 200, logging the outcome. Any other status becomes an
/// [`Error::Status`] carrying the response body text.
async fn check_status(response: reqwest::Response, op: &'static str) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status == reqwest::StatusCode::OK {
        info!("{op} succeeded");
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Status {
        op,
        status: status.as_u16(),
        body,
    })
}

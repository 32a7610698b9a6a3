use reqwest::StatusCode;
use tracing::{debug, info};

use crate::{response::IntoResponse, ActivityError, Config};

#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    client: reqwest::Client,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self, ActivityError> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(config.user_agent.as_str())
            .build()
            .into_response("failed to build http client")?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    /// The username is substituted as-is; escaping is left to the URL parser.
    pub fn events_url(&self, username: &str) -> String {
        format!("{}/users/{}/events", self.base_url, username)
    }

    /// Returns the raw body of the user's public event feed.
    pub async fn fetch_events(
        &self,
        username: &str,
    ) -> Result<String, ActivityError> {
        let url = self.events_url(username);
        debug!(task = "fetch events", url = url.as_str());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .into_response("failed to send")?;

        let status = response.status();
        info!(task = "fetch events", username, status = status.as_u16());

        if status == StatusCode::NOT_FOUND {
            return Err(ActivityError::UserNotFound {
                username: username.to_string(),
            });
        }

        if status != StatusCode::OK {
            return Err(ActivityError::Api {
                status_code: status.as_u16(),
            });
        }

        response.text().await.into_response("failed to get text")
    }
}

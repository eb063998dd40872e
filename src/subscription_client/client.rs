use anyhow::Context;
use derivative::Derivative;
use reqwest::{
    Client,
    Url,
};

use crate::subscription_client::request::SubscriptionRequest;
use crate::upstream::{
    ensure_success,
    http_client,
    UpstreamError,
};

const PROVIDER: &str = "subscription provider";

/// Adds leads to a newsletter publication.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct SubscriptionClient {
    http_client: Client,
    base_url: Url,
    publication_id: String,
    utm_source: String,
    utm_medium: String,
    #[derivative(Debug = "ignore")]
    token: String,
}

impl SubscriptionClient {
    pub fn new(
        base_url: Url,
        publication_id: String,
        token: String,
        utm_source: String,
        utm_medium: String,
        timeout_secs: u64,
    ) -> Result<Self, anyhow::Error> {
        Ok(Self {
            http_client: http_client(timeout_secs).context(format!(
                "Error creating subscription client with:\nbase_url: {}\npublication_id: \
                 {}\ntimeout_secs: {}",
                base_url, publication_id, timeout_secs
            ))?,
            base_url,
            publication_id,
            utm_source,
            utm_medium,
            token,
        })
    }

    /// Existing subscribers are not reactivated; new ones get the welcome email.
    #[tracing::instrument(name = "adding subscriber to publication", skip(self, email))]
    pub async fn subscribe(&self, email: &str) -> Result<(), UpstreamError> {
        let endpoint = self.base_url.join(&format!(
            "v2/publications/{}/subscriptions",
            self.publication_id
        ))?;
        let response = self
            .http_client
            .post(endpoint)
            .bearer_auth(&self.token)
            .json(&SubscriptionRequest::new(
                email,
                &self.utm_source,
                &self.utm_medium,
            ))
            .send()
            .await?;
        let body = ensure_success(PROVIDER, response).await?.text().await?;
        tracing::info!(response_body = %body, "subscriber added");
        Ok(())
    }
}

use anyhow::Context;
use derivative::Derivative;
use reqwest::{
    Client,
    Url,
};

use crate::domain::EmailAddress;
use crate::email_client::request::EmailRequest;
use crate::upstream::{
    ensure_success,
    http_client,
    UpstreamError,
};

const PROVIDER: &str = "email provider";

#[derive(Derivative)]
#[derivative(Debug)]
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
    sender: EmailAddress,
    #[derivative(Debug = "ignore")]
    token: String,
}

impl EmailClient {
    pub fn new(
        base_url: Url,
        sender: EmailAddress,
        token: String,
        timeout_secs: u64,
    ) -> Result<Self, anyhow::Error> {
        Ok(Self {
            http_client: http_client(timeout_secs).context(format!(
                "Error creating mail client with:\nbase_url: {}\nsender: {}\ntimeout_secs: {}",
                base_url,
                sender.as_ref(),
                timeout_secs
            ))?,
            base_url,
            sender,
            token,
        })
    }

    #[tracing::instrument(
        name = "sending email",
        skip(self, recipient, html_part, text_part),
        fields(recipient = %recipient.as_ref())
    )]
    pub async fn send_email(
        &self,
        recipient: &EmailAddress,
        subject: &str,
        html_part: &str,
        text_part: &str,
    ) -> Result<(), UpstreamError> {
        let response = self
            .http_client
            .post(self.base_url.join("v3/mail/send")?)
            .bearer_auth(&self.token)
            .json(&EmailRequest::new(
                self.sender.as_ref(),
                recipient.as_ref(),
                subject,
                html_part,
                text_part,
            ))
            .send()
            .await?;
        ensure_success(PROVIDER, response).await?;
        Ok(())
    }
}

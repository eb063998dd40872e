use std::convert::TryFrom;
use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{
    error,
    web,
    App,
    HttpResponse,
    HttpServer,
};
use anyhow::Context;
use serde_json::json;
use tracing_actix_web::TracingLogger;
use url::Url;

use crate::app::configuration::{
    EmailClientSettings,
    LlmClientSettings,
    Settings,
    SubscriptionClientSettings,
};
use crate::domain::{
    EmailAddress,
    NotificationRecipient,
};
use crate::email_client::EmailClient;
use crate::llm_client::LlmClient;
use crate::routes::*;
use crate::subscription_client::SubscriptionClient;

pub struct QuestionGeneratorApp {
    pub server: Server,
    pub port: u16,
}

impl QuestionGeneratorApp {
    pub async fn from(configuration: Settings) -> Result<QuestionGeneratorApp, anyhow::Error> {
        let tcp_listener = TcpListener::bind(configuration.application.binding_address())
            .context(format!(
                "error binding to {}",
                configuration.application.binding_address()
            ))?;
        let port = tcp_listener.local_addr()?.port();

        let recipient = web::Data::new(NotificationRecipient(email_address(
            &configuration.email_client.notification_recipient,
            "notification recipient",
        )?));
        let email_client = web::Data::new(QuestionGeneratorApp::email_client(
            configuration.email_client,
        )?);
        let subscription_client = web::Data::new(QuestionGeneratorApp::subscription_client(
            configuration.subscription_client,
        )?);
        let llm_client = web::Data::new(QuestionGeneratorApp::llm_client(
            configuration.llm_client,
        )?);
        let generation = web::Data::new(configuration.generation);
        let reporting = web::Data::new(ErrorReporting {
            expose_details: configuration.application.expose_error_details,
        });

        // HttpServer handles all transport level concerns
        let server = HttpServer::new(move || {
            // App is where all the application logic lives: routing, middlewares, request
            // handlers, etc.
            App::new()
                .wrap(Cors::permissive())
                .wrap(TracingLogger::default())
                .app_data(json_config())
                .route("/api/health", web::get().to(health_check))
                .route("/api/capture-email", web::post().to(capture_email))
                .route("/subscribe", web::post().to(capture_email))
                .route("/generate-questions", web::post().to(generate_questions))
                .route("/generate-starter", web::post().to(generate_starter))
                // the closure is called once per worker, so each one gets its own
                // handle to the shared clients
                .app_data(email_client.clone())
                .app_data(subscription_client.clone())
                .app_data(llm_client.clone())
                .app_data(recipient.clone())
                .app_data(generation.clone())
                .app_data(reporting.clone())
        })
        .backlog(configuration.application.max_pending_connections)
        .listen(tcp_listener)?
        .run();
        Ok(QuestionGeneratorApp { port, server })
    }

    fn email_client(client_config: EmailClientSettings) -> Result<EmailClient, anyhow::Error> {
        let sender = email_address(&client_config.sender_email, "sender email")?;
        EmailClient::new(
            base_url(&client_config.base_url, "email client")?,
            sender,
            client_config.api_key,
            client_config.timeout_secs,
        )
    }

    fn subscription_client(
        client_config: SubscriptionClientSettings,
    ) -> Result<SubscriptionClient, anyhow::Error> {
        SubscriptionClient::new(
            base_url(&client_config.base_url, "subscription client")?,
            client_config.publication_id,
            client_config.api_key,
            client_config.utm_source,
            client_config.utm_medium,
            client_config.timeout_secs,
        )
    }

    fn llm_client(client_config: LlmClientSettings) -> Result<LlmClient, anyhow::Error> {
        LlmClient::new(
            base_url(&client_config.base_url, "language model client")?,
            client_config.model,
            client_config.api_key,
            client_config.timeout_secs,
        )
    }
}

/// Endpoint paths are joined onto the base url, so a base path such as
/// `https://gateway/openai` must end with `/` to be kept.
fn base_url(url: &str, client: &str) -> Result<Url, anyhow::Error> {
    let mut base_url =
        Url::parse(url).context(format!("invalid base url: {} for {}", url, client))?;
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    Ok(base_url)
}

fn email_address(email: &str, role: &str) -> Result<EmailAddress, anyhow::Error> {
    EmailAddress::try_from(email.to_string()).context(format!("invalid {}", role))
}

/// Bodies that are not valid JSON get the same error shape as the handlers'.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::warn!("rejected request body: {}", err);
        let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
        error::InternalError::from_response(err, response).into()
    })
}

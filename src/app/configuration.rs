use std::convert::TryFrom;
use std::env;

use config::{
    Config,
    ConfigError,
    Environment as EnvironmentSource,
    File,
};
use custom_error::custom_error;
use derivative::Derivative;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub subscription_client: SubscriptionClientSettings,
    pub llm_client: LlmClientSettings,
    pub generation: GenerationSettings,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub max_pending_connections: u32,
    pub port: u16,
    /// Include the upstream error text in 500 responses.
    pub expose_error_details: bool,
}

#[derive(Clone, Derivative, serde::Deserialize)]
#[derivative(Debug)]
pub struct EmailClientSettings {
    pub base_url: String,
    #[derivative(Debug = "ignore")]
    pub api_key: String,
    pub sender_email: String,
    pub notification_recipient: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Derivative, serde::Deserialize)]
#[derivative(Debug)]
pub struct SubscriptionClientSettings {
    pub base_url: String,
    #[derivative(Debug = "ignore")]
    pub api_key: String,
    pub publication_id: String,
    pub utm_source: String,
    pub utm_medium: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Derivative, serde::Deserialize)]
#[derivative(Debug)]
pub struct LlmClientSettings {
    pub base_url: String,
    #[derivative(Debug = "ignore")]
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

/// Output budgets and validation strictness for the generated interview material.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct GenerationSettings {
    pub questions_max_tokens: u32,
    pub starter_max_tokens: u32,
    pub strict_question_schema: bool,
}

impl ApplicationSettings {
    pub fn binding_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Settings {
    /// Presence of every credential the upstream providers need, in the order
    /// they are reported at startup.
    pub fn credential_status(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("email_client.api_key", !self.email_client.api_key.trim().is_empty()),
            (
                "subscription_client.api_key",
                !self.subscription_client.api_key.trim().is_empty(),
            ),
            (
                "subscription_client.publication_id",
                !self.subscription_client.publication_id.trim().is_empty(),
            ),
            ("llm_client.api_key", !self.llm_client.api_key.trim().is_empty()),
        ]
    }

    pub fn log_credential_status(&self) {
        for (name, present) in self.credential_status() {
            if present {
                tracing::info!("{}: configured", name);
            } else {
                tracing::warn!("{}: missing", name);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(ConfigurationError::UnknownAppEnv { name: value }),
        }
    }
}

custom_error! {
///! Custom error for an unknown environment or invalid configuration files.
pub ConfigurationError
    UnknownAppEnv{name:String} = "`{name}` is not a supported `APP_ENVIRONMENT` \
    (possible values: [`local`|`production`]).",
    InvalidConfig{source:ConfigError} = "{source}",
}

/// Load the configuration from the directory: `configuration`.
///
/// The environment is read from `APP_ENVIRONMENT` and defaults to `production`.
///
/// It fails if:
/// - `APP_ENVIRONMENT` holds an unknown value
/// - the `configuration/base` file is missing
/// - the `configuration/${APP_ENVIRONMENT}` file is missing
/// - the `configuration/*` files have missing or unexpected fields
///
/// # Examples
///
/// ```rust
/// use question_generator::app::load_configuration;
///
/// assert!(load_configuration().is_ok());
/// ```
pub fn load_configuration() -> Result<Settings, ConfigurationError> {
    let app_environment = match env::var("APP_ENVIRONMENT") {
        Ok(name) => Environment::try_from(name)?,
        Err(_) => Environment::Production,
    };
    load_configuration_for(app_environment)
}

pub fn load_configuration_for(app_environment: Environment) -> Result<Settings, ConfigurationError> {
    // Settings from environment variables use a prefix of APP and '__' as
    // separator. E.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
    let settings = Config::builder()
        .add_source(File::with_name("configuration/base").required(true))
        .add_source(
            File::with_name(&format!("configuration/{}", app_environment.as_str())).required(true),
        )
        .add_source(
            EnvironmentSource::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

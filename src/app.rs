pub use configuration::*;
pub use startup::QuestionGeneratorApp;
pub use telemetry::setup_tracing;

mod configuration;
mod startup;
mod telemetry;

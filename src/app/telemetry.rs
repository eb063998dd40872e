use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{
    BunyanFormattingLayer,
    JsonStorageLayer,
};
use tracing_log::LogTracer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{
    EnvFilter,
    Registry,
};

/// Install the global `tracing` subscriber.
///
/// Spans and events are emitted as bunyan-formatted JSON on stdout. `RUST_LOG`
/// takes precedence over `default_env_filter`. Records emitted through the `log`
/// facade (e.g. by actix-web internals) are forwarded to `tracing`.
///
/// It must be called only once per process.
pub fn setup_tracing(name: String, default_env_filter: String) {
    LogTracer::init().expect("error redirecting `log` records to `tracing`");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, std::io::stdout);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    set_global_default(subscriber).expect("error setting the global tracing subscriber");
}

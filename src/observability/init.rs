//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "eventdeck.log";

/// Installs the global tracing subscriber.
///
/// The subscriber stacks:
/// 1. an `EnvFilter` at `config.trace_level` (default `"info"`),
/// 2. an OpenTelemetry layer, so spans carry trace and span ids that
///    [`TraceContext`](crate::worker::TraceContext) can hand to the worker,
/// 3. a `fmt` layer writing plain text lines to `eventdeck.log` in the data
///    directory, rotated at 10 MB.
///
/// Does nothing if the data directory cannot be created. Only the first call
/// per thread group takes effect.
///
/// # Example
///
/// ```rust
/// use eventdeck::observability::init_tracing;
/// use eventdeck::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        "EventDeck",
    )]);

    let provider = TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .build();
    let otel_layer = OpenTelemetryLayer::new(provider.tracer("EventDeck"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(FileWriter::new(data_dir.join(LOG_FILE_NAME)));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .with(fmt_layer);

    let _ = subscriber.try_init();
}

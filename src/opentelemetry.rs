use crate::config::{LoggingConfig, ServiceConfig};

use opentelemetry::trace::{TraceError, TracerProvider};
use opentelemetry::{KeyValue, global};
use opentelemetry_sdk::{
    Resource, error::OTelSdkError, propagation::TraceContextPropagator, trace::SdkTracerProvider,
};
use opentelemetry_semantic_conventions::resource;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, Registry, filter::LevelFilter, layer::SubscriberExt};

#[derive(Error, Debug)]
pub enum OTelError {
    #[error(transparent)]
    Subscriber(#[from] SetGlobalDefaultError),
    #[error(transparent)]
    OTelSdk(#[from] OTelSdkError),
    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Installs the global subscriber.
///
/// JSON logs always go to stdout. Spans are additionally exported over OTLP
/// when `logging.otlp` is set, in which case the provider is returned so it can
/// be flushed on shutdown.
pub fn configure(
    service_config: &ServiceConfig,
    logging_config: &LoggingConfig,
) -> Result<Option<SdkTracerProvider>, OTelError> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    let provider = if logging_config.otlp {
        Some(tracer_provider(service_config)?)
    } else {
        None
    };

    let telemetry = provider.as_ref().map(|provider| {
        tracing_opentelemetry::layer().with_tracer(provider.tracer(service_config.name.to_owned()))
    });

    let env_filter = EnvFilter::new(logging_level(&logging_config.level));

    let formatting_layer =
        BunyanFormattingLayer::new(service_config.name.to_owned(), std::io::stdout);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(telemetry)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(provider)
}

pub fn shutdown(provider: Option<SdkTracerProvider>) -> Result<(), OTelError> {
    match provider {
        Some(provider) => Ok(provider.shutdown()?),
        None => Ok(()),
    }
}

fn tracer_provider(service_config: &ServiceConfig) -> Result<SdkTracerProvider, OTelError> {
    let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let resource = Resource::builder()
        .with_attribute(KeyValue::new(
            resource::SERVICE_NAME,
            service_config.name.to_owned(),
        ))
        .build();

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(otlp_exporter)
        .with_resource(resource)
        .build())
}

fn logging_level(level: &str) -> String {
    let filter = match level {
        "off" => LevelFilter::OFF,
        "debug" => LevelFilter::DEBUG,
        "trace" => LevelFilter::TRACE,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => LevelFilter::ERROR,
    };

    filter.to_string()
}

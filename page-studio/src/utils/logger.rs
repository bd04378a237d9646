//! Logging Infrastructure
//!
//! Console output is human-readable in development and JSON in production.
//! With a log directory, application events and `security` events go to
//! separate daily rolling files.

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, Layer, Registry, filter, fmt, prelude::*};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

const SECURITY_TARGET: &str = "security";

fn console_layer<W>(json: bool, writer: W) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if json {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(writer)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_writer(writer)
            .boxed()
    }
}

/// Daily rolling file keeping only events whose target passes `keep`
fn file_layer(dir: &Path, prefix: &str, json: bool, keep: fn(&str) -> bool) -> BoxedLayer {
    let appender = std::sync::Mutex::new(RollingFileAppender::new(Rotation::DAILY, dir, prefix));
    let only = filter::filter_fn(move |meta| keep(meta.target()));
    if json {
        fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(appender)
            .with_filter(only)
            .boxed()
    } else {
        fmt::layer()
            .with_ansi(false)
            .with_writer(appender)
            .with_filter(only)
            .boxed()
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` overrides `level` when set. `json` selects the production
/// format for every sink.
pub fn init_logger_with_file(level: &str, json: bool, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers = vec![console_layer(json, std::io::stdout)];
    if let Some(dir) = log_dir {
        let dir = Path::new(dir);
        fs::create_dir_all(dir)?;
        layers.push(file_layer(dir, "page-studio", json, |target| {
            target != SECURITY_TARGET
        }));
        layers.push(file_layer(dir, "security", json, |target| {
            target == SECURITY_TARGET
        }));
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()?;
    Ok(())
}

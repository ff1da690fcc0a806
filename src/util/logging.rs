// ZeroDecay - util/logging.rs
//
// Structured logging with runtime-selectable debug mode, plus the bridge that
// mirrors log events into the Log tab.
//
// Activation (console):
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// The Log tab only ever sees INFO and above. Formatting happens here; the UI
// just appends the finished lines.

use std::sync::mpsc::{self, Receiver, Sender};

use chrono::{DateTime, Local};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};

use super::constants;

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
///
/// Returns the receiving end of the Log tab channel.
pub fn init(debug_flag: bool, config_level: Option<&str>) -> LogReceiver {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(constants::DEFAULT_LOG_LEVEL)
    };

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(filter);

    let (ui_layer, receiver) = UiLogLayer::new();

    tracing_subscriber::registry()
        .with(console)
        .with(ui_layer.with_filter(LevelFilter::INFO))
        .init();

    tracing::debug!(
        app = constants::APP_NAME,
        version = constants::APP_VERSION,
        "Logging initialised"
    );

    receiver
}

/// Receiving end of the Log tab channel. Owned by the GUI.
#[derive(Debug)]
pub struct LogReceiver {
    rx: Receiver<String>,
}

impl LogReceiver {
    /// Take every line that arrived since the last call, without blocking.
    pub fn drain(&self) -> impl Iterator<Item = String> + '_ {
        self.rx.try_iter()
    }
}

/// `tracing` layer that formats each event into one line and sends it to the
/// Log tab.
#[derive(Debug)]
pub struct UiLogLayer {
    tx: Sender<String>,
}

impl UiLogLayer {
    pub fn new() -> (Self, LogReceiver) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, LogReceiver { rx })
    }
}

impl<S> Layer<S> for UiLogLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MsgVisitor::default();
        event.record(&mut visitor);
        let line = format_line(
            Local::now(),
            *event.metadata().level(),
            visitor.message.as_deref().unwrap_or_default(),
            &visitor.fields,
        );
        // The GUI may already be gone during shutdown; dropping the line is fine.
        let _ = self.tx.send(line);
    }
}

/// Format one Log tab line: `<time> - <LEVEL> - <message> key=value ...`.
pub fn format_line(
    time: DateTime<Local>,
    level: Level,
    message: &str,
    fields: &[(&'static str, String)],
) -> String {
    let mut line = format!(
        "{} - {} - {}",
        time.format(constants::LOG_LINE_TIME_FORMAT),
        level,
        message
    );
    for (name, value) in fields {
        line.push(' ');
        line.push_str(name);
        line.push('=');
        line.push_str(value);
    }
    line
}

#[derive(Default)]
struct MsgVisitor {
    message: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl tracing::field::Visit for MsgVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let v = format!("{value:?}");
        if field.name() == "message" {
            self.message = Some(v);
        } else {
            self.fields.push((field.name(), v));
        }
    }
}

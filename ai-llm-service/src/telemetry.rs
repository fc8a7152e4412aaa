use std::io::{self, IsTerminal};
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Crate target prefix used to build per-crate directives.
pub const TARGET_PREFIX: &str = "ai_llm_service";

/// RFC3339 UTC timer implemented via `chrono`.
/// Example output: `2025-09-12T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        // Keep timestamps compact: no fractional seconds, Z-suffix
        let s = now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&s)
    }
}

/// Build a compact formatting layer that writes to **stderr**.
///
/// - RFC3339 UTC timestamps
/// - Compact single-line format with target
/// - ANSI colors only when stderr is a terminal
///
/// Stdout stays reserved for the CLI dialogue and the review result.
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let use_ansi = io::stderr().is_terminal();

    fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(use_ansi)
        .event_format(
            fmt::format()
                .compact() // single-line, tidy output
                .with_timer(ChronoRfc3339Utc)
                .with_level(true)
                .with_target(true),
        )
}

/// Level directive for a single crate target, e.g. `ai_llm_service=debug`.
pub fn level_directive(target: &str, level: Level) -> Option<Directive> {
    let s = format!("{target}={}", level.as_str().to_lowercase());
    Directive::from_str(&s).ok()
}

/// Create an EnvFilter from `RUST_LOG` or fall back to `default`.
///
/// When `RUST_LOG` is absent, `level` is additionally applied to this
/// library so its request/latency events can be surfaced independently.
pub fn env_filter_with_level(default: &str, level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(default, level))
}

/// Filter used when `RUST_LOG` is absent: `default` plus a rule for this crate.
pub fn default_filter(default: &str, level: Level) -> EnvFilter {
    let base = EnvFilter::new(default);
    match level_directive(TARGET_PREFIX, level) {
        Some(d) => base.add_directive(d),
        None => base,
    }
}

//! Colorful console output for balancer events.
//!
//! Provides a custom `tracing` layer that formats solve events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end)
//! - **DEBUG**: Best-score improvements
//! - **TRACE**: Individual candidate evaluations (not rendered here)

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::filter::{Builder, LevelFilter};
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the balancer console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Honors `RUST_LOG`; without it every target is filtered at INFO, and the
/// layer itself only renders `teamforge*` targets.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = filter_builder().from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(TeamConsoleLayer)
            .try_init();
    });
}

fn filter_builder() -> Builder {
    EnvFilter::builder().with_default_directive(LevelFilter::INFO.into())
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let line = format!("TeamForge v{} - Balanced Team Partitioning", VERSION);
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}\n", line.bright_cyan().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats balancer events with colors.
pub struct TeamConsoleLayer;

impl<S: Subscriber> Layer<S> for TeamConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();
        if !target.starts_with("teamforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    score: Option<String>,
    policy: Option<String>,
    roster_size: Option<u64>,
    attribute_count: Option<u64>,
    candidate_count: Option<u64>,
    candidate_index: Option<u64>,
    candidates: Option<u64>,
    speed: Option<u64>,
    duration_ms: Option<u64>,
    partitions: Option<u64>,
    best_imbalance: Option<u64>,
    total_difference: Option<u64>,
    parallel: Option<bool>,
    terminated_early: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "score" => self.score = Some(s.trim_matches('"').to_string()),
            "policy" => self.policy = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "roster_size" => self.roster_size = Some(value),
            "attribute_count" => self.attribute_count = Some(value),
            "candidate_count" => self.candidate_count = Some(value),
            "candidate_index" => self.candidate_index = Some(value),
            "candidates" => self.candidates = Some(value),
            "speed" => self.speed = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "partitions" => self.partitions = Some(value),
            "best_imbalance" => self.best_imbalance = Some(value),
            "total_difference" => self.total_difference = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "parallel" => self.parallel = Some(value),
            "terminated_early" => self.terminated_early = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "score" => self.score = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "best_improved" => format_best_improved(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let players = v.roster_size.unwrap_or(0);
    let attributes = v.attribute_count.unwrap_or(0);
    let candidates = v.candidate_count.unwrap_or(0);

    let mut output = format!(
        "{} {} Balancing │ {} players │ {} attributes │ {} candidates",
        format_elapsed(),
        "▶".bright_green().bold(),
        players.to_formatted_string(&Locale::en).bright_yellow(),
        attributes.to_formatted_string(&Locale::en).bright_yellow(),
        candidates.to_formatted_string(&Locale::en).bright_magenta(),
    );

    if let Some(policy) = &v.policy {
        output.push_str(&format!(" │ {} policy", policy.to_lowercase().white()));
    }
    if v.parallel == Some(true) {
        output.push_str(&format!(" │ {}", "parallel".bright_blue()));
    }

    output
}

fn format_solve_end(v: &EventVisitor) -> String {
    let candidates = v.candidates.unwrap_or(0);
    let speed = v.speed.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);
    let partitions = v.partitions.unwrap_or(0);

    let mut output = format!(
        "{} {} Balancing complete │ {} │ {} candidates │ {} candidates/s │ {} option(s)",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        candidates.to_formatted_string(&Locale::en).white(),
        speed
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        partitions.to_formatted_string(&Locale::en).bright_yellow(),
    );

    if let (Some(imb), Some(tot)) = (v.best_imbalance, v.total_difference) {
        output.push_str(&format!(" │ {}", format_score(&format!("{imb}imb/{tot}tot"))));
    }
    if v.terminated_early == Some(true) {
        output.push_str(&format!(" │ {}", "stopped early".bright_red()));
    }

    output
}

fn format_best_improved(v: &EventVisitor) -> String {
    let index = v.candidate_index.unwrap_or(0);
    let score = v.score.as_deref().unwrap_or("N/A");

    format!(
        "{} {} Candidate {:>10} │ {}",
        format_elapsed(),
        "↓".bright_green(),
        index.to_formatted_string(&Locale::en).bright_black(),
        format_score(score)
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Zero levels render green, anything else yellow.
fn format_score(score: &str) -> String {
    let Some((imb, tot)) = score.split_once('/') else {
        return score.white().to_string();
    };

    let level = |part: &str| {
        let digits = part.trim_end_matches(char::is_alphabetic);
        if digits == "0" {
            part.bright_green().to_string()
        } else {
            part.yellow().to_string()
        }
    };

    format!("{}/{}", level(imb), level(tot))
}

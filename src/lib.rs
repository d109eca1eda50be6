use env_logger::fmt::Formatter;
use owo_colors::{AnsiColors, OwoColorize};
use std::io::Write;

pub mod agents;
pub mod board;
pub mod config;
pub mod games;
pub mod search;
mod util;

/// Colored logging to stderr, filtered by `GAMETREE_LOG` (default `info`).
pub fn logging() {
    let env = env_logger::Env::new().filter_or("GAMETREE_LOG", "info");
    let _ = env_logger::Builder::from_env(env)
        .is_test(cfg!(test))
        .format(format_record)
        .try_init();
}

/// `[LEVEL thread module:line] message`, colored by level.
fn format_record(buf: &mut Formatter, record: &log::Record) -> std::io::Result<()> {
    let color = match record.level() {
        log::Level::Error => AnsiColors::BrightRed,
        log::Level::Warn => AnsiColors::BrightYellow,
        log::Level::Info => AnsiColors::Default,
        log::Level::Debug | log::Level::Trace => AnsiColors::BrightBlack,
    };
    let thread = std::thread::current();

    writeln!(
        buf,
        "{}",
        format_args!(
            "[{:5} {} {}:{}] {}",
            record.level(),
            thread.name().unwrap_or("-"),
            record.module_path().unwrap_or_default(),
            record.line().unwrap_or_default(),
            record.args()
        )
        .color(color)
    )
}

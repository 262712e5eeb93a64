use std::io::{self, Write};

use env_logger::{fmt::Formatter, Builder, Target};
use log::{Level, LevelFilter};

/// Logs to stderr as `LEVEL [target] message`. `RUST_LOG` overrides `level`.
pub fn init_logger(level: LevelFilter) -> io::Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf: &mut Formatter, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        });

    builder
        .try_init()
        .map_err(|error| io::Error::new(io::ErrorKind::Other, error))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

use std::io::Write;

use env_logger::{Builder, Env};
use log::SetLoggerError;

/// Install the process logger. `RUST_LOG` overrides the default `info` level.
pub fn init_logger() -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
}

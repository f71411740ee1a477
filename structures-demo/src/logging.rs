//--------------------------------------------------------------------
// logging.rs
//--------------------------------------------------------------------
// Sets up the logger used to report the demonstration results
//--------------------------------------------------------------------

use std::io::Write;
use env_logger::{Env, WriteStyle};

// Info by default, RUST_LOG takes precedence
pub fn try_init() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[DEMO | {}] {}",
                record.level(),
                record.args()
            )
        })
        .write_style(WriteStyle::Auto)
        .try_init()
}

pub mod response_printer;

use std::io::Write;

/// Info lines are printed bare since they carry the CLI's progress output.
pub fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "[{}] {}: {}", level, record.target(), record.args()),
        })
        .init();
}

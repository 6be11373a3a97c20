use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Sends log output to stdout so anyhow's report on stderr stays readable.
/// `--debug-level` sets the baseline and `RUST_LOG` directives override it.
pub fn init_logger(level: LevelFilter) {
    builder(level, Env::default()).init();
}

fn builder(level: LevelFilter, env: Env) -> Builder {
    let mut builder = Builder::new();
    builder.target(Target::Stdout)
        .format_timestamp_millis()
        .filter_level(level)
        .parse_env(env);
    builder
}

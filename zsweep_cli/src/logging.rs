use env_logger::Env;

/// Route `log` output to stderr, filtered by `RUST_LOG` (default `info`).
///
/// Result lines go to stdout, so logs never mix into redirected output.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

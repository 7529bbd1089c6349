use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Logs go to stderr; stdout belongs to the protocol.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let config = ConfigBuilder::new()
        .add_filter_allow_str("gigboard_core")
        .build();

    if TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Never).is_err() {
        eprintln!("[gigboard-core] logger already initialized");
    }
}

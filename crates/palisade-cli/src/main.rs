use std::path::PathBuf;

use tracing::error;

use palisade_cli::{
    init_subscriber, parse_cli_args, run_build, run_watch, BuildOptions, Verbosity, USAGE,
};
use palisade_core::{tracing_config::TARGET_PREFIX, BuildConfig, CONFIG_FILE_NAME};

fn main() {
    let input = match parse_cli_args(std::env::args().skip(1)) {
        Ok(input) => input,
        Err(parse_error) => {
            eprintln!("{parse_error}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    if input.help {
        print!("{USAGE}");
        return;
    }
    if input.version {
        println!("palisade {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    // Subscriber first, so config loading is traced.
    let verbosity = Verbosity::from_flags(input.verbose, input.quiet);
    init_subscriber(verbosity, input.no_color);

    let project_root = input
        .root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let config = BuildConfig::load_or_default(&project_root.join(CONFIG_FILE_NAME));
    let debounce_ms = config.watch.debounce_ms;
    let options = BuildOptions::for_root(project_root, config, input.minify);

    // The first build must succeed even in watch mode; a broken setup is
    // better reported immediately than silently retried.
    if let Err(build_error) = run_build(&options) {
        report_failure(&build_error);
        std::process::exit(1);
    }

    if input.watch {
        if let Err(watch_error) = run_watch(&options, debounce_ms) {
            error!(target: TARGET_PREFIX, %watch_error, "watch mode ended");
            std::process::exit(1);
        }
    }
}

fn report_failure(build_error: &palisade_core::BuildError) {
    error!(target: TARGET_PREFIX, %build_error, "build failed");
    if let palisade_core::BuildError::ValidationFailed { errors, .. } = build_error {
        for message in errors {
            eprintln!("  - {message}");
        }
    }
}

//! `revolt` — convert legacy assertion calls to the expression-macro API.

use revolt_rewrite::Registry;
use revoltc::{parse_args, run, USAGE};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("REVOLT_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    if options.list_rules {
        let registry = Registry::new();
        let mut names: Vec<_> = registry.rule_names().collect();
        names.sort_unstable();
        for name in names {
            println!("{name}");
        }
        return;
    }

    let summary = run(&options);
    if summary.files_scanned > 0 {
        println!(
            "{} file(s) scanned, {} changed, {} call(s) converted",
            summary.files_scanned, summary.files_changed, summary.calls_converted
        );
        if summary.lossy_conversions > 0 {
            println!(
                "note: {} conversion(s) dropped legacy diagnostic messages",
                summary.lossy_conversions
            );
        }
    }
    if !summary.succeeded() {
        std::process::exit(1);
    }
}

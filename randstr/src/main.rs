use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use randstr::{run, Args, Config, SystemClipboard};
use std::process::exit;

fn main() {
    let args = Args::parse();
    let level = if args.quiet {
        LevelFilter::Off
    } else if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut builder = Builder::new();
    builder.filter_level(level);
    builder.format_timestamp_secs();
    builder.init();

    let result = Config::try_from(args)
        .and_then(|config| run(&config, &mut std::io::stdout().lock(), &mut SystemClipboard));
    if let Err(e) = result {
        eprintln!("error: {e}");
        exit(e.exit_code());
    }
}

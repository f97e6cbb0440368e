mod cli;
mod config;
mod curl;
mod httpie;
mod transform;

use clap::Parser;
use cli::{Cli, Commands};
use env_logger::Env;
use log::{debug, warn};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    // Load any saved configuration.
    let mut config = config::load_config();

    match &cli.command {
        Some(Commands::SetStyle { style }) => {
            config.style = *style;
            if let Err(e) = config::save_config(&config) {
                eprintln!("Failed to save style: {}", e);
                std::process::exit(1);
            }
            println!("Style saved successfully.");
        }
        Some(Commands::Translate { style, args }) => {
            let style = style.unwrap_or(config.style);

            let parsed = curl::parse_args(args);
            for token in &parsed.unrecognized {
                warn!("Ignoring unrecognized curl option: {}", token);
            }
            debug!("Recognized {} option(s)", parsed.opts.len());

            let mut cmd = httpie::CmdLine::new();
            if let Err(e) = transform::apply_all(&mut cmd, &parsed.opts) {
                eprintln!("Failed to translate command: {}", e);
                std::process::exit(1);
            }

            println!("{}", cmd.render(style));
        }
        None => {
            // Default to showing help
            let _ = Cli::parse_from(["curlpie", "--help"]);
        }
    }
}

//! Charm CLI entry point.

use charm_runtime::{BasicHub, Repl, ReplConfig};
use charm_text::text;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::env;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    show_help: bool,
    show_version: bool,
    no_color: bool,
    no_banner: bool,
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--no-color" => config.no_color = true,
            "--no-banner" => config.no_banner = true,
            "--log" => {
                let path = args.next().ok_or("--log requires a file name")?;
                config.log_file = Some(PathBuf::from(path));
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    Ok(config)
}

fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let file = File::create(path)?;
    WriteLogger::init(LevelFilter::Debug, log_config, file)?;
    Ok(())
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("charm {}", text::VERSION);
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = ReplConfig::default()
        .with_color(!cli.no_color)
        .with_banner(!cli.no_banner);

    if config.show_banner {
        print!("{}", text::logo(&config.text.effective_palette()));
    }

    let hub = BasicHub::new(io::stdout(), config.text);
    let mut repl = Repl::new(hub, &config)?;
    let end = repl.run();
    log::info!("session finished: {end:?}");

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mCharm\x1b[0m - interactive session front-end

\x1b[1mUSAGE:\x1b[0m
    charm [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --no-color         Render diagnostics without colour
    --no-banner        Skip the startup banner
    --log FILE         Write a debug log to FILE

\x1b[1mREPL COMMANDS:\x1b[0m
    use NAME           Switch to a service
    help               List commands
    quit, exit         Leave Charm
    Ctrl+D, Ctrl+C     Leave Charm"
    );
}

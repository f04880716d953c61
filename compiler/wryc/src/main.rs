//! Wry CLI.

use std::io::IsTerminal;
use std::process::ExitCode;

use wryc::{
    init_tracing, parse_args, read_source, render_error, run_source, Command, RunConfig, EXIT_IO,
};

fn main() -> ExitCode {
    init_tracing();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            return ExitCode::from(EXIT_IO);
        }
    };

    match command {
        Command::Help => {
            print_usage();
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("wry {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Command::Run(config) => run(&config),
    }
}

fn run(config: &RunConfig) -> ExitCode {
    let is_tty = std::io::stderr().is_terminal();
    let source = match read_source(config.path.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            render_error(std::io::stderr(), &err, None, config.color, is_tty);
            return ExitCode::from(err.exit_code());
        }
    };

    match run_source(&source.text, config) {
        Ok(Some(rendered)) if !config.quiet => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            render_error(std::io::stderr(), &err, Some(&source), config.color, is_tty);
            ExitCode::from(err.exit_code())
        }
    }
}

fn print_usage() {
    println!("Wry {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: wry [OPTIONS] [FILE]");
    println!();
    println!("Runs FILE, or the script on stdin when FILE is missing or `-`,");
    println!("and prints its value unless it is null.");
    println!();
    println!("Options:");
    println!("  --max-depth=N           Maximum nested function calls (default 512)");
    println!("  --color=auto|always|never");
    println!("                          Colour diagnostics (default auto)");
    println!("  -q, --quiet             Do not print the script's value");
    println!("  -h, --help              Print this help");
    println!("  -V, --version           Print the version");
    println!();
    println!("Exit status: 0 success, 1 syntax error, 2 runtime fault, 3 I/O or usage error.");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=wry_eval=debug) to trace evaluation.");
}

//! CLI entry point for dusk

use std::env;
use std::io;
use std::process;

use dusk::cli::USAGE;
use dusk::{Parsed, parse_args, report};

fn main() {
    env_logger::init();

    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| String::from("dusk"));
    let args: Vec<String> = argv.collect();

    match parse_args(&program, &args) {
        Ok(Parsed::Help) => println!("{USAGE}"),
        Ok(Parsed::Run(config, paths)) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if report(&mut out, &paths, &config) > 0 {
                process::exit(1);
            }
        }
        Err(errors) => {
            for error in &errors {
                eprintln!("{error}");
            }
            eprintln!("Try `{program} --help' for more information.");
            process::exit(1);
        }
    }
}

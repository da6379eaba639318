// src/bin/cli.rs
use kaspi_track::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

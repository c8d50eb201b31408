// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to parse and normalize the command line, printing
/// the result as JSON.
///
/// Try:
///
/// ```bash
/// $ cargo run --example normalize -- ship Guardian move 10 50 --speed=20.5
/// $ cargo run --example normalize -- ship new "'Black Pearl'" '[1, 2]'
/// $ RUST_LOG=docargs=trace cargo run --example normalize -- mine set 1 2 --moored
/// ```
use docargs::{normalize, Argv, Settings};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "
Naval Fate.

Usage:
  naval_fate ship new <name>...
  naval_fate ship <name> move <x> <y> [--speed=<kn>]
  naval_fate ship shoot <x> <y>
  naval_fate mine (set|remove) <x> <y> [--moored | --drifting]
  naval_fate -h | --help
  naval_fate --version

Options:
  -h --help     Show this screen.
  --version     Show version.
  --speed=<kn>  Speed in knots [default: 10].
  --moored      Moored (anchored) mine.
  --drifting    Drifting mine.
";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::new().version(format!("naval_fate {}", env!("CARGO_PKG_VERSION")));

    let args = normalize(USAGE, Argv::Process, settings)
        .unwrap_or_else(|e| e.exit())
        .or_exit();

    match serde_json::to_string_pretty(&args) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}

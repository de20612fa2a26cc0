//! Check that adb is installed and that Android devices are connected.
//!
//! Usage: adb-verify [--details] [ADDRESS]
//! Exits 0 when at least one ready device was found, 1 otherwise.

use adb_verify::verify::{self, Options};
use adb_verify::{AdbTransport, Config};
use clap::Parser;

#[derive(Parser)]
#[command(name = "adb-verify")]
#[command(about = "Verify adb installation and Android device connections")]
struct Args {
    /// Device address to `adb connect` first (host or host:port)
    address: Option<String>,

    /// Also show manufacturer and Android version, and probe shell and storage access
    #[arg(long)]
    details: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let config = Config::from_env();
    log::debug!("config: {:?}", config);

    let adb = AdbTransport::new(&config.program);
    let options = Options {
        address: args.address,
        details: args.details,
    };

    let mut stdout = std::io::stdout().lock();
    let result = verify::run(&adb, &config, &options, &mut stdout);
    drop(stdout);

    match result {
        Ok(reports) => {
            log::info!("{} device(s) verified", reports.len());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

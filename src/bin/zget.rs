//! zget CLI
//!
//! Thin command-line wrapper around the protocol client, in the spirit of
//! `zabbix_get`: query one key against a VmBix-style service and print the
//! decoded payload to stdout.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use zget::{Client, Config};

/// Query a monitoring key over the Zabbix Get protocol
#[derive(Parser, Debug)]
#[command(name = "zget")]
#[command(about = "Zabbix Get protocol query tool")]
#[command(version)]
struct Args {
    /// The query key (e.g. "vm.discovery[*]")
    key: Option<String>,

    /// Target hostname or IP
    #[arg(short = 'H', long, default_value = "localhost")]
    host: String,

    /// Target TCP port
    #[arg(short, long, default_value = "12050")]
    port: u16,

    /// Connect/read/write timeout in milliseconds (0 disables)
    #[arg(short, long, default_value = "5000")]
    timeout_ms: u64,
}

fn main() -> ExitCode {
    // Initialize tracing/logging; stdout is reserved for the payload
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let Some(key) = args.key else {
        eprintln!("Usage: zget [OPTIONS] <KEY>");
        return ExitCode::FAILURE;
    };

    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .connect_timeout_ms(args.timeout_ms)
        .read_timeout_ms(args.timeout_ms)
        .write_timeout_ms(args.timeout_ms)
        .build();

    let client = Client::new(config);

    match client.query(&key) {
        Ok(payload) => {
            // Emit the payload exactly as received, no added newline
            let mut stdout = std::io::stdout();
            if stdout
                .write_all(payload.as_bytes())
                .and_then(|_| stdout.flush())
                .is_err()
            {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("zget: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Replica CLI binary: produce copies of a prototype record from the command line.
//!
//! Reads a TOML table, builds the provider chosen by `--strategy`, and prints one JSON
//! document per produced object to stdout. Logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cli::{run, write_objects, RunOptions, Strategy};

#[derive(Parser, Debug)]
#[command(name = "replica")]
#[command(about = "Replica: produce copies of a prototype record")]
struct Args {
    /// Prototype record: a TOML file holding one table
    #[arg(short, long, value_name = "PATH")]
    prototype: PathBuf,

    /// Number of objects to produce
    #[arg(short = 'n', long, env = "REPLICA_COUNT", default_value_t = 1)]
    count: usize,

    /// Provider used to produce the objects
    #[arg(short, long, value_enum, env = "REPLICA_STRATEGY", default_value_t = Strategy::Clone)]
    strategy: Strategy,

    /// Pretty-print each JSON document (multi-line). Default: compact, one per line
    #[arg(long)]
    pretty: bool,

    /// Verbose: debug logs from replica and the provider library
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let loaded = config::load_and_apply("replica", None);
    let args = Args::parse();

    config::init_tracing(if args.verbose { "debug" } else { "warn" });
    match loaded {
        Ok(keys) if !keys.is_empty() => tracing::debug!(?keys, "applied config"),
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "config not loaded"),
    }

    let opts = RunOptions {
        prototype: args.prototype,
        count: args.count,
        strategy: args.strategy,
    };
    let result = run(&opts).and_then(|output| {
        write_objects(&mut std::io::stdout().lock(), &output.objects, args.pretty)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut msg = format!("replica: {}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                msg.push_str(&format!(": {}", cause));
                source = cause.source();
            }
            eprintln!("{}", msg);
            ExitCode::FAILURE
        }
    }
}

//! Y86-64 sequential simulator CLI.
//!
//! This binary loads a `.yo`-style listing (from a file or stdin), steps the
//! engine until it halts, faults, or hits the step cap, and prints the JSON
//! array of per-step architectural snapshots on stdout. If the load fails,
//! it prints an empty array and exits without stepping.

use std::io::Read;
use std::{fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use y86_core::report::Snapshot;
use y86_core::{loader, Config, Cpu, Memory};

#[derive(Parser, Debug)]
#[command(
    name = "ysim",
    version,
    about = "Y86-64 sequential (SEQ) architectural simulator",
    long_about = "Load a `address: hexbytes | comment` listing and execute it one \
instruction per step, printing the JSON state trace.\n\nExamples:\n  \
ysim prog.yo\n  ysim prog.yo --max-steps 500\n  ysim < prog.yo"
)]
struct Cli {
    /// Program listing to execute; reads stdin when omitted.
    file: Option<String>,

    /// Step cap overriding the configured value.
    #[arg(long)]
    max_steps: Option<u64>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<String>,

    /// Emit per-stage trace events on stderr.
    #[arg(long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("error: cannot read config '{path}': {e}");
                process::exit(1);
            });
            Config::from_json(&text).unwrap_or_else(|e| {
                eprintln!("error: malformed config '{path}': {e}");
                process::exit(1);
            })
        }
        None => Config::default(),
    };
    if let Some(cap) = cli.max_steps {
        config.general.max_steps = cap;
    }
    if cli.trace {
        config.general.trace = true;
    }

    init_tracing(config.general.trace);

    let content = match cli.file.as_deref() {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("error: cannot read '{path}': {e}");
            process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("error: cannot read stdin: {e}");
                process::exit(1);
            }
            buf
        }
    };

    let mut mem = Memory::new(config.memory.size);
    if let Err(e) = loader::load(&content, &mut mem) {
        eprintln!("load failed: {e}");
        println!("[]");
        return;
    }

    let mut cpu = Cpu::new(mem);
    let mut trace = Vec::new();
    let mut steps = 0;
    while cpu.status.is_running() && steps < config.general.max_steps {
        cpu.step();
        steps += 1;
        trace.push(Snapshot::capture(&cpu));
    }

    match serde_json::to_string_pretty(&trace) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: cannot serialize state trace: {e}");
            process::exit(1);
        }
    }
}

/// Routes trace events to stderr so the JSON trace on stdout stays clean.
fn init_tracing(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

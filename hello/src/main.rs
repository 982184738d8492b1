use clap::Parser;
use hello::error::Result;
use hello::output::{build_output, parse_format};
use hello_lib::export::write_output;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hello")]
#[command(about = "Print the Hello, World! greeting", long_about = None)]
struct Args {
    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file path (optional, stdout otherwise)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of times to print the greeting
    #[arg(short, long, default_value_t = 1)]
    repeat: usize,
}

fn run(args: Args) -> Result<()> {
    let format = parse_format(&args.format)?;
    tracing::info!("Using output format: {}", format.as_str());

    let output = build_output(format, args.repeat)?;

    if let Some(output_path) = &args.output {
        write_output(&output, output_path)?;
        tracing::info!("Output written to {}", output_path.display());
    } else {
        print!("{output}");
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

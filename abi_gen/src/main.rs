use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cmds;

#[derive(Parser)]
#[command(name = "gen-interface")]
#[command(about = "Generate a Cairo starknet::interface from a compiled contract artifact", long_about = None)]
#[command(version)]
struct Cli {
  /// Path to the artifact JSON (e.g. target/dev/<pkg>::<module>::<contract>.json)
  #[arg(value_name = "ARTIFACT")]
  artifact: PathBuf,

  /// Contract name used for the trait (defaults to the artifact name)
  #[arg(short = 'n', long = "name", value_name = "NAME", env = "GEN_INTERFACE_NAME")]
  name: Option<String>,

  /// Write the output to a file instead of stdout
  #[arg(short = 'o', long = "output", value_name = "FILE", env = "GEN_INTERFACE_OUTPUT")]
  output: Option<PathBuf>,

  /// List interfaces and their functions instead of generating a trait
  #[arg(long = "inspect")]
  inspect: bool,

  /// Enable verbose output
  #[arg(short = 'v', long = "verbose")]
  verbose: bool,
}

const USAGE: &str = "Usage: gen-interface <artifact-path>";

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(filter)
    .init();
}

fn main() -> anyhow::Result<()> {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
    Err(err) => {
      eprintln!("{}", USAGE);
      eprintln!("{}", err);
      process::exit(1);
    }
  };

  init_tracing(cli.verbose);

  if cli.inspect {
    cmds::inspect::run(&cli.artifact, cli.output.as_deref())?;
  } else {
    cmds::generate::run(&cli.artifact, cli.name.as_deref(), cli.output.as_deref())?;
  }

  Ok(())
}

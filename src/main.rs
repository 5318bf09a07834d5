use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use log::{debug, info};
use sigparse::cli::output::{self, OutputFormat};
use sigparse::config::Overrides;
use sigparse::{Config, Error, ParseReport, Splitter};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sigparse")]
#[command(version, about = "Parse method signatures into their parts", long_about = None)]
struct Cli {
    /// Signatures to parse, e.g. "public void log(String value)"
    #[arg(value_name = "SIGNATURES")]
    signatures: Vec<String>,

    /// Read signatures from a file, one per line
    #[arg(short, long = "input", value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Exit with code 0 even if some signatures fail to parse
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, global = true)]
    format: Option<OutputFormat>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Split a string on literal delimiters
    Split {
        /// Text to split
        source: String,

        /// Delimiter string (repeatable); defaults to the configured set
        #[arg(short, long = "delimiter", value_name = "DELIM", allow_hyphen_values = true)]
        delimiters: Vec<String>,
    },
    /// Show the effective configuration
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "sigparse", &mut io::stdout());
        return Ok(());
    }

    let split_delimiters = match &cli.command {
        Some(Commands::Split { delimiters, .. }) => delimiters.clone(),
        _ => Vec::new(),
    };
    let config = Config::load(Overrides {
        format: cli.format,
        no_color: cli.no_color,
        delimiters: split_delimiters,
    })?;

    if let Some(command) = &cli.command {
        return handle_command(command, &config);
    }

    let inputs = collect_inputs(&cli)?;
    if inputs.is_empty() {
        return Err(Error::InvalidArgument(
            "no signatures given. Use --help for usage information.".to_string(),
        )
        .into());
    }

    info!("Parsing {} signature(s)", inputs.len());
    let report = ParseReport::collect(inputs);

    print!("{}", output::render_report(&report, config.color, config.format)?);
    if config.format == OutputFormat::Text {
        output::print_summary(&report, config.color);
    }

    if report.error_count() > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

/// Gather `(origin, signature)` pairs from positional args and input files
fn collect_inputs(cli: &Cli) -> Result<Vec<(String, String)>> {
    let mut inputs: Vec<(String, String)> = cli
        .signatures
        .iter()
        .enumerate()
        .map(|(i, sig)| (format!("arg {}", i + 1), sig.clone()))
        .collect();

    for path in &cli.inputs {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        debug!("Reading signatures from {}", path.display());

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            inputs.push((format!("{}:{}", path.display(), line_num + 1), line.to_string()));
        }
    }

    Ok(inputs)
}

fn handle_command(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Split { source, .. } => {
            let splitter = Splitter::new(&config.delimiters)?;
            debug!("Splitting on {:?}", splitter.delimiters());
            let fragments = splitter.split(source);
            print!(
                "{}",
                output::render_split(
                    source,
                    splitter.delimiters(),
                    &fragments,
                    config.color,
                    config.format,
                )?
            );
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            if let Some(path) = Config::global_config_path() {
                println!();
                println!("# global config: {}", path.display());
            }
        }
    }
    Ok(())
}

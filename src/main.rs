use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scicalc::Config;
use scicalc::plot::{LinearEquation, PlotFormat, parse_finite, plot_to_file};
use scicalc::repl::Session;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scicalc", version, about = "A keyboard-driven scientific calculator")]
struct Cli {
    /// Path to a config file (default: $XDG_CONFIG_HOME/scicalc/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive session (default)
    Repl,
    /// Press a sequence of keys and print the final display
    Eval {
        /// Keys, e.g. `12 + 3 =` or `16sqrt`
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },
    /// Plot y = m·x + b
    Plot {
        #[arg(short = 'm', long, allow_hyphen_values = true, value_parser = parse_finite)]
        slope: f64,
        #[arg(short = 'b', long, allow_hyphen_values = true, value_parser = parse_finite)]
        intercept: f64,
        /// Output file (default from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long, value_enum)]
        format: Option<PlotFormat>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    scicalc::logging::init(cli.verbose, config.log_level.as_deref());
    tracing::debug!(?config, "starting");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => Session::new(config).run(&mut input, &mut output),
        Command::Eval { keys } => {
            let mut session = Session::new(config);
            session.handle_line(&keys.join(" "), &mut input, &mut output)?;
            Ok(())
        }
        Command::Plot {
            slope,
            intercept,
            output: path,
            format,
        } => {
            let path = path.unwrap_or(config.plot.output);
            let format = format.unwrap_or(config.plot.format);
            plot_to_file(LinearEquation::new(slope, intercept), format, &path)
                .context("An error occurred while plotting")?;
            writeln!(output, "Plot written to {}", path.display())?;
            Ok(())
        }
    }
}

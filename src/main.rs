use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use home_carbon::cmd;
use std::path::PathBuf;
use std::process;

/// Household electricity, bill and CO2 estimator
///
/// home-carbon turns a per-room appliance inventory into monthly energy use,
/// a slab-tariff bill, CO2 emissions and prioritized saving suggestions.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate energy, bill and CO2 for an inventory file
    Report {
        /// Inventory file (.json or .toml)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// People in the household (overrides the config file)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        occupants: Option<u32>,
    },

    /// Turn detector output into an inventory file
    Detect {
        /// Detections file (.json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Minimum detection confidence, 0 to 1 (overrides the config file)
        #[arg(long, value_parser = parse_threshold)]
        threshold: Option<f64>,

        /// Write the inventory here instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Show the slab-tariff bill for a number of units
    Bill {
        /// Monthly consumption in kWh
        #[arg(value_parser = parse_units)]
        units: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the appliance catalog
    Appliances {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List suggested room names
    Rooms,

    /// Initialize home-carbon configuration
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let threshold: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(format!("threshold must be between 0 and 1, got {}", threshold))
    }
}

fn parse_units(value: &str) -> Result<f64, String> {
    let units: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if units.is_finite() && units >= 0.0 {
        Ok(units)
    } else {
        Err(format!("units must be a non-negative number, got {}", value))
    }
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match &cli.command {
        Some(Commands::Report {
            file,
            json,
            occupants,
        }) => cmd::cmd_report(file, *json, *occupants),
        Some(Commands::Detect {
            file,
            threshold,
            output,
        }) => cmd::cmd_detect(file, *threshold, output.as_deref()),
        Some(Commands::Bill { units, json }) => cmd::cmd_bill(*units, *json),
        Some(Commands::Appliances { json }) => cmd::cmd_appliances(*json),
        Some(Commands::Rooms) => cmd::cmd_rooms(),
        Some(Commands::Init) => cmd::cmd_init(),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("home-carbon v{}", env!("CARGO_PKG_VERSION"));
            println!("Household electricity, bill and CO2 estimator\n");
            println!("Usage: home-carbon <COMMAND>\n");
            println!("Commands:");
            println!("  report      Estimate energy, bill and CO2 for an inventory file");
            println!("  detect      Turn detector output into an inventory file");
            println!("  bill        Show the slab-tariff bill for a number of units");
            println!("  appliances  List the appliance catalog");
            println!("  rooms       List suggested room names");
            println!("  init        Initialize home-carbon configuration");
            println!("\nRun 'home-carbon <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use home_carbon::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}

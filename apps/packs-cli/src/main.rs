//! # packs CLI Entry Point
//!
//! Parses arguments, loads `PACKS_*` configuration, initialises logging and
//! hands each order to the packs-core dispatcher.
//!
//! ## Usage
//! ```bash
//! # Resolve orders against the standard catalog
//! packs order 251 12001
//!
//! # Custom catalog, listing every exact combination found
//! packs order 751 --packs 500,251,250 --combinations
//!
//! # Built-in five-pack and six-pack scenarios, as JSON
//! packs --json scenarios
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use packs_cli::config::{CliConfig, ConfigError};
use packs_cli::render::{render_catalog_banner, render_plan};
use packs_cli::scenarios::SCENARIOS;
use packs_core::{Catalog, DispatchOptions, Dispatcher, PackError};

/// Widget Packs: pick the packs to ship for an order.
#[derive(Parser, Debug)]
#[command(name = "packs", version, about)]
struct Cli {
    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// tracing filter, e.g. "debug" (overrides PACKS_LOG and RUST_LOG).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve one or more order quantities.
    Order(OrderArgs),
    /// Run the built-in five-pack and six-pack scenarios.
    Scenarios,
}

#[derive(Args, Debug)]
struct OrderArgs {
    /// Quantities to resolve.
    #[arg(required = true, allow_negative_numbers = true)]
    quantities: Vec<i64>,

    /// Comma-separated pack sizes (overrides PACKS_SIZES).
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    packs: Option<Vec<i64>>,

    /// Also list every exact combination found.
    #[arg(long)]
    combinations: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_code(&e)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load().context("Failed to load configuration")?;
    init_tracing(cli.log_level.as_deref().unwrap_or(&config.log_filter))?;

    match cli.command {
        Commands::Order(args) => run_order(&config, args, cli.json),
        Commands::Scenarios => run_scenarios(&config, cli.json),
    }
}

fn init_tracing(filter: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_new(filter)
        .with_context(|| format!("Invalid log filter '{filter}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

/// Exit status 2 when the input was at fault, 1 for anything else.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    let bad_input = err.chain().any(|cause| {
        cause.is::<ConfigError>()
            || cause.is::<ParseError>()
            || cause
                .downcast_ref::<PackError>()
                .is_some_and(PackError::is_input_error)
    });

    if bad_input {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}

fn run_order(config: &CliConfig, args: OrderArgs, json: bool) -> anyhow::Result<()> {
    let sizes = args.packs.unwrap_or_else(|| config.pack_sizes.clone());
    let catalog = Catalog::new(sizes).context("Unusable pack sizes")?;
    let dispatcher = Dispatcher::with_options(DispatchOptions {
        include_combinations: args.combinations,
        search_budget: config.search_budget,
    });

    let mut plans = Vec::with_capacity(args.quantities.len());
    for quantity in args.quantities {
        let plan = dispatcher
            .plan(&catalog, quantity)
            .with_context(|| format!("Cannot fulfil an order for {quantity} widgets"))?;
        info!(
            quantity,
            strategy = %plan.strategy,
            units = plan.total_units(),
            packs = plan.total_packs(),
            "Order resolved"
        );
        plans.push(plan);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
    } else {
        for plan in &plans {
            print!("{}", render_plan(plan));
        }
    }

    Ok(())
}

fn run_scenarios(config: &CliConfig, json: bool) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::with_options(DispatchOptions {
        include_combinations: false,
        search_budget: config.search_budget,
    });

    let reports = SCENARIOS
        .iter()
        .map(|scenario| {
            scenario
                .run(&dispatcher)
                .with_context(|| format!("Scenario {} failed", scenario.name))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print!("{}", render_catalog_banner(&report.pack_sizes));
            for plan in &report.plans {
                print!("{}", render_plan(plan));
            }
        }
    }

    Ok(())
}

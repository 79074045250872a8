//! Gridloc - grid-based Bayesian robot localization
//!
//! Command-line driver, handling:
//! - Running scenarios (files or the built-in demo)
//! - Validating scenario files without running them
//! - Printing JSON Schemas for agent-facing types

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use gridloc_core::exit_codes::ExitCode;
use gridloc_core::logging::{generate_run_id, init_logging, LogConfig, LogFormat, LogLevel};
use gridloc_core::output::{render_grid, render_summary, OutputFormat, RunReport};
use gridloc_core::scenario::{load_scenario, LoadedScenario, Scenario, ScenarioError};

/// Gridloc - histogram-filter localization on a color grid
#[derive(Parser)]
#[command(name = "gridloc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "table")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log output format (defaults to match --format)
    #[arg(long, global = true, env = "GRIDLOC_LOG_FORMAT")]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario (the built-in demo when no file is given)
    Run(RunArgs),

    /// Validate a scenario file without running it
    Check(CheckArgs),

    /// Print JSON Schemas for scenario and report types
    Schema(SchemaArgs),

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Scenario file (JSON)
    scenario: Option<PathBuf>,

    /// Run the built-in demo scenario explicitly
    #[arg(long, conflicts_with = "scenario")]
    demo: bool,

    /// Print the belief after every step to stderr
    #[arg(long)]
    trace_steps: bool,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Scenario file (JSON)
    scenario: PathBuf,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    /// Type name to print (see --list)
    type_name: Option<String>,

    /// List available schema types
    #[arg(long)]
    list: bool,

    /// Print all schemas as one JSON object
    #[arg(long, conflicts_with = "list")]
    all: bool,
}

// ============================================================================
// Main entry point
// ============================================================================

fn main() {
    let cli = Cli::parse();

    let level = if cli.global.quiet {
        LogLevel::Error
    } else {
        match cli.global.verbose {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    };
    // JSON output implies JSON logs so agents get one machine-readable
    // stream per descriptor; an explicit --log-format wins.
    let format = cli.global.log_format.unwrap_or(match cli.global.format {
        OutputFormat::Json => LogFormat::Json,
        _ => LogFormat::Human,
    });
    init_logging(&LogConfig { format, level });

    let exit_code = match cli.command {
        None => run_scenario(
            &cli.global,
            &RunArgs {
                scenario: None,
                demo: true,
                trace_steps: false,
            },
        ),
        Some(Commands::Run(args)) => run_scenario(&cli.global, &args),
        Some(Commands::Check(args)) => check_scenario(&args),
        Some(Commands::Schema(args)) => print_schemas(&args),
        Some(Commands::Version) => {
            print_version(&cli.global);
            ExitCode::Clean
        }
    };

    std::process::exit(exit_code.as_i32());
}

// ============================================================================
// Command implementations
// ============================================================================

fn run_scenario(global: &GlobalOpts, args: &RunArgs) -> ExitCode {
    let run_id = generate_run_id();

    let loaded: Option<LoadedScenario> = match &args.scenario {
        Some(path) => match load_scenario(path) {
            Ok(loaded) => Some(loaded),
            Err(err) => {
                tracing::error!(error = %err, "failed to load scenario");
                eprintln!("error: {err}");
                return scenario_exit_code(&err);
            }
        },
        None => {
            tracing::debug!(demo = args.demo, "no scenario file given, using built-in demo");
            None
        }
    };
    let (scenario, sha256) = match &loaded {
        Some(loaded) => (loaded.scenario.clone(), Some(loaded.sha256.clone())),
        None => (Scenario::demo(), None),
    };

    tracing::info!(
        run_id = %run_id,
        scenario = scenario.name.as_deref().unwrap_or("unnamed"),
        steps = scenario.measurements.len(),
        "starting localization run"
    );

    let filter = match scenario.build_filter() {
        Ok(filter) => filter,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FilterError;
        }
    };
    let motions = scenario.motion_commands();

    let run_result = if args.trace_steps {
        filter
            .run_with_history(&motions, &scenario.measurements)
            .map(|history| {
                for (idx, belief) in history.iter().enumerate() {
                    eprintln!("belief after step {idx}:");
                    eprintln!("{}", render_grid(belief));
                }
                history
                    .last()
                    .cloned()
                    .unwrap_or_else(|| filter.uniform_prior())
            })
    } else {
        filter.run(&motions, &scenario.measurements)
    };
    let belief = match run_result {
        Ok(belief) => belief,
        Err(err) => {
            tracing::error!(error = %err, "localization run failed");
            eprintln!("error: {err}");
            return ExitCode::FilterError;
        }
    };

    tracing::info!(
        run_id = %run_id,
        max_prob = belief.max_prob(),
        entropy = belief.entropy(),
        "run finished"
    );

    match global.format {
        OutputFormat::Table => println!("{}", render_grid(&belief)),
        OutputFormat::Summary => println!("{}", render_summary(&belief)),
        OutputFormat::Json => {
            let report = RunReport::new(run_id, scenario.measurements.len(), &belief)
                .with_scenario(scenario.name.clone(), sha256);
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: failed to serialize report: {err}");
                    return ExitCode::InternalError;
                }
            }
        }
    }
    ExitCode::Clean
}

fn check_scenario(args: &CheckArgs) -> ExitCode {
    match load_scenario(&args.scenario) {
        Ok(loaded) => {
            println!(
                "ok: {} ({} steps, {}x{} world, sha256 {})",
                loaded.scenario.name.as_deref().unwrap_or("unnamed"),
                loaded.scenario.measurements.len(),
                loaded.scenario.world.len(),
                loaded.scenario.world.first().map(|r| r.len()).unwrap_or(0),
                &loaded.sha256[..12],
            );
            ExitCode::Clean
        }
        Err(err) => {
            eprintln!("error: {err}");
            scenario_exit_code(&err)
        }
    }
}

fn print_schemas(args: &SchemaArgs) -> ExitCode {
    use gridloc_core::schema::{available_schemas, generate_all_schemas, generate_schema};

    if args.list {
        for (name, desc) in available_schemas() {
            println!("{name:<12} {desc}");
        }
        return ExitCode::Clean;
    }

    if args.all {
        return print_json(&generate_all_schemas());
    }

    match &args.type_name {
        Some(name) => match generate_schema(name) {
            Some(schema) => print_json(&schema),
            None => {
                eprintln!("error: unknown schema type '{name}' (try --list)");
                ExitCode::ArgsError
            }
        },
        None => {
            eprintln!("error: specify a type name, --list, or --all");
            ExitCode::ArgsError
        }
    }
}

fn print_version(global: &GlobalOpts) {
    match global.format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "name": "gridloc",
                "version": env!("CARGO_PKG_VERSION"),
            })
        ),
        _ => println!("gridloc {}", env!("CARGO_PKG_VERSION")),
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn print_json(value: &impl serde::Serialize) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::Clean
        }
        Err(err) => {
            eprintln!("error: failed to serialize output: {err}");
            ExitCode::InternalError
        }
    }
}

fn scenario_exit_code(err: &ScenarioError) -> ExitCode {
    match err {
        ScenarioError::Invalid(_) => ExitCode::FilterError,
        _ => ExitCode::ScenarioError,
    }
}

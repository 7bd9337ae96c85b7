//! Union Checker Driver
//! 
//! Main entry point for the `ucheck` binary: runs the built-in demonstration
//! or a JSON check script.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process;
use ucheck_common::CompilerError;
use ucheck_driver::demo::SUCCESS_MESSAGE;
use ucheck_driver::{json_report, run_demo, run_script, Script};
use ucheck_semantic::{BuiltinSchema, CheckerConfig, TypeChecker, UnionEquality};

#[derive(Parser)]
#[command(name = "ucheck")]
#[command(about = "Static checker for nominal and union types")]
#[command(version)]
struct Cli {
    /// Enable debug logging (refine with RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// How unions compare against other types
    #[arg(long, value_enum, global = true)]
    union_equality: Option<EqualityArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the built-in `int | string | Point` example
    Demo,

    /// Run the checks described by a JSON script
    Check {
        /// Input script
        input: PathBuf,

        /// Print diagnostics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EqualityArg {
    ByName,
    Structural,
}

impl From<EqualityArg> for UnionEquality {
    fn from(arg: EqualityArg) -> Self {
        match arg {
            EqualityArg::ByName => UnionEquality::ByName,
            EqualityArg::Structural => UnionEquality::Structural,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .parse_default_env()
            .init();
    }

    let config = cli.union_equality.map(|arg| CheckerConfig {
        union_equality: arg.into(),
    });

    let ok = match cli.command {
        Commands::Demo => demo_command(config.unwrap_or_default()),
        Commands::Check { input, json } => match check_command(&input, config, json) {
            Ok(ok) => ok,
            Err(e) => {
                eprintln!("Error running script: {}", e);
                false
            }
        },
    };

    // A failing demo exits 1 as well, same as a script with errors.
    if !ok {
        process::exit(1);
    }
}

fn demo_command(config: CheckerConfig) -> bool {
    let checker = TypeChecker::with_config(&BuiltinSchema, config);
    match run_demo(&checker) {
        Ok(()) => {
            println!("{}", SUCCESS_MESSAGE);
            true
        }
        Err(e) => {
            println!("{}", e);
            false
        }
    }
}

fn check_command(
    input: &Path,
    config: Option<CheckerConfig>,
    json: bool,
) -> Result<bool, CompilerError> {
    let script = Script::load(input)?;
    let reporter = run_script(&script, config);

    if json {
        let text = serde_json::to_string_pretty(&json_report(input, &reporter))
            .map_err(|e| CompilerError::script_error(e.to_string()))?;
        println!("{}", text);
    } else {
        reporter.print_diagnostics();
        println!("{}: {}", input.display(), reporter.summary());
    }

    Ok(!reporter.has_errors())
}

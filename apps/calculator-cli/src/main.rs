//! Calculator CLI
//!
//! Runs a single binary operation through the calculator module and prints the
//! result.
//!
//! # Usage
//!
//! ```bash
//! calculator-cli divide 10 2          # 10 / 2 = 5
//! calculator-cli divide 10 0          # error: Division by zero is not possible
//! calculator-cli --float divide 1 4   # 1 / 4 = 0.25
//! calculator-cli --json add -3 5      # {"operation":"add","a":-3,"b":5,"result":2}
//! calculator-cli eval / 10 4          # 10 / 4 = 2
//! calculator-cli --config config/calculator.yaml check
//! ```
//!
//! Exit codes: 0 on success, 1 when the calculator rejects the operation,
//! 2 on usage or configuration errors.

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod config;
mod logging;
mod output;


use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, bail};
use calculator::{LocalClient, Service};
use calculator_sdk::{CalculatorClientV1, CalculatorError, Operand, Operation};
use clap::{Args, Parser, Subcommand};

use crate::config::{AppConfig, CliArgs, NumericMode};
use crate::output::OutputFormat;

const EXIT_CALCULATION_FAILED: u8 = 1;
const EXIT_USAGE: u8 = 2;

/// Calculator CLI - checked binary arithmetic
#[derive(Parser)]
#[command(name = "calculator-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Parse operands as floating-point numbers (overrides config)
    #[arg(long, global = true)]
    float: bool,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two numbers
    Add(Operands),
    /// Subtract B from A
    Subtract(Operands),
    /// Multiply two numbers
    Multiply(Operands),
    /// Divide A by B
    Divide(Operands),
    /// Apply an operation given by name or symbol
    Eval(EvalArgs),
    /// Validate configuration and exit
    Check,
}

#[derive(Args)]
struct Operands {
    /// Left-hand operand (dividend for divide)
    #[arg(allow_negative_numbers = true)]
    a: String,

    /// Right-hand operand (divisor for divide)
    #[arg(allow_negative_numbers = true)]
    b: String,
}

#[derive(Args)]
struct EvalArgs {
    /// Operation name or symbol: add, subtract, multiply, divide, +, -, *, /
    operation: Operation,

    #[command(flatten)]
    operands: Operands,
}

/// Operand types the CLI can send through a [`CalculatorClientV1`].
trait ClientOperand: Operand {
    fn evaluate(
        client: &dyn CalculatorClientV1,
        operation: Operation,
        a: Self,
        b: Self,
    ) -> Result<Self, CalculatorError>;
}

impl ClientOperand for i64 {
    fn evaluate(
        client: &dyn CalculatorClientV1,
        operation: Operation,
        a: Self,
        b: Self,
    ) -> Result<Self, CalculatorError> {
        client.evaluate(operation, a, b)
    }
}

impl ClientOperand for f64 {
    fn evaluate(
        client: &dyn CalculatorClientV1,
        operation: Operation,
        a: Self,
        b: Self,
    ) -> Result<Self, CalculatorError> {
        client.evaluate_f64(operation, a, b)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let args = CliArgs {
        config: cli.config,
        verbose: cli.verbose,
        float: cli.float,
    };

    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply_cli_overrides(&args);

    logging::init_logging(&config.logging)?;
    tracing::info!(
        numeric_mode = %config.calculator.numeric_mode,
        "calculator-cli starting"
    );

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(ExitCode::SUCCESS);
    }

    let (operation, operands) = match cli.command {
        Some(Commands::Add(operands)) => (Operation::Add, operands),
        Some(Commands::Subtract(operands)) => (Operation::Subtract, operands),
        Some(Commands::Multiply(operands)) => (Operation::Multiply, operands),
        Some(Commands::Divide(operands)) => (Operation::Divide, operands),
        Some(Commands::Eval(EvalArgs {
            operation,
            operands,
        })) => (operation, operands),
        Some(Commands::Check) => return check_config(&config),
        None => bail!("no operation given; run with --help for usage"),
    };

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let client: Arc<dyn CalculatorClientV1> =
        Arc::new(LocalClient::new(Arc::new(Service::new())));
    match config.calculator.numeric_mode {
        NumericMode::Integer => calculate::<i64>(client.as_ref(), operation, &operands, format),
        NumericMode::Float => calculate::<f64>(client.as_ref(), operation, &operands, format),
    }
}

fn check_config(config: &AppConfig) -> anyhow::Result<ExitCode> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(ExitCode::SUCCESS)
}

fn calculate<T>(
    client: &dyn CalculatorClientV1,
    operation: Operation,
    operands: &Operands,
    format: OutputFormat,
) -> anyhow::Result<ExitCode>
where
    T: ClientOperand,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let a = parse_operand::<T>(&operands.a)?;
    let b = parse_operand::<T>(&operands.b)?;

    match T::evaluate(client, operation, a, b) {
        Ok(result) => {
            println!(
                "{}",
                output::render_success(format, operation, a, b, result)?
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::warn!(%operation, code = err.code(), error = %err, "calculation failed");
            let rendered = output::render_error(format, &err)?;
            match format {
                OutputFormat::Human => eprintln!("{rendered}"),
                OutputFormat::Json => println!("{rendered}"),
            }
            Ok(ExitCode::from(EXIT_CALCULATION_FAILED))
        }
    }
}

fn parse_operand<T>(raw: &str) -> anyhow::Result<T>
where
    T: Operand,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let value = raw
        .trim()
        .parse::<T>()
        .with_context(|| format!("invalid operand '{raw}'"))?;
    if !value.is_finite() {
        bail!("invalid operand '{raw}': not a finite number");
    }
    Ok(value)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_operands_parse() {
        let cli = Cli::try_parse_from(["calculator-cli", "subtract", "-3", "-5"]).unwrap();
        let Some(Commands::Subtract(operands)) = cli.command else {
            panic!("expected subtract");
        };
        assert_eq!(operands.a, "-3");
        assert_eq!(operands.b, "-5");
    }

    #[test]
    fn test_parse_operand_integer_and_float() {
        assert_eq!(parse_operand::<i64>(" 42 ").unwrap(), 42);
        let value = parse_operand::<f64>("-0.5").unwrap();
        assert!((value + 0.5).abs() < f64::EPSILON);
        let err = parse_operand::<i64>("2.5").unwrap_err();
        assert!(err.to_string().contains("invalid operand '2.5'"));
    }

    #[test]
    fn test_parse_operand_rejects_non_finite_floats() {
        for raw in ["nan", "NaN", "inf", "-inf", "infinity"] {
            let err = parse_operand::<f64>(raw).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("invalid operand '{raw}': not a finite number")
            );
        }
    }

    #[test]
    fn test_eval_parses_operation_name_and_symbol() {
        let cli = Cli::try_parse_from(["calculator-cli", "eval", "/", "10", "-2"]).unwrap();
        let Some(Commands::Eval(args)) = cli.command else {
            panic!("expected eval");
        };
        assert_eq!(args.operation, Operation::Divide);
        assert_eq!(args.operands.b, "-2");

        let cli = Cli::try_parse_from(["calculator-cli", "eval", "Multiply", "2", "3"]).unwrap();
        let Some(Commands::Eval(args)) = cli.command else {
            panic!("expected eval");
        };
        assert_eq!(args.operation, Operation::Multiply);
    }

    #[test]
    fn test_eval_rejects_unknown_operation() {
        let Err(err) = Cli::try_parse_from(["calculator-cli", "eval", "modulo", "1", "2"]) else {
            panic!("expected a parse error");
        };
        assert!(err.to_string().contains("unknown operation 'modulo'"), "{err}");
    }

    #[test]
    fn test_float_operands_go_through_the_client() {
        let client = LocalClient::default();
        assert_eq!(
            f64::evaluate(&client, Operation::Multiply, f64::MAX, 2.0),
            Err(CalculatorError::Overflow {
                operation: Operation::Multiply
            })
        );
        let sum = f64::evaluate(&client, Operation::Add, 0.5, 0.25).unwrap();
        assert!((sum - 0.75).abs() < f64::EPSILON);
        assert_eq!(
            i64::evaluate(&client, Operation::Divide, 7, 0),
            Err(CalculatorError::division_by_zero())
        );
    }
}

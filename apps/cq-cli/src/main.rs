use clap::{Parser, Subcommand};
use cq_app::{AppError, AppResult, QuizSettings, check_attempts, load_attempts};
use cq_core::to_fixed;
use cq_quiz::parse_input;
use cq_units::{ConversionFamily, UomConverter, convert_units, units_for};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cq-cli")]
#[command(about = "convquiz CLI - practice temperature and volume conversions", long_about = None)]
struct Cli {
    /// Quiz settings YAML file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the units of a conversion family (both when omitted)
    Units {
        /// temperature or volume
        family: Option<ConversionFamily>,
    },
    /// Convert a value without quizzing
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Source unit code (e.g. degC)
        from: String,
        /// Target unit code (e.g. degF)
        to: String,
    },
    /// Check an answer
    Check {
        /// temperature or volume (defaults to the configured family)
        #[arg(long)]
        family: Option<ConversionFamily>,
        /// Value to convert, as typed
        #[arg(long, allow_hyphen_values = true)]
        value: String,
        /// Source unit code
        #[arg(long)]
        from: String,
        /// Target unit code
        #[arg(long)]
        to: String,
        /// Your converted answer, as typed
        #[arg(long, allow_hyphen_values = true)]
        answer: String,
        /// Print the expected answer as well
        #[arg(long)]
        reveal: bool,
    },
    /// Check every attempt in a YAML attempts file
    Batch {
        /// Path to the attempts YAML file
        attempts_path: PathBuf,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Units { family } => cmd_units(family),
        Commands::Convert { value, from, to } => cmd_convert(&settings, &value, &from, &to),
        Commands::Check {
            family,
            value,
            from,
            to,
            answer,
            reveal,
        } => cmd_check(
            &settings,
            family.unwrap_or(settings.default_family),
            &value,
            &from,
            &to,
            &answer,
            reveal,
        ),
        Commands::Batch {
            attempts_path,
            json,
        } => cmd_batch(&settings, &attempts_path, json),
    }
}

fn load_settings(path: Option<&Path>) -> AppResult<QuizSettings> {
    let settings = match path {
        Some(path) => QuizSettings::load(path)?,
        None => QuizSettings::default(),
    };
    settings.with_env_overrides()
}

fn cmd_units(family: Option<ConversionFamily>) -> AppResult<()> {
    let families = match family {
        Some(family) => vec![family],
        None => ConversionFamily::ALL.to_vec(),
    };
    for family in families {
        println!("{}:", family.label());
        for unit in units_for(family) {
            println!("  {:<12} {}", unit.code, unit.label);
        }
    }
    Ok(())
}

fn cmd_convert(settings: &QuizSettings, value: &str, from: &str, to: &str) -> AppResult<()> {
    let magnitude = parse_input(value)
        .ok_or_else(|| AppError::InvalidInput(format!("'{value}' is not a number")))?;
    let converted = convert_units(&UomConverter, magnitude, from, to)?;
    println!(
        "{value} {from} = {} {to}",
        to_fixed(converted, settings.decimal_places.max(2))
    );
    Ok(())
}

fn cmd_check(
    settings: &QuizSettings,
    family: ConversionFamily,
    value: &str,
    from: &str,
    to: &str,
    answer: &str,
    reveal: bool,
) -> AppResult<()> {
    let mut controller = settings.controller(UomConverter);
    controller.set_family(family);
    controller.set_input_value(value);
    controller.set_input_unit(from);
    controller.set_target_unit(to);
    controller.set_student_answer(answer);

    let verdict = controller.check_answer()?;
    println!("{verdict}");

    if reveal {
        match controller.expected_answer()? {
            Some(expected) => println!(
                "expected: {} {to}",
                to_fixed(expected, settings.decimal_places)
            ),
            None => println!("expected: - (input value is not a number)"),
        }
    }
    Ok(())
}

fn cmd_batch(settings: &QuizSettings, attempts_path: &Path, json: bool) -> AppResult<()> {
    let attempts = load_attempts(attempts_path)?;
    let report = check_attempts(settings, &UomConverter, &attempts)?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}

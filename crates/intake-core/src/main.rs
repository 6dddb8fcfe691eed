//! intake: redaction and triage for legal case narratives.
//!
//! The entry point for the intake CLI, handling:
//! - Redaction of personal data from a narrative
//! - Urgency triage and legal concept extraction
//! - Lexicon resolution and validation
//! - Optional categorization of the sanitized text

use clap::{Args, Parser, Subcommand};
use intake_common::error::format_error_human;
use intake_common::{Error, OutputFormat, Result, StructuredError};
use intake_core::exit_codes::ExitCode;
use intake_core::input::read_narrative;
use intake_core::lexicon::ActiveLexicon;
use intake_core::logging::{init_logging, LogConfig, LogLevel};
use intake_core::output::{
    render_check, render_check_failure, render_concepts, render_redaction, render_urgency,
    render_version,
};
use intake_redact::{assess_urgency_with, extract_legal_concepts_with, extract_personal_info_with};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Case intake: strip personal data from legal narratives and triage them
#[derive(Parser)]
#[command(name = "intake")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Lexicon file (otherwise $CASE_INTAKE_LEXICON, then the config dirs)
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Redact personal data and print the result
    Redact(InputArgs),

    /// Print the urgency level of a narrative
    Urgency(InputArgs),

    /// List the legal concepts a narrative mentions
    Concepts(InputArgs),

    /// Resolve and validate the lexicon, then print its snapshot
    Check,

    /// Redact, then send the sanitized text to a categorization service
    #[cfg(feature = "categorize")]
    Categorize(CategorizeArgs),

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Narrative file (reads stdin when omitted or "-")
    file: Option<PathBuf>,
}

#[cfg(feature = "categorize")]
#[derive(Args, Debug)]
struct CategorizeArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Categorization endpoint receiving {"text": <sanitized text>}
    #[arg(long, env = "CASE_INTAKE_CATEGORIZE_URL")]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = intake_core::category::DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not errors
            let code = if e.use_stderr() {
                ExitCode::ArgsError
            } else {
                ExitCode::Clean
            };
            let _ = e.print();
            std::process::exit(code.as_i32());
        }
    };

    let log_level = LogLevel::from_flags(cli.global.quiet, cli.global.verbose);
    init_logging(&LogConfig::from_env(log_level, None));

    if let Err(e) = intake_redact::ensure_patterns() {
        let code = report_error(&cli.global, &e.into());
        std::process::exit(code.as_i32());
    }

    let outcome = match &cli.command {
        Commands::Redact(args) => run_redact(&cli.global, args),
        Commands::Urgency(args) => run_urgency(&cli.global, args),
        Commands::Concepts(args) => run_concepts(&cli.global, args),
        Commands::Check => Ok(run_check(&cli.global)),
        #[cfg(feature = "categorize")]
        Commands::Categorize(args) => run_categorize(&cli.global, args),
        Commands::Version => render_version(cli.global.format)
            .map(|out| {
                println!("{}", out);
                ExitCode::Clean
            })
            .map_err(Error::from),
    };

    let exit_code = match outcome {
        Ok(code) => code,
        Err(e) => report_error(&cli.global, &e),
    };
    std::process::exit(exit_code.as_i32());
}

/// Print an error to stderr and pick the exit code.
fn report_error(global: &GlobalOpts, err: &Error) -> ExitCode {
    let code = ExitCode::from_error(err);
    tracing::debug!(error_code = err.code(), exit = %code, "command failed");

    if global.format.is_machine() {
        eprintln!("{}", StructuredError::from(err).to_json());
    } else {
        eprintln!("{}", format_error_human(err, std::io::stderr().is_terminal()));
    }
    code
}

fn run_redact(global: &GlobalOpts, args: &InputArgs) -> Result<ExitCode> {
    let active = ActiveLexicon::load(global.lexicon.as_deref())?;
    let text = read_narrative(args.file.as_deref())?;

    let result = extract_personal_info_with(&text, &active.lexicon);
    let snapshot = active.snapshot();
    tracing::info!(
        items = result.item_count(),
        urgency = %result.urgency,
        lexicon = snapshot.short_id(),
        "narrative redacted"
    );

    println!("{}", render_redaction(&result, global.format)?);
    Ok(ExitCode::for_item_count(result.item_count()))
}

fn run_urgency(global: &GlobalOpts, args: &InputArgs) -> Result<ExitCode> {
    let active = ActiveLexicon::load(global.lexicon.as_deref())?;
    let text = read_narrative(args.file.as_deref())?;

    let urgency = assess_urgency_with(&text, &active.lexicon);
    println!("{}", render_urgency(urgency, global.format)?);
    Ok(ExitCode::Clean)
}

fn run_concepts(global: &GlobalOpts, args: &InputArgs) -> Result<ExitCode> {
    let active = ActiveLexicon::load(global.lexicon.as_deref())?;
    let text = read_narrative(args.file.as_deref())?;

    let concepts = extract_legal_concepts_with(&text, &active.lexicon);
    println!("{}", render_concepts(&concepts, global.format)?);
    Ok(ExitCode::Clean)
}

/// `check` reports failures in its payload rather than on stderr.
fn run_check(global: &GlobalOpts) -> ExitCode {
    let (rendered, code) = match ActiveLexicon::load(global.lexicon.as_deref()) {
        Ok(active) => (render_check(&active.snapshot(), global.format), ExitCode::Clean),
        Err(e) => (render_check_failure(&e, global.format), ExitCode::from_error(&e)),
    };

    match rendered {
        Ok(out) => {
            println!("{}", out);
            code
        }
        Err(e) => report_error(global, &e.into()),
    }
}

#[cfg(feature = "categorize")]
fn run_categorize(global: &GlobalOpts, args: &CategorizeArgs) -> Result<ExitCode> {
    use intake_core::category::{CategorizeClient, CategorizedResult};
    use std::time::Duration;

    let active = ActiveLexicon::load(global.lexicon.as_deref())?;
    let text = read_narrative(args.input.file.as_deref())?;
    let result = extract_personal_info_with(&text, &active.lexicon);
    let exit_code = ExitCode::for_item_count(result.item_count());

    let client = CategorizeClient::new(&args.endpoint, Duration::from_secs(args.timeout_secs));
    let category = client.categorize(&result.sanitized_text);
    let output = CategorizedResult { result, category };

    match global.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        format => {
            println!("{}", render_redaction(&output.result, format)?);
            println!(
                "category: {}",
                output.category.as_deref().unwrap_or("(unavailable)")
            );
        }
    }
    Ok(exit_code)
}

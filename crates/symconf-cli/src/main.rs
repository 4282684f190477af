use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use symconf_translator::{
    translate_with, Environment, EvalError, IndentStyle, SourceText, TranslateError,
    TranslateOptions,
};

#[derive(Parser)]
#[command(name = "symconf")]
#[command(about = "Translate a JSON document into the symbolic config language")]
struct Cli {
    /// Output file, relative to --out-dir
    #[arg(required_unless_present = "stdout")]
    output: Option<PathBuf>,

    /// Base directory for the output file
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Read the JSON document from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Indentation of block entries (nested or flat)
    #[arg(long, default_value_t = IndentStyle::Nested)]
    indent: IndentStyle,

    /// Print the result instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            if let Some(report) = syntax_report(&err) {
                eprint!("{report}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let text = read_input(cli.input.as_deref())?;
    let document: serde_json::Value =
        serde_json::from_str(&text).context("input is not valid JSON")?;

    let options = TranslateOptions::default().with_indent(cli.indent);
    let mut env = Environment::new();
    let output = translate_with(&document, &mut env, options)?;
    log::info!("translated document, {} constant(s) declared", env.len());

    if cli.stdout {
        println!("{output}");
        return Ok(());
    }

    // `required_unless_present` guarantees an output path here.
    let Some(relative) = cli.output.as_deref() else {
        anyhow::bail!("no output path given");
    };
    let path = cli.out_dir.join(relative);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(&path, &output).with_context(|| format!("failed to write {}", path.display()))?;
    println!("saved: {}", path.display());
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            log::info!("reading {}", path.display());
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Caret diagnostics for an expression that failed to parse.
fn syntax_report(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<TranslateError>()? {
        TranslateError::Evaluation {
            expression,
            source: EvalError::Syntax(errors),
        } => Some(errors.report(&SourceText::new(expression.as_str()))),
        _ => None,
    }
}

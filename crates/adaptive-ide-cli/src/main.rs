//! Adaptive IDE CLI
//!
//! Serves the practice page and its mocked API, and runs the same mocks
//! offline against local files.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use adaptive_ide::{
    Config, EXAMPLE_CONFIG, GradeRequest, RunRequest, Runner, TracePacket, TraceRequest,
    shutdown_signal,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "adaptive-ide")]
#[command(about = "Practice page with mocked run, grade and trace endpoints")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the practice page and API
    Serve {
        /// Address to listen on (overrides server.bind_addr)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },

    /// Initialize a new configuration file
    Init {
        /// Output path (default: adaptive-ide.toml)
        #[arg(short, long, default_value = "adaptive-ide.toml")]
        output: PathBuf,

        /// Overwrite existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Mock-run a source file
    Run {
        /// Source file to run
        #[arg(value_name = "FILE")]
        source: PathBuf,

        /// Language ID (default: the configured default language)
        #[arg(short, long)]
        language: Option<String>,

        /// Input file echoed back as stdout
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Mock-grade a source file against a problem's tests
    Grade {
        /// Source file to grade
        #[arg(value_name = "FILE")]
        source: PathBuf,

        /// Language ID (default: the configured default language)
        #[arg(short, long)]
        language: Option<String>,

        /// Problem ID (default: two-sum)
        #[arg(short, long)]
        problem: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the live example mapping for a source file
    Trace {
        /// Source file to trace
        #[arg(value_name = "FILE")]
        source: PathBuf,

        /// Language ID (default: the configured default language)
        #[arg(short, long)]
        language: Option<String>,

        /// Print the packet as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available languages
    Languages,

    /// List available problems
    Problems,

    /// Show the effective configuration
    ShowConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = if let Some(ref path) = cli.config {
        info!(?path, "loading configuration");
        Config::from_file(path).context("failed to load configuration")?
    } else {
        debug!("using default configuration");
        Config::default()
    };

    match cli.command {
        Commands::Serve { bind } => serve(config, bind).await,
        Commands::Init { output, force } => init_config(&output, force).await,
        Commands::Run {
            source,
            language,
            input,
        } => run_mock(config, &source, language, input.as_deref()).await,
        Commands::Grade {
            source,
            language,
            problem,
            json,
        } => grade_mock(config, &source, language, problem, json).await,
        Commands::Trace {
            source,
            language,
            json,
        } => trace_mock(config, &source, language, json).await,
        Commands::Languages => {
            list_languages(&config);
            Ok(())
        }
        Commands::Problems => {
            list_problems(&Runner::new(config));
            Ok(())
        }
        Commands::ShowConfig => {
            show_config(&config);
            Ok(())
        }
    }
}

async fn serve(mut config: Config, bind: Option<SocketAddr>) -> Result<()> {
    if let Some(addr) = bind {
        config.server.bind_addr = addr;
    }

    adaptive_ide::serve(Runner::new(config), shutdown_signal())
        .await
        .context("server failed")
}

async fn read_source(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read source file '{}'", path.display()))
}

async fn run_mock(
    config: Config,
    source: &Path,
    language: Option<String>,
    input: Option<&Path>,
) -> Result<()> {
    let code = read_source(source).await?;
    let stdin = match input {
        Some(path) => Some(
            tokio::fs::read_to_string(path)
                .await
                .context("failed to read input file")?,
        ),
        None => None,
    };

    let runner = Runner::new(config);
    let result = runner
        .run(&RunRequest {
            language,
            code: Some(code),
            stdin,
            ..Default::default()
        })
        .context("run failed")?;

    println!("{}", result.stdout);
    if !result.stderr.is_empty() {
        eprintln!("{}", result.stderr);
    }

    info!(ok = result.ok, time = format_args!("{} ms", result.time_ms), "run result");
    Ok(())
}

async fn grade_mock(
    config: Config,
    source: &Path,
    language: Option<String>,
    problem: Option<String>,
    json: bool,
) -> Result<()> {
    let code = read_source(source).await?;
    let runner = Runner::new(config);
    let request = GradeRequest {
        language,
        code: Some(code),
        problem_id: problem,
    };
    let result = runner.grade(&request).context("grading failed")?;
    let limits = runner.grade_limits(&request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "Score: {}/{} ({}%)",
        result.passed,
        result.total,
        result.pass_percent()
    );
    println!(
        "Limits: {} / {}",
        limits
            .time_limit_ms
            .map_or_else(|| "no time limit".to_owned(), |ms| format!("{ms} ms")),
        limits
            .memory_mb
            .map_or_else(|| "no memory limit".to_owned(), |mb| format!("{mb} MB")),
    );
    if let Some(hint) = &result.approach_hint {
        println!("Hint: {hint}");
    }
    println!();
    for outcome in &result.outcomes {
        let status = if outcome.passed { "PASS" } else { "FAIL" };
        print!("  {:<6} {status}  {:>4} ms", outcome.test_id, outcome.time_ms);
        if let Some(diff) = &outcome.diff {
            print!("  expected {} got {}", diff.expected, diff.got);
        }
        println!();
    }
    Ok(())
}

async fn trace_mock(
    config: Config,
    source: &Path,
    language: Option<String>,
    json: bool,
) -> Result<()> {
    let code = read_source(source).await?;
    let runner = Runner::new(config);
    let packet = runner.trace(&TraceRequest {
        language,
        code: Some(code),
        problem_id: None,
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&packet)?);
    } else {
        print_trace(&packet);
    }
    Ok(())
}

fn print_trace(packet: &TracePacket) {
    println!("Example {}\n", packet.example_id);
    println!("  {:<28} {}", "Spec (Expected)", "Your Run (Actual)");

    let rows = packet.expected.steps.len().max(packet.actual.steps.len());
    for i in 0..rows {
        let cell = |steps: &[adaptive_ide::TraceStep]| {
            steps
                .get(i)
                .map(|s| {
                    let expr = s.expr.as_deref().unwrap_or("");
                    let value = s.value.as_ref().map(ToString::to_string).unwrap_or_default();
                    format!("{expr} → {value}")
                })
                .unwrap_or_default()
        };
        let marker = if packet.diverged_at == Some(i) { " <" } else { "" };
        println!(
            "{}. {:<28} {}{marker}",
            i + 1,
            cell(&packet.expected.steps),
            cell(&packet.actual.steps)
        );
    }
    println!(
        "   {:<28} {}",
        format!("= {}", packet.expected.value),
        format!("= {}", packet.actual.value)
    );

    if let Some(step) = packet.diverged_at {
        println!("\nDiverged at step {}", step + 1);
        if let Some(hint) = &packet.hint {
            println!("{hint}");
        }
    }
}

fn list_languages(config: &Config) {
    println!("Available languages:\n");

    for info in config.language_infos() {
        let marker = if info.id == config.default_language {
            " (default)"
        } else {
            ""
        };
        println!("  {:<15} {} [.{}]{marker}", info.id, info.name, info.extension);
    }
}

fn list_problems(runner: &Runner) {
    println!("Available problems:\n");

    for problem in runner.catalog().list() {
        println!(
            "  {:<20} {} ({} tests)",
            problem.id,
            problem.title,
            problem.tests.len()
        );
    }
}

fn show_config(config: &Config) {
    println!("Server:");
    println!("  Bind address: {}", config.server.bind_addr);
    println!("  CORS: {}", config.server.cors);
    println!("  Max body: {} bytes", config.server.max_body_bytes);
    println!();
    println!("Default resource limits:");
    println!("  Time limit: {:?} ms", config.default_limits.time_limit_ms);
    println!("  Memory limit: {:?} MB", config.default_limits.memory_mb);
    println!();
    println!("Mock responses:");
    println!("  Run time: {} ms", config.mock.run_time_ms);
    println!("  Passing tests: {}", config.mock.grade_pass_count);
    println!("  First test time: {} ms", config.mock.grade_base_time_ms);
    println!();
    println!("Default language: {}", config.default_language);
    println!("Languages configured: {}", config.languages.len());
    println!("Extra problems configured: {}", config.problems.len());
}

async fn init_config(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists at '{}'. Use --force to overwrite.",
            output.display()
        );
    }

    tokio::fs::write(output, EXAMPLE_CONFIG)
        .await
        .context("failed to write configuration file")?;

    println!("Created configuration file at '{}'", output.display());
    Ok(())
}

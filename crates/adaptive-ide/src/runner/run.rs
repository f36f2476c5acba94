//! Mocked code execution
//!
//! Echoes standard input back so the page's run flow works end to end.

use tracing::{debug, instrument};

use crate::config::Config;
use crate::runner::RunnerError;
use crate::types::{RunRequest, RunResult};

/// Stdout reported when there is no input to echo
pub const DEFAULT_STDOUT: &str = "ok";

#[instrument(skip_all, fields(language = request.language.as_deref()))]
pub fn run(config: &Config, request: &RunRequest) -> Result<RunResult, RunnerError> {
    let (language_id, _) = config.resolve_language(request.language.as_deref())?;

    let stdout = match request.stdin.as_deref() {
        Some(stdin) if !stdin.is_empty() => stdin.to_owned(),
        _ => DEFAULT_STDOUT.to_owned(),
    };

    debug!(
        language_id,
        code_len = request.code.as_deref().map_or(0, str::len),
        echoed = stdout != DEFAULT_STDOUT,
        "run complete"
    );

    Ok(RunResult {
        ok: true,
        stdout,
        stderr: String::new(),
        time_ms: config.mock.run_time_ms,
        mem_kb: None,
        compilation_stderr: None,
    })
}

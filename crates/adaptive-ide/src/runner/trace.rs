//! Mocked execution trace
//!
//! Maps a tiny arithmetic example onto the submitted code. The "actual"
//! column only changes when the code looks like it multiplies and adds
//! without parentheses, which is enough to demo a precedence mistake.

use tracing::{debug, instrument};

use crate::types::{TracePacket, TraceSide, TraceStep};

pub const EXAMPLE_ID: &str = "E1";

pub const PRECEDENCE_HINT: &str = "Parentheses change precedence; compute (b+c) first.";

const A: i64 = 2;
const B: i64 = 6;
const C: i64 = 4;

/// Whether the code multiplies and adds without any parentheses
pub fn looks_like_mul_add_without_parens(code: &str) -> bool {
    let code = code.to_lowercase();
    code.contains('*') && code.contains('+') && !code.contains('(')
}

fn expected_steps() -> Vec<TraceStep> {
    vec![
        TraceStep::expr("b + c", B + C),
        TraceStep::expr("a * (b + c)", A * (B + C)),
    ]
}

fn precedence_slip_steps() -> Vec<TraceStep> {
    vec![
        TraceStep::expr("a * b", A * B),
        TraceStep::expr("a * b + c", A * B + C),
    ]
}

#[instrument(skip_all, fields(code_len = code.len()))]
pub fn trace(code: &str) -> TracePacket {
    let expected = TraceSide::from_steps(expected_steps());
    let actual = if looks_like_mul_add_without_parens(code) {
        TraceSide::from_steps(precedence_slip_steps())
    } else {
        expected.clone()
    };

    // Divergence is reported on the final step, where the values are compared.
    let diverged_at =
        (actual.value != expected.value).then(|| actual.steps.len().saturating_sub(1));

    debug!(?diverged_at, "trace complete");

    TracePacket {
        example_id: EXAMPLE_ID.to_owned(),
        expected,
        actual,
        diverged_at,
        hint: diverged_at.map(|_| PRECEDENCE_HINT.to_owned()),
    }
}

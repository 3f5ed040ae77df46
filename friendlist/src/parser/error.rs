use ariadne::{Color, Label, Report, ReportKind, Source};
use log::error;
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum DecodeError {
    #[error("{origin}: invalid JSON: {message}")]
    Syntax {
        origin: String,
        line: usize,
        column: usize,
        message: String,
    },

    #[error(
        "{origin}: expected {{\"friends\": [...]}} or {{\"friends\": [{{\"friends\": [...]}}]}}, found {found}"
    )]
    UnknownShape { origin: String, found: String },

    #[error("{origin}: friend #{index} is invalid: {message}")]
    InvalidRecord {
        origin: String,
        index: usize,
        message: String,
    },
}

impl DecodeError {
    pub fn syntax(origin: &str, err: &serde_json::Error) -> Self {
        DecodeError::Syntax {
            origin: origin.to_string(),
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Prints a source snippet pointing at the problem to stderr. Only [DecodeError::Syntax]
/// carries a location; other errors are left to the caller's log. An empty `src` has nothing to
/// point at and prints nothing.
pub fn report(src: &str, err: &DecodeError) {
    let DecodeError::Syntax {
        origin,
        line,
        column,
        message,
    } = err
    else {
        return;
    };
    if src.is_empty() {
        return;
    }
    let len = src.chars().count();
    let start = char_offset(src, *line, *column).min(len);
    let end = (start + 1).min(len);
    let result = Report::build(ReportKind::Error, origin.clone(), start)
        .with_message("friends payload is not valid JSON")
        .with_label(
            Label::new((origin.clone(), start..end))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((origin.clone(), Source::from(src)));
    if let Err(err) = result {
        error!("failed to print decode report: {}", err);
    }
}

/// Converts a 1-based line and column into a char offset within `src`.
fn char_offset(src: &str, line: usize, column: usize) -> usize {
    let preceding: usize = src
        .split('\n')
        .take(line.saturating_sub(1))
        .map(|line| line.chars().count() + 1)
        .sum();
    preceding + column.saturating_sub(1)
}

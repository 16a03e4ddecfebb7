/// Failures the expression pipeline can report. All of them mean the
/// input was not a usable arithmetic expression; none are transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub(crate) enum EvalError {
    #[error("malformed expression")]
    MalformedExpression,
    #[error("unmatched parenthesis")]
    UnmatchedParenthesis,
    #[error("unclosed parenthesis")]
    UnclosedParenthesis,
}

pub(crate) type EvalResult<T> = Result<T, EvalError>;

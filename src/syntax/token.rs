use std::fmt;

/// Operators that can appear after sign rewriting. Subtraction is
/// rewritten into `+ -1 *` by the tokenizer, so it has no variant here
/// and can never reach the converter or the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Add,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Assoc {
    Left,
    Right,
}

pub(crate) type Precedence = u8;

impl Operator {
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Add => 0,
            Self::Mul | Self::Div => 1,
            Self::Pow => 2,
        }
    }

    pub fn assoc(self) -> Assoc {
        match self {
            Self::Add | Self::Mul | Self::Div => Assoc::Left,
            Self::Pow => Assoc::Right,
        }
    }

    pub fn get(self) -> (Precedence, Assoc) {
        (self.precedence(), self.assoc())
    }

    /// Applies the operator to its left and right operands with plain
    /// IEEE-754 semantics; division by zero and overflow come out as
    /// infinities or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }

    /// Canonical glyph per operator kind. `×` and `÷` collapse to
    /// `Mul`/`Div` at scan time, so an echoed expression shows `*` and
    /// `/` even when the user typed the Unicode forms.
    fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Op(Operator),
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Op(op) => f.write_str(op.glyph()),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

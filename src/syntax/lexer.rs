use std::{iter::Peekable, str::CharIndices};

use crate::error::{EvalError, EvalResult};

use super::token::{Operator, Token};

/// One raw scanned unit, before sign rewriting.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Unit {
    Number(f64),
    Plus,
    Minus,
    Mul,
    Div,
    Pow,
    LParen,
    RParen,
}

struct Scanner<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
}

impl Iterator for Scanner<'_> {
    type Item = EvalResult<Unit>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.chars.next() {
            None => None,
            Some((_, '+')) => Some(Ok(Unit::Plus)),
            Some((_, '-')) => Some(Ok(Unit::Minus)),
            Some((_, '*' | '×')) => Some(Ok(Unit::Mul)),
            Some((_, '/' | '÷')) => Some(Ok(Unit::Div)),
            Some((_, '^')) => Some(Ok(Unit::Pow)),
            Some((_, '(')) => Some(Ok(Unit::LParen)),
            Some((_, ')')) => Some(Ok(Unit::RParen)),
            Some((off, c)) if c.is_ascii_digit() => Some(self.read_number(off)),
            Some(_) => Some(Err(EvalError::MalformedExpression)),
        }
    }
}

impl<'src> Scanner<'src> {
    fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn eat_digits(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.bump();
        }
    }

    /// Reads a run of digits, optionally followed by a single `.` and
    /// more digits. A literal ending in a bare `.` has no numeric value
    /// and fails.
    fn read_number(&mut self, from_off: usize) -> EvalResult<Unit> {
        self.eat_digits();
        if let Some(&(_, '.')) = self.chars.peek() {
            self.bump();
            self.eat_digits();
        }

        let end = self.chars.peek().map_or(self.src.len(), |&(off, _)| off);
        let s = &self.src[from_off..end];
        if s.ends_with('.') {
            return Err(EvalError::MalformedExpression);
        }

        s.parse::<f64>()
            .map(Unit::Number)
            .map_err(|_| EvalError::MalformedExpression)
    }
}

/// Scans a sanitized string into infix tokens, rewriting sign operators
/// along the way:
///
/// - `-` at the start or right after `(` becomes `-1 *`; anywhere else
///   it becomes `+ -1 *`, so subtraction turns into adding a negative.
/// - `+` at the start or right after `(` is dropped; anywhere else it
///   stays a plain addition.
///
/// Only those two positions count as unary; a `-` following any other
/// operator is left as binary and surfaces as a malformed expression
/// during evaluation.
pub(crate) fn tokenize(sanitized: &str) -> EvalResult<Vec<Token>> {
    let units = Scanner::new(sanitized).collect::<EvalResult<Vec<_>>>()?;
    let mut tokens = Vec::with_capacity(units.len());

    for (i, &unit) in units.iter().enumerate() {
        let unary_position = i == 0 || units[i - 1] == Unit::LParen;

        match unit {
            Unit::Number(v) => tokens.push(Token::Number(v)),
            Unit::Minus => {
                if !unary_position {
                    tokens.push(Token::Op(Operator::Add));
                }
                tokens.push(Token::Number(-1.0));
                tokens.push(Token::Op(Operator::Mul));
            }
            Unit::Plus => {
                if !unary_position {
                    tokens.push(Token::Op(Operator::Add));
                }
            }
            Unit::Mul => tokens.push(Token::Op(Operator::Mul)),
            Unit::Div => tokens.push(Token::Op(Operator::Div)),
            Unit::Pow => tokens.push(Token::Op(Operator::Pow)),
            Unit::LParen => tokens.push(Token::LParen),
            Unit::RParen => tokens.push(Token::RParen),
        }
    }

    if tokens.is_empty() {
        return Err(EvalError::MalformedExpression);
    }
    Ok(tokens)
}

#[cfg(test)]
mod test {
    use super::super::token::Operator::*;
    use super::super::token::Token::{self, LParen, Number, Op, RParen};
    use super::tokenize;
    use crate::error::EvalError;

    #[test]
    fn converts_unary_minus_to_minus_one_times() {
        assert_eq!(
            tokenize("-1").unwrap(),
            vec![Number(-1.0), Op(Mul), Number(1.0)]
        );
    }

    #[test]
    fn converts_binary_minus_to_plus_minus_one_times() {
        assert_eq!(
            tokenize("1-1").unwrap(),
            vec![Number(1.0), Op(Add), Number(-1.0), Op(Mul), Number(1.0)]
        );
    }

    #[test]
    fn converts_decimals_and_integers() {
        assert_eq!(
            tokenize("2.34+1").unwrap(),
            vec![Number(2.34), Op(Add), Number(1.0)]
        );
    }

    #[test]
    fn converts_every_operator_glyph() {
        let tokens = tokenize("-+*×/÷^()").unwrap();
        let expected: Vec<Token> = vec![
            Number(-1.0),
            Op(Mul),
            Op(Add),
            Op(Mul),
            Op(Mul),
            Op(Div),
            Op(Div),
            Op(Pow),
            LParen,
            RParen,
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn drops_unary_plus_after_open_paren() {
        assert_eq!(tokenize("(+1)").unwrap(), vec![LParen, Number(1.0), RParen]);
    }

    #[test]
    fn rewrites_minus_after_open_paren_as_unary() {
        assert_eq!(
            tokenize("(-2)").unwrap(),
            vec![LParen, Number(-1.0), Op(Mul), Number(2.0), RParen]
        );
    }

    #[test]
    fn fails_on_empty_input() {
        assert_eq!(tokenize(""), Err(EvalError::MalformedExpression));
    }

    #[test]
    fn fails_on_unrecognized_character() {
        assert_eq!(tokenize("1a"), Err(EvalError::MalformedExpression));
    }

    #[test]
    fn fails_on_literal_with_bare_trailing_dot() {
        assert_eq!(tokenize("1."), Err(EvalError::MalformedExpression));
    }

    #[test]
    fn fails_on_orphan_dot() {
        assert_eq!(tokenize(".5"), Err(EvalError::MalformedExpression));
    }
}

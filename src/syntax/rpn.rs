use crate::error::{EvalError, EvalResult};

use super::token::{Assoc, Operator, Token};

/// Entries on the shunting-yard operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackOp {
    Paren,
    Op(Operator),
}

/// Reorders infix tokens into postfix (RPN) order with the
/// shunting-yard algorithm.
///
/// Numbers go straight to the output. An operator first pops every
/// stacked operator that binds at least as tightly (strictly tighter
/// for the right-associative `^`), then is pushed. Parentheses override
/// precedence: `(` is pushed, `)` pops down to the matching `(`, and
/// neither appears in the output.
pub(crate) fn convert_to_rpn(tokens: Vec<Token>) -> EvalResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut ops: Vec<StackOp> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::LParen => ops.push(StackOp::Paren),
            Token::RParen => loop {
                match ops.pop() {
                    None => return Err(EvalError::UnmatchedParenthesis),
                    Some(StackOp::Paren) => break,
                    Some(StackOp::Op(op)) => output.push(Token::Op(op)),
                }
            },
            Token::Op(op) => {
                let (prec, _) = op.get();

                while let Some(StackOp::Op(top)) = ops.last().copied() {
                    let (top_prec, top_assoc) = top.get();
                    if top_prec > prec || (top_prec == prec && top_assoc == Assoc::Left) {
                        output.push(Token::Op(top));
                        ops.pop();
                    } else {
                        break;
                    }
                }

                ops.push(StackOp::Op(op));
            }
        }
    }

    while let Some(entry) = ops.pop() {
        match entry {
            StackOp::Paren => return Err(EvalError::UnclosedParenthesis),
            StackOp::Op(op) => output.push(Token::Op(op)),
        }
    }

    Ok(output)
}

use crate::{
    error::{EvalError, EvalResult},
    syntax::{convert_to_rpn, sanitize, tokenize, Token},
};

/// Outcome of running message text through the full pipeline.
///
/// `parsed_expression` is the space-joined infix rendering of what the
/// tokenizer understood, echoed back to the user for transparency.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Evaluation {
    pub parsed_expression: String,
    pub result: f64,
}

/// Evaluates free-form text such as "what is 1+1?".
///
/// Text is sanitized, tokenized, converted to postfix order and reduced
/// to a single `f64`. Errors short-circuit at the first failing stage.
pub(crate) fn evaluate(text: &str) -> EvalResult<Evaluation> {
    let tokens = tokenize(&sanitize(text))?;
    let parsed_expression = render(&tokens);
    let rpn = convert_to_rpn(tokens)?;
    let result = evaluate_rpn(&rpn)?;

    Ok(Evaluation {
        parsed_expression,
        result,
    })
}

fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reduces a postfix token sequence with a single operand stack. Each
/// operator pops its right operand first, then its left. Anything other
/// than exactly one value left at the end means the sequence was not a
/// well-formed expression.
pub(crate) fn evaluate_rpn(tokens: &[Token]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for token in tokens {
        match *token {
            Token::Number(v) => stack.push(v),
            Token::Op(op) => {
                let rhs = stack.pop().ok_or(EvalError::MalformedExpression)?;
                let lhs = stack.pop().ok_or(EvalError::MalformedExpression)?;
                stack.push(op.apply(lhs, rhs));
            }
            // No paren survives conversion to RPN.
            Token::LParen | Token::RParen => return Err(EvalError::MalformedExpression),
        }
    }

    match stack.as_slice() {
        &[result] => Ok(result),
        _ => Err(EvalError::MalformedExpression),
    }
}

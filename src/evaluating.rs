use crate::error_handling::*;
use crate::parsing::*;
use crate::variables::Variable;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    value(f64),
    binding(Variable),
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::value(value) => write!(f, "Answer: {}", format_number(*value)),
            Self::binding(variable) => write!(f, "{} ==> {}", variable.name, format_number(variable.value)),
        }
    }
}

/// Shortest round-trip form, always with a fractional part (`14.0`, `1.0e20`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".into()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity".into() } else { "-Infinity".into() }
    } else {
        let text = format!("{:?}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !mantissa.contains('.') => format!("{}.0e{}", mantissa, exponent),
            _ => text,
        }
    }
}

/// Runs a postfix expression on an operand stack.
///
/// The answer is the last value pushed, not whatever is left on top of the
/// stack, and an empty expression answers `0`. A `binding` operand ends the
/// run straight away.
pub fn evaluate(expression: &[ExprNode]) -> Result<Evaluation> {
    let mut slots = Vec::<f64>::new();
    let mut result = 0.0;
    for node in expression {
        match node {
            ExprNode::operand(Operand::number(value))
            | ExprNode::operand(Operand::reference(Variable{value, ..})) => {
                slots.push(*value);
                result = *value;
            },

            ExprNode::operand(Operand::binding(variable)) => {
                return Ok(Evaluation::binding(variable.clone()));
            },

            ExprNode::symbol(Symbol::operator(operator)) => {
                let right = slots.pop().ok_or(CalcError::invalid_expression)?;
                let left = slots.pop().ok_or(CalcError::invalid_expression)?;
                result = operator.call(left, right);
                log::trace!("{:?} {:?} {:?} = {:?}", left, operator, right, result);
                slots.push(result);
            },

            ExprNode::symbol(symbol) => {
                log::debug!("unexpected {:?} in postfix expression", symbol);
                return Err(CalcError::invalid_expression);
            },
        }
    }
    Ok(Evaluation::value(result))
}

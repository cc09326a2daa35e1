use crate::calculator::evaluate_line;
use crate::config::Options;
use crate::error_handling::*;
use crate::evaluating::Evaluation;
use crate::scanning::*;
use crate::variables::*;

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
    exponentiation,
}

impl BinaryOperator {
    pub fn call(&self, left: f64, right: f64) -> f64 {
        use BinaryOperator::*;

        match self {
            addition => left + right,
            subtraction => left - right,
            multiplication => left * right,
            division => left / right,
            exponentiation => left.powf(right),
        }
    }

    pub fn precedence(&self) -> u8 {
        use BinaryOperator::*;
        match self {
            addition | subtraction => 1,
            multiplication | division => 2,
            exponentiation => 3,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidOperator;

impl From<InvalidOperator> for CalcError {
    fn from(_: InvalidOperator) -> Self {
        CalcError::invalid_expression
    }
}

impl FromStr for BinaryOperator {
    type Err = InvalidOperator;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use BinaryOperator::*;
        match s {
            "+" => Ok(addition),
            "-" => Ok(subtraction),
            "*" => Ok(multiplication),
            "/" => Ok(division),
            "^" => Ok(exponentiation),
            _ => Err(InvalidOperator),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    number(f64),
    /// A variable read, already resolved against the store.
    reference(Variable),
    /// The result of an assignment line.
    binding(Variable),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    operator(BinaryOperator),
    left_paren,
    right_paren,
}

impl Symbol {
    pub fn precedence(&self) -> u8 {
        match self {
            Self::operator(operator) => operator.precedence(),
            Self::left_paren | Self::right_paren => 0,
        }
    }
}

impl FromStr for Symbol {
    type Err = InvalidOperator;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "(" => Ok(Self::left_paren),
            ")" => Ok(Self::right_paren),
            _ => Ok(Self::operator(s.parse()?)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
    operand(Operand),
    symbol(Symbol),
}

fn resolve(name: &str, variables: &VariableStore) -> Result<Operand> {
    if !is_valid_identifier(name) {
        return Err(CalcError::invalid_identifier);
    }
    match variables.get(name) {
        Some(value) => Ok(Operand::reference(Variable::new(name, value))),
        None => Err(CalcError::unknown_variable(name.to_string())),
    }
}

fn parse_token(token: &Token, variables: &VariableStore) -> Result<ExprNode> {
    use TokenKind::*;

    let has_digit = token.content.contains(|c: char| c.is_ascii_digit());
    let has_letter = token.content.contains(|c: char| c.is_ascii_alphabetic());
    match token.kind {
        number => token.content.parse()
            .map(|value| ExprNode::operand(Operand::number(value)))
            .map_err(|_| CalcError::invalid_expression),
        // `x1` reads as a malformed number rather than a name
        identifier if has_digit || !has_letter => Err(CalcError::invalid_expression),
        identifier => Ok(ExprNode::operand(resolve(&token.content, variables)?)),
        operator | punctuation => Ok(ExprNode::symbol(token.content.parse()?)),
    }
}

fn parse_assignment(name: String, value: &str, variables: &mut VariableStore, options: Options) -> Result<Variable> {
    let literal = if value.contains(|c: char| c.is_ascii_alphabetic()) {
        None
    } else {
        value.parse::<f64>().ok()
    };

    let value = match literal {
        Some(value) => value,
        None => match evaluate_line(value, variables, options)? {
            Evaluation::value(value) => value,
            Evaluation::binding(variable) => variable.value,
        },
    };
    Ok(Variable::new(name, value))
}

/// Turns a scanned line into infix nodes.
///
/// An assignment is committed to `variables` here, before the rest of the
/// pipeline runs, and comes back as a single `binding` operand.
pub fn parse_expression(line: Line, variables: &mut VariableStore, options: Options) -> Result<Vec<ExprNode>> {
    match line {
        Line::assignment{name, value} => {
            let variable = parse_assignment(name, &value, variables, options)?;
            variables.assign(&variable);
            Ok(vec![ExprNode::operand(Operand::binding(variable))])
        },
        Line::expression(tokens) => tokens.iter()
            .map(|token| parse_token(token, variables))
            .collect(),
    }
}

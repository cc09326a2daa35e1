use crate::error_handling::*;
use crate::parsing::*;

/// Shunting-yard conversion from infix to postfix order.
///
/// Operators of equal precedence pop each other, so every operator is
/// treated as left-associative, `^` included: `2^3^2` is `(2^3)^2`.
#[derive(Default)]
pub struct Yard {
    expression: Vec<ExprNode>,
    stack: Vec<Symbol>,
}

impl Yard {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_operand(&mut self, operand: Operand) {
        self.expression.push(ExprNode::operand(operand));
    }

    fn pop_higher_operator(&mut self, precedence: u8) -> Option<BinaryOperator> {
        match self.stack.last() {
            Some(&Symbol::operator(operator)) if operator.precedence() >= precedence => {
                self.stack.pop();
                Some(operator)
            },
            _ => None,
        }
    }

    fn add_operator(&mut self, operator: BinaryOperator) {
        while let Some(higher) = self.pop_higher_operator(operator.precedence()) {
            log::trace!("yard: {:?} yields to {:?}", operator, higher);
            self.expression.push(ExprNode::symbol(Symbol::operator(higher)));
        }
        self.stack.push(Symbol::operator(operator));
    }

    fn add_left_paren(&mut self) {
        self.stack.push(Symbol::left_paren);
    }

    fn add_right_paren(&mut self) -> Result<()> {
        while let Some(symbol) = self.stack.pop() {
            if symbol == Symbol::left_paren {
                return Ok(());
            }
            self.expression.push(ExprNode::symbol(symbol));
        }
        log::debug!("yard: no '(' for ')'");
        Err(CalcError::invalid_expression)
    }

    pub fn add(&mut self, node: ExprNode) -> Result<()> {
        match node {
            ExprNode::operand(operand) => self.add_operand(operand),
            ExprNode::symbol(Symbol::left_paren) => self.add_left_paren(),
            ExprNode::symbol(Symbol::right_paren) => self.add_right_paren()?,
            ExprNode::symbol(Symbol::operator(operator)) => self.add_operator(operator),
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<Vec<ExprNode>> {
        while let Some(symbol) = self.stack.pop() {
            if symbol == Symbol::left_paren {
                log::debug!("yard: no ')' for '('");
                return Err(CalcError::invalid_expression);
            }
            self.expression.push(ExprNode::symbol(symbol));
        }
        Ok(self.expression)
    }
}

pub fn to_postfix(infix: Vec<ExprNode>) -> Result<Vec<ExprNode>> {
    let mut yard = Yard::new();
    for node in infix {
        yard.add(node)?;
    }
    yard.finish()
}

use crate::config::Options;
use crate::error_handling::*;
use crate::evaluating::*;
use crate::parsing::*;
use crate::scanning::*;
use crate::variables::VariableStore;
use crate::yard::*;

/// Runs one line through the whole pipeline: scan, parse, reorder, evaluate.
///
/// Assignment right-hand sides come back through here recursively.
pub fn evaluate_line(input: &str, variables: &mut VariableStore, options: Options) -> Result<Evaluation> {
    let line = tokenize(input, options)?;
    let infix = parse_expression(line, variables, options)?;
    log::debug!("infix: {:?}", infix);
    let postfix = to_postfix(infix)?;
    log::debug!("postfix: {:?}", postfix);
    evaluate(&postfix)
}

/// A session: the variables bound so far and the options in force.
#[derive(Debug, Default)]
pub struct Calculator {
    variables: VariableStore,
    options: Options,
}

impl Calculator {
    pub fn new(options: Options) -> Self {
        Self{variables: VariableStore::new(), options}
    }

    pub fn evaluate_line(&mut self, input: &str) -> Result<Evaluation> {
        evaluate_line(input, &mut self.variables, self.options)
    }

    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }
}

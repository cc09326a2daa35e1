#![allow(nonstandard_style)]

pub mod calculator;
pub mod commands;
pub mod config;
pub mod error_handling;
pub mod evaluating;
pub mod parsing;
pub mod scanning;
pub mod variables;
pub mod yard;

pub use calculator::Calculator;
pub use config::Options;
pub use error_handling::{CalcError, Result};
pub use evaluating::Evaluation;

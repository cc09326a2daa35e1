/// Runtime switches for a calculator session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Reject text the lexer would otherwise skip, instead of dropping it.
    pub strict_lexing: bool,
}

impl Options {
    pub fn strict() -> Self {
        Self{strict_lexing: true}
    }
}

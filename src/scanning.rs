use crate::config::Options;
use crate::error_handling::*;
use crate::variables::is_valid_identifier;

use regex::{Captures, Regex};
use std::sync::OnceLock;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    identifier, number, operator, punctuation
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub content: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(content: impl Into<String>, kind: TokenKind) -> Self {
        Self{content: content.into(), kind}
    }

    fn classify(content: &str) -> Self {
        let kind = match content.chars().next() {
            Some(c) if c.is_ascii_digit() => TokenKind::number,
            Some(c) if c.is_ascii_alphabetic() || c == '_' => TokenKind::identifier,
            Some('(' | ')') => TokenKind::punctuation,
            _ => TokenKind::operator,
        };
        Self::new(content, kind)
    }
}

/// A scanned input line.
#[derive(Clone, Debug, PartialEq)]
pub enum Line {
    /// `name = value`, where `value` is either a bare literal or the
    /// space-joined tokens of an expression still to be evaluated.
    assignment { name: String, value: String },
    expression(Vec<Token>),
}

fn token_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[0-9]+(?:\.[0-9]+)?|[A-Za-z_][A-Za-z0-9_]*|[()*/+\-^]").unwrap()
    })
}

fn repeated_product_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*{2,}|/{2,}").unwrap())
}

fn minus_pairs_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:--)+").unwrap())
}

fn repeated_sign_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\+{2,}|-{2,}|/{2,}|\*{2,}").unwrap())
}

fn mixed_sign_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\+-|-\+").unwrap())
}

/// Folds runs of signs into a single operator, e.g. `3--2` into `3+2`.
///
/// Each rewrite is a single left-to-right pass, so `+-+` only becomes `-+`.
pub fn normalize_signs(input: &str) -> Result<String> {
    if repeated_product_pattern().is_match(input) {
        return Err(CalcError::invalid_expression);
    }

    let text = minus_pairs_pattern().replace_all(input, "+");
    let text = repeated_sign_pattern().replace_all(&text, |caps: &Captures| caps[0][..1].to_string());
    let text = mixed_sign_pattern().replace_all(&text, "-");
    Ok(text.trim().to_string())
}

pub struct StringScanner {
    string: String,
    token: Option<Token>,
    index: usize,
    strict: bool,
}

impl StringScanner {
    pub fn new(string: String, options: Options) -> Result<Self> {
        let mut source = Self {
            string,
            token: None,
            index: 0,
            strict: options.strict_lexing,
        };
        source.advance()?;
        Ok(source)
    }

    fn check_skipped(&self, end: usize) -> Result<()> {
        let skipped = self.string[self.index..end].trim();
        if skipped.is_empty() {
            Ok(())
        } else if self.strict {
            Err(CalcError::invalid_token(skipped.into()))
        } else {
            log::trace!("dropping {:?}", skipped);
            Ok(())
        }
    }

    pub fn get_current(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn advance(&mut self) -> Result<()> {
        let (start, end, token) = match token_pattern().find_at(&self.string, self.index) {
            Some(found) => (found.start(), found.end(), Some(Token::classify(found.as_str()))),
            None => (self.string.len(), self.string.len(), None),
        };
        self.check_skipped(start)?;
        self.index = end;
        self.token = token;
        Ok(())
    }
}

fn tokenize_expression(input: &str, options: Options) -> Result<Vec<Token>> {
    let normalized = normalize_signs(input)?;
    log::debug!("normalized {:?} to {:?}", input, normalized);

    let mut source = StringScanner::new(normalized, options)?;
    let mut tokens = Vec::new();
    while let Some(token) = source.get_current() {
        tokens.push(token.clone());
        source.advance()?;
    }
    Ok(tokens)
}

fn tokenize_assignment(input: &str, options: Options) -> Result<Line> {
    let (name, value) = input.split_once('=').ok_or(CalcError::invalid_assignment)?;
    if value.contains('=') {
        return Err(CalcError::invalid_assignment);
    }

    let name = name.trim();
    let value = value.trim();
    if !is_valid_identifier(name) {
        return Err(CalcError::invalid_identifier);
    }
    if value.is_empty() {
        return Err(CalcError::invalid_assignment);
    }

    let value = if value.contains(|c: char| c.is_ascii_alphabetic()) {
        tokenize_expression(value, options)?
            .iter()
            .map(|token| token.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        value.to_string()
    };

    Ok(Line::assignment{name: name.to_string(), value})
}

pub fn tokenize(input: &str, options: Options) -> Result<Line> {
    let line = if input.contains('=') {
        tokenize_assignment(input, options)?
    } else {
        Line::expression(tokenize_expression(input, options)?)
    };
    log::debug!("scanned {:?}", line);
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(input: &str) -> Vec<String> {
        match tokenize(input, Options::default()).unwrap() {
            Line::expression(tokens) => tokens.into_iter().map(|token| token.content).collect(),
            line => panic!("expected an expression, got {:?}", line),
        }
    }

    #[test]
    fn folds_sign_runs() {
        assert_eq!(normalize_signs("3--2").unwrap(), "3+2");
        assert_eq!(normalize_signs("3----2").unwrap(), "3+2");
        assert_eq!(normalize_signs("3---2").unwrap(), "3-2");
        assert_eq!(normalize_signs("1 +++ 2").unwrap(), "1 + 2");
        assert_eq!(normalize_signs("1 +- 2").unwrap(), "1 - 2");
        assert_eq!(normalize_signs("1 -+ 2").unwrap(), "1 - 2");
        assert_eq!(normalize_signs("  7 ").unwrap(), "7");
    }

    #[test]
    fn rewrites_are_single_pass() {
        assert_eq!(normalize_signs("1+-+2").unwrap(), "1-+2");
    }

    #[test]
    fn repeated_products_are_rejected() {
        assert_eq!(normalize_signs("2**3"), Err(CalcError::invalid_expression));
        assert_eq!(normalize_signs("8 // 2"), Err(CalcError::invalid_expression));
        assert_eq!(normalize_signs("8 / / 2").unwrap(), "8 / / 2");
    }

    #[test]
    fn scans_mixed_tokens() {
        assert_eq!(contents("12.5*(rate+3)^2"), ["12.5", "*", "(", "rate", "+", "3", ")", "^", "2"]);
        assert_eq!(contents("3x"), ["3", "x"]);
        assert_eq!(contents(""), Vec::<String>::new());
    }

    #[test]
    fn classifies_tokens() {
        let line = tokenize("a1 + (2)", Options::default()).unwrap();
        let expected = vec![
            Token::new("a1", TokenKind::identifier),
            Token::new("+", TokenKind::operator),
            Token::new("(", TokenKind::punctuation),
            Token::new("2", TokenKind::number),
            Token::new(")", TokenKind::punctuation),
        ];
        assert_eq!(line, Line::expression(expected));
    }

    #[test]
    fn drops_unknown_characters() {
        assert_eq!(contents("1 # 2 $"), ["1", "2"]);
        assert_eq!(contents("3.x"), ["3", "x"]);
    }

    #[test]
    fn strict_lexing_reports_dropped_text() {
        assert_eq!(tokenize("1 # 2", Options::strict()), Err(CalcError::invalid_token("#".into())));
        assert_eq!(tokenize("1 + 2 %", Options::strict()), Err(CalcError::invalid_token("%".into())));
        assert!(tokenize("1 + 2", Options::strict()).is_ok());
    }

    #[test]
    fn splits_assignments() {
        let line = tokenize("  count = 42 ", Options::default()).unwrap();
        assert_eq!(line, Line::assignment{name: "count".into(), value: "42".into()});
    }

    #[test]
    fn retokenizes_assigned_expressions() {
        let line = tokenize("a = b--1", Options::default()).unwrap();
        assert_eq!(line, Line::assignment{name: "a".into(), value: "b + 1".into()});
    }

    #[test]
    fn rejects_bad_assignments() {
        assert_eq!(tokenize("x=1=2", Options::default()), Err(CalcError::invalid_assignment));
        assert_eq!(tokenize("a == 1", Options::default()), Err(CalcError::invalid_assignment));
        assert_eq!(tokenize("x =", Options::default()), Err(CalcError::invalid_assignment));
        assert_eq!(tokenize("a1 = 3", Options::default()), Err(CalcError::invalid_identifier));
        assert_eq!(tokenize("= 3", Options::default()), Err(CalcError::invalid_identifier));
    }
}

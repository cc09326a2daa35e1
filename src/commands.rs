pub const HELP: &str = "\
Enter an arithmetic expression using + - * / ^ and parentheses, e.g. 2 + 3 * (4 - 1).
Assign a variable with name = value; names are letters only and can be used in later expressions.
Commands: /help shows this message, /exit quits.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    exit,
    help,
    unknown,
}

impl Command {
    /// Lines starting with `/` are commands; names are matched case-insensitively.
    pub fn parse(line: &str) -> Option<Self> {
        if !line.starts_with('/') {
            return None;
        }
        let command = match line.to_lowercase().as_str() {
            "/exit" => Self::exit,
            "/help" => Self::help,
            _ => Self::unknown,
        };
        Some(command)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::exit => "Bye!",
            Self::help => HELP,
            Self::unknown => "Unknown command",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_commands() {
        assert_eq!(Command::parse("/exit"), Some(Command::exit));
        assert_eq!(Command::parse("/HELP"), Some(Command::help));
        assert_eq!(Command::parse("/go"), Some(Command::unknown));
        assert_eq!(Command::parse("/"), Some(Command::unknown));
    }

    #[test]
    fn expressions_are_not_commands() {
        assert_eq!(Command::parse("8 / 2"), None);
        assert_eq!(Command::parse(" /exit"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn messages() {
        assert_eq!(Command::exit.message(), "Bye!");
        assert_eq!(Command::unknown.message(), "Unknown command");
        assert!(Command::help.message().contains("/exit"));
    }
}

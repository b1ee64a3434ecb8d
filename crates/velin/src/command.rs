/// The closed set of editor commands. Aliases resolve to one of these
/// before dispatch; execution lives in the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Write,
    Quit,
    WriteQuit,
    Clear,
    Name,
}

/// Canonical names in declared order. Suggestion matching scans this list
/// front to back, so the order is part of the editor's behavior.
const CANONICAL: &[(&str, Command)] = &[
    ("write", Command::Write),
    ("quit", Command::Quit),
    ("writequit", Command::WriteQuit),
    ("clear", Command::Clear),
    ("name", Command::Name),
];

const ALIASES: &[(&str, Command)] = &[
    ("w", Command::Write),
    ("save", Command::Write),
    ("s", Command::Write),
    ("q", Command::Quit),
    ("wq", Command::WriteQuit),
    ("sq", Command::WriteQuit),
    ("savequit", Command::WriteQuit),
    ("x", Command::WriteQuit),
    ("filename", Command::Name),
    ("n", Command::Name),
];

/// Resolves a command token (case-insensitive) to its canonical command.
pub fn resolve(token: &str) -> Option<Command> {
    let token = token.to_lowercase();
    CANONICAL
        .iter()
        .chain(ALIASES.iter())
        .find(|(name, _)| *name == token)
        .map(|(_, cmd)| *cmd)
}

/// First canonical command name starting with `partial` (case-insensitive),
/// in declared order. Empty input yields no suggestion.
pub fn suggest(partial: &str) -> Option<&'static str> {
    if partial.is_empty() {
        return None;
    }
    let partial = partial.to_lowercase();
    CANONICAL
        .iter()
        .find(|(name, _)| name.starts_with(&partial))
        .map(|(name, _)| *name)
}

/// Splits raw command input into a lowercased command token and its
/// argument tokens. Returns None for blank input.
pub fn tokenize(raw: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = raw.split_whitespace();
    let token = parts.next()?.to_lowercase();
    Some((token, parts.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_resolution() {
        assert_eq!(resolve("write"), Some(Command::Write));
        assert_eq!(resolve("quit"), Some(Command::Quit));
        assert_eq!(resolve("writequit"), Some(Command::WriteQuit));
        assert_eq!(resolve("clear"), Some(Command::Clear));
        assert_eq!(resolve("name"), Some(Command::Name));
    }

    #[test]
    fn test_alias_resolution() {
        assert_eq!(resolve("w"), Some(Command::Write));
        assert_eq!(resolve("save"), Some(Command::Write));
        assert_eq!(resolve("s"), Some(Command::Write));
        assert_eq!(resolve("q"), Some(Command::Quit));
        assert_eq!(resolve("wq"), Some(Command::WriteQuit));
        assert_eq!(resolve("sq"), Some(Command::WriteQuit));
        assert_eq!(resolve("savequit"), Some(Command::WriteQuit));
        assert_eq!(resolve("x"), Some(Command::WriteQuit));
        assert_eq!(resolve("filename"), Some(Command::Name));
        assert_eq!(resolve("n"), Some(Command::Name));
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        assert_eq!(resolve("WQ"), Some(Command::WriteQuit));
        assert_eq!(resolve("Write"), Some(Command::Write));
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(resolve("frobnicate"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn test_suggest_picks_first_declared_match() {
        // Both "write" and "writequit" start with "w"; declared order wins.
        assert_eq!(suggest("w"), Some("write"));
        assert_eq!(suggest("writeq"), Some("writequit"));
        assert_eq!(suggest("na"), Some("name"));
        assert_eq!(suggest("c"), Some("clear"));
        assert_eq!(suggest("Q"), Some("quit"));
    }

    #[test]
    fn test_suggest_empty_or_unmatched() {
        assert_eq!(suggest(""), None);
        assert_eq!(suggest("zz"), None);
        assert_eq!(suggest("writequitx"), None);
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("  NAME foo.txt  "),
            Some(("name".to_string(), vec!["foo.txt"]))
        );
        assert_eq!(tokenize("w"), Some(("w".to_string(), vec![])));
        assert_eq!(tokenize("   "), None);
        assert_eq!(tokenize(""), None);
    }
}

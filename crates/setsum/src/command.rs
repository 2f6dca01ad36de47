//! Parsing of shell command lines.
//!
//! Lines are raw bytes: an inserted or removed value is taken verbatim and
//! need not be UTF-8.

/// Usage text printed for unrecognised lines.
pub const USAGE: &str = "Commands:
insert <value>
remove <value>
merge <hex-digest>
subtract <hex-digest>
digest
";

/// One parsed shell line. Arguments borrow from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `insert <value>`: add the rest of the line as one element.
    Insert(&'a [u8]),
    /// `remove <value>`: remove the rest of the line as one element.
    Remove(&'a [u8]),
    /// `merge <hex-digest>`.
    Merge(&'a [u8]),
    /// `subtract <hex-digest>`.
    Subtract(&'a [u8]),
    /// `digest`: print the running hex digest.
    Digest,
    /// Any line starting with `q`, `quit` or `exit`.
    Quit,
    /// Anything else.
    Unknown,
}

impl<'a> Command<'a> {
    /// Parse a line with its line terminator already removed.
    ///
    /// `digest` must match exactly; the other commands match by prefix, and
    /// the quit check runs last so that `quit` never shadows a real command.
    pub fn parse(line: &'a [u8]) -> Self {
        if line == b"digest" {
            return Command::Digest;
        }
        if let Some(value) = line.strip_prefix(b"insert ") {
            return Command::Insert(value);
        }
        if let Some(value) = line.strip_prefix(b"remove ") {
            return Command::Remove(value);
        }
        if let Some(digest) = line.strip_prefix(b"merge ") {
            return Command::Merge(digest);
        }
        if let Some(digest) = line.strip_prefix(b"subtract ") {
            return Command::Subtract(digest);
        }
        // `q` also covers `quit`.
        if line.starts_with(b"q") || line.starts_with(b"exit") {
            return Command::Quit;
        }
        Command::Unknown
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Insert(_) => "insert",
            Command::Remove(_) => "remove",
            Command::Merge(_) => "merge",
            Command::Subtract(_) => "subtract",
            Command::Digest => "digest",
            Command::Quit => "quit",
            Command::Unknown => "unknown",
        }
    }
}

/// Strip one trailing `\n` or `\r\n`.
pub fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_insert_remove() {
        assert_eq!(Command::parse(b"insert hello"), Command::Insert(b"hello"));
        assert_eq!(Command::parse(b"remove hello world"), Command::Remove(b"hello world"));
        // Everything after the first space is the value, spaces included.
        assert_eq!(Command::parse(b"insert  padded "), Command::Insert(b" padded "));
        assert_eq!(Command::parse(b"insert "), Command::Insert(b""));
    }

    #[test]
    fn test_parse_non_utf8_value() {
        let mut line = b"insert ".to_vec();
        line.extend_from_slice(&[0xff, 0xfe]);
        assert_eq!(Command::parse(&line), Command::Insert(&[0xff, 0xfe]));
    }

    #[test]
    fn test_parse_merge_subtract() {
        assert_eq!(Command::parse(b"merge abcd"), Command::Merge(b"abcd"));
        assert_eq!(Command::parse(b"subtract abcd"), Command::Subtract(b"abcd"));
    }

    #[test]
    fn test_parse_digest_exact() {
        assert_eq!(Command::parse(b"digest"), Command::Digest);
        assert_eq!(Command::parse(b"digest "), Command::Unknown);
        assert_eq!(Command::parse(b"digests"), Command::Unknown);
    }

    #[test]
    fn test_parse_quit_prefixes() {
        assert_eq!(Command::parse(b"q"), Command::Quit);
        assert_eq!(Command::parse(b"quit"), Command::Quit);
        assert_eq!(Command::parse(b"exit"), Command::Quit);
        assert_eq!(Command::parse(b"exit now"), Command::Quit);
        // Any q-prefixed line quits.
        assert_eq!(Command::parse(b"query"), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Command::parse(b""), Command::Unknown);
        assert_eq!(Command::parse(b"insert"), Command::Unknown);
        assert_eq!(Command::parse(b"INSERT x"), Command::Unknown);
        assert_eq!(Command::parse(b"help"), Command::Unknown);
    }

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending(b"digest\n"), b"digest");
        assert_eq!(trim_line_ending(b"digest\r\n"), b"digest");
        assert_eq!(trim_line_ending(b"digest"), b"digest");
        assert_eq!(trim_line_ending(b"value\n\n"), b"value\n");
    }
}

mod tests;

use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Kind {
    /// The literal `--`
    Terminator,
    /// `--name` or `--name=value`
    Long,
    /// `-abc`
    Short,
    /// Anything else, including the lone `-`
    Positional,
}

#[allow(
    clippy::unwrap_used,
    reason = "Regular expressions compiled from literals"
)]
static PATTERNS: LazyLock<[(Regex, Kind); 4]> = LazyLock::new(|| {
    [
        (Regex::new(r"^--$").unwrap(), Kind::Terminator),
        (
            Regex::new(r"(?s)^--(?<name>[^=]*)(?:=(?<value>.*))?$").unwrap(),
            Kind::Long,
        ),
        (Regex::new(r"(?s)^-(?<cluster>.+)$").unwrap(), Kind::Short),
        (Regex::new(r"(?s)^.*$").unwrap(), Kind::Positional),
    ]
});

/// One argv element, split into the parts the parser cares about.
#[derive(Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Terminator,
    Long {
        name: &'a str,
        value: Option<&'a str>,
    },
    Short(&'a str),
    Positional,
}

impl Token<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Token::Terminator => Kind::Terminator,
            Token::Long { .. } => Kind::Long,
            Token::Short(_) => Kind::Short,
            Token::Positional => Kind::Positional,
        }
    }
}

pub fn classify(arg: &str) -> Token<'_> {
    for (re, kind) in PATTERNS.iter() {
        let Some(caps) = re.captures(arg) else {
            continue;
        };

        return match kind {
            Kind::Terminator => Token::Terminator,
            Kind::Long => Token::Long {
                name: caps.name("name").map_or("", |m| m.as_str()),
                value: caps.name("value").map(|m| m.as_str()),
            },
            Kind::Short => Token::Short(caps.name("cluster").map_or("", |m| m.as_str())),
            Kind::Positional => Token::Positional,
        };
    }

    // The last pattern matches any string
    Token::Positional
}

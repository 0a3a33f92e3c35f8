#![cfg(test)]

use super::*;

#[test]
fn classify_basics() {
    assert_eq!(classify("--"), Token::Terminator);
    assert_eq!(classify("-"), Token::Positional);
    assert_eq!(classify(""), Token::Positional);
    assert_eq!(classify("file.txt"), Token::Positional);
    assert_eq!(classify("a-b"), Token::Positional);
    assert_eq!(classify("-ab"), Token::Short("ab"));
    assert_eq!(classify("-cfoo=bar"), Token::Short("cfoo=bar"));
}

#[test]
fn classify_long() {
    assert_eq!(
        classify("--verbose"),
        Token::Long {
            name: "verbose",
            value: None
        }
    );
    assert_eq!(
        classify("--file=a=b"),
        Token::Long {
            name: "file",
            value: Some("a=b")
        }
    );
    assert_eq!(
        classify("--file="),
        Token::Long {
            name: "file",
            value: Some("")
        }
    );
    assert_eq!(
        classify("--=x"),
        Token::Long {
            name: "",
            value: Some("x")
        }
    );
    assert_eq!(
        classify("---"),
        Token::Long {
            name: "-",
            value: None
        }
    );
}

#[test]
fn classify_multiline() {
    assert_eq!(
        classify("--create=line one\nline two"),
        Token::Long {
            name: "create",
            value: Some("line one\nline two")
        }
    );
    assert_eq!(classify("-c\nx").kind(), Kind::Short);
    assert_eq!(classify("first\nsecond").kind(), Kind::Positional);
}

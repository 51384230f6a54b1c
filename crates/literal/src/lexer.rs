use std::fmt;
use std::ops::Range;

use logos::{Lexer, Logos};

use crate::error::LiteralError;

/// Tokens of the object-literal subset found in content modules.
///
/// Whitespace, `//` line comments and `/* */` block comments are skipped.
/// Anything outside this set (operators, arrows, JSX) is a lexing error.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip(r"([ \t\r\n\f]+|//[^\n]*|/\*([^*]|\*+[^*/])*\*+/)", allow_greedy = true))]
pub enum Token {
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("...")]
    Spread,

    #[token("true")]
    True,

    #[token("false")]
    False,

    #[token("null")]
    Null,

    #[token("undefined")]
    Undefined,

    #[regex(
        r"-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?",
        |lex| lex.slice().parse::<f64>().ok()
    )]
    Number(f64),

    #[regex(r#""([^"\\\n]|\\(.|\n))*""#, quoted_string)]
    #[regex(r"'([^'\\\n]|\\(.|\n))*'", quoted_string)]
    #[regex(r"`([^`\\]|\\(.|\n))*`", template_string)]
    Str(String),

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*", |lex| lex.slice().to_string())]
    Ident(String),
}

fn quoted_string(lex: &mut Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    unescape(slice.get(1..slice.len() - 1)?)
}

/// Template literals are accepted only without `${}` substitutions.
fn template_string(lex: &mut Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    let body = slice.get(1..slice.len() - 1)?;
    if body.contains("${") {
        return None;
    }
    unescape(body)
}

/// Resolve JavaScript string escapes. Unknown escapes yield the escaped
/// character itself, and a backslash before a newline is a line continuation.
pub fn unescape(body: &str) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            '\n' => {}
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                out.push(hex_char(&hex, 2)?);
            }
            'u' => {
                let rest = chars.as_str();
                if let Some(braced) = rest.strip_prefix('{') {
                    let close = braced.find('}')?;
                    out.push(hex_char(&braced[..close], close.max(1))?);
                    chars = braced[close + 1..].chars();
                } else {
                    let hex: String = chars.by_ref().take(4).collect();
                    out.push(hex_char(&hex, 4)?);
                }
            }
            other => out.push(other),
        }
    }

    Some(out)
}

fn hex_char(hex: &str, expected_len: usize) -> Option<char> {
    if hex.is_empty() || hex.len() != expected_len {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LBrace => write!(f, "'{{'"),
            Token::RBrace => write!(f, "'}}'"),
            Token::LBracket => write!(f, "'['"),
            Token::RBracket => write!(f, "']'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Colon => write!(f, "':'"),
            Token::Comma => write!(f, "','"),
            Token::Semicolon => write!(f, "';'"),
            Token::Spread => write!(f, "'...'"),
            Token::True => write!(f, "true"),
            Token::False => write!(f, "false"),
            Token::Null => write!(f, "null"),
            Token::Undefined => write!(f, "undefined"),
            Token::Number(n) => write!(f, "number {n}"),
            Token::Str(s) => write!(f, "string {s:?}"),
            Token::Ident(s) => write!(f, "identifier `{s}`"),
        }
    }
}

/// Lex the whole input, failing on the first unrecognized fragment.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Range<usize>)>, LiteralError> {
    let mut tokens = Vec::new();
    for (token, span) in Token::lexer(source).spanned() {
        match token {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                return Err(LiteralError::Lex {
                    offset: span.start,
                    fragment: source[span].to_string(),
                });
            }
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_object_punctuation() {
        assert_eq!(tokens("{ a: [1, 2], }"), vec![
            Token::LBrace,
            Token::Ident("a".into()),
            Token::Colon,
            Token::LBracket,
            Token::Number(1.0),
            Token::Comma,
            Token::Number(2.0),
            Token::RBracket,
            Token::Comma,
            Token::RBrace,
        ]);
    }

    #[test]
    fn test_keywords_beat_identifiers() {
        assert_eq!(tokens("true false null undefined trueish"), vec![
            Token::True,
            Token::False,
            Token::Null,
            Token::Undefined,
            Token::Ident("trueish".into()),
        ]);
    }

    #[rstest]
    #[case(r#""plain""#, "plain")]
    #[case(r"'single'", "single")]
    #[case(r"`back tick`", "back tick")]
    #[case(r#""it\'s \"quoted\"""#, r#"it's "quoted""#)]
    #[case(r"'line\nbreak'", "line\nbreak")]
    #[case(r"'café'", "café")]
    #[case(r"'\u{1F600}'", "\u{1F600}")]
    #[case(r"'\x41'", "A")]
    fn test_string_forms(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(tokens(input), vec![Token::Str(expected.into())]);
    }

    #[test]
    fn test_multiline_template() {
        assert_eq!(tokens("`one\ntwo`"), vec![Token::Str("one\ntwo".into())]);
    }

    #[test]
    fn test_template_substitution_rejected() {
        let err = tokenize("`Hello ${name}`").unwrap_err();
        assert!(matches!(err, LiteralError::Lex { offset: 0, .. }));
    }

    #[test]
    fn test_comments_skipped() {
        let input = "{ // leading\n a /* inline */ : 1 }";
        assert_eq!(tokens(input), vec![
            Token::LBrace,
            Token::Ident("a".into()),
            Token::Colon,
            Token::Number(1.0),
            Token::RBrace,
        ]);
    }

    #[test]
    fn test_line_comment_runs_to_end_of_input() {
        assert_eq!(tokens("{ a: 1 } // trailing, no newline { ["), vec![
            Token::LBrace,
            Token::Ident("a".into()),
            Token::Colon,
            Token::Number(1.0),
            Token::RBrace,
        ]);
    }

    #[rstest]
    #[case("0", 0.0)]
    #[case("-12", -12.0)]
    #[case("3.25", 3.25)]
    #[case("1e3", 1000.0)]
    fn test_numbers(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(tokens(input), vec![Token::Number(expected)]);
    }

    #[test]
    fn test_arrow_is_lex_error() {
        let err = tokenize("{ run: () => 1 }").unwrap_err();
        let LiteralError::Lex { offset, fragment } = err else {
            panic!("Expected lex error");
        };
        assert_eq!(offset, 10);
        assert!(fragment.starts_with('='));
    }

    #[test]
    fn test_spans_index_source() {
        let input = "{ title: 'x' }";
        let spans: Vec<_> = tokenize(input).unwrap().into_iter().map(|(_, s)| s).collect();
        assert_eq!(spans, vec![0..1, 2..7, 7..8, 9..12, 13..14]);
    }
}

use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::LiteralError;
use crate::lexer::Token;
use crate::parser::{MAX_DEPTH, parse_literal};
use crate::value::Literal;

/// `export const <name> [: Type] =`, positioned right before the initializer.
static EXPORT_CONST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+const\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*(?::[^=;{]*)?=\s*")
        .expect("export pattern must compile")
});

/// One `export const <name> = { ... }` occurrence in a module.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedObject {
    pub name: String,
    /// Byte offset of the opening brace.
    pub offset: usize,
    /// 1-based line of the opening brace.
    pub line: usize,
    pub value: Result<Literal, LiteralError>,
}

/// Find every exported object literal in `source` and parse each one
/// independently. A broken literal fails only its own entry.
///
/// Exports whose initializer is not an object literal (functions, arrays,
/// re-exports) are not reported.
pub fn exported_objects(source: &str) -> Vec<ExportedObject> {
    EXPORT_CONST
        .captures_iter(source)
        .filter_map(|caps| {
            let start = caps.get(0)?.end();
            if !source[start..].starts_with('{') {
                return None;
            }
            let name = caps.get(1)?.as_str().to_string();

            let value = object_extent(source, start).and_then(|end| {
                parse_literal(&source[start..end]).map_err(|e| e.shifted(start))
            });

            Some(ExportedObject {
                name,
                offset: start,
                line: line_of(source, start),
                value,
            })
        })
        .collect()
}

/// Byte offset one past the brace closing the object opened at `start`.
///
/// Brackets inside strings and comments are invisible here because the
/// scan runs over tokens. Nesting beyond [`MAX_DEPTH`] is rejected.
fn object_extent(source: &str, start: usize) -> Result<usize, LiteralError> {
    let mut open: Vec<Token> = Vec::new();

    for (token, span) in Token::lexer(&source[start..]).spanned() {
        let token = token.map_err(|_| LiteralError::Lex {
            offset: start + span.start,
            fragment: source[start + span.start..start + span.end].to_string(),
        })?;

        match token {
            Token::LBrace | Token::LBracket | Token::LParen => {
                if open.len() == MAX_DEPTH {
                    return Err(LiteralError::TooDeep {
                        offset: start + span.start,
                        limit: MAX_DEPTH,
                    });
                }
                open.push(match token {
                    Token::LBrace => Token::RBrace,
                    Token::LBracket => Token::RBracket,
                    _ => Token::RParen,
                });
            }
            Token::RBrace | Token::RBracket | Token::RParen => {
                if open.pop().as_ref() != Some(&token) {
                    return Err(LiteralError::Unbalanced {
                        offset: start + span.start,
                        found: token.to_string(),
                    });
                }
                if open.is_empty() {
                    return Ok(start + span.end);
                }
            }
            _ => {}
        }
    }

    Err(LiteralError::Unterminated { offset: start })
}

fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}

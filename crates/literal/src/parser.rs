use chumsky::{input::ValueInput, prelude::*};

use crate::error::LiteralError;
use crate::lexer::{Token, tokenize};
use crate::value::Literal;

/// Deepest bracket nesting accepted before parsing. The grammar is
/// recursive, so unbounded input would exhaust the stack.
pub const MAX_DEPTH: usize = 256;

pub type Span = SimpleSpan;
pub type Spanned<T> = (T, Span);

/// Parser for the object-literal subset of JavaScript
///
/// Grammar:
/// ```text
/// value   := object | array | scalar
/// object  := '{' (member (',' member)* ','?)? '}'
/// member  := key ':' value
/// key     := Ident | String | Number | true | false | null | undefined
/// array   := '[' (value (',' value)* ','?)? ']'
/// scalar  := String | Number | true | false | null | undefined
/// ```
///
/// Identifiers in value position, spreads and calls are rejected: resolving
/// them would require evaluating the module.
pub fn parser<'tokens, I>()
-> impl Parser<'tokens, I, Spanned<Literal>, extra::Err<Rich<'tokens, Token>>>
where
    I: ValueInput<'tokens, Token = Token, Span = SimpleSpan>,
{
    recursive(|value| {
        let scalar = select! {
            Token::Str(s) => Literal::String(s),
            Token::Number(n) => Literal::Number(n),
            Token::True => Literal::Bool(true),
            Token::False => Literal::Bool(false),
            Token::Null => Literal::Null,
            Token::Undefined => Literal::Null,
        };

        let array = value
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .collect::<Vec<Literal>>()
            .delimited_by(just(Token::LBracket), just(Token::RBracket))
            .map(Literal::Array);

        let key = select! {
            Token::Ident(s) => s,
            Token::Str(s) => s,
            Token::Number(n) => n.to_string(),
            Token::True => "true".to_string(),
            Token::False => "false".to_string(),
            Token::Null => "null".to_string(),
            Token::Undefined => "undefined".to_string(),
        };

        let member = key.then_ignore(just(Token::Colon)).then(value);

        let object = member
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .collect::<Vec<(String, Literal)>>()
            .delimited_by(just(Token::LBrace), just(Token::RBrace))
            .map(Literal::Object);

        choice((object, array, scalar))
    })
    .map_with(|value, e| (value, e.span()))
}

/// Parse one complete literal. Trailing tokens are an error.
pub fn parse_literal(input: &str) -> Result<Literal, LiteralError> {
    use chumsky::input::Stream;

    let tokens = tokenize(input)?;
    check_depth(&tokens)?;
    let token_iter = tokens
        .into_iter()
        .map(|(tok, span)| (tok, SimpleSpan::from(span)));

    let token_stream = Stream::from_iter(token_iter)
        .map((0..input.len()).into(), |(t, s): (_, _)| (t, s));

    match parser().parse(token_stream).into_result() {
        Ok((value, _)) => Ok(value),
        Err(errors) => Err(first_syntax_error(&errors, input.len())),
    }
}

fn check_depth(tokens: &[(Token, std::ops::Range<usize>)]) -> Result<(), LiteralError> {
    let mut depth = 0usize;
    for (token, span) in tokens {
        match token {
            Token::LBrace | Token::LBracket | Token::LParen => {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(LiteralError::TooDeep {
                        offset: span.start,
                        limit: MAX_DEPTH,
                    });
                }
            }
            Token::RBrace | Token::RBracket | Token::RParen => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn first_syntax_error(errors: &[Rich<'_, Token>], input_len: usize) -> LiteralError {
    let Some(error) = errors.first() else {
        return LiteralError::Syntax {
            offset: input_len,
            message: "invalid literal".to_string(),
        };
    };

    let offset = error.span().start;
    let message = match error.found() {
        Some(token) => format!("unexpected {token}"),
        None => "unexpected end of input".to_string(),
    };
    LiteralError::Syntax { offset, message }
}

//! Tokens of an expression.

use crate::{place::Number, types::err};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'e> {
    /// The name of a source.
    Name(&'e str),

    /// The contents of a quoted literal, without quotes.
    Literal(&'e str),

    Number(Number),

    Plus,
    Star,
    Caret,
    Open,
    Close,
}

/// A token, together with the byte offset of the token in the expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme<'e> {
    pub token: Token<'e>,
    pub at: usize,
}

fn name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn name_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Whether `name` may be written as the name of a source.
pub fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if name_start(c) => chars.all(name_continue),
        _ => false,
    }
}

/// Splits `expression` into lexemes, skipping whitespace.
pub fn tokenize(expression: &str) -> Result<Vec<Lexeme<'_>>, err::ParseError> {
    let mut lexemes = Vec::default();
    let mut chars = expression.char_indices().peekable();

    while let Some((at, c)) = chars.next() {
        let token = match c {
            _ if c.is_whitespace() => continue,

            '+' => Token::Plus,
            '*' => Token::Star,
            '^' => Token::Caret,
            '(' => Token::Open,
            ')' => Token::Close,

            '\'' | '"' => {
                let quote = c;
                let start = at + c.len_utf8();
                let end = loop {
                    match chars.next() {
                        Some((end, c)) if c == quote => break end,
                        Some(_) => {}
                        None => return Err(err::ParseError::UnterminatedLiteral(at)),
                    }
                };
                Token::Literal(&expression[start..end])
            }

            _ if c.is_ascii_digit() => {
                let mut end = at + c.len_utf8();
                while let Some((next_at, next)) = chars.peek() {
                    if next.is_ascii_digit() {
                        end = next_at + next.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                match expression[at..end].parse::<Number>() {
                    Ok(number) => Token::Number(number),
                    Err(_) => return Err(err::ParseError::NumberTooLarge(at)),
                }
            }

            _ if name_start(c) => {
                let mut end = at + c.len_utf8();
                while let Some((next_at, next)) = chars.peek() {
                    if name_continue(*next) {
                        end = next_at + next.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                Token::Name(&expression[at..end])
            }

            _ => return Err(err::ParseError::UnexpectedCharacter(at)),
        };

        lexemes.push(Lexeme { token, at });
    }

    Ok(lexemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(expression: &str) -> Vec<Token<'_>> {
        tokenize(expression)
            .unwrap()
            .into_iter()
            .map(|lexeme| lexeme.token)
            .collect()
    }

    #[test]
    fn operators() {
        assert_eq!(
            tokens("(a+b) * c^2"),
            vec![
                Token::Open,
                Token::Name("a"),
                Token::Plus,
                Token::Name("b"),
                Token::Close,
                Token::Star,
                Token::Name("c"),
                Token::Caret,
                Token::Number(2),
            ]
        );
    }

    #[test]
    fn literals() {
        assert_eq!(
            tokens(r#"'01' + "a'b" * ''"#),
            vec![
                Token::Literal("01"),
                Token::Plus,
                Token::Literal("a'b"),
                Token::Star,
                Token::Literal(""),
            ]
        );

        assert_eq!(
            tokenize("a + 'open"),
            Err(err::ParseError::UnterminatedLiteral(4))
        );
    }

    #[test]
    fn names() {
        assert_eq!(
            tokens("word_list-2 wörter _x"),
            vec![
                Token::Name("word_list-2"),
                Token::Name("wörter"),
                Token::Name("_x"),
            ]
        );

        assert!(is_name("nouns"));
        assert!(is_name("_plural-nouns2"));
        assert!(!is_name("2nouns"));
        assert!(!is_name("-nouns"));
        assert!(!is_name("big nouns"));
        assert!(!is_name(""));
    }

    #[test]
    fn positions() {
        let lexemes = tokenize("  ab *  12").unwrap();
        let positions = lexemes.iter().map(|lexeme| lexeme.at).collect::<Vec<_>>();
        assert_eq!(positions, vec![2, 5, 8]);
    }

    #[test]
    fn errors() {
        assert_eq!(tokenize("a - b"), Err(err::ParseError::UnexpectedCharacter(2)));
        assert_eq!(
            tokenize("a ^ 1000000000000000000000000000000000000000"),
            Err(err::ParseError::NumberTooLarge(4))
        );
    }
}

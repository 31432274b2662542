//! Evaluation of an expression, by recursive descent over its lexemes.
//!
//! ```text
//! sum      := product ( '+' product )*
//! product  := power ( '*' power )*
//! power    := atom ( '^' atom )?
//! atom     := NAME | LITERAL | NUMBER | '(' sum ')'
//! ```

use crate::{
    builder::{
        lexer::{Lexeme, Token},
        Builder,
    },
    misc::log::targets::{self},
    place::{Number, Place},
    types::err::{self, ErrorKind, Operation},
};

/// The value of a (sub)expression.
pub(super) enum Operand<T> {
    Place(Place<T>),
    Number(Number),
}

pub(super) struct Evaluation<'b, 'e, T> {
    builder: &'b Builder<T>,
    lexemes: Vec<Lexeme<'e>>,
    position: usize,
    /// The byte length of the expression, used as the position of the end of the expression.
    end: usize,
    /// The count of currently open groups.
    nesting: usize,
}

impl<'b, 'e, T> Evaluation<'b, 'e, T>
where
    T: From<char> + Clone + Send + Sync + 'static,
{
    pub(super) fn new(builder: &'b Builder<T>, lexemes: Vec<Lexeme<'e>>, end: usize) -> Self {
        Evaluation {
            builder,
            lexemes,
            position: 0,
            end,
            nesting: 0,
        }
    }

    /// Evaluates the whole expression, which must be a place.
    pub(super) fn place(mut self) -> Result<Place<T>, ErrorKind> {
        if self.lexemes.is_empty() {
            return Err(err::ParseError::Empty.into());
        }

        let value = self.sum()?;

        if let Some(lexeme) = self.lexemes.get(self.position) {
            return Err(err::ParseError::TrailingInput(lexeme.at).into());
        }

        match value {
            Operand::Place(place) => Ok(place),
            Operand::Number(_) => Err(err::BuildError::TypeMismatch(Operation::Result).into()),
        }
    }

    fn peek(&self) -> Option<&Token<'e>> {
        self.lexemes.get(self.position).map(|lexeme| &lexeme.token)
    }

    /// The position of the current lexeme, or the end of the expression.
    fn at(&self) -> usize {
        match self.lexemes.get(self.position) {
            Some(lexeme) => lexeme.at,
            None => self.end,
        }
    }

    fn sum(&mut self) -> Result<Operand<T>, ErrorKind> {
        let mut value = self.product()?;

        while let Some(Token::Plus) = self.peek() {
            self.position += 1;
            let next = self.product()?;

            value = match (value, next) {
                (Operand::Place(first), Operand::Place(second)) => {
                    Operand::Place(self.builder.concat(first, second)?)
                }
                _ => return Err(err::BuildError::TypeMismatch(Operation::Concatenation).into()),
            };
        }

        Ok(value)
    }

    fn product(&mut self) -> Result<Operand<T>, ErrorKind> {
        let mut value = self.power()?;

        while let Some(Token::Star) = self.peek() {
            self.position += 1;
            let next = self.power()?;

            value = match (value, next) {
                (Operand::Place(left), Operand::Place(right)) => {
                    Operand::Place(self.builder.product(left, right)?)
                }
                _ => return Err(err::BuildError::TypeMismatch(Operation::Product).into()),
            };
        }

        Ok(value)
    }

    fn power(&mut self) -> Result<Operand<T>, ErrorKind> {
        let value = self.atom()?;

        // At most one exponent, so `a ^ 2 ^ 3` stops at the second `^`.
        let Some(Token::Caret) = self.peek() else {
            return Ok(value);
        };
        self.position += 1;
        let exponent = self.atom()?;

        match (value, exponent) {
            (Operand::Place(place), Operand::Number(exponent)) => {
                Ok(Operand::Place(self.builder.power(place, exponent)?))
            }
            _ => Err(err::BuildError::TypeMismatch(Operation::Power).into()),
        }
    }

    fn atom(&mut self) -> Result<Operand<T>, ErrorKind> {
        let at = self.at();
        let Some(token) = self.peek().cloned() else {
            return Err(err::ParseError::UnexpectedToken(at).into());
        };
        self.position += 1;

        match token {
            Token::Name(name) => Ok(Operand::Place(self.builder.place(name)?)),

            Token::Literal(text) => {
                let symbols = text.chars().map(T::from).collect::<Vec<T>>();
                log::trace!(target: targets::BUILDER, "Literal of {} symbols at {at}", symbols.len());
                Ok(Operand::Place(Place::leaf(symbols)))
            }

            Token::Number(number) => Ok(Operand::Number(number)),

            Token::Open => {
                self.nesting += 1;
                let limit = self.builder.config().depth_limit.value;
                if self.nesting > limit {
                    return Err(err::BuildError::DepthLimit {
                        depth: self.nesting,
                        limit,
                    }
                    .into());
                }

                let value = self.sum()?;

                match self.peek() {
                    Some(Token::Close) => {
                        self.position += 1;
                        self.nesting -= 1;
                        Ok(value)
                    }
                    None => Err(err::ParseError::UnclosedGroup(at).into()),
                    Some(_) => Err(err::ParseError::UnexpectedToken(self.at()).into()),
                }
            }

            Token::Plus | Token::Star | Token::Caret | Token::Close => {
                Err(err::ParseError::UnexpectedToken(at).into())
            }
        }
    }
}

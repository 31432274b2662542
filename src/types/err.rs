//! Error types used in the library.
//!
//! - All errors are immediate: no partial result is returned alongside an error, and nothing is retried.
//! - Errors from a [place](crate::place) follow from asking for a digit a place does not have, or from a place which cannot represent any number.
//! - Errors from the [builder](crate::builder) follow from expressions which do not describe a place.
//!
//! Names of the error enums overlap with the area of the library they relate to.
//  As such, throughout the library err::{self} is used to prefix use of the types with `err::`.

use crate::place::Base;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Config(ConfigError),
    Convert(ConvertError),
    Parse(ParseError),
    Place(PlaceError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(e) => write!(f, "Build error: {e}"),
            Self::Config(e) => write!(f, "Config error: {e}"),
            Self::Convert(e) => write!(f, "Convert error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Place(e) => write!(f, "Place error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when looking up a digit of a place.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaceError {
    /// A digit outside of `[0, base)` was requested.
    OutOfRange { index: Base, base: Base },

    /// A place with base zero (or base one, for a non-zero number) was used as a radix, or a place with base zero was the right place of a product.
    /// No number can be written with zero digits, and only zero can be written with one digit.
    /// The digits of a product are split by the base of its right place.
    Degenerate,

    /// The base of a composition does not fit in a [Base].
    BaseOverflow,
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { index, base } => {
                write!(f, "digit {index} is out of range for base {base}")
            }
            Self::Degenerate => write!(f, "a place of base zero (or one) was used as a divisor"),
            Self::BaseOverflow => write!(f, "the base of the composition is too large"),
        }
    }
}

impl From<PlaceError> for ErrorKind {
    fn from(e: PlaceError) -> Self {
        ErrorKind::Place(e)
    }
}

/// Errors when converting a number.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConvertError {
    /// The number to convert was negative.
    NegativeNumber,
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeNumber => write!(f, "only non-negative numbers may be converted"),
        }
    }
}

impl From<ConvertError> for ErrorKind {
    fn from(e: ConvertError) -> Self {
        ErrorKind::Convert(e)
    }
}

/// An operation of the expression language, noted when the operands of the operation are of the wrong type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    /// `+`
    Concatenation,

    /// `*`
    Product,

    /// `^`
    Power,

    /// The value of a complete expression, which must be a place.
    Result,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Concatenation => write!(f, "concatenation"),
            Self::Product => write!(f, "product"),
            Self::Power => write!(f, "power"),
            Self::Result => write!(f, "result"),
        }
    }
}

/// Errors when building a place from an expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// An operand was not a place where a place was required, or not a number where a number was required.
    TypeMismatch(Operation),

    /// A name without a source.
    UnknownSource(String),

    /// A second source was added with the same name.
    DuplicateSource(String),

    /// A source name which could not be written in an expression.
    InvalidSourceName(String),

    /// A composition exceeded the configured depth limit.
    DepthLimit { depth: usize, limit: usize },

    /// A place raised to the power zero.
    ZeroExponent,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch(operation) => write!(f, "mismatched operand types for {operation}"),
            Self::UnknownSource(name) => write!(f, "no source named '{name}'"),
            Self::DuplicateSource(name) => write!(f, "a source named '{name}' already exists"),
            Self::InvalidSourceName(name) => write!(f, "'{name}' is not a valid source name"),
            Self::DepthLimit { depth, limit } => {
                write!(f, "composition depth {depth} exceeds the limit of {limit}")
            }
            Self::ZeroExponent => write!(f, "a place may not be raised to the power zero"),
        }
    }
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during parsing of an expression.
///
/// Positions are byte offsets into the expression.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty expression, where some non-empty expression was required.
    Empty,

    /// A character which does not begin any token.
    UnexpectedCharacter(usize),

    /// A token where some other token was required, or the end of the expression.
    UnexpectedToken(usize),

    /// A quoted literal without a closing quote.
    UnterminatedLiteral(usize),

    /// An opening parenthesis without a matching close.
    UnclosedGroup(usize),

    /// Some tokens remain after a complete expression.
    TrailingInput(usize),

    /// A number too large to be represented.
    NumberTooLarge(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty expression"),
            Self::UnexpectedCharacter(at) => write!(f, "unexpected character at {at}"),
            Self::UnexpectedToken(at) => write!(f, "unexpected token at {at}"),
            Self::UnterminatedLiteral(at) => write!(f, "unterminated literal from {at}"),
            Self::UnclosedGroup(at) => write!(f, "unclosed parenthesis from {at}"),
            Self::TrailingInput(at) => write!(f, "trailing input from {at}"),
            Self::NumberTooLarge(at) => write!(f, "number too large at {at}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when configuring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of the named option.
    OutOfBounds(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds(name) => write!(f, "value out of bounds for {name}"),
        }
    }
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

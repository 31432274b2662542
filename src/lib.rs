//! A library to aid in creating passphrases.
//!
//! Rather than looking up each roll of some dice in a single list of words (as in the Diceware method), sensidice treats a (large) random number as written in a programmer-defined, composite, radix.
//! Each 'digit' of the radix is drawn from some list of symbols (words, syllables, characters, …), and lists may be combined so a single digit denotes, say, an adjective followed by a noun.
//! The result is a structured sequence of symbols, e.g. a sentence-like passphrase, with an entropy fixed by the structure chosen.
//!
//! # Orientation
//!
//! The library is built around a [place](crate::place::Place), a 'digital place' with a base and a lookup from digits to symbols.
//!
//! - A [leaf](crate::place::Place::leaf) wraps any [sequence of symbols](crate::place::Symbols).
//! - Two places may be [concatenated](crate::place::concat), giving a place whose digits are the digits of the first followed by the digits of the second.
//! - Two places may be [multiplied](crate::place::product), giving a place whose digits are all pairs of digits from the two places.
//! - A number is [converted](crate::place::Place::convert) through a place to an ordered list of symbols.
//!
//! At no point is the (potentially vast) collection of digits of a composite place enumerated.
//! Instead, a digit is found by arithmetic on indices, in time proportional to the depth of the composition.
//!
//! Places may also be described by expressions over named word lists through a [builder](crate::builder), e.g. `digits + adjectives * nouns`.
//!
//! Sourcing randomness, and loading word lists, is left to the caller.
//!
//! # Examples
//!
//! + Convert a number through decimal digits.
//!
//! ```rust
//! # use sensidice::place::Place;
//! let decimal = Place::leaf("0123456789");
//!
//! assert_eq!(decimal.convert(0), Ok(vec!['0']));
//! assert_eq!(decimal.convert(10), Ok(vec!['1', '0']));
//! ```
//!
//! + Convert a number through a composite place.
//!
//! ```rust
//! # use sensidice::place::{concat, product, Place};
//! # use sensidice::types::err::ErrorKind;
//! # fn main() -> Result<(), ErrorKind> {
//! let pairs = product(Place::leaf("ab"), Place::leaf("AB"))?;
//! let place = concat(Place::leaf("01"), pairs)?;
//!
//! assert_eq!(place.base(), 6);
//! assert_eq!(place.convert(2)?, vec!['a', 'A']);
//! assert_eq!(place.convert(5)?, vec!['b', 'B']);
//! assert_eq!(place.convert(6)?, vec!['1', '0']);
//! # Ok(())
//! # }
//! ```
//!
//! + Build a place from an expression over word lists.
//!
//! ```rust
//! # use sensidice::builder::Builder;
//! # use sensidice::config::Config;
//! # use sensidice::types::err::ErrorKind;
//! # fn main() -> Result<(), ErrorKind> {
//! let mut builder: Builder<String> = Builder::from_config(Config::default());
//! builder.add_source("adjective", ["red", "quiet"].map(String::from).to_vec())?;
//! builder.add_source("noun", ["fox", "lamp", "tree"].map(String::from).to_vec())?;
//!
//! let place = builder.build("adjective * noun")?;
//! assert_eq!(place.base(), 6);
//! assert_eq!(place.convert(4)?, vec!["quiet", "lamp"]);
//! assert_eq!(place.convert(10)?, vec!["red", "lamp", "quiet", "lamp"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with the targets listed in [misc::log], and no logger is provided.
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/) conversions may be followed with `RUST_LOG=conversion=trace …`.

pub mod builder;
pub mod config;
pub mod misc;
pub mod place;
pub mod types;

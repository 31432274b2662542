/*!
Tools for building a place from an expression.

A [Builder] holds a collection of named [sources of symbols](crate::place::Symbols), and composes places from expressions over those names.

# Expressions

- A name denotes a leaf over the source with that name.
- A quoted literal, e.g. `'01'` or `"ab"`, denotes a leaf over the characters of the literal.
- `+` denotes [concatenation](crate::place::concat), and `*` denotes [product](crate::place::product).
- `^` raises a place to a (whole number) power, so `noun ^ 3` is the same as `noun * noun * noun`.
- Parentheses group.

As usual, `^` binds tighter than `*`, which binds tighter than `+`, and `+` and `*` group to the left.
An atom takes at most one exponent, so `noun ^ 2 ^ 3` is malformed, while `(noun ^ 2) ^ 3` is fine.

Operands are checked as an expression is evaluated.
A number on either side of `+` or `*`, a place as an exponent, or an expression which is a number and not a place, is a [type mismatch](crate::types::err::BuildError::TypeMismatch).

Each composition is checked against the [depth limit](crate::config::Config::depth_limit) of the builder.

# Examples

```rust
# use sensidice::builder::Builder;
# use sensidice::config::Config;
# use sensidice::types::err::ErrorKind;
# fn main() -> Result<(), ErrorKind> {
let mut builder: Builder<String> = Builder::from_config(Config::default());
builder.add_source("size", ["big", "small"].map(String::from).to_vec())?;
builder.add_source("animal", ["cat", "dog", "owl"].map(String::from).to_vec())?;

let place = builder.build("'01' + size * animal")?;
assert_eq!(place.base(), 2 + 2 * 3);
assert_eq!(place.convert(2)?, vec!["big", "cat"]);
assert_eq!(place.convert(8 + 5)?, vec!["1", "small", "cat"]);

let triple = builder.build("animal ^ 3")?;
assert_eq!(triple.base(), 27);
assert_eq!(triple.convert(26)?, vec!["owl", "owl", "owl"]);
# Ok(())
# }
```

Mismatched operands are rejected.

```rust
# use sensidice::builder::Builder;
# use sensidice::config::Config;
# use sensidice::types::err::{BuildError, ErrorKind, Operation};
let builder: Builder<char> = Builder::from_config(Config::default());

assert_eq!(
    builder.build("'01' + 2").map(|place| place.base()),
    Err(ErrorKind::Build(BuildError::TypeMismatch(Operation::Concatenation)))
);
```
*/

mod expression;
mod lexer;

pub use lexer::is_name;

use std::{collections::HashMap, sync::Arc};

use crate::{
    config::Config,
    misc::log::targets::{self},
    place::{Number, Place, Symbols},
    types::err::{self, ErrorKind},
};

/// A named source, shared by each leaf over the source.
type SharedSource<T> = Arc<dyn Symbols<Symbol = T> + Send + Sync>;

/// A collection of named sources, from which places are built.
pub struct Builder<T> {
    config: Config,
    sources: HashMap<String, SharedSource<T>>,
}

impl<T: 'static> Builder<T> {
    pub fn from_config(config: Config) -> Self {
        Builder {
            config,
            sources: HashMap::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Adds `source` with `name`.
    ///
    /// Names are as [is_name], and each name may be used at most once.
    pub fn add_source<S>(&mut self, name: impl Into<String>, source: S) -> Result<(), ErrorKind>
    where
        S: Symbols<Symbol = T> + Send + Sync + 'static,
    {
        let name = name.into();

        if !is_name(&name) {
            return Err(err::BuildError::InvalidSourceName(name).into());
        }

        if self.sources.contains_key(&name) {
            return Err(err::BuildError::DuplicateSource(name).into());
        }

        log::trace!(target: targets::BUILDER, "Source '{name}' of {} symbols", source.length());
        self.sources.insert(name, Arc::new(source));
        Ok(())
    }

    /// The names of all sources, in no particular order.
    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// A leaf over the source with `name`.
    pub fn place(&self, name: &str) -> Result<Place<T>, ErrorKind> {
        match self.sources.get(name) {
            Some(source) => Ok(Place::shared_leaf(Arc::clone(source))),
            None => {
                log::debug!(target: targets::BUILDER, "Unknown source '{name}'");
                Err(err::BuildError::UnknownSource(name.to_string()).into())
            }
        }
    }

    fn check_depth(&self, a: &Place<T>, b: &Place<T>) -> Result<(), err::BuildError> {
        let depth = 1 + a.depth().max(b.depth());
        let limit = self.config.depth_limit.value;

        match depth <= limit {
            true => Ok(()),
            false => Err(err::BuildError::DepthLimit { depth, limit }),
        }
    }

    /// The concatenation of `first` and `second`, within the depth limit.
    pub fn concat(&self, first: Place<T>, second: Place<T>) -> Result<Place<T>, ErrorKind> {
        self.check_depth(&first, &second)?;
        Place::concat(first, second)
    }

    /// The product of `left` and `right`, within the depth limit.
    pub fn product(&self, left: Place<T>, right: Place<T>) -> Result<Place<T>, ErrorKind> {
        self.check_depth(&left, &right)?;
        Place::product(left, right)
    }

    /// The product of `exponent` copies of `place`, within the depth limit.
    pub fn power(&self, place: Place<T>, exponent: Number) -> Result<Place<T>, ErrorKind>
    where
        T: Clone,
    {
        if exponent == 0 {
            return Err(err::BuildError::ZeroExponent.into());
        }

        let mut power = place.clone();
        for _ in 1..exponent {
            power = self.product(power, place.clone())?;
        }

        Ok(power)
    }

    /// The place described by `expression`.
    pub fn build(&self, expression: &str) -> Result<Place<T>, ErrorKind>
    where
        T: From<char> + Clone + Send + Sync,
    {
        let lexemes = lexer::tokenize(expression)?;
        let evaluation = expression::Evaluation::new(self, lexemes, expression.len());

        match evaluation.place() {
            Ok(place) => {
                log::info!(target: targets::BUILDER, "Built '{expression}' with base {} and depth {}", place.base(), place.depth());
                Ok(place)
            }

            Err(e) => {
                log::debug!(target: targets::BUILDER, "Failed to build '{expression}': {e}");
                Err(e)
            }
        }
    }
}

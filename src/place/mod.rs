/*!
Digital places, and their composition.

A (digital) place is something with a *base* and a lookup from *digits* (indices in `[0, base)`) to symbols.
Places are one of:
- A [Leaf], backed directly by some [source of symbols](Symbols).
  The base of a leaf is the length of the source, and the digit *i* is the *i*th symbol of the source.
- A [Concatenation] of two places.
  The base is the sum of the two bases, and the digits are the digits of the first place followed by the digits of the second place.
- A [Product] of two places.
  The base is the product of the two bases, and each digit is a pair of digits, one from each place.

A digit of a leaf is a single symbol, while a digit of a composite place may be any number of symbols.
So, a digit is always given as a flat list of symbols, in order from left to right.
In particular, a digit of the product of products `(A ⊗ B) ⊗ C` is `[a, b, c]` and not `[[a, b], c]`.

```rust
# use sensidice::place::{concat, product, Place};
# use sensidice::types::err::{self, ErrorKind};
# fn main() -> Result<(), ErrorKind> {
let place = concat(Place::leaf("01"), product(Place::leaf("ab"), Place::leaf("AB"))?)?;

assert_eq!(place.base(), 2 + 2 * 2);
assert_eq!(place.digit(1)?, vec!['1']);
assert_eq!(place.digit(3)?, vec!['a', 'B']);

assert_eq!(
    place.digit(6),
    Err(ErrorKind::from(err::PlaceError::OutOfRange { index: 6, base: 6 }))
);
# Ok(())
# }
```

Places are immutable once built, and lookups never enumerate digits.
The time to lookup a digit is bounded by the [depth](Place::depth) of the place.

The sources of leaves are reference counted, and so a place may be cloned (or a source reused) without copying any symbols.
Otherwise, a composite place owns the places it is composed of.
*/

mod concatenation;
mod convert;
mod leaf;
mod product;
mod symbols;

pub use concatenation::Concatenation;
pub use convert::Number;
pub use leaf::Leaf;
pub use product::Product;
pub use symbols::Symbols;

use crate::types::err::{self};

/// The base of a place, and the type of digits.
pub type Base = u128;

/// A digital place.
#[derive(Clone)]
pub enum Place<T> {
    Leaf(Leaf<T>),
    Concatenation(Concatenation<T>),
    Product(Product<T>),
}

impl<T> Place<T> {
    /// A place whose digits are the symbols of `source`, in order.
    ///
    /// An empty source is permitted, though the resulting place has no digits and so can not be used to [convert](Place::convert) a number.
    pub fn leaf<S>(source: S) -> Self
    where
        S: Symbols<Symbol = T> + Send + Sync + 'static,
    {
        Place::Leaf(Leaf::new(source))
    }

    /// A leaf over a source which is already shared.
    pub(crate) fn shared_leaf(source: std::sync::Arc<dyn Symbols<Symbol = T> + Send + Sync>) -> Self {
        Place::Leaf(Leaf::from_shared(source))
    }

    /// The concatenation of `first` and `second`.
    ///
    /// Fails only if the sum of the bases exceeds [Base::MAX].
    pub fn concat(first: Place<T>, second: Place<T>) -> Result<Self, err::ErrorKind> {
        Ok(Place::Concatenation(Concatenation::new(first, second)?))
    }

    /// The (cartesian) product of `left` and `right`.
    ///
    /// Fails only if the product of the bases exceeds [Base::MAX].
    pub fn product(left: Place<T>, right: Place<T>) -> Result<Self, err::ErrorKind> {
        Ok(Place::Product(Product::new(left, right)?))
    }

    /// The count of digits of the place.
    pub fn base(&self) -> Base {
        match self {
            Place::Leaf(leaf) => leaf.base(),
            Place::Concatenation(concatenation) => concatenation.base(),
            Place::Product(product) => product.base(),
        }
    }

    /// The depth of the composition, with a leaf having depth one.
    pub fn depth(&self) -> usize {
        match self {
            Place::Leaf(_) => 1,
            Place::Concatenation(concatenation) => {
                1 + concatenation.first().depth().max(concatenation.second().depth())
            }
            Place::Product(product) => 1 + product.left().depth().max(product.right().depth()),
        }
    }

    /// The symbols of the digit `index`.
    pub fn digit(&self, index: Base) -> Result<Vec<T>, err::ErrorKind> {
        let mut symbols = Vec::default();
        self.push_digit(index, &mut symbols)?;
        Ok(symbols)
    }

    /// Appends the symbols of the digit `index` to `symbols`.
    ///
    /// On an error `symbols` is left as it was.
    pub fn digit_into(&self, index: Base, symbols: &mut Vec<T>) -> Result<(), err::ErrorKind> {
        let mark = symbols.len();
        match self.push_digit(index, symbols) {
            Ok(()) => Ok(()),
            Err(e) => {
                symbols.truncate(mark);
                Err(e.into())
            }
        }
    }

    pub(crate) fn push_digit(&self, index: Base, symbols: &mut Vec<T>) -> Result<(), err::PlaceError> {
        match self {
            Place::Leaf(leaf) => leaf.push_digit(index, symbols),
            Place::Concatenation(concatenation) => concatenation.push_digit(index, symbols),
            Place::Product(product) => product.push_digit(index, symbols),
        }
    }
}

impl<T> std::fmt::Debug for Place<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Place::Leaf(leaf) => std::fmt::Debug::fmt(leaf, f),
            Place::Concatenation(concatenation) => std::fmt::Debug::fmt(concatenation, f),
            Place::Product(product) => std::fmt::Debug::fmt(product, f),
        }
    }
}

/// The concatenation of `first` and `second`, see [Place::concat].
pub fn concat<T>(first: Place<T>, second: Place<T>) -> Result<Place<T>, err::ErrorKind> {
    Place::concat(first, second)
}

/// The (cartesian) product of `left` and `right`, see [Place::product].
pub fn product<T>(left: Place<T>, right: Place<T>) -> Result<Place<T>, err::ErrorKind> {
    Place::product(left, right)
}

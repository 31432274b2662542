/*!
Sources of symbols.

A source of symbols is anything with a finite length whose elements may be read by index, in order.
The [Symbols] trait captures this, and is implemented for the usual suspects:

- Slices, arrays, and vectors, whose symbols are (clones of) their elements.
- Strings, whose symbols are characters.
- Half-open ranges of unsigned integers, whose symbols are the integers of the range (e.g. the faces of a die, `1..7`).
- References to, boxes of, and (atomically) reference counted sources.

```rust
# use sensidice::place::Symbols;
let die = 1..7_u8;
assert_eq!(die.length(), 6);
assert_eq!(die.at(0), Some(1));
assert_eq!(die.at(6), None);

let letters = "ab";
assert_eq!(letters.at(1), Some('b'));
```

Symbols are returned by value, and so sources over borrowed elements clone on read.
*/

use std::{ops::Range, sync::Arc};

/// An ordered, finite, source of symbols indexed from zero.
pub trait Symbols {
    /// The symbols of the source.
    type Symbol;

    /// The count of symbols in the source.
    fn length(&self) -> usize;

    /// The symbol at `index`, if `index` is less than the length of the source.
    fn at(&self, index: usize) -> Option<Self::Symbol>;
}

impl<T: Clone> Symbols for [T] {
    type Symbol = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone, const N: usize> Symbols for [T; N] {
    type Symbol = T;

    fn length(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> Symbols for Vec<T> {
    type Symbol = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

/// Characters are not indexed directly in a str, and so both methods are linear in the length of the str.
/// A [leaf](crate::place::Place::leaf) stores the length of a source on creation, so this is only a concern when reading a symbol.
impl Symbols for str {
    type Symbol = char;

    fn length(&self) -> usize {
        self.chars().count()
    }

    fn at(&self, index: usize) -> Option<char> {
        self.chars().nth(index)
    }
}

impl Symbols for String {
    type Symbol = char;

    fn length(&self) -> usize {
        self.as_str().length()
    }

    fn at(&self, index: usize) -> Option<char> {
        self.as_str().at(index)
    }
}

macro_rules! range_symbols {
    ($($t:ty),*) => {
        $(
            impl Symbols for Range<$t> {
                type Symbol = $t;

                fn length(&self) -> usize {
                    usize::try_from(self.end.saturating_sub(self.start)).unwrap_or(usize::MAX)
                }

                fn at(&self, index: usize) -> Option<$t> {
                    if index < self.length() {
                        <$t>::try_from(index).ok().map(|offset| self.start + offset)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

range_symbols!(u8, u16, u32, u64, usize);

impl<S: Symbols + ?Sized> Symbols for &S {
    type Symbol = S::Symbol;

    fn length(&self) -> usize {
        (**self).length()
    }

    fn at(&self, index: usize) -> Option<S::Symbol> {
        (**self).at(index)
    }
}

impl<S: Symbols + ?Sized> Symbols for Box<S> {
    type Symbol = S::Symbol;

    fn length(&self) -> usize {
        (**self).length()
    }

    fn at(&self, index: usize) -> Option<S::Symbol> {
        (**self).at(index)
    }
}

impl<S: Symbols + ?Sized> Symbols for Arc<S> {
    type Symbol = S::Symbol;

    fn length(&self) -> usize {
        (**self).length()
    }

    fn at(&self, index: usize) -> Option<S::Symbol> {
        (**self).at(index)
    }
}

/*!
Conversion of a number to symbols, through a place.

A place of base *b* is used as the radix of a positional numeral system, with each digit written as the symbols of the digit in the place.
As usual, the most significant digit is written first.

```rust
# use sensidice::place::Place;
# use sensidice::types::err::ErrorKind;
# fn main() -> Result<(), ErrorKind> {
let die = Place::leaf(1..7_u8);

// Two rolls of a die, read as a number in base six.
assert_eq!(die.convert(0)?, vec![1]);
assert_eq!(die.convert(6 * 3 + 5)?, vec![4, 6]);
# Ok(())
# }
```

A number less than the base of a place is written with a single digit, and so converts to the symbols of that digit.
In particular, zero converts to the symbols of the digit zero.

A place of base zero has no digits, and a place of base one can write only zero.
Conversion through such a place is [degenerate](crate::types::err::PlaceError::Degenerate).
*/

use crate::{
    misc::log::targets::{self},
    place::{Base, Place},
    types::err::{self},
};

/// The type of numbers which may be converted.
pub type Number = u128;

impl<T> Place<T> {
    /// The digits of `number` written in the base of the place, most significant first.
    pub fn indices<N: TryInto<Number>>(&self, number: N) -> Result<Vec<Base>, err::ErrorKind> {
        let mut number: Number = match number.try_into() {
            Ok(number) => number,
            Err(_) => return Err(err::ConvertError::NegativeNumber.into()),
        };

        let base = self.base();
        match base {
            0 => {
                log::debug!(target: targets::CONVERSION, "Conversion through a place of base zero");
                return Err(err::PlaceError::Degenerate.into());
            }

            // Division by one never reduces a number, so only zero may be written.
            1 if number > 0 => {
                log::debug!(target: targets::CONVERSION, "Conversion of {number} through a place of base one");
                return Err(err::PlaceError::Degenerate.into());
            }

            _ => {}
        }

        let mut indices = Vec::default();
        loop {
            indices.push(number % base);
            if number < base {
                break;
            }
            number /= base;
        }
        indices.reverse();

        Ok(indices)
    }

    /// The symbols of `number` written in the base of the place.
    ///
    /// The symbols of each digit are given in order, with the symbols of the most significant digit first.
    pub fn convert<N: TryInto<Number>>(&self, number: N) -> Result<Vec<T>, err::ErrorKind> {
        let indices = self.indices(number)?;
        log::trace!(target: targets::CONVERSION, "Digits {indices:?} in base {}", self.base());

        let mut symbols = Vec::with_capacity(indices.len());
        for index in indices {
            self.push_digit(index, &mut symbols)?;
        }

        Ok(symbols)
    }
}

use crate::{
    misc::log::targets::{self},
    place::{Base, Place},
    types::err::{self},
};

/// All ordered pairs of digits from two places.
///
/// The digit *i* is the pair of the digit *i* / *r* of the left place and the digit *i* mod *r* of the right place, where *r* is the base of the right place.
/// So, the digits of the right place vary fastest, as with the least significant digit of a number.
///
/// The symbols of a pair are the symbols of the left digit followed by the symbols of the right digit, without nesting.
#[derive(Clone)]
pub struct Product<T> {
    left: Box<Place<T>>,
    right: Box<Place<T>>,
    base: Base,
}

impl<T> Product<T> {
    pub(super) fn new(left: Place<T>, right: Place<T>) -> Result<Self, err::PlaceError> {
        let base = match left.base().checked_mul(right.base()) {
            Some(base) => base,
            None => {
                log::debug!(target: targets::PLACE, "Product of {} and {} overflows", left.base(), right.base());
                return Err(err::PlaceError::BaseOverflow);
            }
        };

        log::trace!(target: targets::PLACE, "Product of {} and {} to {base}", left.base(), right.base());

        Ok(Product {
            left: Box::new(left),
            right: Box::new(right),
            base,
        })
    }

    pub fn base(&self) -> Base {
        self.base
    }

    /// The place of the more significant digit of each pair.
    pub fn left(&self) -> &Place<T> {
        &self.left
    }

    /// The place of the less significant digit of each pair.
    pub fn right(&self) -> &Place<T> {
        &self.right
    }

    /// Digits are split by the base of the right place, so a right place of base zero is degenerate.
    pub(super) fn push_digit(&self, index: Base, symbols: &mut Vec<T>) -> Result<(), err::PlaceError> {
        let right_base = self.right.base();
        if right_base == 0 {
            log::debug!(target: targets::PLACE, "Lookup of {index} in a product with a right place of base zero");
            return Err(err::PlaceError::Degenerate);
        }

        if index >= self.base {
            return Err(err::PlaceError::OutOfRange {
                index,
                base: self.base,
            });
        }

        let (left_index, right_index) = (index / right_base, index % right_base);

        self.left.push_digit(left_index, symbols)?;
        self.right.push_digit(right_index, symbols)
    }
}

impl<T> std::fmt::Debug for Product<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Product")
            .field("base", &self.base)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

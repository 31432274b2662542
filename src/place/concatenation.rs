use crate::{
    misc::log::targets::{self},
    place::{Base, Place},
    types::err::{self},
};

/// The disjoint union of the digits of two places.
///
/// Digits `[0, first)` are those of the first place, and digits `[first, first + second)` those of the second place, offset by the base of the first place.
#[derive(Clone)]
pub struct Concatenation<T> {
    first: Box<Place<T>>,
    second: Box<Place<T>>,
    base: Base,
}

impl<T> Concatenation<T> {
    pub(super) fn new(first: Place<T>, second: Place<T>) -> Result<Self, err::PlaceError> {
        let base = match first.base().checked_add(second.base()) {
            Some(base) => base,
            None => {
                log::debug!(target: targets::PLACE, "Concatenation of {} and {} overflows", first.base(), second.base());
                return Err(err::PlaceError::BaseOverflow);
            }
        };

        log::trace!(target: targets::PLACE, "Concatenation of {} and {} to {base}", first.base(), second.base());

        Ok(Concatenation {
            first: Box::new(first),
            second: Box::new(second),
            base,
        })
    }

    pub fn base(&self) -> Base {
        self.base
    }

    /// The place whose digits come first.
    pub fn first(&self) -> &Place<T> {
        &self.first
    }

    /// The place whose digits come second.
    pub fn second(&self) -> &Place<T> {
        &self.second
    }

    pub(super) fn push_digit(&self, index: Base, symbols: &mut Vec<T>) -> Result<(), err::PlaceError> {
        let first_base = self.first.base();
        if index < first_base {
            return self.first.push_digit(index, symbols);
        }

        let offset = index - first_base;
        if offset < self.second.base() {
            self.second.push_digit(offset, symbols)
        } else {
            Err(err::PlaceError::OutOfRange {
                index,
                base: self.base,
            })
        }
    }
}

impl<T> std::fmt::Debug for Concatenation<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Concatenation")
            .field("base", &self.base)
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

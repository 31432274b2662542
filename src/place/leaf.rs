use std::sync::Arc;

use crate::{
    place::{Base, Symbols},
    types::err::{self},
};

/// A place backed by a source of symbols.
///
/// The length of the source is read once, on creation, and the source is never written to.
#[derive(Clone)]
pub struct Leaf<T> {
    source: Arc<dyn Symbols<Symbol = T> + Send + Sync>,
    length: usize,
}

impl<T> Leaf<T> {
    pub(super) fn new<S>(source: S) -> Self
    where
        S: Symbols<Symbol = T> + Send + Sync + 'static,
    {
        Leaf::from_shared(Arc::new(source))
    }

    /// A leaf over a source which is already shared, without a further layer of indirection.
    pub(crate) fn from_shared(source: Arc<dyn Symbols<Symbol = T> + Send + Sync>) -> Self {
        let length = source.length();
        Leaf { source, length }
    }

    /// The length of the source.
    pub fn base(&self) -> Base {
        self.length as Base
    }

    pub(super) fn push_digit(&self, index: Base, symbols: &mut Vec<T>) -> Result<(), err::PlaceError> {
        let symbol = match usize::try_from(index) {
            Ok(index) if index < self.length => self.source.at(index),
            _ => None,
        };

        match symbol {
            Some(symbol) => {
                symbols.push(symbol);
                Ok(())
            }

            None => Err(err::PlaceError::OutOfRange {
                index,
                base: self.base(),
            }),
        }
    }
}

impl<T> std::fmt::Debug for Leaf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Leaf").field("length", &self.length).finish()
    }
}

use crate::types::err::{self};

/// A named option, with a value bounded (inclusively) by a min and max.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        if self.min <= value && value <= self.max {
            self.value = value;
            Ok(())
        } else {
            Err(err::ConfigError::OutOfBounds(self.name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded() {
        let mut option = ConfigOption {
            name: "test",
            min: 1,
            max: 4,
            value: 2,
        };

        assert_eq!(option.min_max(), (1, 4));

        assert!(option.set(4).is_ok());
        assert_eq!(option.value, 4);

        assert_eq!(option.set(0), Err(err::ConfigError::OutOfBounds("test")));
        assert_eq!(option.set(5), Err(err::ConfigError::OutOfBounds("test")));
        assert_eq!(option.value, 4);
    }
}

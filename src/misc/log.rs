/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to help follow how a place is composed and how a number is converted.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the composition of [places](crate::place)
    pub const PLACE: &str = "place";

    /// Logs related to [conversion](crate::place::Place::convert)
    pub const CONVERSION: &str = "conversion";

    /// Logs related to the [builder](crate::builder)
    pub const BUILDER: &str = "builder";
}

/*!
Configuration of a [builder](crate::builder).

All configuration is contained within [Config], and each configurable value is a [ConfigOption], which pairs the value with a name and bounds.

```rust
# use sensidice::config::Config;
let mut config = Config::default();
assert!(config.depth_limit.set(8).is_ok());
assert!(config.depth_limit.set(0).is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum depth of a place composed by a builder.
    ///
    /// Looking up a digit recurses through the composition, and so the depth of a place bounds the depth of recursion.
    pub depth_limit: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            depth_limit: ConfigOption {
                name: "depth_limit",
                min: 1,
                max: 4096,
                value: 64,
            },
        }
    }
}

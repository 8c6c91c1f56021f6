//! Construction-time settings shared by [`OrderedList`](crate::OrderedList)
//! and [`OrderedMap`](crate::OrderedMap).

use crate::Error;

/// Upper bound accepted for [`CollectionConfig::initial_capacity`].
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Configuration for a collection instance.
///
/// All fields have sensible defaults via [`CollectionConfig::default()`].
/// The configuration is validated when passed to a `with_config` constructor.
///
/// # Example
///
/// ```rust
/// use ordo::CollectionConfig;
///
/// let config = CollectionConfig {
///     initial_capacity: 128,
///     ..CollectionConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionConfig {
    /// Number of slots reserved up front.
    ///
    /// Default: 0. Must be ≤ [`MAX_INITIAL_CAPACITY`].
    pub initial_capacity: usize,

    /// Tombstone-to-slot ratio above which an [`OrderedMap`](crate::OrderedMap)
    /// compacts its slot vector after a removal.
    ///
    /// Default: 0.3. Must be in (0.0, 1.0). A tombstone share can never
    /// exceed 1.0, so 1.0 would disable compaction.
    pub tombstone_compaction_ratio: f64,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            tombstone_compaction_ratio: 0.3,
        }
    }
}

impl CollectionConfig {
    /// Validates all configuration parameters.
    pub fn validate(&self) -> Result<(), Error> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(Error::InvalidConfig(format!(
                "initial_capacity must be <= {MAX_INITIAL_CAPACITY}"
            )));
        }
        // NaN fails both comparisons, so check the accepted range positively.
        if !(self.tombstone_compaction_ratio > 0.0 && self.tombstone_compaction_ratio < 1.0) {
            return Err(Error::InvalidConfig(
                "tombstone_compaction_ratio must be in (0.0, 1.0)".into(),
            ));
        }
        Ok(())
    }
}

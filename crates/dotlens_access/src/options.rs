//! Provide the policy switches of an accessor.

use serde::{Deserialize, Serialize};

/// Policy applied by every `get`/`set` of an accessor.
///
/// Field names follow the camel case used by host configuration files, so
/// options can be loaded with `serde_json`. Missing fields keep their
/// defaults.
///
/// # Examples
///
/// ```
/// use dotlens_access::AccessOptions;
///
/// let options = AccessOptions::new().expandable(false).throw_errors(false);
/// assert!(!options.is_immutable);
/// assert!(!options.is_expandable);
///
/// let loaded: AccessOptions = serde_json::from_str(r#"{ "isImmutable": true }"#).unwrap();
/// assert_eq!(loaded, AccessOptions::new().immutable(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AccessOptions {
    /// Turns every write into a no-op.
    pub is_immutable: bool,
    /// Lets writes create missing intermediate containers.
    pub is_expandable: bool,
    /// Reports unresolvable paths as errors instead of `None`.
    pub throw_errors: bool,
}

impl Default for AccessOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl AccessOptions {
    /// Mutable, expandable, throwing.
    #[inline]
    pub const fn new() -> Self {
        Self {
            is_immutable: false,
            is_expandable: true,
            throw_errors: true,
        }
    }

    /// Sets [`is_immutable`](Self::is_immutable).
    #[inline]
    pub const fn immutable(mut self, value: bool) -> Self {
        self.is_immutable = value;
        self
    }

    /// Sets [`is_expandable`](Self::is_expandable).
    #[inline]
    pub const fn expandable(mut self, value: bool) -> Self {
        self.is_expandable = value;
        self
    }

    /// Sets [`throw_errors`](Self::throw_errors).
    #[inline]
    pub const fn throw_errors(mut self, value: bool) -> Self {
        self.throw_errors = value;
        self
    }

    /// Returns `true` if writes may create containers.
    #[inline]
    pub(crate) const fn vivifies(&self) -> bool {
        !self.is_immutable && self.is_expandable
    }
}

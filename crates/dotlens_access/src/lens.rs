//! Provide accessor objects bound to a target.

use dotlens_path::DotPath;
use serde_json::Value;

use crate::error::InvalidPath;
use crate::options::AccessOptions;
use crate::resolve;

// -----------------------------------------------------------------------------
// PathLens

/// A dot-path accessor over a borrowed [`Value`].
///
/// The lens never copies its target; every `get` and `set` walks the target
/// again, so changes made through the lens or before it was created are
/// always visible. Its options are fixed at creation.
///
/// # Examples
///
/// ```
/// use dotlens_access::{AccessOptions, PathLens};
/// use serde_json::json;
///
/// let mut target = json!({ "a": 1, "b": 2 });
///
/// let mut lens = PathLens::new(&mut target);
/// lens.set("c.cA", json!(true)).unwrap();
/// lens.set("d.0.a", json!("test")).unwrap();
/// assert_eq!(lens.get("d.0.a").unwrap(), Some(&json!("test")));
///
/// let mut frozen = PathLens::with_options(&mut target, AccessOptions::new().immutable(true));
/// assert_eq!(frozen.set("a", json!(10)).unwrap(), None);
///
/// assert_eq!(
///     target,
///     json!({ "a": 1, "b": 2, "c": { "cA": true }, "d": [{ "a": "test" }] })
/// );
/// ```
#[derive(Debug)]
pub struct PathLens<'t> {
    target: &'t mut Value,
    options: AccessOptions,
}

impl<'t> PathLens<'t> {
    /// Creates a lens with default [`AccessOptions`].
    #[inline]
    pub fn new(target: &'t mut Value) -> Self {
        Self::with_options(target, AccessOptions::default())
    }

    /// Creates a lens with the given options.
    #[inline]
    pub fn with_options(target: &'t mut Value, options: AccessOptions) -> Self {
        Self { target, options }
    }

    /// Returns the options fixed at creation.
    #[inline]
    pub fn options(&self) -> &AccessOptions {
        &self.options
    }

    /// Returns the whole target.
    #[inline]
    pub fn target(&self) -> &Value {
        &*self.target
    }

    /// Returns the whole target for direct edits.
    #[inline]
    pub fn target_mut(&mut self) -> &mut Value {
        &mut *self.target
    }

    /// Releases the borrow of the target.
    #[inline]
    pub fn into_inner(self) -> &'t mut Value {
        self.target
    }

    /// See [`get`](crate::get).
    #[inline]
    pub fn get<'p>(&self, path: impl Into<DotPath<'p>>) -> Result<Option<&Value>, InvalidPath> {
        resolve::get(&*self.target, path, &self.options)
    }

    /// See [`set`](crate::set).
    #[inline]
    pub fn set<'p>(
        &mut self,
        path: impl Into<DotPath<'p>>,
        value: Value,
    ) -> Result<Option<&Value>, InvalidPath> {
        resolve::set(&mut *self.target, path, value, &self.options)
    }
}

// -----------------------------------------------------------------------------
// Extension trait

/// Dot-path access directly on a [`Value`].
///
/// The `*_path` methods use the default [`AccessOptions`], the `*_path_with`
/// methods take them explicitly. For repeated access with the same options,
/// [`PathLens`] keeps them in one place.
///
/// # Examples
///
/// ```
/// use dotlens_access::{AccessOptions, ValuePathExt};
/// use serde_json::json;
///
/// let mut config = json!({});
/// config.set_path("server.ports.0", json!(8080)).unwrap();
/// assert_eq!(config, json!({ "server": { "ports": [8080] } }));
///
/// let quiet = AccessOptions::new().throw_errors(false);
/// assert_eq!(config.get_path_with("server.host", &quiet).unwrap(), None);
/// ```
pub trait ValuePathExt {
    /// Reads the value at `path`.
    fn get_path<'p>(&self, path: impl Into<DotPath<'p>>) -> Result<Option<&Value>, InvalidPath>;

    /// Writes `value` at `path`.
    fn set_path<'p>(
        &mut self,
        path: impl Into<DotPath<'p>>,
        value: Value,
    ) -> Result<Option<&Value>, InvalidPath>;

    /// Reads the value at `path` with explicit options.
    fn get_path_with<'p>(
        &self,
        path: impl Into<DotPath<'p>>,
        options: &AccessOptions,
    ) -> Result<Option<&Value>, InvalidPath>;

    /// Writes `value` at `path` with explicit options.
    fn set_path_with<'p>(
        &mut self,
        path: impl Into<DotPath<'p>>,
        value: Value,
        options: &AccessOptions,
    ) -> Result<Option<&Value>, InvalidPath>;
}

impl ValuePathExt for Value {
    #[inline]
    fn get_path<'p>(&self, path: impl Into<DotPath<'p>>) -> Result<Option<&Value>, InvalidPath> {
        resolve::get(self, path, &AccessOptions::new())
    }

    #[inline]
    fn set_path<'p>(
        &mut self,
        path: impl Into<DotPath<'p>>,
        value: Value,
    ) -> Result<Option<&Value>, InvalidPath> {
        resolve::set(self, path, value, &AccessOptions::new())
    }

    #[inline]
    fn get_path_with<'p>(
        &self,
        path: impl Into<DotPath<'p>>,
        options: &AccessOptions,
    ) -> Result<Option<&Value>, InvalidPath> {
        resolve::get(self, path, options)
    }

    #[inline]
    fn set_path_with<'p>(
        &mut self,
        path: impl Into<DotPath<'p>>,
        value: Value,
        options: &AccessOptions,
    ) -> Result<Option<&Value>, InvalidPath> {
        resolve::set(self, path, value, options)
    }
}

#[cfg(test)]
mod tests {
    use super::{PathLens, ValuePathExt};
    use crate::options::AccessOptions;
    use alloc::string::String;
    use dotlens_path::DotPath;
    use serde_json::json;

    #[test]
    fn lens_sees_direct_changes() {
        let mut target = json!({ "a": 1 });
        let mut lens = PathLens::new(&mut target);

        lens.target_mut()["a"] = json!(2);
        assert_eq!(lens.get("a").unwrap(), Some(&json!(2)));

        let target = lens.into_inner();
        target["a"] = json!(3);
        assert_eq!(*target, json!({ "a": 3 }));
    }

    #[test]
    fn lens_options_are_kept() {
        let mut target = json!({});
        let options = AccessOptions::new().expandable(false).throw_errors(false);
        let mut lens = PathLens::with_options(&mut target, options);

        assert_eq!(lens.options(), &options);
        assert_eq!(lens.set("x.y", json!(1)).unwrap(), None);
        assert_eq!(lens.get("x.y").unwrap(), None);
        assert_eq!(lens.target(), &json!({}));
    }

    #[test]
    fn reuse_parsed_path() {
        let path = DotPath::parse("items.0.name");
        let mut target = json!({});
        let mut lens = PathLens::new(&mut target);

        lens.set(&path, json!("first")).unwrap();
        assert_eq!(lens.get(&path).unwrap(), Some(&json!("first")));

        let owned = String::from("items.0.name");
        assert_eq!(lens.get(&owned).unwrap(), Some(&json!("first")));
        assert_eq!(lens.get(owned).unwrap(), Some(&json!("first")));
    }

    #[test]
    fn extension_trait() {
        let mut value = json!({ "a": { "b": [] } });

        assert_eq!(value.set_path("a.b.1", json!(true)).unwrap(), Some(&json!(true)));
        assert_eq!(value.get_path("a.b").unwrap(), Some(&json!([null, true])));
        assert!(value.get_path("a.c").is_err());

        let frozen = AccessOptions::new().immutable(true);
        assert_eq!(value.set_path_with("a.b", json!(0), &frozen).unwrap(), None);
        assert_eq!(value, json!({ "a": { "b": [null, true] } }));
    }
}

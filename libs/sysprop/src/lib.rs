//! Property store abstraction for the ks01lte init helper
//!
//! Android keeps boot-time configuration in a process-wide table of string
//! properties. This crate models that table as the [`PropertyStore`] trait so
//! the override policy can run against the real platform store on device and
//! against a [`MemoryStore`] in tests and host tooling.
//!
//! # Backends
//!
//! - [`MemoryStore`]: ordered in-memory table, used by tests and the host CLI
//! - `bionic::SystemProperties`: the platform store, only built for Android
//!
//! # Override semantics
//!
//! [`property_override`] is the single write path used by the policy code:
//!
//! | key present | `add`   | effect            |
//! |-------------|---------|-------------------|
//! | yes         | any     | value replaced    |
//! | no          | `true`  | property created  |
//! | no          | `false` | nothing           |

#![warn(missing_docs)]

#[cfg(target_os = "android")]
pub mod bionic;
mod memory;
pub mod prop_file;

pub use memory::{Change, MemoryStore, changes};
pub use prop_file::PropFileError;

/// A boot-time key/value table of string properties.
///
/// Keys are unique. Mutators are only ever called by [`property_override`],
/// which guarantees `update` targets an existing key and `add` a missing one.
pub trait PropertyStore {
    /// Current value of `key`, or `None` when the property does not exist
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value of an existing property
    fn update(&mut self, key: &str, value: &str);

    /// Create a property that does not exist yet
    fn add(&mut self, key: &str, value: &str);

    /// Whether `key` exists in the store
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Value of `key`, falling back to `default` when absent
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// What a single [`property_override`] call did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Override {
    /// The key existed and its value was replaced
    Updated,
    /// The key was missing and has been created
    Added,
    /// The key was missing and insertion was disabled
    Skipped,
}

/// Set `key` to `value`, creating the property only when `add` is set.
///
/// A missing key with `add == false` is a silent no-op, not an error.
pub fn property_override<S>(store: &mut S, key: &str, value: &str, add: bool) -> Override
where
    S: PropertyStore + ?Sized,
{
    let outcome = if store.contains(key) {
        store.update(key, value);
        Override::Updated
    } else if add {
        store.add(key, value);
        Override::Added
    } else {
        Override::Skipped
    };

    log::debug!("{key}={value} ({outcome:?})");
    outcome
}

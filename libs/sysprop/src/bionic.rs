//! Platform property store backed by bionic's property area
//!
//! Uses the private `__system_property_*` entry points that init itself uses
//! while loading properties. `update` and `add` bypass the property service
//! and its `ro.*` write-once rule, so this backend is only meaningful inside
//! init before the property service starts.

use std::ffi::{CStr, CString, c_char, c_void};

use libc::{c_int, c_uint};

use crate::PropertyStore;

/// Opaque `prop_info` record in the shared property area
#[repr(C)]
struct PropInfo {
    _private: [u8; 0],
}

type ReadCallback =
    unsafe extern "C" fn(cookie: *mut c_void, name: *const c_char, value: *const c_char, serial: u32);

unsafe extern "C" {
    fn __system_property_find(name: *const c_char) -> *const PropInfo;
    fn __system_property_read_callback(
        pi: *const PropInfo,
        callback: ReadCallback,
        cookie: *mut c_void,
    );
    fn __system_property_update(pi: *mut PropInfo, value: *const c_char, len: c_uint) -> c_int;
    fn __system_property_add(
        name: *const c_char,
        namelen: c_uint,
        value: *const c_char,
        valuelen: c_uint,
    ) -> c_int;
}

unsafe extern "C" fn copy_value(
    cookie: *mut c_void,
    _name: *const c_char,
    value: *const c_char,
    _serial: u32,
) {
    // SAFETY: cookie is the `&mut Option<String>` passed by `read`, value is a
    // NUL-terminated string owned by bionic for the duration of the call.
    unsafe {
        let out = &mut *cookie.cast::<Option<String>>();
        *out = Some(CStr::from_ptr(value).to_string_lossy().into_owned());
    }
}

fn c_string(s: &str) -> Option<CString> {
    CString::new(s)
        .inspect_err(|_| log::warn!("Property string contains NUL byte: {s:?}"))
        .ok()
}

fn c_len(s: &CString) -> Option<c_uint> {
    c_uint::try_from(s.as_bytes().len()).ok()
}

/// Handle to the process-wide property area.
#[derive(Debug, Default)]
pub struct SystemProperties {
    _priv: (),
}

impl SystemProperties {
    /// Attach to the already-initialised property area
    pub fn new() -> Self {
        Self::default()
    }

    fn find(key: &CString) -> *const PropInfo {
        // SAFETY: key is a valid NUL-terminated string.
        unsafe { __system_property_find(key.as_ptr()) }
    }
}

impl PropertyStore for SystemProperties {
    fn get(&self, key: &str) -> Option<String> {
        let key = c_string(key)?;
        let pi = Self::find(&key);
        if pi.is_null() {
            return None;
        }

        let mut value: Option<String> = None;
        // SAFETY: pi came from __system_property_find and the cookie outlives
        // the synchronous callback.
        unsafe {
            __system_property_read_callback(pi, copy_value, (&raw mut value).cast::<c_void>());
        }
        value
    }

    fn update(&mut self, key: &str, value: &str) {
        let (Some(key_c), Some(value_c)) = (c_string(key), c_string(value)) else {
            return;
        };
        let Some(len) = c_len(&value_c) else {
            return;
        };

        let pi = Self::find(&key_c).cast_mut();
        if pi.is_null() {
            return;
        }

        // SAFETY: pi points into the property area, which init maps writable.
        let rc = unsafe { __system_property_update(pi, value_c.as_ptr(), len) };
        if rc != 0 {
            log::warn!("Failed to update {key} (rc={rc})");
        }
    }

    fn add(&mut self, key: &str, value: &str) {
        let (Some(key_c), Some(value_c)) = (c_string(key), c_string(value)) else {
            return;
        };
        let (Some(key_len), Some(value_len)) = (c_len(&key_c), c_len(&value_c)) else {
            return;
        };

        // SAFETY: both strings are NUL-terminated and the lengths exclude the NUL.
        let rc =
            unsafe { __system_property_add(key_c.as_ptr(), key_len, value_c.as_ptr(), value_len) };
        if rc != 0 {
            log::warn!("Failed to add {key} (rc={rc})");
        }
    }

    fn contains(&self, key: &str) -> bool {
        c_string(key).is_some_and(|key| !Self::find(&key).is_null())
    }
}

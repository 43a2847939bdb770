//! Variant-specific property overrides for the Samsung Galaxy S4 LTE-A
//!
//! One build serves several ks01lte variants (international I9506 and the
//! Korean SKT, KT and LG U+ models). Early in boot init calls
//! `vendor_load_properties`, which reads `ro.bootloader`, picks the matching
//! [`Variant`] and rewrites the build fingerprint, device, model and product
//! properties so the rest of the system sees the right identity.
//!
//! ```
//! use ks01lte_init::vendor_load_properties;
//! use ks01lte_sysprop::{MemoryStore, PropertyStore};
//!
//! let mut store: MemoryStore = [
//!     ("ro.bootloader", "I9506XXUDRB1"),
//!     ("ro.product.device", "ks01lte"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let report = vendor_load_properties(&mut store);
//! assert_eq!(report.device, "ks01ltexx");
//! assert_eq!(store.get("ro.build.product").as_deref(), Some("ks01ltexx"));
//! ```

pub mod constants;
#[cfg(target_os = "android")]
mod hook;
pub mod product;
pub mod radio;
pub mod variant;

use ks01lte_sysprop::PropertyStore;

pub use product::{ro_product_prop_keys, set_ro_product_prop};
pub use radio::{
    CdmaProfile, GsmProfile, RadioProfile, cdma_properties, gsm_properties, rild_libpath,
    set_rild_libpath,
};
pub use variant::{VARIANTS, Variant};

use constants::{PROP_BOOTLOADER, PROP_PRODUCT_DEVICE};

/// Outcome of one [`vendor_load_properties`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// `ro.bootloader` as read, empty when unset
    pub bootloader: String,
    /// Variant that was applied, `None` for unrecognised hardware
    pub variant: Option<&'static Variant>,
    /// `ro.product.device` after the overrides, empty when unset
    pub device: String,
}

/// Detect the variant from `ro.bootloader` and apply its build identity.
///
/// Unrecognised bootloaders (emulators, other devices) leave the store
/// untouched.
pub fn vendor_load_properties<S>(store: &mut S) -> LoadReport
where
    S: PropertyStore + ?Sized,
{
    let bootloader = store.get_or(PROP_BOOTLOADER, "");

    let variant = Variant::detect(&bootloader);
    if let Some(variant) = variant {
        log::debug!(
            "Bootloader {bootloader} matches {} ({})",
            variant.bootloader_prefix,
            variant.device
        );
        variant.apply(store);
    }

    let device = store.get_or(PROP_PRODUCT_DEVICE, "");
    log::info!("Found bootloader {bootloader}. Setting build properties for {device}.");

    LoadReport {
        bootloader,
        variant,
        device,
    }
}

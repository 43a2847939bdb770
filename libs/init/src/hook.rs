//! Entry point linked into init
//!
//! init declares `void vendor_load_properties()` in C++, so the exported
//! symbol carries its Itanium-mangled name.

use ks01lte_sysprop::bionic::SystemProperties;

const LOG_TAG: &str = "libinit_ks01lte";

#[unsafe(export_name = "_Z22vendor_load_propertiesv")]
pub extern "C" fn vendor_load_properties_hook() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag(LOG_TAG),
    );

    let mut store = SystemProperties::new();
    crate::vendor_load_properties(&mut store);
}

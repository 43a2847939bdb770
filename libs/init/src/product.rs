//! `ro.product.*` fan-out across property sources

use ks01lte_sysprop::{PropertyStore, property_override};

use crate::constants::{RO_PRODUCT_NAMESPACE, RO_PRODUCT_PROPS_DEFAULT_SOURCE_ORDER};

/// Every namespaced key for a logical product property, in source order.
///
/// `ro_product_prop_keys("device")` yields `ro.product.device`,
/// `ro.product.product.device`, ... `ro.product.system_ext.device`.
pub fn ro_product_prop_keys(suffix: &str) -> impl Iterator<Item = String> + '_ {
    RO_PRODUCT_PROPS_DEFAULT_SOURCE_ORDER
        .iter()
        .map(move |source| format!("{RO_PRODUCT_NAMESPACE}{source}{suffix}"))
}

/// Override every existing source of `ro.product.<suffix>` with `value`.
///
/// Sources the image does not define are left absent.
pub fn set_ro_product_prop<S>(store: &mut S, suffix: &str, value: &str)
where
    S: PropertyStore + ?Sized,
{
    for key in ro_product_prop_keys(suffix) {
        property_override(store, &key, value, false);
    }
}

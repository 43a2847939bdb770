//! Hardware variants of the ks01lte family and their build identity

use ks01lte_sysprop::{PropertyStore, property_override};
use serde::Serialize;

use crate::constants::{PROP_BUILD_DESCRIPTION, PROP_BUILD_PRODUCT};
use crate::product::set_ro_product_prop;

/// Build identity of one hardware variant, selected by bootloader prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variant {
    /// Leading characters of `ro.bootloader` that identify the variant
    pub bootloader_prefix: &'static str,
    /// Stock build fingerprint
    pub fingerprint: &'static str,
    /// Device codename, also written to `ro.build.product`
    pub device: &'static str,
    /// Retail model number
    pub model: &'static str,
    /// Product name
    pub name: &'static str,
    /// Stock build description
    pub description: &'static str,
}

/// Known variants. Prefixes are disjoint, so at most one entry matches.
pub const VARIANTS: &[Variant] = &[
    Variant {
        bootloader_prefix: "I9506",
        fingerprint: "samsung/ks01ltexx/ks01lte:5.0.1/LRX22C/I9506XXUDRB1:user/release-keys",
        device: "ks01ltexx",
        model: "GT-I9506",
        name: "ks01lte",
        description: "ks01ltexx-user 5.0.1 LRX22C I9506XXUDRB1 release-keys",
    },
    Variant {
        bootloader_prefix: "E330S",
        fingerprint: "samsung/ks01lteskt/ks01lte:5.0.1/LRX22C/E330SKSUDPI2:user/release-keys",
        device: "ks01lteskt",
        model: "SHV-E330S",
        name: "ks01lteskt",
        // Matches the stock SKT build.prop, including its E300S typo.
        description: "ks01lteskt-user 5.0.1 LRX22C E300SKSUDPI2 release-keys",
    },
    Variant {
        bootloader_prefix: "E330K",
        fingerprint: "samsung/ks01ltektt/ks01lte:5.0.1/LRX22C/E330KKKUDPH1:user/release-keys",
        device: "ks01ltektt",
        model: "SHV-E330K",
        name: "ks01ltektt",
        description: "ks01ltektt-user 5.0.1 LRX22C E330KKKUDPH1 release-keys",
    },
    Variant {
        bootloader_prefix: "E330L",
        fingerprint: "samsung/ks01ltelgt/ks01lte:5.0.1/LRX22C/E330LKLUDPH4:user/release-keys",
        device: "ks01ltelgt",
        model: "SHV-E330L",
        name: "ks01ltelgt",
        description: "ks01ltelgt-user 5.0.1 LRX22C E330LKLUDPH4 release-keys",
    },
];

impl Variant {
    /// First variant whose prefix starts `bootloader`, if any
    pub fn detect(bootloader: &str) -> Option<&'static Variant> {
        VARIANTS
            .iter()
            .find(|variant| bootloader.starts_with(variant.bootloader_prefix))
    }

    /// Write this variant's identity into `store`.
    ///
    /// The four `ro.product.*` properties only replace sources the image
    /// already defines; the two `ro.build.*` properties are created if missing.
    pub fn apply<S>(&self, store: &mut S)
    where
        S: PropertyStore + ?Sized,
    {
        set_ro_product_prop(store, "build.fingerprint", self.fingerprint);
        set_ro_product_prop(store, "device", self.device);
        set_ro_product_prop(store, "model", self.model);
        set_ro_product_prop(store, "name", self.name);

        property_override(store, PROP_BUILD_DESCRIPTION, self.description, true);
        property_override(store, PROP_BUILD_PRODUCT, self.device, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_prefixes() {
        assert_eq!(Variant::detect("I9506XXUDRB1").map(|v| v.device), Some("ks01ltexx"));
        assert_eq!(Variant::detect("E330SKSUDPI2").map(|v| v.device), Some("ks01lteskt"));
        assert_eq!(Variant::detect("E330KKKUDPH1").map(|v| v.device), Some("ks01ltektt"));
        assert_eq!(Variant::detect("E330LKLUDPH4").map(|v| v.device), Some("ks01ltelgt"));
    }

    #[test]
    fn test_detect_exact_prefix() {
        assert_eq!(Variant::detect("I9506").map(|v| v.model), Some("GT-I9506"));
    }

    #[test]
    fn test_detect_unknown() {
        assert!(Variant::detect("").is_none());
        assert!(Variant::detect("UNKNOWN123").is_none());
        assert!(Variant::detect("I950").is_none());
        // Prefix match is anchored at the start
        assert!(Variant::detect("XI9506").is_none());
        // and case-sensitive
        assert!(Variant::detect("e330sksudpi2").is_none());
    }

    #[test]
    fn test_prefixes_are_disjoint() {
        for (i, a) in VARIANTS.iter().enumerate() {
            for (j, b) in VARIANTS.iter().enumerate() {
                if i != j {
                    assert!(
                        !a.bootloader_prefix.starts_with(b.bootloader_prefix),
                        "{} shadows {}",
                        b.bootloader_prefix,
                        a.bootloader_prefix
                    );
                }
            }
        }
    }

    #[test]
    fn test_fingerprint_embeds_device() {
        for variant in VARIANTS {
            assert!(
                variant
                    .fingerprint
                    .starts_with(&format!("samsung/{}/ks01lte:", variant.device)),
                "{}",
                variant.fingerprint
            );
            assert!(variant.description.starts_with(variant.device));
        }
    }
}

//! Telephony property blocks for CDMA and GSM carriers
//!
//! These are building blocks for carrier-specific setups. The variant
//! selector does not call them; whoever knows the carrier does.

use ks01lte_sysprop::{PropertyStore, property_override};
use serde::{Deserialize, Serialize};

use crate::constants::{
    CDMA_SUBSCRIPTION_TYPES, PROP_CDMA_OPERATOR_ALPHA, PROP_CDMA_OPERATOR_NUMERIC,
    PROP_DEFAULT_CDMA_SUB, PROP_DEFAULT_NETWORK, PROP_LTE_ON_CDMA, PROP_LTE_ON_GSM,
    PROP_RILD_LIBPATH, PROP_SUBSCRIPTION_TYPES, RILD_LIB_PREFIX, RILD_LIB_SUFFIX,
};

/// Carrier settings for a CDMA variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdmaProfile {
    pub operator_alpha: String,
    pub operator_numeric: String,
    pub default_cdma_sub: String,
    pub default_network: String,
    /// RIL blob variant, e.g. `imm` for `libsec-ril.imm.so`
    pub rild_lib_variant: String,
}

/// Carrier settings for a GSM variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GsmProfile {
    pub default_network: String,
    /// RIL blob variant, e.g. `imm` for `libsec-ril.imm.so`
    pub rild_lib_variant: String,
}

/// Either radio block, tagged by technology in serialized form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "technology", rename_all = "lowercase")]
pub enum RadioProfile {
    Cdma(CdmaProfile),
    Gsm(GsmProfile),
}

impl RadioProfile {
    /// Write the matching radio block into `store`
    pub fn apply<S>(&self, store: &mut S)
    where
        S: PropertyStore + ?Sized,
    {
        match self {
            Self::Cdma(profile) => cdma_properties(store, profile),
            Self::Gsm(profile) => gsm_properties(store, profile),
        }
    }
}

/// `/system/vendor/lib/libsec-ril.<variant>.so`
pub fn rild_libpath(variant: &str) -> String {
    format!("{RILD_LIB_PREFIX}{variant}{RILD_LIB_SUFFIX}")
}

/// Point rild at the RIL blob for `variant`. The path is not checked.
pub fn set_rild_libpath<S>(store: &mut S, variant: &str)
where
    S: PropertyStore + ?Sized,
{
    property_override(store, PROP_RILD_LIBPATH, &rild_libpath(variant), true);
}

/// Apply the CDMA block: carrier values, RIL path, then the static CDMA flags.
pub fn cdma_properties<S>(store: &mut S, profile: &CdmaProfile)
where
    S: PropertyStore + ?Sized,
{
    property_override(store, PROP_CDMA_OPERATOR_ALPHA, &profile.operator_alpha, true);
    property_override(store, PROP_CDMA_OPERATOR_NUMERIC, &profile.operator_numeric, true);
    property_override(store, PROP_DEFAULT_CDMA_SUB, &profile.default_cdma_sub, true);
    property_override(store, PROP_DEFAULT_NETWORK, &profile.default_network, true);
    set_rild_libpath(store, &profile.rild_lib_variant);

    property_override(store, PROP_SUBSCRIPTION_TYPES, CDMA_SUBSCRIPTION_TYPES, true);
    property_override(store, PROP_LTE_ON_CDMA, "1", true);
}

/// Apply the GSM block: RIL path, default network, then the static GSM flag.
pub fn gsm_properties<S>(store: &mut S, profile: &GsmProfile)
where
    S: PropertyStore + ?Sized,
{
    set_rild_libpath(store, &profile.rild_lib_variant);
    property_override(store, PROP_DEFAULT_NETWORK, &profile.default_network, true);

    property_override(store, PROP_LTE_ON_GSM, "1", true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ks01lte_sysprop::MemoryStore;

    fn cdma() -> CdmaProfile {
        CdmaProfile {
            operator_alpha: "Verizon".into(),
            operator_numeric: "311480".into(),
            default_cdma_sub: "0".into(),
            default_network: "10".into(),
            rild_lib_variant: "vzw".into(),
        }
    }

    #[test]
    fn test_rild_libpath() {
        let mut store = MemoryStore::new();
        set_rild_libpath(&mut store, "imm");

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get("vendor.rild.libpath").as_deref(),
            Some("/system/vendor/lib/libsec-ril.imm.so")
        );
    }

    #[test]
    fn test_rild_libpath_replaces_existing() {
        let mut store: MemoryStore = [("vendor.rild.libpath", "/vendor/lib/libril-qc.so")]
            .into_iter()
            .collect();
        set_rild_libpath(&mut store, "skt");
        assert_eq!(
            store.get("vendor.rild.libpath").as_deref(),
            Some("/system/vendor/lib/libsec-ril.skt.so")
        );
    }

    #[test]
    fn test_cdma_properties() {
        let mut store = MemoryStore::new();
        cdma_properties(&mut store, &cdma());

        let expected = [
            ("ril.subscription.types", "NV,RUIM"),
            ("ro.cdma.home.operator.alpha", "Verizon"),
            ("ro.cdma.home.operator.numeric", "311480"),
            ("ro.telephony.default_cdma_sub", "0"),
            ("ro.telephony.default_network", "10"),
            ("telephony.lteOnCdmaDevice", "1"),
            ("vendor.rild.libpath", "/system/vendor/lib/libsec-ril.vzw.so"),
        ];
        assert_eq!(store.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_gsm_properties() {
        let mut store = MemoryStore::new();
        gsm_properties(
            &mut store,
            &GsmProfile {
                default_network: "9".into(),
                rild_lib_variant: "imm".into(),
            },
        );

        let expected = [
            ("ro.telephony.default_network", "9"),
            ("telephony.lteOnGsmDevice", "1"),
            ("vendor.rild.libpath", "/system/vendor/lib/libsec-ril.imm.so"),
        ];
        assert_eq!(store.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_values_written_verbatim() {
        let mut store = MemoryStore::new();
        let profile = CdmaProfile {
            operator_alpha: String::new(),
            operator_numeric: "not-a-number".into(),
            ..cdma()
        };
        cdma_properties(&mut store, &profile);

        assert_eq!(store.get("ro.cdma.home.operator.alpha").as_deref(), Some(""));
        assert_eq!(
            store.get("ro.cdma.home.operator.numeric").as_deref(),
            Some("not-a-number")
        );
    }

    #[test]
    fn test_radio_profile_dispatch() {
        let mut store = MemoryStore::new();
        RadioProfile::Cdma(cdma()).apply(&mut store);
        assert_eq!(store.get("telephony.lteOnCdmaDevice").as_deref(), Some("1"));
        assert!(!store.contains("telephony.lteOnGsmDevice"));
    }

    #[test]
    fn test_radio_profile_json_tag() {
        let profile: RadioProfile = serde_json::from_str(
            r#"{"technology": "gsm", "default_network": "9", "rild_lib_variant": "imm"}"#,
        )
        .unwrap();
        assert_eq!(
            profile,
            RadioProfile::Gsm(GsmProfile {
                default_network: "9".into(),
                rild_lib_variant: "imm".into(),
            })
        );
    }
}

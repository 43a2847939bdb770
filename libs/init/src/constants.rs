//! Property names and fixed values written by the init helper
//!
//! Keys are grouped by the block that writes them.

// ============================================================================
// Variant selection
// ============================================================================

/// Bootloader identifier reported by the firmware, e.g. `I9506XXUDRB1`
pub const PROP_BOOTLOADER: &str = "ro.bootloader";

/// Device name read back for the boot log line
pub const PROP_PRODUCT_DEVICE: &str = "ro.product.device";

/// Human-readable build description
pub const PROP_BUILD_DESCRIPTION: &str = "ro.build.description";

/// Build product, set to the device name
pub const PROP_BUILD_PRODUCT: &str = "ro.build.product";

/// Namespace shared by every `ro.product.*` source
pub const RO_PRODUCT_NAMESPACE: &str = "ro.product.";

/// Source order used by `build/tools/releasetools/ota_from_target_files.py`,
/// with a trailing `.` on each entry and the unprefixed source first.
pub const RO_PRODUCT_PROPS_DEFAULT_SOURCE_ORDER: &[&str] = &[
    "",
    "product.",
    "product_services.",
    "odm.",
    "vendor.",
    "system.",
    "system_ext.",
];

// ============================================================================
// Radio interface layer
// ============================================================================

/// Path of the vendor RIL library loaded by rild
pub const PROP_RILD_LIBPATH: &str = "vendor.rild.libpath";

/// Directory and file prefix of the Samsung RIL blobs
pub const RILD_LIB_PREFIX: &str = "/system/vendor/lib/libsec-ril.";

/// File suffix of the Samsung RIL blobs
pub const RILD_LIB_SUFFIX: &str = ".so";

/// Preferred network type
pub const PROP_DEFAULT_NETWORK: &str = "ro.telephony.default_network";

/// CDMA home operator name
pub const PROP_CDMA_OPERATOR_ALPHA: &str = "ro.cdma.home.operator.alpha";

/// CDMA home operator MCC+MNC
pub const PROP_CDMA_OPERATOR_NUMERIC: &str = "ro.cdma.home.operator.numeric";

/// CDMA subscription source
pub const PROP_DEFAULT_CDMA_SUB: &str = "ro.telephony.default_cdma_sub";

/// Subscription sources offered by the CDMA modem
pub const PROP_SUBSCRIPTION_TYPES: &str = "ril.subscription.types";

/// Fixed value of [`PROP_SUBSCRIPTION_TYPES`] on CDMA variants
pub const CDMA_SUBSCRIPTION_TYPES: &str = "NV,RUIM";

/// Marks the device as LTE on CDMA
pub const PROP_LTE_ON_CDMA: &str = "telephony.lteOnCdmaDevice";

/// Marks the device as LTE on GSM
pub const PROP_LTE_ON_GSM: &str = "telephony.lteOnGsmDevice";

//! Denomination conversion from chain base units to display units
//!
//! Reward and supply figures arrive in base units (`ulava`, `aevmos`, ...).
//! Unknown denominations pass through with their amount unchanged.

/// A base denomination and its conversion into display units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DenomConversion {
    pub base_denom: &'static str,
    pub display_denom: &'static str,
    pub factor: f64,
}

const DENOM_CONVERSIONS: &[DenomConversion] = &[
    conv("ulava", "lava", 1e6),
    conv("uatom", "atom", 1e6),
    conv("ustars", "stars", 1e6),
    conv("uakt", "akt", 1e6),
    conv("uhuahua", "huahua", 1e6),
    conv("uevmos", "evmos", 1e18),
    conv("aevmos", "evmos", 1e18),
    conv("inj", "inj", 1e18),
    conv("basecro", "cro", 1e8),
    conv("uscrt", "scrt", 1e6),
    conv("uiris", "iris", 1e6),
    conv("uregen", "regen", 1e6),
    conv("uion", "ion", 1e6),
    conv("nanolike", "like", 1e9),
    conv("uaxl", "axl", 1e6),
    conv("uband", "band", 1e6),
    conv("ubld", "bld", 1e6),
    conv("ucmdx", "cmdx", 1e6),
    conv("ucre", "cre", 1e6),
    conv("uxprt", "xprt", 1e6),
    conv("uusdc", "usdc", 1e6),
];

const fn conv(base_denom: &'static str, display_denom: &'static str, factor: f64) -> DenomConversion {
    DenomConversion {
        base_denom,
        display_denom,
        factor,
    }
}

/// Look up the conversion for a base denomination
pub fn lookup(denom: &str) -> Option<&'static DenomConversion> {
    DENOM_CONVERSIONS.iter().find(|c| c.base_denom == denom)
}

/// Convert an amount in `denom` into display units
///
/// # Examples
/// ```
/// use lava_burn_stats::utils::denom::to_display_units;
///
/// assert_eq!(to_display_units(985_088_593_000_000.0, "ulava"), (985_088_593.0, "lava".to_string()));
/// assert_eq!(to_display_units(5.0, "ufoo"), (5.0, "ufoo".to_string()));
/// ```
pub fn to_display_units(amount: f64, denom: &str) -> (f64, String) {
    match lookup(denom) {
        Some(conversion) => (amount / conversion.factor, conversion.display_denom.to_string()),
        None => (amount, denom.to_string()),
    }
}

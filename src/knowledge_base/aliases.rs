//! Alias table: raw classifier label variants → canonical keys
//!
//! Keys are stored in normalized form (trimmed, lower-case, spaces and
//! hyphens as underscores) so lookups stay exact.

use super::entries::FALLBACK_NUTRIENT_KEY;

pub static ALIASES: &[(&str, &str)] = &[
    // Nutrient short forms
    ("n_deficiency", "nitrogen_deficiency"),
    ("p_deficiency", "phosphorus_deficiency"),
    ("k_deficiency", "potassium_deficiency"),
    ("fe_deficiency", "iron_deficiency"),
    ("mg_deficiency", "magnesium_deficiency"),
    ("ca_deficiency", "calcium_deficiency"),
    ("nitrogen", "nitrogen_deficiency"),
    ("phosphorus", "phosphorus_deficiency"),
    ("potassium", "potassium_deficiency"),
    ("iron", "iron_deficiency"),
    ("magnesium", "magnesium_deficiency"),
    ("calcium", "calcium_deficiency"),
    // CoLeaf nutrient classifier class codes
    ("n", "nitrogen_deficiency"),
    ("p", "phosphorus_deficiency"),
    ("k", "potassium_deficiency"),
    ("fe", "iron_deficiency"),
    ("mg", "magnesium_deficiency"),
    ("ca", "calcium_deficiency"),
    // CoLeaf classes without a dedicated record share the generic nutrient entry
    ("mn", FALLBACK_NUTRIENT_KEY),
    ("b", FALLBACK_NUTRIENT_KEY),
    ("zn", FALLBACK_NUTRIENT_KEY),
    ("healthy", FALLBACK_NUTRIENT_KEY),
    // Fungal variants
    ("powdery", "powdery_mildew"),
    ("mildew", "powdery_mildew"),
    ("early_blight_tomato", "early_blight"),
    ("late_blight_tomato", "late_blight"),
    ("leaf_spot_fungal", "leaf_spot"),
    ("bacterial_spot_tomato", "bacterial_spot"),
    // Plant-specific disease labels ("{plant}_with_{disease}")
    ("grape_with_black_rot", "leaf_spot"),
    ("tomato_with_late_blight", "late_blight"),
    ("squash_with_powdery_mildew", "powdery_mildew"),
    ("cedar_apple_rust", "leaf_spot"),
    ("grape_with_esca_(black_measles)", "leaf_spot"),
    ("tomato_with_early_blight", "early_blight"),
    ("potato_with_late_blight", "late_blight"),
    ("potato_with_early_blight", "early_blight"),
    ("apple_with_black_rot", "leaf_spot"),
    ("apple_with_cedar_apple_rust", "leaf_spot"),
    ("corn_with_common_rust", "leaf_spot"),
    ("tomato_with_bacterial_spot", "bacterial_spot"),
    ("pepper_with_bacterial_spot", "bacterial_spot"),
];

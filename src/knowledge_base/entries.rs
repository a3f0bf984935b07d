//! Embedded agronomy records
//!
//! Compiled-in default knowledge base. Severity indicators are ordered
//! mild, moderate, severe.

use crate::types::Category;

/// Canonical key of the generic nutrient fallback record
pub const FALLBACK_NUTRIENT_KEY: &str = "general_nutrient_deficiency";

/// Canonical key of the generic environmental-stress fallback record
pub const FALLBACK_STRESS_KEY: &str = "general_plant_stress";

/// A compiled-in knowledge base record
#[derive(Debug, Clone, Copy)]
pub struct StaticEntry {
    pub key: &'static str,
    pub category: Category,
    pub subcategory: &'static str,
    pub name: &'static str,
    pub symptoms: &'static [&'static str],
    pub causes: &'static [&'static str],
    pub treatment: &'static [&'static str],
    pub severity_indicators: [&'static str; 3],
}

/// Display names for the nutrient symbols used as subcategories
pub static NUTRIENT_NAMES: &[(&str, &str)] = &[
    ("N", "Nitrogen"),
    ("P", "Phosphorus"),
    ("K", "Potassium"),
    ("Fe", "Iron"),
    ("Mg", "Magnesium"),
    ("Ca", "Calcium"),
    ("Mn", "Manganese"),
    ("B", "Boron"),
    ("Zn", "Zinc"),
];

// ============================================================================
// EMBEDDED RECORDS
// ============================================================================

pub static ENTRIES: &[StaticEntry] = &[
    // ------------------------------------------------------------------
    // NUTRIENT DEFICIENCIES
    // ------------------------------------------------------------------
    StaticEntry {
        key: "nitrogen_deficiency",
        category: Category::NutrientDeficiency,
        subcategory: "N",
        name: "Nitrogen Deficiency",
        symptoms: &[
            "Yellowing of older leaves (chlorosis) starting from leaf tips",
            "Stunted growth and smaller leaves",
            "Pale green to yellow color throughout plant",
            "Older leaves drop prematurely",
            "Reduced flowering and fruiting",
        ],
        causes: &[
            "Poor soil fertility or depleted nitrogen levels",
            "Excessive rainfall leaching nitrogen from soil",
            "Sandy soils with low organic matter",
            "Over-cropping without replenishing nutrients",
            "Cold soil temperatures limiting nitrogen availability",
        ],
        treatment: &[
            "Apply nitrogen-rich fertilizers (urea, ammonium nitrate, or blood meal)",
            "Use organic compost or well-rotted manure",
            "Apply foliar spray with diluted liquid nitrogen fertilizer",
            "Plant nitrogen-fixing cover crops (legumes)",
            "Mulch to reduce nitrogen leaching",
            "Split fertilizer applications for better absorption",
        ],
        severity_indicators: ["Slight yellowing of lower leaves", "Widespread yellowing and stunted growth", "Significant leaf drop and extremely stunted growth"],
    },
    StaticEntry {
        key: "phosphorus_deficiency",
        category: Category::NutrientDeficiency,
        subcategory: "P",
        name: "Phosphorus Deficiency",
        symptoms: &[
            "Dark green or purplish discoloration of leaves",
            "Purple or reddish tints on leaf undersides and stems",
            "Stunted root development",
            "Delayed maturity and flowering",
            "Small, dark leaves with reduced growth",
        ],
        causes: &[
            "Low phosphorus availability in acidic or alkaline soils",
            "Cold soil temperatures reducing phosphorus uptake",
            "High iron or aluminum in soil binding phosphorus",
            "Compacted soil limiting root growth",
            "Insufficient organic matter",
        ],
        treatment: &[
            "Apply phosphorus-rich fertilizers (superphosphate, bone meal)",
            "Add rock phosphate for long-term phosphorus supply",
            "Adjust soil pH to 6.0-7.0 for optimal phosphorus availability",
            "Incorporate compost to improve soil structure",
            "Use mycorrhizal inoculants to enhance phosphorus uptake",
            "Avoid over-watering which can leach phosphorus",
        ],
        severity_indicators: ["Slight purple tinting on leaf edges", "Widespread purpling and reduced growth", "Severe stunting with dark purple leaves"],
    },
    StaticEntry {
        key: "potassium_deficiency",
        category: Category::NutrientDeficiency,
        subcategory: "K",
        name: "Potassium Deficiency",
        symptoms: &[
            "Yellowing and browning of leaf margins (necrosis)",
            "Scorched or burnt appearance on leaf edges",
            "Weak stems prone to lodging or breaking",
            "Reduced disease resistance",
            "Poor fruit and flower development",
            "Curling or cupping of leaves",
        ],
        causes: &[
            "Sandy or light soils with low potassium retention",
            "Excessive calcium or magnesium interfering with potassium uptake",
            "High nitrogen levels depleting potassium",
            "Heavy rainfall leaching potassium from soil",
            "Poor soil drainage",
        ],
        treatment: &[
            "Apply potassium-rich fertilizers (potassium sulfate, potassium chloride)",
            "Use wood ash as organic potassium source",
            "Apply kelp meal or greensand for slow-release potassium",
            "Improve soil structure with compost",
            "Balance NPK ratio in fertilization program",
            "Mulch to reduce potassium leaching",
        ],
        severity_indicators: ["Slight leaf margin yellowing", "Brown edges with visible necrosis", "Extensive leaf death and weak plant structure"],
    },
    StaticEntry {
        key: "iron_deficiency",
        category: Category::NutrientDeficiency,
        subcategory: "Fe",
        name: "Iron Deficiency (Iron Chlorosis)",
        symptoms: &[
            "Interveinal chlorosis on young leaves (veins remain green)",
            "New growth appears yellow or white",
            "Leaf tips may die back in severe cases",
            "Stunted growth of new shoots",
            "Reduced chlorophyll production",
        ],
        causes: &[
            "High soil pH (above 7.5) limiting iron availability",
            "Waterlogged or poorly drained soil",
            "Excess phosphorus interfering with iron uptake",
            "High levels of competing metals (zinc, manganese, copper)",
            "Cold soil temperatures",
            "Compacted soil restricting root growth",
        ],
        treatment: &[
            "Apply chelated iron (Fe-EDTA or Fe-EDDHA) for quick results",
            "Lower soil pH with sulfur or acidifying fertilizers",
            "Use iron sulfate as soil amendment",
            "Apply foliar iron spray for immediate relief",
            "Improve soil drainage",
            "Add organic matter to enhance iron availability",
            "Avoid over-watering",
        ],
        severity_indicators: ["Slight yellowing between veins on new leaves", "Pronounced interveinal chlorosis", "White or cream-colored new growth, severe stunting"],
    },
    StaticEntry {
        key: "magnesium_deficiency",
        category: Category::NutrientDeficiency,
        subcategory: "Mg",
        name: "Magnesium Deficiency",
        symptoms: &[
            "Interveinal chlorosis on older leaves first",
            "Yellowing between veins while veins stay green",
            "Reddish or purple tints may develop",
            "Leaf curling or cupping downward",
            "Premature leaf drop",
            "Reduced photosynthesis efficiency",
        ],
        causes: &[
            "Acidic soils with low magnesium levels",
            "Sandy soils prone to magnesium leaching",
            "Excess potassium or calcium blocking magnesium uptake",
            "Heavy rainfall washing away magnesium",
            "High nitrogen levels depleting magnesium",
            "Poor root development",
        ],
        treatment: &[
            "Apply Epsom salt (magnesium sulfate) as foliar spray or soil drench",
            "Use dolomitic limestone to raise pH and add magnesium",
            "Apply magnesium-rich fertilizers",
            "Add compost with magnesium content",
            "Balance calcium-to-magnesium ratio in soil",
            "Reduce excess potassium if present",
            "Mulch to prevent nutrient leaching",
        ],
        severity_indicators: ["Slight yellowing between veins on lower leaves", "Widespread interveinal chlorosis", "Severe yellowing with brown necrotic spots"],
    },
    StaticEntry {
        key: "calcium_deficiency",
        category: Category::NutrientDeficiency,
        subcategory: "Ca",
        name: "Calcium Deficiency",
        symptoms: &[
            "Death of growing tips (apical meristem)",
            "Distorted or deformed new leaves",
            "Blossom end rot in fruits (tomatoes, peppers)",
            "Brown spots on leaf tips and margins",
            "Weak cell walls leading to tissue collapse",
            "Stunted root growth",
        ],
        causes: &[
            "Acidic soil with low calcium availability",
            "Irregular watering causing calcium uptake issues",
            "High humidity reducing transpiration",
            "Excess nitrogen, potassium, or magnesium competing with calcium",
            "Poor soil structure limiting root development",
            "Salt accumulation in soil",
        ],
        treatment: &[
            "Apply agricultural lime (calcium carbonate) to raise pH",
            "Use gypsum (calcium sulfate) in alkaline soils",
            "Ensure consistent and adequate watering",
            "Apply calcium chloride as foliar spray",
            "Maintain proper soil pH (6.0-7.0)",
            "Improve soil aeration and drainage",
            "Avoid excessive nitrogen fertilization",
        ],
        severity_indicators: ["Slight tip burn on new leaves", "Visible blossom end rot or tip death", "Widespread tissue death and fruit damage"],
    },
    // ------------------------------------------------------------------
    // FUNGAL DISEASES
    // ------------------------------------------------------------------
    StaticEntry {
        key: "powdery_mildew",
        category: Category::Fungal,
        subcategory: "powdery_mildew",
        name: "Powdery Mildew",
        symptoms: &[
            "White powdery coating on leaves, stems, and flowers",
            "Yellowing and curling of infected leaves",
            "Stunted growth and distorted leaves",
            "Premature leaf drop",
            "Reduced photosynthesis",
            "Flower and fruit damage in severe cases",
        ],
        causes: &[
            "High humidity with dry leaf surfaces",
            "Poor air circulation around plants",
            "Dense plant canopy trapping moisture",
            "Moderate temperatures (60-80°F)",
            "Shaded conditions",
            "Stressed plants more susceptible",
        ],
        treatment: &[
            "Remove and destroy infected plant parts immediately",
            "Improve air circulation by spacing plants properly",
            "Apply sulfur-based fungicide weekly",
            "Use neem oil spray as organic treatment",
            "Apply potassium bicarbonate solution",
            "Spray with baking soda solution (1 tbsp per gallon water)",
            "Water at base of plants, avoid wetting foliage",
            "Prune dense growth to increase airflow",
            "Apply milk spray (1:9 milk to water ratio)",
        ],
        severity_indicators: ["Small white patches on few leaves", "Widespread white coating, some yellowing", "Extensive coverage, leaf drop, and stunted growth"],
    },
    StaticEntry {
        key: "early_blight",
        category: Category::Fungal,
        subcategory: "early_blight",
        name: "Early Blight",
        symptoms: &[
            "Dark brown spots with concentric rings (target pattern)",
            "Yellowing around spots on older leaves first",
            "Spots enlarge and merge causing leaf death",
            "Stem lesions with dark rings",
            "Fruit spots near stem end",
            "Premature defoliation",
        ],
        causes: &[
            "Alternaria fungi surviving in soil and plant debris",
            "Warm, humid weather (75-85°F)",
            "Poor air circulation",
            "Overhead watering wetting foliage",
            "Plants weakened by stress or other issues",
            "Dense planting increasing humidity",
        ],
        treatment: &[
            "Remove and destroy infected leaves and debris",
            "Apply copper-based fungicide at first sign",
            "Use chlorothalonil fungicide for control",
            "Stake and prune plants for better airflow",
            "Mulch around base to prevent soil splash",
            "Rotate crops yearly (3-4 year rotation)",
            "Water at soil level, avoid wetting leaves",
            "Apply organic neem oil spray",
            "Improve soil health with compost",
        ],
        severity_indicators: ["Few target spots on lower leaves", "Multiple leaves affected, some defoliation", "Extensive defoliation, stem lesions, fruit damage"],
    },
    StaticEntry {
        key: "late_blight",
        category: Category::Fungal,
        subcategory: "late_blight",
        name: "Late Blight",
        symptoms: &[
            "Dark, water-soaked lesions on leaves",
            "White fuzzy growth on leaf undersides (in humid conditions)",
            "Rapid browning and death of leaves",
            "Dark lesions on stems causing collapse",
            "Fruit rot with brown, greasy appearance",
            "Entire plant can die within days",
        ],
        causes: &[
            "Phytophthora infestans (oomycete pathogen)",
            "Cool, wet weather (50-60°F) with high humidity",
            "Infected seed tubers or transplants",
            "Wind-blown spores from nearby infected plants",
            "Extended periods of leaf wetness",
            "Poor air circulation",
        ],
        treatment: &[
            "Remove and destroy all infected plants immediately",
            "Apply copper fungicide preventatively",
            "Use mancozeb or chlorothalonil fungicide",
            "Destroy volunteer plants and cull piles",
            "Plant resistant varieties",
            "Ensure wide plant spacing",
            "Avoid overhead irrigation",
            "Apply fungicides before rain events",
            "Practice crop rotation (minimum 3 years)",
            "Monitor weather for blight-favorable conditions",
        ],
        severity_indicators: ["Few water-soaked lesions", "Rapid spread of lesions, stem involvement", "Extensive plant death, fruit rot"],
    },
    StaticEntry {
        key: "leaf_spot",
        category: Category::Fungal,
        subcategory: "leaf_spot",
        name: "Fungal Leaf Spot",
        symptoms: &[
            "Circular or irregular brown, black, or tan spots",
            "Yellow halo around spots",
            "Spots may have dark borders",
            "Holes in leaves where spots fall out",
            "Premature leaf yellowing and drop",
            "Reduced plant vigor",
        ],
        causes: &[
            "Various fungal pathogens (Septoria, Cercospora, etc.)",
            "Warm, humid conditions",
            "Overhead watering or rain splash",
            "Poor air circulation",
            "Infected plant debris in soil",
            "Stressed or weakened plants",
        ],
        treatment: &[
            "Remove infected leaves and clean up fallen debris",
            "Apply copper or sulfur fungicide",
            "Use chlorothalonil for severe infections",
            "Improve air circulation through pruning",
            "Water at base of plants in morning",
            "Mulch to prevent soil splash onto leaves",
            "Rotate crops to break disease cycle",
            "Space plants adequately",
            "Apply neem oil as preventative",
        ],
        severity_indicators: ["Few spots on lower leaves", "Many spots, some defoliation", "Extensive spotting and significant leaf loss"],
    },
    // ------------------------------------------------------------------
    // BACTERIAL DISEASES
    // ------------------------------------------------------------------
    StaticEntry {
        key: "bacterial_spot",
        category: Category::Bacterial,
        subcategory: "bacterial_spot",
        name: "Bacterial Spot",
        symptoms: &[
            "Small, dark, greasy-looking spots on leaves",
            "Spots may have yellow halo",
            "Raised corky lesions on fruit",
            "Leaf spots turn brown and papery",
            "Defoliation in severe cases",
            "Reduced fruit quality",
        ],
        causes: &[
            "Xanthomonas bacteria spread by water splash",
            "Warm, wet weather conditions",
            "Infected seeds or transplants",
            "Rain or overhead irrigation spreading bacteria",
            "Wounds from insects or equipment",
            "High humidity promoting infection",
        ],
        treatment: &[
            "Remove and destroy infected plant material",
            "Apply copper-based bactericide preventatively",
            "Use antibiotic sprays if available (streptomycin)",
            "Avoid overhead watering",
            "Disinfect tools between plants",
            "Plant resistant varieties",
            "Rotate crops (3-4 years)",
            "Ensure good air circulation",
            "Avoid working with wet plants",
            "Use certified disease-free seed",
        ],
        severity_indicators: ["Few leaf spots, no defoliation", "Many spots, some defoliation and fruit lesions", "Extensive defoliation and unmarketable fruit"],
    },
    StaticEntry {
        key: "bacterial_wilt",
        category: Category::Bacterial,
        subcategory: "bacterial_wilt",
        name: "Bacterial Wilt",
        symptoms: &[
            "Sudden wilting of entire plant or sections",
            "Wilting that doesn't recover overnight",
            "Brown discoloration of vascular tissue",
            "Milky bacterial ooze from cut stems",
            "Leaf yellowing before wilting",
            "Plant death within days to weeks",
        ],
        causes: &[
            "Bacteria transmitted by cucumber beetles or through soil",
            "Warm soil temperatures",
            "Infected plant debris",
            "Wounds providing entry points",
            "Contaminated tools or equipment",
            "Bacteria overwintering in beetles",
        ],
        treatment: &[
            "Remove and destroy infected plants immediately",
            "Control cucumber beetles with insecticides or row covers",
            "Use resistant varieties when available",
            "Practice crop rotation",
            "Disinfect tools thoroughly",
            "Remove plant debris at end of season",
            "Apply beneficial nematodes for beetle larvae",
            "Avoid spreading soil from infected areas",
            "Plant trap crops to lure beetles away",
        ],
        severity_indicators: ["Wilting of single leaves or stems", "Wilting of multiple branches", "Entire plant collapse and death"],
    },
    StaticEntry {
        key: "bacterial_blight",
        category: Category::Bacterial,
        subcategory: "bacterial_blight",
        name: "Bacterial Blight",
        symptoms: &[
            "Water-soaked lesions on leaves",
            "Brown or black spots with yellow margins",
            "Wilting and death of shoots and branches",
            "Cankers on stems",
            "Bacterial exudate (ooze) may be visible",
            "Rapid tissue death",
        ],
        causes: &[
            "Pseudomonas or Xanthomonas bacteria",
            "Warm, wet weather",
            "Rain splash or overhead irrigation",
            "Infected seeds or pruning wounds",
            "High humidity",
            "Stressed plants more susceptible",
        ],
        treatment: &[
            "Prune out infected branches below symptoms",
            "Disinfect pruning tools between cuts (10% bleach solution)",
            "Apply copper bactericide",
            "Remove infected plants if severely affected",
            "Improve air circulation",
            "Avoid overhead watering",
            "Plant resistant cultivars",
            "Apply during dry weather only",
            "Destroy all infected debris",
        ],
        severity_indicators: ["Few water-soaked spots", "Branch dieback, visible cankers", "Extensive plant death, oozing lesions"],
    },
    // ------------------------------------------------------------------
    // FALLBACKS (generic, low-certainty diagnoses)
    // ------------------------------------------------------------------
    StaticEntry {
        key: "general_nutrient_deficiency",
        category: Category::NutrientDeficiency,
        subcategory: "general",
        name: "Potential Nutrient Deficiency",
        symptoms: &[
            "Discoloration or abnormal coloring of leaves",
            "Changes in leaf texture or appearance",
            "Reduced growth or vigor",
            "Leaf distortion or unusual patterns",
            "Changes in plant color or health",
        ],
        causes: &[
            "General soil nutrient depletion",
            "Imbalanced fertilization",
            "Poor soil pH affecting nutrient availability",
            "Insufficient organic matter in soil",
            "Environmental stress affecting nutrient uptake",
            "Root damage limiting nutrient absorption",
        ],
        treatment: &[
            "Conduct soil test to identify specific nutrient deficiencies",
            "Apply balanced NPK fertilizer (10-10-10 or similar)",
            "Add compost or well-rotted organic matter to improve soil health",
            "Check and adjust soil pH to 6.0-7.0 range",
            "Ensure adequate watering for nutrient uptake",
            "Consider foliar feeding with diluted liquid fertilizer",
            "Monitor plant response and adjust treatment based on results",
            "Consult local agricultural extension service for specific recommendations",
        ],
        severity_indicators: ["Slight changes in appearance", "Noticeable discoloration or growth issues", "Significant damage affecting plant health"],
    },
    StaticEntry {
        key: "general_plant_stress",
        category: Category::Environmental,
        subcategory: "general_stress",
        name: "General Plant Stress",
        symptoms: &[
            "Overall decline in plant vigor",
            "Leaf abnormalities",
            "Color changes in foliage",
            "Reduced growth rate",
            "Plant appears unhealthy",
        ],
        causes: &[
            "Environmental stress (temperature, light, or humidity)",
            "Watering issues (over or under-watering)",
            "Pest damage",
            "Disease presence",
            "Nutrient imbalances",
            "Soil quality problems",
            "Root zone issues",
        ],
        treatment: &[
            "Review and optimize growing conditions (light, water, temperature)",
            "Check soil moisture levels - adjust watering schedule",
            "Inspect plant thoroughly for pests or disease signs",
            "Test soil for nutrient levels and pH",
            "Ensure proper drainage to prevent root rot",
            "Consider transplanting if root-bound",
            "Apply balanced fertilizer if nutritional deficiency suspected",
            "Remove any dead or severely damaged plant parts",
            "Monitor daily and document changes",
            "Consult a plant expert or agronomist if condition worsens",
        ],
        severity_indicators: ["Minor changes in appearance", "Visible stress symptoms", "Plant in distress, immediate action needed"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = ENTRIES.iter().map(|e| e.key).collect();
        assert_eq!(keys.len(), ENTRIES.len());
    }

    #[test]
    fn test_every_record_has_content() {
        for entry in ENTRIES {
            assert!(!entry.symptoms.is_empty(), "{} has no symptoms", entry.key);
            assert!(!entry.causes.is_empty(), "{} has no causes", entry.key);
            assert!(!entry.treatment.is_empty(), "{} has no treatment", entry.key);
            assert!(entry.severity_indicators.iter().all(|s| !s.is_empty()));
        }
    }

    #[test]
    fn test_fallback_records_present() {
        let nutrient = ENTRIES.iter().find(|e| e.key == FALLBACK_NUTRIENT_KEY).unwrap();
        assert_eq!(nutrient.category, Category::NutrientDeficiency);
        let stress = ENTRIES.iter().find(|e| e.key == FALLBACK_STRESS_KEY).unwrap();
        assert_eq!(stress.category, Category::Environmental);
    }
}

//! The medical document category taxonomy.
//!
//! A fixed ordered list of category definitions built once at first use.
//! Order matters: the classifier resolves score ties in favor of the first
//! category seen, so this must stay an ordered list rather than a map.

use once_cell::sync::Lazy;
use regex::Regex;

/// Category documents fall back to when nothing matches.
pub const FALLBACK_CATEGORY: &str = "Other";

/// One classification category with its matching rules.
pub struct CategoryDefinition {
    /// Unique display name.
    pub name: &'static str,
    /// Lower-case literal substrings, matched by containment.
    pub keywords: &'static [&'static str],
    /// Patterns matched against the lowercased metadata text.
    pub patterns: Vec<Regex>,
    /// Score contribution per keyword hit; patterns count double.
    pub weight: u32,
}

fn category(
    name: &'static str,
    keywords: &'static [&'static str],
    patterns: &[&str],
    weight: u32,
) -> CategoryDefinition {
    CategoryDefinition {
        name,
        keywords,
        // Patterns are fixed literals in this table; a failure here is a
        // programming error, not a runtime condition.
        patterns: patterns
            .iter()
            .map(|p| Regex::new(p).expect("invalid taxonomy pattern"))
            .collect(),
        weight,
    }
}

static TAXONOMY: Lazy<Vec<CategoryDefinition>> = Lazy::new(|| {
    vec![
        category(
            "Blood Test",
            &[
                "cbc", "blood test", "blood count", "hemoglobin", "platelet", "wbc", "rbc",
                "blood sugar", "glucose", "lipid profile", "cholesterol", "hematology",
            ],
            &[
                r"cbc|complete blood count",
                r"blood[\s_-]*(test|count|work|report)",
                r"hba1c|h(a?)emoglobin",
            ],
            12,
        ),
        category(
            "Urine Test",
            &["urine", "urinalysis", "urine culture"],
            &[r"urin(e|alysis)"],
            10,
        ),
        category(
            "X-Ray",
            &["x-ray", "xray", "radiograph", "chest x-ray"],
            &[r"x[\s_-]?ray", r"radiograph"],
            10,
        ),
        category(
            "Scan Report",
            &[
                "mri", "ct scan", "ultrasound", "sonography", "pet scan", "echocardiogram",
                "doppler", "scan",
            ],
            &[r"(mri|ct|pet)[\s_-]?scan", r"ultra[\s_-]?sound|sonograph"],
            10,
        ),
        category(
            "ECG Report",
            &["ecg", "ekg", "electrocardiogram", "cardiac rhythm"],
            &[r"e[ck]g|electro[\s_-]?cardiogram"],
            10,
        ),
        category(
            "Prescription",
            &[
                "prescription", "medication", "dosage", "tablet", "capsule", "pharmacy",
                "refill",
            ],
            &[r"prescri(ption|bed)", r"\brx\b"],
            10,
        ),
        category(
            "Discharge Summary",
            &["discharge summary", "discharge", "hospital discharge", "admission"],
            &[r"discharge[\s_-]*summary"],
            12,
        ),
        category(
            "Lab Report",
            &["lab report", "laboratory", "pathology", "specimen", "culture", "biopsy"],
            &[r"lab(oratory)?[\s_-]*(report|result)", r"patholog"],
            8,
        ),
        category(
            "Vaccination Record",
            &["vaccine", "vaccination", "immunization", "booster"],
            &[r"vaccin|immuni[sz]ation"],
            10,
        ),
        category(
            "Consultation Note",
            &["consultation", "consult note", "clinical note", "follow-up", "followup"],
            &[r"consultation|follow[\s_-]?up"],
            8,
        ),
        category(
            "Operation Report",
            &["operation", "surgery", "surgical", "operative", "procedure"],
            &[r"(operation|operative|surg(ery|ical))[\s_-]*(report|note)?"],
            10,
        ),
        category(
            "Allergy Report",
            &["allergy", "allergies", "allergen", "skin prick"],
            &[r"allerg"],
            10,
        ),
        category(
            "Dental Record",
            &["dental", "dentist", "tooth", "teeth", "orthodontic", "cavity"],
            &[r"dent(al|ist)"],
            10,
        ),
        category(
            "Eye Examination",
            &["eye exam", "vision", "ophthalmology", "optometry", "visual acuity", "retina"],
            &[r"ophthalm|optometr", r"eye[\s_-]*(exam|test|check)"],
            10,
        ),
        category(
            "Physiotherapy Report",
            &["physiotherapy", "physical therapy", "rehabilitation", "physio"],
            &[r"physio(therapy)?|rehab"],
            8,
        ),
        category(
            "Medical Certificate",
            &["medical certificate", "fitness certificate", "sick leave", "unfit"],
            &[r"(medical|fitness)[\s_-]*certificate"],
            10,
        ),
        category(
            "Referral Letter",
            &["referral", "referred"],
            &[r"referr?al[\s_-]*(letter|note)?"],
            10,
        ),
        category(
            "Insurance Document",
            &["insurance", "claim", "policy", "reimbursement", "coverage"],
            &[r"insurance|claim[\s_-]*form"],
            8,
        ),
    ]
});

/// The full taxonomy in declaration order.
pub fn taxonomy() -> &'static [CategoryDefinition] {
    &TAXONOMY
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_taxonomy_size() {
        assert_eq!(taxonomy().len(), 18);
    }

    #[test]
    fn test_names_unique() {
        let names: HashSet<&str> = taxonomy().iter().map(|c| c.name).collect();
        assert_eq!(names.len(), taxonomy().len());
        assert!(!names.contains(FALLBACK_CATEGORY));
    }

    #[test]
    fn test_weights_positive() {
        assert!(taxonomy().iter().all(|c| c.weight > 0));
    }

    #[test]
    fn test_keywords_lowercase() {
        for def in taxonomy() {
            for kw in def.keywords {
                assert_eq!(*kw, kw.to_lowercase(), "keyword not lowercase in {}", def.name);
            }
        }
    }

    #[test]
    fn test_imaging_names_carry_markers() {
        // The low-confidence image fallback keys off these substrings.
        assert!(taxonomy().iter().any(|c| c.name.contains("Ray")));
        assert!(taxonomy().iter().any(|c| c.name.contains("Scan")));
    }
}

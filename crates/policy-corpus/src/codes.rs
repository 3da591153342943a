//! CPT and ICD-10 code description tables.
//!
//! Covers the codes referenced by the built-in policies plus common office
//! visit and diagnosis codes seen on prior-authorization requests.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// An ICD-10 diagnosis entry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Icd10Entry {
    /// Human-readable diagnosis description
    pub description: &'static str,
    /// Clinical category tag (knee, spine, cardiac, ...)
    pub category: &'static str,
}

/// Description for a CPT/HCPCS procedure code, if known.
#[must_use]
pub fn cpt_description(code: &str) -> Option<&'static str> {
    CPT_DESCRIPTIONS.get(code).copied()
}

/// Diagnosis entry for an ICD-10 code, if known.
#[must_use]
pub fn icd10_entry(code: &str) -> Option<&'static Icd10Entry> {
    ICD10_ENTRIES.get(code)
}

static CPT_DESCRIPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("27447", "Total knee arthroplasty"),
        ("27446", "Partial knee arthroplasty (unicompartmental)"),
        ("70553", "MRI brain with and without contrast"),
        ("70551", "MRI brain without contrast"),
        ("70552", "MRI brain with contrast"),
        ("72141", "MRI cervical spine without contrast"),
        ("72148", "MRI lumbar spine without contrast"),
        ("73721", "MRI lower extremity joint without contrast"),
        ("93458", "Left heart catheterization"),
        ("93459", "Left heart catheterization with left ventriculography"),
        ("93460", "Right and left heart catheterization"),
        ("93461", "Right and left heart catheterization with ventriculography"),
        ("J0135", "Adalimumab injection (Humira)"),
        ("J0717", "Certolizumab pegol injection (Cimzia)"),
        ("J1745", "Infliximab injection (Remicade)"),
        ("J2182", "Mepolizumab injection (Nucala)"),
        ("J3590", "Unclassified biologic"),
        ("99213", "Office visit, established patient, low complexity"),
        ("99214", "Office visit, established patient, moderate complexity"),
    ])
});

static ICD10_ENTRIES: Lazy<HashMap<&'static str, Icd10Entry>> = Lazy::new(|| {
    HashMap::from([
        (
            "M17.11",
            Icd10Entry {
                description: "Primary osteoarthritis, right knee",
                category: "knee",
            },
        ),
        (
            "M17.12",
            Icd10Entry {
                description: "Primary osteoarthritis, left knee",
                category: "knee",
            },
        ),
        (
            "M17.0",
            Icd10Entry {
                description: "Bilateral primary osteoarthritis of knee",
                category: "knee",
            },
        ),
        (
            "M54.5",
            Icd10Entry {
                description: "Low back pain",
                category: "spine",
            },
        ),
        (
            "M54.2",
            Icd10Entry {
                description: "Cervicalgia",
                category: "spine",
            },
        ),
        (
            "G89.29",
            Icd10Entry {
                description: "Other chronic pain",
                category: "pain",
            },
        ),
        (
            "I25.10",
            Icd10Entry {
                description: "Atherosclerotic heart disease of native coronary artery",
                category: "cardiac",
            },
        ),
        (
            "I20.0",
            Icd10Entry {
                description: "Unstable angina",
                category: "cardiac",
            },
        ),
        (
            "I21.3",
            Icd10Entry {
                description: "ST elevation myocardial infarction of unspecified site",
                category: "cardiac",
            },
        ),
        (
            "M05.79",
            Icd10Entry {
                description: "Rheumatoid arthritis with rheumatoid factor, unspecified site",
                category: "rheumatology",
            },
        ),
        (
            "M06.9",
            Icd10Entry {
                description: "Rheumatoid arthritis, unspecified",
                category: "rheumatology",
            },
        ),
        (
            "K50.90",
            Icd10Entry {
                description: "Crohn's disease, unspecified, without complications",
                category: "gastroenterology",
            },
        ),
        (
            "L40.50",
            Icd10Entry {
                description: "Arthropathic psoriasis, unspecified",
                category: "rheumatology",
            },
        ),
        (
            "C34.90",
            Icd10Entry {
                description: "Malignant neoplasm of unspecified part of bronchus or lung",
                category: "oncology",
            },
        ),
        (
            "C50.919",
            Icd10Entry {
                description: "Malignant neoplasm of unspecified site of breast",
                category: "oncology",
            },
        ),
        (
            "G43.909",
            Icd10Entry {
                description: "Migraine, unspecified, not intractable",
                category: "neurology",
            },
        ),
        (
            "S83.511A",
            Icd10Entry {
                description: "Sprain of anterior cruciate ligament of right knee, initial encounter",
                category: "knee",
            },
        ),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cpt_lookup() {
        assert_eq!(cpt_description("27447"), Some("Total knee arthroplasty"));
        assert_eq!(cpt_description("J1745"), Some("Infliximab injection (Remicade)"));
        assert_eq!(cpt_description("00000"), None);
    }

    #[test]
    fn icd10_lookup() {
        let knee = icd10_entry("M17.11").unwrap();
        assert_eq!(knee.description, "Primary osteoarthritis, right knee");
        assert_eq!(knee.category, "knee");

        assert!(icd10_entry("Z99.99").is_none());
    }

    #[test]
    fn registry_cpt_codes_resolve() {
        let registry = crate::PayerRegistry::builtin();
        for payer_id in registry.payer_ids() {
            let payer = registry.payer(payer_id).unwrap();
            for proc_type in payer.procedures() {
                let reqs = payer.requirements(proc_type).unwrap();
                for code in &reqs.cpt_codes {
                    assert!(
                        cpt_description(code).is_some(),
                        "{payer_id}/{proc_type}: unknown CPT {code}"
                    );
                }
            }
        }
    }
}

//! Structured prior-authorization requirements per payer and procedure.
//!
//! This is the machine-readable complement to the policy document corpus:
//! the same payer rules, but as typed records a caller can evaluate a case
//! against instead of reading prose.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalize a payer display name to its tag form.
///
/// `"United Healthcare"` becomes `"united_healthcare"`.
#[must_use]
pub fn normalize_payer_id(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "_")
}

/// Prior-authorization requirements for one payer/procedure pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcedureRequirements {
    /// CPT/HCPCS codes the policy covers
    pub cpt_codes: Vec<String>,
    /// Whether prior authorization is required at all
    pub requires_prior_auth: bool,
    /// Documentation that must accompany a request
    pub required_documentation: Vec<String>,
    /// Findings that qualify a request for auto-approval
    pub auto_approve_criteria: Vec<String>,
    /// Typical decision turnaround
    pub typical_turnaround: String,
    /// Window for appealing a denial
    pub appeal_window: String,
}

/// One payer's display name and per-procedure requirements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayerPolicySet {
    /// Payer display name
    pub name: String,
    policies: BTreeMap<String, ProcedureRequirements>,
}

impl PayerPolicySet {
    /// Requirements for a procedure type, if the payer publishes them.
    #[must_use]
    pub fn requirements(&self, procedure: &str) -> Option<&ProcedureRequirements> {
        self.policies.get(procedure)
    }

    /// Procedure types this payer publishes requirements for, sorted.
    #[must_use]
    pub fn procedures(&self) -> Vec<&str> {
        self.policies.keys().map(String::as_str).collect()
    }
}

/// Registry of payer policy sets, keyed by normalized payer tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayerRegistry {
    payers: BTreeMap<String, PayerPolicySet>,
}

impl PayerRegistry {
    /// Registry covering the payers in the built-in corpus.
    #[must_use]
    pub fn builtin() -> Self {
        let mut payers = BTreeMap::new();
        payers.insert("united_healthcare".to_string(), united_healthcare());
        payers.insert("aetna".to_string(), aetna());
        payers.insert(
            "blue_cross_blue_shield".to_string(),
            blue_cross_blue_shield(),
        );
        Self { payers }
    }

    /// Look up a payer by tag.
    #[must_use]
    pub fn payer(&self, payer_id: &str) -> Option<&PayerPolicySet> {
        self.payers.get(payer_id)
    }

    /// Requirements for a payer/procedure pair.
    ///
    /// `None` when either the payer or the procedure is unknown.
    #[must_use]
    pub fn requirements(
        &self,
        payer_id: &str,
        procedure: &str,
    ) -> Option<&ProcedureRequirements> {
        self.payers.get(payer_id)?.requirements(procedure)
    }

    /// Known payer tags, sorted.
    #[must_use]
    pub fn payer_ids(&self) -> Vec<&str> {
        self.payers.keys().map(String::as_str).collect()
    }
}

fn united_healthcare() -> PayerPolicySet {
    PayerPolicySet {
        name: "United Healthcare".to_string(),
        policies: BTreeMap::from([
            (
                "MRI".to_string(),
                procedure(
                    &["70553", "70551", "70552", "72141", "72148", "73721"],
                    true,
                    &[
                        "Clinical indication/diagnosis",
                        "Previous conservative treatment history (minimum 6 weeks)",
                        "Physical examination findings",
                        "Previous imaging results if applicable",
                        "Referring physician NPI",
                    ],
                    &[
                        "Post-surgical follow-up within 6 months",
                        "Known malignancy staging/restaging",
                        "Acute neurological deficit",
                    ],
                    "2-3 business days",
                    "180 days",
                ),
            ),
            (
                "knee_replacement".to_string(),
                procedure(
                    &["27447", "27446"],
                    true,
                    &[
                        "X-ray showing bone-on-bone arthritis (Kellgren-Lawrence Grade III-IV)",
                        "BMI documentation (BMI < 40 preferred)",
                        "Conservative treatment failure (PT, NSAIDs, injections) for 3+ months",
                        "Functional assessment score (KOOS or similar)",
                        "Medical clearance for surgery",
                        "Orthopedic surgeon evaluation notes",
                    ],
                    &[
                        "Failed 3+ months conservative treatment with documented functional decline",
                        "Kellgren-Lawrence Grade IV with severe functional limitation",
                    ],
                    "5-7 business days",
                    "180 days",
                ),
            ),
            (
                "cardiac_catheterization".to_string(),
                procedure(
                    &["93458", "93459", "93460", "93461"],
                    true,
                    &[
                        "Positive stress test or abnormal imaging",
                        "Cardiac risk factor assessment",
                        "EKG results",
                        "Prior cardiac history",
                        "Cardiology consultation notes",
                    ],
                    &[
                        "STEMI or NSTEMI presentation",
                        "Unstable angina with positive troponin",
                        "Acute coronary syndrome",
                    ],
                    "1-2 business days (urgent), 3-5 business days (routine)",
                    "180 days",
                ),
            ),
            (
                "biologics".to_string(),
                procedure(
                    &["J0135", "J0717", "J1745", "J2182", "J3590"],
                    true,
                    &[
                        "Confirmed diagnosis with supporting labs/imaging",
                        "Trial and failure of conventional therapies",
                        "Disease activity score (DAS28, CDAI, or equivalent)",
                        "TB screening results",
                        "Hepatitis B/C screening",
                        "Vaccination status",
                    ],
                    &[
                        "Step therapy completion documented",
                        "Continuation of previously approved biologic with documented efficacy",
                    ],
                    "5-10 business days",
                    "180 days",
                ),
            ),
        ]),
    }
}

fn aetna() -> PayerPolicySet {
    PayerPolicySet {
        name: "Aetna".to_string(),
        policies: BTreeMap::from([
            (
                "MRI".to_string(),
                procedure(
                    &["70553", "70551", "70552", "72141", "72148", "73721"],
                    true,
                    &[
                        "Clinical indication with ICD-10 code",
                        "Conservative treatment attempted (4+ weeks)",
                        "Physical exam findings",
                        "Prior imaging if available",
                    ],
                    &[
                        "Emergency/trauma",
                        "Cancer staging",
                        "Pre-surgical planning for approved procedure",
                    ],
                    "2 business days",
                    "365 days",
                ),
            ),
            (
                "knee_replacement".to_string(),
                procedure(
                    &["27447", "27446"],
                    true,
                    &[
                        "Weight-bearing X-rays within 6 months",
                        "BMI < 40 (or documented exception)",
                        "Physical therapy completion (6+ weeks)",
                        "Failed pharmacological management",
                        "Surgical evaluation with operative plan",
                    ],
                    &["Grade IV OA with failed 6+ months conservative treatment"],
                    "5 business days",
                    "365 days",
                ),
            ),
            (
                "cardiac_catheterization".to_string(),
                procedure(
                    &["93458", "93459", "93460", "93461"],
                    false,
                    &[],
                    &[],
                    "N/A - no prior auth required",
                    "N/A",
                ),
            ),
            (
                "biologics".to_string(),
                procedure(
                    &["J0135", "J0717", "J1745", "J2182"],
                    true,
                    &[
                        "Diagnosis confirmation with labs",
                        "Step therapy documentation (2+ conventional DMARDs)",
                        "Disease activity assessment",
                        "Infection screening (TB, Hep B/C)",
                    ],
                    &[
                        "Documented failure of 2+ conventional therapies",
                        "Reauthorization with documented response",
                    ],
                    "3-5 business days",
                    "365 days",
                ),
            ),
        ]),
    }
}

fn blue_cross_blue_shield() -> PayerPolicySet {
    PayerPolicySet {
        name: "Blue Cross Blue Shield".to_string(),
        policies: BTreeMap::from([
            (
                "MRI".to_string(),
                procedure(
                    &["70553", "70551", "70552", "72141", "72148"],
                    true,
                    &[
                        "Order from treating physician with clinical rationale",
                        "Duration and nature of symptoms",
                        "Conservative treatment history",
                        "Relevant physical exam findings",
                    ],
                    &[
                        "Red flag symptoms (progressive neurological deficit, suspected cauda equina)",
                        "Cancer surveillance per NCCN guidelines",
                        "Post-operative evaluation",
                    ],
                    "2-3 business days",
                    "180 days",
                ),
            ),
            (
                "knee_replacement".to_string(),
                procedure(
                    &["27447", "27446"],
                    true,
                    &[
                        "Radiographic evidence of severe arthritis",
                        "Documented failure of non-surgical management (3+ months)",
                        "Functional limitation documentation",
                        "Medical necessity letter from orthopedic surgeon",
                        "Pre-operative medical clearance",
                    ],
                    &[
                        "Revision of previously approved arthroplasty",
                        "Fracture requiring arthroplasty",
                    ],
                    "3-5 business days",
                    "180 days",
                ),
            ),
        ]),
    }
}

fn procedure(
    cpt_codes: &[&str],
    requires_prior_auth: bool,
    required_documentation: &[&str],
    auto_approve_criteria: &[&str],
    typical_turnaround: &str,
    appeal_window: &str,
) -> ProcedureRequirements {
    ProcedureRequirements {
        cpt_codes: strings(cpt_codes),
        requires_prior_auth,
        required_documentation: strings(required_documentation),
        auto_approve_criteria: strings(auto_approve_criteria),
        typical_turnaround: typical_turnaround.to_string(),
        appeal_window: appeal_window.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_registry_covers_three_payers() {
        let registry = PayerRegistry::builtin();
        assert_eq!(
            registry.payer_ids(),
            vec!["aetna", "blue_cross_blue_shield", "united_healthcare"]
        );

        let uhc = registry.payer("united_healthcare").unwrap();
        assert_eq!(uhc.name, "United Healthcare");
        assert_eq!(
            uhc.procedures(),
            vec![
                "MRI",
                "biologics",
                "cardiac_catheterization",
                "knee_replacement"
            ]
        );
    }

    #[test]
    fn knee_replacement_requires_prior_auth_everywhere() {
        let registry = PayerRegistry::builtin();
        for payer_id in registry.payer_ids() {
            let knee = registry.requirements(payer_id, "knee_replacement").unwrap();
            assert!(knee.requires_prior_auth, "{payer_id}");
            assert!(knee.cpt_codes.contains(&"27447".to_string()));
        }
    }

    #[test]
    fn aetna_cardiac_needs_no_prior_auth() {
        let registry = PayerRegistry::builtin();
        let cardiac = registry
            .requirements("aetna", "cardiac_catheterization")
            .unwrap();
        assert!(!cardiac.requires_prior_auth);
        assert!(cardiac.required_documentation.is_empty());
        assert_eq!(cardiac.appeal_window, "N/A");
    }

    #[test]
    fn unknown_payer_or_procedure_is_none() {
        let registry = PayerRegistry::builtin();
        assert!(registry.payer("medicare").is_none());
        assert!(registry.requirements("medicare", "MRI").is_none());
        assert!(registry
            .requirements("blue_cross_blue_shield", "biologics")
            .is_none());
    }

    #[test]
    fn normalize_payer_id_matches_corpus_tags() {
        assert_eq!(normalize_payer_id("United Healthcare"), "united_healthcare");
        assert_eq!(
            normalize_payer_id("Blue Cross Blue Shield"),
            "blue_cross_blue_shield"
        );
        assert_eq!(normalize_payer_id("Aetna"), "aetna");
    }
}

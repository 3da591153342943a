//! Built-in payer policy corpus.
//!
//! Prior-authorization policy documents for the payers the registry knows
//! about. In a production deployment these would be ingested from payer
//! PDF/portal sources; the built-in set keeps the engine usable out of the
//! box and pins test fixtures.

use crate::corpus::PolicyCorpus;
use crate::types::PolicyDocument;

/// The built-in payer policy corpus.
///
/// Covers knee replacement, MRI, cardiac catheterization, and biologic
/// therapy policies across United Healthcare, Aetna, and Blue Cross Blue
/// Shield.
#[must_use]
pub fn builtin_policies() -> PolicyCorpus {
    PolicyCorpus::from_documents(vec![
        PolicyDocument::new(
            "UHC-KNEE-001",
            "United Healthcare",
            "united_healthcare",
            "knee_replacement",
            "United Healthcare Prior Authorization Policy: Total Knee Arthroplasty",
            UHC_KNEE,
        ),
        PolicyDocument::new(
            "UHC-MRI-001",
            "United Healthcare",
            "united_healthcare",
            "MRI",
            "United Healthcare Prior Authorization Policy: MRI Studies",
            UHC_MRI,
        ),
        PolicyDocument::new(
            "UHC-CARDIAC-001",
            "United Healthcare",
            "united_healthcare",
            "cardiac_catheterization",
            "United Healthcare Prior Authorization Policy: Cardiac Catheterization",
            UHC_CARDIAC,
        ),
        PolicyDocument::new(
            "UHC-BIOLOGICS-001",
            "United Healthcare",
            "united_healthcare",
            "biologics",
            "United Healthcare Prior Authorization Policy: Biologic Therapies",
            UHC_BIOLOGICS,
        ),
        PolicyDocument::new(
            "AETNA-KNEE-001",
            "Aetna",
            "aetna",
            "knee_replacement",
            "Aetna Clinical Policy Bulletin: Knee Arthroplasty",
            AETNA_KNEE,
        ),
        PolicyDocument::new(
            "AETNA-MRI-001",
            "Aetna",
            "aetna",
            "MRI",
            "Aetna Clinical Policy Bulletin: Advanced Imaging — MRI",
            AETNA_MRI,
        ),
        PolicyDocument::new(
            "BCBS-KNEE-001",
            "Blue Cross Blue Shield",
            "blue_cross_blue_shield",
            "knee_replacement",
            "BCBS Medical Policy: Total Knee Replacement Surgery",
            BCBS_KNEE,
        ),
        PolicyDocument::new(
            "BCBS-MRI-001",
            "Blue Cross Blue Shield",
            "blue_cross_blue_shield",
            "MRI",
            "BCBS Medical Policy: Advanced Diagnostic Imaging — MRI",
            BCBS_MRI,
        ),
    ])
}

const UHC_KNEE: &str = r#"
UNITED HEALTHCARE PRIOR AUTHORIZATION POLICY
Procedure: Total Knee Arthroplasty (CPT 27447, 27446)

MEDICAL NECESSITY CRITERIA:
Prior authorization is REQUIRED for all total and partial knee arthroplasty procedures.

REQUIRED DOCUMENTATION:
1. Radiographic evidence: Weight-bearing X-rays showing Kellgren-Lawrence Grade III or IV
   osteoarthritis with bone-on-bone changes, subchondral sclerosis, or osteophyte formation.
2. BMI Documentation: Patient BMI must be documented. BMI < 40 is preferred. Patients with
   BMI >= 40 require additional documentation of weight management attempts.
3. Conservative Treatment Failure: Documented failure of conservative management for a
   minimum of 3 months, including at least TWO of the following:
   - Physical therapy (minimum 6 weeks)
   - NSAIDs or analgesic medications
   - Corticosteroid injections
   - Hyaluronic acid injections
   - Activity modification
4. Functional Assessment: Validated outcome score such as KOOS, WOMAC, or Oxford Knee Score
   demonstrating significant functional limitation.
5. Medical Clearance: Pre-operative medical clearance from primary care physician.
6. Orthopedic Evaluation: Detailed surgical evaluation notes from board-certified orthopedic surgeon.

AUTO-APPROVAL CRITERIA:
- Kellgren-Lawrence Grade IV with documented failure of 3+ months conservative treatment
  AND functional assessment score in severe range
- Revision of previously approved arthroplasty within 10 years
- Fracture requiring arthroplasty (emergent)

TYPICAL TURNAROUND: 5-7 business days
APPEAL WINDOW: 180 days from denial date
PEER-TO-PEER REVIEW: Available upon request within 5 business days of denial

EXCLUSIONS:
- Arthroscopic debridement as alternative not yet attempted (for patients under 55)
- Lack of radiographic evidence
- BMI > 45 without documented bariatric consultation
"#;

const UHC_MRI: &str = r#"
UNITED HEALTHCARE PRIOR AUTHORIZATION POLICY
Procedure: Magnetic Resonance Imaging (MRI)
CPT Codes: 70551-70553 (Brain), 72141 (C-Spine), 72148 (L-Spine), 73721 (Lower Extremity)

MEDICAL NECESSITY CRITERIA:
Prior authorization is REQUIRED for all outpatient MRI studies.

REQUIRED DOCUMENTATION:
1. Clinical indication with specific ICD-10 diagnosis code
2. Previous conservative treatment history (minimum 6 weeks for musculoskeletal)
3. Physical examination findings supporting the need for advanced imaging
4. Previous imaging results (X-ray, CT) if applicable
5. Referring physician NPI number

AUTO-APPROVAL CRITERIA (no prior auth needed):
- Post-surgical follow-up within 6 months of approved procedure
- Known malignancy: staging or restaging per NCCN guidelines
- Acute neurological deficit (new onset weakness, sensory loss, bowel/bladder dysfunction)
- Emergency/trauma setting
- Pre-surgical planning for previously approved procedure

DOCUMENTATION FOR SPECIFIC INDICATIONS:
Lumbar Spine MRI:
- Duration of symptoms (minimum 6 weeks without red flags)
- Trial of conservative treatment (PT, NSAIDs, activity modification)
- Negative or inconclusive X-rays
- Specific neurological findings on exam

Brain MRI:
- New neurological symptoms or findings
- Headache: new onset, change in pattern, or red flag features
- Seizure evaluation
- Known CNS pathology follow-up

TYPICAL TURNAROUND: 2-3 business days
APPEAL WINDOW: 180 days
"#;

const UHC_CARDIAC: &str = r#"
UNITED HEALTHCARE PRIOR AUTHORIZATION POLICY
Procedure: Cardiac Catheterization
CPT Codes: 93458, 93459, 93460, 93461

MEDICAL NECESSITY CRITERIA:
Prior authorization is REQUIRED for elective cardiac catheterization.

REQUIRED DOCUMENTATION:
1. Positive or abnormal non-invasive cardiac testing:
   - Stress test (exercise or pharmacologic) showing ischemia
   - Cardiac CT showing significant coronary calcification or stenosis
   - Echocardiogram showing wall motion abnormalities
2. Cardiac risk factor assessment (hypertension, diabetes, smoking, family history, hyperlipidemia)
3. Recent EKG results (within 30 days)
4. Prior cardiac history documentation
5. Cardiology consultation notes from board-certified cardiologist

AUTO-APPROVAL (no prior auth):
- STEMI or NSTEMI presentation (emergent)
- Unstable angina with positive troponin
- Acute coronary syndrome
- Cardiogenic shock
- Cardiac arrest survivor

TYPICAL TURNAROUND: 1-2 business days (urgent), 3-5 business days (routine)
APPEAL WINDOW: 180 days
"#;

const UHC_BIOLOGICS: &str = r#"
UNITED HEALTHCARE PRIOR AUTHORIZATION POLICY
Procedure: Biologic and Biosimilar Therapies
CPT/HCPCS Codes: J0135 (Adalimumab/Humira), J0717 (Certolizumab/Cimzia),
J1745 (Infliximab/Remicade), J2182 (Mepolizumab/Nucala)

MEDICAL NECESSITY CRITERIA:
Prior authorization is REQUIRED for all biologic and biosimilar therapies.

STEP THERAPY REQUIREMENTS:
Patients must have documented trial and failure of conventional therapies before
biologic approval:
- Rheumatoid Arthritis: Failed 2+ conventional DMARDs (methotrexate required as first-line)
- Crohn's Disease: Failed conventional therapy (5-ASA, corticosteroids, immunomodulators)
- Psoriatic Arthritis: Failed 1+ conventional DMARD and 1+ NSAID
- Ankylosing Spondylitis: Failed 2+ NSAIDs

REQUIRED DOCUMENTATION:
1. Confirmed diagnosis with supporting laboratory and/or imaging evidence
2. Documentation of conventional therapy trials with dates, doses, and outcomes
3. Current disease activity score (DAS28, CDAI, BASDAI, or equivalent)
4. Tuberculosis screening (PPD or QuantiFERON) within 12 months
5. Hepatitis B and C screening results
6. Current vaccination status
7. Prescribing specialist credentials

REAUTHORIZATION:
- Required every 12 months
- Must document continued clinical response
- Disease activity score comparison from baseline

TYPICAL TURNAROUND: 5-10 business days
APPEAL WINDOW: 180 days
"#;

const AETNA_KNEE: &str = r#"
AETNA CLINICAL POLICY BULLETIN
Number: 0650
Subject: Total and Partial Knee Arthroplasty (CPT 27447, 27446)

POLICY:
Aetna considers total knee arthroplasty medically necessary when ALL of the following
criteria are met:

1. RADIOGRAPHIC EVIDENCE:
   - Weight-bearing anteroposterior and lateral radiographs obtained within 6 months
   - Kellgren-Lawrence Grade III or IV changes
   - Significant joint space narrowing, osteophytes, or bone-on-bone contact

2. BODY MASS INDEX:
   - BMI < 40 preferred
   - BMI 40-45: requires documentation of supervised weight management program
   - BMI > 45: generally not approved without bariatric surgery consultation

3. CONSERVATIVE TREATMENT:
   - Physical therapy completion (minimum 6 weeks, documented)
   - Failed pharmacological management (NSAIDs, analgesics)
   - At least one intra-articular injection (corticosteroid or hyaluronic acid)
   - Total conservative treatment period: minimum 3 months

4. SURGICAL EVALUATION:
   - Operative plan from board-certified orthopedic surgeon
   - Documentation of functional limitations
   - Patient has been informed of risks, benefits, and alternatives

AUTO-APPROVAL: Grade IV OA with failed 6+ months conservative treatment
TURNAROUND: 5 business days
APPEAL: 365 days
"#;

const AETNA_MRI: &str = r#"
AETNA CLINICAL POLICY BULLETIN
Subject: Magnetic Resonance Imaging (MRI) Prior Authorization

POLICY:
Prior authorization is required for outpatient MRI studies.

APPROVAL CRITERIA:
1. Clinical indication supported by ICD-10 diagnosis code
2. Conservative treatment attempted for minimum 4 weeks (musculoskeletal indications)
3. Physical examination findings documented
4. Prior imaging (X-ray or CT) performed and results available

EXPEDITED APPROVAL (no wait):
- Emergency or trauma
- Cancer staging per NCCN guidelines
- Pre-surgical planning for previously approved procedure
- Acute neurological symptoms

SPECIFIC GUIDELINES:
Lumbar/Cervical Spine MRI:
- Minimum 4 weeks of symptoms
- Failed conservative treatment (medication + PT or home exercise)
- Neurological signs on examination preferred but not required
- Red flag symptoms bypass waiting period

Brain MRI:
- New neurological symptoms
- Change in headache pattern with red flag features
- Follow-up of known intracranial pathology
- Seizure workup

TURNAROUND: 2 business days
APPEAL: 365 days from denial
"#;

const BCBS_KNEE: &str = r#"
BLUE CROSS BLUE SHIELD MEDICAL POLICY
Policy Number: SUR-2024-0234
Subject: Total Knee Arthroplasty

COVERAGE DETERMINATION:
Total knee arthroplasty is covered when medically necessary.

MEDICAL NECESSITY REQUIREMENTS:
1. Radiographic evidence of severe arthritis (Kellgren-Lawrence III-IV)
   documented on weight-bearing films within 6 months
2. Documented failure of non-surgical management for minimum 3 months including:
   - Structured physical therapy program
   - Pharmacological therapy (NSAIDs, analgesics)
   - At least one injection therapy (corticosteroid or viscosupplementation)
3. Functional limitation documentation using validated instrument
4. Medical necessity letter from board-certified orthopedic surgeon
5. Pre-operative medical clearance from primary care physician

SPECIAL CONSIDERATIONS:
- Revision arthroplasty: covered for mechanical failure or infection
- Bilateral simultaneous: requires additional justification and medical clearance
- Robotic-assisted: covered at same rate as conventional

AUTO-APPROVAL:
- Revision of previously approved arthroplasty
- Fracture requiring arthroplasty (emergent)

TURNAROUND: 3-5 business days
APPEAL: 180 days
"#;

const BCBS_MRI: &str = r#"
BLUE CROSS BLUE SHIELD MEDICAL POLICY
Policy Number: RAD-2024-0089
Subject: Magnetic Resonance Imaging Prior Authorization

PRIOR AUTHORIZATION REQUIRED for all outpatient MRI studies.

APPROVAL CRITERIA:
1. Order from treating physician with documented clinical rationale
2. Duration and nature of symptoms described
3. Conservative treatment history (minimum 4-6 weeks for non-urgent)
4. Relevant physical examination findings documented
5. Prior imaging results if applicable

RED FLAG EXEMPTIONS (immediate approval):
- Progressive neurological deficit
- Suspected cauda equina syndrome
- New onset seizure
- Suspected malignancy with clinical urgency
- Post-traumatic with neurological findings

CANCER SURVEILLANCE:
- Approved per NCCN guidelines without additional review
- Frequency per guideline protocol

POST-OPERATIVE:
- Approved within 6 months of surgery without additional review

TURNAROUND: 2-3 business days
APPEAL: 180 days
"#;

//! Static sample data for the mocked dr-ai services.
//!
//! All data in this module is hardcoded and fictional. It stands in for the
//! diagnosis, profile and directory back-ends of a production deployment.

use drai_contracts::{
    diagnosis::{Condition, Severity, Symptom, Treatment},
    profile::{Doctor, MedicalHistoryEntry, Profile, UserInfo},
};

fn strings(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

// ── Diagnosis ─────────────────────────────────────────────────────────────────

/// Candidate conditions for the sample consultation, most likely first.
///
/// Probabilities: 85, 45, 35, 20. The overall confidence of this set is 73.
pub fn medical_conditions() -> Vec<Condition> {
    let condition = |id: &str,
                     name: &str,
                     probability: u8,
                     severity: Severity,
                     description: &str,
                     color: &str| Condition {
        id: id.to_string(),
        name: name.to_string(),
        probability,
        severity,
        description: description.to_string(),
        urgency: severity,
        color: color.to_string(),
    };

    vec![
        condition(
            "condition_1",
            "سرماخوردگی",
            85,
            Severity::Low,
            "یک عفونت ویروسی معمول که بر دستگاه تنفسی فوقانی تأثیر می‌گذارد.",
            "#4CAF50",
        ),
        condition(
            "condition_2",
            "آنفولانزا",
            45,
            Severity::Medium,
            "یک بیماری ویروسی که به طور معمول با تب، سرفه و درد بدن همراه است.",
            "#FFC107",
        ),
        condition(
            "condition_3",
            "آلرژی فصلی",
            35,
            Severity::Low,
            "واکنش سیستم ایمنی بدن به گرده‌ها یا دیگر آلرژن‌های محیطی.",
            "#4CAF50",
        ),
        condition(
            "condition_4",
            "سینوزیت",
            20,
            Severity::Medium,
            "التهاب سینوس‌ها، اغلب ناشی از عفونت باکتریایی یا ویروسی.",
            "#FFC107",
        ),
    ]
}

/// Symptoms identified during the sample consultation.
pub fn identified_symptoms() -> Vec<Symptom> {
    let symptom = |id: &str, name: &str, severity: Severity, duration: &str, related: &[&str]| {
        Symptom {
            id: id.to_string(),
            name: name.to_string(),
            severity,
            duration: duration.to_string(),
            related_conditions: strings(related),
        }
    };

    vec![
        symptom("symptom_1", "سرفه", Severity::Medium, "۳ روز", &["condition_1", "condition_2"]),
        symptom("symptom_2", "آبریزش بینی", Severity::Low, "۴ روز", &["condition_1", "condition_3"]),
        symptom("symptom_3", "گلودرد", Severity::Medium, "۲ روز", &["condition_1", "condition_2"]),
        symptom(
            "symptom_4",
            "سردرد",
            Severity::Medium,
            "۳ روز",
            &["condition_1", "condition_2", "condition_4"],
        ),
        symptom("symptom_5", "خستگی", Severity::Low, "۴ روز", &["condition_1", "condition_2"]),
    ]
}

/// Treatments recommended for the sample consultation.
pub fn recommended_treatments() -> Vec<Treatment> {
    let treatment = |id: &str, name: &str, description: &str, conditions: &[&str]| Treatment {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        for_conditions: strings(conditions),
    };

    vec![
        treatment(
            "treatment_1",
            "استراحت و استراحت کافی",
            "حداقل ۸ ساعت در روز استراحت کنید و خواب کافی داشته باشید.",
            &["condition_1", "condition_2"],
        ),
        treatment(
            "treatment_2",
            "نوشیدن مایعات فراوان",
            "روزانه حداقل ۸ لیوان آب یا مایعات گرم مانند چای بنوشید.",
            &["condition_1", "condition_2", "condition_4"],
        ),
        treatment(
            "treatment_3",
            "مصرف داروهای ضد احتقان",
            "داروهای بدون نسخه مانند سودوافدرین برای کاهش احتقان بینی.",
            &["condition_1", "condition_3", "condition_4"],
        ),
        treatment(
            "treatment_4",
            "آنتی هیستامین",
            "داروهای ضد آلرژی مانند لوراتادین یا ستیریزین.",
            &["condition_3"],
        ),
        treatment(
            "treatment_5",
            "مصرف استامینوفن یا ایبوپروفن",
            "برای کاهش درد و تب، با توجه به دستورالعمل مصرف کنید.",
            &["condition_1", "condition_2", "condition_4"],
        ),
    ]
}

// ── Profile ───────────────────────────────────────────────────────────────────

/// The profile the in-memory profile store starts from.
pub fn initial_profile() -> Profile {
    let entry = |id: &str, date: &str, kind: &str, notes: &str| MedicalHistoryEntry {
        id: id.to_string(),
        date: date.to_string(),
        kind: kind.to_string(),
        notes: notes.to_string(),
    };

    Profile {
        id: "user123".to_string(),
        name: "علی رضایی".to_string(),
        age: Some(32),
        date_of_birth: Some("1990-05-15".to_string()),
        last_checkup_date: Some("2023-10-25".to_string()),
        health_status: "Normal".to_string(),
        email: Some("ali@example.com".to_string()),
        // No picture yet; the profile screen shows initials instead.
        avatar_url: None,
        medical_history: vec![
            entry("hist1", "2023-10-25", "General Checkup", "All vitals normal"),
            entry("hist2", "2023-08-12", "Blood Test", "Cholesterol slightly elevated"),
            entry("hist3", "2023-03-04", "Vaccination", "Flu vaccine administered"),
        ],
    }
}

/// URL returned by the mocked picture upload.
pub const UPLOADED_AVATAR_URL: &str = "https://example.com/avatar.jpg";

// ── Home ──────────────────────────────────────────────────────────────────────

/// The signed-in user shown on the home screen.
pub fn user_info() -> UserInfo {
    UserInfo {
        id: "12345".to_string(),
        name: "علی".to_string(),
        profile_picture: None,
        last_consultation: "2023-06-15".to_string(),
        has_active_subscription: true,
    }
}

/// Doctors recommended on the home screen.
pub fn recommended_doctors() -> Vec<Doctor> {
    let doctor = |id: &str, name: &str, specialty: &str, rating: f32, available: bool| Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        rating,
        available,
    };

    vec![
        doctor("doc1", "دکتر محمدی", "قلب و عروق", 4.8, true),
        doctor("doc2", "دکتر رضایی", "داخلی", 4.9, false),
        doctor("doc3", "دکتر کریمی", "پوست", 4.7, true),
    ]
}

// ── Speech ────────────────────────────────────────────────────────────────────

/// Phrases the mocked speech recognizer "hears".
pub const DEMO_PHRASES: [&str; 4] = [
    "من سردرد شدید دارم",
    "علائم سرماخوردگی چیست؟",
    "چه داروهایی برای گلودرد مناسب است؟",
    "آیا باید به پزشک مراجعه کنم؟",
];

//! Diagnosis data types: conditions, symptoms, treatments and the aggregate
//! result returned to the diagnosis screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Three-level scale shared by condition severity, condition urgency and
/// symptom severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// Parse `LOW` / `MEDIUM` / `HIGH`. Anything else is treated as `Low`.
    pub fn parse_or_low(s: &str) -> Self {
        match s {
            "MEDIUM" => Severity::Medium,
            "HIGH" => Severity::High,
            _ => Severity::Low,
        }
    }
}

/// A candidate diagnosis with an independent probability.
///
/// `probability` is expected in 0..=100 but is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub id: String,
    pub name: String,
    pub probability: u8,
    pub severity: Severity,
    pub description: String,
    pub urgency: Severity,
    /// Display colour (hex) keyed to urgency.
    pub color: String,
}

/// A symptom identified during the consultation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub severity: Severity,
    /// Free-text duration, e.g. "۳ روز".
    pub duration: String,
    /// Ids of the conditions this symptom supports.
    pub related_conditions: Vec<String>,
}

/// A recommended treatment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treatment {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Ids of the conditions this treatment applies to.
    pub for_conditions: Vec<String>,
}

/// Everything the diagnosis screen shows for one consultation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisResult {
    /// `diag_<unix millis>`.
    pub diagnosis_id: String,
    pub timestamp: DateTime<Utc>,
    pub overall_confidence: u8,
    pub conditions: Vec<Condition>,
    pub symptoms: Vec<Symptom>,
    pub treatments: Vec<Treatment>,
}

/// Derived facts shown on the condition detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    pub prevalence: String,
    pub typical_duration: String,
    pub contagious: bool,
    pub recommended_tests: Vec<String>,
}

/// A single condition expanded with its related symptoms and treatments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionDetails {
    #[serde(flatten)]
    pub condition: Condition,
    pub related_symptoms: Vec<Symptom>,
    pub recommended_treatments: Vec<Treatment>,
    pub additional_info: AdditionalInfo,
}

/// The doctor assigned to an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDoctor {
    pub name: String,
    pub specialty: String,
    pub rating: f32,
}

/// A scheduled doctor visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    /// `appt_<unix millis>`.
    pub appointment_id: String,
    /// Requested specialty id, `general` when none was given.
    pub specialty_id: String,
    pub doctor: AppointmentDoctor,
    pub scheduled_time: DateTime<Utc>,
    pub location: String,
    pub virtual_option: bool,
    pub preparation_notes: String,
}

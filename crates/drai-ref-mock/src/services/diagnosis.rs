//! Mocked diagnosis service.
//!
//! Serves the diagnosis screen from a fixed dataset: the aggregate result,
//! per-condition details, and doctor appointment booking.

use chrono::{Duration, Utc};
use tracing::{info, warn};

use drai_contracts::{
    diagnosis::{
        AdditionalInfo, Appointment, AppointmentDoctor, Condition, ConditionDetails,
        DiagnosisResult, Severity, Symptom, Treatment,
    },
    error::{DrAiError, DrAiResult},
};
use drai_core::{
    confidence::overall_confidence,
    format::{symptoms_for_condition, treatments_for_condition},
};

use crate::mock_data::{identified_symptoms, medical_conditions, recommended_treatments};

/// Specialty booked when the caller does not ask for one.
pub const DEFAULT_SPECIALTY: &str = "general";

/// Conditions treated as contagious in the sample dataset.
const CONTAGIOUS_CONDITIONS: [&str; 2] = ["condition_1", "condition_2"];

/// The condition that warrants sinus imaging.
const SINUS_CONDITION: &str = "condition_4";

/// Diagnosis lookups over one dataset of conditions, symptoms and treatments.
#[derive(Debug, Clone)]
pub struct DiagnosisService {
    conditions: Vec<Condition>,
    symptoms: Vec<Symptom>,
    treatments: Vec<Treatment>,
}

impl Default for DiagnosisService {
    fn default() -> Self {
        Self::sample()
    }
}

impl DiagnosisService {
    pub fn new(conditions: Vec<Condition>, symptoms: Vec<Symptom>, treatments: Vec<Treatment>) -> Self {
        Self { conditions, symptoms, treatments }
    }

    /// A service over the built-in sample consultation.
    pub fn sample() -> Self {
        Self::new(medical_conditions(), identified_symptoms(), recommended_treatments())
    }

    /// The full diagnosis result, with the overall confidence recomputed.
    pub fn results(&self) -> DiagnosisResult {
        let now = Utc::now();
        let overall_confidence = overall_confidence(&self.conditions);

        info!(
            conditions = self.conditions.len(),
            overall_confidence,
            "diagnosis results served"
        );

        DiagnosisResult {
            diagnosis_id: format!("diag_{}", now.timestamp_millis()),
            timestamp: now,
            overall_confidence,
            conditions: self.conditions.clone(),
            symptoms: self.symptoms.clone(),
            treatments: self.treatments.clone(),
        }
    }

    /// One condition with its related symptoms, treatments and derived facts.
    ///
    /// Returns `DrAiError::ConditionNotFound` for an unknown id.
    pub fn condition_details(&self, condition_id: &str) -> DrAiResult<ConditionDetails> {
        let Some(condition) = self.conditions.iter().find(|c| c.id == condition_id) else {
            warn!(condition_id = %condition_id, "condition lookup missed");
            return Err(DrAiError::ConditionNotFound {
                id: condition_id.to_string(),
            });
        };

        Ok(ConditionDetails {
            condition: condition.clone(),
            related_symptoms: symptoms_for_condition(condition_id, &self.symptoms),
            recommended_treatments: treatments_for_condition(condition_id, &self.treatments),
            additional_info: additional_info(condition),
        })
    }
}

fn additional_info(condition: &Condition) -> AdditionalInfo {
    let prevalence = if condition.probability > 70 {
        "شایع"
    } else {
        "نسبتاً شایع"
    };

    let typical_duration = if condition.severity == Severity::Low {
        "۵-۷ روز"
    } else {
        "۷-۱۴ روز"
    };

    let mut recommended_tests = vec!["معاینه فیزیکی".to_string()];
    if condition.probability > 50 {
        recommended_tests.push("آزمایش خون".to_string());
    }
    if condition.id == SINUS_CONDITION {
        recommended_tests.push("تصویربرداری سینوس".to_string());
    }

    AdditionalInfo {
        prevalence: prevalence.to_string(),
        typical_duration: typical_duration.to_string(),
        contagious: CONTAGIOUS_CONDITIONS.contains(&condition.id.as_str()),
        recommended_tests,
    }
}

/// Book a visit for tomorrow. `None` books a general practitioner.
pub fn schedule_appointment(specialty_id: Option<&str>) -> Appointment {
    let now = Utc::now();
    let specialty_id = specialty_id.unwrap_or(DEFAULT_SPECIALTY);

    info!(specialty_id = %specialty_id, "appointment scheduled");

    Appointment {
        appointment_id: format!("appt_{}", now.timestamp_millis()),
        specialty_id: specialty_id.to_string(),
        doctor: AppointmentDoctor {
            name: "دکتر علی محمدی".to_string(),
            specialty: "پزشک عمومی".to_string(),
            rating: 4.8,
        },
        scheduled_time: now + Duration::days(1),
        location: "مطب دکتر محمدی، خیابان ولیعصر".to_string(),
        virtual_option: true,
        preparation_notes: "لطفاً ۱۵ دقیقه قبل از وقت مقرر در محل حاضر شوید.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use drai_contracts::{diagnosis::Severity, error::DrAiError};

    use super::{schedule_appointment, DiagnosisService, DEFAULT_SPECIALTY};

    #[test]
    fn sample_results_score_seventy_three() {
        let results = DiagnosisService::sample().results();
        assert_eq!(results.overall_confidence, 73);
        assert_eq!(results.conditions.len(), 4);
        assert_eq!(results.symptoms.len(), 5);
        assert_eq!(results.treatments.len(), 5);
        assert!(results.diagnosis_id.starts_with("diag_"));
    }

    #[test]
    fn empty_dataset_scores_zero() {
        let service = DiagnosisService::new(vec![], vec![], vec![]);
        assert_eq!(service.results().overall_confidence, 0);
    }

    #[test]
    fn common_cold_details() {
        let details = DiagnosisService::sample().condition_details("condition_1").unwrap();

        assert_eq!(details.condition.probability, 85);
        assert_eq!(details.related_symptoms.len(), 5);
        assert_eq!(details.recommended_treatments.len(), 4);

        let info = &details.additional_info;
        assert_eq!(info.prevalence, "شایع");
        assert_eq!(info.typical_duration, "۵-۷ روز");
        assert!(info.contagious);
        assert_eq!(info.recommended_tests, vec!["معاینه فیزیکی", "آزمایش خون"]);
    }

    #[test]
    fn sinusitis_details() {
        let details = DiagnosisService::sample().condition_details("condition_4").unwrap();

        assert_eq!(details.condition.severity, Severity::Medium);
        let symptom_ids: Vec<&str> = details.related_symptoms.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(symptom_ids, vec!["symptom_4"]);

        let info = &details.additional_info;
        assert_eq!(info.prevalence, "نسبتاً شایع");
        assert_eq!(info.typical_duration, "۷-۱۴ روز");
        assert!(!info.contagious);
        assert_eq!(info.recommended_tests, vec!["معاینه فیزیکی", "تصویربرداری سینوس"]);
    }

    #[test]
    fn allergy_gets_antihistamine() {
        let details = DiagnosisService::sample().condition_details("condition_3").unwrap();
        let treatment_ids: Vec<&str> = details
            .recommended_treatments
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(treatment_ids, vec!["treatment_3", "treatment_4"]);
        assert!(!details.additional_info.contagious);
    }

    #[test]
    fn unknown_condition_is_an_error() {
        match DiagnosisService::sample().condition_details("condition_9") {
            Err(DrAiError::ConditionNotFound { id }) => assert_eq!(id, "condition_9"),
            other => panic!("expected ConditionNotFound, got {:?}", other),
        }
    }

    #[test]
    fn appointment_is_tomorrow() {
        let before = chrono::Utc::now();
        let appointment = schedule_appointment(None);

        assert_eq!(appointment.specialty_id, DEFAULT_SPECIALTY);
        assert!(appointment.appointment_id.starts_with("appt_"));
        let lead = appointment.scheduled_time - before;
        assert!(lead >= chrono::Duration::days(1));
        assert!(lead < chrono::Duration::days(1) + chrono::Duration::minutes(1));

        assert_eq!(schedule_appointment(Some("cardiology")).specialty_id, "cardiology");
    }
}

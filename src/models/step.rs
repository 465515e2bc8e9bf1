use serde::{Deserialize, Serialize};

use crate::models::employee::fields;

/// The four pages of the onboarding wheel. Each step owns a fixed group of
/// record fields; step-scoped validation only ever reports on that group.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormStep {
    #[default]
    Personal,
    Professional,
    Bank,
    Emergency,
}

pub const STEP_COUNT: usize = 4;

impl FormStep {
    pub const ALL: [FormStep; STEP_COUNT] = [
        FormStep::Personal,
        FormStep::Professional,
        FormStep::Bank,
        FormStep::Emergency,
    ];

    /// 1-based position, as shown in the step indicator.
    pub fn number(&self) -> usize {
        match self {
            FormStep::Personal => 1,
            FormStep::Professional => 2,
            FormStep::Bank => 3,
            FormStep::Emergency => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormStep::Personal => "Personal Information",
            FormStep::Professional => "Professional Information",
            FormStep::Bank => "Bank Information",
            FormStep::Emergency => "Emergency Contact",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FormStep::Personal => "Please provide your personal details",
            FormStep::Professional => "Tell us about your professional background",
            FormStep::Bank => "Add your bank account details",
            FormStep::Emergency => "Provide emergency contact information",
        }
    }

    /// The record fields collected on this step.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            FormStep::Personal => &[
                fields::EMPLOYEE_NAME,
                fields::EMPLOYEE_ADDRESS,
                fields::EMPLOYEE_PHONE,
                fields::EMPLOYEE_EMAIL,
                fields::DATE_OF_BIRTH,
            ],
            FormStep::Professional => &[
                fields::DESIGNATION,
                fields::DEPARTMENT,
                fields::DATE_OF_JOINING,
            ],
            FormStep::Bank => &[
                fields::BANK_NAME,
                fields::BANK_ACCOUNT_NUMBER,
                fields::IFSC_CODE,
                fields::PAN_NUMBER,
                fields::AADHAR_NUMBER,
            ],
            FormStep::Emergency => &[
                fields::EMERGENCY_CONTACT_NAME,
                fields::EMERGENCY_CONTACT_RELATIONSHIP,
                fields::EMERGENCY_CONTACT_PHONE,
            ],
        }
    }

    pub fn next(&self) -> Option<FormStep> {
        match self {
            FormStep::Personal => Some(FormStep::Professional),
            FormStep::Professional => Some(FormStep::Bank),
            FormStep::Bank => Some(FormStep::Emergency),
            FormStep::Emergency => None,
        }
    }

    pub fn previous(&self) -> Option<FormStep> {
        match self {
            FormStep::Personal => None,
            FormStep::Professional => Some(FormStep::Personal),
            FormStep::Bank => Some(FormStep::Professional),
            FormStep::Emergency => Some(FormStep::Bank),
        }
    }

    pub fn is_first(&self) -> bool {
        matches!(self, FormStep::Personal)
    }

    pub fn is_last(&self) -> bool {
        matches!(self, FormStep::Emergency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_cover_all_fields_exactly_once() {
        let mut seen: Vec<&str> = FormStep::ALL.iter().flat_map(|s| s.fields()).copied().collect();
        assert_eq!(seen.len(), fields::ALL.len());
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), fields::ALL.len());
    }

    #[test]
    fn test_step_titles_follow_the_wheel() {
        assert_eq!(FormStep::Personal.title(), "Personal Information");
        assert_eq!(FormStep::Bank.description(), "Add your bank account details");
        let numbers: Vec<usize> = FormStep::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_step_navigation_chain() {
        assert!(FormStep::Personal.is_first());
        assert!(FormStep::Emergency.is_last());
        assert_eq!(FormStep::Personal.next(), Some(FormStep::Professional));
        assert_eq!(FormStep::Emergency.next(), None);
        assert_eq!(FormStep::Personal.previous(), None);
        assert_eq!(FormStep::Emergency.previous(), Some(FormStep::Bank));

        let mut step = FormStep::Personal;
        let mut hops = 0;
        while let Some(next) = step.next() {
            step = next;
            hops += 1;
        }
        assert_eq!(hops, STEP_COUNT - 1);
        assert_eq!(step.number(), 4);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::models::department::Department;
use crate::utils::validation::{
    check_aadhar_number, check_bank_account_number, check_date_of_birth, check_department,
    check_designation, check_email, check_ifsc_code, check_pan_number, check_phone_number,
};

/// Field names as they appear in the persisted JSON and in error maps.
pub mod fields {
    pub const EMPLOYEE_NAME: &str = "employeeName";
    pub const EMPLOYEE_ADDRESS: &str = "employeeAddress";
    pub const EMPLOYEE_PHONE: &str = "employeePhone";
    pub const EMPLOYEE_EMAIL: &str = "employeeEmail";
    pub const DATE_OF_BIRTH: &str = "dateOfBirth";
    pub const DESIGNATION: &str = "designation";
    pub const DEPARTMENT: &str = "department";
    pub const DATE_OF_JOINING: &str = "dateOfJoining";
    pub const BANK_NAME: &str = "bankName";
    pub const BANK_ACCOUNT_NUMBER: &str = "bankAccountNumber";
    pub const IFSC_CODE: &str = "ifscCode";
    pub const PAN_NUMBER: &str = "panNumber";
    pub const AADHAR_NUMBER: &str = "aadharNumber";
    pub const EMERGENCY_CONTACT_NAME: &str = "emergencyContactName";
    pub const EMERGENCY_CONTACT_RELATIONSHIP: &str = "emergencyContactRelationship";
    pub const EMERGENCY_CONTACT_PHONE: &str = "emergencyContactPhone";

    pub const ALL: [&str; 16] = [
        EMPLOYEE_NAME,
        EMPLOYEE_ADDRESS,
        EMPLOYEE_PHONE,
        EMPLOYEE_EMAIL,
        DATE_OF_BIRTH,
        DESIGNATION,
        DEPARTMENT,
        DATE_OF_JOINING,
        BANK_NAME,
        BANK_ACCOUNT_NUMBER,
        IFSC_CODE,
        PAN_NUMBER,
        AADHAR_NUMBER,
        EMERGENCY_CONTACT_NAME,
        EMERGENCY_CONTACT_RELATIONSHIP,
        EMERGENCY_CONTACT_PHONE,
    ];
}

/// A single onboarding submission. Every field is held as the raw string
/// the form collected; dates are `YYYY-MM-DD`.
#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmployeeRecord {
    #[validate(length(min = 1))]
    pub employee_name: String,
    #[validate(length(min = 1))]
    pub employee_address: String,
    #[validate(custom = "check_phone_number")]
    pub employee_phone: String,
    #[validate(custom = "check_email")]
    pub employee_email: String,
    #[validate(custom = "check_date_of_birth")]
    pub date_of_birth: String,
    #[validate(custom = "check_designation")]
    pub designation: String,
    #[validate(custom = "check_department")]
    pub department: String,
    #[validate(length(min = 1))]
    pub date_of_joining: String,
    #[validate(length(min = 1))]
    pub bank_name: String,
    #[validate(custom = "check_bank_account_number")]
    pub bank_account_number: String,
    #[validate(custom = "check_ifsc_code")]
    pub ifsc_code: String,
    #[validate(custom = "check_pan_number")]
    pub pan_number: String,
    #[validate(custom = "check_aadhar_number")]
    pub aadhar_number: String,
    #[validate(length(min = 1))]
    pub emergency_contact_name: String,
    #[validate(length(min = 1))]
    pub emergency_contact_relationship: String,
    #[validate(custom = "check_phone_number")]
    pub emergency_contact_phone: String,
}

impl Default for EmployeeRecord {
    fn default() -> Self {
        EmployeeRecord {
            employee_name: String::new(),
            employee_address: String::new(),
            employee_phone: String::new(),
            employee_email: String::new(),
            date_of_birth: String::new(),
            designation: Designation::Asm.code().to_string(),
            department: Department::Sales.code().to_string(),
            date_of_joining: String::new(),
            bank_name: String::new(),
            bank_account_number: String::new(),
            ifsc_code: String::new(),
            pan_number: String::new(),
            aadhar_number: String::new(),
            emergency_contact_name: String::new(),
            emergency_contact_relationship: String::new(),
            emergency_contact_phone: String::new(),
        }
    }
}

impl EmployeeRecord {
    /// Set a field by its form name. Returns false for unknown names.
    pub fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            fields::EMPLOYEE_NAME => self.employee_name = value,
            fields::EMPLOYEE_ADDRESS => self.employee_address = value,
            fields::EMPLOYEE_PHONE => self.employee_phone = value,
            fields::EMPLOYEE_EMAIL => self.employee_email = value,
            fields::DATE_OF_BIRTH => self.date_of_birth = value,
            fields::DESIGNATION => self.designation = value,
            fields::DEPARTMENT => self.department = value,
            fields::DATE_OF_JOINING => self.date_of_joining = value,
            fields::BANK_NAME => self.bank_name = value,
            fields::BANK_ACCOUNT_NUMBER => self.bank_account_number = value,
            fields::IFSC_CODE => self.ifsc_code = value,
            fields::PAN_NUMBER => self.pan_number = value,
            fields::AADHAR_NUMBER => self.aadhar_number = value,
            fields::EMERGENCY_CONTACT_NAME => self.emergency_contact_name = value,
            fields::EMERGENCY_CONTACT_RELATIONSHIP => self.emergency_contact_relationship = value,
            fields::EMERGENCY_CONTACT_PHONE => self.emergency_contact_phone = value,
            _ => return false,
        }
        true
    }
}

/// Job designations offered by the onboarding form.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Designation {
    Asm,
    Sm,
    Csm,
    Tl,
    Se,
    E,
    Je,
}

impl Designation {
    pub const ALL: [Designation; 7] = [
        Designation::Asm,
        Designation::Sm,
        Designation::Csm,
        Designation::Tl,
        Designation::Se,
        Designation::E,
        Designation::Je,
    ];

    /// The short code stored in the record ("ASM", "SM", ...).
    pub fn code(&self) -> &'static str {
        match self {
            Designation::Asm => "ASM",
            Designation::Sm => "SM",
            Designation::Csm => "CSM",
            Designation::Tl => "TL",
            Designation::Se => "SE",
            Designation::E => "E",
            Designation::Je => "JE",
        }
    }

    /// The long label shown next to the code in the designation selector.
    pub fn label(&self) -> &'static str {
        match self {
            Designation::Asm => "Assistant Section Manager",
            Designation::Sm => "Section Manager",
            Designation::Csm => "Customer Service Manager",
            Designation::Tl => "Team Lead",
            Designation::Se => "Senior Executive",
            Designation::E => "Executive",
            Designation::Je => "Junior Executive",
        }
    }

    pub fn from_code(code: &str) -> Option<Designation> {
        Designation::ALL.into_iter().find(|d| d.code() == code)
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Designation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Designation::from_code(s).ok_or_else(|| format!("unknown designation: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_preselects_designation_and_department() {
        let record = EmployeeRecord::default();
        assert_eq!(record.designation, "ASM");
        assert_eq!(record.department, "Sales");
        assert!(record.employee_name.is_empty());
        assert!(record.emergency_contact_phone.is_empty());
    }

    #[test]
    fn test_set_field_by_form_name() {
        let mut record = EmployeeRecord::default();
        assert!(record.set_field(fields::EMPLOYEE_NAME, "Asha Verma".to_string()));
        assert!(record.set_field(fields::IFSC_CODE, "SBIN0001234".to_string()));
        assert_eq!(record.employee_name, "Asha Verma");
        assert_eq!(record.ifsc_code, "SBIN0001234");
    }

    #[test]
    fn test_set_field_unknown_name_rejected() {
        let mut record = EmployeeRecord::default();
        assert!(!record.set_field("salary", "1".to_string()));
        assert_eq!(record, EmployeeRecord::default());
    }

    #[test]
    fn test_record_serializes_with_form_field_names() {
        let record = EmployeeRecord::default();
        let json = serde_json::to_value(&record).unwrap();
        for field in fields::ALL {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
    }

    #[test]
    fn test_designation_code_round_trip() {
        for designation in Designation::ALL {
            assert_eq!(Designation::from_code(designation.code()), Some(designation));
            assert_eq!(designation.code().parse::<Designation>().unwrap(), designation);
        }
        assert_eq!(Designation::Asm.label(), "Assistant Section Manager");
    }

    #[test]
    fn test_designation_unknown_code_rejected() {
        assert!(Designation::from_code("CEO").is_none());
        assert!("asm".parse::<Designation>().is_err());
    }
}

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use validator::{Validate, ValidationError};

use crate::errors::AppError;
use crate::models::department::Department;
use crate::models::employee::{fields, Designation, EmployeeRecord};
use crate::models::step::FormStep;

/// Field name -> human-readable message. Absence of a key means the field
/// is valid; an empty map means the whole record is.
pub type ErrorMap = BTreeMap<&'static str, String>;

/// Youngest age the form accepts; the exact 18th birthday qualifies.
pub const MIN_EMPLOYEE_AGE: i32 = 18;

/// Dates arrive from the form as `YYYY-MM-DD`.
const DATE_FORMAT: &str = "%Y-%m-%d";

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref IFSC_REGEX: Regex = Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").unwrap();
    static ref PAN_REGEX: Regex = Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap();
}

fn digits_of(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Separators and spaces are tolerated; exactly 10 digits must remain.
pub fn validate_phone_number(phone: &str) -> bool {
    digits_of(phone).len() == 10
}

pub fn validate_aadhar_number(aadhar: &str) -> bool {
    digits_of(aadhar).len() == 12
}

pub fn validate_bank_account_number(account_number: &str) -> bool {
    (9..=18).contains(&digits_of(account_number).len())
}

/// Case-insensitive input; matched against the 4-letter + '0' + 6-alphanumeric shape.
pub fn validate_ifsc_code(ifsc: &str) -> bool {
    IFSC_REGEX.is_match(&ifsc.to_uppercase())
}

pub fn validate_pan_number(pan: &str) -> bool {
    PAN_REGEX.is_match(&pan.to_uppercase())
}

/// Completed years between `birth` and `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// A date that does not parse is invalid, never an error.
pub fn validate_date_of_birth_on(dob: &str, today: NaiveDate) -> bool {
    match NaiveDate::parse_from_str(dob, DATE_FORMAT) {
        Ok(birth) => age_on(birth, today) >= MIN_EMPLOYEE_AGE,
        Err(_) => false,
    }
}

pub fn validate_date_of_birth(dob: &str) -> bool {
    validate_date_of_birth_on(dob, Utc::now().date_naive())
}

/// Validate the whole record against `today`. Required-checks win: a blank
/// field reports its "required" message and never a format message.
pub fn validate_form_on(form: &EmployeeRecord, today: NaiveDate) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if form.employee_name.trim().is_empty() {
        errors.insert(fields::EMPLOYEE_NAME, "Employee name is required".to_string());
    }

    if form.employee_address.trim().is_empty() {
        errors.insert(fields::EMPLOYEE_ADDRESS, "Employee address is required".to_string());
    }

    if form.employee_phone.trim().is_empty() {
        errors.insert(fields::EMPLOYEE_PHONE, "Phone number is required".to_string());
    } else if !validate_phone_number(&form.employee_phone) {
        errors.insert(fields::EMPLOYEE_PHONE, "Phone number must be 10 digits".to_string());
    }

    if form.employee_email.trim().is_empty() {
        errors.insert(fields::EMPLOYEE_EMAIL, "Email is required".to_string());
    } else if !validate_email(&form.employee_email) {
        errors.insert(fields::EMPLOYEE_EMAIL, "Invalid email format".to_string());
    }

    if form.date_of_birth.is_empty() {
        errors.insert(fields::DATE_OF_BIRTH, "Date of birth is required".to_string());
    } else if !validate_date_of_birth_on(&form.date_of_birth, today) {
        errors.insert(
            fields::DATE_OF_BIRTH,
            "Employee must be at least 18 years old".to_string(),
        );
    }

    if form.designation.is_empty() {
        errors.insert(fields::DESIGNATION, "Designation is required".to_string());
    }

    if form.department.is_empty() {
        errors.insert(fields::DEPARTMENT, "Department is required".to_string());
    }

    if form.date_of_joining.is_empty() {
        errors.insert(fields::DATE_OF_JOINING, "Date of joining is required".to_string());
    }

    if form.bank_name.trim().is_empty() {
        errors.insert(fields::BANK_NAME, "Bank name is required".to_string());
    }

    if form.bank_account_number.trim().is_empty() {
        errors.insert(
            fields::BANK_ACCOUNT_NUMBER,
            "Bank account number is required".to_string(),
        );
    } else if !validate_bank_account_number(&form.bank_account_number) {
        errors.insert(
            fields::BANK_ACCOUNT_NUMBER,
            "Invalid bank account number (9-18 digits)".to_string(),
        );
    }

    if form.ifsc_code.trim().is_empty() {
        errors.insert(fields::IFSC_CODE, "IFSC code is required".to_string());
    } else if !validate_ifsc_code(&form.ifsc_code) {
        errors.insert(fields::IFSC_CODE, "Invalid IFSC code format".to_string());
    }

    if form.pan_number.trim().is_empty() {
        errors.insert(fields::PAN_NUMBER, "PAN number is required".to_string());
    } else if !validate_pan_number(&form.pan_number) {
        errors.insert(fields::PAN_NUMBER, "Invalid PAN number format".to_string());
    }

    if form.aadhar_number.trim().is_empty() {
        errors.insert(fields::AADHAR_NUMBER, "Aadhar number is required".to_string());
    } else if !validate_aadhar_number(&form.aadhar_number) {
        errors.insert(fields::AADHAR_NUMBER, "Aadhar number must be 12 digits".to_string());
    }

    if form.emergency_contact_name.trim().is_empty() {
        errors.insert(
            fields::EMERGENCY_CONTACT_NAME,
            "Emergency contact name is required".to_string(),
        );
    }

    if form.emergency_contact_relationship.trim().is_empty() {
        errors.insert(
            fields::EMERGENCY_CONTACT_RELATIONSHIP,
            "Relationship is required".to_string(),
        );
    }

    if form.emergency_contact_phone.trim().is_empty() {
        errors.insert(
            fields::EMERGENCY_CONTACT_PHONE,
            "Emergency contact phone is required".to_string(),
        );
    } else if !validate_phone_number(&form.emergency_contact_phone) {
        errors.insert(
            fields::EMERGENCY_CONTACT_PHONE,
            "Phone number must be 10 digits".to_string(),
        );
    }

    errors
}

pub fn validate_form(form: &EmployeeRecord) -> ErrorMap {
    validate_form_on(form, Utc::now().date_naive())
}

/// The subset of the full error map whose keys belong to `step`.
pub fn validate_step_on(form: &EmployeeRecord, step: FormStep, today: NaiveDate) -> ErrorMap {
    validate_form_on(form, today)
        .into_iter()
        .filter(|(field, _)| step.fields().contains(field))
        .collect()
}

pub fn validate_step(form: &EmployeeRecord, step: FormStep) -> ErrorMap {
    validate_step_on(form, step, Utc::now().date_naive())
}

/// Last gate before a record is persisted.
pub fn validate_record<T: Validate>(record: &T) -> Result<(), AppError> {
    record
        .validate()
        .map_err(|err| AppError::Validation(err.to_string()))
}

pub fn check_email(email: &str) -> Result<(), ValidationError> {
    if !validate_email(email) {
        return Err(ValidationError::new("Invalid email format"));
    }
    Ok(())
}

pub fn check_phone_number(phone: &str) -> Result<(), ValidationError> {
    if !validate_phone_number(phone) {
        return Err(ValidationError::new("Phone number must be 10 digits"));
    }
    Ok(())
}

pub fn check_aadhar_number(aadhar: &str) -> Result<(), ValidationError> {
    if !validate_aadhar_number(aadhar) {
        return Err(ValidationError::new("Aadhar number must be 12 digits"));
    }
    Ok(())
}

pub fn check_bank_account_number(account_number: &str) -> Result<(), ValidationError> {
    if !validate_bank_account_number(account_number) {
        return Err(ValidationError::new("Invalid bank account number (9-18 digits)"));
    }
    Ok(())
}

pub fn check_ifsc_code(ifsc: &str) -> Result<(), ValidationError> {
    if !validate_ifsc_code(ifsc) {
        return Err(ValidationError::new("Invalid IFSC code format"));
    }
    Ok(())
}

pub fn check_pan_number(pan: &str) -> Result<(), ValidationError> {
    if !validate_pan_number(pan) {
        return Err(ValidationError::new("Invalid PAN number format"));
    }
    Ok(())
}

pub fn check_date_of_birth(dob: &str) -> Result<(), ValidationError> {
    if !validate_date_of_birth(dob) {
        return Err(ValidationError::new("Employee must be at least 18 years old"));
    }
    Ok(())
}

pub fn check_designation(designation: &str) -> Result<(), ValidationError> {
    if Designation::from_code(designation).is_none() {
        return Err(ValidationError::new(
            "Designation must be one of ASM, SM, CSM, TL, SE, E or JE",
        ));
    }
    Ok(())
}

pub fn check_department(department: &str) -> Result<(), ValidationError> {
    if Department::from_code(department).is_none() {
        return Err(ValidationError::new(
            "Department must be one of Sales, Marketing, IT, HR, Finance, Operations or Support",
        ));
    }
    Ok(())
}

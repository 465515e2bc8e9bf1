//! Employee onboarding: a four-step form workflow with field-format
//! validation and an append-only local store.

pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod utils;

pub use db::{EmployeeStore, JsonFileStore, MemoryStore};
pub use errors::AppError;
pub use handlers::form::{reduce, FormAction, FormConfig, FormController, FormState, SubmitOutcome};
pub use models::department::Department;
pub use models::employee::{Designation, EmployeeRecord};
pub use models::step::FormStep;
pub use utils::validation::{validate_form, validate_step, ErrorMap};

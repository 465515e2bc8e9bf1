use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Departments an employee can be onboarded into.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Sales,
    Marketing,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Operations,
    Support,
}

impl Department {
    pub const ALL: [Department; 7] = [
        Department::Sales,
        Department::Marketing,
        Department::It,
        Department::Hr,
        Department::Finance,
        Department::Operations,
        Department::Support,
    ];

    /// The name stored in the record and shown in the department selector.
    pub fn code(&self) -> &'static str {
        match self {
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::It => "IT",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
            Department::Support => "Support",
        }
    }

    pub fn from_code(code: &str) -> Option<Department> {
        Department::ALL.into_iter().find(|d| d.code() == code)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::from_code(s).ok_or_else(|| format!("unknown department: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_code_round_trip() {
        for department in Department::ALL {
            assert_eq!(Department::from_code(department.code()), Some(department));
            assert_eq!(department.to_string(), department.code());
        }
    }

    #[test]
    fn test_department_unknown_code_rejected() {
        assert!(Department::from_code("Legal").is_none());
        assert!("sales".parse::<Department>().is_err());
    }
}

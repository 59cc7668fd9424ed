use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stored student record. Credentials here are deliberately trivial: the
/// portal keeps the original's plain-text check and hardening is out of scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    #[serde(alias = "regNumber")]
    pub reg_number: String,
    #[serde(alias = "fullName")]
    pub full_name: String,
    pub department: String,
    pub level: u32,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StudentSignup {
    #[serde(alias = "regNumber")]
    #[validate(length(min = 1, message = "registration number is required"))]
    pub reg_number: String,
    #[serde(alias = "fullName")]
    #[validate(length(min = 1, message = "full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "department is required"))]
    pub department: String,
    #[validate(range(min = 100, max = 700, message = "level must be between 100 and 700"))]
    pub level: u32,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    #[serde(alias = "regNumber")]
    pub reg_number: String,
    pub password: String,
}

/// Stored lecturer record, keyed by staff identifier (e.g. `LEC-123`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecturer {
    #[serde(alias = "lecturerId")]
    pub lecturer_id: String,
    #[serde(alias = "name")]
    pub full_name: String,
    pub department: String,
    pub courses: Vec<String>,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LecturerSignup {
    #[serde(alias = "lecturerId")]
    #[validate(length(min = 1, message = "lecturer id is required"))]
    pub lecturer_id: String,
    #[serde(alias = "name")]
    #[validate(length(min = 2, message = "name is too short"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "please select a department"))]
    pub department: String,
    #[validate(length(min = 1, message = "select at least one course"))]
    pub courses: Vec<String>,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LecturerCredentials {
    #[serde(alias = "lecturerId")]
    pub lecturer_id: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_rejects_blank_fields() {
        let signup = StudentSignup {
            reg_number: String::new(),
            full_name: "Ada".to_string(),
            department: "1".to_string(),
            level: 100,
            password: "pass".to_string(),
        };
        assert!(signup.validate().is_err());
    }

    #[test]
    fn signup_level_bounds() {
        let signup = StudentSignup {
            reg_number: "2021/123456".to_string(),
            full_name: "Ada".to_string(),
            department: "1".to_string(),
            level: 800,
            password: "pass".to_string(),
        };
        assert!(signup.validate().is_err());
    }

    fn lecturer_signup() -> LecturerSignup {
        LecturerSignup {
            lecturer_id: "LEC-123".to_string(),
            full_name: "Dr. Eze Nwosu".to_string(),
            department: "1".to_string(),
            courses: vec!["cs101".to_string()],
            password: "lectern".to_string(),
        }
    }

    #[test]
    fn lecturer_signup_requires_a_six_character_password() {
        let mut signup = lecturer_signup();
        signup.password = "short".to_string();
        assert!(signup.validate().is_err());
    }

    #[test]
    fn lecturer_signup_requires_a_course_selection() {
        let mut signup = lecturer_signup();
        signup.courses.clear();
        assert!(signup.validate().is_err());
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Fixed grade banding, inclusive at the lower bound of each band.
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            70..=u8::MAX => Self::A,
            60..=69 => Self::B,
            50..=59 => Self::C,
            45..=49 => Self::D,
            _ => Self::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

/// One completed attempt. Result lists are append-only and never deduped by
/// registration number; repeated attempts accumulate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamResult {
    pub id: String,
    #[serde(alias = "name")]
    pub student_name: String,
    #[serde(alias = "reg")]
    pub reg_number: String,
    /// Percentage score in `[0, 100]`, rounded to the nearest integer.
    pub score: u8,
    pub grade: Grade,
    #[serde(alias = "submittedAt")]
    pub submitted_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banding_boundaries() {
        assert_eq!(Grade::from_percentage(100), Grade::A);
        assert_eq!(Grade::from_percentage(70), Grade::A);
        assert_eq!(Grade::from_percentage(69), Grade::B);
        assert_eq!(Grade::from_percentage(60), Grade::B);
        assert_eq!(Grade::from_percentage(59), Grade::C);
        assert_eq!(Grade::from_percentage(50), Grade::C);
        assert_eq!(Grade::from_percentage(49), Grade::D);
        assert_eq!(Grade::from_percentage(45), Grade::D);
        assert_eq!(Grade::from_percentage(44), Grade::F);
        assert_eq!(Grade::from_percentage(0), Grade::F);
    }
}

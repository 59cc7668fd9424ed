use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: String,
    pub value: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub code: String,
    pub title: String,
    #[serde(alias = "departmentId")]
    pub department_id: String,
    pub level: u32,
}

pub fn default_departments() -> Vec<Department> {
    [
        ("1", "Computer Science"),
        ("2", "Electrical Engineering"),
        ("3", "Mechanical Engineering"),
        ("4", "Business Administration"),
    ]
    .into_iter()
    .map(|(id, name)| Department { id: id.to_string(), name: name.to_string() })
    .collect()
}

pub fn default_levels() -> Vec<Level> {
    [100u32, 200, 300, 400]
        .into_iter()
        .enumerate()
        .map(|(index, value)| Level {
            id: (index + 1).to_string(),
            value,
            label: format!("{value} Level"),
        })
        .collect()
}

pub fn default_courses() -> Vec<Course> {
    [
        ("cs101", "CSC 101", "Introduction to Computer Science", "1", 100u32),
        ("cs201", "CSC 201", "Data Structures", "1", 200),
        ("ee202", "EEE 202", "Circuit Theory", "2", 200),
        ("me301", "MEE 301", "Thermodynamics", "3", 300),
        ("ba401", "BUS 401", "Corporate Strategy", "4", 400),
    ]
    .into_iter()
    .map(|(id, code, title, department_id, level)| Course {
        id: id.to_string(),
        code: code.to_string(),
        title: title.to_string(),
        department_id: department_id.to_string(),
        level,
    })
    .collect()
}

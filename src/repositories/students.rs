use serde_json::json;
use validator::Validate;

use crate::errors::PortalError;
use crate::schemas::user::{Credentials, Student, StudentSignup};
use crate::store::{keys, RecordStore};

pub async fn find_by_reg(
    store: &dyn RecordStore,
    reg_number: &str,
) -> Result<Option<Student>, PortalError> {
    let key = keys::student(reg_number);
    match store.get(&key).await? {
        Some(value) => super::decode(&key, value).map(Some),
        None => Ok(None),
    }
}

pub async fn create(store: &dyn RecordStore, signup: StudentSignup) -> Result<Student, PortalError> {
    signup.validate()?;

    if find_by_reg(store, &signup.reg_number).await?.is_some() {
        return Err(PortalError::single_field(
            "reg_number",
            "a student with this registration number already exists",
        ));
    }

    let student = Student {
        reg_number: signup.reg_number,
        full_name: signup.full_name,
        department: signup.department,
        level: signup.level,
        password: signup.password,
    };
    store.put(&keys::student(&student.reg_number), json!(student)).await?;
    Ok(student)
}

/// Plain equality check against the stored record. The original portal's
/// credential handling is deliberately trivial and out of redesign scope.
pub async fn authenticate(
    store: &dyn RecordStore,
    credentials: &Credentials,
) -> Result<Student, PortalError> {
    let student = find_by_reg(store, &credentials.reg_number)
        .await?
        .filter(|student| student.password == credentials.password);

    student.ok_or_else(|| {
        PortalError::single_field("credentials", "invalid registration number or password")
    })
}

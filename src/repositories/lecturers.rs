use serde_json::json;
use validator::Validate;

use crate::errors::PortalError;
use crate::schemas::user::{Lecturer, LecturerCredentials, LecturerSignup};
use crate::store::{keys, RecordStore};

pub async fn find_by_id(
    store: &dyn RecordStore,
    lecturer_id: &str,
) -> Result<Option<Lecturer>, PortalError> {
    let key = keys::lecturer(lecturer_id);
    match store.get(&key).await? {
        Some(value) => super::decode(&key, value).map(Some),
        None => Ok(None),
    }
}

pub async fn create(
    store: &dyn RecordStore,
    signup: LecturerSignup,
) -> Result<Lecturer, PortalError> {
    signup.validate()?;

    if find_by_id(store, &signup.lecturer_id).await?.is_some() {
        return Err(PortalError::single_field(
            "lecturer_id",
            "a lecturer with this id already exists",
        ));
    }

    let lecturer = Lecturer {
        lecturer_id: signup.lecturer_id,
        full_name: signup.full_name,
        department: signup.department,
        courses: signup.courses,
        password: signup.password,
    };
    store.put(&keys::lecturer(&lecturer.lecturer_id), json!(lecturer)).await?;
    Ok(lecturer)
}

/// Same plain equality check as the student side; credential hardening is
/// out of redesign scope.
pub async fn authenticate(
    store: &dyn RecordStore,
    credentials: &LecturerCredentials,
) -> Result<Lecturer, PortalError> {
    let lecturer = find_by_id(store, &credentials.lecturer_id)
        .await?
        .filter(|lecturer| lecturer.password == credentials.password);

    lecturer.ok_or_else(|| {
        PortalError::single_field("credentials", "invalid lecturer id or password")
    })
}

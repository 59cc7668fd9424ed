use serde_json::json;

use crate::errors::PortalError;
use crate::schemas::catalog::{self, Course, Department, Level};
use crate::store::{keys, RecordStore};

pub async fn departments(store: &dyn RecordStore) -> Result<Vec<Department>, PortalError> {
    match store.get(keys::DEPARTMENTS).await? {
        Some(value) => super::decode(keys::DEPARTMENTS, value),
        None => Ok(catalog::default_departments()),
    }
}

pub async fn levels(store: &dyn RecordStore) -> Result<Vec<Level>, PortalError> {
    match store.get(keys::LEVELS).await? {
        Some(value) => super::decode(keys::LEVELS, value),
        None => Ok(catalog::default_levels()),
    }
}

pub async fn courses(store: &dyn RecordStore) -> Result<Vec<Course>, PortalError> {
    match store.get(keys::COURSES).await? {
        Some(value) => super::decode(keys::COURSES, value),
        None => Ok(catalog::default_courses()),
    }
}

pub async fn save_departments(
    store: &dyn RecordStore,
    records: &[Department],
) -> Result<(), PortalError> {
    store.put(keys::DEPARTMENTS, json!(records)).await?;
    Ok(())
}

pub async fn save_levels(store: &dyn RecordStore, records: &[Level]) -> Result<(), PortalError> {
    store.put(keys::LEVELS, json!(records)).await?;
    Ok(())
}

pub async fn save_courses(store: &dyn RecordStore, records: &[Course]) -> Result<(), PortalError> {
    store.put(keys::COURSES, json!(records)).await?;
    Ok(())
}

/// Idempotent: writes the built-in reference data for any catalog key that
/// has never been stored, so the admin dashboard has a base to edit.
pub async fn seed_defaults(store: &dyn RecordStore) -> Result<(), PortalError> {
    if store.get(keys::DEPARTMENTS).await?.is_none() {
        save_departments(store, &catalog::default_departments()).await?;
    }
    if store.get(keys::LEVELS).await?.is_none() {
        save_levels(store, &catalog::default_levels()).await?;
    }
    if store.get(keys::COURSES).await?.is_none() {
        save_courses(store, &catalog::default_courses()).await?;
        tracing::info!("Catalog defaults seeded");
    }
    Ok(())
}

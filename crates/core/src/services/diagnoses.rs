//! Diagnosis store operations.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::diagnosis::{Diagnosis, NewDiagnosis};
use crate::error::{RecordError, RecordResult};
use crate::seed;

/// Pure diagnosis data operations - no API concerns.
#[derive(Clone)]
pub struct DiagnosisService {
    diagnoses: Arc<RwLock<Vec<Diagnosis>>>,
}

impl DiagnosisService {
    /// Creates a service seeded with the embedded diagnosis codes.
    pub fn seeded() -> RecordResult<Self> {
        Ok(Self::with_diagnoses(seed::diagnoses()?))
    }

    /// Creates a service over the given initial records.
    pub fn with_diagnoses(diagnoses: Vec<Diagnosis>) -> Self {
        Self {
            diagnoses: Arc::new(RwLock::new(diagnoses)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Diagnosis>> {
        self.diagnoses
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Diagnosis>> {
        self.diagnoses
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Lists all known diagnosis codes.
    pub fn list(&self) -> Vec<Diagnosis> {
        self.read().clone()
    }

    /// Stores a new diagnosis.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::DuplicateDiagnosis`] when a diagnosis with the
    /// same code already exists.
    pub fn add(&self, new: NewDiagnosis) -> RecordResult<Diagnosis> {
        let mut diagnoses = self.write();
        if diagnoses.iter().any(|d| d.code == new.code) {
            return Err(RecordError::DuplicateDiagnosis(new.code.into_string()));
        }

        let diagnosis = Diagnosis::from(new);
        diagnoses.push(diagnosis.clone());
        tracing::info!(code = %diagnosis.code, "diagnosis created");
        Ok(diagnosis)
    }
}

//! Patient store operations.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::entry::{Entry, NewEntry};
use crate::error::{RecordError, RecordResult};
use crate::patient::{NewPatient, NonSensitivePatient, Patient};
use crate::seed;

/// Pure patient data operations - no API concerns.
#[derive(Clone)]
pub struct PatientService {
    patients: Arc<RwLock<Vec<Patient>>>,
}

impl PatientService {
    /// Creates a service seeded with the embedded sample patients.
    pub fn seeded() -> RecordResult<Self> {
        Ok(Self::with_patients(seed::patients()?))
    }

    /// Creates a service over the given initial records.
    pub fn with_patients(patients: Vec<Patient>) -> Self {
        Self {
            patients: Arc::new(RwLock::new(patients)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Patient>> {
        self.patients.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Patient>> {
        self.patients
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Lists all patients in their non-sensitive projection.
    pub fn list_non_sensitive(&self) -> Vec<NonSensitivePatient> {
        self.read().iter().map(Patient::non_sensitive).collect()
    }

    /// Looks up a full patient record by id.
    pub fn get(&self, id: Uuid) -> Option<Patient> {
        self.read().iter().find(|p| p.id == id).cloned()
    }

    /// Stores a new patient, assigning ids to the record and any entries
    /// submitted with it.
    pub fn add(&self, new: NewPatient) -> Patient {
        let patient = Patient {
            id: Uuid::new_v4(),
            name: new.name,
            date_of_birth: new.date_of_birth,
            ssn: new.ssn,
            gender: new.gender,
            occupation: new.occupation,
            entries: new
                .entries
                .into_iter()
                .map(|e| e.into_entry(Uuid::new_v4()))
                .collect(),
        };

        self.write().push(patient.clone());
        tracing::info!(patient_id = %patient.id, "patient created");
        patient
    }

    /// Appends a new entry to an existing patient.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::PatientNotFound`] when no patient has the
    /// given id.
    pub fn add_entry(&self, patient_id: Uuid, new: NewEntry) -> RecordResult<Entry> {
        let mut patients = self.write();
        let patient = patients
            .iter_mut()
            .find(|p| p.id == patient_id)
            .ok_or(RecordError::PatientNotFound(patient_id))?;

        let entry = new.into_entry(Uuid::new_v4());
        patient.entries.push(entry.clone());
        tracing::info!(%patient_id, entry_id = %entry.id(), "entry added");
        Ok(entry)
    }
}

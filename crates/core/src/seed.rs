//! Embedded sample data.
//!
//! The service has no durable storage; stores start from the JSON sample data
//! compiled into the binary. A parse failure here is a startup error surfaced
//! through [`RecordError::Seed`], never a handler panic.

use crate::diagnosis::Diagnosis;
use crate::error::{RecordError, RecordResult};
use crate::patient::Patient;

const PATIENTS_JSON: &str = include_str!("../data/patients.json");
const DIAGNOSES_JSON: &str = include_str!("../data/diagnoses.json");

/// Deserialise the embedded patient sample data.
pub fn patients() -> RecordResult<Vec<Patient>> {
    serde_json::from_str(PATIENTS_JSON).map_err(RecordError::Seed)
}

/// Deserialise the embedded diagnosis sample data.
pub fn diagnoses() -> RecordResult<Vec<Diagnosis>> {
    serde_json::from_str(DIAGNOSES_JSON).map_err(RecordError::Seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_patients_parse() {
        let patients = patients().expect("embedded patient data is valid");
        assert_eq!(patients.len(), 5);
        assert!(patients.iter().any(|p| p.name.as_str() == "Dana Scully"));
    }

    #[test]
    fn embedded_diagnoses_parse() {
        let diagnoses = diagnoses().expect("embedded diagnosis data is valid");
        assert!(diagnoses.len() >= 10);
        assert!(diagnoses.iter().any(|d| d.code.as_str() == "Z57.1"));
    }
}

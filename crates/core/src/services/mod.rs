//! Service handles over the in-memory stores.
//!
//! Each service is a cheaply cloneable handle (`Arc<RwLock<Vec<_>>>` inside)
//! intended to be shared across request handlers. Records created through a
//! service live until the process exits.

pub mod diagnoses;
pub mod patients;

pub use diagnoses::DiagnosisService;
pub use patients::PatientService;

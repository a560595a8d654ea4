//! # Medrec Core
//!
//! Core business logic for the medrec patient record service.
//!
//! This crate contains pure data operations over in-memory state:
//! - Patient and diagnosis models with their JSON wire representations
//! - Narrowing of untyped request bodies into typed records (`parse`)
//! - In-memory, seed-backed stores behind cloneable service handles
//!
//! **No API concerns**: HTTP servers, routing, and status-code mapping belong in
//! `api-rest`.

pub mod diagnosis;
pub mod entry;
pub mod error;
pub mod parse;
pub mod patient;
pub mod seed;
pub mod services;

pub use diagnosis::{Diagnosis, NewDiagnosis};
pub use entry::{Discharge, Entry, HealthCheckRating, NewEntry, SickLeave};
pub use error::{RecordError, RecordResult};
pub use medrec_types::{NonEmptyText, TextError};
pub use patient::{Gender, NewPatient, NonSensitivePatient, Patient};
pub use services::{DiagnosisService, PatientService};

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no patient found with id {0}")]
    PatientNotFound(uuid::Uuid),
    #[error("diagnosis code {0} already exists")]
    DuplicateDiagnosis(String),
    #[error("failed to parse embedded seed data: {0}")]
    Seed(serde_json::Error),
}

pub type RecordResult<T> = std::result::Result<T, RecordError>;

//! Diagnosis code models.

use medrec_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An ICD-10 style diagnosis code with its human-readable name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Diagnosis {
    #[schema(value_type = String)]
    pub code: NonEmptyText,
    #[schema(value_type = String)]
    pub name: NonEmptyText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latin: Option<String>,
}

/// A diagnosis as submitted by a client.
///
/// Identical in shape to [`Diagnosis`]; kept as a separate type so the parse
/// layer and the store speak about unvalidated input explicitly.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct NewDiagnosis {
    #[schema(value_type = String)]
    pub code: NonEmptyText,
    #[schema(value_type = String)]
    pub name: NonEmptyText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latin: Option<String>,
}

impl From<NewDiagnosis> for Diagnosis {
    fn from(new: NewDiagnosis) -> Self {
        Diagnosis {
            code: new.code,
            name: new.name,
            latin: new.latin,
        }
    }
}

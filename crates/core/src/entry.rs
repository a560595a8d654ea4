//! Medical entry types.
//!
//! An [`Entry`] is a single medical event attached to a patient: a health
//! check, a hospital stay, or an occupational healthcare visit. The variants
//! are distinguished on the wire by the `type` field, matching the JSON
//! contract of the frontend.
//!
//! [`NewEntry`] carries the same shapes without identifiers; ids are assigned
//! by the service when an entry is stored.

use chrono::NaiveDate;
use medrec_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Outcome of a health check, from best to worst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HealthCheckRating {
    Healthy = 0,
    LowRisk = 1,
    HighRisk = 2,
    CriticalRisk = 3,
}

impl TryFrom<u8> for HealthCheckRating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(HealthCheckRating::Healthy),
            1 => Ok(HealthCheckRating::LowRisk),
            2 => Ok(HealthCheckRating::HighRisk),
            3 => Ok(HealthCheckRating::CriticalRisk),
            other => Err(format!("health check rating out of range: {other}")),
        }
    }
}

impl From<HealthCheckRating> for u8 {
    fn from(rating: HealthCheckRating) -> Self {
        rating as u8
    }
}

// On the wire the rating is a plain integer, so the derived enum schema would
// be wrong here.
impl<'s> utoipa::ToSchema<'s> for HealthCheckRating {
    fn schema() -> (
        &'s str,
        utoipa::openapi::RefOr<utoipa::openapi::schema::Schema>,
    ) {
        (
            "HealthCheckRating",
            utoipa::openapi::RefOr::T(utoipa::openapi::Schema::Object(
                utoipa::openapi::ObjectBuilder::new()
                    .schema_type(utoipa::openapi::SchemaType::Integer)
                    .description(Some("Health check outcome: 0 healthy, 3 critical risk"))
                    .minimum(Some(0.0))
                    .maximum(Some(3.0))
                    .build(),
            )),
        )
    }
}

/// Hospital discharge details.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Discharge {
    pub date: NaiveDate,
    #[schema(value_type = String)]
    pub criteria: NonEmptyText,
}

/// Sick leave period granted during an occupational healthcare visit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SickLeave {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A medical record event tied to a patient.
///
/// Tagged union over the `type` field. Every variant shares the id,
/// description, date, specialist, and optional diagnosis codes; variant
/// specific fields follow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type")]
pub enum Entry {
    #[serde(rename_all = "camelCase")]
    HealthCheck {
        id: Uuid,
        #[schema(value_type = String)]
        description: NonEmptyText,
        date: NaiveDate,
        #[schema(value_type = String)]
        specialist: NonEmptyText,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        diagnosis_codes: Option<Vec<String>>,
        health_check_rating: HealthCheckRating,
    },
    #[serde(rename_all = "camelCase")]
    Hospital {
        id: Uuid,
        #[schema(value_type = String)]
        description: NonEmptyText,
        date: NaiveDate,
        #[schema(value_type = String)]
        specialist: NonEmptyText,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        diagnosis_codes: Option<Vec<String>>,
        discharge: Discharge,
    },
    #[serde(rename_all = "camelCase")]
    OccupationalHealthcare {
        id: Uuid,
        #[schema(value_type = String)]
        description: NonEmptyText,
        date: NaiveDate,
        #[schema(value_type = String)]
        specialist: NonEmptyText,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        diagnosis_codes: Option<Vec<String>>,
        #[schema(value_type = String)]
        employer_name: NonEmptyText,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sick_leave: Option<SickLeave>,
    },
}

impl Entry {
    /// Returns the identifier of the entry regardless of variant.
    pub fn id(&self) -> Uuid {
        match self {
            Entry::HealthCheck { id, .. }
            | Entry::Hospital { id, .. }
            | Entry::OccupationalHealthcare { id, .. } => *id,
        }
    }

    /// Returns the entry date regardless of variant.
    pub fn date(&self) -> NaiveDate {
        match self {
            Entry::HealthCheck { date, .. }
            | Entry::Hospital { date, .. }
            | Entry::OccupationalHealthcare { date, .. } => *date,
        }
    }
}

/// An [`Entry`] without a server-assigned identifier.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
#[serde(tag = "type")]
pub enum NewEntry {
    #[serde(rename_all = "camelCase")]
    HealthCheck {
        #[schema(value_type = String)]
        description: NonEmptyText,
        date: NaiveDate,
        #[schema(value_type = String)]
        specialist: NonEmptyText,
        #[serde(skip_serializing_if = "Option::is_none")]
        diagnosis_codes: Option<Vec<String>>,
        health_check_rating: HealthCheckRating,
    },
    #[serde(rename_all = "camelCase")]
    Hospital {
        #[schema(value_type = String)]
        description: NonEmptyText,
        date: NaiveDate,
        #[schema(value_type = String)]
        specialist: NonEmptyText,
        #[serde(skip_serializing_if = "Option::is_none")]
        diagnosis_codes: Option<Vec<String>>,
        discharge: Discharge,
    },
    #[serde(rename_all = "camelCase")]
    OccupationalHealthcare {
        #[schema(value_type = String)]
        description: NonEmptyText,
        date: NaiveDate,
        #[schema(value_type = String)]
        specialist: NonEmptyText,
        #[serde(skip_serializing_if = "Option::is_none")]
        diagnosis_codes: Option<Vec<String>>,
        #[schema(value_type = String)]
        employer_name: NonEmptyText,
        #[serde(skip_serializing_if = "Option::is_none")]
        sick_leave: Option<SickLeave>,
    },
}

impl NewEntry {
    /// Promote the entry to a stored [`Entry`] under the given identifier.
    pub fn into_entry(self, id: Uuid) -> Entry {
        match self {
            NewEntry::HealthCheck {
                description,
                date,
                specialist,
                diagnosis_codes,
                health_check_rating,
            } => Entry::HealthCheck {
                id,
                description,
                date,
                specialist,
                diagnosis_codes,
                health_check_rating,
            },
            NewEntry::Hospital {
                description,
                date,
                specialist,
                diagnosis_codes,
                discharge,
            } => Entry::Hospital {
                id,
                description,
                date,
                specialist,
                diagnosis_codes,
                discharge,
            },
            NewEntry::OccupationalHealthcare {
                description,
                date,
                specialist,
                diagnosis_codes,
                employer_name,
                sick_leave,
            } => Entry::OccupationalHealthcare {
                id,
                description,
                date,
                specialist,
                diagnosis_codes,
                employer_name,
                sick_leave,
            },
        }
    }
}

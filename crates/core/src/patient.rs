//! Patient models and their wire representations.
//!
//! [`Patient`] is the full record including the social security number.
//! [`NonSensitivePatient`] is the public listing projection: it omits `ssn`
//! and the entry list.

use chrono::NaiveDate;
use medrec_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entry::{Entry, NewEntry};

/// Patient gender as reported at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// A full patient record, including sensitive fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub name: NonEmptyText,
    pub date_of_birth: NaiveDate,
    #[schema(value_type = String)]
    pub ssn: NonEmptyText,
    pub gender: Gender,
    #[schema(value_type = String)]
    pub occupation: NonEmptyText,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Patient {
    /// Projects the record down to its non-sensitive listing view.
    pub fn non_sensitive(&self) -> NonSensitivePatient {
        NonSensitivePatient {
            id: self.id,
            name: self.name.clone(),
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            occupation: self.occupation.clone(),
        }
    }
}

/// Patient projection omitting the social security number and entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NonSensitivePatient {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub name: NonEmptyText,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    #[schema(value_type = String)]
    pub occupation: NonEmptyText,
}

/// A [`Patient`] as submitted by a client, before ids are assigned.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    #[schema(value_type = String)]
    pub name: NonEmptyText,
    pub date_of_birth: NaiveDate,
    #[schema(value_type = String)]
    pub ssn: NonEmptyText,
    pub gender: Gender,
    #[schema(value_type = String)]
    pub occupation: NonEmptyText,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<NewEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scully() -> Patient {
        Patient {
            id: Uuid::new_v4(),
            name: NonEmptyText::new("Dana Scully").unwrap(),
            date_of_birth: NaiveDate::from_ymd_opt(1974, 1, 5).unwrap(),
            ssn: NonEmptyText::new("050174-432N").unwrap(),
            gender: Gender::Female,
            occupation: NonEmptyText::new("Forensic Pathologist").unwrap(),
            entries: vec![],
        }
    }

    #[test]
    fn non_sensitive_projection_omits_ssn_and_entries() {
        let patient = scully();
        let value = serde_json::to_value(patient.non_sensitive()).expect("serialises");

        assert!(value.get("ssn").is_none());
        assert!(value.get("entries").is_none());
        assert_eq!(value["name"], "Dana Scully");
        assert_eq!(value["dateOfBirth"], "1974-01-05");
        assert_eq!(value["gender"], "female");
    }

    #[test]
    fn gender_serialises_lowercase() {
        assert_eq!(
            serde_json::to_value(Gender::Other).expect("serialises"),
            serde_json::json!("other")
        );
        let parsed: Gender = serde_json::from_str("\"male\"").expect("valid gender");
        assert_eq!(parsed, Gender::Male);
    }

    #[test]
    fn patient_without_entries_field_deserialises_to_empty_list() {
        let json = serde_json::json!({
            "id": "d2659692-f723-11e9-8f0b-362b9e155667",
            "name": "Hans Gruber",
            "dateOfBirth": "1970-04-25",
            "ssn": "250470-555L",
            "gender": "other",
            "occupation": "Technician"
        });

        let patient: Patient = serde_json::from_value(json).expect("valid patient");
        assert!(patient.entries.is_empty());
    }
}

//! Narrowing of untyped request bodies into typed records.
//!
//! Request bodies arrive as [`serde_json::Value`] and are narrowed field by
//! field so that a rejection can name the offending field and echo the value
//! that failed, instead of surfacing a generic deserialisation error. Every
//! failure is a [`RecordError::InvalidInput`] carrying the human-readable
//! message the API returns verbatim in a 400 body.
//!
//! Entry narrowing dispatches on the `type` tag: `HealthCheck`, `Hospital`,
//! or `OccupationalHealthcare`. Unknown or missing tags are rejected.

use chrono::NaiveDate;
use medrec_types::NonEmptyText;
use serde_json::{Map, Value};

use crate::diagnosis::NewDiagnosis;
use crate::entry::{Discharge, HealthCheckRating, NewEntry, SickLeave};
use crate::error::{RecordError, RecordResult};
use crate::patient::{Gender, NewPatient};

fn invalid(message: impl Into<String>) -> RecordError {
    RecordError::InvalidInput(message.into())
}

fn as_object<'a>(value: &'a Value, what: &str) -> RecordResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| invalid(format!("incorrect or missing {what}: {value}")))
}

fn parse_text(value: Option<&Value>, field: &str) -> RecordResult<NonEmptyText> {
    let text = value
        .and_then(Value::as_str)
        .ok_or_else(|| missing(field, value))?;
    NonEmptyText::new(text).map_err(|_| missing(field, value))
}

fn parse_date(value: Option<&Value>, field: &str) -> RecordResult<NaiveDate> {
    let text = value
        .and_then(Value::as_str)
        .ok_or_else(|| missing(field, value))?;
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| missing(field, value))
}

fn missing(field: &str, value: Option<&Value>) -> RecordError {
    match value {
        Some(v) => invalid(format!("incorrect or missing {field}: {v}")),
        None => invalid(format!("incorrect or missing {field}")),
    }
}

fn parse_gender(value: Option<&Value>) -> RecordResult<Gender> {
    match value.and_then(Value::as_str) {
        Some("male") => Ok(Gender::Male),
        Some("female") => Ok(Gender::Female),
        Some("other") => Ok(Gender::Other),
        _ => Err(missing("gender", value)),
    }
}

fn parse_rating(value: Option<&Value>) -> RecordResult<HealthCheckRating> {
    let raw = value
        .and_then(Value::as_u64)
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| missing("healthCheckRating", value))?;
    HealthCheckRating::try_from(raw).map_err(|_| missing("healthCheckRating", value))
}

fn parse_diagnosis_codes(value: Option<&Value>) -> RecordResult<Option<Vec<String>>> {
    let Some(value) = value else {
        return Ok(None);
    };

    let items = value
        .as_array()
        .ok_or_else(|| invalid(format!("incorrect diagnosisCodes: {value}")))?;

    let mut codes = Vec::with_capacity(items.len());
    for item in items {
        let code = item
            .as_str()
            .ok_or_else(|| invalid(format!("incorrect diagnosis code: {item}")))?;
        codes.push(code.to_owned());
    }
    Ok(Some(codes))
}

fn parse_discharge(value: Option<&Value>) -> RecordResult<Discharge> {
    let obj = value
        .and_then(Value::as_object)
        .ok_or_else(|| missing("discharge", value))?;
    Ok(Discharge {
        date: parse_date(obj.get("date"), "discharge date")?,
        criteria: parse_text(obj.get("criteria"), "discharge criteria")?,
    })
}

fn parse_sick_leave(value: &Value) -> RecordResult<SickLeave> {
    let obj = as_object(value, "sickLeave")?;
    Ok(SickLeave {
        start_date: parse_date(obj.get("startDate"), "sickLeave startDate")?,
        end_date: parse_date(obj.get("endDate"), "sickLeave endDate")?,
    })
}

/// Narrow an untyped body into a [`NewPatient`].
///
/// Requires `name`, `dateOfBirth`, `ssn`, `gender`, and `occupation`.
/// `entries` is optional and defaults to an empty list; when present each
/// element is narrowed with [`parse_new_entry`].
pub fn parse_new_patient(body: &Value) -> RecordResult<NewPatient> {
    let obj = as_object(body, "data")?;

    let entries = match obj.get("entries") {
        None => Vec::new(),
        Some(value) => {
            let items = value
                .as_array()
                .ok_or_else(|| invalid(format!("incorrect or missing entries: {value}")))?;
            items
                .iter()
                .map(parse_new_entry)
                .collect::<RecordResult<Vec<_>>>()?
        }
    };

    Ok(NewPatient {
        name: parse_text(obj.get("name"), "name")?,
        date_of_birth: parse_date(obj.get("dateOfBirth"), "dateOfBirth")?,
        ssn: parse_text(obj.get("ssn"), "ssn")?,
        gender: parse_gender(obj.get("gender"))?,
        occupation: parse_text(obj.get("occupation"), "occupation")?,
        entries,
    })
}

/// Narrow an untyped body into a [`NewEntry`], dispatching on the `type` tag.
pub fn parse_new_entry(body: &Value) -> RecordResult<NewEntry> {
    let obj = as_object(body, "entry")?;

    let tag = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("entry type", obj.get("type")))?;

    let description = parse_text(obj.get("description"), "description")?;
    let date = parse_date(obj.get("date"), "date")?;
    let specialist = parse_text(obj.get("specialist"), "specialist")?;
    let diagnosis_codes = parse_diagnosis_codes(obj.get("diagnosisCodes"))?;

    match tag {
        "HealthCheck" => Ok(NewEntry::HealthCheck {
            description,
            date,
            specialist,
            diagnosis_codes,
            health_check_rating: parse_rating(obj.get("healthCheckRating"))?,
        }),
        "Hospital" => Ok(NewEntry::Hospital {
            description,
            date,
            specialist,
            diagnosis_codes,
            discharge: parse_discharge(obj.get("discharge"))?,
        }),
        "OccupationalHealthcare" => Ok(NewEntry::OccupationalHealthcare {
            description,
            date,
            specialist,
            diagnosis_codes,
            employer_name: parse_text(obj.get("employerName"), "employerName")?,
            sick_leave: obj.get("sickLeave").map(parse_sick_leave).transpose()?,
        }),
        other => Err(invalid(format!("unknown entry type: {other}"))),
    }
}

/// Narrow an untyped body into a [`NewDiagnosis`].
///
/// Requires `code` and `name`; `latin` is optional but must be a string when
/// present (`null` is treated as absent).
pub fn parse_new_diagnosis(body: &Value) -> RecordResult<NewDiagnosis> {
    let obj = as_object(body, "diagnosis")?;

    let latin = match obj.get("latin") {
        None | Some(Value::Null) => None,
        Some(value) => Some(
            value
                .as_str()
                .ok_or_else(|| missing("latin", Some(value)))?
                .to_owned(),
        ),
    };

    Ok(NewDiagnosis {
        code: parse_text(obj.get("code"), "code")?,
        name: parse_text(obj.get("name"), "name")?,
        latin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_invalid(result: RecordResult<impl std::fmt::Debug>, needle: &str) {
        let err = result.expect_err("expected rejection");
        let message = err.to_string();
        assert!(
            message.contains(needle),
            "expected {message:?} to mention {needle:?}"
        );
    }

    #[test]
    fn accepts_a_minimal_patient() {
        let body = json!({
            "name": "John McClane",
            "dateOfBirth": "1986-07-09",
            "ssn": "090786-122X",
            "gender": "male",
            "occupation": "New york city cop"
        });

        let patient = parse_new_patient(&body).expect("valid patient");
        assert_eq!(patient.name.as_str(), "John McClane");
        assert_eq!(patient.gender, Gender::Male);
        assert!(patient.entries.is_empty());
    }

    #[test]
    fn rejects_a_missing_name() {
        let body = json!({
            "dateOfBirth": "1986-07-09",
            "ssn": "090786-122X",
            "gender": "male",
            "occupation": "Cop"
        });
        assert_invalid(parse_new_patient(&body), "name");
    }

    #[test]
    fn rejects_a_malformed_gender() {
        let body = json!({
            "name": "John McClane",
            "dateOfBirth": "1986-07-09",
            "ssn": "090786-122X",
            "gender": "cop",
            "occupation": "Cop"
        });
        assert_invalid(parse_new_patient(&body), "gender");
    }

    #[test]
    fn rejects_an_impossible_date_of_birth() {
        let body = json!({
            "name": "John McClane",
            "dateOfBirth": "1986-13-40",
            "ssn": "090786-122X",
            "gender": "male",
            "occupation": "Cop"
        });
        assert_invalid(parse_new_patient(&body), "dateOfBirth");
    }

    #[test]
    fn a_patient_may_arrive_with_entries() {
        let body = json!({
            "name": "Martin Riggs",
            "dateOfBirth": "1979-01-30",
            "ssn": "300179-777A",
            "gender": "male",
            "occupation": "Cop",
            "entries": [{
                "type": "OccupationalHealthcare",
                "description": "Minor radiation poisoning.",
                "date": "2019-08-05",
                "specialist": "MD House",
                "employerName": "HyPD",
                "sickLeave": { "startDate": "2019-08-05", "endDate": "2019-08-28" }
            }]
        });

        let patient = parse_new_patient(&body).expect("valid patient");
        assert_eq!(patient.entries.len(), 1);
        assert!(matches!(
            patient.entries[0],
            NewEntry::OccupationalHealthcare { .. }
        ));
    }

    #[test]
    fn accepts_a_health_check_entry() {
        let body = json!({
            "type": "HealthCheck",
            "description": "Yearly control visit. Doing fine.",
            "date": "2019-10-20",
            "specialist": "MD House",
            "healthCheckRating": 0
        });

        let entry = parse_new_entry(&body).expect("valid entry");
        let NewEntry::HealthCheck {
            health_check_rating,
            diagnosis_codes,
            ..
        } = entry
        else {
            panic!("expected a HealthCheck entry");
        };
        assert_eq!(health_check_rating, HealthCheckRating::Healthy);
        assert!(diagnosis_codes.is_none());
    }

    #[test]
    fn rejects_an_out_of_range_rating() {
        let body = json!({
            "type": "HealthCheck",
            "description": "Checkup",
            "date": "2019-10-20",
            "specialist": "MD House",
            "healthCheckRating": 4
        });
        assert_invalid(parse_new_entry(&body), "healthCheckRating");
    }

    #[test]
    fn rejects_a_non_integer_rating() {
        let body = json!({
            "type": "HealthCheck",
            "description": "Checkup",
            "date": "2019-10-20",
            "specialist": "MD House",
            "healthCheckRating": "high"
        });
        assert_invalid(parse_new_entry(&body), "healthCheckRating");
    }

    #[test]
    fn hospital_entry_requires_a_discharge() {
        let body = json!({
            "type": "Hospital",
            "description": "Two day stay",
            "date": "2019-10-20",
            "specialist": "MD House"
        });
        assert_invalid(parse_new_entry(&body), "discharge");
    }

    #[test]
    fn discharge_criteria_may_be_any_text() {
        let body = json!({
            "type": "Hospital",
            "description": "Two day stay",
            "date": "2019-10-20",
            "specialist": "MD House",
            "discharge": { "date": "2019-10-22", "criteria": "Thumb has healed." }
        });

        let entry = parse_new_entry(&body).expect("valid entry");
        let NewEntry::Hospital { discharge, .. } = entry else {
            panic!("expected a Hospital entry");
        };
        assert_eq!(discharge.criteria.as_str(), "Thumb has healed.");
    }

    #[test]
    fn occupational_entry_requires_an_employer() {
        let body = json!({
            "type": "OccupationalHealthcare",
            "description": "Workplace visit",
            "date": "2019-08-05",
            "specialist": "MD House"
        });
        assert_invalid(parse_new_entry(&body), "employerName");
    }

    #[test]
    fn sick_leave_is_optional_but_validated_when_present() {
        let body = json!({
            "type": "OccupationalHealthcare",
            "description": "Workplace visit",
            "date": "2019-08-05",
            "specialist": "MD House",
            "employerName": "HyPD",
            "sickLeave": { "startDate": "2019-08-05", "endDate": "not a date" }
        });
        assert_invalid(parse_new_entry(&body), "endDate");
    }

    #[test]
    fn rejects_an_unknown_entry_type() {
        let body = json!({
            "type": "HospitalEntry",
            "description": "Two day stay",
            "date": "2019-10-20",
            "specialist": "MD House"
        });
        assert_invalid(parse_new_entry(&body), "unknown entry type");
    }

    #[test]
    fn rejects_non_string_diagnosis_codes() {
        let body = json!({
            "type": "HealthCheck",
            "description": "Checkup",
            "date": "2019-10-20",
            "specialist": "MD House",
            "healthCheckRating": 1,
            "diagnosisCodes": ["Z57.1", 42]
        });
        assert_invalid(parse_new_entry(&body), "diagnosis code");
    }

    #[test]
    fn diagnosis_latin_null_is_treated_as_absent() {
        let body = json!({ "code": "J06.9", "name": "Acute URI", "latin": null });
        let diagnosis = parse_new_diagnosis(&body).expect("valid diagnosis");
        assert!(diagnosis.latin.is_none());
    }

    #[test]
    fn diagnosis_requires_code_and_name() {
        assert_invalid(parse_new_diagnosis(&json!({ "name": "Acute URI" })), "code");
        assert_invalid(parse_new_diagnosis(&json!({ "code": "J06.9" })), "name");
    }

    #[test]
    fn rejects_a_non_object_body() {
        assert_invalid(parse_new_patient(&json!("not an object")), "data");
        assert_invalid(parse_new_entry(&json!(null)), "entry");
    }
}

//! Field contract for monkey payloads.
//!
//! Create and update share one set of rules. The raw JSON body is checked field by
//! field and every violation is collected, so a client fixing a form sees all of its
//! mistakes in one round trip.

use crate::model::{MonkeyFields, ValidationErrors};
use serde_json::Value;

pub const NAME: &str = "name";
pub const SPECIES: &str = "species";
pub const AGE_YEARS: &str = "age_years";
pub const FAVOURITE_FRUIT: &str = "favourite_fruit";
pub const LAST_CHECKUP_AT: &str = "last_checkup_at";
const DESCRIPTION: &str = "description";

const MIN_AGE: f64 = 0.0;
const MAX_AGE: f64 = 100.0;

/// Validates a raw request body. Anything that is not a JSON object fails every field.
pub fn validate(body: &Value) -> Result<MonkeyFields, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = errors.check(
        NAME,
        "Name is required and must be a non-empty string",
        trimmed_text(body.get(NAME)),
    );
    let species = errors.check(
        SPECIES,
        "Species is required and must be a non-empty string",
        trimmed_text(body.get(SPECIES)),
    );
    let age_years = errors.check(
        AGE_YEARS,
        "Age must be a number between 0 and 100",
        age(body.get(AGE_YEARS)),
    );
    let favourite_fruit = errors.check(
        FAVOURITE_FRUIT,
        "Favourite fruit is required and must be a non-empty string",
        trimmed_text(body.get(FAVOURITE_FRUIT)),
    );
    let last_checkup_at = errors.check(
        LAST_CHECKUP_AT,
        "Last checkup date is required and must be a valid date string",
        body.get(LAST_CHECKUP_AT)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    );

    match (name, species, age_years, favourite_fruit, last_checkup_at) {
        (
            Some(name),
            Some(species),
            Some(age_years),
            Some(favourite_fruit),
            Some(last_checkup_at),
        ) => Ok(MonkeyFields {
            name,
            species,
            age_years,
            favourite_fruit,
            last_checkup_at,
            description: body
                .get(DESCRIPTION)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }),
        _ => Err(errors),
    }
}

fn trimmed_text(value: Option<&Value>) -> Option<String> {
    let text = value?.as_str()?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

// Fractional ages are accepted and stored truncated, the column is an INTEGER.
fn age(value: Option<&Value>) -> Option<i64> {
    let years = value?.as_f64()?;
    (MIN_AGE..=MAX_AGE)
        .contains(&years)
        .then(|| years.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coco() -> Value {
        json!({
            "name": "Coco",
            "species": "Capuchin",
            "age_years": 5,
            "favourite_fruit": "Banana",
            "last_checkup_at": "2024-01-01"
        })
    }

    #[test]
    fn valid_payload_is_normalised() {
        let mut body = coco();
        body["name"] = json!("  Coco  ");
        body["favourite_fruit"] = json!(" Banana");

        let fields = validate(&body).unwrap();
        assert_eq!(fields.name, "Coco");
        assert_eq!(fields.favourite_fruit, "Banana");
        assert_eq!(fields.age_years, 5);
        assert_eq!(fields.description, None);
    }

    #[test]
    fn age_bounds_are_inclusive() {
        for (age, ok) in [(0, true), (100, true), (-1, false), (101, false), (150, false)] {
            let mut body = coco();
            body["age_years"] = json!(age);
            assert_eq!(validate(&body).is_ok(), ok, "age {age}");
        }
    }

    #[test]
    fn fractional_age_is_truncated() {
        let mut body = coco();
        body["age_years"] = json!(7.9);
        assert_eq!(validate(&body).unwrap().age_years, 7);
    }

    #[test]
    fn numeric_string_age_is_rejected() {
        let mut body = coco();
        body["age_years"] = json!("5");
        let errors = validate(&body).unwrap_err();
        assert!(errors.contains(AGE_YEARS));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn all_failures_are_reported_together() {
        let body = json!({
            "name": "   ",
            "age_years": 150,
            "favourite_fruit": 3,
            "last_checkup_at": ""
        });
        let errors = validate(&body).unwrap_err();
        let fields: Vec<_> = errors.to_map().into_keys().collect();
        assert_eq!(
            fields,
            [AGE_YEARS, FAVOURITE_FRUIT, LAST_CHECKUP_AT, NAME, SPECIES]
        );
    }

    #[test]
    fn non_object_body_fails_every_field() {
        let errors = validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn empty_description_is_dropped() {
        let mut body = coco();
        body["description"] = json!("");
        assert_eq!(validate(&body).unwrap().description, None);

        body["description"] = json!("Loves climbing.");
        assert_eq!(
            validate(&body).unwrap().description.as_deref(),
            Some("Loves climbing.")
        );
    }
}

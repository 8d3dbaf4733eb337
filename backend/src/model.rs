//! Backend-side shapes of a monkey payload that sit between the wire model in
//! `common` and the store. The validator produces them, the store and the error
//! layer consume them.

use common::model::monkey::Monkey;
use std::collections::BTreeMap;

/// The validated, normalised payload of a create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonkeyFields {
    pub name: String,
    pub species: String,
    pub age_years: i64,
    pub favourite_fruit: String,
    pub last_checkup_at: String,
    pub description: Option<String>,
}

impl MonkeyFields {
    /// Turns a freshly validated payload into a new record. Both timestamps start
    /// out equal.
    pub fn into_record(self, monkey_id: String, timestamp: String) -> Monkey {
        Monkey {
            monkey_id,
            name: self.name,
            species: self.species,
            age_years: self.age_years,
            favourite_fruit: self.favourite_fruit,
            last_checkup_at: self.last_checkup_at,
            description: self.description,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        }
    }
}

/// Field name to human-readable reason, for every field that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, &'static str>);

impl ValidationErrors {
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(field, reason)| (field.to_string(), reason.to_string()))
            .collect()
    }

    /// Records `reason` against `field` when `value` is missing and passes the
    /// value through otherwise.
    pub(crate) fn check<T>(
        &mut self,
        field: &'static str,
        reason: &'static str,
        value: Option<T>,
    ) -> Option<T> {
        if value.is_none() {
            self.0.insert(field, reason);
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_values_are_recorded() {
        let mut errors = ValidationErrors::default();
        assert_eq!(errors.check("name", "Name is required", Some("Coco")), Some("Coco"));
        assert_eq!(errors.check::<i64>("age_years", "Age is required", None), None);

        assert_eq!(errors.len(), 1);
        assert!(errors.contains("age_years"));
        assert!(!errors.contains("name"));
        assert_eq!(errors.to_map()["age_years"], "Age is required");
    }

    #[test]
    fn new_record_starts_with_equal_timestamps() {
        let fields = MonkeyFields {
            name: "Coco".to_string(),
            species: "Capuchin".to_string(),
            age_years: 5,
            favourite_fruit: "Banana".to_string(),
            last_checkup_at: "2024-01-01".to_string(),
            description: None,
        };
        let record =
            fields.into_record("id-1".to_string(), "2024-01-01T00:00:00.000Z".to_string());
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(record.monkey_id, "id-1");
        assert_eq!(record.name, "Coco");
    }
}

use serde::{Deserialize, Serialize};

/// A single row of the registry, exactly as it is stored and returned by the API.
///
/// `monkey_id`, `created_at` and `updated_at` are assigned by the server. Timestamps
/// are RFC 3339 UTC strings with millisecond precision, so they sort lexically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monkey {
    /// UUID v4 minted at creation. Never reused.
    pub monkey_id: String,
    pub name: String,
    pub species: String,
    /// Always within `0..=100`.
    pub age_years: i64,
    pub favourite_fruit: String,
    /// Date string as supplied by the client; not calendar-checked.
    pub last_checkup_at: String,
    /// `None` until a description is generated and saved through an update.
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_description_serializes_as_null() {
        let monkey = Monkey {
            monkey_id: "m-1".to_string(),
            name: "Coco".to_string(),
            species: "Capuchin".to_string(),
            age_years: 5,
            favourite_fruit: "Banana".to_string(),
            last_checkup_at: "2024-01-01".to_string(),
            description: None,
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            updated_at: "2024-01-01T00:00:00.000Z".to_string(),
        };

        let json = serde_json::to_value(&monkey).unwrap();
        assert!(json["description"].is_null());
        assert_eq!(json["age_years"], 5);
        assert_eq!(json["monkey_id"], "m-1");
    }
}

//! Deterministic description text.
//!
//! `generate` fills a fixed template from the monkey's attributes. Missing optional
//! attributes fall back to neutral wording, so only `species` is required.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde_json::Value;

const DEFAULT_NAME: &str = "This monkey";
const DEFAULT_AGE: &str = "an estimated";

/// Attributes the template draws on, extracted from a loosely typed request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionInput {
    pub name: Option<String>,
    pub species: String,
    pub age_years: Option<String>,
    pub favourite_fruit: Option<String>,
    pub last_checkup_at: Option<String>,
}

impl DescriptionInput {
    /// Reads the template attributes from a JSON body.
    ///
    /// Returns `None` when `species` is absent, not a string, or blank. Optional
    /// attributes that are empty or of the wrong type are treated as absent.
    /// `age_years` may be a number or a string; a numeric zero counts as absent.
    pub fn from_json(body: &Value) -> Option<Self> {
        let species = body.get("species")?.as_str()?.trim();
        if species.is_empty() {
            return None;
        }

        Some(Self {
            name: text(body.get("name")),
            species: species.to_string(),
            age_years: age_text(body.get("age_years")),
            favourite_fruit: text(body.get("favourite_fruit")),
            last_checkup_at: text(body.get("last_checkup_at")),
        })
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// Numbers print as floats do, so `5.0` reads as `5`.
fn age_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|years| *years != 0.0)
            .map(|years| years.to_string()),
        other => text(other),
    }
}

/// Renders the description. Pure: no clock, no randomness, no I/O.
pub fn generate(input: &DescriptionInput) -> String {
    let name = input.name.as_deref().unwrap_or(DEFAULT_NAME);
    let species = input.species.as_str();
    let age = input.age_years.as_deref().unwrap_or(DEFAULT_AGE);
    let preferred_fruit = input.favourite_fruit.as_deref().unwrap_or("various fruits");
    let diet_fruit = input.favourite_fruit.as_deref().unwrap_or("fruits");
    let checkup = checkup_phrase(input.last_checkup_at.as_deref());

    format!(
        "{name} is a fascinating {species} specimen.\n\n\
         **Physical Characteristics**: As a {species}, this primate exhibits the distinctive \
         features of their species, including their characteristic body structure and adaptive \
         traits. {species} monkeys are known for their remarkable physical adaptations that help \
         them thrive in their natural habitats.\n\n\
         **Behavioral Notes**: At {age} years old, this individual shows typical behaviors for \
         their species. Their preference for {preferred_fruit} indicates a healthy diet and \
         natural foraging instincts. {species} monkeys are highly social creatures with complex \
         communication patterns and intelligent problem-solving abilities.\n\n\
         **Diet and Nutrition**: The preference for {diet_fruit} is typical of {species} monkeys, \
         who are primarily frugivorous but also consume leaves, insects, and other plant \
         materials. Their dietary choices play a crucial role in seed dispersal within their \
         ecosystem.\n\n\
         **Care Information**: Regular checkups are essential for monitoring health and \
         wellbeing. The most recent checkup was {checkup}. Proper veterinary care ensures optimal \
         health and early detection of any potential issues.\n\n\
         **Conservation Status**: {species} monkeys play an important role in their ecosystem \
         and deserve our continued protection and study. They serve as crucial pollinators and \
         seed dispersers, making them keystone species in their natural habitats.\n\n\
         **Habitat Requirements**: {species} monkeys require spacious environments with adequate \
         climbing structures, social interaction opportunities, and environmental enrichment to \
         maintain their physical and psychological well-being.\n\n\
         *This comprehensive description was generated based on the provided characteristics \
         and general knowledge about {species} monkeys. Each individual monkey has unique \
         personality traits and behaviors that make them special.*"
    )
}

fn checkup_phrase(last_checkup_at: Option<&str>) -> String {
    match last_checkup_at {
        Some(raw) => format!("on {}", short_date(raw).unwrap_or_else(|| raw.to_string())),
        None => "recorded in the system".to_string(),
    }
}

/// `M/D/YYYY` for a `YYYY-MM-DD` date or an RFC 3339 timestamp (taken in UTC).
fn short_date(raw: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })?;
    Some(format!("{}/{}/{}", date.month(), date.day(), date.year()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coco() -> DescriptionInput {
        DescriptionInput::from_json(&json!({
            "name": "Coco",
            "species": "Capuchin",
            "age_years": 5,
            "favourite_fruit": "Banana",
            "last_checkup_at": "2024-01-01"
        }))
        .unwrap()
    }

    #[test]
    fn identical_input_gives_identical_text() {
        assert_eq!(generate(&coco()), generate(&coco()));
    }

    #[test]
    fn attributes_are_woven_into_the_text() {
        let text = generate(&coco());
        assert!(text.starts_with("Coco is a fascinating Capuchin specimen.\n\n"));
        assert!(text.contains("At 5 years old"));
        assert!(text.contains("Their preference for Banana indicates"));
        assert!(text.contains("The most recent checkup was on 1/1/2024."));
        assert!(!text.contains("  "));
    }

    #[test]
    fn optional_attributes_fall_back_to_neutral_wording() {
        let input = DescriptionInput::from_json(&json!({ "species": "Tamarin" })).unwrap();
        let text = generate(&input);
        assert!(text.starts_with("This monkey is a fascinating Tamarin specimen."));
        assert!(text.contains("At an estimated years old"));
        assert!(text.contains("Their preference for various fruits"));
        assert!(text.contains("The preference for fruits is typical of Tamarin monkeys"));
        assert!(text.contains("The most recent checkup was recorded in the system."));
    }

    #[test]
    fn species_is_required() {
        assert!(DescriptionInput::from_json(&json!({ "name": "Coco" })).is_none());
        assert!(DescriptionInput::from_json(&json!({ "species": "  " })).is_none());
        assert!(DescriptionInput::from_json(&json!({ "species": 4 })).is_none());
    }

    #[test]
    fn checkup_dates_render_as_short_dates() {
        assert_eq!(short_date("2024-12-25").as_deref(), Some("12/25/2024"));
        assert_eq!(
            short_date("2024-03-09T23:30:00-02:00").as_deref(),
            Some("3/10/2024")
        );
        assert_eq!(short_date("last tuesday"), None);
        assert_eq!(checkup_phrase(Some("last tuesday")), "on last tuesday");
    }

    #[test]
    fn string_age_is_accepted() {
        let input =
            DescriptionInput::from_json(&json!({ "species": "Gibbon", "age_years": "12" })).unwrap();
        assert!(generate(&input).contains("At 12 years old"));
    }

    #[test]
    fn zero_age_uses_the_default_wording() {
        let input =
            DescriptionInput::from_json(&json!({ "species": "Tamarin", "age_years": 0 })).unwrap();
        assert_eq!(input.age_years, None);
        assert!(generate(&input).contains("At an estimated years old"));
    }

    #[test]
    fn whole_float_age_drops_the_fraction() {
        let input =
            DescriptionInput::from_json(&json!({ "species": "Tamarin", "age_years": 5.0 })).unwrap();
        assert!(generate(&input).contains("At 5 years old"));

        let input =
            DescriptionInput::from_json(&json!({ "species": "Tamarin", "age_years": 7.5 })).unwrap();
        assert!(generate(&input).contains("At 7.5 years old"));
    }
}

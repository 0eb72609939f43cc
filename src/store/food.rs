//! Food record model

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stored Food record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    /// Server-assigned identifier
    pub id: u64,
    pub name: String,
    pub description: String,
    pub venue: String,
}

impl Food {
    /// Attach an id to an input record
    pub fn with_id(id: u64, food: NewFood) -> Self {
        Self {
            id,
            name: food.name,
            description: food.description,
            venue: food.venue,
        }
    }

    /// Key that must stay unique across the store
    pub(crate) fn unique_key(&self) -> (String, String) {
        (self.name.clone(), self.venue.clone())
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -- served by: {}",
            self.name, self.description, self.venue
        )
    }
}

/// Food fields supplied by a client, before an id exists.
///
/// Missing form fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFood {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub venue: String,
}

impl NewFood {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            venue: venue.into(),
        }
    }
}

/// Exact-match search criteria.
///
/// A field that is `None` or empty does not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodFilter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
}

impl FoodFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn by_venue(venue: impl Into<String>) -> Self {
        Self {
            venue: Some(venue.into()),
            ..Default::default()
        }
    }

    /// Build from raw query pairs. The first value of a repeated key wins;
    /// unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut filter.name,
                "description" => &mut filter.description,
                "venue" => &mut filter.venue,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        filter
    }

    /// True when no field constrains the search
    pub fn is_empty(&self) -> bool {
        constraint(&self.name).is_none()
            && constraint(&self.description).is_none()
            && constraint(&self.venue).is_none()
    }

    /// Check a record against every active constraint
    pub fn matches(&self, food: &Food) -> bool {
        field_matches(&self.name, &food.name)
            && field_matches(&self.description, &food.description)
            && field_matches(&self.venue, &food.venue)
    }
}

fn constraint(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn field_matches(expected: &Option<String>, actual: &str) -> bool {
    constraint(expected).map_or(true, |value| value == actual)
}

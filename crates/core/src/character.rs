//! Character field records

use serde::{Deserialize, Serialize};

/// The subset of character attributes a user can edit locally.
///
/// Every field is a plain string; the remote source models missing data as
/// `"unknown"` or `"n/a"`, never as an absent key, and local edits keep that
/// convention (an empty string, not omission).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterFields {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
}

/// A locally saved override for one character.
///
/// Owned by the override store: created or replaced on save, removed on
/// delete. `uid` always matches the key the record is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCharacter {
    pub uid: String,
    #[serde(flatten)]
    pub fields: CharacterFields,
    /// ISO-8601 UTC timestamp of the last save, millisecond precision.
    #[serde(rename = "lastModified")]
    pub last_modified: String,
}

impl StoredCharacter {
    pub fn new(uid: impl Into<String>, fields: CharacterFields, last_modified: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            fields,
            last_modified: last_modified.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luke() -> CharacterFields {
        CharacterFields {
            name: "Luke Skywalker".to_string(),
            height: "172".to_string(),
            mass: "77".to_string(),
            hair_color: "blond".to_string(),
            skin_color: "fair".to_string(),
            eye_color: "blue".to_string(),
            birth_year: "19BBY".to_string(),
            gender: "male".to_string(),
        }
    }

    #[test]
    fn stored_character_serializes_flat() {
        let stored = StoredCharacter::new("1", luke(), "2023-01-01T00:00:00.000Z");
        let json = serde_json::to_value(&stored).unwrap();

        // The on-disk layout is flat: uid, the eight fields, lastModified.
        assert_eq!(json["uid"], "1");
        assert_eq!(json["name"], "Luke Skywalker");
        assert_eq!(json["hair_color"], "blond");
        assert_eq!(json["lastModified"], "2023-01-01T00:00:00.000Z");
        assert_eq!(json.as_object().unwrap().len(), 10);
    }

    #[test]
    fn stored_character_round_trips() {
        let stored = StoredCharacter::new("42", luke(), "2023-01-01T00:00:00.000Z");
        let json = serde_json::to_string(&stored).unwrap();
        let back: StoredCharacter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stored);
    }
}

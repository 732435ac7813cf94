//! Paste row model matching the remote table schema.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored paste, as persisted in the remote `Pastes` table.
///
/// The identifier is minted once at creation; all fields are immutable
/// afterwards (no edit operation exists).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paste {
    pub id: String,
    pub code: String,
    pub lang: String,
    pub name: String,
}

impl Paste {
    /// Create a new paste under a fresh time-ordered identifier.
    ///
    /// # Arguments
    /// - `code`: Paste content.
    /// - `lang`: Canonical language tag (`codes[0]` of a catalog entry).
    /// - `name`: Paste title.
    ///
    /// # Returns
    /// A new [`Paste`] ready to insert.
    pub fn new(code: String, lang: String, name: String) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            code,
            lang,
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Paste;

    #[test]
    fn new_mints_distinct_time_ordered_ids() {
        let a = Paste::new("a".into(), "md".into(), "first".into());
        let b = Paste::new("b".into(), "md".into(), "second".into());
        assert_ne!(a.id, b.id);
        let parsed = uuid::Uuid::parse_str(&a.id).expect("valid uuid");
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn serializes_with_table_column_names() {
        let paste = Paste::new("print(1)".into(), "python".into(), "t".into());
        let value = serde_json::to_value(&paste).expect("serialize");
        let object = value.as_object().expect("object");
        for column in ["id", "code", "lang", "name"] {
            assert!(object.contains_key(column), "missing column {}", column);
        }
        assert_eq!(object.len(), 4);
    }
}

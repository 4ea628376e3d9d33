//! Record and Entity implementations for [`Character`].
//!
//! Creation and updates take free-form JSON fields. The fields are merged into the
//! record's JSON form and deserialized back, so unknown fields are kept and `name` is
//! type-checked. A `status` in the payload must be a string or `null`; stored records
//! are never checked. The `id` is always assigned by the actor and
//! can never be set or changed through the payload.

use serde_json::Value;

use crate::framework::{Entity, Record};
use crate::model::{Character, Document, Fields};

impl Record for Character {
    const KIND: &'static str = "Character";

    fn id(&self) -> u64 {
        self.id
    }

    fn collection(doc: &Document) -> &[Self] {
        &doc.characters
    }
}

impl Entity for Character {
    type Create = Fields;
    type Update = Fields;

    fn collection_mut(doc: &mut Document) -> &mut Vec<Self> {
        &mut doc.characters
    }

    fn from_create_params(id: u64, params: Fields) -> Result<Self, String> {
        check_status(&params)?;
        let mut record = Fields::new();
        record.insert("id".to_string(), Value::from(id));
        record.extend(params.into_iter().filter(|(key, _)| key != "id"));
        serde_json::from_value(Value::Object(record)).map_err(|e| e.to_string())
    }

    /// Merges `update` over the current fields. Unspecified fields are retained.
    fn on_update(&mut self, update: Fields) -> Result<(), String> {
        check_status(&update)?;
        let Value::Object(mut record) = serde_json::to_value(&*self).map_err(|e| e.to_string())?
        else {
            return Err("character is not a JSON object".to_string());
        };
        record.extend(update.into_iter().filter(|(key, _)| key != "id"));
        *self = serde_json::from_value(Value::Object(record)).map_err(|e| e.to_string())?;
        Ok(())
    }
}

fn check_status(payload: &Fields) -> Result<(), String> {
    match payload.get("status") {
        None | Some(Value::Null) | Some(Value::String(_)) => Ok(()),
        Some(other) => Err(format!("status must be a string, got {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_create_ignores_payload_id() {
        let character =
            Character::from_create_params(17, fields(json!({"id": 1, "name": "Carol Peletier"})))
                .unwrap();
        assert_eq!(character.id, 17);
        assert_eq!(character.name, "Carol Peletier");
        assert_eq!(character.status(), None);
    }

    #[test]
    fn test_update_merges_fields() {
        let mut character = Character::new(4, "Maggie Greene", "Alive");
        character.extra.insert("actor".into(), json!("Lauren Cohan"));

        character
            .on_update(fields(json!({"status": "Deceased", "seasons": [1, 2]})))
            .unwrap();

        assert_eq!(character.id, 4);
        assert_eq!(character.name, "Maggie Greene");
        assert_eq!(character.status(), Some("Deceased"));
        assert_eq!(character.extra["actor"], "Lauren Cohan");
        assert_eq!(character.extra["seasons"], json!([1, 2]));
    }

    #[test]
    fn test_rejected_update_leaves_character_untouched() {
        let mut character = Character::new(4, "Maggie Greene", "Alive");
        let before = character.clone();
        assert!(character.on_update(fields(json!({"name": null}))).is_err());
        assert!(character.on_update(fields(json!({"status": ["alive"]}))).is_err());
        assert_eq!(character, before);
    }

    #[test]
    fn test_null_status_update_keeps_the_key() {
        let mut character = Character::new(4, "Maggie Greene", "Alive");
        character.on_update(fields(json!({"status": null}))).unwrap();
        assert_eq!(character.status(), None);
        assert_eq!(character.extra["status"], Value::Null);
    }
}

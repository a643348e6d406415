//! Record ids arrive as JSON numbers from some endpoints and as strings (cart
//! keys) from others; the client always keeps them as strings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Str(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => n.to_string(),
            RawId::Str(s) => s,
        }
    }
}

pub fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(String::from)
}

pub fn deserialize_opt_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<RawId>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
        #[serde(default, deserialize_with = "deserialize_opt_id")]
        other: Option<String>,
    }

    #[test]
    fn test_numeric_and_string_ids() {
        let h: Holder = serde_json::from_str(r#"{"id": 15, "other": "a-7"}"#).unwrap();
        assert_eq!(h.id, "15");
        assert_eq!(h.other.as_deref(), Some("a-7"));

        let h: Holder = serde_json::from_str(r#"{"id": "15"}"#).unwrap();
        assert_eq!(h.id, "15");
        assert_eq!(h.other, None);

        let h: Holder = serde_json::from_str(r#"{"id": 1, "other": null}"#).unwrap();
        assert_eq!(h.other, None);
    }
}

//! The ema record model and its wire-shape tolerant deserialization.

use serde::{Deserialize, Serialize};

/// Character reference attached to an ema by the public submission flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRef {
    /// Display name of the referenced character.
    pub name: String,
}

/// One wish-board entry as stored in the remote collection.
///
/// Records are created entirely outside this console; the admin UI only
/// reads them, edits wish/name/likes, and deletes them. The `id` is
/// assigned by the store and never changes for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmaRecord {
    /// Store-assigned document identifier.
    pub id: String,
    /// Wish text; submissions may leave it empty.
    #[serde(default)]
    pub wish: String,
    /// Submitter name; submissions may leave it empty.
    #[serde(default)]
    pub name: String,
    /// Like count, never negative.
    #[serde(default)]
    pub likes: u32,
    /// Creation time in epoch milliseconds. `0` means the store carried no
    /// usable timestamp; such records sort before any dated record.
    #[serde(
        default,
        rename = "created_at",
        deserialize_with = "deserialize_created_at"
    )]
    pub created_at_ms: i64,
    /// Optional character reference set by the submission flow.
    #[serde(default)]
    pub character: Option<CharacterRef>,
}

// Older documents carry `created_at` as a structured timestamp while newer
// ones store raw epoch seconds. Both normalize to epoch milliseconds; any
// other shape maps to 0 instead of failing the whole collection fetch.
#[derive(Deserialize)]
#[serde(untagged)]
enum CreatedAtWire {
    Structured {
        seconds: i64,
        #[serde(default)]
        nanos: u32,
    },
    EpochSeconds(f64),
    Unrecognized(serde::de::IgnoredAny),
}

impl CreatedAtWire {
    fn into_ms(self) -> i64 {
        match self {
            Self::Structured { seconds, nanos } => {
                seconds.saturating_mul(1_000) + i64::from(nanos / 1_000_000)
            },
            Self::EpochSeconds(seconds) => (seconds * 1_000.0) as i64,
            Self::Unrecognized(_) => 0,
        }
    }
}

fn deserialize_created_at<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let wire = Option::<CreatedAtWire>::deserialize(deserializer)?;
    Ok(wire.map(CreatedAtWire::into_ms).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::EmaRecord;

    fn parse(raw: &str) -> EmaRecord {
        serde_json::from_str(raw).expect("record should deserialize")
    }

    #[test]
    fn structured_timestamp_normalizes_to_millis() {
        let record = parse(
            r#"{"id":"a","wish":"pass the exam","name":"Aoi","likes":3,
                "created_at":{"seconds":1700000000,"nanos":500000000}}"#,
        );
        assert_eq!(record.created_at_ms, 1_700_000_000_500);
    }

    #[test]
    fn epoch_seconds_normalize_to_millis() {
        let record = parse(r#"{"id":"a","created_at":1700000000}"#);
        assert_eq!(record.created_at_ms, 1_700_000_000_000);

        let fractional = parse(r#"{"id":"a","created_at":1700000000.25}"#);
        assert_eq!(fractional.created_at_ms, 1_700_000_000_250);
    }

    #[test]
    fn missing_or_unrecognized_timestamp_is_unset_not_an_error() {
        assert_eq!(parse(r#"{"id":"a"}"#).created_at_ms, 0);
        assert_eq!(parse(r#"{"id":"a","created_at":null}"#).created_at_ms, 0);
        assert_eq!(
            parse(r#"{"id":"a","created_at":"yesterday"}"#).created_at_ms,
            0
        );
    }

    #[test]
    fn optional_fields_default_instead_of_failing() {
        let record = parse(r#"{"id":"a"}"#);
        assert_eq!(record.wish, "");
        assert_eq!(record.name, "");
        assert_eq!(record.likes, 0);
        assert!(record.character.is_none());

        let with_character =
            parse(r#"{"id":"b","character":{"name":"Okitsune","variant":"white"}}"#);
        assert_eq!(
            with_character.character.map(|c| c.name).as_deref(),
            Some("Okitsune")
        );
    }
}

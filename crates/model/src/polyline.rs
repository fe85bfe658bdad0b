use std::fmt;

use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A route geometry in the encoded polyline format (precision 1e5).
///
/// The value is opaque here, decoding lives in the analytics crate. On the wire
/// it is the object `{"encodedPolyline": "..."}`. Directions style payloads
/// call the field `points`, and a missing object is an empty polyline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EncodedPolyline(String);

impl EncodedPolyline {
    pub fn new<S>(encoded: S) -> Self
    where
        S: Into<String>,
    {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for EncodedPolyline {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EncodedPolyline {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for EncodedPolyline {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedPolyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
struct PolylineData {
    #[serde(rename = "encodedPolyline", alias = "points", default)]
    encoded_polyline: String,
}

impl Serialize for EncodedPolyline {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        PolylineData {
            encoded_polyline: self.0.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EncodedPolyline {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = Option::<PolylineData>::deserialize(deserializer)?;
        Ok(Self(
            data.map(|data| data.encoded_polyline).unwrap_or_default(),
        ))
    }
}

impl JsonSchema for EncodedPolyline {
    fn schema_name() -> String {
        "EncodedPolyline".to_owned()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        PolylineData::json_schema(gen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_both_field_names() {
        let routes_api: EncodedPolyline =
            serde_json::from_str(r#"{"encodedPolyline":"_p~iF~ps|U"}"#).unwrap();
        let directions_api: EncodedPolyline =
            serde_json::from_str(r#"{"points":"_p~iF~ps|U"}"#).unwrap();
        assert_eq!(routes_api, directions_api);
        assert_eq!(routes_api.as_str(), "_p~iF~ps|U");
    }

    #[test]
    fn missing_polyline_is_empty() {
        let null: EncodedPolyline = serde_json::from_str("null").unwrap();
        let empty_object: EncodedPolyline = serde_json::from_str("{}").unwrap();
        assert!(null.is_empty());
        assert!(empty_object.is_empty());
    }

    #[test]
    fn writes_backend_shape() {
        let polyline = EncodedPolyline::from("??");
        assert_eq!(
            serde_json::to_string(&polyline).unwrap(),
            r#"{"encodedPolyline":"??"}"#
        );
    }
}

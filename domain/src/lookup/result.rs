//! Lookup result returned by the gateway

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Normalized answer to a [`crate::LookupRequest`]
///
/// Always serializes the same five top-level keys. Values the provider did
/// not supply become `null` (or `[]` for `addresses`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub name: Option<String>,
    pub alternate_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub addresses: Vec<Address>,
    pub email: Option<String>,
    pub country_details: Option<CountryDetails>,
}

// `null` means no entries
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A postal address attached to a lookup result
///
/// Holds the provider's object as received: keys it omitted stay absent and
/// explicit `null`s stay `null`. The accessors read the fields the client
/// renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(Map<String, Value>);

impl Address {
    pub fn new(
        city: impl Into<String>,
        country_code: impl Into<String>,
        time_zone: impl Into<String>,
    ) -> Self {
        let mut fields = Map::new();
        fields.insert("city".to_string(), Value::String(city.into()));
        fields.insert("countryCode".to_string(), Value::String(country_code.into()));
        fields.insert("timeZone".to_string(), Value::String(time_zone.into()));
        Self(fields)
    }

    pub fn city(&self) -> Option<&str> {
        text(&self.0, "city")
    }

    pub fn country_code(&self) -> Option<&str> {
        text(&self.0, "countryCode")
    }

    pub fn time_zone(&self) -> Option<&str> {
        text(&self.0, "timeZone")
    }

    /// All fields, as received
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Address {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Metadata about the country a number belongs to
///
/// Kept as received, like [`Address`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryDetails(Map<String, Value>);

impl CountryDetails {
    pub fn name(&self) -> Option<&str> {
        text(&self.0, "name")
    }

    pub fn native(&self) -> Option<&str> {
        text(&self.0, "native")
    }

    pub fn continent(&self) -> Option<&str> {
        text(&self.0, "continent")
    }

    pub fn capital(&self) -> Option<&str> {
        text(&self.0, "capital")
    }

    pub fn flag(&self) -> Option<&str> {
        text(&self.0, "flag")
    }

    /// Dialing codes, primary first
    pub fn phone_codes(&self) -> Vec<String> {
        list(&self.0, "phone")
    }

    /// Primary dialing code, if any
    pub fn primary_phone_code(&self) -> Option<String> {
        self.phone_codes().into_iter().next()
    }

    pub fn currencies(&self) -> Vec<String> {
        list(&self.0, "currency")
    }

    pub fn languages(&self) -> Vec<String> {
        list(&self.0, "languages")
    }

    /// All fields, as received
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for CountryDetails {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn text<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

// A scalar counts as a one-element list; numbers and strings both render.
fn list(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    let scalar = |value: &Value| match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    };
    match fields.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(scalar).collect(),
        Some(value) => scalar(value).into_iter().collect(),
        None => Vec::new(),
    }
}

//! Untyped API payloads.
//!
//! A [`RawResource`] is exactly what the API returned for one entity. It lives
//! only for the duration of one aggregation and is never cached.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::AppError;

/// Resource kinds exposed by the API, one collection each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Game,
    Mode,
    Tournament,
    Registration,
    User,
}

impl ResourceKind {
    /// Collection segment, also the key under `_embedded` in listings.
    pub fn collection(self) -> &'static str {
        match self {
            Self::Game => "games",
            Self::Mode => "modes",
            Self::Tournament => "tournaments",
            Self::Registration => "registrations",
            Self::User => "users",
        }
    }

    /// Singular name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Mode => "mode",
            Self::Tournament => "tournament",
            Self::Registration => "registration",
            Self::User => "user",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entity as returned by the API: a JSON object, links included.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawResource(Map<String, Value>);

impl RawResource {
    /// Wraps a decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Decode`] if the value is not an object.
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(AppError::decode(
                "resource",
                format!("expected a JSON object, got {}", json_type(&other)),
            )),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// The resource's own URL, if the API advertised one.
    pub fn self_href(&self) -> Option<&str> {
        crate::domain::links::href_of(self, "self")
    }

    /// Human-readable handle for error messages.
    pub fn describe(&self) -> String {
        match self.self_href() {
            Some(href) => href.to_owned(),
            None => match self.0.get("id") {
                Some(id) => format!("#{id}"),
                None => "<anonymous>".to_owned(),
            },
        }
    }

    /// Numeric identifier of the resource.
    ///
    /// Reads the `id` field, falling back to the last path segment of the
    /// `self` link when the API hides ids from bodies.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Decode`] if neither source yields an integer.
    pub fn numeric_id(&self, kind: ResourceKind) -> Result<i64, AppError> {
        if let Some(id) = self.0.get("id") {
            return match id {
                Value::Number(n) => n.as_i64(),
                Value::String(s) => s.parse().ok(),
                _ => None,
            }
            .ok_or_else(|| AppError::decode(kind.name(), format!("invalid id {id}")));
        }

        self.self_href()
            .and_then(|href| href.split('?').next())
            .and_then(|path| path.trim_end_matches('/').rsplit('/').next())
            .and_then(|segment| segment.parse().ok())
            .ok_or_else(|| AppError::decode(kind.name(), "resource carries no id"))
    }
}

/// Pagination block of a listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub number: u64,
}

/// A listing response: ordered raw items plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPage {
    pub items: Vec<RawResource>,
    pub meta: PageMeta,
}

impl RawPage {
    /// Splits a HAL listing into its embedded items and page metadata.
    ///
    /// Items live under `_embedded.<collection>`. A missing `_embedded` is an
    /// empty page; a missing `page` block describes a single page holding
    /// every item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Decode`] if the envelope has the wrong shape.
    pub fn from_raw(raw: RawResource, kind: ResourceKind) -> Result<Self, AppError> {
        let mut map = raw.0;

        let items = match map.remove("_embedded") {
            None => Vec::new(),
            Some(Value::Object(mut embedded)) => match embedded.remove(kind.collection()) {
                None => Vec::new(),
                Some(Value::Array(values)) => values
                    .into_iter()
                    .map(RawResource::from_value)
                    .collect::<Result<Vec<_>, _>>()?,
                Some(other) => {
                    return Err(AppError::decode(
                        "page",
                        format!(
                            "`_embedded.{}` must be an array, got {}",
                            kind.collection(),
                            json_type(&other)
                        ),
                    ));
                }
            },
            Some(other) => {
                return Err(AppError::decode(
                    "page",
                    format!("`_embedded` must be an object, got {}", json_type(&other)),
                ));
            }
        };

        let meta = match map.remove("page") {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| AppError::decode("page", e.to_string()))?,
            None => {
                let count = items.len() as u64;
                PageMeta {
                    size: count,
                    total_elements: count,
                    total_pages: u64::from(count > 0),
                    number: 0,
                }
            }
        };

        Ok(Self { items, meta })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

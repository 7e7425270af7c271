//! Wire representation of [`Outcome`] for crossing process boundaries.
//!
//! ```text
//! {"ok": true,  "value": <T>}
//! {"ok": false, "error": "<message>", "code": "<code>"}   // code omitted when absent
//! ```
//!
//! The boolean `ok` tag is required. A success without `value` is accepted
//! only when `T` can be built from nothing (`Option<_>`, `()`).

use std::fmt;
use std::marker::PhantomData;

use serde::de::value::UnitDeserializer;
use serde::de::{self, IgnoredAny, IntoDeserializer, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::outcome::{Failure, Outcome};

const TAG: &str = "ok";
const VALUE: &str = "value";
const ERROR: &str = "error";
const CODE: &str = "code";

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Ok(value) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(TAG, &true)?;
                map.serialize_entry(VALUE, value)?;
                map.end()
            }
            Self::Err(failure) => {
                let len = if failure.code().is_some() { 3 } else { 2 };
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry(TAG, &false)?;
                map.serialize_entry(ERROR, failure.error())?;
                if let Some(code) = failure.code() {
                    map.serialize_entry(CODE, code)?;
                }
                map.end()
            }
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OutcomeVisitor {
            marker: PhantomData,
        })
    }
}

#[derive(Deserialize)]
#[serde(field_identifier)]
enum Field {
    #[serde(rename = "ok")]
    Tag,
    #[serde(rename = "value")]
    Value,
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "code")]
    Code,
    #[serde(other)]
    Other,
}

struct OutcomeVisitor<T> {
    marker: PhantomData<fn() -> T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for OutcomeVisitor<T> {
    type Value = Outcome<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an outcome map with a boolean `ok` tag")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut tag: Option<bool> = None;
        let mut value: Option<T> = None;
        let mut error: Option<String> = None;
        let mut code: Option<Option<String>> = None;

        while let Some(field) = map.next_key::<Field>()? {
            match field {
                Field::Tag => {
                    if tag.is_some() {
                        return Err(de::Error::duplicate_field(TAG));
                    }
                    tag = Some(map.next_value()?);
                }
                Field::Value => {
                    if value.is_some() {
                        return Err(de::Error::duplicate_field(VALUE));
                    }
                    value = Some(map.next_value()?);
                }
                Field::Error => {
                    if error.is_some() {
                        return Err(de::Error::duplicate_field(ERROR));
                    }
                    error = Some(map.next_value()?);
                }
                Field::Code => {
                    if code.is_some() {
                        return Err(de::Error::duplicate_field(CODE));
                    }
                    code = Some(map.next_value()?);
                }
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        match tag {
            None => Err(de::Error::missing_field(TAG)),
            Some(true) => match value {
                Some(value) => Ok(Outcome::Ok(value)),
                None => value_from_nothing().map(Outcome::Ok),
            },
            Some(false) => {
                let Some(error) = error else {
                    return Err(de::Error::missing_field(ERROR));
                };
                let failure = match code.flatten() {
                    Some(code) => Failure::with_code(error, code),
                    None => Failure::new(error),
                };
                Ok(Outcome::Err(failure))
            }
        }
    }
}

/// Build `T` for a success whose `value` key was left out.
fn value_from_nothing<'de, T, E>() -> Result<T, E>
where
    T: Deserialize<'de>,
    E: de::Error,
{
    let nothing: UnitDeserializer<E> = ().into_deserializer();
    T::deserialize(nothing).map_err(|_| de::Error::missing_field(VALUE))
}

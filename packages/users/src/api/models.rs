use serde::{
    Deserialize, Deserializer, Serialize,
    de::{DeserializeOwned, Error as _},
};
use serde_json::{Map, Value};

use crate::models::{NewUser, User, UserUpdate};

/// Decodes a request body that must be a single JSON object.
///
/// Going through a [`Map`] first keeps arrays from being accepted as the
/// positional form of a struct, and lets a repeated key override the earlier
/// one instead of failing.
///
/// # Errors
///
/// * If the body is not a JSON object
/// * If the object doesn't match `T`
pub fn from_json_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    let object = serde_json::from_slice::<Map<String, Value>>(body)?;
    serde_json::from_value(Value::Object(object))
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiUser {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<User> for ApiUser {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            age: value.age,
        }
    }
}

/// Body of a create request.
///
/// Unknown keys, `id` included, are ignored. Missing or `null` fields fall
/// back to an empty name and an age of 0.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ApiCreateUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

impl From<ApiCreateUser> for NewUser {
    fn from(value: ApiCreateUser) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            age: value.age.unwrap_or_default(),
        }
    }
}

/// Body of a partial update request.
///
/// Only `name` and `age` are accepted; any other key fails the whole request
/// before anything is applied.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ApiUpdateUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_truncated_int")]
    pub age: Option<i64>,
}

impl From<ApiUpdateUser> for UserUpdate {
    fn from(value: ApiUpdateUser) -> Self {
        Self {
            name: value.name,
            age: value.age,
        }
    }
}

/// Accepts any JSON number, truncating fractions toward zero and saturating
/// at the `i64` bounds.
fn deserialize_truncated_int<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i64>, D::Error> {
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Some(value) = number.as_i64() {
        return Ok(Some(value));
    }
    if number.as_u64().is_some() {
        return Ok(Some(i64::MAX));
    }

    #[allow(clippy::cast_possible_truncation)]
    number
        .as_f64()
        .map(|value| Some(value.trunc() as i64))
        .ok_or_else(|| D::Error::custom(format!("invalid number {number}")))
}

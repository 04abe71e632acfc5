//! User role normalization.
//!
//! The backend is inconsistent about how it shapes the role field on user
//! payloads: sometimes a plain string (`"ADMIN"` or `"ROLE_ADMIN"`), sometimes
//! an array of Spring Security authority objects, sometimes a nested object.
//! Everything funnels through [`Role::from_value`] so the rest of the client
//! only ever sees a closed enum.

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A normalized user role.
///
/// Unrecognized or missing role data maps to [`Role::Unknown`] rather than an
/// error; role checks on the client are advisory only and the server enforces
/// authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Seller,
    Customer,
    #[default]
    Unknown,
}

impl Role {
    /// Normalize a role from whatever shape the backend sent.
    ///
    /// Accepted shapes:
    /// - string: `"ADMIN"`, `"ROLE_SELLER"`, `"customer"`
    /// - array: first element, itself a string or an object with an
    ///   `authority`, `role`, or `name` field
    /// - object: `roleType`, `name`, `authority`, or `code` field
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let raw = match value {
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => items.first().and_then(|first| match first {
                Value::String(s) => Some(s.clone()),
                Value::Object(_) => pick_str(first, &["authority", "role", "name"]),
                _ => None,
            }),
            Value::Object(_) => pick_str(value, &["roleType", "name", "authority", "code"]),
            _ => None,
        };

        raw.as_deref().map_or(Self::Unknown, normalize)
    }

    /// Normalize the role carried on a full user payload.
    ///
    /// Looks for the role under the field names the backend has used over
    /// time: `role`, `roles`, `authorities`, `authority`.
    #[must_use]
    pub fn from_user(user: &Value) -> Self {
        ["role", "roles", "authorities", "authority"]
            .iter()
            .find_map(|key| user.get(key))
            .map_or(Self::Unknown, Self::from_value)
    }

    /// Whether this role may manage the store (admin dashboard).
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this role may manage its own products and orders.
    #[must_use]
    pub const fn is_seller(&self) -> bool {
        matches!(self, Self::Seller)
    }
}

/// First string value among `keys` on a JSON object.
fn pick_str(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(ToOwned::to_owned)
}

/// Strip the Spring `ROLE_` prefix and match case-insensitively.
fn normalize(raw: &str) -> Role {
    let stripped = raw.trim().strip_prefix("ROLE_").unwrap_or(raw.trim());
    match stripped.to_ascii_uppercase().as_str() {
        "ADMIN" => Role::Admin,
        "SELLER" => Role::Seller,
        "CUSTOMER" => Role::Customer,
        _ => Role::Unknown,
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "ADMIN"),
            Self::Seller => write!(f, "SELLER"),
            Self::Customer => write!(f, "CUSTOMER"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(normalize(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_string() {
        assert_eq!(Role::from_value(&json!("ADMIN")), Role::Admin);
        assert_eq!(Role::from_value(&json!("customer")), Role::Customer);
    }

    #[test]
    fn test_role_prefixed_string() {
        assert_eq!(Role::from_value(&json!("ROLE_SELLER")), Role::Seller);
        assert_eq!(Role::from_value(&json!("ROLE_ADMIN")), Role::Admin);
    }

    #[test]
    fn test_authority_array() {
        assert_eq!(Role::from_value(&json!(["ROLE_SELLER"])), Role::Seller);
        assert_eq!(
            Role::from_value(&json!([{ "authority": "ROLE_CUSTOMER" }])),
            Role::Customer
        );
        assert_eq!(
            Role::from_value(&json!([{ "role": "SELLER" }])),
            Role::Seller
        );
    }

    #[test]
    fn test_nested_object() {
        assert_eq!(
            Role::from_value(&json!({ "roleType": "SELLER" })),
            Role::Seller
        );
        assert_eq!(Role::from_value(&json!({ "name": "ADMIN" })), Role::Admin);
        assert_eq!(
            Role::from_value(&json!({ "code": "ROLE_CUSTOMER" })),
            Role::Customer
        );
    }

    #[test]
    fn test_unrecognized_shapes() {
        assert_eq!(Role::from_value(&json!(42)), Role::Unknown);
        assert_eq!(Role::from_value(&json!(null)), Role::Unknown);
        assert_eq!(Role::from_value(&json!([])), Role::Unknown);
        assert_eq!(Role::from_value(&json!("SUPERVISOR")), Role::Unknown);
    }

    #[test]
    fn test_from_user_field_fallbacks() {
        assert_eq!(Role::from_user(&json!({ "role": "ADMIN" })), Role::Admin);
        assert_eq!(
            Role::from_user(&json!({ "authorities": [{ "authority": "ROLE_SELLER" }] })),
            Role::Seller
        );
        assert_eq!(Role::from_user(&json!({ "email": "a@b.c" })), Role::Unknown);
    }
}

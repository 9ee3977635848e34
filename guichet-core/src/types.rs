//! Core data type definitions
//!
//! Records exchanged with the remote backend. The backend wraps every
//! collection response under a resource-named key; the envelope structs live
//! next to the services in `guichet-client`, only the records themselves are
//! defined here.

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by `GET /me`
///
/// Replaced wholesale on every login or refresh, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Role name (e.g. "Admin", "Gestionnaire")
    #[serde(default)]
    pub role: String,
    /// Permission names as the backend spells them (e.g. "gerer_user")
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Persisted session: an opaque bearer token plus the last-known user record
///
/// Both fields are written and cleared together; see
/// `guichet_client::session::SessionStore`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user.is_none()
    }
}

/// Administrative region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wilaya {
    pub id: i64,
    pub nom: String,
}

/// Role with its granted permission names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Cash desk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caisse {
    pub id: i64,
    pub name: String,
    /// Owning wilaya as a nested relation
    #[serde(default)]
    pub wilaya: Option<Wilaya>,
    #[serde(default)]
    pub balance: f64,
    /// "active" or "inactive"
    #[serde(default)]
    pub status: String,
}

/// Cash injection into a caisse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alimentation {
    pub id: i64,
    pub amount: f64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub caisse: Option<Caisse>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Cash movement (encaissement or décaissement)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub id: i64,
    pub amount: f64,
    #[serde(default)]
    pub motif: Option<String>,
    #[serde(default)]
    pub caisse: Option<Caisse>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Payload for creating or updating a user
///
/// `password` is omitted from updates when left empty.
#[derive(Debug, Clone, Serialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Payload for creating or updating a role
#[derive(Debug, Clone, Serialize)]
pub struct RolePayload {
    pub name: String,
    pub permissions: Vec<String>,
}

/// Payload for creating or updating a wilaya
#[derive(Debug, Clone, Serialize)]
pub struct WilayaPayload {
    pub nom: String,
}

/// Payload for creating or updating an alimentation
#[derive(Debug, Clone, Serialize)]
pub struct AlimentationPayload {
    pub amount: f64,
    pub caisse_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Payload for creating or updating an encaissement or décaissement
#[derive(Debug, Clone, Serialize)]
pub struct OperationPayload {
    pub amount: f64,
    pub caisse_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motif: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_with_missing_optional_fields() {
        let user: User =
            serde_json::from_value(serde_json::json!({"id": 1, "permissions": ["gerer_user"]}))
                .unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.permissions, vec!["gerer_user"]);
        assert!(user.role.is_empty());
    }

    #[test]
    fn session_round_trips_through_json() {
        let session = Session {
            token: Some("abc".to_string()),
            user: Some(User {
                id: 1,
                name: "Amine".to_string(),
                email: "amine@example.com".to_string(),
                role: "Admin".to_string(),
                permissions: vec!["gerer_user".to_string(), "voir_caisse".to_string()],
            }),
        };

        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, back);
    }

    #[test]
    fn caisse_wilaya_is_a_nested_relation() {
        let caisse: Caisse = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Caisse Alger Centre",
            "wilaya": {"id": 16, "nom": "Alger"},
            "balance": 120000.0,
            "status": "active"
        }))
        .unwrap();
        assert_eq!(caisse.wilaya.unwrap().nom, "Alger");
    }
}

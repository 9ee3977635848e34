//! Permission model and resolver
//!
//! Permissions are a closed enumeration of the capability strings the backend
//! grants. The menu declares its requirements in the enum, so a misspelled
//! requirement cannot compile; unknown strings coming back from a newer
//! backend are skipped with a warning rather than rejected.

use guichet_core::User;
use tracing::warn;

/// Known capability grants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    VoirCaisse,
    GererUser,
    GererRole,
    GererWilaya,
    GererAlimentation,
    VoirEncaissement,
    VoirDecaissement,
    VoirTousCaisses,
    GererEncaissement,
    GererDecaissement,
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Permission::VoirCaisse => "voir_caisse",
            Permission::GererUser => "gerer_user",
            Permission::GererRole => "gerer_role",
            Permission::GererWilaya => "gerer_wilaya",
            Permission::GererAlimentation => "gerer_alimentation",
            Permission::VoirEncaissement => "voir_encaissement",
            Permission::VoirDecaissement => "voir_decaissement",
            Permission::VoirTousCaisses => "voir_tous_caisses",
            Permission::GererEncaissement => "gerer_encaissement",
            Permission::GererDecaissement => "gerer_decaissement",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "voir_caisse" => Ok(Permission::VoirCaisse),
            "gerer_user" => Ok(Permission::GererUser),
            "gerer_role" => Ok(Permission::GererRole),
            "gerer_wilaya" => Ok(Permission::GererWilaya),
            "gerer_alimentation" => Ok(Permission::GererAlimentation),
            "voir_encaissement" => Ok(Permission::VoirEncaissement),
            "voir_decaissement" => Ok(Permission::VoirDecaissement),
            "voir_tous_caisses" => Ok(Permission::VoirTousCaisses),
            "gerer_encaissement" => Ok(Permission::GererEncaissement),
            "gerer_decaissement" => Ok(Permission::GererDecaissement),
            _ => Err(format!("Unknown permission: {}", s)),
        }
    }
}

/// Derive the effective permission set from the current session's user
///
/// Re-derived on every call: the user record is replaced wholesale on each
/// session change, so nothing here may be cached.
pub fn resolve(user: Option<&User>) -> Vec<Permission> {
    let Some(user) = user else {
        return Vec::new();
    };

    user.permissions
        .iter()
        .filter_map(|name| match name.parse::<Permission>() {
            Ok(permission) => Some(permission),
            Err(_) => {
                warn!(permission = %name, "Skipping unknown permission from backend");
                None
            }
        })
        .collect()
}

/// Permission required to reach a screen
///
/// `AnyOf` uses OR semantics: holding any one of the alternatives suffices.
/// The slice must be non-empty; an empty slice satisfies nothing.
#[derive(Debug, Clone, Copy)]
pub enum Requirement {
    One(Permission),
    AnyOf(&'static [Permission]),
}

impl Requirement {
    pub fn satisfied_by(&self, permissions: &[Permission]) -> bool {
        match self {
            Requirement::One(required) => permissions.contains(required),
            Requirement::AnyOf(alternatives) => alternatives
                .iter()
                .any(|required| permissions.contains(required)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(permissions: &[&str]) -> User {
        User {
            id: 1,
            name: String::new(),
            email: String::new(),
            role: String::new(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn every_permission_round_trips_through_its_name() {
        for permission in [
            Permission::VoirCaisse,
            Permission::GererUser,
            Permission::GererRole,
            Permission::GererWilaya,
            Permission::GererAlimentation,
            Permission::VoirEncaissement,
            Permission::VoirDecaissement,
            Permission::VoirTousCaisses,
            Permission::GererEncaissement,
            Permission::GererDecaissement,
        ] {
            assert_eq!(permission.to_string().parse::<Permission>(), Ok(permission));
        }
    }

    #[test]
    fn absent_user_resolves_to_empty_set() {
        assert!(resolve(None).is_empty());
    }

    #[test]
    fn unknown_permissions_are_skipped() {
        let user = user_with(&["gerer_user", "faire_le_cafe", "voir_caisse"]);
        assert_eq!(
            resolve(Some(&user)),
            vec![Permission::GererUser, Permission::VoirCaisse]
        );
    }

    #[test]
    fn single_requirement_matches_membership() {
        let held = [Permission::GererUser];
        assert!(Requirement::One(Permission::GererUser).satisfied_by(&held));
        assert!(!Requirement::One(Permission::GererRole).satisfied_by(&held));
    }

    #[test]
    fn any_of_is_satisfied_by_any_alternative() {
        let requirement =
            Requirement::AnyOf(&[Permission::VoirEncaissement, Permission::VoirDecaissement]);
        assert!(requirement.satisfied_by(&[Permission::VoirDecaissement]));
        assert!(requirement.satisfied_by(&[Permission::VoirEncaissement]));
        assert!(!requirement.satisfied_by(&[Permission::GererUser]));
        assert!(!requirement.satisfied_by(&[]));
    }
}

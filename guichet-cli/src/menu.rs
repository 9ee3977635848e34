//! Static menu description and route composer
//!
//! The drawer of the original console becomes a declarative table: each entry
//! names a screen, an icon and the permission(s) required to reach it. The
//! composer filters that table by the active permission set and skips entries
//! whose screen has no registered handler.

use guichet_client::{Permission, Requirement};

/// Identifier of a console screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Dashboard,
    Users,
    Roles,
    Wilayas,
    Alimentation,
    Operations,
    Caisses,
    Encaissement,
    Decaissement,
}

/// One navigable entry, defined at build time
pub struct MenuItem {
    pub label: &'static str,
    pub screen: ScreenId,
    pub icon: &'static str,
    pub required: Requirement,
}

/// The full menu, in display order
pub const MENU: &[MenuItem] = &[
    MenuItem {
        label: "Dashboard",
        screen: ScreenId::Dashboard,
        icon: "speedometer",
        required: Requirement::One(Permission::VoirCaisse),
    },
    MenuItem {
        label: "Users",
        screen: ScreenId::Users,
        icon: "people",
        required: Requirement::One(Permission::GererUser),
    },
    MenuItem {
        label: "Roles",
        screen: ScreenId::Roles,
        icon: "shield-checkmark",
        required: Requirement::One(Permission::GererRole),
    },
    MenuItem {
        label: "Wilayas",
        screen: ScreenId::Wilayas,
        icon: "map",
        required: Requirement::One(Permission::GererWilaya),
    },
    MenuItem {
        label: "Alimentation",
        screen: ScreenId::Alimentation,
        icon: "card",
        required: Requirement::One(Permission::GererAlimentation),
    },
    MenuItem {
        label: "Operations",
        screen: ScreenId::Operations,
        icon: "swap-horizontal",
        required: Requirement::AnyOf(&[
            Permission::VoirEncaissement,
            Permission::VoirDecaissement,
        ]),
    },
    MenuItem {
        label: "Caisses",
        screen: ScreenId::Caisses,
        icon: "wallet",
        required: Requirement::One(Permission::VoirTousCaisses),
    },
    MenuItem {
        label: "Encaissement",
        screen: ScreenId::Encaissement,
        icon: "arrow-down-circle",
        required: Requirement::One(Permission::GererEncaissement),
    },
    MenuItem {
        label: "Decaissement",
        screen: ScreenId::Decaissement,
        icon: "arrow-up-circle",
        required: Requirement::One(Permission::GererDecaissement),
    },
];

/// Whether a screen handler is registered for the given identifier
///
/// Every current menu entry has one; the registry exists so a menu entry for
/// an unreleased screen degrades to a silent skip instead of a broken route.
pub fn registered(screen: ScreenId) -> bool {
    match screen {
        ScreenId::Dashboard
        | ScreenId::Users
        | ScreenId::Roles
        | ScreenId::Wilayas
        | ScreenId::Alimentation
        | ScreenId::Operations
        | ScreenId::Caisses
        | ScreenId::Encaissement
        | ScreenId::Decaissement => true,
    }
}

/// Requirement declared in the menu for a screen
pub fn requirement_for(screen: ScreenId) -> Option<Requirement> {
    MENU.iter()
        .find(|item| item.screen == screen)
        .map(|item| item.required)
}

/// Entries reachable with the given permission set
pub fn compose(permissions: &[Permission]) -> Vec<&'static MenuItem> {
    compose_with(permissions, registered)
}

fn compose_with(
    permissions: &[Permission],
    has_handler: impl Fn(ScreenId) -> bool,
) -> Vec<&'static MenuItem> {
    MENU.iter()
        .filter(|item| has_handler(item.screen))
        .filter(|item| item.required.satisfied_by(permissions))
        .collect()
}

/// Startup check: every menu entry must name a registered screen
pub fn validate() -> Result<(), Vec<ScreenId>> {
    let missing: Vec<ScreenId> = MENU
        .iter()
        .filter(|item| !registered(item.screen))
        .map(|item| item.screen)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}

//! Console screens, one module per menu entry
//!
//! Screens render to stdout and catch their own remote errors: the user gets
//! a generic French notice, the raw error goes to the log. Validation happens
//! before any request leaves the machine.

pub mod alimentations;
pub mod caisses;
pub mod dashboard;
pub mod decaissements;
pub mod encaissements;
pub mod operations;
pub mod roles;
pub mod users;
pub mod wilayas;

use clap::Subcommand;
use guichet_core::{log_operation_error, Caisse, GuichetError};

/// Actions shared by the encaissement and décaissement screens
#[derive(Debug, Subcommand)]
pub enum MovementAction {
    /// List the caller's movements
    List,
    /// Record a movement on a caisse
    Create {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        caisse_id: i64,
        #[arg(long)]
        motif: Option<String>,
    },
    /// Correct an existing movement
    Update {
        id: i64,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        caisse_id: i64,
        #[arg(long)]
        motif: Option<String>,
    },
    /// Delete a movement
    Delete { id: i64 },
}

/// Report a failed remote call: generic notice on screen, details in the log
pub(crate) fn notice(operation: &str, message: &str, error: &GuichetError) {
    log_operation_error!(operation, error);
    println!("Erreur : {message}. Veuillez réessayer plus tard.");
}

/// Reject blank required input before any request is sent
pub(crate) fn require(field: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        println!("Le champ «{field}» est requis.");
        return false;
    }
    true
}

/// Reject non-positive amounts before any request is sent
pub(crate) fn require_amount(amount: f64) -> bool {
    if !(amount > 0.0) {
        println!("Le montant doit être supérieur à zéro.");
        return false;
    }
    true
}

pub(crate) fn caisse_label(caisse: Option<&Caisse>) -> String {
    caisse
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

pub(crate) fn date_label(date: Option<&chrono::DateTime<chrono::Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_values_fail_the_presence_check() {
        assert!(!require("name", ""));
        assert!(!require("name", "   "));
        assert!(require("name", "Caisse Alger"));
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        assert!(!require_amount(0.0));
        assert!(!require_amount(-10.0));
        assert!(require_amount(2500.0));
    }
}

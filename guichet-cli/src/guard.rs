//! Navigation guard
//!
//! Screens are only reachable through [`guarded`], which checks the declared
//! requirement against the live permission set before constructing the screen
//! future. On denial the screen is never invoked and a fixed refusal line is
//! printed instead.

use guichet_client::{Permission, Requirement};
use guichet_core::GuichetResult;
use std::future::Future;

/// Refusal line shown in place of a denied screen
pub const ACCESS_DENIED: &str = "⛔ Accès refusé";

/// Run `screen` only if `permissions` satisfy `required`
///
/// Denial is not an error: the refusal line is printed and `Ok(())` returned,
/// so a denied screen exits cleanly without leaking why the check failed.
pub async fn guarded<F, Fut>(
    required: Requirement,
    permissions: &[Permission],
    screen: F,
) -> GuichetResult<()>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = GuichetResult<()>>,
{
    if !required.satisfied_by(permissions) {
        println!("{ACCESS_DENIED}");
        return Ok(());
    }
    screen().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn denied_screen_is_never_invoked() {
        let invoked = AtomicBool::new(false);
        let result = guarded(
            Requirement::One(Permission::GererRole),
            &[Permission::GererUser],
            || async {
                invoked.store(true, Ordering::SeqCst);
                Ok(())
            },
        )
        .await;

        assert!(result.is_ok());
        assert!(!invoked.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn satisfied_requirement_runs_the_screen() {
        let invoked = AtomicBool::new(false);
        guarded(
            Requirement::AnyOf(&[Permission::VoirEncaissement, Permission::VoirDecaissement]),
            &[Permission::VoirDecaissement],
            || async {
                invoked.store(true, Ordering::SeqCst);
                Ok(())
            },
        )
        .await
        .unwrap();

        assert!(invoked.load(Ordering::SeqCst));
    }
}

//! Landing screen after login

use guichet_core::{GuichetResult, User};

pub fn run(user: &User) -> GuichetResult<()> {
    println!("Bienvenue, {} !", user.name);
    println!("Rôle : {}", user.role);
    Ok(())
}

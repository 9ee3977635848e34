//! Caisse overview screen
//!
//! A Gestionnaire only sees their own caisse; everyone else with access lists
//! the whole fleet.

use guichet_client::{resources::caisses, ApiClient};
use guichet_core::{Caisse, GuichetResult, User};

const GESTIONNAIRE: &str = "Gestionnaire";

fn print_caisse(caisse: &Caisse) {
    let wilaya = caisse
        .wilaya
        .as_ref()
        .map(|w| w.nom.as_str())
        .unwrap_or("-");
    println!(
        "  #{:<5} {:<24} {:<16} {:>14.2} DA  {}",
        caisse.id, caisse.name, wilaya, caisse.balance, caisse.status
    );
}

pub async fn run(client: &ApiClient, user: &User) -> GuichetResult<()> {
    if user.role == GESTIONNAIRE {
        match caisses::mine(client).await {
            Ok(caisse) => {
                println!("Votre caisse :");
                print_caisse(&caisse);
            }
            Err(err) => super::notice("caisses.mine", "impossible de charger votre caisse", &err),
        }
        return Ok(());
    }

    match caisses::list(client).await {
        Ok(list) => {
            println!("{} caisse(s)", list.len());
            for caisse in list {
                print_caisse(&caisse);
            }
        }
        Err(err) => super::notice("caisses.list", "impossible de charger les caisses", &err),
    }
    Ok(())
}

//! Admin-wide operations feed, toggling between the two movement kinds

use clap::ValueEnum;
use guichet_client::{resources::operations, ApiClient};
use guichet_core::{GuichetResult, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OperationKind {
    Encaissement,
    Decaissement,
}

fn print_feed(kind: OperationKind, feed: &[Operation]) {
    let title = match kind {
        OperationKind::Encaissement => "encaissement(s)",
        OperationKind::Decaissement => "décaissement(s)",
    };
    println!("{} {title}", feed.len());
    for operation in feed {
        println!(
            "  #{:<5} {:>12.2} DA  {:<20} {:<18} {}",
            operation.id,
            operation.amount,
            super::caisse_label(operation.caisse.as_ref()),
            super::date_label(operation.created_at.as_ref()),
            operation.motif.as_deref().unwrap_or("-")
        );
    }
}

pub async fn run(kind: OperationKind, client: &ApiClient) -> GuichetResult<()> {
    let fetched = match kind {
        OperationKind::Encaissement => operations::encaissements(client).await,
        OperationKind::Decaissement => operations::decaissements(client).await,
    };
    match fetched {
        Ok(feed) => print_feed(kind, &feed),
        Err(err) => super::notice("operations.list", "impossible de charger les opérations", &err),
    }
    Ok(())
}

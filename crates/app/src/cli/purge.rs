use clap::Args;
use medovik_app::domain::bulk::{BulkService, PgBulkService, collections::PurgeScope};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct PurgeArgs {
    /// orders, products, categories, promocodes, about, or all
    collection: PurgeScope,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: PurgeArgs) -> Result<(), String> {
    let db = args.database.connect().await?;

    let report = PgBulkService::new(db.clone())
        .purge(args.collection)
        .await
        .map_err(|error| format!("failed to purge: {error}"));

    db.close().await;

    for (collection, deleted) in report?.deleted {
        println!("{collection}: {deleted} deleted");
    }

    Ok(())
}

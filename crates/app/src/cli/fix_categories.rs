use medovik_app::domain::bulk::{BulkService, PgBulkService};

use crate::cli::DatabaseArgs;

pub(crate) async fn run(args: DatabaseArgs) -> Result<(), String> {
    let db = args.connect().await?;

    let reset = PgBulkService::new(db.clone())
        .fix_categories()
        .await
        .map_err(|error| format!("failed to reset categories: {error}"));

    db.close().await;

    let reset = reset?;

    println!(
        "removed {} categories, inserted {} canonical categories",
        reset.deleted, reset.inserted
    );

    Ok(())
}

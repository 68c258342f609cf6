use medovik_app::domain::bulk::{BulkService, PgBulkService, SeedOutcome};

use crate::cli::DatabaseArgs;

pub(crate) async fn run(args: DatabaseArgs) -> Result<(), String> {
    let db = args.connect().await?;

    let outcome = PgBulkService::new(db.clone())
        .seed()
        .await
        .map_err(|error| format!("failed to seed catalog: {error}"));

    db.close().await;

    match outcome? {
        SeedOutcome::AlreadySeeded => println!("catalog already seeded; nothing written"),
        SeedOutcome::Seeded {
            categories,
            products,
        } => println!("seeded {categories} categories and {products} products"),
    }

    Ok(())
}

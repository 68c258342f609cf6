use medovik_app::database;

use crate::cli::DatabaseArgs;

pub(crate) async fn run(args: DatabaseArgs) -> Result<(), String> {
    let db = args.connect().await?;

    let result = database::migrate(db.pool())
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"));

    db.close().await;

    result?;

    println!("migrations applied");

    Ok(())
}

use clap::{Args, Parser, Subcommand};
use medovik_app::database::{self, Db};

mod db;
mod fix_categories;
mod purge;
mod seed;

#[derive(Debug, Parser)]
#[command(name = "medovik-app", about = "Medovik storefront operator CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    /// Write the canonical catalog into an empty store
    Seed(DatabaseArgs),
    /// Replace all categories with the canonical set
    FixCategories(DatabaseArgs),
    /// Delete every row in one collection, or in all of them
    Purge(purge::PurgeArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Seed(args) => seed::run(args).await,
            Commands::FixCategories(args) => fix_categories::run(args).await,
            Commands::Purge(args) => purge::run(args).await,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<Db, String> {
        database::connect(&self.database_url)
            .await
            .map(Db::new)
            .map_err(|error| format!("failed to connect to database: {error}"))
    }
}

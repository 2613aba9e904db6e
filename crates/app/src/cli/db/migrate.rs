use matnight_app::database;
use tracing::info;

pub(crate) async fn run(database_url: &str) -> Result<(), String> {
    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    info!("database schema is up to date");

    println!("migrations: applied");

    Ok(())
}

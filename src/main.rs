use anyhow::Result;
use camino::Utf8PathBuf;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use tracing::info;

use montage::import::import_directory;
use montage::picture::pictures_directory;
use montage::telemetry::{get_subscriber_terminal, init_subscriber};

const APP_NAME: &str = "montage";

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = get_subscriber_terminal(APP_NAME.into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let data_dir: Utf8PathBuf = dirs::data_dir()
        .expect("No data directory for this platform")
        .join(APP_NAME)
        .try_into()
        .expect("Invalid UTF-8 path.");
    std::fs::create_dir_all(&data_dir)?;

    let catalog = data_dir.join("catalog.db");
    let db = Database::connect(format!("sqlite://{catalog}?mode=rwc")).await?;
    Migrator::up(&db, None).await?;

    let pictures = pictures_directory();
    let imported = import_directory(&db, &pictures, "local").await?;
    info!("Imported {imported} new pictures from {pictures}");

    Ok(())
}

use std::collections::HashSet;

use anyhow::Error;
use camino::{Utf8Path, Utf8PathBuf};
use sea_orm::DatabaseConnection;
use walkdir::WalkDir;

use entity::image;

use crate::data::{add_new_images, query_existing_files};
use crate::picture::is_image;

/// Scan a directory recursively and add every image not yet in the catalog.
///
/// New records are created fully populated: the discovered path and the
/// import origin tag, with all flags in the as-added state. Records whose
/// backing file has since disappeared are left alone.
#[tracing::instrument(name = "Importing directory", skip(db))]
pub async fn import_directory(
    db: &DatabaseConnection,
    directory: &Utf8Path,
    origin: &str,
) -> Result<usize, Error> {
    let existing: HashSet<Utf8PathBuf> =
        query_existing_files(db).await?.into_iter().collect();

    let new_images: Vec<image::Model> = WalkDir::new(directory)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(is_image)
        .map(|e| {
            Utf8PathBuf::from_path_buf(e.into_path()).expect("Invalid UTF-8 path.")
        })
        .filter(|p| !existing.contains(p))
        .map(|p| image::Model {
            id: 0,
            file: p.into_string(),
            source: origin.to_owned(),
            edited: false,
            favorite: false,
            canvas: false,
        })
        .collect();

    let count = new_images.len();
    if count > 0 {
        tracing::info!("Adding {count} new images from {directory}");
        add_new_images(db, new_images).await?;
    }
    Ok(count)
}

use camino::Utf8PathBuf;
use entity::image;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use montage::data::{
    delete_all_images, query_album_images, query_canvas_images, query_image, save_image,
    update_canvas, update_edited, update_favorite,
};
use montage::import::import_directory;

async fn setup_catalog() -> DatabaseConnection {
    // A single connection keeps every query on the same in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options)
        .await
        .expect("Unable to open in-memory database");
    Migrator::up(&db, None).await.expect("Migration failed");
    db
}

fn sample(file: &str, canvas: bool) -> image::Model {
    image::Model {
        file: file.into(),
        source: "camera".into(),
        canvas,
        ..Default::default()
    }
}

#[tokio::test]
async fn saving_a_placeholder_assigns_an_id() {
    let db = setup_catalog().await;

    let id = save_image(&db, sample("a.jpg", false)).await.unwrap();
    assert!(id > 0);

    let stored = query_image(&db, id).await.unwrap().unwrap();
    assert_eq!(stored.file, "a.jpg");
    assert_eq!(stored.public_id(), id.to_string());
    assert!(!stored.is_empty());
}

#[tokio::test]
async fn saving_an_existing_id_replaces_the_record() {
    let db = setup_catalog().await;

    let id = save_image(&db, sample("a.jpg", false)).await.unwrap();
    let mut updated = sample("b.jpg", true);
    updated.id = id;
    updated.favorite = true;
    save_image(&db, updated).await.unwrap();

    let stored = query_image(&db, id).await.unwrap().unwrap();
    assert_eq!(stored.file, "b.jpg");
    assert!(stored.favorite);
    assert!(stored.canvas);

    // Replaced, not duplicated.
    assert!(query_album_images(&db).await.unwrap().is_empty());
    assert_eq!(query_canvas_images(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn canvas_flag_partitions_the_collections() {
    let db = setup_catalog().await;

    save_image(&db, sample("album.jpg", false)).await.unwrap();
    save_image(&db, sample("canvas.jpg", true)).await.unwrap();

    let album = query_album_images(&db).await.unwrap();
    let canvas = query_canvas_images(&db).await.unwrap();
    assert_eq!(album.len(), 1);
    assert_eq!(canvas.len(), 1);
    assert_eq!(album[0].file, "album.jpg");
    assert_eq!(canvas[0].file, "canvas.jpg");
}

#[tokio::test]
async fn flag_updates_touch_a_single_field() {
    let db = setup_catalog().await;
    let id = save_image(&db, sample("a.jpg", false)).await.unwrap();

    update_favorite(&db, id, true).await.unwrap();
    update_edited(&db, id, true).await.unwrap();

    let stored = query_image(&db, id).await.unwrap().unwrap();
    assert!(stored.favorite);
    assert!(stored.edited);
    assert!(!stored.is_added());
    assert_eq!(stored.file, "a.jpg");

    update_canvas(&db, id, true).await.unwrap();
    assert_eq!(query_canvas_images(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_all_clears_the_catalog() {
    let db = setup_catalog().await;

    save_image(&db, sample("a.jpg", false)).await.unwrap();
    save_image(&db, sample("b.jpg", true)).await.unwrap();
    delete_all_images(&db).await.unwrap();

    assert!(query_album_images(&db).await.unwrap().is_empty());
    assert!(query_canvas_images(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn import_scan_skips_known_files_and_non_images() {
    let db = setup_catalog().await;

    let dir = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    std::fs::create_dir(root.join("trip")).unwrap();
    std::fs::write(root.join("a.jpg"), b"jpg").unwrap();
    std::fs::write(root.join("trip/b.png"), b"png").unwrap();
    std::fs::write(root.join("notes.txt"), b"txt").unwrap();

    let imported = import_directory(&db, &root, "local").await.unwrap();
    assert_eq!(imported, 2);

    let album = query_album_images(&db).await.unwrap();
    assert_eq!(album.len(), 2);
    assert!(album.iter().all(|image| !image.is_empty()));
    assert!(album.iter().all(|image| image.is_added()));
    assert!(album.iter().all(|image| image.source == "local"));

    // A second scan finds nothing new.
    let imported = import_directory(&db, &root, "local").await.unwrap();
    assert_eq!(imported, 0);
    assert_eq!(query_album_images(&db).await.unwrap().len(), 2);
}

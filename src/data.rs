//! Provide the interface to the catalog database
//
// This module provides the interface to the database. We want this interface
// to be properly handled and tested, so we split it into this file to maintain
// the understanding and separation.

use anyhow::Error;
use camino::Utf8PathBuf;
use sea_orm::{sea_query, DatabaseConnection};
use sea_query::OnConflict;

use sea_orm::query::*;
use sea_orm::*;

use ::entity::image;

/// Insert the image, or replace the stored record carrying the same id.
///
/// An id of 0 marks a record that has never been stored; the database
/// assigns the key in that case.
#[tracing::instrument(name = "Saving image", skip(db))]
pub async fn save_image(db: &DatabaseConnection, image: image::Model) -> Result<i32, Error> {
    let record = image::ActiveModel {
        id: if image.id == 0 {
            ActiveValue::NotSet
        } else {
            ActiveValue::Set(image.id)
        },
        file: ActiveValue::Set(image.file),
        source: ActiveValue::Set(image.source),
        edited: ActiveValue::Set(image.edited),
        favorite: ActiveValue::Set(image.favorite),
        canvas: ActiveValue::Set(image.canvas),
    };
    let result = image::Entity::insert(record)
        .on_conflict(
            OnConflict::column(image::Column::Id)
                .update_columns([
                    image::Column::File,
                    image::Column::Source,
                    image::Column::Edited,
                    image::Column::Favorite,
                    image::Column::Canvas,
                ])
                .to_owned(),
        )
        .exec(db)
        .await?;
    Ok(result.last_insert_id)
}

pub async fn add_new_images(
    db: &DatabaseConnection,
    images: Vec<image::Model>,
) -> Result<(), Error> {
    image::Entity::insert_many(images.into_iter().map(|image| image::ActiveModel {
        id: ActiveValue::NotSet,
        file: ActiveValue::Set(image.file),
        source: ActiveValue::Set(image.source),
        edited: ActiveValue::Set(image.edited),
        favorite: ActiveValue::Set(image.favorite),
        canvas: ActiveValue::Set(image.canvas),
    }))
    .exec(db)
    .await?;
    Ok(())
}

#[tracing::instrument(name = "Querying images on the canvas", skip(db))]
pub async fn query_canvas_images(db: &DatabaseConnection) -> Result<Vec<image::Model>, Error> {
    Ok(image::Entity::find()
        .filter(image::Column::Canvas.eq(true))
        .all(db)
        .await?)
}

#[tracing::instrument(name = "Querying album images", skip(db))]
pub async fn query_album_images(db: &DatabaseConnection) -> Result<Vec<image::Model>, Error> {
    Ok(image::Entity::find()
        .filter(image::Column::Canvas.eq(false))
        .all(db)
        .await?)
}

pub async fn query_image(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<image::Model>, Error> {
    Ok(image::Entity::find_by_id(id).one(db).await?)
}

/// The file paths already present in the catalog, used to skip duplicates
/// when scanning a directory for new images.
pub async fn query_existing_files(db: &DatabaseConnection) -> Result<Vec<Utf8PathBuf>, Error> {
    Ok(image::Entity::find()
        .select_only()
        .column(image::Column::File)
        .into_tuple::<String>()
        .all(db)
        .await?
        .into_iter()
        .map(Utf8PathBuf::from)
        .collect())
}

pub async fn update_edited(db: &DatabaseConnection, id: i32, edited: bool) -> Result<(), Error> {
    image::ActiveModel {
        id: ActiveValue::Unchanged(id),
        edited: ActiveValue::Set(edited),
        ..Default::default()
    }
    .update(db)
    .await?;
    Ok(())
}

pub async fn update_favorite(
    db: &DatabaseConnection,
    id: i32,
    favorite: bool,
) -> Result<(), Error> {
    image::ActiveModel {
        id: ActiveValue::Unchanged(id),
        favorite: ActiveValue::Set(favorite),
        ..Default::default()
    }
    .update(db)
    .await?;
    Ok(())
}

pub async fn update_canvas(db: &DatabaseConnection, id: i32, canvas: bool) -> Result<(), Error> {
    image::ActiveModel {
        id: ActiveValue::Unchanged(id),
        canvas: ActiveValue::Set(canvas),
        ..Default::default()
    }
    .update(db)
    .await?;
    Ok(())
}

#[tracing::instrument(name = "Clearing the catalog", skip(db))]
pub async fn delete_all_images(db: &DatabaseConnection) -> Result<(), Error> {
    image::Entity::delete_many().exec(db).await?;
    Ok(())
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "images")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "entryId")]
    pub id: i32,
    pub file: String,
    pub source: String,
    pub edited: bool,
    pub favorite: bool,
    pub canvas: bool,
}

impl Model {
    /// An image is "added" while it remains in the state it was imported in.
    pub fn is_added(&self) -> bool {
        !self.edited
    }

    /// Placeholder records have not yet been populated by an import and are
    /// not usable by consumers. The test is an exact empty-string check.
    pub fn is_empty(&self) -> bool {
        self.file.is_empty() || self.source.is_empty()
    }

    /// The string rendering of the key, used for external references.
    pub fn public_id(&self) -> String {
        self.id.to_string()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

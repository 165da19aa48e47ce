use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::SavedBook;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub google_book_id: String,
    pub title: String,
    pub authors: String,
    pub publisher: String,
    pub published_date: String,
    pub thumbnail: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_book::Entity")]
    UserBooks,
}

impl Related<super::user_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBooks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SavedBook {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            google_book_id: model.google_book_id,
            title: model.title,
            authors: model.authors,
            publisher: model.publisher,
            published_date: model.published_date,
            thumbnail: model.thumbnail,
        }
    }
}

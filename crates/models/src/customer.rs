use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, QueryOrder, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub street: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a new row; the store assigns the id, whatever `row.id` holds.
pub async fn insert(db: &DatabaseConnection, row: Model) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        firstname: Set(row.firstname),
        lastname: Set(row.lastname),
        street: Set(row.street),
        postcode: Set(row.postcode),
        city: Set(row.city),
        country: Set(row.country),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Full-row update of the row matching `row.id`, in one statement.
/// A miss surfaces as [`ModelError::NotFound`].
pub async fn update(db: &DatabaseConnection, row: Model) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Unchanged(row.id),
        firstname: Set(row.firstname),
        lastname: Set(row.lastname),
        street: Set(row.street),
        postcode: Set(row.postcode),
        city: Set(row.city),
        country: Set(row.country),
    };
    am.update(db).await.map_err(|e| match e {
        DbErr::RecordNotUpdated => ModelError::NotFound,
        other => ModelError::Db(other.to_string()),
    })
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// All rows ordered by lastname, then firstname.
pub async fn find_all_ordered(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::Lastname)
        .order_by_asc(Column::Firstname)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Delete the row with that id; `false` when nothing matched.
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

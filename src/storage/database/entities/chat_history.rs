use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Chat history database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chat_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub organization_id: String,

    pub user_id: String,

    /// `user` or `assistant`
    pub role: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    /// Serialized `HistoryMetadata`
    pub metadata: Json,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id",
        on_delete = "Cascade"
    )]
    Organization,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::types::OrganizationRecord;

/// Organization database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Display name (optional)
    pub name: Option<String>,

    /// Name of a row in `subscription_tiers`
    pub subscription_tier: String,

    pub subscription_status: String,

    /// Absent for open-ended subscriptions
    pub subscription_end_date: Option<DateTimeUtc>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::chat_history::Entity")]
    ChatHistory,
}

impl Related<super::chat_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_record(&self) -> OrganizationRecord {
        OrganizationRecord {
            id: self.id.clone(),
            subscription_tier: self.subscription_tier.clone(),
            subscription_status: self.subscription_status.clone(),
            subscription_end_date: self.subscription_end_date,
        }
    }
}

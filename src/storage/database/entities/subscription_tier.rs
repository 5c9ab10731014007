use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Subscription tier database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscription_tiers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,

    /// Daily AI request ceiling; null or 0 means unlimited
    pub max_ai_requests_per_day: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Ceiling as seen by the access policy
    pub fn daily_limit(&self) -> Option<u64> {
        self.max_ai_requests_per_day
            .and_then(|limit| u64::try_from(limit).ok())
    }
}

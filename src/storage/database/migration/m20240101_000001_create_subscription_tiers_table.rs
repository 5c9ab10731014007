use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubscriptionTiers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubscriptionTiers::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubscriptionTiers::MaxAiRequestsPerDay)
                            .big_integer()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubscriptionTiers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SubscriptionTiers {
    Table,
    Name,
    MaxAiRequestsPerDay,
}

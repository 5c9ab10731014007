use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChatHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ChatHistory::OrganizationId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ChatHistory::UserId).string().not_null())
                    .col(ColumnDef::new(ChatHistory::Role).string().not_null())
                    .col(ColumnDef::new(ChatHistory::Content).text().not_null())
                    .col(ColumnDef::new(ChatHistory::Metadata).json().not_null())
                    .col(
                        ColumnDef::new(ChatHistory::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_history_organization_id")
                            .from(ChatHistory::Table, ChatHistory::OrganizationId)
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Daily usage counts scan by organization and time
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_chat_history_org_created_at")
                    .table(ChatHistory::Table)
                    .col(ChatHistory::OrganizationId)
                    .col(ChatHistory::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ChatHistory {
    Table,
    Id,
    OrganizationId,
    UserId,
    Role,
    Content,
    Metadata,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Organizations {
    Table,
    Id,
}

use sea_orm::entity::prelude::*;

/// Player record keyed by the messaging-platform user id.
///
/// The id is supplied by the client rather than generated, so the primary key
/// is not auto-incremented. Ids originate from chat-platform accounts and can
/// exceed the 32-bit range.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub username: String,
    pub level: i64,
    pub gold: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

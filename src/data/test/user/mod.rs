use crate::{data::user::UserRepository, model::user::SaveUserParam};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod find_by_id;
mod set_gold;
mod set_level;
mod upsert;

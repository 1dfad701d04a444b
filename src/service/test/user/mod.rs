use crate::{
    error::AppError,
    model::user::{SaveUserParam, SetGoldParam, SetLevelParam},
    service::user::UserService,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod set_gold;

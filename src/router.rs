use axum::{routing::get, Router};

use crate::{
    controller::user::{get_gold, get_level, get_user, save_user, set_gold, set_level},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/{id}", get(get_user).post(save_user))
        .route("/user/{id}/gold", get(get_gold).post(set_gold))
        .route("/user/{id}/level", get(get_level).post(set_level))
}

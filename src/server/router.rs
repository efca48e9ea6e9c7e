use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        booking::{
            approve_booking, create_booking, get_booker_bookings, get_booking, get_owner_bookings,
        },
        item::{
            add_comment, create_item, delete_item, get_item, get_owned_items, search_items,
            update_item,
        },
        request::{create_request, get_other_requests, get_own_requests, get_request},
        user::{create_user, delete_user, get_user, get_users, update_user},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "ShareIt", description = "Peer-to-peer item sharing"),
    paths(
        crate::server::controller::user::get_users,
        crate::server::controller::user::get_user,
        crate::server::controller::user::create_user,
        crate::server::controller::user::update_user,
        crate::server::controller::user::delete_user,
        crate::server::controller::item::get_owned_items,
        crate::server::controller::item::get_item,
        crate::server::controller::item::search_items,
        crate::server::controller::item::create_item,
        crate::server::controller::item::update_item,
        crate::server::controller::item::delete_item,
        crate::server::controller::item::add_comment,
        crate::server::controller::booking::create_booking,
        crate::server::controller::booking::approve_booking,
        crate::server::controller::booking::get_booking,
        crate::server::controller::booking::get_booker_bookings,
        crate::server::controller::booking::get_owner_bookings,
        crate::server::controller::request::create_request,
        crate::server::controller::request::get_own_requests,
        crate::server::controller::request::get_other_requests,
        crate::server::controller::request::get_request,
    ),
    tags(
        (name = "user", description = "User accounts"),
        (name = "item", description = "Shared items and their comments"),
        (name = "booking", description = "Item bookings"),
        (name = "request", description = "Requests for items nobody has listed yet"),
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/items", get(get_owned_items).post(create_item))
        .route("/items/search", get(search_items))
        .route(
            "/items/{id}",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .route("/items/{id}/comment", post(add_comment))
        .route("/bookings", get(get_booker_bookings).post(create_booking))
        .route("/bookings/owner", get(get_owner_bookings))
        .route("/bookings/{id}", get(get_booking).patch(approve_booking))
        .route("/requests", get(get_own_requests).post(create_request))
        .route("/requests/all", get(get_other_requests))
        .route("/requests/{id}", get(get_request))
        .route("/api-docs/openapi.json", get(openapi))
}

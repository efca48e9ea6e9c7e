use axum::{
    routing::{get, post},
    Router,
};

use crate::gateway::{
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
    state::GatewayState,
};

pub fn router() -> Router<GatewayState> {
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
}

//! API Route Handlers
//!
//! Wires every `/api` endpoint to its handler.
//!
//! # Routes
//!
//! ## Auth
//! - `POST /api/register` - create account + session
//! - `POST /api/login` - authenticate + session
//! - `POST /api/logout` - destroy session
//! - `GET /api/user` - current user (401 when anonymous)
//!
//! ## Catalog (public reads)
//! - `GET /api/countries`, `GET /api/countries/{id}`
//! - `GET /api/resource-categories`
//! - `GET /api/resources?countryId=&categoryId=`, `GET /api/resources/{id}`
//!
//! ## Community
//! - `GET /api/posts`, `POST /api/posts` (session)
//! - `POST /api/posts/{id}/like` (open counter)
//! - `GET /api/posts/{postId}/comments`
//! - `POST /api/posts/{postId}/comments` (session)
//!
//! ## Events & support
//! - `GET /api/events?countryId=`, `POST /api/events/{id}/attend`
//! - `GET /api/emergency-contacts/{countryId}`
//! - `POST /api/contact`

use axum::routing::{get, post};
use axum::Router;

use crate::auth::handlers::{current_user, login, logout, register};
use crate::catalog::handlers as catalog;
use crate::community::handlers as community;
use crate::events::handlers as events;
use crate::server::state::AppState;
use crate::support::handlers as support;

pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/user", get(current_user))
        // Countries and resources
        .route("/api/countries", get(catalog::list_countries))
        .route("/api/countries/{id}", get(catalog::get_country))
        .route(
            "/api/resource-categories",
            get(catalog::list_resource_categories),
        )
        .route("/api/resources", get(catalog::list_resources))
        .route("/api/resources/{id}", get(catalog::get_resource))
        // Community forum
        .route(
            "/api/posts",
            get(community::list_posts).post(community::create_post),
        )
        .route("/api/posts/{id}/like", post(community::like_post))
        .route(
            "/api/posts/{post_id}/comments",
            get(community::list_comments).post(community::create_comment),
        )
        // Events
        .route("/api/events", get(events::list_events))
        .route("/api/events/{id}/attend", post(events::attend_event))
        // Emergency contacts and contact form
        .route(
            "/api/emergency-contacts/{country_id}",
            get(support::list_emergency_contacts),
        )
        .route("/api/contact", post(support::create_contact_message))
}

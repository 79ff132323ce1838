//! wax-web - browser app for the wax label site.
//!
//! Composes the two session stores, the catalog cache, and the router;
//! protected paths mount behind the route guards.

pub mod api;
pub mod app_service;
pub mod guard;
pub mod pages;

use api::ApiClient;
use app_service::AppService;
use dioxus::prelude::*;
use guard::{RequireAdminSession, RequireArtistSession};
use pages::{
    Admin, AdminLogin, AppLayout, ArtistDetail, Artists, Discography, Home, Login, Profile,
    Register, Releases,
};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/artists")]
    Artists {},
    #[route("/artists/:id")]
    ArtistDetail { id: i64 },
    #[route("/releases")]
    Releases {},
    #[route("/discography")]
    Discography {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/admin/login")]
    AdminLogin {},
    #[layout(RequireArtistSession)]
    #[route("/profile")]
    Profile {},
    #[end_layout]
    #[layout(RequireAdminSession)]
    #[route("/admin")]
    Admin {},
}

#[component]
pub fn App() -> Element {
    // Created once: owns the Store and kicks off the silent verification of
    // both domains plus the one-shot catalog fetch.
    let app_service = use_hook(|| {
        let service = AppService::new(ApiClient::new());
        service.start();
        service
    });
    use_context_provider(|| app_service);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

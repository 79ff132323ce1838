//! App layout: nav bar, page outlet, footer, global notice toast.

use crate::app_service::use_app;
use crate::Route;
use dioxus::prelude::*;
use wax_ui::stores::{
    AppStateStoreExt, SessionDomain, SessionStateStoreExt, UiStateStoreExt,
};
use wax_ui::{NavBarView, NavItem, NoticeToast};

#[component]
pub fn AppLayout() -> Element {
    let app = use_app();
    let current_route = use_route::<Route>();

    let session_user = app
        .state
        .artist_session()
        .profile()
        .read()
        .clone()
        .map(|p| p.username);
    let menu_open = *app.state.ui().menu_open().read();
    let notice = app.state.ui().notice().read().clone();

    let mut nav_items = vec![
        NavItem {
            id: "home".to_string(),
            label: "Home".to_string(),
            is_active: matches!(current_route, Route::Home {}),
        },
        NavItem {
            id: "artists".to_string(),
            label: "Artists".to_string(),
            is_active: matches!(current_route, Route::Artists {} | Route::ArtistDetail { .. }),
        },
        NavItem {
            id: "releases".to_string(),
            label: "Releases".to_string(),
            is_active: matches!(current_route, Route::Releases {}),
        },
        NavItem {
            id: "discography".to_string(),
            label: "Discography".to_string(),
            is_active: matches!(current_route, Route::Discography {}),
        },
    ];
    if session_user.is_some() {
        nav_items.push(NavItem {
            id: "profile".to_string(),
            label: "Profile".to_string(),
            is_active: matches!(current_route, Route::Profile {}),
        });
    } else {
        nav_items.push(NavItem {
            id: "register".to_string(),
            label: "Register".to_string(),
            is_active: matches!(current_route, Route::Register {}),
        });
    }

    let nav_app = app.clone();
    let logout_app = app.clone();
    let menu_app = app.clone();
    let dismiss_app = app.clone();

    rsx! {
        div { class: "min-h-screen bg-neutral-950 text-gray-200 flex flex-col",
            NavBarView {
                brand: "WAX".to_string(),
                nav_items,
                on_nav_click: move |id: String| {
                    nav_app.state.ui().menu_open().set(false);
                    let route = match id.as_str() {
                        "artists" => Route::Artists {},
                        "releases" => Route::Releases {},
                        "discography" => Route::Discography {},
                        "profile" => Route::Profile {},
                        "register" => Route::Register {},
                        _ => Route::Home {},
                    };
                    navigator().push(route);
                },
                session_user,
                on_login_click: move |_| {
                    navigator().push(Route::Login {});
                },
                on_logout_click: move |_| logout_app.logout(SessionDomain::Artist),
                menu_open,
                on_menu_toggle: move |_| {
                    let mut binding = menu_app.state.ui();
                    let mut ui = binding.write();
                    ui.menu_open = !ui.menu_open;
                },
            }

            main { class: "flex-grow flex flex-col", Outlet::<Route> {} }

            footer { class: "border-t border-neutral-800 py-6 text-center text-sm text-gray-500",
                p { "WAX - independent hard techno label" }
            }

            if let Some(notice) = notice {
                NoticeToast {
                    message: notice,
                    on_dismiss: move |_| dismiss_app.dismiss_notice(),
                }
            }
        }
    }
}

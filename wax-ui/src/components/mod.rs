//! Shared UI components

pub mod artist_card;
pub mod artist_editor;
pub mod button;
pub mod error_banner;
pub mod helpers;
pub mod icons;
pub mod login_form;
pub mod nav_bar;
pub mod notice_toast;
pub mod register_form;
pub mod release_card;
pub mod text_input;

pub use artist_card::ArtistCard;
pub use artist_editor::ArtistEditorView;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use error_banner::ErrorBanner;
pub use helpers::{EmptyState, ErrorDisplay, LoadingSpinner, PageContainer};
pub use icons::{AlertTriangleIcon, DiscIcon, ExternalLinkIcon, MenuIcon, XIcon};
pub use login_form::LoginFormView;
pub use nav_bar::{NavBarView, NavItem};
pub use notice_toast::NoticeToast;
pub use register_form::RegisterFormView;
pub use release_card::ReleaseCard;
pub use text_input::{TextInput, TextInputSize, TextInputType};

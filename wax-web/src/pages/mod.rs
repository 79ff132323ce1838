mod admin;
mod admin_login;
mod artist_detail;
mod artists;
mod discography;
mod home;
mod layout;
mod login;
mod profile;
mod register;
mod releases;

pub use admin::Admin;
pub use admin_login::AdminLogin;
pub use artist_detail::ArtistDetail;
pub use artists::Artists;
pub use discography::Discography;
pub use home::Home;
pub use layout::AppLayout;
pub use login::Login;
pub use profile::Profile;
pub use register::Register;
pub use releases::Releases;

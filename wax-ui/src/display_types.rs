//! Display types for UI components
//!
//! Lightweight versions of the server's records, containing only the fields
//! needed for display. They enable props-based components that can work with
//! either real or demo data; wire types live in the web crate's API client.

use chrono::NaiveDate;

/// The authenticated principal's profile, as returned by login/verify.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Option<String>,
}

/// One artist record from the bulk catalog listing.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogArtist {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

/// Streaming/store links attached to a release.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReleaseLinks {
    pub bandcamp: Option<String>,
    pub beatport: Option<String>,
    pub spotify: Option<String>,
    pub apple_music: Option<String>,
    pub youtube: Option<String>,
    pub soundcloud: Option<String>,
}

impl ReleaseLinks {
    /// Non-empty links as (label, url) pairs, in display order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Bandcamp", &self.bandcamp),
            ("Beatport", &self.beatport),
            ("Spotify", &self.spotify),
            ("Apple Music", &self.apple_music),
            ("YouTube", &self.youtube),
            ("SoundCloud", &self.soundcloud),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.as_deref().map(|u| (label, u)))
        .collect()
    }
}

/// Release display info.
#[derive(Clone, Debug, PartialEq)]
pub struct Release {
    pub id: i64,
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub release_type: Option<String>,
    pub cover_url: Option<String>,
    pub description: Option<String>,
    pub artist_ids: Vec<i64>,
    pub links: ReleaseLinks,
}

impl Release {
    /// Release year for compact listings.
    pub fn year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release_date.map(|d| d.year())
    }
}

/// Selectable role for the register form.
#[derive(Clone, Debug, PartialEq)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// Login form input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Register form input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role_id: Option<i64>,
}

//! HTTP client facade for the label's API.
//!
//! A single configured transport for auth and catalog endpoints. Requests are
//! same-origin, so the browser attaches the HTTP-only session cookie on every
//! call; the client never reads the token itself, it only sees success or
//! 401/403. HTTP failures surface as [`ApiError`] with the status code and
//! the server-provided message. No retries happen here; retry policy belongs
//! to callers.

use chrono::NaiveDate;
use serde::Deserialize;
use wax_ui::display_types::{
    CatalogArtist, Credentials, Profile, RegisterPayload, Release, ReleaseLinks, Role,
};
use wax_ui::stores::SessionDomain;

const DEFAULT_API_BASE: &str = "/api";

/// Base path for the API. Override at build time with `WAX_API_BASE`.
pub fn api_base() -> String {
    option_env!("WAX_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .to_string()
}

/// Typed failure from the API facade.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
    /// Malformed input rejected by the server (400/422).
    #[error("{0}")]
    Validation(String),
    /// Rejected credentials at a login endpoint.
    #[error("{0}")]
    Auth(String),
    /// No valid session (401/403 outside login). Expected, handled silently.
    #[error("no active session")]
    Unauthenticated,
    #[error("not found")]
    NotFound,
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

// -- Wire types (Deserialize, separate from the display types) --

#[derive(Debug, Deserialize)]
struct ProfileBody {
    id: i64,
    username: String,
    email: String,
    #[serde(default)]
    role: Option<String>,
}

impl From<ProfileBody> for Profile {
    fn from(b: ProfileBody) -> Self {
        Profile {
            id: b.id,
            username: b.username,
            email: b.email,
            role: b.role,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ArtistBody {
    id: i64,
    #[serde(rename = "artist_name")]
    name: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    bio: Option<String>,
}

impl From<ArtistBody> for CatalogArtist {
    fn from(b: ArtistBody) -> Self {
        CatalogArtist {
            id: b.id,
            name: b.name,
            image_url: b.image_url,
            bio: b.bio,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReleaseBody {
    id: i64,
    title: String,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    genre: Option<String>,
    #[serde(default)]
    release_type: Option<String>,
    #[serde(default)]
    cover_image_url: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    artist_ids: Vec<i64>,
    #[serde(default)]
    bandcamp_link: Option<String>,
    #[serde(default)]
    beatport_link: Option<String>,
    #[serde(default)]
    spotify_link: Option<String>,
    #[serde(default)]
    apple_music_link: Option<String>,
    #[serde(default)]
    youtube_link: Option<String>,
    #[serde(default)]
    soundcloud_link: Option<String>,
}

impl From<ReleaseBody> for Release {
    fn from(b: ReleaseBody) -> Self {
        Release {
            id: b.id,
            title: b.title,
            release_date: b
                .release_date
                .as_deref()
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
            genre: b.genre,
            release_type: b.release_type,
            cover_url: b.cover_image_url,
            description: b.description,
            artist_ids: b.artist_ids,
            links: ReleaseLinks {
                bandcamp: b.bandcamp_link,
                beatport: b.beatport_link,
                spotify: b.spotify_link,
                apple_music: b.apple_music_link,
                youtube: b.youtube_link,
                soundcloud: b.soundcloud_link,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct RoleBody {
    id: i64,
    name: String,
}

impl From<RoleBody> for Role {
    fn from(b: RoleBody) -> Self {
        Role {
            id: b.id,
            name: b.name,
        }
    }
}

/// Input for creating or updating an artist record (admin dashboard).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtistInput {
    pub name: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

/// Map a non-success status outside the login path. 401/403 is the expected
/// "no session" answer, never an error banner.
fn classify_status(status: u16, message: String) -> ApiError {
    match status {
        400 | 422 => ApiError::Validation(message),
        401 | 403 => ApiError::Unauthenticated,
        404 => ApiError::NotFound,
        _ => ApiError::Server { status, message },
    }
}

/// Pull the server's `{"message": ...}` out of an error body, if present.
fn parse_server_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|e| e.message)
}

/// The HTTP client facade. One instance per app, cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base: api_base(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Auth endpoints for the admin domain live under an `/admin` prefix;
    /// the artist domain uses the bare paths.
    fn session_url(&self, domain: SessionDomain, path: &str) -> String {
        match domain {
            SessionDomain::Artist => self.url(path),
            SessionDomain::Admin => self.url(&format!("/admin{path}")),
        }
    }

    /// Status + server message from a non-success response.
    async fn failure(resp: reqwest::Response) -> (u16, String) {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let message = parse_server_message(&body).unwrap_or(body);
        (status, message)
    }

    /// Map a non-success response outside the login path.
    async fn error_from(resp: reqwest::Response) -> ApiError {
        let (status, message) = Self::failure(resp).await;
        classify_status(status, message)
    }

    // -- Auth --

    /// Create a new artist account. The session is not established by this
    /// call; the user signs in afterwards.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<Profile, ApiError> {
        let resp = self
            .http
            .post(self.url("/register"))
            .json(&serde_json::json!({
                "username": payload.username,
                "email": payload.email,
                "password": payload.password,
                "role_id": payload.role_id,
            }))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp.json::<ProfileBody>().await?.into())
        } else {
            Err(Self::error_from(resp).await)
        }
    }

    /// Log in to one session domain. On success the server sets the domain's
    /// HTTP-only cookie; the returned profile is the only thing the client
    /// keeps.
    pub async fn login(
        &self,
        domain: SessionDomain,
        credentials: &Credentials,
    ) -> Result<Profile, ApiError> {
        let resp = self
            .http
            .post(self.session_url(domain, "/login"))
            .json(&serde_json::json!({
                "email": credentials.email,
                "password": credentials.password,
            }))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp.json::<ProfileBody>().await?.into())
        } else {
            let (status, message) = Self::failure(resp).await;
            Err(match status {
                400 | 422 => ApiError::Validation(message),
                401 | 403 => ApiError::Auth(if message.is_empty() {
                    "invalid email or password".to_string()
                } else {
                    message
                }),
                _ => ApiError::Server { status, message },
            })
        }
    }

    /// Invalidate one domain's session cookie.
    pub async fn logout(&self, domain: SessionDomain) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.session_url(domain, "/logout"))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(resp).await)
        }
    }

    /// Ask the server whether the domain's cookie still names a valid
    /// session. 401/403 is the expected "no session" answer.
    pub async fn verify_session(&self, domain: SessionDomain) -> Result<Profile, ApiError> {
        let resp = self
            .http
            .get(self.session_url(domain, "/verify"))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp.json::<ProfileBody>().await?.into())
        } else {
            Err(Self::error_from(resp).await)
        }
    }

    /// Profile of the currently authenticated principal.
    pub async fn get_profile(&self, domain: SessionDomain) -> Result<Profile, ApiError> {
        let resp = self
            .http
            .get(self.session_url(domain, "/profile"))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp.json::<ProfileBody>().await?.into())
        } else {
            Err(Self::error_from(resp).await)
        }
    }

    /// Profile of another principal by id.
    pub async fn get_profile_by_id(&self, id: i64) -> Result<Profile, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/profile/{id}")))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp.json::<ProfileBody>().await?.into())
        } else {
            Err(Self::error_from(resp).await)
        }
    }

    // -- Catalog --

    /// The full artist listing, in server order.
    pub async fn list_artists(&self) -> Result<Vec<CatalogArtist>, ApiError> {
        let resp = self.http.get(self.url("/artists")).send().await?;

        if resp.status().is_success() {
            let bodies: Vec<ArtistBody> = resp.json().await?;
            Ok(bodies.into_iter().map(Into::into).collect())
        } else {
            Err(Self::error_from(resp).await)
        }
    }

    pub async fn get_artist(&self, id: i64) -> Result<CatalogArtist, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/artists/{id}")))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp.json::<ArtistBody>().await?.into())
        } else {
            Err(Self::error_from(resp).await)
        }
    }

    pub async fn artist_releases(&self, id: i64) -> Result<Vec<Release>, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/artists/{id}/releases")))
            .send()
            .await?;

        if resp.status().is_success() {
            let bodies: Vec<ReleaseBody> = resp.json().await?;
            Ok(bodies.into_iter().map(Into::into).collect())
        } else {
            Err(Self::error_from(resp).await)
        }
    }

    // -- Admin artist CRUD --

    pub async fn create_artist(&self, input: &ArtistInput) -> Result<CatalogArtist, ApiError> {
        let resp = self
            .http
            .post(self.url("/artists"))
            .json(&serde_json::json!({
                "artist_name": input.name,
                "image_url": input.image_url,
                "bio": input.bio,
            }))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp.json::<ArtistBody>().await?.into())
        } else {
            Err(Self::error_from(resp).await)
        }
    }

    pub async fn update_artist(
        &self,
        id: i64,
        input: &ArtistInput,
    ) -> Result<CatalogArtist, ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/artists/{id}")))
            .json(&serde_json::json!({
                "artist_name": input.name,
                "image_url": input.image_url,
                "bio": input.bio,
            }))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp.json::<ArtistBody>().await?.into())
        } else {
            Err(Self::error_from(resp).await)
        }
    }

    pub async fn delete_artist(&self, id: i64) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/artists/{id}")))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(resp).await)
        }
    }

    /// Roles for the register form's picker.
    pub async fn list_roles(&self) -> Result<Vec<Role>, ApiError> {
        let resp = self.http.get(self.url("/roles")).send().await?;

        if resp.status().is_success() {
            let bodies: Vec<RoleBody> = resp.json().await?;
            Ok(bodies.into_iter().map(Into::into).collect())
        } else {
            Err(Self::error_from(resp).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_profile_body() {
        let json = r#"{
            "id": 7,
            "username": "kessler",
            "email": "kessler@example.com",
            "role": "artist"
        }"#;
        let profile: Profile = serde_json::from_str::<ProfileBody>(json).unwrap().into();
        assert_eq!(profile.id, 7);
        assert_eq!(profile.username, "kessler");
        assert_eq!(profile.role.as_deref(), Some("artist"));
    }

    #[test]
    fn parse_profile_body_without_role() {
        let json = r#"{"id": 1, "username": "a", "email": "a@b.c"}"#;
        let profile: Profile = serde_json::from_str::<ProfileBody>(json).unwrap().into();
        assert!(profile.role.is_none());
    }

    #[test]
    fn parse_artist_body_renames_artist_name() {
        let json = r#"{"id": 3, "artist_name": "Drumcell", "image_url": "/img/d.jpg"}"#;
        let artist: CatalogArtist = serde_json::from_str::<ArtistBody>(json).unwrap().into();
        assert_eq!(artist.id, 3);
        assert_eq!(artist.name, "Drumcell");
        assert_eq!(artist.image_url.as_deref(), Some("/img/d.jpg"));
        assert!(artist.bio.is_none());
    }

    #[test]
    fn parse_release_body() {
        let json = r#"{
            "id": 11,
            "title": "Klangwerk EP",
            "release_date": "2023-09-15",
            "genre": "Hard Techno",
            "release_type": "EP",
            "cover_image_url": "/img/klangwerk.jpg",
            "artist_ids": [3, 5],
            "bandcamp_link": "https://example.bandcamp.com/album/klangwerk",
            "spotify_link": "https://open.spotify.com/album/xyz"
        }"#;
        let release: Release = serde_json::from_str::<ReleaseBody>(json).unwrap().into();
        assert_eq!(release.title, "Klangwerk EP");
        assert_eq!(release.year(), Some(2023));
        assert_eq!(release.artist_ids, vec![3, 5]);
        let links = release.links.entries();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].0, "Bandcamp");
    }

    #[test]
    fn parse_release_body_bad_date_is_none() {
        let json = r#"{"id": 1, "title": "X", "release_date": "soon"}"#;
        let release: Release = serde_json::from_str::<ReleaseBody>(json).unwrap().into();
        assert!(release.release_date.is_none());
    }

    #[test]
    fn server_message_extraction() {
        assert_eq!(
            parse_server_message(r#"{"message": "email already taken"}"#).as_deref(),
            Some("email already taken")
        );
        assert!(parse_server_message("internal error").is_none());
        assert!(parse_server_message("").is_none());
    }

    #[test]
    fn status_classification() {
        assert!(matches!(
            classify_status(422, "bad email".into()),
            ApiError::Validation(m) if m == "bad email"
        ));
        assert!(matches!(
            classify_status(401, String::new()),
            ApiError::Unauthenticated
        ));
        assert!(matches!(
            classify_status(403, String::new()),
            ApiError::Unauthenticated
        ));
        assert!(matches!(
            classify_status(404, String::new()),
            ApiError::NotFound
        ));
        assert!(matches!(
            classify_status(500, "boom".into()),
            ApiError::Server { status: 500, message } if message == "boom"
        ));
    }

    #[test]
    fn session_urls_prefix_admin_domain() {
        let client = ApiClient {
            http: reqwest::Client::new(),
            base: "/api".to_string(),
        };
        assert_eq!(
            client.session_url(SessionDomain::Artist, "/verify"),
            "/api/verify"
        );
        assert_eq!(
            client.session_url(SessionDomain::Admin, "/verify"),
            "/api/admin/verify"
        );
        assert_eq!(
            client.session_url(SessionDomain::Admin, "/login"),
            "/api/admin/login"
        );
    }
}

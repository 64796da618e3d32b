//! External service integrations

pub mod http_session;
pub mod logging;
pub mod lookup;
pub mod matcher;
pub mod omdb;
pub mod text_utils;
pub mod tmdb;

pub use http_session::HttpSession;
pub use lookup::{LookupError, LookupService};
pub use omdb::OmdbClient;
pub use tmdb::{SearchScope, TmdbClient};

//! Cinegram - movie and series lookup for Telegram
//!
//! Search TMDB for a title, resolve the intended match, and present it as a
//! set of switchable views (basic info, ratings, cast, where to watch).

pub mod app;
pub mod app_mode;
pub mod bot;
pub mod cli;
pub mod config;
pub mod media;
pub mod services;

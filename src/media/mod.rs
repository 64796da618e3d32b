//! Title lookup domain: provider-independent records and their text views

pub mod models;
pub mod views;

pub use models::{
    CastCredit, CrewCredit, CriticRating, MediaKind, MediaRecord, SearchCandidate,
    SecondaryRecord, ViewKind, year_from_date,
};

//! Action-Katalog für den unidirektionalen Datenfluss.

mod action;

pub use action::Action;

pub mod commands;
pub mod config;
pub mod error;
pub mod music;
pub mod observability;
pub mod recommendation;
pub mod report;
pub mod session;
pub mod share;
pub mod shell;

rust_i18n::i18n!("locales", fallback = "en");

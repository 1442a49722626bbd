pub mod classify;
pub mod config;
pub mod route;
pub mod track;

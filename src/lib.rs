//! Todo List Frontend
//!
//! Browser list widget: add, edit, complete, reorder and delete items,
//! saved to `localStorage` after every change.

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod edit;
pub mod list;
pub mod models;
pub mod storage;
pub mod store;

pub use app::App;
pub use config::AppConfig;

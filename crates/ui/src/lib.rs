#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod context;
pub mod progress;
pub mod routes;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
pub use progress::{ProgressHandle, use_progress, use_progress_provider};

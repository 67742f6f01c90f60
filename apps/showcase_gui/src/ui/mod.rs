pub mod app;
pub mod content;
pub mod model_view;
pub mod theme;

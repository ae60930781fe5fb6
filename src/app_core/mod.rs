mod app;
mod fetch;
mod player;
mod select;

pub use app::Odeon;

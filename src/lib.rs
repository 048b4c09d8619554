pub mod args;
pub mod error;
pub mod model;
pub mod notify;
pub mod router;
pub mod state;
pub mod controller {
    pub mod events;
    pub mod request;
}
pub mod view {
    pub mod board;
    pub mod display;
    pub mod focus;
    pub mod index;
    pub mod modes;
    pub mod overlay;
    pub mod table;
}

pub const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";

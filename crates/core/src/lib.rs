//! View-state core of the folio portfolio page.
//!
//! Hosts (the egui app, the DOM binding, the terminal viewer) own the real
//! scroll position and clock. They feed [`PortfolioEvent`]s into a
//! [`PortfolioState`] together with a [`DocumentLayout`], carry out the
//! returned [`Effect`]s, and render the page produced by
//! [`views::render_page`].

pub mod assets;
pub mod config;
pub mod content;
pub mod layout;
pub mod state;
pub mod views;

pub use assets::{AssetResolver, BasePath};
pub use config::{ConfigError, FolioConfig};
pub use content::{ContentError, parse_content, reference_content};
pub use layout::{DocumentLayout, ElementRef, StaticLayout};
pub use state::{Effect, PortfolioEvent, PortfolioState};

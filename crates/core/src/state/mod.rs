pub mod active;
pub mod carousel;
pub mod deferred;
pub mod navigator;
pub mod portfolio;
pub mod reveal;
pub mod timeline;

pub use active::ActiveSectionTracker;
pub use carousel::ProjectCarousel;
pub use deferred::{DeferredQueue, TimerToken};
pub use navigator::{ScrollAnimation, ScrollNavigator, scroll_into_view_top};
pub use portfolio::{Effect, PortfolioEvent, PortfolioState};
pub use reveal::{RevealTracker, intersection_ratio};
pub use timeline::{TimelineExpansion, Toggle};

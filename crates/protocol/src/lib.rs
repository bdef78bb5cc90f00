pub mod commands;
pub mod content;
pub mod section;
pub mod shared_str;
pub mod snapshot;
pub mod theme;
pub mod types;

pub use commands::{HitTarget, RenderCommand, TextAlign};
pub use content::{
    About, Contact, Content, ProfileInfo, ProjectEntry, ProjectImage, Side, TimelineEntry,
};
pub use section::{ParseSectionError, SectionId};
pub use shared_str::SharedStr;
pub use snapshot::{CarouselSnapshot, ViewSnapshot};
pub use theme::ThemeToken;
pub use types::{Point, Rect, Viewport};

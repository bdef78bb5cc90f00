mod reference;

pub use reference::reference_content;

use folio_protocol::{Content, ProjectImage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{kind} #{index} has an empty title")]
    EmptyTitle { kind: &'static str, index: usize },
    #[error("project #{index} has an empty image path")]
    EmptyImagePath { index: usize },
    #[error("profile name is empty")]
    EmptyName,
}

/// Parse page content from JSON and validate it.
pub fn parse_content(data: &[u8]) -> Result<Content, ContentError> {
    let content: Content = serde_json::from_slice(data)?;
    validate(&content)?;
    tracing::debug!(
        timeline = content.timeline.len(),
        projects = content.projects.len(),
        "loaded page content"
    );
    Ok(content)
}

/// Check the invariants renderers rely on: every card has a title and every
/// image reference names a path.
pub fn validate(content: &Content) -> Result<(), ContentError> {
    if content.profile.name.trim().is_empty() {
        return Err(ContentError::EmptyName);
    }
    for (index, entry) in content.timeline.iter().enumerate() {
        if entry.title.trim().is_empty() {
            return Err(ContentError::EmptyTitle {
                kind: "timeline entry",
                index,
            });
        }
    }
    for (index, project) in content.projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            return Err(ContentError::EmptyTitle {
                kind: "project",
                index,
            });
        }
        let empty_path = match &project.image {
            ProjectImage::Single(path) => path.trim().is_empty(),
            ProjectImage::Pair(a, b) => a.trim().is_empty() || b.trim().is_empty(),
            ProjectImage::Placeholder => false,
        };
        if empty_path {
            return Err(ContentError::EmptyImagePath { index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_content_is_valid() {
        let content = reference_content();
        assert!(validate(&content).is_ok());
        assert_eq!(content.timeline.len(), 2);
        assert_eq!(content.projects.len(), 6);
    }

    #[test]
    fn json_content_survives_reload() {
        let content = reference_content();
        let json = serde_json::to_vec(&content).unwrap_or_default();
        let parsed = parse_content(&json);
        assert!(matches!(parsed, Ok(ref c) if *c == content));
    }

    #[test]
    fn rejects_untitled_project() {
        let mut content = reference_content();
        content.projects[2].title = "  ".into();
        assert!(matches!(
            validate(&content),
            Err(ContentError::EmptyTitle { kind: "project", index: 2 })
        ));
    }

    #[test]
    fn rejects_empty_image_path() {
        let mut content = reference_content();
        content.projects[0].image = ProjectImage::Pair("/a.jpg".into(), "".into());
        assert!(matches!(
            validate(&content),
            Err(ContentError::EmptyImagePath { index: 0 })
        ));
    }

    #[test]
    fn reports_malformed_json() {
        assert!(matches!(parse_content(b"[]"), Err(ContentError::Json(_))));
    }
}

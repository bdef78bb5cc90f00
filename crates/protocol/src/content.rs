use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;

/// Which side of the timeline spine a card sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// One work-experience record on the career roadmap.
///
/// Entries are immutable; the position in [`Content::timeline`] is the
/// entry's identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub title: SharedStr,
    pub organization: SharedStr,
    pub period: SharedStr,
    pub location: SharedStr,
    /// One-line summary, always visible.
    pub summary: SharedStr,
    /// Bullet points shown only while the card is expanded.
    #[serde(default)]
    pub details: Vec<SharedStr>,
    #[serde(default)]
    pub skills: Vec<SharedStr>,
    pub side: Side,
    #[serde(default)]
    pub is_current: bool,
}

/// Preview artwork for a project card, as logical asset paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "paths")]
pub enum ProjectImage {
    Single(SharedStr),
    /// Two images shown side by side, each taking half the frame.
    Pair(SharedStr, SharedStr),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: SharedStr,
    pub description: SharedStr,
    pub image: ProjectImage,
    #[serde(default)]
    pub tech: Vec<SharedStr>,
    #[serde(default)]
    pub github: Option<SharedStr>,
    #[serde(default)]
    pub live: Option<SharedStr>,
}

impl ProjectEntry {
    /// The link a card opens: the live demo if there is one, otherwise the
    /// source repository, otherwise nothing and the card is not clickable.
    pub fn outbound_link(&self) -> Option<&str> {
        fn non_empty(link: &Option<SharedStr>) -> Option<&str> {
            link.as_deref().filter(|s| !s.is_empty())
        }
        non_empty(&self.live).or_else(|| non_empty(&self.github))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub name: SharedStr,
    pub headline: SharedStr,
    /// Logical asset path of the portrait.
    pub portrait: SharedStr,
    pub github_url: SharedStr,
    pub linkedin_url: SharedStr,
    pub email: SharedStr,
}

impl ProfileInfo {
    /// Web-mail compose URL with the recipient pre-filled.
    pub fn compose_email_url(&self) -> String {
        format!("https://mail.google.com/mail/?view=cm&to={}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub heading: SharedStr,
    pub subheading: SharedStr,
    pub paragraphs: Vec<SharedStr>,
    #[serde(default)]
    pub interests: Vec<SharedStr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub heading: SharedStr,
    pub blurb: SharedStr,
}

/// Everything the page displays. Static for the lifetime of a page view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub profile: ProfileInfo,
    pub about: About,
    pub timeline: Vec<TimelineEntry>,
    pub projects: Vec<ProjectEntry>,
    pub contact: Contact,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(github: Option<&str>, live: Option<&str>) -> ProjectEntry {
        ProjectEntry {
            title: "p".into(),
            description: "d".into(),
            image: ProjectImage::Placeholder,
            tech: vec![],
            github: github.map(SharedStr::from),
            live: live.map(SharedStr::from),
        }
    }

    #[test]
    fn live_link_wins_over_github() {
        let p = project(Some("https://github.com/a/b"), Some("https://demo.example"));
        assert_eq!(p.outbound_link(), Some("https://demo.example"));
    }

    #[test]
    fn github_link_used_when_no_live_link() {
        let p = project(Some("https://github.com/a/b"), None);
        assert_eq!(p.outbound_link(), Some("https://github.com/a/b"));
        let p = project(Some("https://github.com/a/b"), Some(""));
        assert_eq!(p.outbound_link(), Some("https://github.com/a/b"));
    }

    #[test]
    fn no_link_when_both_empty() {
        assert_eq!(project(None, None).outbound_link(), None);
        assert_eq!(project(Some(""), Some("")).outbound_link(), None);
    }

    #[test]
    fn blank_link_is_not_trimmed_away() {
        let p = project(Some("https://github.com/a/b"), Some("  "));
        assert_eq!(p.outbound_link(), Some("  "));
    }

    #[test]
    fn compose_url_includes_recipient() {
        let profile = ProfileInfo {
            name: "n".into(),
            headline: "h".into(),
            portrait: "/p.png".into(),
            github_url: "g".into(),
            linkedin_url: "l".into(),
            email: "me@example.com".into(),
        };
        assert_eq!(
            profile.compose_email_url(),
            "https://mail.google.com/mail/?view=cm&to=me@example.com"
        );
    }

    #[test]
    fn image_pair_serializes_tagged() {
        let image = ProjectImage::Pair("/a.jpg".into(), "/b.jpg".into());
        let json = serde_json::to_string(&image).unwrap_or_default();
        assert_eq!(json, r#"{"kind":"pair","paths":["/a.jpg","/b.jpg"]}"#);
    }
}

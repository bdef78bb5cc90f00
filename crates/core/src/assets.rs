/// Maps a logical asset path (as written in content) to a URL the host can
/// load.
pub trait AssetResolver {
    fn resolve(&self, logical: &str) -> String;
}

/// Prefixes logical paths with a deploy base path, e.g. `/portfolio` when the
/// site is served from a project subdirectory.
///
/// Absolute URLs and `data:` URIs pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self(base.trim_end_matches('/').to_owned())
    }
}

impl AssetResolver for BasePath {
    fn resolve(&self, logical: &str) -> String {
        if logical.contains("://") || logical.starts_with("data:") {
            return logical.to_owned();
        }
        let path = logical.trim_start_matches('/');
        format!("{}/{}", self.0, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_keeps_root_relative_path() {
        assert_eq!(BasePath::default().resolve("/NBA_predict.png"), "/NBA_predict.png");
    }

    #[test]
    fn base_is_prefixed_once() {
        let base = BasePath::new("/portfolio/");
        assert_eq!(base.resolve("/turbine1.jpg"), "/portfolio/turbine1.jpg");
        assert_eq!(base.resolve("turbine1.jpg"), "/portfolio/turbine1.jpg");
    }

    #[test]
    fn absolute_urls_pass_through() {
        let base = BasePath::new("/portfolio");
        assert_eq!(
            base.resolve("https://cdn.example/a.png"),
            "https://cdn.example/a.png"
        );
    }
}

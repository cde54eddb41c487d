use crate::links::channel_href;

/// Per-request rendering context: the active channel and the current path
/// with the channel segment already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub channel: String,
    pub path: String,
}

impl RequestContext {
    /// Builds a context, normalising `path` to a leading slash and no
    /// trailing slash (except for the root).
    #[must_use]
    pub fn new(channel: impl Into<String>, path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        let path = if trimmed.is_empty() {
            "/".to_owned()
        } else if trimmed.starts_with('/') {
            trimmed.to_owned()
        } else {
            format!("/{trimmed}")
        };
        Self {
            channel: channel.into(),
            path,
        }
    }

    /// Channel-prefixed form of a channel-relative href.
    #[must_use]
    pub fn href(&self, href: &str) -> String {
        channel_href(&self.channel, href)
    }

    /// Whether a nav link pointing at `href` is the current page.
    #[must_use]
    pub fn is_active(&self, href: &str) -> bool {
        self.path == href
    }

    #[must_use]
    pub fn is_home(&self) -> bool {
        self.path == "/"
    }
}

//! Channel-scoped link building.
//!
//! Every internal href in the storefront is written channel-relative
//! (`/products`, `/categories/helmets`) and gets the active channel segment
//! prepended at render time. External URLs pass through untouched.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encodes one path segment (a slug or channel name).
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Returns `true` when `href` is not a channel-relative path.
#[must_use]
pub fn is_external(href: &str) -> bool {
    !href.starts_with('/')
}

/// Prefixes a channel-relative href with `/{channel}`.
///
/// `"/"` maps to the channel root without a trailing slash.
#[must_use]
pub fn channel_href(channel: &str, href: &str) -> String {
    if is_external(href) {
        return href.to_owned();
    }
    let channel = encode_segment(channel);
    if href == "/" {
        format!("/{channel}")
    } else {
        format!("/{channel}{href}")
    }
}

//! Supported wrap tag table with O(log n) lookup
//!
//! The table is closed: a wrap segment naming a tag outside of it is
//! unclassifiable.

use std::fmt;

/// Every tag name a wrap segment may use, sorted for binary search.
pub const SUPPORTED_TAGS: [&str; 114] = [
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
    "big", "blockquote", "body", "br", "button", "canvas", "caption", "center", "cite", "code",
    "col", "colgroup", "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div",
    "dl", "dt", "em", "embed", "fieldset", "figcaption", "figure", "footer", "form", "h1",
    "h2", "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html", "i", "iframe",
    "img", "input", "ins", "kbd", "keygen", "label", "legend", "li", "link", "main", "map",
    "mark", "menu", "menuitem", "meta", "meter", "nav", "noindex", "noscript", "object", "ol",
    "optgroup", "option", "output", "p", "param", "picture", "pre", "progress", "q", "rp",
    "rt", "ruby", "s", "samp", "script", "section", "select", "slot", "small", "source",
    "span", "strong", "style", "sub", "summary", "sup", "table", "tbody", "td", "template",
    "textarea", "tfoot", "th", "thead", "time", "title", "tr", "track", "u", "ul",
];

/// Elements that never carry children in serialized HTML.
const VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
    "source", "track",
];

/// A tag name known to belong to [`SUPPORTED_TAGS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(&'static str);

impl TagName {
    /// Look up a tag name, returning `None` when it is not supported
    #[inline]
    pub fn lookup(name: &str) -> Option<Self> {
        SUPPORTED_TAGS
            .binary_search_by(|probe| (*probe).cmp(name))
            .ok()
            .map(|idx| TagName(SUPPORTED_TAGS[idx]))
    }

    /// The link element used for anchor segments
    pub const fn anchor() -> Self {
        TagName("a")
    }

    /// Tag name as written in markup
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Whether HTML serialization must omit children and the closing tag
    pub fn is_void(&self) -> bool {
        is_void_tag(self.0)
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Check whether `name` is in the supported tag set
#[inline]
pub fn is_supported_tag(name: &str) -> bool {
    TagName::lookup(name).is_some()
}

pub(crate) fn is_void_tag(name: &str) -> bool {
    VOID_TAGS.contains(&name)
}

/// Iterate over the supported tag names in sorted order
pub fn supported_tags() -> impl Iterator<Item = TagName> {
    SUPPORTED_TAGS.iter().copied().map(TagName)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in SUPPORTED_TAGS.windows(2) {
            assert!(pair[0] < pair[1], "{} must sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(TagName::lookup("b").map(|t| t.as_str()), Some("b"));
        assert_eq!(TagName::lookup("template").map(|t| t.as_str()), Some("template"));
        assert!(TagName::lookup("ul").is_some());
        assert!(TagName::lookup("a").is_some());

        assert!(TagName::lookup("marquee").is_none());
        assert!(TagName::lookup("B").is_none());
        assert!(TagName::lookup("").is_none());
    }

    #[test]
    fn test_void_tags_are_supported() {
        for name in VOID_TAGS {
            let tag = TagName::lookup(name).unwrap();
            assert!(tag.is_void());
        }
        assert!(!TagName::lookup("span").unwrap().is_void());
    }

    #[test]
    fn test_supported_tags_iterator() {
        assert_eq!(supported_tags().count(), SUPPORTED_TAGS.len());
        assert_eq!(supported_tags().next(), Some(TagName::anchor()));
    }
}

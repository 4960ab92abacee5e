use phf::phf_set;

use crate::{ClosingType, DisplayType};

/// HTML void elements, which never have a closing tag
static VOID_TAGS: phf::Set<&'static str> = phf_set! {
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
};

/// HTML elements which are laid out inline by default
static INLINE_TAGS: phf::Set<&'static str> = phf_set! {
    "a", "abbr", "b", "bdi", "bdo", "br", "button", "cite", "code",
    "data", "dfn", "em", "i", "img", "input", "kbd", "label", "mark",
    "q", "s", "samp", "select", "small", "span", "strong", "sub",
    "sup", "textarea", "time", "u", "var", "wbr",
};

/// Checks whether `tag_name` is an HTML void element (case-insensitive)
pub fn is_void_tag(tag_name: &str) -> bool {
    lookup(&VOID_TAGS, tag_name)
}

/// Checks whether `tag_name` is an HTML element displayed inline by default (case-insensitive)
pub fn is_inline_tag(tag_name: &str) -> bool {
    lookup(&INLINE_TAGS, tag_name)
}

fn lookup(set: &phf::Set<&'static str>, tag_name: &str) -> bool {
    if tag_name.bytes().any(|b| b.is_ascii_uppercase()) {
        set.contains(tag_name.to_ascii_lowercase().as_str())
    } else {
        set.contains(tag_name)
    }
}

impl ClosingType {
    /// Default closing type for a tag: void elements are single tags
    pub fn for_tag(tag_name: &str) -> ClosingType {
        if is_void_tag(tag_name) {
            ClosingType::SingleTag
        } else {
            ClosingType::ClosingTag
        }
    }
}

impl DisplayType {
    /// Default display type for a tag
    pub fn for_tag(tag_name: &str) -> DisplayType {
        if is_inline_tag(tag_name) {
            DisplayType::Inline
        } else {
            DisplayType::Block
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_recognizes_void_tags() {
        assert!(is_void_tag("img"));
        assert!(is_void_tag("BR"));
        assert!(!is_void_tag("p"));
        assert!(!is_void_tag("custom-element"));
    }

    #[test]
    fn it_picks_defaults_by_tag() {
        assert_eq!(ClosingType::SingleTag, ClosingType::for_tag("hr"));
        assert_eq!(ClosingType::ClosingTag, ClosingType::for_tag("ul"));
        assert_eq!(DisplayType::Inline, DisplayType::for_tag("span"));
        assert_eq!(DisplayType::Block, DisplayType::for_tag("div"));
    }
}

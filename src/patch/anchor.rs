use regex::Regex;

use crate::error::Result;

/// Opening of the Kontakt menu item up to its id value.
const ITEM_OPEN: &str = r#"<li id="menu-item-"#;

/// Everything after the id value: the rest of the Kontakt item, any
/// whitespace, then the list's closing tag in its own group.
const ITEM_REST: &str = r#"" class="menu-item menu-item-type-post_type menu-item-object-page">\s*<a href="\.\./kontakt\.html">\s*<span>Kontakt</span>\s*</a>\s*</li>\s*)(</ul>)"#;

/// Wildcard over the per-page menu-item id.
const ANY_ID: &str = "[0-9]+";

/// Locates the "Kontakt" menu entry that closes a navigation list.
///
/// Group 1 captures the entry plus trailing whitespace, group 2 the `</ul>`.
/// Because the entry must be followed by nothing but whitespace before
/// `</ul>`, the pattern stops matching once anything has been spliced in.
#[derive(Debug, Clone)]
pub struct AnchorPattern {
    regex: Regex,
}

impl AnchorPattern {
    /// The Kontakt anchor with any menu-item id.
    pub fn kontakt() -> Result<Self> {
        Self::build(ANY_ID)
    }

    /// The Kontakt anchor restricted to a single menu-item id.
    #[cfg(test)]
    pub(crate) fn for_item(id: u32) -> Result<Self> {
        Self::build(&id.to_string())
    }

    fn build(id: &str) -> Result<Self> {
        let source = format!("(?s)({ITEM_OPEN}{id}{ITEM_REST}");
        Ok(Self {
            regex: Regex::new(&source)?,
        })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn count_matches(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

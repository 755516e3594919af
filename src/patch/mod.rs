//! Anchored insertion of the Fotogalerie menu entry.
//!
//! The document is never parsed as HTML. The anchor regex locates the
//! Kontakt entry that closes a navigation list and the fragment is spliced
//! between that entry and the list's `</ul>`.

pub mod anchor;
pub mod fragment;

use std::borrow::Cow;

use regex::Captures;

pub use anchor::AnchorPattern;
pub use fragment::Fragment;

/// Outcome of running the inserter over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult<'a> {
    pub text: Cow<'a, str>,
    pub changed: bool,
}

impl EditResult<'_> {
    pub fn into_text(self) -> String {
        self.text.into_owned()
    }
}

/// Insert `fragment` before the closing tag of every anchor match.
///
/// When nothing matches, or the rewrite produces identical text, the input is
/// returned borrowed and `changed` is false. Captured text is copied verbatim
/// and the fragment is inserted literally.
pub fn insert_fragment<'a>(
    document: &'a str,
    pattern: &AnchorPattern,
    fragment: &Fragment,
) -> EditResult<'a> {
    let markup = fragment.as_str();
    let rewritten = pattern.regex().replace_all(document, |caps: &Captures| {
        let mut out = String::with_capacity(caps[0].len() + markup.len());
        out.push_str(&caps[1]);
        out.push_str(markup);
        out.push_str(&caps[2]);
        out
    });

    match rewritten {
        Cow::Owned(text) if text != document => EditResult {
            text: Cow::Owned(text),
            changed: true,
        },
        _ => EditResult {
            text: Cow::Borrowed(document),
            changed: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR_BLOCK: &str = r#"<li id="menu-item-13613" class="menu-item menu-item-type-post_type menu-item-object-page">
                    <a href="../kontakt.html">
                      <span>Kontakt</span>
                    </a>
                  </li>
                "#;

    fn nav(anchor: &str) -> String {
        format!(
            "<nav>\n  <ul class=\"menu\">\n    <li><a href=\"../index.html\">Úvod</a></li>\n    {anchor}</ul>\n</nav>\n"
        )
    }

    fn run(text: &str) -> EditResult<'_> {
        let pattern = AnchorPattern::kontakt().unwrap();
        insert_fragment(text, &pattern, &Fragment::fotogalerie())
    }

    #[test]
    fn test_exact_splice() {
        let doc = format!("{ANCHOR_BLOCK}</ul>");
        let result = run(&doc);
        assert!(result.changed);
        let expected = format!("{ANCHOR_BLOCK}{}</ul>", Fragment::fotogalerie().as_str());
        assert_eq!(result.text, expected);
    }

    #[test]
    fn test_exact_splice_preserves_irregular_whitespace() {
        let anchor = "<li id=\"menu-item-7\" class=\"menu-item menu-item-type-post_type menu-item-object-page\"><a href=\"../kontakt.html\">\r\n\t<span>Kontakt</span></a>\n\n\t</li> \t\n";
        let doc = format!("{anchor}</ul>");
        let result = run(&doc);
        assert!(result.changed);
        assert_eq!(
            result.text,
            format!("{anchor}{}</ul>", Fragment::fotogalerie().as_str())
        );
    }

    #[test]
    fn test_second_run_is_noop() {
        let doc = nav(ANCHOR_BLOCK);
        let first = run(&doc).into_text();
        let second = run(&first);
        assert!(!second.changed);
        assert_eq!(second.text, first);
        assert_eq!(first.matches("Fotogalerie").count(), 1);
    }

    #[test]
    fn test_absent_anchor_is_noop() {
        let doc = "<ul>\n  <li><a href=\"../kontakt.html\"><span>Kontakt</span></a></li>\n</ul>";
        let result = run(doc);
        assert!(!result.changed);
        assert!(matches!(result.text, Cow::Borrowed(_)));
        assert_eq!(result.text, doc);
    }

    #[test]
    fn test_empty_document_is_noop() {
        let result = run("");
        assert!(!result.changed);
        assert_eq!(result.text, "");
    }

    #[test]
    fn test_any_menu_item_id() {
        let a = nav(ANCHOR_BLOCK);
        let b = nav(&ANCHOR_BLOCK.replace("13613", "20001"));
        assert!(run(&a).changed);
        assert!(run(&b).changed);
    }

    #[test]
    fn test_every_occurrence_is_rewritten() {
        let doc = format!("{}\n<footer>\n{}</footer>", nav(ANCHOR_BLOCK), nav(ANCHOR_BLOCK));
        let result = run(&doc);
        assert!(result.changed);
        assert_eq!(result.text.matches("<span>Fotogalerie</span>").count(), 2);
        assert!(!run(&result.text).changed);
    }

    #[test]
    fn test_entry_followed_by_other_markup_is_left_alone() {
        // Anything but whitespace between Kontakt and </ul> breaks the anchor.
        let doc = format!(
            "{ANCHOR_BLOCK}{}<li>Other</li>\n</ul>",
            Fragment::fotogalerie().as_str()
        );
        let result = run(&doc);
        assert!(!result.changed);
    }

    #[test]
    fn test_exact_id_pattern_skips_other_pages() {
        let pattern = AnchorPattern::for_item(13613).unwrap();
        let doc = nav(&ANCHOR_BLOCK.replace("13613", "20001"));
        let result = insert_fragment(&doc, &pattern, &Fragment::fotogalerie());
        assert!(!result.changed);
    }
}

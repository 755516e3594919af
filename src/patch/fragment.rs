/// The Fotogalerie menu entry. Indentation matches the surrounding menu so the
/// closing `</ul>` keeps its column after the splice.
const FOTOGALERIE: &str = r#"                  <li id="menu-item-20758" class="menu-item menu-item-type-custom">
                    <a target="_blank" href="https://eu.zonerama.com/Fcbizoni/1419417">
                      <span>Fotogalerie</span>
                    </a>
                  </li>
                "#;

/// Menu-item id carried by the inserted entry.
const FOTOGALERIE_ITEM_ID: &str = r#"id="menu-item-20758""#;

/// A literal block of markup spliced in after the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    markup: &'static str,
    marker: &'static str,
}

impl Fragment {
    /// The "Fotogalerie" navigation entry linking to the external gallery.
    pub fn fotogalerie() -> Self {
        Self {
            markup: FOTOGALERIE,
            marker: FOTOGALERIE_ITEM_ID,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.markup
    }

    /// Whether the entry already appears anywhere in `text`, regardless of
    /// where. Only used for diagnostics; the splice itself relies on the anchor.
    pub fn is_present_in(&self, text: &str) -> bool {
        text.contains(self.marker)
    }
}

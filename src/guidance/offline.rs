//! Static guidance table used in offline mode.

use crate::data::report::{Category, Guidance};
use crate::guidance::DEFAULT_BASE_URL;

/// Offline guidance backing: a fixed per-category table of guidance
/// text and links. Resolution never fails and never blocks.
#[derive(Debug, Clone, Default)]
pub struct StaticGuide;

impl StaticGuide {
    /// Creates the static guide.
    pub fn new() -> Self {
        Self
    }

    /// Returns the fixed guidance entry for `category`.
    pub fn resolve(&self, category: Category) -> Guidance {
        Guidance {
            text: guideline_text(category).to_string(),
            link: category_link(category),
        }
    }
}

/// Link to the style-guide page covering `category`.
pub fn category_link(category: Category) -> String {
    format!("{DEFAULT_BASE_URL}/{}", category_page(category))
}

/// Page path for `category` under the style-guide base URL.
pub fn category_page(category: Category) -> &'static str {
    match category {
        Category::VoiceTone => "brand-voice-above-all-simple-human",
        Category::Grammar => "global-communications/writing-tips",
        Category::Terminology => "a-z-word-list-term-collections",
        Category::Accessibility => "bias-free-communication",
    }
}

/// Builtin guideline text for `category`.
pub fn guideline_text(category: Category) -> &'static str {
    match category {
        Category::VoiceTone => {
            "Warm and relaxed: use contractions (it's, you're, we'll) and write like \
             you speak. Crisp and clear: be direct and scannable, and keep sentences \
             under 25 words. Ready to help: use action-oriented language and address \
             readers as 'you'."
        }
        Category::Grammar => {
            "Use active voice for clarity and engagement. Keep sentences short and \
             parallel. Use the imperative mood for instructions (Click, Choose, \
             Select)."
        }
        Category::Terminology => {
            "Use 'email' (one word), 'website' (one word), 'AI' (no periods), \
             'Wi-Fi' (hyphenated, both caps), 'sign in' as the verb and 'sign-in' \
             as the noun, and 'set up' as the verb with 'setup' as the noun."
        }
        Category::Accessibility => {
            "Use bias-free language: 'everyone' instead of 'guys', 'allow list' \
             instead of 'whitelist', 'primary/secondary' instead of 'master/slave'. \
             Put people first ('people with disabilities') and avoid gendered \
             pronouns in generic references."
        }
    }
}

//! Page reactions on scoreboard messages.

/// Keycap emojis 1 to 10; the emoji at index `i` selects page `i + 1`.
pub const PAGE_EMOJIS: [&str; 10] = [
    "1\u{fe0f}\u{20e3}",
    "2\u{fe0f}\u{20e3}",
    "3\u{fe0f}\u{20e3}",
    "4\u{fe0f}\u{20e3}",
    "5\u{fe0f}\u{20e3}",
    "6\u{fe0f}\u{20e3}",
    "7\u{fe0f}\u{20e3}",
    "8\u{fe0f}\u{20e3}",
    "9\u{fe0f}\u{20e3}",
    "\u{1f51f}",
];

/// Page selected by a reaction emoji.
pub fn page_for_emoji(emoji: &str) -> Option<usize> {
    PAGE_EMOJIS
        .iter()
        .position(|page_emoji| *page_emoji == emoji)
        .map(|index| index + 1)
}

/// Reactions to add to and remove from a scoreboard message.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReactionPlan {
    pub add: Vec<&'static str>,
    pub remove: Vec<&'static str>,
}

impl ReactionPlan {
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// Works out which page emojis a message needs after a render.
///
/// Every page that exists gets its emoji; emojis of pages past `total_pages` are
/// removed. Pages beyond the tenth have no emoji.
///
/// # Arguments
/// - `total_pages` - Number of pages the leaderboard has
/// - `present` - Emojis currently reacted on the message
///
/// # Returns
/// - `ReactionPlan` - Emojis to add and to remove, in page order
pub fn plan_reactions(total_pages: usize, present: &[String]) -> ReactionPlan {
    let mut plan = ReactionPlan::default();

    for (index, emoji) in PAGE_EMOJIS.iter().enumerate() {
        let exists = index + 1 <= total_pages;
        let reacted = present.iter().any(|reaction| reaction == emoji);

        if exists && !reacted {
            plan.add.push(emoji);
        } else if !exists && reacted {
            plan.remove.push(emoji);
        }
    }

    plan
}

//! Feed card selection and expansion.

use bubbletea_rs::Cmd;

use super::DashboardApp;
use crate::dashboard::FeedCard;
use crate::tui::messages::AppMsg;

impl DashboardApp {
    /// Dispatches feed navigation messages to their handlers.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    pub(super) fn handle_feed_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.selected = self.selected.saturating_sub(1),
            AppMsg::CursorDown => {
                let last = self.feed_cards().len().saturating_sub(1);
                self.selected = self.selected.saturating_add(1).min(last);
            }
            AppMsg::ToggleExpand => self.toggle_expand(),
            _ => {
                debug_assert!(false, "non-feed message routed to handle_feed_msg");
            }
        }
        None
    }

    /// Cards of the shown projection; empty before the first scan.
    pub(crate) fn feed_cards(&self) -> &[FeedCard] {
        self.dashboard
            .projection()
            .and_then(|projection| projection.feed.ready())
            .map_or(&[], |feed| feed.cards())
    }

    /// Returns the selected card, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<&FeedCard> {
        self.feed_cards().get(self.selected)
    }

    /// Expands or collapses the selected card. Cards whose text fits the
    /// preview have nothing to expand.
    fn toggle_expand(&mut self) {
        let Some(card) = self.selected_card() else {
            return;
        };
        if !card.truncated {
            return;
        }
        let index = card.index;
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }
}

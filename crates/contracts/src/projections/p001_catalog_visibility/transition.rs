//! Two-phase fade of a single card.
//!
//! Hiding fades the card out at once and drops it from layout after a delay;
//! showing puts it back into layout at once and fades it in after a delay.
//! Each started transition bumps a generation counter, and the deferred
//! completion only lands if its ticket still carries the current generation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    Visible,
    /// In layout, still transparent
    Showing,
    /// Transparent, still in layout
    Hiding,
    Hidden,
}

impl CardPhase {
    pub fn style(&self) -> &'static str {
        match self {
            CardPhase::Visible => "display: flex; opacity: 1; transform: translateY(0);",
            CardPhase::Showing | CardPhase::Hiding => {
                "display: flex; opacity: 0; transform: translateY(20px);"
            }
            CardPhase::Hidden => "display: none; opacity: 0; transform: translateY(20px);",
        }
    }
}

/// Handle for a pending completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTicket {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardVisibility {
    phase: CardPhase,
    generation: u64,
}

impl Default for CardVisibility {
    fn default() -> Self {
        Self {
            phase: CardPhase::Visible,
            generation: 0,
        }
    }
}

impl CardVisibility {
    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    /// Start showing. `None` if the card is already visible or on its way.
    pub fn show(&mut self) -> Option<PhaseTicket> {
        match self.phase {
            CardPhase::Visible | CardPhase::Showing => None,
            CardPhase::Hiding | CardPhase::Hidden => Some(self.enter(CardPhase::Showing)),
        }
    }

    /// Start hiding. `None` if the card is already hidden or on its way.
    pub fn hide(&mut self) -> Option<PhaseTicket> {
        match self.phase {
            CardPhase::Hidden | CardPhase::Hiding => None,
            CardPhase::Visible | CardPhase::Showing => Some(self.enter(CardPhase::Hiding)),
        }
    }

    pub fn set_target(&mut self, visible: bool) -> Option<PhaseTicket> {
        if visible {
            self.show()
        } else {
            self.hide()
        }
    }

    /// Finish the transition `ticket` was issued for. Stale tickets are ignored.
    pub fn complete(&mut self, ticket: PhaseTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match self.phase {
            CardPhase::Showing => self.phase = CardPhase::Visible,
            CardPhase::Hiding => self.phase = CardPhase::Hidden,
            CardPhase::Visible | CardPhase::Hidden => return false,
        }
        true
    }

    fn enter(&mut self, phase: CardPhase) -> PhaseTicket {
        self.phase = phase;
        self.generation += 1;
        PhaseTicket {
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_then_complete() {
        let mut v = CardVisibility::default();
        let ticket = v.hide().unwrap();
        assert_eq!(v.phase(), CardPhase::Hiding);
        assert!(v.phase().style().starts_with("display: flex"));
        assert_eq!(v.phase().style(), CardPhase::Showing.style());

        assert!(v.complete(ticket));
        assert_eq!(v.phase(), CardPhase::Hidden);
        assert!(v.phase().style().starts_with("display: none"));
    }

    #[test]
    fn test_show_cancels_pending_hide() {
        let mut v = CardVisibility::default();
        let hide_ticket = v.hide().unwrap();
        let show_ticket = v.show().unwrap();

        assert!(!v.complete(hide_ticket));
        assert_eq!(v.phase(), CardPhase::Showing);
        assert!(v.complete(show_ticket));
        assert_eq!(v.phase(), CardPhase::Visible);
    }

    #[test]
    fn test_hide_cancels_pending_show() {
        let mut v = CardVisibility::default();
        let t = v.hide().unwrap();
        v.complete(t);
        let show_ticket = v.show().unwrap();
        let hide_ticket = v.hide().unwrap();

        assert!(!v.complete(show_ticket));
        assert_eq!(v.phase(), CardPhase::Hiding);
        assert!(v.complete(hide_ticket));
        assert_eq!(v.phase(), CardPhase::Hidden);
    }

    #[test]
    fn test_repeated_requests_are_noops() {
        let mut v = CardVisibility::default();
        assert!(v.show().is_none());
        let ticket = v.hide().unwrap();
        assert!(v.hide().is_none());
        assert!(v.complete(ticket));
        assert!(v.hide().is_none());
        assert!(!v.complete(ticket));
    }

    #[test]
    fn test_styles() {
        assert!(CardPhase::Hidden.style().starts_with("display: none"));
        assert!(CardPhase::Visible.style().contains("opacity: 1"));
    }
}

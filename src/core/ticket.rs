//! Kooperative Abbruch-Tickets für laufende Animationssequenzen.
//!
//! Ein Ticket wird pro Reveal-Sequenz ausgestellt und von allen
//! Fortsetzungen der Sequenz geteilt. Abbruch ist kooperativ: bereits
//! geplante Arbeit läuft bis zum nächsten Prüfpunkt weiter.

use std::cell::Cell;
use std::rc::Rc;

/// Geteiltes Abbruch-Flag einer Animationssequenz.
///
/// Klone teilen denselben Zustand; `cancel()` ist idempotent.
#[derive(Debug, Clone, Default)]
pub struct Ticket {
    cancelled: Rc<Cell<bool>>,
}

impl Ticket {
    /// Erstellt ein frisches, nicht abgebrochenes Ticket.
    pub fn new() -> Self {
        Self {
            cancelled: Rc::new(Cell::new(false)),
        }
    }

    /// Markiert das Ticket als abgebrochen.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Gibt `true` zurück, wenn das Ticket abgebrochen wurde.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Single-Slot-Register: genau ein Ticket ist zu jedem Zeitpunkt "aktuell".
///
/// `issue()` ersetzt das vorherige Ticket und bricht es dabei ab — Ersetzen
/// und Abbrechen sind eine einzige Operation, damit nie zwei Sequenzen
/// gleichzeitig als gültig gelten.
#[derive(Debug, Default)]
pub struct TicketSlot {
    current: Option<Ticket>,
}

impl TicketSlot {
    /// Erstellt einen leeren Slot ohne aktuelles Ticket.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Stellt ein frisches Ticket aus und widerruft das vorherige.
    pub fn issue(&mut self) -> Ticket {
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }

        let ticket = Ticket::new();
        self.current = Some(ticket.clone());
        ticket
    }

    /// Widerruft das aktuelle Ticket, ohne ein neues auszustellen.
    pub fn cancel_current(&mut self) {
        if let Some(current) = self.current.take() {
            current.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ticket_is_not_cancelled() {
        let ticket = Ticket::new();
        assert!(!ticket.is_cancelled());
    }

    #[test]
    fn cancel_is_visible_through_clones() {
        let ticket = Ticket::new();
        let shared = ticket.clone();

        ticket.cancel();

        assert!(shared.is_cancelled());
    }

    #[test]
    fn cancel_is_idempotent() {
        let ticket = Ticket::new();
        ticket.cancel();
        ticket.cancel();
        assert!(ticket.is_cancelled());
    }

    #[test]
    fn issue_cancels_previous_ticket() {
        let mut slot = TicketSlot::new();
        let first = slot.issue();
        assert!(!first.is_cancelled());

        let second = slot.issue();

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
    }

    #[test]
    fn cancel_current_revokes_without_replacement() {
        let mut slot = TicketSlot::new();
        let ticket = slot.issue();

        slot.cancel_current();

        assert!(ticket.is_cancelled());
        // Nach dem Widerruf darf ein neues Ticket unbeeinflusst sein
        let fresh = slot.issue();
        assert!(!fresh.is_cancelled());
    }

    #[test]
    fn cancel_current_on_empty_slot_is_noop() {
        let mut slot = TicketSlot::new();
        slot.cancel_current();
    }
}

//! Warteschlange für Fortsetzungen, die auf das Ende einer
//! programmatischen Viewport-Änderung warten.
//!
//! Solange eine Änderung läuft, werden Fortsetzungen gepuffert und beim
//! Settle-Signal genau einmal in FIFO-Reihenfolge ausgeliefert.

/// Puffert Fortsetzungen während einer laufenden Viewport-Änderung.
#[derive(Debug)]
pub struct SettleQueue<T> {
    changing: bool,
    pending: Vec<T>,
}

impl<T> Default for SettleQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SettleQueue<T> {
    /// Erstellt eine leere Queue ohne laufende Änderung.
    pub fn new() -> Self {
        Self {
            changing: false,
            pending: Vec::new(),
        }
    }

    /// Gibt `true` zurück, solange eine Viewport-Änderung läuft.
    pub fn is_changing(&self) -> bool {
        self.changing
    }

    /// Markiert den Beginn einer programmatischen Viewport-Änderung.
    pub fn begin_change(&mut self) {
        self.changing = true;
    }

    /// Beendet die Änderung und liefert alle gepufferten Fortsetzungen
    /// in Einreihungs-Reihenfolge. Ohne laufende Änderung ein No-op
    /// (liefert eine leere Liste, der Puffer bleibt unberührt).
    #[must_use]
    pub fn finish_change(&mut self) -> Vec<T> {
        if !self.changing {
            return Vec::new();
        }

        self.changing = false;
        std::mem::take(&mut self.pending)
    }

    /// Reiht eine Fortsetzung ein, die erst nach dem Settle-Signal läuft.
    pub fn defer(&mut self, continuation: T) {
        self.pending.push(continuation);
    }

    /// Anzahl der aktuell gepufferten Fortsetzungen.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

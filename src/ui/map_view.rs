//! Karten-View: Marker-Verwaltung, Overlay und Reveal-Sequenz.
//!
//! `MapView` implementiert den [`MapViewable`]-Contract und orchestriert
//! die Reveal-Sequenz: Ticket ausstellen, Kamera-Fahrt mit Settle-Signal,
//! Overlay-Staging, zurückgestelltes Zeichnen des Pfads. `tick()` ist die
//! einzige Stelle, an der Animationen fortschreiten — ein kooperativer,
//! single-threaded Event-Loop ohne Locks.

use glam::Vec2;

use crate::app::{HideCompletion, MapViewable, MarkerId, MarkerItem, RouteDecoration};
use crate::core::{Camera2D, SettleQueue, Ticket, TicketSlot};
use crate::shared::options::{
    CAMERA_SCROLL_SECS, OVERLAY_FADE_IN_SECS, OVERLAY_FADE_OUT_SECS, SCROLL_PADDING_PX,
};
use crate::ui::annotations::AnnotationRegistry;
use crate::ui::decoration::PathRevealAnimator;

/// Fortsetzung, die nach dem Settle-Signal auf der View läuft.
type DeferredDraw = Box<dyn FnOnce(&mut MapView)>;

/// Laufende Overlay-Animation mit Abschluss-Verhalten.
///
/// Es gibt höchstens eine Transition zugleich; eine neue ersetzt die alte.
/// Eine ersetzte Staging-Animation gilt als nicht beendet (kein Zeichnen),
/// eine ersetzte Hide-Animation feuert ihre Completion mit `finished = false`.
enum Transition {
    /// Einblenden des Overlays, danach der zurückgestellte Zeichen-Schritt.
    Staging {
        ticket: Ticket,
        decoration: RouteDecoration,
        from_alpha: f32,
        elapsed: f32,
    },
    /// Ausblenden des Overlays mit Presenter-Callback.
    Hiding {
        completion: HideCompletion,
        from_alpha: f32,
        elapsed: f32,
    },
}

/// Programmatische Kamera-Fahrt auf die Scroll-Ziele.
struct CameraScroll {
    from_position: Vec2,
    to_position: Vec2,
    from_zoom: f32,
    to_zoom: f32,
    elapsed: f32,
}

/// Headless Karten-View mit Markern, Overlay und Routen-Pfad.
pub struct MapView {
    camera: Camera2D,
    viewport_size: [f32; 2],
    annotations: AnnotationRegistry,
    overlay_alpha: f32,
    interaction_enabled: bool,
    ticket_slot: TicketSlot,
    settle: SettleQueue<DeferredDraw>,
    transition: Option<Transition>,
    scroll: Option<CameraScroll>,
    path: Option<PathRevealAnimator>,
}

impl MapView {
    /// Erstellt eine View mit gegebener Viewport-Größe in Pixeln.
    pub fn new(viewport_size: [f32; 2]) -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size,
            annotations: AnnotationRegistry::new(),
            overlay_alpha: 0.0,
            interaction_enabled: true,
            ticket_slot: TicketSlot::new(),
            settle: SettleQueue::new(),
            transition: None,
            scroll: None,
            path: None,
        }
    }

    /// Aktualisiert die Viewport-Größe und richtet alle Marker neu aus.
    pub fn set_viewport_size(&mut self, size: [f32; 2]) {
        self.viewport_size = size;
        self.annotations.layout(&self.camera, self.viewport_size);
    }

    /// Treibt alle laufenden Animationen um `dt_secs` weiter.
    ///
    /// Reihenfolge pro Frame: Kamera-Fahrt (inkl. Settle-Signal und Abarbeiten
    /// der zurückgestellten Fortsetzungen), Overlay-Transition (inkl.
    /// Abschluss-Verhalten), Pfad-Animation.
    pub fn tick(&mut self, dt_secs: f32) {
        self.advance_scroll(dt_secs);
        self.advance_transition(dt_secs);

        if let Some(path) = self.path.as_mut() {
            path.tick(dt_secs);
        }
    }

    fn advance_scroll(&mut self, dt_secs: f32) {
        let Some(scroll) = self.scroll.as_mut() else {
            return;
        };

        scroll.elapsed += dt_secs;
        let t = (scroll.elapsed / CAMERA_SCROLL_SECS).min(1.0);
        self.camera.position = scroll.from_position.lerp(scroll.to_position, t);
        self.camera.zoom = scroll.from_zoom + (scroll.to_zoom - scroll.from_zoom) * t;
        let done = t >= 1.0;

        // Sichtbarer Bereich hat sich geändert → Marker neu ausrichten
        self.annotations.layout(&self.camera, self.viewport_size);

        if done {
            self.scroll = None;
            log::debug!("Kamera-Fahrt abgeschlossen, Settle-Signal");
            for continuation in self.settle.finish_change() {
                continuation(self);
            }
        }
    }

    fn advance_transition(&mut self, dt_secs: f32) {
        let finished = match self.transition.as_mut() {
            Some(Transition::Staging {
                elapsed,
                from_alpha,
                ..
            }) => {
                *elapsed += dt_secs;
                let t = (*elapsed / OVERLAY_FADE_IN_SECS).min(1.0);
                self.overlay_alpha = *from_alpha + (1.0 - *from_alpha) * t;
                t >= 1.0
            }
            Some(Transition::Hiding {
                elapsed,
                from_alpha,
                ..
            }) => {
                *elapsed += dt_secs;
                let t = (*elapsed / OVERLAY_FADE_OUT_SECS).min(1.0);
                self.overlay_alpha = *from_alpha * (1.0 - t);
                t >= 1.0
            }
            None => false,
        };

        if !finished {
            return;
        }

        match self.transition.take() {
            Some(Transition::Staging {
                ticket, decoration, ..
            }) => {
                // Prüfpunkt: abgebrochene Sequenzen zeichnen nicht mehr
                if !ticket.is_cancelled() {
                    self.schedule_draw(decoration, ticket);
                }
            }
            Some(Transition::Hiding { completion, .. }) => {
                completion(self, true);
            }
            None => {}
        }
    }

    /// Führt den Zeichen-Schritt aus oder stellt ihn bis zum Settle-Signal
    /// zurück, falls der Viewport noch in Bewegung ist.
    fn schedule_draw(&mut self, decoration: RouteDecoration, ticket: Ticket) {
        if self.settle.is_changing() {
            log::debug!("Viewport in Bewegung — Zeichnen bis zum Settle-Signal zurückgestellt");
            self.settle.defer(Box::new(move |view: &mut MapView| {
                if !ticket.is_cancelled() {
                    view.draw_route(decoration);
                }
            }));
        } else if !ticket.is_cancelled() {
            self.draw_route(decoration);
        }
    }

    fn draw_route(&mut self, decoration: RouteDecoration) {
        let screen_size = Vec2::new(self.viewport_size[0], self.viewport_size[1]);
        let start = self
            .camera
            .world_to_screen(decoration.start_coordinate, screen_size);
        let end = self
            .camera
            .world_to_screen(decoration.end_coordinate, screen_size);

        log::info!(
            "Routen-Pfad wird gezeichnet: ({:.0}, {:.0}) → ({:.0}, {:.0})",
            start.x,
            start.y,
            end.x,
            end.y
        );
        self.path = Some(PathRevealAnimator::new(start, end));
    }

    /// Startet die Kamera-Fahrt, die alle Scroll-Ziele einrahmt, und
    /// markiert den Viewport als "in Bewegung".
    fn scroll_to_markers(&mut self, ids: &[MarkerId]) {
        let Some((min, max)) = self.annotations.world_bounds(ids) else {
            return;
        };

        let screen_size = Vec2::new(self.viewport_size[0], self.viewport_size[1]);
        let (position, zoom) = Camera2D::frame_bounds(min, max, screen_size, SCROLL_PADDING_PX);

        self.settle.begin_change();
        self.scroll = Some(CameraScroll {
            from_position: self.camera.position,
            to_position: position,
            from_zoom: self.camera.zoom,
            to_zoom: zoom,
            elapsed: 0.0,
        });
    }

    /// Ersetzt die laufende Transition. Die ersetzte Transition gilt als
    /// nicht beendet; eine Hide-Completion feuert dabei mit `finished = false`.
    fn begin_transition(&mut self, next: Transition) {
        if let Some(previous) = self.transition.replace(next) {
            match previous {
                Transition::Staging { .. } => {}
                Transition::Hiding { completion, .. } => completion(self, false),
            }
        }
    }

    /// Aktuelle Kamera (Projektion Welt ↔ Screen).
    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    /// Aktuelle Viewport-Größe in Pixeln.
    pub fn viewport_size(&self) -> [f32; 2] {
        self.viewport_size
    }

    /// Registrierte Marker.
    pub fn annotations(&self) -> &AnnotationRegistry {
        &self.annotations
    }

    /// Deckkraft des Abdunkel-Overlays (0.0 = aus, 1.0 = voll).
    pub fn overlay_alpha(&self) -> f32 {
        self.overlay_alpha
    }

    /// Gibt `true` zurück, wenn Karten-Gesten aktuell erlaubt sind.
    pub fn is_interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    /// Gibt `true` zurück, solange eine programmatische Kamera-Fahrt läuft.
    pub fn is_viewport_changing(&self) -> bool {
        self.settle.is_changing()
    }

    /// Anzahl der auf das Settle-Signal wartenden Zeichen-Schritte.
    pub fn pending_draw_count(&self) -> usize {
        self.settle.pending_len()
    }

    /// Aktuell gezeichneter Routen-Pfad, falls vorhanden.
    pub fn drawn_path(&self) -> Option<&PathRevealAnimator> {
        self.path.as_ref()
    }
}

impl MapViewable for MapView {
    fn add_item(&mut self, item: MarkerItem, id: MarkerId) {
        self.annotations.upsert(id, item.coordinate, item.color);
        self.annotations.layout(&self.camera, self.viewport_size);
    }

    fn remove_item(&mut self, id: MarkerId) {
        if self.annotations.remove(id) {
            log::debug!("Marker {} entfernt", id);
        }
    }

    fn show_decoration(&mut self, decoration: RouteDecoration, scroll_target_ids: &[MarkerId]) {
        assert!(
            !scroll_target_ids.is_empty(),
            "Reveal ohne Scroll-Ziele ist sinnlos"
        );
        assert!(
            decoration.start_coordinate != decoration.end_coordinate,
            "Dekoration benötigt zwei verschiedene Koordinaten"
        );

        log::info!("Reveal-Sequenz startet ({} Scroll-Ziele)", scroll_target_ids.len());

        // Neues Ticket widerruft eine eventuell laufende Sequenz
        let ticket = self.ticket_slot.issue();

        // Alten Pfad ohne Animation entfernen, dann Kamera-Fahrt + Staging
        self.path = None;
        self.scroll_to_markers(scroll_target_ids);
        self.begin_transition(Transition::Staging {
            ticket,
            decoration,
            from_alpha: self.overlay_alpha,
            elapsed: 0.0,
        });
    }

    fn hide_decoration(&mut self, completion: HideCompletion) {
        log::info!("Dekoration wird ausgeblendet");

        // Zuerst die laufende Sequenz widerrufen, dann ausblenden
        self.ticket_slot.cancel_current();
        self.path = None;
        self.begin_transition(Transition::Hiding {
            completion,
            from_alpha: self.overlay_alpha,
            elapsed: 0.0,
        });
    }

    fn enable_map_interaction(&mut self) {
        self.interaction_enabled = true;
        log::debug!("Karten-Gesten freigegeben");
    }

    fn disable_map_interaction(&mut self) {
        self.interaction_enabled = false;
        log::debug!("Karten-Gesten blockiert");
    }
}

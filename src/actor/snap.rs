//! Edge snapping for dragged windows.
//!
//! The host forwards each tracked window's drag notifications as [`Event`]s.
//! "Moved" recomputes the preview and redraws guides; "move ended" turns the
//! preview into a [`Commit`] the host applies to the window.

use tracing::{debug, debug_span, trace};

use crate::common::collections::HashSet;
use crate::common::config::SnapSettings;
use crate::model::geometry::Axis;
use crate::model::preview::PreviewState;
use crate::model::server::PreviewData;
use crate::model::window::{Scene, WindowId, WindowSnapshot};
use crate::snap_engine::{self, Commit, Selection};
use crate::ui::guide::{GuideSink, GuideStyle, Guides};

#[derive(Debug, Clone)]
pub enum Event {
    /// One drag frame. The scene holds the live geometry of every window,
    /// the dragged one included.
    Moved(WindowId, Scene),
    /// The drag finished; carries the dragged window as it is now.
    MoveEnded(WindowSnapshot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Active,
    Disabled,
}

pub struct Snapper<S> {
    settings: SnapSettings,
    lifecycle: Lifecycle,
    tracked: HashSet<WindowId>,
    preview: PreviewState,
    guides: Guides<S>,
}

impl<S: GuideSink> Snapper<S> {
    pub fn new(settings: SnapSettings, sink: S) -> Self {
        let settings = settings.normalized();
        let style = GuideStyle::from(&settings);
        Snapper {
            settings,
            lifecycle: Lifecycle::Active,
            tracked: HashSet::default(),
            preview: PreviewState::default(),
            guides: Guides::new(sink, style),
        }
    }

    pub fn settings(&self) -> &SnapSettings { &self.settings }

    pub fn lifecycle(&self) -> Lifecycle { self.lifecycle }

    pub fn preview(&self) -> &PreviewState { &self.preview }

    pub fn sink(&self) -> &S { self.guides.sink() }

    pub fn preview_data(&self) -> PreviewData {
        PreviewData {
            active: self.lifecycle == Lifecycle::Active,
            color: self.settings.color,
            preview: self.preview.clone(),
        }
    }

    pub fn is_tracked(&self, window: WindowId) -> bool { self.tracked.contains(&window) }

    /// Start reacting to `window`'s drag notifications.
    pub fn attach(&mut self, window: WindowId) {
        if self.lifecycle == Lifecycle::Disabled {
            return;
        }
        if self.tracked.insert(window) {
            debug!(?window, "Tracking window for snapping");
        }
    }

    pub fn detach(&mut self, window: WindowId) {
        if self.tracked.remove(&window) && self.preview.is_owned_by(window) {
            self.clear_preview();
        }
    }

    /// Release the guides and ignore everything from now on. Idempotent.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::Disabled {
            return;
        }
        debug!("Tearing down snapper");
        self.lifecycle = Lifecycle::Disabled;
        self.preview.clear();
        self.tracked.clear();
        self.guides.release();
    }

    pub fn handle_event(&mut self, event: Event) -> Commit {
        let span = debug_span!("snap::handle_event");
        let _guard = span.enter();
        match event {
            Event::Moved(window, scene) => {
                self.window_moved(window, &scene);
                Commit::default()
            }
            Event::MoveEnded(window) => self.window_move_ended(&window),
        }
    }

    pub fn window_moved(&mut self, window: WindowId, scene: &Scene) {
        if self.lifecycle == Lifecycle::Disabled || !self.is_tracked(window) {
            trace!(?window, "Ignoring move");
            return;
        }
        let Some(mover) = scene.window(window) else {
            trace!(?window, "Moved window missing from scene");
            self.drop_preview_of(window);
            return;
        };
        if mover.no_snap {
            trace!(?window, "Ignoring unsnappable mover");
            self.drop_preview_of(window);
            return;
        }

        let screen = self.settings.snaps_to_screen().then_some(&scene.screen);
        let candidates = if self.settings.snaps_to_windows() {
            snap_engine::generate(
                &mover.frame,
                screen,
                scene.siblings_of(window),
                self.settings.snap_distance,
            )
        } else {
            snap_engine::generate(&mover.frame, screen, [], self.settings.snap_distance)
        };
        let selection = snap_engine::select(&candidates);
        self.show_preview(window, &selection);
    }

    fn show_preview(&mut self, window: WindowId, selection: &Selection) {
        self.guides.update(Axis::Horizontal, selection.horizontal.as_ref());
        self.guides.update(Axis::Vertical, selection.vertical.as_ref());
        self.preview = PreviewState::from_selection(window, selection);
    }

    pub fn window_move_ended(&mut self, window: &WindowSnapshot) -> Commit {
        if self.lifecycle == Lifecycle::Disabled || !self.is_tracked(window.id) || window.no_snap
        {
            trace!(window = ?window.id, "Ignoring move end");
            return Commit::default();
        }
        if !self.preview.is_owned_by(window.id) {
            trace!(window = ?window.id, "No preview for window");
            return Commit::default();
        }
        let commit = snap_engine::resolve(&self.preview, window, self.settings.spacing);
        self.clear_preview();
        commit
    }

    /// A preview left from an earlier frame must not be committed once the
    /// window's current geometry is unknown.
    fn drop_preview_of(&mut self, window: WindowId) {
        if self.preview.is_owned_by(window) {
            self.clear_preview();
        }
    }

    fn clear_preview(&mut self) {
        self.guides.hide_all();
        self.preview.clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::common::config::SnapTargets;
    use crate::model::geometry::{Rect, Side};
    use crate::snap_engine::EdgeMove;
    use crate::ui::guide::GuideFrame;

    #[derive(Debug, Default)]
    struct RecordingSink {
        shown: Vec<(Axis, GuideFrame)>,
        hidden: Vec<Axis>,
        released: usize,
    }

    impl GuideSink for RecordingSink {
        fn show(&mut self, axis: Axis, guide: GuideFrame) { self.shown.push((axis, guide)); }

        fn hide(&mut self, axis: Axis) { self.hidden.push(axis); }

        fn release(&mut self) { self.released += 1; }
    }

    const MOVER: WindowId = WindowId::new(1);
    const OTHER: WindowId = WindowId::new(2);

    fn snapper(settings: SnapSettings) -> Snapper<RecordingSink> {
        let mut snapper = Snapper::new(settings, RecordingSink::default());
        snapper.attach(MOVER);
        snapper.attach(OTHER);
        snapper
    }

    fn scene(mover: Rect) -> Scene {
        Scene::new(Rect::new(0.0, 0.0, 1000.0, 800.0))
            .with_window(WindowSnapshot::new(MOVER, mover))
    }

    #[test_log::test]
    fn snaps_to_screen_top_with_spacing() {
        let mut snapper = snapper(SnapSettings::default());
        let frame = Rect::new(100.0, 5.0, 200.0, 150.0);
        snapper.handle_event(Event::Moved(MOVER, scene(frame)));

        let preview = snapper.preview().horizontal.expect("horizontal preview");
        assert_eq!(preview.side, Side::Top);
        assert_eq!(preview.line_pos, 0.0);
        assert_eq!(snapper.preview().vertical, None);
        assert_eq!(
            snapper.sink().shown,
            vec![(
                Axis::Horizontal,
                GuideFrame {
                    frame: Rect::from_edges(0.0, -5.0, 1000.0, 5.0),
                    color: snapper.settings().color,
                    corner_radius: 10.0,
                }
            )]
        );

        let commit = snapper.handle_event(Event::MoveEnded(WindowSnapshot::new(MOVER, frame)));
        assert_eq!(
            commit.horizontal,
            Some(EdgeMove { window: MOVER, edge: Side::Top, value: 5.0 })
        );
        assert_eq!(commit.vertical, None);
        assert_eq!(commit.apply_to(frame), Rect::new(100.0, 5.0, 200.0, 150.0));
        assert!(snapper.preview().is_empty());
        assert_eq!(snapper.sink().hidden, vec![Axis::Horizontal]);
    }

    #[test]
    fn disabled_targets_produce_no_candidates() {
        let settings = SnapSettings {
            targets: SnapTargets::WINDOWS,
            ..SnapSettings::default()
        };
        let mut windows_only = snapper(settings);
        windows_only.window_moved(MOVER, &scene(Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert!(windows_only.preview().is_empty());

        let settings = SnapSettings {
            targets: SnapTargets::SCREEN,
            ..SnapSettings::default()
        };
        let mut screen_only = snapper(settings);
        let scene = scene(Rect::new(400.0, 400.0, 100.0, 100.0))
            .with_window(WindowSnapshot::new(OTHER, Rect::new(505.0, 400.0, 100.0, 100.0)));
        screen_only.window_moved(MOVER, &scene);
        assert!(screen_only.preview().is_empty());
    }

    #[test]
    fn untracked_windows_are_ignored() {
        let mut snapper = Snapper::new(SnapSettings::default(), RecordingSink::default());
        let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
        snapper.window_moved(MOVER, &scene(frame));
        assert!(snapper.preview().is_empty());
        assert!(snapper.sink().shown.is_empty());
        assert!(snapper.window_move_ended(&WindowSnapshot::new(MOVER, frame)).is_empty());
    }

    #[test]
    fn mover_missing_from_scene_drops_earlier_preview() {
        let mut snapper = snapper(SnapSettings::default());
        snapper.window_moved(MOVER, &scene(Rect::new(100.0, 5.0, 200.0, 150.0)));
        assert!(snapper.preview().horizontal.is_some());

        let without_mover = Scene::new(Rect::new(0.0, 0.0, 1000.0, 800.0));
        snapper.handle_event(Event::Moved(MOVER, without_mover));
        assert!(snapper.preview().is_empty());
        assert_eq!(snapper.sink().hidden, vec![Axis::Horizontal]);

        let middle = WindowSnapshot::new(MOVER, Rect::new(400.0, 400.0, 200.0, 150.0));
        assert!(snapper.handle_event(Event::MoveEnded(middle)).is_empty());
    }

    #[test]
    fn mover_turning_unsnappable_drops_earlier_preview() {
        let mut snapper = snapper(SnapSettings::default());
        let frame = Rect::new(3.0, 300.0, 100.0, 100.0);
        snapper.window_moved(MOVER, &scene(frame));
        assert!(snapper.preview().vertical.is_some());

        let scene = Scene::new(Rect::new(0.0, 0.0, 1000.0, 800.0))
            .with_window(WindowSnapshot::new(MOVER, frame).no_snap());
        snapper.window_moved(MOVER, &scene);
        assert!(snapper.preview().is_empty());
        assert!(snapper.window_move_ended(&WindowSnapshot::new(MOVER, frame)).is_empty());
    }

    #[test]
    fn constructor_normalizes_invalid_distances() {
        let settings = SnapSettings {
            snap_distance: -1.0,
            spacing: -40.0,
            ..SnapSettings::default()
        };
        let mut snapper = snapper(settings);
        assert_eq!(snapper.settings().snap_distance, 20.0);
        assert_eq!(snapper.settings().spacing, 5.0);

        let frame = Rect::new(100.0, 5.0, 200.0, 150.0);
        snapper.window_moved(MOVER, &scene(frame));
        let commit = snapper.window_move_ended(&WindowSnapshot::new(MOVER, frame));
        assert_eq!(
            commit.horizontal,
            Some(EdgeMove { window: MOVER, edge: Side::Top, value: 5.0 })
        );
    }

    #[test]
    fn unsnappable_mover_is_ignored() {
        let mut snapper = snapper(SnapSettings::default());
        let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
        let scene = Scene::new(Rect::new(0.0, 0.0, 1000.0, 800.0))
            .with_window(WindowSnapshot::new(MOVER, frame).no_snap());
        snapper.window_moved(MOVER, &scene);
        assert!(snapper.preview().is_empty());
        assert!(
            snapper
                .window_move_ended(&WindowSnapshot::new(MOVER, frame).no_snap())
                .is_empty()
        );
    }

    #[test]
    fn unsnappable_sibling_is_not_a_target() {
        let mut snapper = snapper(SnapSettings::default());
        let scene = scene(Rect::new(400.0, 400.0, 100.0, 100.0)).with_window(
            WindowSnapshot::new(OTHER, Rect::new(505.0, 400.0, 100.0, 100.0)).no_snap(),
        );
        snapper.window_moved(MOVER, &scene);
        assert!(snapper.preview().is_empty());
    }

    #[test]
    fn move_end_from_another_window_keeps_preview() {
        let mut snapper = snapper(SnapSettings::default());
        snapper.window_moved(MOVER, &scene(Rect::new(3.0, 300.0, 100.0, 100.0)));
        assert!(snapper.preview().vertical.is_some());

        let other = WindowSnapshot::new(OTHER, Rect::new(500.0, 500.0, 10.0, 10.0));
        assert!(snapper.window_move_ended(&other).is_empty());
        assert!(snapper.preview().is_owned_by(MOVER));
    }

    #[test]
    fn leaving_tolerance_hides_guides() {
        let mut snapper = snapper(SnapSettings::default());
        snapper.window_moved(MOVER, &scene(Rect::new(3.0, 3.0, 100.0, 100.0)));
        assert_eq!(snapper.sink().shown.len(), 2);
        snapper.window_moved(MOVER, &scene(Rect::new(300.0, 300.0, 100.0, 100.0)));
        assert!(snapper.preview().is_empty());
        assert_eq!(snapper.sink().hidden, vec![Axis::Horizontal, Axis::Vertical]);
    }

    #[test]
    fn teardown_is_idempotent_and_silences_events() {
        let mut snapper = snapper(SnapSettings::default());
        let frame = Rect::new(3.0, 3.0, 100.0, 100.0);
        snapper.window_moved(MOVER, &scene(frame));
        snapper.teardown();
        snapper.teardown();
        assert_eq!(snapper.lifecycle(), Lifecycle::Disabled);
        assert_eq!(snapper.sink().released, 1);

        let shown = snapper.sink().shown.len();
        snapper.handle_event(Event::Moved(MOVER, scene(frame)));
        let commit = snapper.handle_event(Event::MoveEnded(WindowSnapshot::new(MOVER, frame)));
        assert!(commit.is_empty());
        assert_eq!(snapper.sink().shown.len(), shown);
        assert!(snapper.sink().hidden.is_empty());
        assert!(!snapper.preview_data().active);

        snapper.attach(MOVER);
        assert!(!snapper.is_tracked(MOVER));
    }

    #[test]
    fn detach_clears_owned_preview() {
        let mut snapper = snapper(SnapSettings::default());
        snapper.window_moved(MOVER, &scene(Rect::new(3.0, 300.0, 100.0, 100.0)));
        snapper.detach(MOVER);
        assert!(snapper.preview().is_empty());
        assert_eq!(snapper.sink().hidden, vec![Axis::Vertical]);
    }
}

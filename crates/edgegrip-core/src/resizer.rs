//! Right-edge resize component.
//!
//! Owns the grip the user grabs, tracks the press/move/release gesture, and
//! mutates the bound target's size through the scene, clamped by the
//! constraint engine. Lifecycle notifications are queued and drained by the
//! host with [`EdgeResizer::take_events`].

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::constraint::clamp_size;
use crate::input::{MouseButton, PointerEvent};
use crate::scene::{GeometryEvent, ItemId, Scene, WatchId};

/// Default edge length of the square grip.
pub const DEFAULT_HANDLE_SIZE: f64 = 9.0;
/// Extra hit-test slack around the grip, in scene units.
pub const HANDLE_HIT_TOLERANCE: f64 = 4.0;

/// The grip rectangle the user grabs, owned by the resizer.
///
/// Hosts may read it to draw or position chrome around it; only the resizer
/// moves it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Handle {
    /// Center of the grip. Sits on the target's right edge, vertically
    /// centered.
    pub position: Point,
    /// Grip dimensions.
    pub size: Size,
}

impl Handle {
    fn new(size: Size) -> Self {
        Self {
            position: Point::ZERO,
            size,
        }
    }

    /// Bounding rectangle of the grip.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x - self.size.width / 2.0,
            self.position.y - self.size.height / 2.0,
            self.position.x + self.size.width / 2.0,
            self.position.y + self.size.height / 2.0,
        )
    }

    /// Check whether a point grabs the grip, with hit slack.
    pub fn hit_test(&self, point: Point) -> bool {
        self.bounds()
            .inflate(HANDLE_HIT_TOLERANCE, HANDLE_HIT_TOLERANCE)
            .contains(point)
    }
}

/// Notifications produced by the resizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResizerEvent {
    /// The bound target changed.
    TargetChanged,
    /// The bound flickable changed.
    FlickableChanged,
    /// The minimum target size changed.
    MinimumSizeChanged,
    /// Ratio preservation was toggled.
    PreserveRatioChanged,
    /// The configured ratio changed.
    RatioChanged,
    /// A drag gesture started; `size` is the target size at that instant.
    ResizeStart { size: Size },
    /// A drag gesture ended; `size` is the final target size.
    ResizeEnd { size: Size },
}

/// Transient drag bookkeeping, only alive during a gesture.
#[derive(Debug, Clone)]
struct DragState {
    /// Global pointer position at press.
    pointer_origin: Point,
    /// Target size at press.
    initial_size: Size,
    /// Last size actually applied to the target.
    applied_size: Size,
    /// Flickable whose gestures were suspended at drag start, if any.
    suspended_flickable: Option<ItemId>,
}

/// Drag tracker phase.
#[derive(Debug, Clone)]
enum DragPhase {
    Idle,
    Dragging(DragState),
}

/// Interactive right-edge resizer for a scene item.
///
/// Control flow: host pointer events -> drag tracker -> constraint clamp ->
/// target size mutation -> lifecycle events, all synchronous on the host's
/// event thread. The target is applied live on every move, no buffering.
#[derive(Debug, Clone)]
pub struct EdgeResizer {
    target: Option<ItemId>,
    target_watch: Option<WatchId>,
    flickable: Option<ItemId>,
    minimum_size: Option<Size>,
    preserve_ratio: bool,
    ratio: f64,
    handle: Handle,
    phase: DragPhase,
    events: Vec<ResizerEvent>,
}

impl Default for EdgeResizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeResizer {
    /// Create a detached resizer. Bind a target with [`EdgeResizer::set_target`].
    pub fn new() -> Self {
        Self {
            target: None,
            target_watch: None,
            flickable: None,
            minimum_size: None,
            preserve_ratio: false,
            ratio: 1.0,
            handle: Handle::new(Size::new(DEFAULT_HANDLE_SIZE, DEFAULT_HANDLE_SIZE)),
            phase: DragPhase::Idle,
            events: Vec::new(),
        }
    }

    /// The item being resized, if bound and not known to be dead.
    pub fn target(&self) -> Option<ItemId> {
        self.target
    }

    /// The scrollable container suspended during drags, if bound.
    pub fn flickable(&self) -> Option<ItemId> {
        self.flickable
    }

    /// The configured minimum target size.
    pub fn minimum_size(&self) -> Option<Size> {
        self.minimum_size
    }

    /// Whether resizing preserves the configured ratio.
    pub fn preserve_ratio(&self) -> bool {
        self.preserve_ratio
    }

    /// The configured width/height ratio.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Read-only view of the grip.
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Whether a drag gesture is in flight.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// Bind the item to resize, or `None` to disable the resizer.
    ///
    /// Setting the current target again is a no-op: no second notification,
    /// no duplicate geometry subscription. A change while a drag is in
    /// flight aborts the gesture; the flickable is restored and `ResizeEnd`
    /// is emitted with the last applied size, so hosts always observe
    /// start/end pairs.
    pub fn set_target(&mut self, scene: &mut Scene, target: Option<ItemId>) {
        let target = target.filter(|id| {
            let live = scene.contains(*id);
            if !live {
                log::warn!("resize target {id} is not in the scene; treating as detached");
            }
            live
        });
        if self.target == target {
            return;
        }
        self.abort_drag(scene);
        if let Some(watch) = self.target_watch.take() {
            scene.unsubscribe(watch);
        }
        self.target = target;
        if let Some(id) = target {
            // Liveness was checked above, so the subscription cannot fail.
            self.target_watch = scene.subscribe(id).ok();
        }
        self.reposition_handle(scene);
        self.events.push(ResizerEvent::TargetChanged);
    }

    /// Bind the scrollable container whose gestures are suspended during a
    /// drag, or `None`. No side effect beyond the change notification.
    pub fn set_flickable(&mut self, flickable: Option<ItemId>) {
        if self.flickable == flickable {
            return;
        }
        self.flickable = flickable;
        self.events.push(ResizerEvent::FlickableChanged);
    }

    /// Set the minimum target size; `None` removes the floor.
    pub fn set_minimum_size(&mut self, minimum: Option<Size>) {
        if self.minimum_size == minimum {
            return;
        }
        self.minimum_size = minimum;
        self.events.push(ResizerEvent::MinimumSizeChanged);
    }

    /// Enable or disable ratio preservation.
    pub fn set_preserve_ratio(&mut self, preserve: bool) {
        if self.preserve_ratio == preserve {
            return;
        }
        self.preserve_ratio = preserve;
        self.events.push(ResizerEvent::PreserveRatioChanged);
    }

    /// Set the width/height ratio enforced while preservation is on.
    ///
    /// Non-positive values are stored but neutralize preservation until
    /// corrected; see [`clamp_size`].
    pub fn set_ratio(&mut self, ratio: f64) {
        if ratio <= 0.0 {
            log::warn!("non-positive resize ratio {ratio}; ratio preservation will be ignored");
        }
        if (self.ratio - ratio).abs() <= f64::EPSILON {
            return;
        }
        self.ratio = ratio;
        self.events.push(ResizerEvent::RatioChanged);
    }

    /// Resize the grip and re-anchor it on the target's edge.
    pub fn set_handle_size(&mut self, scene: &Scene, size: Size) {
        self.handle.size = Size::new(size.width.max(1.0), size.height.max(1.0));
        self.reposition_handle(scene);
    }

    /// React to a drained scene geometry event.
    ///
    /// Only events carrying this resizer's watch are acted on, and the
    /// reaction repositions the grip and nothing else. The events generated
    /// by the tracker's own mutations therefore come back as harmless
    /// echoes, never feeding into drag-delta computation.
    pub fn handle_geometry_event(&mut self, scene: &Scene, event: &GeometryEvent) {
        if self.target_watch == Some(event.watch) {
            self.reposition_handle(scene);
        }
    }

    /// Feed a host pointer event through the drag tracker.
    ///
    /// Returns `true` when the event was consumed. `false` events belong to
    /// other interactive elements and must be propagated by the host.
    pub fn handle_pointer_event(&mut self, scene: &mut Scene, event: &PointerEvent) -> bool {
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } if !self.is_dragging() => self.begin_drag(scene, *position),
            PointerEvent::Move { position } if self.is_dragging() => {
                self.update_drag(scene, *position);
                true
            }
            PointerEvent::Up { .. } if self.is_dragging() => {
                self.finish_drag(scene);
                true
            }
            _ => false,
        }
    }

    /// Drain the notifications queued since the last call.
    pub fn take_events(&mut self) -> Vec<ResizerEvent> {
        std::mem::take(&mut self.events)
    }

    fn begin_drag(&mut self, scene: &mut Scene, position: Point) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        if !self.handle.hit_test(position) {
            return false;
        }
        let Ok(item) = scene.item(target) else {
            // Target died externally; stay inert until rebound.
            return false;
        };
        let initial_size = item.size();
        let suspended = self
            .flickable
            .filter(|&id| scene.set_interactive(id, false).is_ok());
        self.phase = DragPhase::Dragging(DragState {
            pointer_origin: position,
            initial_size,
            applied_size: initial_size,
            suspended_flickable: suspended,
        });
        log::debug!("resize drag started at {position:?}, target size {initial_size:?}");
        self.events.push(ResizerEvent::ResizeStart { size: initial_size });
        true
    }

    fn update_drag(&mut self, scene: &mut Scene, position: Point) {
        let Some(target) = self.target.filter(|&id| scene.contains(id)) else {
            self.abort_drag(scene);
            return;
        };
        let clamped = {
            let DragPhase::Dragging(drag) = &mut self.phase else {
                return;
            };
            let delta = position - drag.pointer_origin;
            // Right-edge resizer: only the width follows the pointer; the
            // height moves only through the constraint engine.
            let proposed = Size::new(drag.initial_size.width + delta.x, drag.initial_size.height);
            let clamped = clamp_size(proposed, self.minimum_size, self.preserve_ratio, self.ratio);
            drag.applied_size = clamped;
            clamped
        };
        // Liveness was checked above; the only failure mode is a missing item.
        let _ = scene.set_item_size(target, clamped);
        self.reposition_handle(scene);
    }

    fn finish_drag(&mut self, scene: &mut Scene) {
        let DragPhase::Dragging(drag) = std::mem::replace(&mut self.phase, DragPhase::Idle) else {
            return;
        };
        if let Some(flickable) = drag.suspended_flickable {
            let _ = scene.set_interactive(flickable, true);
        }
        let final_size = self
            .target
            .and_then(|id| scene.item(id).ok().map(|item| item.size()))
            .unwrap_or(drag.applied_size);
        log::debug!("resize drag finished, target size {final_size:?}");
        self.events.push(ResizerEvent::ResizeEnd { size: final_size });
    }

    /// Abrupt completion: detach or target death mid-drag. The gesture is
    /// closed out with a `ResizeEnd` carrying the last applied size.
    fn abort_drag(&mut self, scene: &mut Scene) {
        let DragPhase::Dragging(drag) = std::mem::replace(&mut self.phase, DragPhase::Idle) else {
            return;
        };
        if let Some(flickable) = drag.suspended_flickable {
            let _ = scene.set_interactive(flickable, true);
        }
        log::debug!("resize drag aborted, last applied size {:?}", drag.applied_size);
        self.events.push(ResizerEvent::ResizeEnd {
            size: drag.applied_size,
        });
    }

    /// Keep the grip centered on the target's right edge. Safe to call at
    /// any time; with no live target the grip stays where it is.
    fn reposition_handle(&mut self, scene: &Scene) {
        let Some(target) = self.target else {
            return;
        };
        let Ok(item) = scene.item(target) else {
            return;
        };
        let bounds = item.bounds();
        self.handle.position = Point::new(bounds.x1, bounds.y0 + bounds.height() / 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneItem;

    /// Scene with a 100x80 target at the origin and a bound resizer.
    fn setup() -> (Scene, EdgeResizer, ItemId) {
        let mut scene = Scene::new();
        let target = scene.insert(SceneItem::new(Point::ZERO, 100.0, 80.0));
        let mut resizer = EdgeResizer::new();
        resizer.set_target(&mut scene, Some(target));
        resizer.take_events();
        (scene, resizer, target)
    }

    fn grip(resizer: &EdgeResizer) -> Point {
        resizer.handle().position
    }

    fn drag_by(resizer: &mut EdgeResizer, scene: &mut Scene, dx: f64, dy: f64) {
        let start = grip(resizer);
        assert!(resizer.handle_pointer_event(scene, &PointerEvent::left_down(start)));
        assert!(resizer.handle_pointer_event(
            scene,
            &PointerEvent::Move {
                position: Point::new(start.x + dx, start.y + dy),
            }
        ));
        assert!(resizer.handle_pointer_event(
            scene,
            &PointerEvent::left_up(Point::new(start.x + dx, start.y + dy))
        ));
    }

    fn target_size(scene: &Scene, id: ItemId) -> Size {
        scene.item(id).unwrap().size()
    }

    #[test]
    fn test_unconstrained_drag_resizes_width_only() {
        let (mut scene, mut resizer, target) = setup();

        drag_by(&mut resizer, &mut scene, 50.0, 0.0);

        let size = target_size(&scene, target);
        assert!((size.width - 150.0).abs() < f64::EPSILON);
        assert!((size.height - 80.0).abs() < f64::EPSILON);

        let events = resizer.take_events();
        assert_eq!(
            events,
            vec![
                ResizerEvent::ResizeStart {
                    size: Size::new(100.0, 80.0)
                },
                ResizerEvent::ResizeEnd {
                    size: Size::new(150.0, 80.0)
                },
            ]
        );
    }

    #[test]
    fn test_vertical_pointer_motion_is_ignored() {
        let (mut scene, mut resizer, target) = setup();

        drag_by(&mut resizer, &mut scene, 50.0, 37.0);

        let size = target_size(&scene, target);
        assert!((size.width - 150.0).abs() < f64::EPSILON);
        assert!((size.height - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_minimum_size_floors_the_result() {
        let (mut scene, mut resizer, target) = setup();
        resizer.set_minimum_size(Some(Size::new(120.0, 120.0)));

        drag_by(&mut resizer, &mut scene, 50.0, 0.0);

        let size = target_size(&scene, target);
        assert!((size.width - 150.0).abs() < f64::EPSILON);
        assert!((size.height - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ratio_preservation_derives_height() {
        let mut scene = Scene::new();
        let target = scene.insert(SceneItem::new(Point::ZERO, 90.0, 60.0));
        let mut resizer = EdgeResizer::new();
        resizer.set_target(&mut scene, Some(target));
        resizer.set_preserve_ratio(true);
        resizer.set_ratio(1.5);
        resizer.take_events();

        drag_by(&mut resizer, &mut scene, 30.0, 0.0);

        let size = target_size(&scene, target);
        assert!((size.width - 120.0).abs() < f64::EPSILON);
        assert!((size.height - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_positive_ratio_is_neutralized() {
        let (mut scene, mut resizer, target) = setup();
        resizer.set_preserve_ratio(true);
        resizer.set_ratio(-1.0);

        drag_by(&mut resizer, &mut scene, 50.0, 0.0);

        let size = target_size(&scene, target);
        assert!((size.width - 150.0).abs() < f64::EPSILON);
        assert!((size.height - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_live_feedback_on_every_move() {
        let (mut scene, mut resizer, target) = setup();
        let start = grip(&resizer);

        resizer.handle_pointer_event(&mut scene, &PointerEvent::left_down(start));
        resizer.handle_pointer_event(
            &mut scene,
            &PointerEvent::Move {
                position: Point::new(start.x + 10.0, start.y),
            },
        );
        assert!((target_size(&scene, target).width - 110.0).abs() < f64::EPSILON);

        resizer.handle_pointer_event(
            &mut scene,
            &PointerEvent::Move {
                position: Point::new(start.x + 25.0, start.y),
            },
        );
        assert!((target_size(&scene, target).width - 125.0).abs() < f64::EPSILON);

        // Deltas are computed from the press position, not move-to-move,
        // so moving back shrinks again.
        resizer.handle_pointer_event(
            &mut scene,
            &PointerEvent::Move {
                position: Point::new(start.x - 20.0, start.y),
            },
        );
        assert!((target_size(&scene, target).width - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_handle_tracks_right_edge() {
        let (mut scene, mut resizer, target) = setup();
        assert!((grip(&resizer).x - 100.0).abs() < f64::EPSILON);
        assert!((grip(&resizer).y - 40.0).abs() < f64::EPSILON);

        drag_by(&mut resizer, &mut scene, 50.0, 0.0);
        assert!((grip(&resizer).x - 150.0).abs() < f64::EPSILON);

        // External resize repositions through the geometry watch.
        scene.set_item_size(target, Size::new(60.0, 40.0)).unwrap();
        for event in scene.drain_geometry_events() {
            resizer.handle_geometry_event(&scene, &event);
        }
        assert!((grip(&resizer).x - 60.0).abs() < f64::EPSILON);
        assert!((grip(&resizer).y - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_press_off_handle_is_not_consumed() {
        let (mut scene, mut resizer, target) = setup();

        let consumed =
            resizer.handle_pointer_event(&mut scene, &PointerEvent::left_down(Point::new(10.0, 10.0)));

        assert!(!consumed);
        assert!(!resizer.is_dragging());
        assert!(resizer.take_events().is_empty());
        assert!((target_size(&scene, target).width - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spurious_release_while_idle_is_ignored() {
        let (mut scene, mut resizer, _) = setup();

        let consumed =
            resizer.handle_pointer_event(&mut scene, &PointerEvent::left_up(grip(&resizer)));

        assert!(!consumed);
        assert!(resizer.take_events().is_empty());
    }

    #[test]
    fn test_right_button_press_passes_through() {
        let (mut scene, mut resizer, _) = setup();

        let consumed = resizer.handle_pointer_event(
            &mut scene,
            &PointerEvent::Down {
                position: grip(&resizer),
                button: MouseButton::Right,
            },
        );

        assert!(!consumed);
        assert!(!resizer.is_dragging());
    }

    #[test]
    fn test_flickable_suspended_during_drag() {
        let (mut scene, mut resizer, _) = setup();
        let flickable = scene.insert(SceneItem::new(Point::ZERO, 800.0, 600.0));
        resizer.set_flickable(Some(flickable));
        let start = grip(&resizer);

        resizer.handle_pointer_event(&mut scene, &PointerEvent::left_down(start));
        assert!(!scene.item(flickable).unwrap().interactive);

        resizer.handle_pointer_event(&mut scene, &PointerEvent::left_up(start));
        assert!(scene.item(flickable).unwrap().interactive);
    }

    #[test]
    fn test_detach_mid_drag_aborts_and_disables() {
        let (mut scene, mut resizer, target) = setup();
        let start = grip(&resizer);

        resizer.handle_pointer_event(&mut scene, &PointerEvent::left_down(start));
        resizer.handle_pointer_event(
            &mut scene,
            &PointerEvent::Move {
                position: Point::new(start.x + 30.0, start.y),
            },
        );
        resizer.take_events();

        resizer.set_target(&mut scene, None);
        assert!(!resizer.is_dragging());
        assert_eq!(
            resizer.take_events(),
            vec![
                ResizerEvent::ResizeEnd {
                    size: Size::new(130.0, 80.0)
                },
                ResizerEvent::TargetChanged,
            ]
        );

        // Later moves neither mutate geometry nor get consumed.
        let consumed = resizer.handle_pointer_event(
            &mut scene,
            &PointerEvent::Move {
                position: Point::new(start.x + 90.0, start.y),
            },
        );
        assert!(!consumed);
        assert!((target_size(&scene, target).width - 130.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_target_removed_mid_drag_aborts() {
        let (mut scene, mut resizer, target) = setup();
        let flickable = scene.insert(SceneItem::new(Point::ZERO, 800.0, 600.0));
        resizer.set_flickable(Some(flickable));
        let start = grip(&resizer);

        resizer.handle_pointer_event(&mut scene, &PointerEvent::left_down(start));
        resizer.take_events();
        scene.remove(target);

        resizer.handle_pointer_event(
            &mut scene,
            &PointerEvent::Move {
                position: Point::new(start.x + 40.0, start.y),
            },
        );

        assert!(!resizer.is_dragging());
        assert!(scene.item(flickable).unwrap().interactive);
        assert_eq!(
            resizer.take_events(),
            vec![ResizerEvent::ResizeEnd {
                size: Size::new(100.0, 80.0)
            }]
        );
    }

    #[test]
    fn test_same_target_twice_is_a_single_change() {
        let mut scene = Scene::new();
        let target = scene.insert(SceneItem::new(Point::ZERO, 100.0, 80.0));
        let mut resizer = EdgeResizer::new();

        resizer.set_target(&mut scene, Some(target));
        resizer.set_target(&mut scene, Some(target));

        assert_eq!(resizer.take_events(), vec![ResizerEvent::TargetChanged]);

        // Exactly one geometry subscription survives, so an external resize
        // produces exactly one watch event.
        scene.set_item_size(target, Size::new(70.0, 80.0)).unwrap();
        assert_eq!(scene.drain_geometry_events().len(), 1);
    }

    #[test]
    fn test_replacing_target_unsubscribes_old_watch() {
        let (mut scene, mut resizer, old) = setup();
        let new = scene.insert(SceneItem::new(Point::new(200.0, 0.0), 50.0, 50.0));

        resizer.set_target(&mut scene, Some(new));

        scene.set_item_size(old, Size::new(10.0, 10.0)).unwrap();
        assert!(scene.drain_geometry_events().is_empty());
        assert!((grip(&resizer).x - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dangling_target_id_detaches() {
        let mut scene = Scene::new();
        let target = scene.insert(SceneItem::new(Point::ZERO, 100.0, 80.0));
        scene.remove(target);
        let mut resizer = EdgeResizer::new();

        resizer.set_target(&mut scene, Some(target));

        assert_eq!(resizer.target(), None);
        assert!(resizer.take_events().is_empty());
    }

    #[test]
    fn test_configuration_setters_dedupe_notifications() {
        let mut resizer = EdgeResizer::new();

        resizer.set_minimum_size(Some(Size::new(10.0, 10.0)));
        resizer.set_minimum_size(Some(Size::new(10.0, 10.0)));
        resizer.set_preserve_ratio(true);
        resizer.set_preserve_ratio(true);
        resizer.set_ratio(2.0);
        resizer.set_ratio(2.0);
        resizer.set_flickable(None);

        assert_eq!(
            resizer.take_events(),
            vec![
                ResizerEvent::MinimumSizeChanged,
                ResizerEvent::PreserveRatioChanged,
                ResizerEvent::RatioChanged,
            ]
        );
    }

    #[test]
    fn test_press_without_target_is_inert() {
        let mut scene = Scene::new();
        let mut resizer = EdgeResizer::new();

        let consumed =
            resizer.handle_pointer_event(&mut scene, &PointerEvent::left_down(Point::ZERO));

        assert!(!consumed);
        assert!(resizer.take_events().is_empty());
    }

    #[test]
    fn test_handle_size_is_configurable() {
        let (scene, mut resizer, _) = setup();
        resizer.set_handle_size(&scene, Size::new(20.0, 40.0));

        let bounds = resizer.handle().bounds();
        assert!((bounds.width() - 20.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 40.0).abs() < f64::EPSILON);
        // Still anchored on the right edge.
        assert!((resizer.handle().position.x - 100.0).abs() < f64::EPSILON);

        // Degenerate sizes are clamped, not honored.
        resizer.set_handle_size(&scene, Size::new(0.0, -5.0));
        assert!(resizer.handle().size.width >= 1.0);
        assert!(resizer.handle().size.height >= 1.0);
    }
}

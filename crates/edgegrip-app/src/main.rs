//! Demo entry point: replays a scripted resize gesture against an
//! in-memory scene and prints the resizer's notifications as JSON lines.

use edgegrip_core::{EdgeResizer, PointerEvent, Scene, SceneItem};
use kurbo::{Point, Size};

/// Route one pointer event, then pump geometry events back into the
/// resizer. This is the same loop a real host runs per input event.
fn pump(resizer: &mut EdgeResizer, scene: &mut Scene, event: PointerEvent) {
    let consumed = resizer.handle_pointer_event(scene, &event);
    log::debug!("{event:?} consumed={consumed}");
    for geometry in scene.drain_geometry_events() {
        resizer.handle_geometry_event(scene, &geometry);
    }
    report(resizer);
}

/// Print drained notifications as JSON lines.
fn report(resizer: &mut EdgeResizer) {
    for event in resizer.take_events() {
        match serde_json::to_string(&event) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize event: {e}"),
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Starting EdgeGrip demo");

    let mut scene = Scene::new();
    let flickable = scene.insert(SceneItem::new(Point::ZERO, 800.0, 600.0));
    let target = scene.insert(SceneItem::new(Point::new(20.0, 20.0), 200.0, 120.0));

    let mut resizer = EdgeResizer::new();
    resizer.set_target(&mut scene, Some(target));
    resizer.set_flickable(Some(flickable));
    resizer.set_minimum_size(Some(Size::new(80.0, 60.0)));
    resizer.set_preserve_ratio(true);
    resizer.set_ratio(2.0);
    report(&mut resizer);

    // Grab the grip and pull it 140 units to the right, in two steps.
    let grip = resizer.handle().position;
    pump(&mut resizer, &mut scene, PointerEvent::left_down(grip));
    pump(
        &mut resizer,
        &mut scene,
        PointerEvent::Move {
            position: Point::new(grip.x + 60.0, grip.y),
        },
    );
    pump(
        &mut resizer,
        &mut scene,
        PointerEvent::Move {
            position: Point::new(grip.x + 140.0, grip.y),
        },
    );
    pump(
        &mut resizer,
        &mut scene,
        PointerEvent::left_up(Point::new(grip.x + 140.0, grip.y)),
    );

    // A programmatic resize from outside the component; the grip follows.
    if let Err(e) = scene.set_item_size(target, Size::new(160.0, 80.0)) {
        log::error!("Failed to resize target: {e}");
        return;
    }
    for geometry in scene.drain_geometry_events() {
        resizer.handle_geometry_event(&scene, &geometry);
    }

    match scene.item(target) {
        Ok(item) => log::info!(
            "final target size {:?}, grip at {:?}",
            item.size(),
            resizer.handle().position
        ),
        Err(e) => log::error!("Target vanished: {e}"),
    }
}

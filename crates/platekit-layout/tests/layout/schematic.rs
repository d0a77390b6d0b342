use platekit_core::{Placeable, PlacedObject, Vec2, Vec3};
use platekit_layout::Scene;

fn case_and_led() -> (Scene, platekit_core::ObjectId, platekit_core::ObjectId) {
    let mut scene: Scene = Scene::new();
    let case = scene.add(PlacedObject::new("case", Vec3::new(40.0, 40.0, 10.0)));
    let led = scene.add(
        PlacedObject::new("led", Vec3::new(4.0, 4.0, 2.0)).into_schematic(Vec3::new(0.5, 0.5, 0.0)),
    );
    (scene, case, led)
}

#[test]
fn test_schematic_snaps_to_anchor_on_add() {
    let (scene, _, led) = case_and_led();
    let led = scene.get(led).unwrap();
    assert_eq!(led.position(), Vec2::new(10.0, 10.0));
    assert_eq!(led.draw_offset(), Vec3::new(0.0, 0.0, -10.0));
    assert_eq!(led.no_hit_count(), 1);
    assert_eq!(led.hit_count(), 1);
}

#[test]
fn test_schematic_follows_distant_parent() {
    let (mut scene, case, led) = case_and_led();
    scene.get_mut(case).unwrap().set_position(Vec2::new(60.0, 0.0));

    assert!(scene.resolve());

    let led = scene.get(led).unwrap();
    assert_eq!(led.position(), Vec2::new(70.0, 10.0));
    assert_eq!(led.relative(), Vec3::new(0.5, 0.5, 0.0));
}

#[test]
fn test_overlapping_drag_updates_anchor() {
    let (mut scene, _, led) = case_and_led();
    scene.get_mut(led).unwrap().set_position(Vec2::new(-10.0, 5.0));

    assert!(scene.resolve());

    let led = scene.get(led).unwrap();
    assert_eq!(led.position(), Vec2::new(-10.0, 5.0));
    assert_eq!(led.relative(), Vec3::new(-0.5, 0.25, 0.0));
}

#[test]
fn test_scale_restores_anchor_and_flag_stays_set() {
    let (mut scene, case, led) = case_and_led();
    scene.get_mut(case).unwrap().apply_scale(2.0);
    scene.set_call_from_scale(true);

    assert!(scene.resolve());

    let led = scene.get(led).unwrap();
    assert_eq!(led.position(), Vec2::new(20.0, 20.0));
    assert_eq!(led.draw_offset(), Vec3::new(0.0, 0.0, -20.0));
    assert!(scene.is_call_from_scale());
}

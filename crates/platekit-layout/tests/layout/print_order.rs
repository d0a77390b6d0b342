use super::{assert_valid_order, cube_at};
use platekit_core::{Placeable, Vec2, Vec3};
use platekit_layout::Scene;

fn wide_scene() -> Scene {
    let mut scene: Scene = Scene::new();
    scene.set_machine_size(Vec3::new(200.0, 200.0, 200.0));
    scene
}

#[test]
fn test_single_tall_object_is_printable() {
    let mut scene: Scene = Scene::new();
    scene.insert_unplaced(cube_at(10.0, 150.0, 0.0, 0.0));
    assert_eq!(scene.print_order(), Some(vec![0]));
}

#[test]
fn test_tall_object_with_company_has_no_order() {
    let mut scene = wide_scene();
    scene.insert_unplaced(cube_at(10.0, 61.0, -60.0, 0.0));
    scene.insert_unplaced(cube_at(10.0, 5.0, 60.0, 0.0));
    assert_eq!(scene.print_order(), None);
}

#[test]
fn test_tall_object_off_platform_does_not_count() {
    let mut scene = wide_scene();
    scene.insert_unplaced(cube_at(10.0, 61.0, 500.0, 0.0));
    scene.insert_unplaced(cube_at(10.0, 5.0, 0.0, 0.0));
    assert_eq!(scene.print_order(), Some(vec![1]));
}

#[test]
fn test_spaced_row_has_an_order() {
    let mut scene = wide_scene();
    for x in [-60.0, 0.0, 60.0] {
        scene.insert_unplaced(cube_at(10.0, 20.0, x, 0.0));
    }
    let order = scene.print_order().expect("spaced objects are printable");
    assert_eq!(order.len(), 3);
    assert_valid_order(&scene, &order);
}

#[test]
fn test_crowded_row_has_no_order() {
    let mut scene = wide_scene();
    for x in [-15.0, 0.0, 15.0] {
        scene.insert_unplaced(cube_at(10.0, 20.0, x, 0.0));
    }
    assert_eq!(scene.print_order(), None);
}

#[test]
fn test_staircase_follows_head_direction() {
    let mut scene = wide_scene();
    scene.set_head_size(10.0, 30.0, 10.0, 30.0, 60.0);
    for step in [0.0, 25.0, 50.0] {
        scene.insert_unplaced(cube_at(10.0, 20.0, step, step));
    }
    let order = scene.print_order().expect("staircase is printable");
    assert_eq!(order, vec![0, 1, 2]);
    assert_valid_order(&scene, &order);
}

#[test]
fn test_arranged_plate_is_printable() {
    let mut scene = wide_scene();
    for _ in 0..4 {
        scene.add(cube_at(15.0, 20.0, 0.0, 0.0));
    }
    let positions: Vec<Vec2> = scene.objects().iter().map(|o| o.position()).collect();
    assert_eq!(
        positions,
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 33.0),
            Vec2::new(33.0, 0.0),
            Vec2::new(-33.0, 0.0),
        ]
    );

    // The rightmost part goes first, then the centre, then the rest
    let order = scene.print_order().expect("arranged plate is printable");
    assert_eq!(order, vec![2, 0, 3, 1]);
    assert_valid_order(&scene, &order);
}

use super::{cube, cube_at};
use platekit_core::{LayoutError, ObjectId, Placeable, PlacedObject, Vec2, Vec3};
use platekit_layout::{BedClips, Scene};
use platekit_settings::LayoutConfig;

fn assert_no_overlaps(scene: &Scene) {
    let objects = scene.objects();
    for a in objects {
        for b in objects {
            assert!(!scene.check_hit(a, b), "{} overlaps {}", a.id(), b.id());
        }
    }
}

#[test]
fn test_first_object_lands_on_origin() {
    let mut scene: Scene = Scene::new();
    let id = scene.add(cube_at(20.0, 10.0, 33.0, -12.0));
    assert_eq!(scene.get(id).unwrap().position(), Vec2::zeros());
}

#[test]
fn test_added_objects_do_not_overlap() {
    let mut scene: Scene = Scene::new();
    scene.set_machine_size(Vec3::new(250.0, 250.0, 200.0));
    for side in [30.0, 12.0, 25.0, 8.0, 40.0] {
        scene.add(cube(side, 10.0));
    }
    assert_eq!(scene.len(), 5);
    assert_no_overlaps(&scene);
}

#[test]
fn test_remove_returns_object() {
    let mut scene: Scene = Scene::new();
    let a = scene.add(cube(10.0, 10.0));
    let b = scene.add(cube(10.0, 10.0));

    let removed = scene.remove(a).unwrap();
    assert_eq!(removed.id(), a);
    assert_eq!(scene.len(), 1);
    assert!(scene.remove(a).is_none());
    assert!(scene.get(b).is_some());
}

#[test]
fn test_merge_moves_to_midpoint() {
    let mut scene: Scene = Scene::new();
    let a = scene.add(cube(10.0, 10.0));
    let b = scene.add(cube(10.0, 10.0));
    let expected = (scene.get(a).unwrap().position() + scene.get(b).unwrap().position()) / 2.0;

    scene.merge(a, b).unwrap();

    assert_eq!(scene.len(), 1);
    assert!(scene.get(b).is_none());
    let merged = scene.get(a).unwrap();
    assert_eq!(merged.position(), expected);
    assert_eq!(merged.parts().len(), 2);
}

#[test]
fn test_merge_errors() {
    let mut scene: Scene = Scene::new();
    let a = scene.add(cube(10.0, 10.0));
    let stranger = ObjectId::new();

    assert_eq!(scene.merge(a, a), Err(LayoutError::SelfMerge(a)));
    assert_eq!(scene.merge(a, stranger), Err(LayoutError::ObjectNotFound(stranger)));
    assert_eq!(scene.merge(stranger, a), Err(LayoutError::ObjectNotFound(stranger)));
    assert_eq!(scene.len(), 1);
}

#[test]
fn test_arrange_all_keeps_order_and_separates() {
    let mut scene: Scene = Scene::new();
    scene.set_machine_size(Vec3::new(300.0, 300.0, 200.0));
    let ids: Vec<ObjectId> = (0..4)
        .map(|_| scene.insert_unplaced(cube_at(15.0, 10.0, 5.0, 5.0)))
        .collect();

    scene.arrange_all();

    let after: Vec<ObjectId> = scene.objects().iter().map(|o| o.id()).collect();
    assert_eq!(after, ids);
    assert_eq!(scene.objects()[0].position(), Vec2::zeros());
    assert_no_overlaps(&scene);
}

#[test]
fn test_center_all() {
    let mut scene: Scene = Scene::new();
    scene.insert_unplaced(cube_at(10.0, 10.0, 10.0, 0.0));
    scene.insert_unplaced(cube_at(10.0, 10.0, 30.0, 4.0));

    scene.center_all();

    assert_eq!(scene.objects()[0].position(), Vec2::new(-10.0, -2.0));
    assert_eq!(scene.objects()[1].position(), Vec2::new(10.0, 2.0));
}

#[test]
fn test_center_all_on_empty_scene() {
    let mut scene: Scene = Scene::new();
    scene.center_all();
    assert!(scene.is_empty());
}

#[test]
fn test_oversized_object_is_scaled_down() {
    let mut scene: Scene = Scene::new();
    let id = scene.add(PlacedObject::new("beam", Vec3::new(400.0, 10.0, 20.0)));
    let size = scene.get(id).unwrap().size();
    assert!((size.x - 250.0).abs() < 1e-9);
    assert!((size.y - 6.25).abs() < 1e-9);
    assert!((size.z - 12.5).abs() < 1e-9);
}

#[test]
fn test_object_just_under_limit_is_kept() {
    let mut scene: Scene = Scene::new();
    let id = scene.add(PlacedObject::new("beam", Vec3::new(250.0, 10.0, 20.0)));
    assert_eq!(scene.get(id).unwrap().size(), Vec3::new(250.0, 10.0, 20.0));
}

#[test]
fn test_from_config() {
    let mut config = LayoutConfig::new();
    config.machine.width = 230.0;
    config.machine.depth = 225.0;
    config.machine.machine_type = "ultimaker2".to_string();
    config.head.x_min = 40.0;
    config.head.x_max = 60.0;
    config.head.y_min = 10.0;
    config.head.y_max = 30.0;
    config.head.gantry_height = 48.0;
    config.size_offsets.x = 3.0;
    config.size_offsets.y = 2.0;

    let scene: Scene = Scene::from_config(&config);

    assert_eq!(scene.machine_size(), Vec3::new(230.0, 225.0, 100.0));
    assert!(matches!(scene.bed_clips(), BedClips::Corners { .. }));
    assert!(scene.left_to_right());
    assert!(scene.front_to_back());
    assert_eq!(scene.head_offsets(), Vec2::new(40.0, 10.0));
    assert_eq!(scene.object_extent(), Vec2::new(43.0, 12.0));
    assert_eq!(scene.gantry_height(), 48.0);
}

#[test]
fn test_coincident_pair_separates_on_y() {
    let mut scene: Scene = Scene::new();
    scene.set_head_size(0.0, 0.0, 0.0, 0.0, 60.0);
    scene.insert_unplaced(cube(20.0, 10.0));
    scene.insert_unplaced(cube(20.0, 10.0));

    assert!(scene.resolve_one_pair());

    let a = scene.objects()[0].position();
    let b = scene.objects()[1].position();
    assert_eq!(a.x, b.x);
    assert!(((a.y - b.y).abs() - 20.1).abs() < 1e-9);
}

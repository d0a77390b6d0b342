use super::assert_valid_order;
use platekit_core::{Placeable, PlacedObject, Vec2, Vec3};
use platekit_layout::Scene;
use proptest::prelude::*;

fn part_sizes() -> impl Strategy<Value = Vec<(f64, f64, f64)>> {
    prop::collection::vec((2.0f64..40.0, 2.0f64..40.0, 1.0f64..50.0), 1..7)
}

fn build(sizes: &[(f64, f64, f64)], offsets: Vec2) -> Scene {
    let mut scene: Scene = Scene::new();
    scene.set_machine_size(Vec3::new(220.0, 220.0, 200.0));
    scene.set_size_offsets(offsets);
    for &(w, d, h) in sizes {
        scene.add(PlacedObject::new("part", Vec3::new(w, d, h)));
    }
    scene
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn adding_keeps_every_object_with_finite_position(
        sizes in part_sizes(),
        margin in 0.0f64..5.0,
    ) {
        let scene = build(&sizes, Vec2::new(margin, margin));
        prop_assert_eq!(scene.len(), sizes.len());
        for obj in scene.objects() {
            prop_assert!(obj.position().iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn settled_layout_has_no_overlaps(sizes in part_sizes()) {
        let mut scene = build(&sizes, Vec2::zeros());
        if scene.resolve() {
            for a in scene.objects() {
                for b in scene.objects() {
                    prop_assert!(!scene.check_hit(a, b));
                }
            }
        }
    }

    #[test]
    fn found_print_orders_respect_the_hit_map(sizes in part_sizes()) {
        let mut scene = build(&sizes, Vec2::zeros());
        scene.center_all();
        if let Some(order) = scene.print_order() {
            assert_valid_order(&scene, &order);
        }
    }

    #[test]
    fn coincident_pairs_split_by_exact_clearance(
        side in 1.0f64..50.0,
        head in 0.0f64..20.0,
    ) {
        let mut scene: Scene = Scene::new();
        scene.set_head_size(head, head, head, head, 60.0);
        scene.insert_unplaced(PlacedObject::new("a", Vec3::new(side, side, 5.0)));
        scene.insert_unplaced(PlacedObject::new("b", Vec3::new(side, side, 5.0)));

        prop_assert!(scene.resolve_one_pair());
        let gap = scene.objects()[0].position().y - scene.objects()[1].position().y;
        prop_assert!((gap - (side + 0.1 + head)).abs() < 1e-9);
    }
}

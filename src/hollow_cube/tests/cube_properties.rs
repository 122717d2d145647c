use hollow_cube::{
    Axis, Coord, Cube, Direction, Face, Slice, SliceShape, SurfaceStore, parse_sequence,
    rotation,
};
use itertools::Itertools;
use log::info;

fn assert_labels_point_outward(cube: &Cube) {
    let size = cube.size();
    for (coord, cubelet) in cube.cubelets().coords().zip(cube.cubelets()) {
        for (label, orientation) in cubelet.labels() {
            assert!(
                orientation.contains(coord, size),
                "label {label} at {coord} points {orientation}"
            );
        }
        let orientations = cubelet.labels().map(|(_, orientation)| orientation).collect_vec();
        assert!(orientations.iter().all_unique());
    }
}

fn label_counts(cube: &Cube) -> Vec<(Coord, usize)> {
    cube.cubelets()
        .iter()
        .map(|cubelet| (cubelet.home(), cubelet.label_count()))
        .sorted()
        .collect()
}

#[test_log::test]
fn scramble_then_solve_restores_every_cell() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let mut cube = Cube::new(3).unwrap();
    let solved = cube.clone();

    let scramble = cube.scramble_with(&mut rng, 10);
    assert_eq!(scramble.len(), 10);
    assert_eq!(cube.pending_scramble(), scramble.as_slice());
    info!("Scramble: {}", hollow_cube::format_sequence(&scramble));

    let solution = cube.solve();
    assert_eq!(solution.len(), 10);
    assert_eq!(
        solution,
        scramble.iter().rev().map(|slice| slice.inverse()).collect_vec()
    );
    assert_eq!(cube.cubelets(), solved.cubelets());
    assert!(cube.is_solved());
    assert!(cube.pending_scramble().is_empty());
    assert_eq!(cube.history().len(), 20);
}

#[test_log::test]
fn scramble_then_solve_on_larger_cubes() {
    let mut rng = fastrand::Rng::with_seed(42);
    for size in 2..=6 {
        let mut cube = Cube::new(size).unwrap();
        let solved = cube.clone();
        cube.scramble_with(&mut rng, 50);
        assert_labels_point_outward(&cube);
        cube.solve();
        assert_eq!(cube.cubelets(), solved.cubelets(), "size {size}");
    }
}

#[test_log::test]
fn scrambles_stay_in_range() {
    let mut rng = fastrand::Rng::with_seed(7);
    let mut cube = Cube::new(4).unwrap();
    for slice in cube.scramble_with(&mut rng, 200) {
        assert!(slice.depth < 4);
    }
    assert_eq!(cube.scramble(5).len(), 5);
    assert_eq!(cube.pending_scramble().len(), 205);
}

#[test_log::test]
fn four_turns_are_the_identity() {
    for size in 2..=5 {
        let original = Cube::new(size).unwrap();
        for axis in 0..3 {
            for depth in 0..size {
                for clockwise in [true, false] {
                    let mut cube = original.clone();
                    for _ in 0..4 {
                        cube.turn(axis, clockwise, depth).unwrap();
                    }
                    assert_eq!(cube.cubelets(), original.cubelets());
                }
            }
        }
    }
}

#[test_log::test]
fn turn_then_inverse_is_the_identity() {
    let mut rng = fastrand::Rng::with_seed(99);
    let mut cube = Cube::new(5).unwrap();
    cube.scramble_with(&mut rng, 30);
    let before = cube.clone();
    for axis in 0..3 {
        for depth in 0..5 {
            cube.turn(axis, true, depth).unwrap();
            cube.turn(axis, false, depth).unwrap();
            assert_eq!(cube.cubelets(), before.cubelets());
        }
    }
}

#[test_log::test]
fn label_counts_are_invariant() {
    let mut rng = fastrand::Rng::with_seed(3);
    let mut cube = Cube::new(4).unwrap();
    let before = label_counts(&cube);
    assert_eq!(before.iter().filter(|(_, count)| *count == 3).count(), 8);
    assert_eq!(before.iter().filter(|(_, count)| *count == 2).count(), 24);
    assert_eq!(before.iter().filter(|(_, count)| *count == 1).count(), 24);

    for _ in 0..10 {
        cube.scramble_with(&mut rng, 25);
        assert_eq!(label_counts(&cube), before);
        assert_labels_point_outward(&cube);
    }
}

#[test_log::test]
fn whole_cube_rotations_keep_the_cube_solved() {
    let mut cube = Cube::new(3).unwrap();
    for axis in 0..3 {
        cube.rotate_whole(axis, axis % 2 == 0).unwrap();
        assert!(cube.is_solved());
        assert_labels_point_outward(&cube);
    }
}

#[test_log::test]
fn interleaved_turns_are_not_undone() {
    let mut rng = fastrand::Rng::with_seed(11);
    let mut cube = Cube::new(3).unwrap();
    let scramble = cube.scramble_with(&mut rng, 10);
    let extra = Slice::new(Axis::Y, 0, Direction::Clockwise);
    cube.apply(extra).unwrap();
    let solution = cube.solve();
    assert_eq!(solution.len(), 10);

    // the solve still applies exactly the inverted scramble
    let mut expected = Cube::new(3).unwrap();
    expected.apply_all(&scramble).unwrap();
    expected.apply(extra).unwrap();
    expected.apply_all(&solution).unwrap();
    assert_eq!(cube.cubelets(), expected.cubelets());
    assert_eq!(cube.history(), expected.history());
}

#[test]
fn face_scenario_on_a_store() {
    let labels = "ABCDEFGHI".chars().collect_vec();
    let mut store = SurfaceStore::<char>::new(3).unwrap();
    store.set_slice(labels, 0, Axis::Y).unwrap();

    let SliceShape::Face(face) = store.slice_shape(0, Axis::Y).unwrap() else {
        panic!("depth 0 is a face");
    };
    let turned = rotation::rotate_face(face, Direction::Clockwise);
    store.set_2d_slice(turned, 0, Axis::Y).unwrap();

    assert_eq!(
        store.get_slice(0, Axis::Y).unwrap(),
        "GDAHEBIFC".chars().collect_vec()
    );
}

#[test]
fn ring_scenario_on_a_store() {
    let mut store = SurfaceStore::<usize>::new(5).unwrap();
    store.set_slice((0..16).collect(), 2, Axis::Y).unwrap();

    let shape = store.slice_shape(2, Axis::Y).unwrap();
    assert!(matches!(shape, SliceShape::Ring(_)));
    let turned = rotation::rotate(shape, 5, Direction::Clockwise);
    store.set_slice_shape(turned, 2, Axis::Y).unwrap();

    assert_eq!(
        store.get_slice(2, Axis::Y).unwrap(),
        [12, 13, 14, 15].into_iter().chain(0..12).collect_vec()
    );
}

#[test_log::test]
fn face_scenario_through_the_cube() {
    let mut cube = Cube::new(3).unwrap();
    let before = cube.slice_identities(0, 0).unwrap();
    cube.turn(0, true, 0).unwrap();
    let after = cube.slice_identities(0, 0).unwrap();

    // A..I row-major becomes G D A H E B I F C
    let expected = [6, 3, 0, 7, 4, 1, 8, 5, 2].map(|i| before[i]);
    assert_eq!(after, expected);
}

#[test_log::test]
fn ring_scenario_through_the_cube() {
    let mut cube = Cube::new(5).unwrap();
    let before = cube.slice_identities(0, 2).unwrap();
    assert_eq!(before.len(), 16);
    cube.turn(0, true, 2).unwrap();
    let after = cube.slice_identities(0, 2).unwrap();

    let expected = (12..16).chain(0..12).map(|i| before[i]).collect_vec();
    assert_eq!(after, expected);

    cube.turn(0, false, 2).unwrap();
    assert_eq!(cube.slice_identities(0, 2).unwrap(), before);
}

#[test_log::test]
fn renderer_sees_moved_identities() {
    let mut cube = Cube::new(3).unwrap();
    let moves = parse_sequence("Y0 Z1' X2", 3).unwrap();
    cube.apply_all(&moves).unwrap();
    assert_eq!(cube.history(), moves.as_slice());

    let identities = cube.slice_identities(2, 2).unwrap();
    let cubelets = cube.cubelets().get_slice(2, Axis::X).unwrap();
    for (cubelet, home) in cubelets.iter().zip(&identities) {
        assert_eq!(cubelet.home(), *home);
    }
}

#[test_log::test]
fn face_labels_after_a_single_turn() {
    let mut cube = Cube::new(3).unwrap();
    cube.apply(Slice::new(Axis::Y, 0, Direction::Clockwise)).unwrap();

    // the turned face itself is still uniform
    let bottom = cube.face_labels(Face::Y_NEG);
    assert!(bottom.as_slice().iter().all(|&label| label == Some(Face::Y_NEG)));

    // the bottom corner of +X at z = 0 now shows what was on +Z
    let right = cube.face_labels(Face::X_POS);
    assert_eq!(right[(0, 0)], Some(Face::Z_POS));
    assert_eq!(right[(2, 2)], Some(Face::X_POS));
}

use std::collections::HashSet;

use conway_life::{Cell, Engine, Universe};

fn set_cells(universe: &mut Universe, cells: &[(usize, usize)]) {
    for &(row, col) in cells {
        universe.set(row, col, Cell::Alive);
    }
}

fn assert_alive(universe: &Universe, cells: &[(usize, usize)]) {
    for &(row, col) in cells {
        assert!(
            universe.get(row, col).is_alive(),
            "expected alive at ({row}, {col})"
        );
    }
}

fn assert_dead(universe: &Universe, cells: &[(usize, usize)]) {
    for &(row, col) in cells {
        assert!(
            !universe.get(row, col).is_alive(),
            "expected dead at ({row}, {col})"
        );
    }
}

fn collect_live(universe: &Universe) -> HashSet<(usize, usize)> {
    universe.alive_cells().into_iter().collect()
}

#[test]
fn lone_cell_dies_of_underpopulation() {
    let mut universe = Universe::new(10, 10).unwrap();
    set_cells(&mut universe, &[(5, 5)]);

    universe.tick();

    assert_eq!(universe.population(), 0);
}

#[test]
fn block_is_a_still_life() {
    let mut universe = Universe::new(10, 10).unwrap();
    let block = [(4, 4), (4, 5), (5, 4), (5, 5)];
    set_cells(&mut universe, &block);

    let before = universe.clone();
    for _ in 0..5 {
        universe.tick();
        assert_eq!(universe, before);
    }
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut universe = Universe::new(10, 10).unwrap();
    let horizontal = [(5, 4), (5, 5), (5, 6)];
    let vertical = [(4, 5), (5, 5), (6, 5)];
    set_cells(&mut universe, &horizontal);

    universe.tick();
    assert_alive(&universe, &vertical);
    assert_dead(&universe, &[(5, 4), (5, 6)]);
    assert_eq!(universe.population(), 3);

    universe.tick();
    assert_alive(&universe, &horizontal);
    assert_eq!(universe.population(), 3);
}

#[test]
fn empty_universe_stays_empty() {
    let mut universe = Universe::new(16, 16).unwrap();
    for _ in 0..10 {
        universe.tick();
        assert_eq!(universe.population(), 0);
    }
}

#[test]
fn vertical_triple_becomes_horizontal() {
    // A vertical 3-cell line pivots around its center in one tick
    let mut universe = Universe::new(6, 6).unwrap();
    set_cells(&mut universe, &[(1, 3), (2, 3), (3, 3)]);

    universe.tick();

    let expected: HashSet<_> = [(2, 2), (2, 3), (2, 4)].into_iter().collect();
    assert_eq!(collect_live(&universe), expected);
}

#[test]
fn blinker_wraps_across_the_seam() {
    // Vertical blinker straddling the bottom edge of a 5x5 torus
    let mut universe = Universe::new(5, 5).unwrap();
    set_cells(&mut universe, &[(4, 2), (0, 2), (1, 2)]);

    universe.tick();
    let expected: HashSet<_> = [(0, 1), (0, 2), (0, 3)].into_iter().collect();
    assert_eq!(collect_live(&universe), expected);

    universe.tick();
    let expected: HashSet<_> = [(4, 2), (0, 2), (1, 2)].into_iter().collect();
    assert_eq!(collect_live(&universe), expected);
}

#[test]
fn glider_translates_diagonally() {
    let mut universe = Universe::new(12, 12).unwrap();
    let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    set_cells(&mut universe, &glider);

    // A glider reproduces itself one cell down-right every 4 ticks
    for _ in 0..4 {
        universe.tick();
    }

    let expected: HashSet<_> = glider
        .iter()
        .map(|&(row, col)| (row + 1, col + 1))
        .collect();
    assert_eq!(collect_live(&universe), expected);
}

#[test]
fn snapshot_length_holds_through_generations() {
    let mut universe = Universe::random(33, 17).unwrap();
    let expected = (33usize * 17).div_ceil(8);

    for _ in 0..8 {
        assert_eq!(universe.snapshot().len(), expected);
        universe.tick();
    }
    assert_eq!(universe.snapshot().len(), expected);
}

#[test]
fn serial_and_parallel_agree_on_a_dense_grid() {
    let mut universe = Universe::even_and_seven(60, 60).unwrap();
    let mut twin = universe.clone();

    for _ in 0..3 {
        universe.tick_serial();
        twin.tick_parallel();
        assert_eq!(universe, twin);
    }
}

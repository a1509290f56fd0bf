use std::collections::HashSet;

use life_core::{CellCoord, Command, Dimensions, Pattern};
use life_system_seeding::{Preset, Seeding, FIXED_SEED};
use life_world::{self as world, query, Grid};

fn seed_grid(preset: Preset, width: u32, height: u32) -> Grid {
    let mut grid = Grid::new(width, height).expect("valid grid");
    let mut seeding = Seeding::new(preset);
    let mut commands = Vec::new();
    seeding.seed(grid.dimensions(), &mut commands);

    let mut events = Vec::new();
    for command in commands {
        world::apply(&mut grid, command, &mut events);
    }
    grid
}

#[test]
fn fixed_preset_seeds_the_five_documented_cells() {
    let grid = seed_grid(Preset::Fixed, 30, 30);
    let mut expected: Vec<(u32, u32)> = FIXED_SEED.to_vec();
    expected.sort_unstable();

    assert_eq!(query::live_cells(&grid), expected);
}

#[test]
fn glider_preset_places_a_glider_at_the_origin() {
    let mut seeding = Seeding::new(Preset::Glider);
    let mut commands = Vec::new();
    seeding.seed(Dimensions::new(20, 20).expect("valid"), &mut commands);

    assert_eq!(
        commands,
        vec![Command::PlacePattern {
            pattern: Pattern::Glider,
            anchor: CellCoord::new(0, 0),
        }]
    );
}

#[test]
fn fixed_preset_is_a_glider() {
    let mut grid = seed_grid(Preset::Fixed, 30, 30);
    let before: Vec<(u32, u32)> = query::live_cells(&grid);

    for _ in 0..4 {
        let _ = grid.advance();
    }

    let after: Vec<(u32, u32)> = before.iter().map(|&(y, x)| (y + 1, x + 1)).collect();
    assert_eq!(query::live_cells(&grid), after);
}

#[test]
fn random_preset_seeds_requested_population_of_distinct_cells() {
    let mut seeding = Seeding::new(Preset::Random {
        population: Some(40),
        seed: 7,
    });
    let mut commands = Vec::new();
    seeding.seed(Dimensions::new(12, 9).expect("valid"), &mut commands);

    let cells: HashSet<CellCoord> = commands
        .iter()
        .map(|command| match command {
            Command::SetCell { cell, alive: true } => *cell,
            other => panic!("unexpected command {other:?}"),
        })
        .collect();

    assert_eq!(commands.len(), 40);
    assert_eq!(cells.len(), 40, "random cells must be distinct");
    assert!(cells.iter().all(|cell| cell.row() < 9 && cell.column() < 12));
}

#[test]
fn random_preset_is_reproducible_for_a_seed() {
    let preset = Preset::Random {
        population: None,
        seed: 0xdead_beef,
    };

    let first = seed_grid(preset, 16, 16);
    let second = seed_grid(preset, 16, 16);

    assert_eq!(query::render(&first), query::render(&second));
    assert_eq!(first.population(), 64);
}

#[test]
fn random_preset_clamps_population_to_grid_capacity() {
    let grid = seed_grid(
        Preset::Random {
            population: Some(500),
            seed: 3,
        },
        5,
        4,
    );

    assert_eq!(grid.population(), 20);
}

#[test]
fn presets_carry_source_timings() {
    assert_eq!(Preset::Fixed.default_size(), (30, 30));
    assert_eq!(Preset::Fixed.default_delay().as_millis(), 300);
    assert_eq!(Preset::Glider.default_size(), (20, 20));
    assert_eq!(Preset::Glider.default_delay().as_millis(), 100);
}

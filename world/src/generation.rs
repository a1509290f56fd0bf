//! Two-phase generation engine applying the B3/S23 life rule.

use life_core::Dimensions;

use crate::neighbors;

/// Outcome of committing a staged generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    /// Cells that were dead before the commit and alive after it.
    pub births: usize,
    /// Cells that were alive before the commit and dead after it.
    pub deaths: usize,
}

/// Evaluates the life rule for one cell.
///
/// Dead cells with exactly three live neighbors are born, cells with fewer
/// than two or more than three die, and every other cell keeps its state.
#[must_use]
pub const fn next_state(alive: bool, alive_neighbors: u8) -> bool {
    if !alive && alive_neighbors == 3 {
        true
    } else if alive_neighbors < 2 || alive_neighbors > 3 {
        false
    } else {
        alive
    }
}

/// Writes the rule outcome for every cell of `current` into `next`.
///
/// Only `current` is read, so no cell can observe a neighbor's staged state.
pub(crate) fn stage(dimensions: Dimensions, current: &[bool], next: &mut [bool]) {
    debug_assert_eq!(current.len(), dimensions.cell_count());
    debug_assert_eq!(next.len(), dimensions.cell_count());

    let width = dimensions.width() as usize;
    for (index, staged) in next.iter_mut().enumerate() {
        let alive_neighbors = neighbors::count_in(dimensions, current, index / width, index % width);
        *staged = next_state(current[index], alive_neighbors);
    }
}

/// Promotes the staged buffer to the current generation.
///
/// After the swap `next` holds the previous generation, which the following
/// stage phase overwrites in full.
pub(crate) fn commit(current: &mut Vec<bool>, next: &mut Vec<bool>) -> Transition {
    let mut transition = Transition::default();
    for (&before, &after) in current.iter().zip(next.iter()) {
        match (before, after) {
            (false, true) => transition.births += 1,
            (true, false) => transition.deaths += 1,
            _ => {}
        }
    }
    std::mem::swap(current, next);
    transition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_matches_b3_s23_table() {
        for neighbors in 0..=8 {
            assert_eq!(next_state(false, neighbors), neighbors == 3, "dead with {neighbors}");
            assert_eq!(
                next_state(true, neighbors),
                neighbors == 2 || neighbors == 3,
                "alive with {neighbors}"
            );
        }
    }

    #[test]
    fn stage_leaves_current_untouched() {
        let dimensions = Dimensions::new(3, 3).expect("valid dimensions");
        let current = vec![false, true, false, false, true, false, false, true, false];
        let snapshot = current.clone();
        let mut next = vec![false; 9];

        stage(dimensions, &current, &mut next);

        assert_eq!(current, snapshot);
        assert!(next.iter().all(|&alive| alive), "3x3 torus blinker fills the grid");
    }

    #[test]
    fn commit_counts_births_and_deaths() {
        let mut current = vec![true, true, false, false];
        let mut next = vec![true, false, true, true];

        let transition = commit(&mut current, &mut next);

        assert_eq!(transition, Transition { births: 2, deaths: 1 });
        assert_eq!(current, vec![true, false, true, true]);
    }
}

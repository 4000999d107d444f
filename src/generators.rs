//! Wall removal rules of Eller's algorithm, applied to one row at a time.
//!
//! A row starts fully walled. `process_right_walls` joins neighbouring sets, `process_down_walls` then
//! opens at least one passage from every set into the next row. When the maze ends,
//! `process_last_row` joins whatever sets remain so that the last row has no isolated regions.

use itertools::Itertools;
use rand::Rng;
use smallvec::SmallVec;

use crate::cells::Wall;
use crate::row::Row;
use crate::units::ColumnIndex;

/// Chance of opening any wall that the algorithm leaves to chance.
pub const PASSAGE_PROBABILITY: f64 = 0.5;

type ClassMembers = SmallVec<[ColumnIndex; 8]>;

/// Randomly join horizontally adjacent cells that belong to different sets.
///
/// The cells are visited left to right once, so a join is visible when deciding the next pair.
/// Cells already in the same set keep their wall, otherwise the maze would gain a loop.
pub fn process_right_walls<R: Rng + ?Sized>(row: &mut Row, rng: &mut R) {
    join_adjacent_sets(row, || rng.gen_bool(PASSAGE_PROBABILITY));
}

/// Open at least one down wall in every set of the row.
///
/// All but the last visited member of a set get a coin flip; the last member is opened for certain if
/// none of the others were.
pub fn process_down_walls<R: Rng + ?Sized>(row: &mut Row, rng: &mut R) {
    let classes = row.partition()
        .classes()
        .map(|(_, members)| members.iter().cloned().collect::<ClassMembers>())
        .collect::<Vec<_>>();

    for members in classes {
        let (last, others) = match members.split_last() {
            Some(split) => split,
            None => continue,
        };

        let mut any_opened = false;
        for &column in others {
            if rng.gen_bool(PASSAGE_PROBABILITY) {
                row.remove_wall(column, Wall::Down);
                any_opened = true;
            }
        }

        if !any_opened || rng.gen_bool(PASSAGE_PROBABILITY) {
            row.remove_wall(*last, Wall::Down);
        }
    }

    debug_assert!(row.check_partition());
}

/// Join every pair of adjacent cells still in different sets, leaving the row as one set.
pub fn process_last_row(row: &mut Row) {
    join_adjacent_sets(row, || true);
    debug_assert_eq!(row.class_count(), 1);
}

fn join_adjacent_sets<F>(row: &mut Row, mut should_join: F)
    where F: FnMut() -> bool
{
    let columns = (0..row.len()).map(ColumnIndex);

    for (left, right) in columns.tuple_windows() {
        let left_set = row.set_of(left);
        let right_set = row.set_of(right);

        if left_set != right_set && should_join() {
            row.remove_wall(left, Wall::Right);
            row.merge(left_set, right_set);
        }
    }

    debug_assert!(row.check_partition());
}

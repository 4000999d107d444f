//! One generation step of an Eller maze: the cells of a row and their disjoint set partition.

use std::fmt;

use crate::cells::{Cell, Wall};
use crate::errors::*;
use crate::partition::{FreeSetIds, RowPartition};
use crate::units::{ColumnIndex, ColumnsCount, SetId};


#[derive(Clone)]
pub struct Row {
    cells: Vec<Cell>,
    partition: RowPartition,
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Row :: columns: {:?}, classes: {:?}", self.cells.len(), self.partition.len())
    }
}

impl Row {
    /// The first row of a maze: every cell is walled in and sits alone in set `i`, `i` being its
    /// column.
    pub fn new(columns: ColumnsCount) -> Result<Row> {
        let ColumnsCount(columns_count) = columns;
        if columns_count == 0 {
            return Err(ErrorKind::ZeroColumns.into());
        }

        let mut partition = RowPartition::with_capacity(columns_count);
        let cells = (0..columns_count)
            .map(|i| {
                partition.insert(SetId(i), ColumnIndex(i));
                Cell::new(SetId(i))
            })
            .collect();

        Ok(Row { cells, partition })
    }

    /// Derive the next row from `prev_row` once its walls have been decided.
    ///
    /// A cell below an open down wall joins the set of the cell above it. Every other cell starts a
    /// new singleton set with the lowest id unused by both rows, so the two rows never disagree on
    /// what an id means.
    pub fn from_prev_row(prev_row: &Row) -> Row {
        let columns_count = prev_row.len();
        let mut partition = RowPartition::with_capacity(columns_count);
        let mut free_ids = FreeSetIds::excluding(&prev_row.partition);
        let mut cells = Vec::with_capacity(columns_count);

        for (i, above) in prev_row.cells.iter().enumerate() {
            let set_id = if above.has_wall(Wall::Down) {
                free_ids.take_lowest()
            } else {
                above.set_id()
            };
            partition.insert(set_id, ColumnIndex(i));
            cells.push(Cell::new(set_id));
        }

        let row = Row { cells, partition };
        debug_assert!(row.check_partition());
        row
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        ColumnsCount(self.cells.len())
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, column: ColumnIndex) -> Option<&Cell> {
        self.cells.get(column.0)
    }

    #[inline]
    pub fn partition(&self) -> &RowPartition {
        &self.partition
    }

    #[inline]
    pub fn class_count(&self) -> usize {
        self.partition.len()
    }

    /// The set a column belongs to. Panics if the column is outside the row.
    #[inline]
    pub fn set_of(&self, column: ColumnIndex) -> SetId {
        self.cells[column.0].set_id()
    }

    /// Open a wall of a cell, returns true if it was standing. Panics if the column is outside the row.
    ///
    /// Opening a right wall does not merge any sets, that is the caller's decision.
    pub fn remove_wall(&mut self, column: ColumnIndex, wall: Wall) -> bool {
        self.cells[column.0].remove_wall(wall)
    }

    /// Merge set `b` into set `a`.
    ///
    /// Every cell of `b` is relabelled with `a` and the key `b` leaves the partition. The cost is
    /// proportional to the size of `b` only.
    /// Returns false, changing nothing, if `a == b` or either set is not in this row.
    pub fn merge(&mut self, a: SetId, b: SetId) -> bool {
        if a == b || !self.partition.contains_set(a) {
            return false;
        }
        let moved = match self.partition.remove(b) {
            Some(members) => members,
            None => return false,
        };

        for &ColumnIndex(i) in &moved {
            self.cells[i].set_set_id(a);
        }
        self.partition.extend_class(a, moved)
    }

    /// Is the partition a true partition of this row's cells, with every cell labelled by the key of
    /// the class holding it?
    pub fn check_partition(&self) -> bool {
        let mut seen = vec![false; self.cells.len()];

        for (set_id, members) in self.partition.classes() {
            if members.is_empty() {
                return false;
            }
            for &ColumnIndex(i) in members {
                match seen.get_mut(i) {
                    Some(seen_before) if !*seen_before => *seen_before = true,
                    _ => return false,
                }
                if self.cells[i].set_id() != set_id {
                    return false;
                }
            }
        }

        seen.into_iter().all(|s| s)
    }
}

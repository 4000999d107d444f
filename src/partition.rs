//! Disjoint set bookkeeping for the cells of a single row.
//!
//! Membership is tracked by column index: a class is the list of columns whose cells share a set id.

use bit_set::BitSet;
use itertools::Itertools;

use crate::units::{ColumnIndex, SetId};
use crate::utils::{fnv_hashmap, FnvHashMap};


#[derive(Debug, Clone)]
pub struct RowPartition {
    classes: FnvHashMap<SetId, Vec<ColumnIndex>>,
}

impl RowPartition {
    pub fn with_capacity(columns: usize) -> RowPartition {
        RowPartition { classes: fnv_hashmap(columns) }
    }

    /// Number of classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    #[inline]
    pub fn contains_set(&self, set_id: SetId) -> bool {
        self.classes.contains_key(&set_id)
    }

    pub fn members(&self, set_id: SetId) -> Option<&[ColumnIndex]> {
        self.classes.get(&set_id).map(|members| members.as_slice())
    }

    /// Add a column to a class, creating the class if it does not exist yet.
    pub fn insert(&mut self, set_id: SetId, column: ColumnIndex) {
        self.classes.entry(set_id).or_insert_with(Vec::new).push(column);
    }

    /// Remove a class, returning its former members.
    pub fn remove(&mut self, set_id: SetId) -> Option<Vec<ColumnIndex>> {
        self.classes.remove(&set_id)
    }

    /// Append `columns` to an existing class. Returns false if the class does not exist.
    pub(crate) fn extend_class(&mut self, set_id: SetId, columns: Vec<ColumnIndex>) -> bool {
        if let Some(members) = self.classes.get_mut(&set_id) {
            members.extend(columns);
            true
        } else {
            false
        }
    }

    pub fn set_ids(&self) -> impl Iterator<Item = SetId> + '_ {
        self.classes.keys().cloned()
    }

    /// Classes in an arbitrary but reproducible order.
    pub fn classes(&self) -> impl Iterator<Item = (SetId, &[ColumnIndex])> + '_ {
        self.classes.iter().map(|(set_id, members)| (*set_id, members.as_slice()))
    }

    /// Set ids in ascending order.
    pub fn sorted_set_ids(&self) -> Vec<SetId> {
        self.set_ids().sorted().collect()
    }
}


/// Hands out the lowest set ids not used by either of two neighbouring rows.
///
/// Ids only ever become taken, so the lowest free id never decreases and a cursor that skips taken
/// ids finds every free id in one bounded pass over `0..taken`.
#[derive(Debug)]
pub struct FreeSetIds {
    taken: BitSet,
    cursor: usize,
}

impl FreeSetIds {
    /// Start with every id of `partition` taken.
    pub fn excluding(partition: &RowPartition) -> FreeSetIds {
        let mut taken = BitSet::with_capacity(partition.len() * 2);
        for SetId(id) in partition.set_ids() {
            taken.insert(id);
        }
        FreeSetIds { taken, cursor: 0 }
    }

    pub fn reserve(&mut self, set_id: SetId) {
        self.taken.insert(set_id.0);
    }

    #[inline]
    pub fn is_taken(&self, set_id: SetId) -> bool {
        self.taken.contains(set_id.0)
    }

    /// Take the lowest id not yet taken.
    pub fn take_lowest(&mut self) -> SetId {
        while self.taken.contains(self.cursor) {
            self.cursor += 1;
        }
        let id = self.cursor;
        self.taken.insert(id);
        SetId(id)
    }
}

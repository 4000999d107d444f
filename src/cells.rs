use crate::units::SetId;

/// The walls a cell owns. The up and left walls of a cell are the down wall of the cell above and the
/// right wall of the cell to the left.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Wall {
    Right,
    Down,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    right_wall: bool,
    down_wall: bool,
    set_id: SetId,
}

impl Cell {
    /// A fully walled in cell belonging to the set `set_id`.
    pub fn new(set_id: SetId) -> Cell {
        Cell {
            right_wall: true,
            down_wall: true,
            set_id,
        }
    }

    #[inline]
    pub fn set_id(&self) -> SetId {
        self.set_id
    }

    #[inline]
    pub(crate) fn set_set_id(&mut self, set_id: SetId) {
        self.set_id = set_id;
    }

    /// Is the wall standing (a passage is closed)?
    #[inline]
    pub fn has_wall(&self, wall: Wall) -> bool {
        match wall {
            Wall::Right => self.right_wall,
            Wall::Down => self.down_wall,
        }
    }

    /// Open a passage. Returns true if the wall was standing.
    pub fn remove_wall(&mut self, wall: Wall) -> bool {
        let standing = self.has_wall(wall);
        match wall {
            Wall::Right => self.right_wall = false,
            Wall::Down => self.down_wall = false,
        }
        standing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cells_are_walled_in() {
        let c = Cell::new(SetId(7));
        assert!(c.has_wall(Wall::Right));
        assert!(c.has_wall(Wall::Down));
        assert_eq!(c.set_id(), SetId(7));
    }

    #[test]
    fn removing_walls() {
        let mut c = Cell::new(SetId(0));
        assert!(c.remove_wall(Wall::Down));
        assert!(!c.has_wall(Wall::Down));
        assert!(c.has_wall(Wall::Right));

        // already open
        assert!(!c.remove_wall(Wall::Down));

        assert!(c.remove_wall(Wall::Right));
        assert!(!c.has_wall(Wall::Right));
    }
}

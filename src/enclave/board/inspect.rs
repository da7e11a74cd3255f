use super::groups::{Attribute, AttributeValue, ByColor, ByPattern, GroupExtremes};
use crate::enclave::prelude::*;

/// One group through an inspected cell, with what a highlight needs to draw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectedGroup {
    pub attribute: AttributeValue,
    pub cells: Vec<Coord>,
    pub enclosed: bool,

    /// Cells bordering anything outside the group, board edge included.
    pub edges: Vec<Coord>,
    pub extremes: GroupExtremes,
}

/// The colour group and the pattern group through one occupied cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupInspection {
    pub color: InspectedGroup,
    pub pattern: InspectedGroup,
}

impl GroupInspection {
    /// Whether both groups cover exactly the same cells.
    pub fn coincide(&self) -> bool {
        self.color.cells == self.pattern.cells
    }
}

impl Board {
    /// Inspects the groups through `coord`; `None` for an empty cell, an error off the board.
    pub fn inspect(&self, coord: &Coord) -> Result<Option<GroupInspection>> {
        let (Some(color), Some(pattern)) = (self.inspect_one::<ByColor>(coord)?, self.inspect_one::<ByPattern>(coord)?) else {
            return Ok(None);
        };
        Ok(Some(GroupInspection { color, pattern }))
    }

    fn inspect_one<A: Attribute>(&self, coord: &Coord) -> Result<Option<InspectedGroup>> {
        let Some((value, mut cells)) = self.find_group::<A>(coord)? else {
            return Ok(None);
        };
        cells.sort();
        let Some(extremes) = GroupExtremes::of(&cells) else {
            return Ok(None);
        };
        Ok(Some(InspectedGroup {
            attribute: A::tag(value),
            enclosed: self.is_enclosed::<A>(&cells, value),
            edges: self.group_edges(&cells),
            extremes,
            cells,
        }))
    }
}

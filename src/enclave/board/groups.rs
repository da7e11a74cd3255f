use crate::enclave::prelude::*;

/// A cell attribute that groups are formed over. Implemented once per attribute so the
/// grouping engine can be written once and instantiated for each.
pub trait Attribute {
    type Value: Copy + Eq + Ord + std::fmt::Debug;

    /// Reads the attribute off an occupied cell.
    fn get(cell: &Cell) -> Self::Value;

    /// Every value the attribute can take, in palette order.
    fn values() -> Vec<Self::Value>;

    /// Tags a value with the attribute it belongs to.
    fn tag(value: Self::Value) -> AttributeValue;
}

/// Groups cells by colour.
pub struct ByColor;

/// Groups cells by pattern.
pub struct ByPattern;

impl Attribute for ByColor {
    type Value = Color;
    fn get(cell: &Cell) -> Color {
        cell.color
    }
    fn values() -> Vec<Color> {
        Color::all().to_vec()
    }
    fn tag(value: Color) -> AttributeValue {
        AttributeValue::Color(value)
    }
}

impl Attribute for ByPattern {
    type Value = Pattern;
    fn get(cell: &Cell) -> Pattern {
        cell.pattern
    }
    fn values() -> Vec<Pattern> {
        Pattern::all().to_vec()
    }
    fn tag(value: Pattern) -> AttributeValue {
        AttributeValue::Pattern(value)
    }
}

/// An attribute together with the value a group shares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeValue {
    Color(Color),
    Pattern(Pattern),
}

impl AttributeValue {
    pub fn notate(&self) -> String {
        match self {
            AttributeValue::Color(c)   => format!("color:{}", c.notate()),
            AttributeValue::Pattern(p) => format!("pattern:{}", p.notate()),
        }
    }
}

/// Canonical identity of a group: the same cells under the same attribute value always
/// produce the same key, whatever order they were discovered in.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub attribute: AttributeValue,
    cells: Vec<Coord>,
}

impl GroupKey {
    pub fn new(attribute: AttributeValue, cells: &[Coord]) -> GroupKey {
        let mut cells = cells.to_vec();
        cells.sort();
        cells.dedup();
        GroupKey { attribute, cells }
    }

    /// The group's cells in row-major order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }
}

/// A group as seen in one snapshot of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupStatus {
    pub attribute: AttributeValue,
    pub cells: Vec<Coord>,
    pub enclosed: bool,
    pub size: usize,
}

/// Every group on the board, under both attributes, keyed canonically.
pub type GroupsStatus = BTreeMap<GroupKey, GroupStatus>;

/// The bounding rows and columns of a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupExtremes {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl GroupExtremes {
    pub fn of(cells: &[Coord]) -> Option<GroupExtremes> {
        let first = cells.first()?;
        let seed = GroupExtremes { min_row: first.row, max_row: first.row, min_col: first.col, max_col: first.col };
        Some(cells.iter().fold(seed, |e, c| GroupExtremes {
            min_row: e.min_row.min(c.row),
            max_row: e.max_row.max(c.row),
            min_col: e.min_col.min(c.col),
            max_col: e.max_col.max(c.col),
        }))
    }
}

impl Board {
    /// Finds every maximal 4-connected group of cells whose attribute equals `value`.
    ///
    /// Cells are scanned in row-major order and each group is flood-filled breadth-first
    /// from its first cell, so no cell lands in more than one group.
    pub fn find_all_groups<A: Attribute>(&self, value: A::Value) -> Vec<Vec<Coord>> {
        let mut visited = CoordSet::new(self.size);
        let mut groups = vec![];

        for start in self.coords() {
            if visited.contains(&start) || !self.matches::<A>(&start, value) {
                continue;
            }
            groups.push(self.flood::<A>(start, value, &mut visited));
        }
        groups
    }

    /// Finds the group under attribute `A` that contains `start`, if the cell is occupied.
    pub fn find_group<A: Attribute>(&self, start: &Coord) -> Result<Option<(A::Value, Vec<Coord>)>> {
        let Some(cell) = self.cell(start)? else {
            return Ok(None);
        };
        let value = A::get(&cell);
        let mut visited = CoordSet::new(self.size);
        Ok(Some((value, self.flood::<A>(*start, value, &mut visited))))
    }

    /// Determines whether a group is enclosed: every on-board neighbour of every cell is either
    /// in the group or covered with a different value. Empty neighbours, and same-valued
    /// neighbours missing from the group, leave it open. The board edge counts as a wall.
    pub fn is_enclosed<A: Attribute>(&self, group: &[Coord], value: A::Value) -> bool {
        let members = CoordSet::from_coords(self.size, group.iter());
        group.iter().all(|coord| {
            coord.neighbours(self.size).all(|n| {
                if members.contains(&n) {
                    return true;
                }
                match self.cell_unchecked(&n) {
                    None       => false,
                    Some(cell) => A::get(&cell) != value,
                }
            })
        })
    }

    /// The cells of a group that border something outside it, including the board edge.
    pub fn group_edges(&self, group: &[Coord]) -> Vec<Coord> {
        let members = CoordSet::from_coords(self.size, group.iter());
        let mut edges = group.iter().copied().filter(|coord| {
            ORTHOGONAL_OFFSETS.iter().any(|offset| {
                let n = coord + offset;
                !n.in_bounds_signed(self.size) || !members.contains(&n.coerce())
            })
        }).collect::<Vec<_>>();
        edges.sort();
        edges
    }

    /// Snapshots every colour group and every pattern group on the board with its enclosure.
    pub fn groups_status(&self) -> GroupsStatus {
        let mut status = GroupsStatus::new();
        self.collect_status::<ByColor>(&mut status);
        self.collect_status::<ByPattern>(&mut status);
        log::trace!("{} groups on the board", status.len());
        status
    }

    fn collect_status<A: Attribute>(&self, status: &mut GroupsStatus) {
        for value in A::values() {
            for group in self.find_all_groups::<A>(value) {
                let enclosed = self.is_enclosed::<A>(&group, value);
                let key = GroupKey::new(A::tag(value), &group);
                let cells = key.cells().to_vec();
                status.insert(key, GroupStatus {
                    attribute: A::tag(value),
                    size: cells.len(),
                    cells,
                    enclosed,
                });
            }
        }
    }

    fn matches<A: Attribute>(&self, coord: &Coord, value: A::Value) -> bool {
        self.cell_unchecked(coord).is_some_and(|cell| A::get(&cell) == value)
    }

    /// Breadth-first flood fill from `start` over cells sharing `value`, marking them visited.
    fn flood<A: Attribute>(&self, start: Coord, value: A::Value, visited: &mut CoordSet) -> Vec<Coord> {
        let mut group = vec![];
        let mut queue = VecDeque::from([start]);
        visited.insert(&start);

        while let Some(coord) = queue.pop_front() {
            group.push(coord);
            for n in coord.neighbours(self.size) {
                if !visited.contains(&n) && self.matches::<A>(&n, value) {
                    visited.insert(&n);
                    queue.push_back(n);
                }
            }
        }
        group
    }
}

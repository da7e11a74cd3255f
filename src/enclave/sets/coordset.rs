use crate::enclave::prelude::*;

type SubSet = u32;

/// A dense set of coordinates on a square grid, one bit per cell, one row per subset.
///
/// Grids are at most `MAX_GRID_SIZE` wide, so every row fits in a single `SubSet`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoordSet {
    size: usize,
    rows: Vec<SubSet>,
}

const _: () = assert!(MAX_GRID_SIZE <= SubSet::BITS as usize);

impl CoordSet {
    /// An empty set for a grid with the given side length.
    pub fn new(size: usize) -> CoordSet {
        CoordSet { size, rows: vec![0; size] }
    }

    /// Builds a set from any collection of in-bounds coordinates.
    pub fn from_coords<'a>(size: usize, coords: impl IntoIterator<Item = &'a Coord>) -> CoordSet {
        let mut s = CoordSet::new(size);
        coords.into_iter().for_each(|c| {
            s.insert(c);
        });
        s
    }
}

impl SetOps<Coord> for CoordSet {
    fn contains(&self, value: &Coord) -> bool {
        value.in_bounds(self.size) && (self.rows[value.row] >> value.col) & 1 == 1
    }

    fn len(&self) -> usize {
        self.rows.iter().map(|sub| sub.count_ones() as usize).sum()
    }

    fn iter(&self) -> impl Iterator<Item = Coord> {
        CoordSetIterator::new(&self.rows)
    }

    fn insert(&mut self, value: &Coord) -> &mut Self {
        debug_assert!(value.in_bounds(self.size), "coord {value} outside a {0}x{0} set", self.size);
        self.rows[value.row] |= (1 as SubSet) << value.col;
        self
    }

    fn remove(&mut self, value: &Coord) -> &mut Self {
        if value.in_bounds(self.size) {
            self.rows[value.row] &= !((1 as SubSet) << value.col);
        }
        self
    }
}

/// Walks a set in row-major order by peeling off the lowest set bit of each row.
pub struct CoordSetIterator<'a> {
    data: &'a [SubSet],
    mask: SubSet,
    current_subset: usize,
}

impl<'a> CoordSetIterator<'a> {
    pub fn new(data: &'a [SubSet]) -> CoordSetIterator<'a> {
        CoordSetIterator { data, mask: SubSet::MAX, current_subset: 0 }
    }
}

impl<'a> Iterator for CoordSetIterator<'a> {
    type Item = Coord;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_subset >= self.data.len() {
                return None;
            }

            let subject = self.data[self.current_subset] & self.mask;
            if subject == 0 {
                self.current_subset += 1;
                self.mask = SubSet::MAX;
                continue;
            }

            let tz = subject.trailing_zeros() as usize;
            self.mask ^= (1 as SubSet) << tz;
            return Some(Coord::new(self.current_subset, tz));
        }
    }
}

impl<'a> IntoIterator for &'a CoordSet {
    type IntoIter = CoordSetIterator<'a>;
    type Item = Coord;
    fn into_iter(self) -> Self::IntoIter {
        CoordSetIterator::new(&self.rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::enclave::prelude::*;

    #[test]
    fn iterate() {
        let elements = BTreeSet::from_iter([
            Coord::new(0, 0), Coord::new(0, 31), Coord::new(4, 7), Coord::new(31, 31)
        ]);

        let s = CoordSet::from_coords(32, elements.iter());
        let recovered = s.iter().collect::<BTreeSet<_>>();

        assert_eq!(elements, recovered);
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn row_major_order() {
        let s = CoordSet::from_coords(5, [Coord::new(3, 1), Coord::new(0, 4), Coord::new(3, 0)].iter());
        let ordered = s.iter().collect::<Vec<_>>();
        assert_eq!(ordered, vec![Coord::new(0, 4), Coord::new(3, 0), Coord::new(3, 1)]);
    }

    #[test]
    fn out_of_bounds_is_never_contained() {
        let mut s = CoordSet::new(4);
        s.insert(&Coord::new(3, 3));
        assert!(s.contains(&Coord::new(3, 3)));
        assert!(!s.contains(&Coord::new(3, 4)));
        assert!(!s.contains(&Coord::new(4, 3)));

        s.remove(&Coord::new(3, 3));
        assert!(s.is_empty());
    }
}

use crate::enclave::prelude::*;

/// An enum that represents the 8 orientations a shape can be placed in.
///
/// Identity refers to the null transformation, while Reflect refers to mirroring
/// the shape left-to-right. The reflection is always applied before the rotation,
/// so `ReflRot90_` is "flip, then rotate a quarter turn clockwise".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Transform {
    #[default]
    Identity__,
    Rot90_____,
    Rot180____,
    Rot270____,
    Reflect___,
    ReflRot90_,
    ReflRot180,
    ReflRot270,
}

impl Transform {
    /// Gets all transforms in canonical order: unflipped rotations, then flipped rotations.
    pub fn all() -> [Transform; 8] {
        [
            Transform::Identity__,
            Transform::Rot90_____,
            Transform::Rot180____,
            Transform::Rot270____,
            Transform::Reflect___,
            Transform::ReflRot90_,
            Transform::ReflRot180,
            Transform::ReflRot270,
        ]
    }

    /// Builds the transform for a rotation count (taken modulo 4) and a flip flag.
    pub fn from_parts(rotation: u8, flipped: bool) -> Transform {
        let index = (rotation % 4) as usize + if flipped { 4 } else { 0 };
        Transform::all()[index]
    }

    /// Applies the transform to a shape: flip first, then rotate.
    pub fn apply(&self, shape: &Shape) -> Shape {
        let mut out = if self.flipped() { shape.flip_horizontal() } else { shape.clone() };
        for _ in 0..self.rotation() {
            out = out.rotate90();
        }
        out
    }

    /// Whether the transform mirrors the shape.
    pub fn flipped(&self) -> bool {
        matches!(
            self,
            Transform::Reflect___ | Transform::ReflRot90_ | Transform::ReflRot180 | Transform::ReflRot270
        )
    }

    /// The number of clockwise quarter turns, 0 to 3.
    pub fn rotation(&self) -> u8 {
        match self {
            Transform::Identity__ | Transform::Reflect___ => 0,
            Transform::Rot90_____ | Transform::ReflRot90_ => 1,
            Transform::Rot180____ | Transform::ReflRot180 => 2,
            Transform::Rot270____ | Transform::ReflRot270 => 3,
        }
    }

    /// Returns the transform with the flip flag toggled and the rotation kept.
    pub fn reflect(&self) -> Transform {
        Transform::from_parts(self.rotation(), !self.flipped())
    }

    /// Returns the transform given by rotating this transform by another 90 degrees.
    pub fn rotate(&self) -> Transform {
        Transform::from_parts(self.rotation() + 1, self.flipped())
    }

    /// Returns the transform with the given rotation count and the flip kept.
    pub fn with_rotation(&self, rotation: u8) -> Transform {
        Transform::from_parts(rotation, self.flipped())
    }

    /// Returns the transform with the given flip flag and the rotation kept.
    pub fn with_flip(&self, flipped: bool) -> Transform {
        Transform::from_parts(self.rotation(), flipped)
    }
}

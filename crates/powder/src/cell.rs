//! Cell and Material types for the simulation grid.

use std::fmt;

use thiserror::Error;

/// Discriminant values double as the render buffer bytes and the host's
/// brush keys. Do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Material {
    Empty = 0,
    Wall = 1,
    Sand = 2,
    Water = 3,
    Oil = 4,
}

/// A material code from the host that names no material.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("unknown material code {0}")]
pub struct UnknownMaterial(pub u8);

impl Material {
    pub const ALL: [Self; 5] = [Self::Empty, Self::Wall, Self::Sand, Self::Water, Self::Oil];

    /// Sand, Water and Oil move; Empty and Wall never do.
    #[must_use]
    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Sand | Self::Water | Self::Oil)
    }

    /// Fixed display colour used by renderers.
    #[must_use]
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::Empty => [0, 0, 0],
            Self::Wall => [100, 100, 100],
            Self::Sand => [255, 230, 127],
            Self::Water => [0, 50, 255],
            Self::Oil => [130, 70, 0],
        }
    }
}

impl TryFrom<u8> for Material {
    type Error = UnknownMaterial;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(UnknownMaterial(code))
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Wall => write!(f, "Wall"),
            Self::Sand => write!(f, "Sand"),
            Self::Water => write!(f, "Water"),
            Self::Oil => write!(f, "Oil"),
        }
    }
}

/// One grid position. `settled` marks a cell that already received its
/// final state this tick; the tick loop clears it before every pass.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub material: Material,
    pub settled: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.material)
    }
}

impl From<Material> for Cell {
    fn from(material: Material) -> Self {
        Self::new(material)
    }
}

impl Cell {
    #[must_use]
    pub fn new(material: Material) -> Self {
        Self {
            material,
            settled: false,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Material::Empty)
    }

    #[must_use]
    pub fn wall() -> Self {
        Self::new(Material::Wall)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.material == Material::Empty
    }
}

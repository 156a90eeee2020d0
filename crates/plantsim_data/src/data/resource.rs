use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A resource the player supplies to the plant each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Water,
    Light,
    Nutrients,
}

impl Resource {
    /// Every resource, in the order health checks and reports visit them.
    pub const ALL: [Resource; 3] = [Resource::Water, Resource::Light, Resource::Nutrients];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Resource::Water => "water",
            Resource::Light => "light",
            Resource::Nutrients => "nutrients",
        }
    }

    /// Unit the pool is measured in.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Resource::Water => "drops",
            Resource::Light => "units",
            Resource::Nutrients => "pills",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Resource::Water => "💧",
            Resource::Light => "🌞",
            Resource::Nutrients => "💊",
        }
    }

    /// Whether the plant drains the pool when it consumes from it.
    ///
    /// Light is ambient: the plant uses it but the level the player set stays.
    #[must_use]
    pub fn is_depletable(self) -> bool {
        !matches!(self, Resource::Light)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per resource, indexable by [`Resource`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct PerResource<T> {
    pub water: T,
    pub light: T,
    pub nutrients: T,
}

impl<T> PerResource<T> {
    #[must_use]
    pub const fn new(water: T, light: T, nutrients: T) -> Self {
        Self {
            water,
            light,
            nutrients,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Resource) -> T) -> Self {
        Self {
            water: f(Resource::Water),
            light: f(Resource::Light),
            nutrients: f(Resource::Nutrients),
        }
    }

    /// Iterates `(resource, value)` pairs in [`Resource::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Resource, &T)> {
        Resource::ALL.into_iter().map(move |r| (r, &self[r]))
    }
}

impl<T> Index<Resource> for PerResource<T> {
    type Output = T;

    fn index(&self, resource: Resource) -> &T {
        match resource {
            Resource::Water => &self.water,
            Resource::Light => &self.light,
            Resource::Nutrients => &self.nutrients,
        }
    }
}

impl<T> IndexMut<Resource> for PerResource<T> {
    fn index_mut(&mut self, resource: Resource) -> &mut T {
        match resource {
            Resource::Water => &mut self.water,
            Resource::Light => &mut self.light,
            Resource::Nutrients => &mut self.nutrients,
        }
    }
}

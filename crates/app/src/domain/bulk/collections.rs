//! Collections that can be purged in bulk.

use std::{fmt, str::FromStr};

use smallvec::SmallVec;
use thiserror::Error;

/// A stored collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Orders,
    Products,
    Categories,
    Promocodes,
    About,
}

impl Collection {
    /// Every collection, in purge order.
    pub const ALL: [Self; 5] = [
        Self::Orders,
        Self::Products,
        Self::Categories,
        Self::Promocodes,
        Self::About,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Products => "products",
            Self::Categories => "categories",
            Self::Promocodes => "promocodes",
            Self::About => "about",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a purge removes: one collection or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeScope {
    One(Collection),
    All,
}

impl PurgeScope {
    #[must_use]
    pub fn collections(self) -> SmallVec<[Collection; 5]> {
        match self {
            Self::One(collection) => SmallVec::from_slice(&[collection]),
            Self::All => SmallVec::from(Collection::ALL),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown collection: {0}")]
pub struct UnknownCollection(String);

impl FromStr for PurgeScope {
    type Err = UnknownCollection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "all" {
            return Ok(Self::All);
        }

        Collection::ALL
            .into_iter()
            .find(|collection| collection.as_str() == value)
            .map(Self::One)
            .ok_or_else(|| UnknownCollection(value.to_string()))
    }
}

/// Rows deleted per collection by a purge, in purge order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeReport {
    pub deleted: SmallVec<[(Collection, u64); 5]>,
}

impl PurgeReport {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.deleted.iter().map(|(_, count)| count).sum()
    }
}

#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use enum_assoc::Assoc;
use serde::{Deserialize, Deserializer, Serialize};

use super::deserializers::de_pixels;
use crate::ThemeError;

/// Keys of every size-keyed token map, in their fixed order.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn as_str(&self) -> &'static str)]
pub enum SizeKey {
    #[assoc(as_str = "xs")]
    Xs,
    #[assoc(as_str = "sm")]
    Sm,
    #[assoc(as_str = "md")]
    Md,
    #[assoc(as_str = "lg")]
    Lg,
    #[assoc(as_str = "xl")]
    Xl,
}

impl SizeKey {
    pub const ALL: [SizeKey; 5] = [
        SizeKey::Xs,
        SizeKey::Sm,
        SizeKey::Md,
        SizeKey::Lg,
        SizeKey::Xl,
    ];
}

impl fmt::Display for SizeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeKey {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownSizeKey(s.to_owned()))
    }
}

/// A token map holding exactly one value per [`SizeKey`].
///
/// Missing or extra keys are rejected when deserializing, so consumers can
/// rely on all five entries being present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SizeScale<T> {
    pub xs: T,
    pub sm: T,
    pub md: T,
    pub lg: T,
    pub xl: T,
}

impl<T> SizeScale<T> {
    pub fn get(&self, key: SizeKey) -> &T {
        &self[key]
    }

    /// Iterates entries in `xs, sm, md, lg, xl` order.
    pub fn iter(&self) -> impl Iterator<Item = (SizeKey, &T)> {
        SizeKey::ALL.into_iter().map(move |key| (key, &self[key]))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> SizeScale<U> {
        SizeScale {
            xs: f(&self.xs),
            sm: f(&self.sm),
            md: f(&self.md),
            lg: f(&self.lg),
            xl: f(&self.xl),
        }
    }
}

impl<T> Index<SizeKey> for SizeScale<T> {
    type Output = T;

    fn index(&self, key: SizeKey) -> &T {
        match key {
            SizeKey::Xs => &self.xs,
            SizeKey::Sm => &self.sm,
            SizeKey::Md => &self.md,
            SizeKey::Lg => &self.lg,
            SizeKey::Xl => &self.xl,
        }
    }
}

impl<T> IndexMut<SizeKey> for SizeScale<T> {
    fn index_mut(&mut self, key: SizeKey) -> &mut T {
        match key {
            SizeKey::Xs => &mut self.xs,
            SizeKey::Sm => &mut self.sm,
            SizeKey::Md => &mut self.md,
            SizeKey::Lg => &mut self.lg,
            SizeKey::Xl => &mut self.xl,
        }
    }
}

/// A whole number of CSS pixels.
///
/// Serialized as a bare integer. Also accepts strings such as `"12px"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Px(pub u32);

#[inline]
pub const fn px(value: u32) -> Px {
    Px(value)
}

impl Px {
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl<'de> Deserialize<'de> for Px {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        de_pixels(deserializer)
    }
}

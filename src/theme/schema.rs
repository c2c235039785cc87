use std::{fmt, fs, ops::Deref, path::Path, sync::LazyLock};

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, IgnoredAny, MapAccess, Visitor},
};
use smallvec::SmallVec;
use tracing::debug;

use super::{
    ColorFamily, CssLength, HexColor, Loader, Px, SizeKey, SizeScale,
    deserializers::{
        de_css_length, de_font_stack, de_line_height, de_non_empty_string, de_primary_shade,
        parse_css_length,
    },
    overrides::merge_json,
};
use crate::ThemeError;

/// The full set of visual design tokens applied across the interface.
///
/// Serializes to the camelCase document shape the styling engine binds to,
/// with fields in the same order as declared here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Theme {
    /// Index into a color family's ten-step shade scale.
    #[serde(deserialize_with = "de_primary_shade")]
    pub primary_shade: u8,
    pub loader: Loader,
    pub white: HexColor,
    pub black: HexColor,
    /// Key into [`Theme::radius`].
    pub default_radius: SizeKey,
    pub primary_color: ColorFamily,
    #[serde(deserialize_with = "de_line_height")]
    pub line_height: f64,
    #[serde(deserialize_with = "de_font_stack")]
    pub font_family: String,
    pub shadows: SizeScale<String>,
    pub font_sizes: SizeScale<Px>,
    pub radius: SizeScale<Px>,
    pub spacing: SizeScale<Px>,
    pub breakpoints: SizeScale<Px>,
    pub headings: HeadingsConfig,
    /// Extra tokens defined by consumers.
    pub other: ThemeOther,
    #[serde(deserialize_with = "de_non_empty_string")]
    pub dates_locale: String,
    #[serde(rename = "fn")]
    pub functions: ThemeFunctions,
}

pub type ThemeOther = IndexMap<String, serde_json::Value>;

/// Reserved slot for theme-derived helpers. Always an empty mapping.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ThemeFunctions {}

impl<'de> Deserialize<'de> for ThemeFunctions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EmptyMap;

        impl<'de> Visitor<'de> for EmptyMap {
            type Value = ThemeFunctions;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an empty map")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                match map.next_key::<String>()? {
                    Some(key) => {
                        map.next_value::<IgnoredAny>()?;
                        Err(de::Error::unknown_field(&key, &[]))
                    }
                    None => Ok(ThemeFunctions {}),
                }
            }
        }

        deserializer.deserialize_map(EmptyMap)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeadingsConfig {
    #[serde(deserialize_with = "de_font_stack")]
    pub font_family: String,
    pub sizes: HeadingSizes,
}

impl HeadingsConfig {
    pub fn font_families(&self) -> SmallVec<[&str; 8]> {
        split_font_stack(&self.font_family)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HeadingSizes {
    pub h1: HeadingStyle,
    pub h2: HeadingStyle,
    pub h3: HeadingStyle,
    pub h4: HeadingStyle,
    pub h5: HeadingStyle,
    pub h6: HeadingStyle,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeadingStyle {
    /// CSS length, kept verbatim (e.g. `"1.3333rem"`).
    #[serde(deserialize_with = "de_css_length")]
    pub font_size: String,
}

impl HeadingStyle {
    pub fn length(&self) -> Option<CssLength> {
        parse_css_length(&self.font_size)
    }

    pub fn rems(&self) -> Option<f32> {
        match self.length()? {
            CssLength::Rems(rems) => Some(rems),
            CssLength::Pixels(_) => None,
        }
    }

    /// Font size in pixels given the root font size `base`.
    pub fn pixels(&self, base: f32) -> Option<f32> {
        match self.length()? {
            CssLength::Rems(rems) => Some(rems * base),
            CssLength::Pixels(pixels) => Some(pixels),
        }
    }
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLockTheme = LazyLockTheme::new(|| {
                Theme::from_string(include_str!($path))
                    .expect(concat!("bundled theme ", $path, " is valid"))
            });
        )+
    };
}

/// A bundled theme, parsed on first access and shared read-only afterwards.
pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

generate_builtin_themes!(["../../themes/default.json", DEFAULT_THEME]);

impl Theme {
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Theme, ThemeError> {
        let path = path.as_ref();
        debug!(?path, "Loading theme");

        let bytes = fs::read(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_slice(&bytes)
    }

    pub fn to_json_string(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns a copy of this theme with `overrides` deep-merged on top.
    ///
    /// Objects merge key by key; any other value replaces what was there.
    /// The merged document is validated like a freshly loaded theme.
    pub fn with_overrides(&self, overrides: serde_json::Value) -> Result<Theme, ThemeError> {
        let overrides = match overrides {
            serde_json::Value::Object(overrides) => overrides,
            other => return Err(ThemeError::InvalidOverride(json_kind(&other))),
        };

        debug!(keys = overrides.len(), "Applying theme overrides");

        let mut document = serde_json::to_value(self)?;
        merge_json(&mut document, serde_json::Value::Object(overrides));

        Ok(serde_json::from_value(document)?)
    }

    pub fn default_radius_px(&self) -> Px {
        self.radius[self.default_radius]
    }

    pub fn font_families(&self) -> SmallVec<[&str; 8]> {
        split_font_stack(&self.font_family)
    }
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME.clone()
    }
}

fn split_font_stack(stack: &str) -> SmallVec<[&str; 8]> {
    stack
        .split(',')
        .map(str::trim)
        .filter(|family| !family.is_empty())
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

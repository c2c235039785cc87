use std::borrow::Cow;

use anyhow::Result;
use rust_embed::RustEmbed;
use tracing::info;

use crate::{AssetProvider, ThemeError, theme::Theme};

/// Theme documents bundled with the crate.
#[derive(RustEmbed)]
#[folder = "themes/"]
#[include = "*.json"]
#[exclude = "*.DS_Store"]
pub struct ThemeAssets;

impl AssetProvider for ThemeAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|f| f.data)
    }

    fn list(&self, path: &str) -> Result<Vec<String>> {
        Ok(ThemeAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into_owned()))
            .collect())
    }
}

impl Theme {
    /// Loads the bundled theme document `{name}.json`.
    pub fn builtin(name: &str) -> Result<Theme, ThemeError> {
        let path = format!("{name}.json");

        let bytes = crate::assets![ThemeAssets]
            .load(&path)
            .ok()
            .flatten()
            .ok_or_else(|| ThemeError::MissingAsset(name.to_owned()))?;

        info!(name, "Loading bundled theme");
        Theme::from_slice(&bytes)
    }

    /// Names accepted by [`Theme::builtin`], sorted.
    pub fn builtin_names() -> Vec<String> {
        let mut names: Vec<String> = ThemeAssets
            .list("")
            .unwrap_or_default()
            .into_iter()
            .filter_map(|path| path.strip_suffix(".json").map(str::to_owned))
            .collect();
        names.sort();
        names
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::controls::{LayoutMode, ViewSize};

/// Configuration from clips.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipsConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub tags: TagsConfig,
    #[serde(default)]
    pub collections: CollectionsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub layout: LayoutMode,
    #[serde(default)]
    pub view_size: ViewSize,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Light theme overrides, `name = "#RRGGBB"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Dark theme overrides
    #[serde(default)]
    pub dark_colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            dark_mode: false,
            layout: LayoutMode::default(),
            view_size: ViewSize::default(),
            show_key_hints: true,
            colors: HashMap::new(),
            dark_colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsConfig {
    /// Offered while typing a new tag in the detail dialog
    #[serde(default = "default_suggested_tags")]
    pub suggested: Vec<String>,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            suggested: default_suggested_tags(),
        }
    }
}

fn default_suggested_tags() -> Vec<String> {
    [
        "Web",
        "UI",
        "Logo",
        "Typography",
        "配色",
        "レイアウト",
        "モダン",
        "ミニマル",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionsConfig {
    /// Folder labels selectable in the detail dialog
    #[serde(default = "default_collection_names")]
    pub names: Vec<String>,
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        CollectionsConfig {
            names: default_collection_names(),
        }
    }
}

fn default_collection_names() -> Vec<String> {
    ["LPデザイン集", "ロゴアイデア", "UI参考", "配色サンプル"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

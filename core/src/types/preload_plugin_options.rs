use std::collections::HashMap;

use ahash::RandomState;
use serde::Deserialize;

/// Options as written in a build config. Every field is optional; see
/// [crate::NormalizedPreloadOptions] for the resolved defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreloadPluginOptions {
  pub rel: Option<String>,
  pub include: Option<IncludeOption>,
  #[serde(rename = "as")]
  pub as_value: Option<AsOption>,
  pub file_whitelist: Option<Vec<String>>,
  pub file_blacklist: Option<Vec<String>>,
  pub include_html_names: Option<Vec<String>>,
  pub exclude_html_names: Option<Vec<String>>,
  pub append_hash: bool,
}

// include: 'allChunks'
// include: ['home', 'about']
// include: { type: 'asyncChunks', entries: ['app'] }
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IncludeOption {
  Type(String),
  Chunks(Vec<String>),
  Detailed {
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    chunks: Option<Vec<String>>,
    #[serde(default)]
    entries: Option<Vec<String>>,
  },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AsOption {
  Fixed(String),
  ByExtension(HashMap<String, String, RandomState>),
}

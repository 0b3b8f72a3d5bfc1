use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChunkAsset {
  pub entry: String,
  pub css: Vec<String>,
  pub size: u64,
  pub hash: String,
}

/// Assets the HTML generator already decided to reference from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HtmlAssets {
  pub public_path: String,
  pub js: Vec<String>,
  pub css: Vec<String>,
  pub chunks: LinkedHashMap<String, ChunkAsset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlTag {
  pub tag_name: SmolStr,
  #[serde(default)]
  pub attributes: LinkedHashMap<String, String>,
  #[serde(default)]
  pub void_tag: bool,
}

impl HtmlTag {
  pub fn link(attributes: LinkedHashMap<String, String>) -> Self {
    Self {
      tag_name: SmolStr::new("link"),
      attributes,
      void_tag: true,
    }
  }

  #[inline]
  pub fn attribute(&self, name: &str) -> Option<&str> {
    self.attributes.get(name).map(|value| value.as_str())
  }
}

/// One generated HTML page, as handed over by the HTML generator for a single pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HtmlDocument {
  pub output_name: String,
  pub assets: HtmlAssets,
  pub head: Vec<HtmlTag>,
  pub body: Vec<HtmlTag>,
}

impl HtmlDocument {
  pub fn new(output_name: impl Into<String>) -> Self {
    Self {
      output_name: output_name.into(),
      ..Default::default()
    }
  }
}

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ahash::RandomState;
use regex::Regex;
use smol_str::SmolStr;

use super::{AsOption, IncludeOption, PreloadPluginOptions};
use crate::error::{PreloadError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rel {
  #[default]
  Preload,
  Prefetch,
}

impl Rel {
  #[inline]
  pub fn as_str(&self) -> &'static str {
    match self {
      Rel::Preload => "preload",
      Rel::Prefetch => "prefetch",
    }
  }
}

impl FromStr for Rel {
  type Err = PreloadError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "preload" => Ok(Rel::Preload),
      "prefetch" => Ok(Rel::Prefetch),
      _ => Err(PreloadError::UnknownRel(s.to_owned())),
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IncludeType {
  #[default]
  AsyncChunks,
  Initial,
  AllChunks,
  AllAssets,
}

impl FromStr for IncludeType {
  type Err = PreloadError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "asyncChunks" => Ok(IncludeType::AsyncChunks),
      "initial" => Ok(IncludeType::Initial),
      "allChunks" => Ok(IncludeType::AllChunks),
      "allAssets" => Ok(IncludeType::AllAssets),
      _ => Err(PreloadError::UnknownInclude(s.to_owned())),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Include {
  pub kind: IncludeType,
  pub chunks: Option<Vec<SmolStr>>,
  pub entries: Option<Vec<SmolStr>>,
}

impl Include {
  pub fn of_type(kind: IncludeType) -> Self {
    Self {
      kind,
      ..Default::default()
    }
  }
}

impl TryFrom<IncludeOption> for Include {
  type Error = PreloadError;

  fn try_from(option: IncludeOption) -> Result<Self> {
    let to_names = |names: Vec<String>| names.into_iter().map(SmolStr::from).collect::<Vec<_>>();
    match option {
      IncludeOption::Type(kind) => Ok(Include::of_type(kind.parse()?)),
      IncludeOption::Chunks(chunks) => Ok(Include {
        chunks: Some(to_names(chunks)),
        ..Default::default()
      }),
      IncludeOption::Detailed {
        kind,
        chunks,
        entries,
      } => Ok(Include {
        kind: kind
          .map(|kind| kind.parse::<IncludeType>())
          .transpose()?
          .unwrap_or_default(),
        chunks: chunks.map(to_names),
        entries: entries.map(to_names),
      }),
    }
  }
}

pub type AsResolver = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

#[derive(Clone, Default)]
pub enum AsPolicy {
  #[default]
  Default,
  Fixed(String),
  ByExtension(HashMap<String, String, RandomState>),
  Custom(AsResolver),
}

impl fmt::Debug for AsPolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AsPolicy::Default => write!(f, "Default"),
      AsPolicy::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
      AsPolicy::ByExtension(map) => f.debug_tuple("ByExtension").field(map).finish(),
      AsPolicy::Custom(_) => write!(f, "Custom(..)"),
    }
  }
}

impl From<AsOption> for AsPolicy {
  fn from(option: AsOption) -> Self {
    match option {
      AsOption::Fixed(value) => AsPolicy::Fixed(value),
      AsOption::ByExtension(map) => AsPolicy::ByExtension(
        map
          .into_iter()
          .map(|(ext, value)| (ext.trim_start_matches('.').to_ascii_lowercase(), value))
          .collect(),
      ),
    }
  }
}

#[derive(Debug, Clone, Default)]
pub struct NormalizedPreloadOptions {
  pub rel: Rel,
  pub include: Include,
  pub as_policy: AsPolicy,
  pub file_whitelist: Option<Vec<Regex>>,
  pub file_blacklist: Option<Vec<Regex>>,
  pub include_html_names: Option<Vec<String>>,
  pub exclude_html_names: Option<Vec<String>>,
  pub append_hash: bool,
}

fn compile_patterns(patterns: Option<Vec<String>>) -> Result<Option<Vec<Regex>>> {
  patterns
    .map(|patterns| {
      patterns
        .into_iter()
        .map(|pattern| {
          Regex::new(&pattern).map_err(|source| PreloadError::InvalidPattern { pattern, source })
        })
        .collect::<Result<Vec<_>>>()
    })
    .transpose()
}

impl TryFrom<PreloadPluginOptions> for NormalizedPreloadOptions {
  type Error = PreloadError;

  fn try_from(options: PreloadPluginOptions) -> Result<Self> {
    Ok(Self {
      rel: options
        .rel
        .as_deref()
        .map(Rel::from_str)
        .transpose()?
        .unwrap_or_default(),
      include: options
        .include
        .map(Include::try_from)
        .transpose()?
        .unwrap_or_default(),
      as_policy: options.as_value.map(AsPolicy::from).unwrap_or_default(),
      file_whitelist: compile_patterns(options.file_whitelist)?,
      file_blacklist: compile_patterns(options.file_blacklist)?,
      include_html_names: options.include_html_names,
      exclude_html_names: options.exclude_html_names,
      append_hash: options.append_hash,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn normalize(json: &str) -> Result<NormalizedPreloadOptions> {
    let options: PreloadPluginOptions = serde_json::from_str(json)?;
    NormalizedPreloadOptions::try_from(options)
  }

  #[test]
  fn defaults() {
    let options = normalize("{}").unwrap();
    assert_eq!(options.rel, Rel::Preload);
    assert_eq!(options.include, Include::of_type(IncludeType::AsyncChunks));
    assert!(matches!(options.as_policy, AsPolicy::Default));
    assert!(options.file_whitelist.is_none());
    assert!(options.file_blacklist.is_none());
    assert!(!options.append_hash);
  }

  #[test]
  fn include_forms() {
    let options = normalize(r#"{ "include": "allAssets" }"#).unwrap();
    assert_eq!(options.include.kind, IncludeType::AllAssets);

    let options = normalize(r#"{ "include": ["home", "about"] }"#).unwrap();
    assert_eq!(options.include.kind, IncludeType::AsyncChunks);
    assert_eq!(
      options.include.chunks,
      Some(vec![SmolStr::from("home"), SmolStr::from("about")])
    );

    let options = normalize(r#"{ "include": { "type": "initial", "entries": ["app"] } }"#).unwrap();
    assert_eq!(options.include.kind, IncludeType::Initial);
    assert_eq!(options.include.entries, Some(vec![SmolStr::from("app")]));
    assert_eq!(options.include.chunks, None);
  }

  #[test]
  fn as_forms() {
    let options = normalize(r#"{ "rel": "preload", "as": "fetch" }"#).unwrap();
    assert!(matches!(options.as_policy, AsPolicy::Fixed(ref value) if value == "fetch"));

    let options = normalize(r#"{ "as": { ".SVG": "image" } }"#).unwrap();
    match options.as_policy {
      AsPolicy::ByExtension(map) => assert_eq!(map.get("svg").map(String::as_str), Some("image")),
      other => panic!("unexpected policy {:?}", other),
    }
  }

  #[test]
  fn rejects_unknown_values() {
    assert!(matches!(
      normalize(r#"{ "rel": "prerender" }"#),
      Err(PreloadError::UnknownRel(rel)) if rel == "prerender"
    ));
    assert!(matches!(
      normalize(r#"{ "include": "everything" }"#),
      Err(PreloadError::UnknownInclude(kind)) if kind == "everything"
    ));
    assert!(matches!(
      normalize(r#"{ "fileBlacklist": ["(unclosed"] }"#),
      Err(PreloadError::InvalidPattern { pattern, .. }) if pattern == "(unclosed"
    ));
  }
}

use std::collections::HashMap;

use ahash::RandomState;
use once_cell::sync::Lazy;

use crate::types::AsPolicy;

static DEFAULT_AS_BY_EXTENSION: Lazy<HashMap<&'static str, &'static str, RandomState>> =
  Lazy::new(|| {
    let mut map = HashMap::default();
    map.insert("css", "style");
    ["js", "mjs"].into_iter().for_each(|ext| {
      map.insert(ext, "script");
    });
    ["woff", "woff2", "ttf", "eot", "otf"]
      .into_iter()
      .for_each(|ext| {
        map.insert(ext, "font");
      });
    [
      "png", "jpg", "jpeg", "gif", "svg", "webp", "ico", "avif", "bmp",
    ]
    .into_iter()
    .for_each(|ext| {
      map.insert(ext, "image");
    });
    map
  });

/// Lower-cased extension of an output file, ignoring any query string or fragment.
pub fn extension(file: &str) -> Option<String> {
  let path = strip_query(file);
  let name = path.rsplit('/').next().unwrap_or(path);
  match name.rfind('.') {
    Some(dot) if dot + 1 < name.len() => Some(name[dot + 1..].to_ascii_lowercase()),
    _ => None,
  }
}

#[inline]
pub fn strip_query(file: &str) -> &str {
  match file.find(['?', '#']) {
    Some(end) => &file[..end],
    None => file,
  }
}

fn default_as(file: &str) -> Option<String> {
  extension(file)
    .and_then(|ext| DEFAULT_AS_BY_EXTENSION.get(ext.as_str()).copied())
    .map(|value| value.to_owned())
}

/// Value of the `as` attribute of a preload link for `file`.
pub fn resolve_as(policy: &AsPolicy, file: &str) -> Option<String> {
  match policy {
    AsPolicy::Default => default_as(file),
    AsPolicy::Fixed(value) => Some(value.clone()),
    AsPolicy::ByExtension(map) => extension(file)
      .and_then(|ext| map.get(&ext).cloned())
      .or_else(|| default_as(file)),
    AsPolicy::Custom(resolver) => resolver(file),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Arc;

  #[test]
  fn extension_ignores_query_and_directories() {
    assert_eq!(extension("static/app.2f3a.CSS?v=1"), Some("css".to_owned()));
    assert_eq!(extension("fonts.v2/icons#iefix"), None);
    assert_eq!(extension("icons.svg#logo?x=1.png"), Some("svg".to_owned()));
    assert_eq!(extension("trailing."), None);
    assert_eq!(extension("font.woff2"), Some("woff2".to_owned()));
  }

  #[test]
  fn default_policy() {
    let policy = AsPolicy::Default;
    assert_eq!(resolve_as(&policy, "main.css").as_deref(), Some("style"));
    assert_eq!(resolve_as(&policy, "main.js").as_deref(), Some("script"));
    assert_eq!(resolve_as(&policy, "font.woff2").as_deref(), Some("font"));
    assert_eq!(resolve_as(&policy, "font.eot?#iefix").as_deref(), Some("font"));
    assert_eq!(resolve_as(&policy, "logo.svg").as_deref(), Some("image"));
    assert_eq!(resolve_as(&policy, "main.js.map"), None);
    assert_eq!(resolve_as(&policy, "LICENSE"), None);
  }

  #[test]
  fn extension_map_falls_back_to_default() {
    let mut map = HashMap::default();
    map.insert("json".to_owned(), "fetch".to_owned());
    let policy = AsPolicy::ByExtension(map);
    assert_eq!(resolve_as(&policy, "data.json").as_deref(), Some("fetch"));
    assert_eq!(resolve_as(&policy, "main.css").as_deref(), Some("style"));
    assert_eq!(resolve_as(&policy, "data.bin"), None);
  }

  #[test]
  fn fixed_and_custom_policies() {
    let fixed = AsPolicy::Fixed("script".to_owned());
    assert_eq!(resolve_as(&fixed, "main.css").as_deref(), Some("script"));

    let custom = AsPolicy::Custom(Arc::new(|file: &str| {
      file.ends_with(".wasm").then(|| "fetch".to_owned())
    }));
    assert_eq!(resolve_as(&custom, "app.wasm").as_deref(), Some("fetch"));
    assert_eq!(resolve_as(&custom, "app.js"), None);
  }
}

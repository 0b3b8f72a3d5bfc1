use std::sync::Arc;

use crate::error::Result;
use crate::links::build_links;
use crate::plugin_driver::{HookContext, HookShape, Plugin};
use crate::types::{
  AsPolicy, Compilation, HtmlDocument, HtmlTag, NormalizedPreloadOptions, PreloadPluginOptions,
};
use crate::utils::merge_chunk_assets;

pub struct Preload {
  options: NormalizedPreloadOptions,
}

/// # Example
/// ```no_run
/// let preload = rolldown_plugin_preload::plugin::preload::new(Default::default()).unwrap();
/// ```
pub fn new(options: PreloadPluginOptions) -> Result<Preload> {
  Ok(Preload {
    options: NormalizedPreloadOptions::try_from(options)?,
  })
}

pub fn from_json(options: &str) -> Result<Preload> {
  new(serde_json::from_str(options)?)
}

impl Preload {
  pub fn options(&self) -> &NormalizedPreloadOptions {
    &self.options
  }

  /// Resolves `as` with a custom function instead of the configured policy.
  pub fn with_as_resolver<F>(mut self, resolver: F) -> Self
  where
    F: Fn(&str) -> Option<String> + Send + Sync + 'static,
  {
    self.options.as_policy = AsPolicy::Custom(Arc::new(resolver));
    self
  }

  pub fn is_skipped(&self, document: &HtmlDocument) -> bool {
    let name = document.output_name.as_str();
    let not_included = self
      .options
      .include_html_names
      .as_ref()
      .is_some_and(|names| !names.iter().any(|n| n == name));
    let excluded = self
      .options
      .exclude_html_names
      .as_ref()
      .is_some_and(|names| names.iter().any(|n| n == name));
    not_included || excluded
  }

  pub fn generate_links(&self, compilation: &Compilation, document: &HtmlDocument) -> Vec<HtmlTag> {
    build_links(compilation, document, &self.options)
  }
}

impl Plugin for Preload {
  fn get_name(&self) -> &'static str {
    "preload"
  }

  fn before_html_processing(
    &self,
    ctx: &HookContext<'_>,
    document: &mut HtmlDocument,
  ) -> Option<Vec<HtmlTag>> {
    if ctx.shape == HookShape::AssetTagGroups {
      merge_chunk_assets(document, ctx.compilation);
    }

    if self.is_skipped(document) {
      log::debug!("skip {}", document.output_name);
      return None;
    }

    let links = self.generate_links(ctx.compilation, document);
    log::debug!("{} resource hint(s) for {}", links.len(), document.output_name);
    Some(links)
  }

  fn alter_asset_tags(
    &self,
    _ctx: &HookContext<'_>,
    document: &mut HtmlDocument,
    pending: Option<Vec<HtmlTag>>,
  ) {
    if self.is_skipped(document) {
      return;
    }
    if let Some(mut links) = pending {
      links.append(&mut document.head);
      document.head = links;
    }
  }
}

use crate::types::{Compilation, HtmlDocument, HtmlTag};

/// The two hook layouts HTML generators have shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookShape {
  /// `beforeHtmlProcessing` / `alterAssetTags`, chunk assets provided by the generator.
  Legacy,
  /// `beforeAssetTagGeneration` / `alterAssetTagGroups`, chunk assets left to plugins.
  AssetTagGroups,
}

impl HookShape {
  pub fn probe(html_plugin_version: &str) -> Self {
    let major = html_plugin_version
      .trim()
      .trim_start_matches(['v', '^', '~', '='])
      .split(|c: char| !c.is_ascii_digit())
      .next()
      .and_then(|major| major.parse::<u32>().ok());

    match major {
      Some(major) if major >= 4 => HookShape::AssetTagGroups,
      Some(_) => HookShape::Legacy,
      None => {
        log::warn!(
          "Unable to read HTML plugin version {:?}, assuming legacy hooks",
          html_plugin_version
        );
        HookShape::Legacy
      }
    }
  }
}

pub struct HookContext<'a> {
  pub shape: HookShape,
  pub compilation: &'a Compilation,
}

pub struct PluginDriver {
  pub shape: HookShape,
  pub plugins: Vec<Box<dyn Plugin>>,
}

impl PluginDriver {
  pub fn new(html_plugin_version: &str) -> Self {
    Self::with_shape(HookShape::probe(html_plugin_version))
  }

  pub fn with_shape(shape: HookShape) -> Self {
    Self {
      shape,
      plugins: vec![],
    }
  }

  pub fn add_plugin(&mut self, plugin: Box<dyn Plugin>) -> &mut Self {
    log::debug!("add plugin {} with {:?} hooks", plugin.get_name(), self.shape);
    self.plugins.push(plugin);
    self
  }
}

impl PluginDriver {
  /// Runs one document through both hooks. Each plugin's after hook receives exactly
  /// what its own before hook returned for this document.
  pub fn process(&self, compilation: &Compilation, document: &mut HtmlDocument) {
    let ctx = HookContext {
      shape: self.shape,
      compilation,
    };

    // sequential
    let pending = self
      .plugins
      .iter()
      .map(|plugin| plugin.before_html_processing(&ctx, document))
      .collect::<Vec<_>>();

    // sequential
    self
      .plugins
      .iter()
      .zip(pending)
      .for_each(|(plugin, pending)| plugin.alter_asset_tags(&ctx, document, pending));
  }

  /// Documents are handled strictly one after another.
  pub fn process_all(&self, compilation: &Compilation, documents: &mut [HtmlDocument]) {
    documents
      .iter_mut()
      .for_each(|document| self.process(compilation, document))
  }
}

pub trait Plugin {
  fn get_name(&self) -> &'static str;

  #[inline]
  fn before_html_processing(
    &self,
    _ctx: &HookContext<'_>,
    _document: &mut HtmlDocument,
  ) -> Option<Vec<HtmlTag>> {
    None
  }

  #[inline]
  fn alter_asset_tags(
    &self,
    _ctx: &HookContext<'_>,
    _document: &mut HtmlDocument,
    _pending: Option<Vec<HtmlTag>>,
  ) {
  }
}

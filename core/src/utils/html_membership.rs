use std::collections::HashSet;

use ahash::RandomState;

use crate::types::{Chunk, Compilation, HtmlDocument};
use crate::utils::{strip_query, ChunkGroupGraph};

/// Files and chunk hashes one HTML document already pulls in.
#[derive(Debug, Default)]
pub struct HtmlReferences {
  pub files: HashSet<String, RandomState>,
  pub hashes: HashSet<String, RandomState>,
}

impl HtmlReferences {
  pub fn collect(document: &HtmlDocument, compilation: &Compilation) -> Self {
    let assets = &document.assets;
    // the generator may render urls with its own public path
    let public_paths = [assets.public_path.as_str(), compilation.public_path()];
    let normalize = |url: &str| {
      let url = strip_query(url);
      public_paths
        .iter()
        .filter(|public_path| !public_path.is_empty())
        .find_map(|public_path| url.strip_prefix(public_path))
        .unwrap_or(url)
        .to_owned()
    };

    let files = assets
      .js
      .iter()
      .chain(assets.css.iter())
      .chain(assets.chunks.values().flat_map(|chunk| {
        std::iter::once(&chunk.entry)
          .filter(|entry| !entry.is_empty())
          .chain(chunk.css.iter())
      }))
      .map(|url| normalize(url.as_str()))
      .collect();
    let hashes = assets
      .chunks
      .values()
      .map(|chunk| chunk.hash.clone())
      .filter(|hash| !hash.is_empty())
      .collect();

    Self { files, hashes }
  }

  #[inline]
  fn references_chunk(&self, chunk: &Chunk) -> bool {
    (!chunk.hash.is_empty() && self.hashes.contains(&chunk.hash))
      || chunk.files.iter().any(|file| self.files.contains(file))
  }
}

/// Whether `chunk` is loaded by the document: either one of its files is referenced
/// directly, or one of its chunk groups descends from a group the document references.
pub fn does_chunk_belong_to_html(
  chunk: &Chunk,
  compilation: &Compilation,
  references: &HtmlReferences,
  group_graph: &ChunkGroupGraph,
) -> bool {
  if chunk.files.iter().any(|file| references.files.contains(file)) {
    return true;
  }

  let is_root_group = |group: usize| {
    compilation.chunk_groups.get(group).is_some_and(|group| {
      group
        .chunks
        .iter()
        .filter_map(|index| compilation.chunk(*index))
        .any(|member| references.references_chunk(member))
    })
  };

  chunk
    .groups
    .iter()
    .flat_map(|group| group_graph.ancestors(*group))
    .any(is_root_group)
}

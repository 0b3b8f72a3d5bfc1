use linked_hash_map::LinkedHashMap;

use crate::types::{ChunkAsset, Compilation, HtmlDocument};
use crate::utils::extension;

/// Chunk name -> asset info for every initial chunk of every entrypoint, the shape older
/// HTML generators handed over on their own.
pub fn synthesize_chunk_assets(compilation: &Compilation) -> LinkedHashMap<String, ChunkAsset> {
  let public_path = compilation.public_path();
  let mut chunk_assets = LinkedHashMap::new();

  compilation
    .stats()
    .entrypoints
    .iter()
    .flat_map(|(_, chunks)| chunks.iter())
    .for_each(|chunk| {
      let name = match chunk.display_name() {
        Some(name) => name.to_owned(),
        None => chunk.id.to_string(),
      };
      if chunk_assets.contains_key(&name) {
        return;
      }
      let has_extension = |file: &str, expected: &str| extension(file).as_deref() == Some(expected);
      let entry = chunk
        .files
        .iter()
        .find(|file| has_extension(file.as_str(), "js"))
        .map(|file| format!("{}{}", public_path, file))
        .unwrap_or_default();
      let css = chunk
        .files
        .iter()
        .filter(|file| has_extension(file.as_str(), "css"))
        .map(|file| format!("{}{}", public_path, file))
        .collect();

      chunk_assets.insert(
        name,
        ChunkAsset {
          entry,
          css,
          size: chunk.size,
          hash: chunk.hash.clone(),
        },
      );
    });

  chunk_assets
}

/// Adds synthesized entries without replacing anything the host already provided.
pub fn merge_chunk_assets(document: &mut HtmlDocument, compilation: &Compilation) {
  synthesize_chunk_assets(compilation)
    .into_iter()
    .for_each(|(name, asset)| {
      if !document.assets.chunks.contains_key(&name) {
        log::debug!("synthesized chunk asset {} -> {:?}", name, asset.entry);
        document.assets.chunks.insert(name, asset);
      }
    });
}

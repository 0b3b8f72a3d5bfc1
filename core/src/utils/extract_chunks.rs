use crate::types::{Chunk, Compilation, Include, IncludeType};
use crate::utils::ChunkGroupGraph;

#[derive(Debug, PartialEq, Eq)]
pub enum ExtractedChunks<'a> {
  Chunks(Vec<&'a Chunk>),
  /// Every emitted asset, regardless of which chunk produced it.
  AllAssets(&'a [String]),
}

impl<'a> ExtractedChunks<'a> {
  pub fn len(&self) -> usize {
    match self {
      ExtractedChunks::Chunks(chunks) => chunks.len(),
      ExtractedChunks::AllAssets(assets) => assets.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

pub fn extract_chunks<'a>(
  compilation: &'a Compilation,
  include: &Include,
  group_graph: &ChunkGroupGraph,
) -> ExtractedChunks<'a> {
  if include.kind == IncludeType::AllAssets {
    return ExtractedChunks::AllAssets(&compilation.assets);
  }

  let chunks = compilation
    .chunks
    .iter()
    .filter(|chunk| match &include.chunks {
      Some(names) => chunk
        .display_name()
        .is_some_and(|name| names.iter().any(|n| n == name)),
      None => true,
    })
    .filter(|chunk| match &include.entries {
      Some(entries) => group_graph
        .entry_names(chunk, compilation)
        .into_iter()
        .any(|name| entries.iter().any(|entry| entry == name)),
      None => true,
    })
    .filter(|chunk| match include.kind {
      IncludeType::AsyncChunks => chunk.is_async(),
      IncludeType::Initial => !chunk.is_async(),
      IncludeType::AllChunks | IncludeType::AllAssets => true,
    })
    .collect::<Vec<_>>();

  ExtractedChunks::Chunks(chunks)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::ChunkGroup;

  fn chunk(name: &str, initial: bool, groups: Vec<usize>) -> Chunk {
    Chunk {
      id: name.into(),
      name: Some(name.into()),
      files: vec![format!("{}.js", name)],
      initial,
      groups,
      ..Default::default()
    }
  }

  fn compilation() -> Compilation {
    Compilation {
      chunks: vec![
        chunk("app", true, vec![0]),
        chunk("admin", true, vec![1]),
        chunk("home", false, vec![2]),
        chunk("settings", false, vec![3]),
      ],
      chunk_groups: vec![
        ChunkGroup {
          name: Some("app".into()),
          entrypoint: true,
          chunks: vec![0],
          parents: vec![],
        },
        ChunkGroup {
          name: Some("admin".into()),
          entrypoint: true,
          chunks: vec![1],
          parents: vec![],
        },
        ChunkGroup {
          name: None,
          entrypoint: false,
          chunks: vec![2],
          parents: vec![0],
        },
        ChunkGroup {
          name: None,
          entrypoint: false,
          chunks: vec![3],
          parents: vec![1],
        },
      ],
      assets: vec!["app.js".to_owned(), "logo.png".to_owned()],
      ..Default::default()
    }
  }

  fn names(extracted: ExtractedChunks<'_>) -> Vec<String> {
    match extracted {
      ExtractedChunks::Chunks(chunks) => chunks
        .into_iter()
        .filter_map(|chunk| chunk.display_name().map(|name| name.to_owned()))
        .collect(),
      ExtractedChunks::AllAssets(assets) => assets.to_vec(),
    }
  }

  #[test]
  fn by_type() {
    let compilation = compilation();
    let graph = ChunkGroupGraph::new(&compilation);

    let extract = |kind| names(extract_chunks(&compilation, &Include::of_type(kind), &graph));
    assert_eq!(extract(IncludeType::AsyncChunks), vec!["home", "settings"]);
    assert_eq!(extract(IncludeType::Initial), vec!["app", "admin"]);
    assert_eq!(extract(IncludeType::AllChunks).len(), 4);
    assert_eq!(extract(IncludeType::AllAssets), vec!["app.js", "logo.png"]);
  }

  #[test]
  fn by_chunk_names_and_entries() {
    let compilation = compilation();
    let graph = ChunkGroupGraph::new(&compilation);

    let include = Include {
      kind: IncludeType::AllChunks,
      chunks: Some(vec!["admin".into(), "home".into()]),
      entries: None,
    };
    assert_eq!(
      names(extract_chunks(&compilation, &include, &graph)),
      vec!["admin", "home"]
    );

    let include = Include {
      kind: IncludeType::AsyncChunks,
      chunks: None,
      entries: Some(vec!["admin".into()]),
    };
    assert_eq!(
      names(extract_chunks(&compilation, &include, &graph)),
      vec!["settings"]
    );
  }

  #[test]
  fn empty_compilation() {
    let compilation = Compilation::default();
    let graph = ChunkGroupGraph::new(&compilation);
    assert!(extract_chunks(&compilation, &Include::default(), &graph).is_empty());
    assert!(
      extract_chunks(&compilation, &Include::of_type(IncludeType::AllAssets), &graph).is_empty()
    );
  }
}

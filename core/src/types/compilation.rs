use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Chunk {
  pub id: SmolStr,
  pub name: Option<SmolStr>,
  pub id_hints: Vec<SmolStr>,
  pub files: Vec<String>,
  pub size: u64,
  pub hash: String,
  /// `false` for chunks that are only loaded on demand.
  pub initial: bool,
  /// Indices into [Compilation::chunk_groups].
  pub groups: Vec<usize>,
}

impl Chunk {
  #[inline]
  pub fn display_name(&self) -> Option<&str> {
    self
      .name
      .as_deref()
      .or_else(|| self.id_hints.first().map(|hint| hint.as_str()))
  }

  #[inline]
  pub fn is_async(&self) -> bool {
    !self.initial
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChunkGroup {
  pub name: Option<SmolStr>,
  pub entrypoint: bool,
  /// Indices into [Compilation::chunks].
  pub chunks: Vec<usize>,
  /// Indices into [Compilation::chunk_groups].
  pub parents: Vec<usize>,
}

/// Read-only view of the host's compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Compilation {
  pub chunks: Vec<Chunk>,
  pub chunk_groups: Vec<ChunkGroup>,
  pub assets: Vec<String>,
  pub public_path: Option<String>,
  pub hash: Option<String>,
}

#[derive(Debug, Default)]
pub struct CompilationStats<'a> {
  pub entrypoints: LinkedHashMap<&'a str, Vec<&'a Chunk>>,
}

impl Compilation {
  #[inline]
  pub fn public_path(&self) -> &str {
    self.public_path.as_deref().unwrap_or("")
  }

  #[inline]
  pub fn chunk(&self, index: usize) -> Option<&Chunk> {
    self.chunks.get(index)
  }

  pub fn stats(&self) -> CompilationStats<'_> {
    let mut entrypoints = LinkedHashMap::new();
    self
      .chunk_groups
      .iter()
      .filter(|group| group.entrypoint)
      .for_each(|group| {
        let name = match group.name.as_deref() {
          Some(name) => name,
          None => return,
        };
        let chunks = group
          .chunks
          .iter()
          .filter_map(|index| self.chunk(*index))
          .collect::<Vec<_>>();
        entrypoints.insert(name, chunks);
      });

    CompilationStats { entrypoints }
  }
}

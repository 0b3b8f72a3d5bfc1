use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;

use crate::types::{Chunk, Compilation};

/// Chunk groups linked child -> parent, so a walk from a group visits its ancestors.
pub struct ChunkGroupGraph {
  graph: DiGraph<usize, ()>,
  nodes: Vec<NodeIndex>,
}

impl ChunkGroupGraph {
  pub fn new(compilation: &Compilation) -> Self {
    let mut graph = DiGraph::with_capacity(compilation.chunk_groups.len(), 0);
    let nodes = (0..compilation.chunk_groups.len())
      .map(|index| graph.add_node(index))
      .collect::<Vec<_>>();

    compilation
      .chunk_groups
      .iter()
      .enumerate()
      .for_each(|(index, group)| {
        group
          .parents
          .iter()
          .filter_map(|parent| nodes.get(*parent))
          .for_each(|parent| {
            graph.add_edge(nodes[index], *parent, ());
          });
      });

    Self { graph, nodes }
  }

  /// The group itself followed by every group it descends from. Cycles are visited once.
  pub fn ancestors(&self, group: usize) -> Vec<usize> {
    let start = match self.nodes.get(group) {
      Some(start) => *start,
      None => return vec![],
    };
    let mut dfs = Dfs::new(&self.graph, start);
    let mut ancestors = vec![];
    while let Some(node) = dfs.next(&self.graph) {
      ancestors.push(self.graph[node]);
    }
    ancestors
  }

  /// Names of the entrypoints a chunk is loaded from, directly or through its parents.
  pub fn entry_names<'a>(&self, chunk: &Chunk, compilation: &'a Compilation) -> Vec<&'a str> {
    let mut names: Vec<&str> = vec![];
    chunk
      .groups
      .iter()
      .flat_map(|group| self.ancestors(*group))
      .filter_map(|group| compilation.chunk_groups.get(group))
      .filter(|group| group.entrypoint)
      .filter_map(|group| group.name.as_deref())
      .for_each(|name| {
        if !names.contains(&name) {
          names.push(name);
        }
      });
    names
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::ChunkGroup;

  fn group(name: &str, entrypoint: bool, parents: Vec<usize>) -> ChunkGroup {
    ChunkGroup {
      name: Some(name.into()),
      entrypoint,
      chunks: vec![],
      parents,
    }
  }

  #[test]
  fn ancestors_terminate_on_cycles() {
    let compilation = Compilation {
      chunk_groups: vec![
        group("app", true, vec![]),
        group("a", false, vec![0, 2]),
        group("b", false, vec![1]),
      ],
      ..Default::default()
    };
    let graph = ChunkGroupGraph::new(&compilation);

    let mut ancestors = graph.ancestors(2);
    ancestors.sort_unstable();
    assert_eq!(ancestors, vec![0, 1, 2]);
    assert!(graph.ancestors(9).is_empty());
  }

  #[test]
  fn entry_names_are_unique() {
    let compilation = Compilation {
      chunk_groups: vec![
        group("app", true, vec![]),
        group("admin", true, vec![]),
        group("lazy", false, vec![0, 1]),
        group("lazier", false, vec![2, 0]),
      ],
      ..Default::default()
    };
    let graph = ChunkGroupGraph::new(&compilation);
    let chunk = Chunk {
      groups: vec![3, 2],
      ..Default::default()
    };

    let mut names = graph.entry_names(&chunk, &compilation);
    names.sort_unstable();
    assert_eq!(names, vec!["admin", "app"]);
  }
}

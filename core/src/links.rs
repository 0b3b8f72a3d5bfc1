use std::collections::HashSet;

use ahash::RandomState;
use linked_hash_map::LinkedHashMap;
use regex::Regex;

use crate::types::{Compilation, HtmlDocument, HtmlTag, NormalizedPreloadOptions, Rel};
use crate::utils::{
  does_chunk_belong_to_html, extract_chunks, resolve_as, ChunkGroupGraph, ExtractedChunks,
  HtmlReferences,
};

fn whitelisted(patterns: Option<&[Regex]>, file: &str) -> bool {
  match patterns {
    Some(patterns) => patterns.iter().any(|regex| regex.is_match(file)),
    None => true,
  }
}

fn blacklisted(patterns: Option<&[Regex]>, file: &str) -> bool {
  patterns.is_some_and(|patterns| patterns.iter().any(|regex| regex.is_match(file)))
}

fn href(compilation: &Compilation, options: &NormalizedPreloadOptions, file: &str) -> String {
  let mut href = format!("{}{}", compilation.public_path(), file);
  if options.append_hash {
    if let Some(hash) = compilation.hash.as_deref().filter(|hash| !hash.is_empty()) {
      href.push(if href.contains('?') { '&' } else { '?' });
      href.push_str(hash);
    }
  }
  href
}

/// Output files to hint for one document, de-duplicated, filtered and sorted.
pub fn collect_files<'a>(
  compilation: &'a Compilation,
  document: &HtmlDocument,
  options: &NormalizedPreloadOptions,
) -> Vec<&'a str> {
  let group_graph = ChunkGroupGraph::new(compilation);
  let extracted = extract_chunks(compilation, &options.include, &group_graph);
  log::debug!(
    "{} candidate(s) for {} with include {:?}",
    extracted.len(),
    document.output_name,
    options.include.kind
  );

  let unique_files: HashSet<&str, RandomState> = match extracted {
    ExtractedChunks::AllAssets(assets) => assets.iter().map(|file| file.as_str()).collect(),
    ExtractedChunks::Chunks(chunks) => {
      let references = HtmlReferences::collect(document, compilation);
      chunks
        .into_iter()
        .filter(|chunk| does_chunk_belong_to_html(chunk, compilation, &references, &group_graph))
        .flat_map(|chunk| chunk.files.iter().map(|file| file.as_str()))
        .collect()
    }
  };

  let mut files = unique_files
    .into_iter()
    .filter(|file| whitelisted(options.file_whitelist.as_deref(), file))
    .filter(|file| !blacklisted(options.file_blacklist.as_deref(), file))
    .collect::<Vec<_>>();
  files.sort_unstable();
  files
}

/// Builds the `<link>` descriptors one document should receive.
pub fn build_links(
  compilation: &Compilation,
  document: &HtmlDocument,
  options: &NormalizedPreloadOptions,
) -> Vec<HtmlTag> {
  collect_files(compilation, document, options)
    .into_iter()
    .map(|file| {
      let mut attributes = LinkedHashMap::new();
      attributes.insert("href".to_owned(), href(compilation, options, file));
      attributes.insert("rel".to_owned(), options.rel.as_str().to_owned());
      if options.rel == Rel::Preload {
        if let Some(as_value) = resolve_as(&options.as_policy, file) {
          let is_font = as_value == "font";
          attributes.insert("as".to_owned(), as_value);
          // fonts are only usable when fetched in CORS mode
          if is_font {
            attributes.insert("crossorigin".to_owned(), String::new());
          }
        }
      }
      HtmlTag::link(attributes)
    })
    .collect()
}

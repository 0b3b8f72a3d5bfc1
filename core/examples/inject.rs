use std::env;
use std::fs;

use anyhow::Context;
use rolldown_plugin_preload::{plugin::preload, Compilation, HtmlDocument, PluginDriver};

// cargo run --example inject -- [compilation.json] [document.json] [options.json] [html plugin version]
fn main() -> anyhow::Result<()> {
  env_logger::init();

  let mut args = env::args().skip(1);
  let compilation_path = args
    .next()
    .unwrap_or_else(|| "./tests/fixtures/basic/compilation.json".to_owned());
  let document_path = args
    .next()
    .unwrap_or_else(|| "./tests/fixtures/basic/index.json".to_owned());
  let options_path = args
    .next()
    .unwrap_or_else(|| "./tests/fixtures/basic/options.json".to_owned());
  let version = args.next().unwrap_or_else(|| "4.5.2".to_owned());

  let compilation: Compilation = serde_json::from_str(
    &fs::read_to_string(&compilation_path).with_context(|| compilation_path.clone())?,
  )?;
  let mut document: HtmlDocument = serde_json::from_str(
    &fs::read_to_string(&document_path).with_context(|| document_path.clone())?,
  )?;
  let plugin = preload::from_json(
    &fs::read_to_string(&options_path).with_context(|| options_path.clone())?,
  )?;

  let mut driver = PluginDriver::new(&version);
  driver.add_plugin(Box::new(plugin));
  driver.process(&compilation, &mut document);

  println!("{}", serde_json::to_string_pretty(&document.head)?);
  Ok(())
}

/* Generate command - emit the interface trait for one artifact */

use super::common::{load, write_output};
use abi_gen::emit_interface;
use abi_loader::contract_name_from_path;
use std::path::Path;

pub fn run(artifact: &Path, name: Option<&str>, output: Option<&Path>) -> anyhow::Result<()> {
  let document = load(artifact)?;

  let contract_name = match name {
    Some(name) => name.to_string(),
    None => contract_name_from_path(artifact),
  };
  tracing::debug!(contract = %contract_name, "generating interface");

  let text = emit_interface(&document, &contract_name);
  write_output(&text, output)
}

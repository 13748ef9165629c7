/* Inspect command - list interfaces declared by one artifact */

use super::common::{load, write_output};
use abi_gen::emit_inspect;
use std::path::Path;

pub fn run(artifact: &Path, output: Option<&Path>) -> anyhow::Result<()> {
  let document = load(artifact)?;
  write_output(&emit_inspect(&document), output)
}

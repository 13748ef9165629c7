/* Common utilities shared between generate and inspect commands */

use abi_loader::abi_types::AbiDocument;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

/* Load the artifact, turning loader errors into user-facing context */
pub fn load(artifact: &Path) -> anyhow::Result<AbiDocument> {
  abi_loader::load_artifact(artifact)
    .with_context(|| format!("cannot generate from {}", artifact.display()))
}

/* Write generated text to `output`, or stdout when none is given */
pub fn write_output(text: &str, output: Option<&Path>) -> anyhow::Result<()> {
  match output {
    Some(path) => {
      std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
      tracing::info!(path = %path.display(), bytes = text.len(), "wrote output");
    }
    None => {
      let mut stdout = std::io::stdout().lock();
      stdout.write_all(text.as_bytes())?;
      stdout.flush()?;
    }
  }
  Ok(())
}

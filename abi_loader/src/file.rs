use abi_types::{last_segment, AbiDocument};
use std::path::{Path, PathBuf};
use thiserror::Error;

/* Errors raised while loading an artifact. Both are fatal for a run. */
#[derive(Error, Debug)]
pub enum LoadError {
    /* Artifact could not be read */
    #[error("failed to read artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /* Artifact is not JSON or has no top-level `abi` array */
    #[error("failed to parse artifact {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

/* Parse an artifact already held in memory */
pub fn parse_artifact(content: &str) -> Result<AbiDocument, serde_json::Error> {
    serde_json::from_str(content)
}

/* Read and parse the artifact at `path` */
pub fn load_artifact<P: AsRef<Path>>(path: P) -> Result<AbiDocument, LoadError> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = parse_artifact(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        items = document.abi.len(),
        "loaded artifact"
    );

    Ok(document)
}

/* Derive a contract name from an artifact path.
   `target/dev/dojo_examples::actions::actions.json` -> `actions` */
pub fn contract_name_from_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(".json").unwrap_or(&file_name);

    last_segment(stem).to_string()
}

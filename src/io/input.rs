use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::core::{Error, StageDocument};

/// Load one result document.
pub fn read_stage_document(path: &Path) -> Result<StageDocument, Error> {
    let file = File::open(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let document: StageDocument =
        serde_json::from_reader(reader).map_err(|source| Error::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!(
        "Loaded {} with {} categor{}",
        path.display(),
        document.categories.len(),
        if document.categories.len() == 1 { "y" } else { "ies" }
    );
    Ok(document)
}

/// Load every stage, in the order given. Stops at the first failure.
pub fn read_stage_documents<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<StageDocument>, Error> {
    paths
        .iter()
        .map(|path| read_stage_document(path.as_ref()))
        .collect()
}

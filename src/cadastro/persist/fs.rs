use super::RecordGateway;
use crate::error::{CadastroError, Result};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

pub struct FileGateway {
    data_file: PathBuf,
}

impl FileGateway {
    pub fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(CadastroError::Io)?;
            }
        }
        Ok(())
    }

    /// Temporary sibling of the data file. Same directory, so the rename
    /// stays on one filesystem.
    fn tmp_file(&self) -> PathBuf {
        let name = self
            .data_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "records.json".to_string());
        self.data_file
            .with_file_name(format!(".{}-{}.tmp", name, process::id()))
    }
}

impl RecordGateway for FileGateway {
    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(records).map_err(CadastroError::Serialization)?;

        let tmp = self.tmp_file();
        fs::write(&tmp, content).map_err(CadastroError::Io)?;
        fs::rename(&tmp, &self.data_file).map_err(CadastroError::Io)?;
        Ok(())
    }

    fn load(&self) -> Result<Vec<Record>> {
        if !self.data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.data_file).map_err(CadastroError::Io)?;
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(CadastroError::Serialization)?;
        Ok(records)
    }
}

//! Genome persistence — save/load the best genome found so far.
//!
//! The saved document records the genome vector, a unix-seconds timestamp,
//! a format version and the id of the run that produced it. Older files
//! holding just the bare `[g0, g1]` array still load.
//!
//! Loading never fails: a missing, unreadable or malformed file means "no
//! saved genome" and callers fall back to evolving one.

use gridswarm_agents::genome::Genome;
use gridswarm_core::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Current on-disk format version.
pub const FORMAT_VERSION: &str = "1.0";

/// Storage for the single best genome.
pub trait GenomeStore {
    /// The saved genome, or `None` when nothing usable is stored.
    fn load_best_genome(&self) -> Option<Genome>;

    /// Persist `genome`, replacing whatever was stored before.
    fn save_best_genome(&self, genome: &Genome) -> Result<()>;
}

/// The saved genome document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomeRecord {
    pub genome: Vec<f64>,
    pub timestamp: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

impl GenomeRecord {
    pub fn new(genome: &Genome) -> Self {
        Self {
            genome: genome.to_vec(),
            timestamp: unix_timestamp(),
            version: FORMAT_VERSION.to_string(),
            run_id: Some(uuid::Uuid::new_v4().to_string()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredGenome {
    Record(GenomeRecord),
    Bare(Vec<f64>),
}

/// A [`GenomeStore`] backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonGenomeStore {
    path: PathBuf,
}

impl JsonGenomeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the stored document. Legacy bare arrays come back as
    /// a record with an empty timestamp and version `"0"`.
    pub fn load_record(&self) -> Result<GenomeRecord> {
        let json = std::fs::read_to_string(&self.path)?;
        let stored: StoredGenome = serde_json::from_str(&json)?;
        Ok(match stored {
            StoredGenome::Record(record) => record,
            StoredGenome::Bare(genome) => GenomeRecord {
                genome,
                timestamp: String::new(),
                version: "0".to_string(),
                run_id: None,
            },
        })
    }
}

impl GenomeStore for JsonGenomeStore {
    fn load_best_genome(&self) -> Option<Genome> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no saved genome");
            return None;
        }
        let record = match self.load_record() {
            Ok(record) => record,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read saved genome");
                return None;
            }
        };
        match Genome::from_slice(&record.genome) {
            Ok(genome) => Some(genome),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "saved genome is unusable");
                None
            }
        }
    }

    fn save_best_genome(&self, genome: &Genome) -> Result<()> {
        let json = serde_json::to_string_pretty(&GenomeRecord::new(genome))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "saved best genome");
        Ok(())
    }
}

fn unix_timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    secs.to_string()
}

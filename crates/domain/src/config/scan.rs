use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Workers started per available CPU.
    #[serde(default = "default_workers_per_cpu")]
    pub workers_per_cpu: usize,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Log scan progress every N collected results.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            workers_per_cpu: default_workers_per_cpu(),
            output_dir: default_output_dir(),
            progress_interval: default_progress_interval(),
        }
    }
}

fn default_workers_per_cpu() -> usize {
    4
}

fn default_output_dir() -> String {
    "results".to_string()
}

fn default_progress_interval() -> usize {
    10
}

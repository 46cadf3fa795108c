use anyhow::Context;
use lame_delegation_application::ports::DelegationCachePort;
use lame_delegation_domain::{Config, RecordType};
use lame_delegation_infrastructure::report::{prepare_output_dir, read_host_list, CsvReportWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::di::Services;

pub async fn run(
    services: &Services,
    config: &Config,
    input: &Path,
    query_type: &str,
) -> anyhow::Result<()> {
    let record_type = RecordType::from_name_or_default(query_type);

    let queries = read_host_list(input, record_type)
        .await
        .with_context(|| format!("cannot load host list {}", input.display()))?;

    let report_path = prepare_output_dir(&PathBuf::from(&config.scan.output_dir))
        .await
        .context("cannot prepare output directory")?;

    let started = Instant::now();
    let results = services.scan.execute(queries).await?;

    CsvReportWriter::new(&report_path).write(&results).await?;

    let lame = results
        .iter()
        .filter(|r| r.contains_lame_delegation)
        .count();

    info!(
        hosts = results.len(),
        lame,
        cached_zones = services.cache.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Scan finished"
    );

    println!(
        "Scanned {} hosts, {} with lame delegations. Report: {}",
        results.len(),
        lame,
        report_path.display()
    );
    Ok(())
}

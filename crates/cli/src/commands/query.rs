use lame_delegation_domain::{DnsQuery, RecordType};

use super::verdict_line;
use crate::di::Services;

pub async fn run(services: &Services, domain: &str, query_type: &str) -> anyhow::Result<()> {
    let query = DnsQuery::new(domain, RecordType::from_name_or_default(query_type));

    let result = services.resolve.execute(&query).await;

    println!("{}", verdict_line(&result));
    Ok(())
}

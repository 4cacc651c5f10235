use crate::config::Config;
use crate::error::Result;
use crate::filter::FilterConfig;
use crate::http_client::ApiClient;
use crate::model::ProgramDetail;
use crate::output::AssetWriter;

/// Resolves a program's structured scope and emits the matching identifiers.
pub struct ScopeFetcher<'a> {
    client: &'a ApiClient,
    cfg: &'a Config,
    filter: FilterConfig,
}

impl<'a> ScopeFetcher<'a> {
    pub fn new(client: &'a ApiClient, cfg: &'a Config, filter: FilterConfig) -> Self {
        Self { client, cfg, filter }
    }

    pub async fn fetch_detail(&self, handle: &str) -> Result<ProgramDetail> {
        self.client.get_json(&self.cfg.program_url(handle)).await
    }

    /// Writes every matching identifier of `detail`, returns how many were written.
    pub fn filter_and_emit<W: std::io::Write>(&self, detail: &ProgramDetail, out: &mut AssetWriter<W>) -> Result<usize> {
        let mut n = 0;
        for id in self.filter.select(detail) {
            out.emit(id)?;
            n += 1;
        }
        Ok(n)
    }
}

use std::io::Write;

use futures::stream::{self, StreamExt};

use crate::config::Config;
use crate::error::{Result, ScopeError};
use crate::filter::FilterConfig;
use crate::http_client::ApiClient;
use crate::lister::ProgramLister;
use crate::model::ProgramSummary;
use crate::output::AssetWriter;
use crate::scope::ScopeFetcher;

/// Driver states. `Done` and `Aborted` are terminal.
#[derive(Debug)]
pub enum PipelineState {
    Listing,
    Detailing(Vec<ProgramSummary>),
    Done,
    Aborted(ScopeError),
}

/// What a finished run went through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub pages: usize,
    pub programs: usize,
    pub emitted: usize,
    /// Handles whose detail request failed, in listing order.
    pub failed: Vec<String>,
}

/// Lists every program and prints the in-scope assets of each one.
pub struct Pipeline<'a> {
    client: &'a ApiClient,
    cfg: &'a Config,
    filter: FilterConfig,
}

impl<'a> Pipeline<'a> {
    pub fn new(client: &'a ApiClient, cfg: &'a Config, filter: FilterConfig) -> Self {
        Self { client, cfg, filter }
    }

    /// Runs to completion. A failed list page aborts the run with its error;
    /// whatever was written to `out` before that stays written.
    pub async fn run<W: Write>(&self, out: &mut AssetWriter<W>) -> Result<RunSummary> {
        let mut lister = ProgramLister::new(self.client, self.cfg.programs_url());
        let fetcher = ScopeFetcher::new(self.client, self.cfg, self.filter);
        let mut summary = RunSummary::default();
        let already_written = out.emitted();
        let mut state = PipelineState::Listing;

        loop {
            state = match state {
                PipelineState::Listing => match lister.next_page().await {
                    Ok(Some(programs)) => {
                        summary.pages += 1;
                        PipelineState::Detailing(programs)
                    }
                    Ok(None) => PipelineState::Done,
                    Err(e) => {
                        tracing::error!(page = summary.pages + 1, kind = e.kind(), error = %e, "listing programs failed");
                        PipelineState::Aborted(e)
                    }
                },
                PipelineState::Detailing(programs) => {
                    if let Err(e) = self.detail_page(&fetcher, &programs, out, &mut summary).await {
                        tracing::error!(kind = e.kind(), error = %e, "writing results failed");
                        PipelineState::Aborted(e)
                    } else if lister.is_exhausted() {
                        PipelineState::Done
                    } else {
                        PipelineState::Listing
                    }
                }
                PipelineState::Done => {
                    summary.emitted = out.emitted() - already_written;
                    return Ok(summary);
                }
                PipelineState::Aborted(e) => return Err(e),
            };
        }
    }

    /// Fetches details for one page, at most `concurrency` at a time, and emits
    /// results in listing order.
    async fn detail_page<W: Write>(
        &self,
        fetcher: &ScopeFetcher<'_>,
        programs: &[ProgramSummary],
        out: &mut AssetWriter<W>,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let details = stream::iter(programs.iter().filter(|p| {
            if p.handle().is_empty() {
                tracing::warn!(id = %p.id, "program without handle skipped");
                false
            } else {
                true
            }
        }))
        .map(|p| async move { (p.handle(), fetcher.fetch_detail(p.handle()).await) })
        .buffered(self.cfg.concurrency.max(1));
        futures::pin_mut!(details);

        while let Some((handle, res)) = details.next().await {
            summary.programs += 1;
            match res {
                Ok(detail) => {
                    let n = fetcher.filter_and_emit(&detail, out)?;
                    tracing::debug!(handle, scopes = detail.scopes().len(), emitted = n, "program done");
                }
                Err(e) => {
                    tracing::warn!(handle, kind = e.kind(), error = %e, "skipping program");
                    summary.failed.push(handle.to_string());
                }
            }
        }
        Ok(())
    }
}

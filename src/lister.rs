use crate::error::Result;
use crate::http_client::ApiClient;
use crate::model::{ProgramSummary, ProgramsPage};

/// Where the lister stands between two list requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationCursor {
    pub current: String,
    pub next: String,
}

impl PaginationCursor {
    /// The API marks its final page by pointing `next` back at `self`.
    pub fn is_last(&self) -> bool {
        self.next == self.current
    }
}

#[derive(Debug)]
enum ListState {
    Pending(String),
    Exhausted,
}

/// Walks the paginated program index one page at a time.
///
/// The sequence is lazy and cannot be restarted: after the last page, or after
/// the first failed request, `next_page` keeps returning `Ok(None)`.
pub struct ProgramLister<'a> {
    client: &'a ApiClient,
    state: ListState,
    pages: usize,
}

impl<'a> ProgramLister<'a> {
    pub fn new(client: &'a ApiClient, first_page_url: impl Into<String>) -> Self {
        Self { client, state: ListState::Pending(first_page_url.into()), pages: 0 }
    }

    pub async fn fetch_page(&self, url: &str) -> Result<ProgramsPage> {
        self.client.get_json(url).await
    }

    pub async fn next_page(&mut self) -> Result<Option<Vec<ProgramSummary>>> {
        let url = match std::mem::replace(&mut self.state, ListState::Exhausted) {
            ListState::Pending(url) => url,
            ListState::Exhausted => return Ok(None),
        };

        let page = self.fetch_page(&url).await?;
        self.pages += 1;

        let cursor = PaginationCursor { current: page.links.self_link, next: page.links.next };
        tracing::debug!(page = self.pages, programs = page.data.len(), next = %cursor.next, "listed programs");

        if cursor.is_last() {
            tracing::debug!(page = self.pages, "last page reached");
        } else {
            self.state = ListState::Pending(cursor.next);
        }
        Ok(Some(page.data))
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, ListState::Exhausted)
    }
}

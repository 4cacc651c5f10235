use crate::model::{ProgramDetail, ScopeEntry};

/// Output predicate for scope entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Only keep assets that can earn a bounty.
    pub paid_only: bool,
}

impl FilterConfig {
    pub fn new(paid_only: bool) -> Self {
        Self { paid_only }
    }

    pub fn matches(&self, entry: &ScopeEntry) -> bool {
        entry.is_url() && (!self.paid_only || entry.attributes.eligible_for_bounty)
    }

    /// Matching identifiers of `detail`, in payload order.
    pub fn select<'a>(self, detail: &'a ProgramDetail) -> impl Iterator<Item = &'a str> + 'a {
        detail
            .scopes()
            .iter()
            .filter(move |e| self.matches(e))
            .map(|e| e.attributes.asset_identifier.as_str())
    }
}

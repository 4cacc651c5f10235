//! Wire types for the hacker API envelopes.
//!
//! Every field is optional at the decode boundary: a missing key or an explicit
//! `null` decodes to the type's default, unknown keys are ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Asset type whose identifiers are worth printing.
pub const URL_ASSET_TYPE: &str = "URL";

fn nullable<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// One page of `GET /programs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgramsPage {
    #[serde(default, deserialize_with = "nullable")]
    pub data: Vec<ProgramSummary>,
    #[serde(default, deserialize_with = "nullable")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default, deserialize_with = "nullable")]
    pub self_link: String,
    #[serde(default, deserialize_with = "nullable")]
    pub next: String,
    #[serde(default, deserialize_with = "nullable")]
    pub previous: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgramSummary {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: String,
    #[serde(default, deserialize_with = "nullable")]
    pub attributes: ProgramAttributes,
}

impl ProgramSummary {
    pub fn handle(&self) -> &str {
        &self.attributes.handle
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgramAttributes {
    #[serde(default, deserialize_with = "nullable")]
    pub handle: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub currency: String,
    #[serde(default, deserialize_with = "nullable")]
    pub policy: String,
    #[serde(default, deserialize_with = "nullable")]
    pub profile_picture: String,
    #[serde(default, deserialize_with = "nullable")]
    pub submission_state: String,
    /// Sent as a bool by the live API, kept untyped so other shapes still decode.
    #[serde(default)]
    pub triage_active: Value,
    #[serde(default, deserialize_with = "nullable")]
    pub state: String,
    #[serde(default, deserialize_with = "nullable")]
    pub started_accepting_at: String,
    #[serde(default, deserialize_with = "nullable")]
    pub number_of_reports_for_user: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub number_of_valid_reports_for_user: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub bounty_earned_for_user: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub last_invitation_accepted_at_for_user: String,
    #[serde(default, deserialize_with = "nullable")]
    pub bookmarked: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub allows_bounty_splitting: bool,
}

/// Body of `GET /programs/{handle}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgramDetail {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: String,
    #[serde(default, deserialize_with = "nullable")]
    pub attributes: ProgramAttributes,
    #[serde(default, deserialize_with = "nullable")]
    pub relationships: Relationships,
}

impl ProgramDetail {
    pub fn scopes(&self) -> &[ScopeEntry] {
        &self.relationships.structured_scopes.data
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Relationships {
    #[serde(default, deserialize_with = "nullable")]
    pub structured_scopes: StructuredScopes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructuredScopes {
    #[serde(default, deserialize_with = "nullable")]
    pub data: Vec<ScopeEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScopeEntry {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: String,
    #[serde(default, deserialize_with = "nullable")]
    pub attributes: ScopeAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScopeAttributes {
    #[serde(default, deserialize_with = "nullable")]
    pub asset_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub asset_identifier: String,
    #[serde(default, deserialize_with = "nullable")]
    pub eligible_for_bounty: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub eligible_for_submission: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub instruction: String,
    #[serde(default, deserialize_with = "nullable")]
    pub max_severity: String,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(default, deserialize_with = "nullable")]
    pub updated_at: String,
    #[serde(default, deserialize_with = "nullable")]
    pub confidentiality_requirement: String,
    #[serde(default, deserialize_with = "nullable")]
    pub integrity_requirement: String,
    #[serde(default, deserialize_with = "nullable")]
    pub availability_requirement: String,
}

impl ScopeEntry {
    pub fn is_url(&self) -> bool {
        self.attributes.asset_type == URL_ASSET_TYPE
    }
}

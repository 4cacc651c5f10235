use scope_hunter::model::{ProgramDetail, ProgramsPage};
use scope_hunter::FilterConfig;

#[test]
fn decode_live_shaped_detail() {
    let body = r#"{
        "id": "13", "type": "program",
        "attributes": {"handle": "security", "name": "HackerOne", "currency": "usd",
            "submission_state": "open", "triage_active": null, "state": "public_mode",
            "offers_bounties": true, "bookmarked": false, "number_of_reports_for_user": 3},
        "relationships": {"structured_scopes": {"data": [
            {"id": "1", "type": "structured-scope", "attributes": {"asset_type": "URL",
                "asset_identifier": "hackerone.com", "eligible_for_bounty": true,
                "eligible_for_submission": true, "instruction": null, "max_severity": "critical",
                "created_at": "2017-01-01T00:00:00.000Z"}},
            {"id": "2", "type": "structured-scope", "attributes": {"asset_type": "WILDCARD",
                "asset_identifier": "*.hackerone.net", "eligible_for_bounty": true}},
            {"id": "3", "type": "structured-scope", "attributes": {"asset_type": "URL",
                "asset_identifier": "docs.hackerone.com", "eligible_for_bounty": false}}
        ]}}
    }"#;
    let detail: ProgramDetail = serde_json::from_str(body).unwrap();
    assert_eq!(detail.attributes.handle, "security");
    let all: Vec<&str> = FilterConfig::new(false).select(&detail).collect();
    assert_eq!(all, vec!["hackerone.com", "docs.hackerone.com"]);
    let paid: Vec<&str> = FilterConfig::new(true).select(&detail).collect();
    assert_eq!(paid, vec!["hackerone.com"]);
}

#[test]
fn decode_last_page_links() {
    let body = r#"{"data": [], "links": {
        "self": "https://api.hackerone.com/v1/hackers/programs?page%5Bnumber%5D=4&page%5Bsize%5D=100",
        "next": "https://api.hackerone.com/v1/hackers/programs?page%5Bnumber%5D=4&page%5Bsize%5D=100",
        "prev": "https://api.hackerone.com/v1/hackers/programs?page%5Bnumber%5D=3&page%5Bsize%5D=100"}}"#;
    let page: ProgramsPage = serde_json::from_str(body).unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.links.self_link, page.links.next);
}

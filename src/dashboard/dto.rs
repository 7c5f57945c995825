use serde::Serialize;

use crate::auth::dto::PublicUser;
use crate::dashboard::repo_types::RetirementProfile;

#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub user: PublicUser,
    pub retirement_profile: Option<RetirementProfile>,
    pub projected_retirement_age: i32,
    pub estimated_monthly_pension: f64,
    pub savings_progress: f64,
    pub recommendations: Vec<String>,
    pub recent_documents: Vec<DocumentSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_summary_uses_type_key() {
        let doc = DocumentSummary {
            name: "Tax Return 2023".into(),
            doc_type: "tax".into(),
            date: "2024-03-15".into(),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "tax");
        assert!(json.get("doc_type").is_none());
    }
}

use crate::auth::repo_types::UserType;
use crate::dashboard::dto::DocumentSummary;

pub struct RetirementOutlook {
    pub projected_retirement_age: i32,
    pub estimated_monthly_pension: f64,
    pub savings_progress: f64,
    pub recommendations: Vec<String>,
}

/// Projection figures keyed off the account classification. Deterministic
/// placeholder data until the actuarial engine lands.
pub fn retirement_outlook(user_type: UserType) -> RetirementOutlook {
    match user_type {
        UserType::Employee => RetirementOutlook {
            projected_retirement_age: 62,
            estimated_monthly_pension: 1800.0,
            savings_progress: 65.0,
            recommendations: vec![
                "Maximize your employer's 401(k) matching".to_string(),
                "Consider increasing contributions by 2% annually".to_string(),
                "Review your portfolio allocation quarterly".to_string(),
            ],
        },
        UserType::Freelancer => RetirementOutlook {
            projected_retirement_age: 67,
            estimated_monthly_pension: 1200.0,
            savings_progress: 45.0,
            recommendations: vec![
                "Set up a SEP-IRA for tax-advantaged savings".to_string(),
                "Build an emergency fund of 6-12 months expenses".to_string(),
                "Consider diversifying income streams".to_string(),
            ],
        },
        UserType::BusinessOwner => RetirementOutlook {
            projected_retirement_age: 60,
            estimated_monthly_pension: 2500.0,
            savings_progress: 80.0,
            recommendations: vec![
                "Explore business succession planning options".to_string(),
                "Maximize tax-deferred retirement accounts".to_string(),
                "Consider establishing a defined benefit plan".to_string(),
            ],
        },
    }
}

pub fn recent_documents() -> Vec<DocumentSummary> {
    vec![
        DocumentSummary {
            name: "Tax Return 2023".into(),
            doc_type: "tax".into(),
            date: "2024-03-15".into(),
        },
        DocumentSummary {
            name: "401k Statement".into(),
            doc_type: "retirement".into(),
            date: "2024-09-01".into(),
        },
        DocumentSummary {
            name: "Pay Stub".into(),
            doc_type: "income".into(),
            date: "2024-09-15".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlook_varies_by_user_type() {
        let employee = retirement_outlook(UserType::Employee);
        assert_eq!(employee.projected_retirement_age, 62);
        assert_eq!(employee.estimated_monthly_pension, 1800.0);
        assert_eq!(employee.savings_progress, 65.0);
        assert_eq!(employee.recommendations.len(), 3);

        let freelancer = retirement_outlook(UserType::Freelancer);
        assert_eq!(freelancer.projected_retirement_age, 67);
        assert_eq!(freelancer.estimated_monthly_pension, 1200.0);

        let owner = retirement_outlook(UserType::BusinessOwner);
        assert_eq!(owner.projected_retirement_age, 60);
        assert_eq!(owner.savings_progress, 80.0);
    }

    #[test]
    fn recent_documents_are_stubbed() {
        let docs = recent_documents();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].doc_type, "tax");
    }
}

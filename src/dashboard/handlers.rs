use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::auth::dto::PublicUser;
use crate::auth::error::AuthError;
use crate::auth::extractors::CurrentUser;
use crate::dashboard::dto::DashboardData;
use crate::dashboard::repo_types::RetirementProfile;
use crate::dashboard::services::{recent_documents, retirement_outlook};
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/user/profile", get(get_user_profile))
}

#[instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<DashboardData>, AuthError> {
    let CurrentUser(user) = user;
    let retirement_profile = RetirementProfile::find_by_user(&state.db, user.id).await?;

    let outlook = retirement_outlook(user.user_type);
    Ok(Json(DashboardData {
        user: user.into(),
        retirement_profile,
        projected_retirement_age: outlook.projected_retirement_age,
        estimated_monthly_pension: outlook.estimated_monthly_pension,
        savings_progress: outlook.savings_progress,
        recommendations: outlook.recommendations,
        recent_documents: recent_documents(),
    }))
}

pub async fn get_user_profile(CurrentUser(user): CurrentUser) -> Json<PublicUser> {
    Json(user.into())
}

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use club_server_domain::{flash::FlashLevel, registration::RegistrationId};
use log::info;

use crate::{AppError, AppState, routes::Found, session::SessionContext, views};

pub async fn list_registrations(
    State(app): State<AppState>,
    mut session: SessionContext,
) -> Result<Response, AppError> {
    if !session.is_admin() {
        session.flash("Please log in first.", FlashLevel::Warning);
        return Ok((session, Found("/login")).into_response());
    }

    let students = app
        .services
        .registration_repository
        .get_registrations()
        .await?;
    let page = views::admin(&session.take_flashes(), &students);
    Ok((session, page).into_response())
}

/// Not gated on the admin session, unlike `/admin`.
pub async fn delete_registration(
    State(app): State<AppState>,
    mut session: SessionContext,
    WithRejection(Path(id), _): WithRejection<Path<RegistrationId>, AppError>,
) -> Result<Response, AppError> {
    let deleted = app
        .services
        .registration_repository
        .delete_registration(id)
        .await?;
    info!("Deleted registration {} ({} row(s))", id, deleted);

    session.flash("Deleted.", FlashLevel::Info);
    Ok((session, Found("/admin")).into_response())
}

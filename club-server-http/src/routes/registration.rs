use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use club_server_domain::{
    ServiceError,
    flash::FlashLevel,
    registration::{NewRegistration, RegistrationSubmission},
};

use crate::{AppError, AppState, forms::RegistrationForm, routes::Found, session::SessionContext, views};

pub async fn show_form(mut session: SessionContext) -> impl IntoResponse {
    let page = views::register(&session.take_flashes());
    (session, page)
}

pub async fn submit(
    State(app): State<AppState>,
    mut session: SessionContext,
    WithRejection(Form(form), _): WithRejection<Form<RegistrationForm>, AppError>,
) -> Result<Response, AppError> {
    let registration = match NewRegistration::try_from(RegistrationSubmission::from(form)) {
        Ok(registration) => registration,
        Err(ServiceError::BadRequest(_)) => {
            session.flash("Name is required", FlashLevel::Danger);
            return Ok((session, Found("/register")).into_response());
        }
        Err(e) => return Err(e.into()),
    };

    app.services
        .registration_repository
        .create_registration(&registration)
        .await?;

    session.flash("Registration saved!", FlashLevel::Success);
    Ok((session, Found("/admin")).into_response())
}

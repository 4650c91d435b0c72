use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use club_server_domain::flash::FlashLevel;
use log::info;

use crate::{AppError, AppState, forms::LoginForm, routes::Found, session::SessionContext, views};

pub async fn show_form(mut session: SessionContext) -> impl IntoResponse {
    let page = views::login(&session.take_flashes());
    (session, page)
}

pub async fn submit(
    State(app): State<AppState>,
    mut session: SessionContext,
    WithRejection(Form(form), _): WithRejection<Form<LoginForm>, AppError>,
) -> Result<Response, AppError> {
    let verified = match (&form.username, &form.password) {
        (Some(username), Some(password)) => {
            app.services
                .credential_verifier
                .verify(username, password)
                .await?
        }
        _ => false,
    };

    if verified {
        info!("Admin [{}] logged in", form.username.unwrap_or_default());
        session.log_in();
        return Ok((session, Found("/admin")).into_response());
    }

    session.flash("Invalid credentials", FlashLevel::Danger);
    let page = views::login(&session.take_flashes());
    Ok((session, page).into_response())
}

pub async fn logout(mut session: SessionContext) -> impl IntoResponse {
    session.log_out();
    (session, Found("/"))
}

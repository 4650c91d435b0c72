use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use club_server_domain::{contact::NewContact, flash::FlashLevel};

use crate::{AppError, AppState, forms::ContactForm, routes::Found, session::SessionContext, views};

pub async fn show_form(mut session: SessionContext) -> impl IntoResponse {
    let page = views::contact(&session.take_flashes());
    (session, page)
}

pub async fn submit(
    State(app): State<AppState>,
    mut session: SessionContext,
    WithRejection(Form(form), _): WithRejection<Form<ContactForm>, AppError>,
) -> Result<Response, AppError> {
    app.services
        .contact_repository
        .create_contact(&NewContact::from(form))
        .await?;

    session.flash("Thanks for contacting us!", FlashLevel::Success);
    Ok((session, Found("/contact")).into_response())
}

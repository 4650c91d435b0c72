use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use club_server_domain::{
    flash::FlashLevel,
    player::{NewPlayer, rank_players},
};

use crate::{AppError, AppState, forms::PlayerForm, routes::Found, session::SessionContext, views};

pub async fn show_form(mut session: SessionContext) -> impl IntoResponse {
    let page = views::add_player(&session.take_flashes());
    (session, page)
}

/// Persistence failures are reported through a flash message; the visitor
/// lands on the roster either way.
pub async fn submit(
    State(app): State<AppState>,
    mut session: SessionContext,
    WithRejection(Form(form), _): WithRejection<Form<PlayerForm>, AppError>,
) -> impl IntoResponse {
    let player = NewPlayer::from(form);
    match app.services.player_repository.create_player(&player).await {
        Ok(()) => session.flash("✅ Player added successfully!", FlashLevel::Success),
        Err(e) => {
            log::error!("Error inserting player: {}", e);
            session.flash(
                "Something went wrong while saving the player.",
                FlashLevel::Danger,
            );
        }
    }
    (session, Found("/Performance"))
}

pub async fn performance(
    State(app): State<AppState>,
    mut session: SessionContext,
) -> Result<Response, AppError> {
    let players = app
        .services
        .player_repository
        .get_players_by_performance()
        .await?;
    let page = views::performance(&session.take_flashes(), &rank_players(players));
    Ok((session, page).into_response())
}

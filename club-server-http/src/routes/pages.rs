use axum::response::IntoResponse;

use crate::{session::SessionContext, views};

pub async fn index(mut session: SessionContext) -> impl IntoResponse {
    let page = views::index(&session.take_flashes());
    (session, page)
}

pub async fn teams(mut session: SessionContext) -> impl IntoResponse {
    let page = views::teams(&session.take_flashes());
    (session, page)
}

pub async fn about(mut session: SessionContext) -> impl IntoResponse {
    let page = views::about(&session.take_flashes());
    (session, page)
}

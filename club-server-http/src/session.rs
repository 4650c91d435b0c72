//! Per-request session context backed by a signed cookie.
//!
//! The cookie carries the admin flag and any flash messages that have not
//! been rendered yet. Handlers take a [`SessionContext`] as an extractor and
//! return it as part of their response so changes are written back.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponseParts, ResponseParts},
};
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use club_server_domain::flash::{FlashLevel, FlashMessage, FlashQueue};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

pub const SESSION_COOKIE: &str = "session";

/// Derives the 64-byte cookie signing key from the configured secret.
pub fn cookie_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct SessionData {
    #[serde(default)]
    admin_logged_in: bool,
    #[serde(default, skip_serializing_if = "FlashQueue::is_empty")]
    flashes: FlashQueue,
}

pub struct SessionContext {
    jar: SignedCookieJar,
    loaded: SessionData,
    data: SessionData,
}

impl SessionContext {
    pub fn is_admin(&self) -> bool {
        self.data.admin_logged_in
    }

    pub fn log_in(&mut self) {
        self.data.admin_logged_in = true;
    }

    pub fn log_out(&mut self) {
        self.data.admin_logged_in = false;
    }

    pub fn flash(&mut self, text: impl Into<String>, level: FlashLevel) {
        self.data.flashes.push(text, level);
    }

    /// Flashes are shown once: taking them for a page clears them from the
    /// session.
    pub fn take_flashes(&mut self) -> Vec<FlashMessage> {
        self.data.flashes.drain()
    }
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::<Key>::from_request_parts(parts, state).await?;
        let data: SessionData = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| serde_json::from_str(cookie.value()).ok())
            .unwrap_or_default();
        Ok(Self {
            jar,
            loaded: data.clone(),
            data,
        })
    }
}

impl IntoResponseParts for SessionContext {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if self.data == self.loaded {
            return Ok(res);
        }

        let jar = if self.data == SessionData::default() {
            self.jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
        } else {
            match serde_json::to_string(&self.data) {
                Ok(value) => self.jar.add(
                    Cookie::build((SESSION_COOKIE, value))
                        .path("/")
                        .http_only(true)
                        .same_site(SameSite::Lax),
                ),
                Err(e) => {
                    log::error!("Failed to encode session: {}", e);
                    self.jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
                }
            }
        };
        jar.into_response_parts(res)
    }
}

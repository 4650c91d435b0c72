//! In-memory ports and request helpers for router tests.

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use club_server_domain::{
    ServiceError, ServiceResult,
    app::Services,
    contact::{ContactRepository, NewContact},
    credentials::CredentialVerifier,
    player::{NewPlayer, Player, PlayerRepository},
    registration::{NewRegistration, RegistrationId, RegistrationRepository, StudentRegistration},
};
use tower::ServiceExt;

use crate::{AppState, router};

pub const ADMIN_USERNAME: &str = "coach";
pub const ADMIN_PASSWORD: &str = "whistle";

#[derive(Clone, Default)]
pub struct MockRegistrationRepository {
    rows: Arc<Mutex<Vec<StudentRegistration>>>,
    failing: bool,
}

impl MockRegistrationRepository {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn rows(&self) -> Vec<StudentRegistration> {
        self.rows.lock().unwrap().clone()
    }

    pub fn seed(&self, name: &str) -> RegistrationId {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        rows.push(StudentRegistration {
            id,
            name: name.to_string(),
            gender: None,
            sport: Some("Football".into()),
            department: None,
            contact: None,
            email: None,
        });
        id
    }
}

#[async_trait::async_trait]
impl RegistrationRepository for MockRegistrationRepository {
    async fn create_registration(&self, registration: &NewRegistration) -> ServiceResult<()> {
        if self.failing {
            return ServiceError::internal("registrations table unavailable");
        }
        let id = self.seed(&registration.name);
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
            row.gender = registration.gender.clone();
            row.sport = registration.sport.clone();
            row.department = registration.department.clone();
            row.contact = registration.contact.clone();
            row.email = registration.email.clone();
        }
        Ok(())
    }

    async fn get_registrations(&self) -> ServiceResult<Vec<StudentRegistration>> {
        if self.failing {
            return ServiceError::internal("registrations table unavailable");
        }
        let mut rows = self.rows();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn delete_registration(&self, id: RegistrationId) -> ServiceResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok((before - rows.len()) as u64)
    }
}

#[derive(Clone, Default)]
pub struct MockPlayerRepository {
    players: Arc<Mutex<Vec<Player>>>,
    failing: bool,
}

impl MockPlayerRepository {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn players(&self) -> Vec<Player> {
        self.players.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PlayerRepository for MockPlayerRepository {
    async fn create_player(&self, player: &NewPlayer) -> ServiceResult<()> {
        if self.failing {
            return ServiceError::internal("duplicate entry");
        }
        let mut players = self.players.lock().unwrap();
        let id = players.len() as i64 + 1;
        players.push(Player {
            id,
            name: player.name.clone(),
            team: player.team.clone(),
            position: player.position.clone(),
            matches: player.matches,
            goals: player.goals,
            assists: player.assists,
        });
        Ok(())
    }

    // insertion order; ranking happens in the handler
    async fn get_players_by_performance(&self) -> ServiceResult<Vec<Player>> {
        Ok(self.players())
    }
}

#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<NewContact>>>,
}

impl MockContactRepository {
    pub fn contacts(&self) -> Vec<NewContact> {
        self.contacts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ContactRepository for MockContactRepository {
    async fn create_contact(&self, contact: &NewContact) -> ServiceResult<()> {
        self.contacts.lock().unwrap().push(contact.clone());
        Ok(())
    }
}

pub struct MockCredentialVerifier;

#[async_trait::async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> ServiceResult<bool> {
        Ok(username == ADMIN_USERNAME && password == ADMIN_PASSWORD)
    }
}

pub struct TestApp {
    pub router: Router,
    pub registrations: MockRegistrationRepository,
    pub players: MockPlayerRepository,
    pub contacts: MockContactRepository,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(MockRegistrationRepository::default(), MockPlayerRepository::default())
    }

    pub fn with(registrations: MockRegistrationRepository, players: MockPlayerRepository) -> Self {
        let contacts = MockContactRepository::default();
        let services = Services::new(
            Arc::new(Box::new(registrations.clone())),
            Arc::new(Box::new(players.clone())),
            Arc::new(Box::new(contacts.clone())),
            Arc::new(Box::new(MockCredentialVerifier)),
        );
        let state = AppState::new(services, "test-secret");
        Self {
            router: router(state, std::path::Path::new("does-not-exist")),
            registrations,
            players,
            contacts,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::empty()).unwrap()).await
    }

    pub async fn post(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Logs in with the mock admin and returns the session cookie.
    pub async fn login(&self) -> String {
        let body = format!("username={}&password={}", ADMIN_USERNAME, ADMIN_PASSWORD);
        let response = self.post("/login", &body, None).await;
        session_cookie(&response).expect("login should set a session cookie")
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// The `name=value` part of the response's session cookie, if it set one.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|v| v.starts_with("session="))
        .map(str::to_string)
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

//! Authenticated JSON client for the recruitment API.
//!
//! Every request carries the stored bearer token. A 401 triggers at most one
//! refresh (single-flight across concurrent requests) followed by a single
//! retry; if the refresh is impossible or denied the session is cleared and
//! the navigator is sent to the login route. A refresh that completes after
//! the session was ended or replaced is discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{watch, Mutex};
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::Config;
use crate::dto::auth_dto::{RefreshRequest, TokenPair};
use crate::error::{Error, Result};
use crate::session::{Navigator, SessionState, SessionStore};

const REFRESH_PATH: &str = "auth/refresh";

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    login_route: String,
    dashboard_route: String,
    refresh_lock: Arc<Mutex<()>>,
    // bumped whenever the stored session is ended or replaced
    generation: Arc<AtomicU64>,
    state: Arc<watch::Sender<SessionState>>,
}

impl ApiClient {
    pub fn new(
        config: &Config,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(concat!("recruitment-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let initial = if store.access_token().is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        };
        let (state, _) = watch::channel(initial);

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            store,
            navigator,
            login_route: config.login_route.clone(),
            dashboard_route: config.dashboard_route.clone(),
            refresh_lock: Arc::new(Mutex::new(())),
            generation: Arc::new(AtomicU64::new(0)),
            state: Arc::new(state),
        })
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    pub fn dashboard_route(&self) -> &str {
        &self.dashboard_route
    }

    pub fn session_state(&self) -> SessionState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    fn mark_authenticated(&self) {
        self.state.send_replace(SessionState::Authenticated);
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Stores a freshly issued token pair, superseding any refresh in flight.
    pub(crate) fn start_session(&self, access_token: &str, refresh_token: &str) -> Result<()> {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.store.set_tokens(access_token, refresh_token)?;
        self.mark_authenticated();
        Ok(())
    }

    /// Clears all stored keys and redirects to the login route.
    pub fn end_session(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Err(e) = self.store.clear() {
            error!("Failed to clear session storage: {}", e);
        }
        self.state.send_replace(SessionState::Unauthenticated);
        self.navigator.navigate(&self.login_route);
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    // =========================================================================
    // Typed helpers
    // =========================================================================

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .send(Method::GET, path, None::<&()>, None::<&()>)
            .await?;
        Ok(response.json().await?)
    }

    pub async fn get_query<Q, T>(&self, path: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::GET, path, Some(query), None::<&()>).await?;
        Ok(response.json().await?)
    }

    pub async fn get_bytes(&self, path: &str) -> Result<Bytes> {
        let response = self
            .send(Method::GET, path, None::<&()>, None::<&()>)
            .await?;
        Ok(response.bytes().await?)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, None::<&()>, Some(body)).await?;
        Ok(response.json().await?)
    }

    /// POST whose response body is ignored.
    pub async fn post_unit<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, None::<&()>, Some(body)).await?;
        Ok(())
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::PUT, path, None::<&()>, Some(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(Method::PATCH, path, None::<&()>, Some(body))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, None::<&()>, None::<&()>)
            .await?;
        Ok(())
    }

    /// POST without the bearer token and without refresh handling.
    pub async fn post_public<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        let response = self
            .dispatch(&Method::POST, &url, None::<&()>, Some(body), None)
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    // =========================================================================
    // Transport
    // =========================================================================

    async fn send<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Response>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let token = self.store.access_token();

        let response = self
            .dispatch(&method, &url, query, body, token.as_deref())
            .await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Self::check(response).await;
        }

        debug!("{} {} returned 401, attempting token refresh", method, url);
        let fresh_token = self.refresh_after_unauthorized(token.as_deref()).await?;

        let retried = self
            .dispatch(&method, &url, query, body, Some(&fresh_token))
            .await?;
        Self::check(retried).await
    }

    async fn dispatch<Q, B>(
        &self,
        method: &Method,
        url: &Url,
        query: Option<&Q>,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<Response>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        debug!("{} {}", method, url);
        Ok(request.send().await?)
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = Error::server_message(status, &body);
        debug!("Request failed with status {}: {}", status, message);
        Err(Error::from_status(status, message))
    }

    /// Produces the token to retry with after a 401 on a request sent with
    /// `failed_token`.
    ///
    /// Holding `refresh_lock` keeps one refresh in flight; requests that
    /// waited on it reuse the outcome instead of refreshing again.
    async fn refresh_after_unauthorized(&self, failed_token: Option<&str>) -> Result<String> {
        let _guard = self.refresh_lock.lock().await;

        match (self.store.access_token(), failed_token) {
            (Some(current), failed) if failed != Some(current.as_str()) => {
                debug!("Access token was replaced concurrently, reusing it");
                return Ok(current);
            }
            (None, Some(_)) => {
                // cleared while this request was in flight (logout or failed refresh)
                return Err(Error::SessionExpired);
            }
            _ => {}
        }

        let Some(refresh_token) = self.store.refresh_token() else {
            warn!("Unauthorized response and no refresh token stored, ending session");
            self.end_session();
            return Err(Error::SessionExpired);
        };

        let generation = self.generation();
        self.state.send_replace(SessionState::Refreshing);
        let refreshed = self
            .post_public::<_, TokenPair>(REFRESH_PATH, &RefreshRequest { refresh_token })
            .await;

        if self.generation() != generation {
            info!("Session ended during token refresh, discarding the new tokens");
            return Err(Error::SessionExpired);
        }

        let stored = refreshed.and_then(|pair| {
            self.store
                .set_tokens(&pair.access_token, &pair.refresh_token)?;
            Ok(pair.access_token)
        });

        match stored {
            Ok(access_token) => {
                self.mark_authenticated();
                info!("Access token refreshed");
                Ok(access_token)
            }
            Err(e) => {
                warn!("Token refresh failed: {}", e);
                self.end_session();
                Err(Error::SessionExpired)
            }
        }
    }
}

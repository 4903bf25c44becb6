// ── Portal abstraction ──
//
// The main entry point for consumers (CLI / TUI). Owns the session
// lifecycle, the HTTP clients, and the read-through cache; every query
// goes through the cache's key scheme and every mutation applies the
// matching invalidation rules.

use std::sync::{Arc, RwLock};

use secrecy::SecretString;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use rently_api::{AnalyticsClient, Credentials, RentalClient, TlsMode, TransportConfig};

use crate::cache::CacheStore;
use crate::config::{PortalConfig, TlsVerification};
use crate::error::CoreError;
use crate::model::{
    DashboardStats, EntityId, Guest, Home, HomeContract, HomeOwner, InvoicePayment, MevBlock,
    MevTransaction, Receiver, Service, ServiceContract, UserProfile,
};
use crate::requests::{
    CreateGuestRequest, CreateHomeContractRequest, CreateHomeOwnerRequest, CreateHomeRequest,
    CreateInvoicePaymentRequest, CreateReceiverRequest, CreateServiceContractRequest,
    CreateServiceRequest, UpdateGuestRequest, UpdateHomeContractRequest, UpdateHomeOwnerRequest,
    UpdateHomeRequest, UpdateInvoicePaymentRequest, UpdateReceiverRequest,
    UpdateServiceContractRequest, UpdateServiceRequest,
};

// ── SessionState ────────────────────────────────────────────────────

/// Session state observable by consumers. The front ends route to their
/// sign-in surface whenever this is not `SignedIn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    SignedOut,
    Connecting,
    SignedIn { username: String },
    /// A call was answered with 401 mid-session.
    Expired,
}

// ── Portal ──────────────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<PortalInner>`. [`connect()`](Self::connect)
/// resolves credentials and probes the profile endpoint; afterwards the
/// query methods serve fresh cache entries without touching the network
/// and the mutation methods invalidate exactly the keys they affect.
#[derive(Clone)]
pub struct Portal {
    inner: Arc<PortalInner>,
}

struct PortalInner {
    config: PortalConfig,
    store: CacheStore,
    session: watch::Sender<SessionState>,
    rental: RwLock<Option<Arc<RentalClient>>>,
    analytics: RwLock<Option<Arc<AnalyticsClient>>>,
    profile: RwLock<Option<Arc<UserProfile>>>,
}

fn build_transport(config: &PortalConfig) -> TransportConfig {
    TransportConfig {
        tls: match &config.tls {
            TlsVerification::System => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        },
        timeout: config.timeout,
    }
}

impl Portal {
    /// Create a new Portal from configuration. Does NOT connect --
    /// call [`connect()`](Self::connect) to authenticate.
    pub fn new(config: PortalConfig) -> Self {
        let store = CacheStore::new(&config.cache);
        let (session, _) = watch::channel(SessionState::SignedOut);

        Self {
            inner: Arc::new(PortalInner {
                config,
                store,
                session,
                rental: RwLock::new(None),
                analytics: RwLock::new(None),
                profile: RwLock::new(None),
            }),
        }
    }

    /// Access the portal configuration.
    pub fn config(&self) -> &PortalConfig {
        &self.inner.config
    }

    /// Current session state.
    pub fn session(&self) -> SessionState {
        self.inner.session.borrow().clone()
    }

    /// Subscribe to session-state transitions.
    pub fn watch_session(&self) -> watch::Receiver<SessionState> {
        self.inner.session.subscribe()
    }

    /// Subscribe to the store-wide cache change counter (for reactive
    /// re-rendering).
    pub fn subscribe_changes(&self) -> watch::Receiver<u64> {
        self.inner.store.subscribe()
    }

    /// The signed-in user's profile, if connected.
    pub fn profile(&self) -> Option<Arc<UserProfile>> {
        self.inner.profile.read().expect("profile lock poisoned").clone()
    }

    // ── Session lifecycle ────────────────────────────────────────────

    /// Connect to the backend: resolve a token (logging in if the config
    /// carries username/password), then probe the profile endpoint. The
    /// probe treats only a 401-shaped answer as "signed out".
    pub async fn connect(&self) -> Result<(), CoreError> {
        self.connect_with(self.inner.config.auth.clone()).await
    }

    /// Like [`connect()`](Self::connect) with explicit credentials — the
    /// TUI's sign-in screen calls this with whatever the form holds.
    pub async fn connect_with(&self, auth: Credentials) -> Result<(), CoreError> {
        let _ = self.inner.session.send(SessionState::Connecting);

        let config = &self.inner.config;
        let transport = build_transport(config);

        let token: SecretString = match &auth {
            Credentials::Token(token) => token.clone(),
            Credentials::Password { username, password } => {
                debug!(%username, "no token configured, exchanging credentials");
                let anon = RentalClient::new(config.backend_url.as_str(), &transport)?;
                let resp = anon.login(username, password).await.map_err(|e| {
                    let _ = self.inner.session.send(SessionState::SignedOut);
                    CoreError::from(e)
                })?;
                SecretString::from(resp.access_token)
            }
        };

        let client = Arc::new(RentalClient::with_token(
            config.backend_url.as_str(),
            &token,
            &transport,
        )?);

        let profile = match client.get_profile().await {
            Ok(profile) => Arc::new(UserProfile::from(profile)),
            Err(e) if e.is_session_expired() => {
                let _ = self.inner.session.send(SessionState::SignedOut);
                return Err(CoreError::AuthenticationFailed {
                    message: "access token was rejected by the backend".into(),
                });
            }
            Err(e) => {
                let _ = self.inner.session.send(SessionState::SignedOut);
                return Err(e.into());
            }
        };

        info!(username = %profile.username, "signed in");

        *self.inner.rental.write().expect("client lock poisoned") = Some(client);
        *self.inner.profile.write().expect("profile lock poisoned") =
            Some(Arc::clone(&profile));

        if let Some(url) = &config.analytics_url {
            let analytics = Arc::new(AnalyticsClient::new(url.as_str(), &transport)?);
            *self.inner.analytics.write().expect("analytics lock poisoned") = Some(analytics);
        }

        let _ = self.inner.session.send(SessionState::SignedIn {
            username: profile.username.clone(),
        });
        Ok(())
    }

    /// Exchange username/password for a fresh access token WITHOUT
    /// touching this portal's session. `auth login` uses this to obtain
    /// a token it then stores in the keyring.
    pub async fn obtain_token(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<SecretString, CoreError> {
        let transport = build_transport(&self.inner.config);
        let anon = RentalClient::new(self.inner.config.backend_url.as_str(), &transport)?;
        let resp = anon.login(username, password).await?;
        Ok(SecretString::from(resp.access_token))
    }

    /// Sign out: best-effort server-side token invalidation, then drop
    /// every cached value and client.
    pub async fn logout(&self) {
        if let Ok(client) = self.rental() {
            if let Err(e) = client.logout().await {
                warn!(error = %e, "server-side logout failed (ignored)");
            }
        }

        *self.inner.rental.write().expect("client lock poisoned") = None;
        *self.inner.profile.write().expect("profile lock poisoned") = None;
        self.inner.store.clear_all();
        let _ = self.inner.session.send(SessionState::SignedOut);
    }

    /// Drop every cached value so the next reads refetch (the TUI's
    /// force-refresh key).
    pub fn invalidate_all(&self) {
        self.inner.store.clear_all();
    }

    // ── Client access ────────────────────────────────────────────────

    fn rental(&self) -> Result<Arc<RentalClient>, CoreError> {
        self.inner
            .rental
            .read()
            .expect("client lock poisoned")
            .clone()
            .ok_or(CoreError::NotSignedIn)
    }

    fn analytics(&self) -> Result<Arc<AnalyticsClient>, CoreError> {
        self.inner
            .analytics
            .read()
            .expect("analytics lock poisoned")
            .clone()
            .ok_or(CoreError::AnalyticsUnavailable)
    }

    /// Map API errors, flipping the session state on 401 so front ends
    /// can route back to sign-in.
    fn guard<T>(&self, result: Result<T, rently_api::Error>) -> Result<T, CoreError> {
        match result {
            Err(e) if e.is_session_expired() => {
                warn!("backend answered 401 mid-session");
                let _ = self.inner.session.send(SessionState::Expired);
                Err(CoreError::SessionExpired)
            }
            other => other.map_err(CoreError::from),
        }
    }

    // ── Guests ───────────────────────────────────────────────────────

    pub async fn guests(&self) -> Result<Arc<Vec<Arc<Guest>>>, CoreError> {
        if let Some(cached) = self.inner.store.guests.fresh_list() {
            return Ok(cached);
        }
        let client = self.rental()?;
        let rows = self.guard(client.list_guests().await)?;
        Ok(self
            .inner
            .store
            .guests
            .store_list(rows.into_iter().map(Guest::from).collect()))
    }

    /// Search guests by name/phone. An empty (or whitespace) query is a
    /// disabled query: no request is issued and the result is empty.
    pub async fn search_guests(&self, query: &str) -> Result<Arc<Vec<Arc<Guest>>>, CoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Arc::new(Vec::new()));
        }
        if let Some(cached) = self.inner.store.guests.fresh_search(query) {
            return Ok(cached);
        }
        let client = self.rental()?;
        let rows = self.guard(client.search_guests(query).await)?;
        Ok(self
            .inner
            .store
            .guests
            .store_search(query, rows.into_iter().map(Guest::from).collect()))
    }

    pub async fn guest(&self, id: i64) -> Result<Arc<Guest>, CoreError> {
        let key = EntityId::Numeric(id);
        if let Some(cached) = self.inner.store.guests.fresh_detail(&key) {
            return Ok(cached);
        }
        let client = self.rental()?;
        let row = self.guard(client.get_guest(id).await)?;
        Ok(self.inner.store.guests.store_detail(key, Guest::from(row)))
    }

    pub async fn create_guest(&self, req: CreateGuestRequest) -> Result<Arc<Guest>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.create_guest(&req.into()).await)?;
        let guest = Guest::from(row);
        self.inner.store.guests.invalidate_lists();
        Ok(self
            .inner
            .store
            .guests
            .store_detail(guest.id.clone(), guest))
    }

    pub async fn update_guest(
        &self,
        id: i64,
        req: UpdateGuestRequest,
    ) -> Result<Arc<Guest>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.update_guest(id, &req.into()).await)?;
        let guest = Guest::from(row);
        self.inner.store.guests.invalidate_lists();
        self.inner
            .store
            .guests
            .invalidate_detail(&EntityId::Numeric(id));
        Ok(self
            .inner
            .store
            .guests
            .store_detail(EntityId::Numeric(id), guest))
    }

    pub async fn delete_guest(&self, id: i64) -> Result<(), CoreError> {
        let client = self.rental()?;
        self.guard(client.delete_guest(id).await)?;
        self.inner.store.guests.invalidate_lists();
        self.inner
            .store
            .guests
            .invalidate_detail(&EntityId::Numeric(id));
        Ok(())
    }

    // ── Home owners ──────────────────────────────────────────────────

    pub async fn home_owners(&self) -> Result<Arc<Vec<Arc<HomeOwner>>>, CoreError> {
        if let Some(cached) = self.inner.store.owners.fresh_list() {
            return Ok(cached);
        }
        let client = self.rental()?;
        let rows = self.guard(client.list_home_owners().await)?;
        Ok(self
            .inner
            .store
            .owners
            .store_list(rows.into_iter().map(HomeOwner::from).collect()))
    }

    pub async fn search_home_owners(
        &self,
        query: &str,
    ) -> Result<Arc<Vec<Arc<HomeOwner>>>, CoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Arc::new(Vec::new()));
        }
        if let Some(cached) = self.inner.store.owners.fresh_search(query) {
            return Ok(cached);
        }
        let client = self.rental()?;
        let rows = self.guard(client.search_home_owners(query).await)?;
        Ok(self
            .inner
            .store
            .owners
            .store_search(query, rows.into_iter().map(HomeOwner::from).collect()))
    }

    pub async fn home_owner(&self, id: i64) -> Result<Arc<HomeOwner>, CoreError> {
        let key = EntityId::Numeric(id);
        if let Some(cached) = self.inner.store.owners.fresh_detail(&key) {
            return Ok(cached);
        }
        let client = self.rental()?;
        let row = self.guard(client.get_home_owner(id).await)?;
        Ok(self
            .inner
            .store
            .owners
            .store_detail(key, HomeOwner::from(row)))
    }

    pub async fn create_home_owner(
        &self,
        req: CreateHomeOwnerRequest,
    ) -> Result<Arc<HomeOwner>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.create_home_owner(&req.into()).await)?;
        let owner = HomeOwner::from(row);
        self.inner.store.owners.invalidate_lists();
        Ok(self
            .inner
            .store
            .owners
            .store_detail(owner.id.clone(), owner))
    }

    pub async fn update_home_owner(
        &self,
        id: i64,
        req: UpdateHomeOwnerRequest,
    ) -> Result<Arc<HomeOwner>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.update_home_owner(id, &req.into()).await)?;
        let owner = HomeOwner::from(row);
        self.inner.store.owners.invalidate_lists();
        self.inner
            .store
            .owners
            .invalidate_detail(&EntityId::Numeric(id));
        Ok(self
            .inner
            .store
            .owners
            .store_detail(EntityId::Numeric(id), owner))
    }

    pub async fn delete_home_owner(&self, id: i64) -> Result<(), CoreError> {
        let client = self.rental()?;
        self.guard(client.delete_home_owner(id).await)?;
        self.inner.store.owners.invalidate_lists();
        self.inner
            .store
            .owners
            .invalidate_detail(&EntityId::Numeric(id));
        Ok(())
    }

    // ── Homes ────────────────────────────────────────────────────────

    pub async fn homes(&self) -> Result<Arc<Vec<Arc<Home>>>, CoreError> {
        if let Some(cached) = self.inner.store.homes.fresh_list() {
            return Ok(cached);
        }
        let client = self.rental()?;
        let rows = self.guard(client.list_homes().await)?;
        Ok(self
            .inner
            .store
            .homes
            .store_list(rows.into_iter().map(Home::from).collect()))
    }

    pub async fn search_homes(&self, query: &str) -> Result<Arc<Vec<Arc<Home>>>, CoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Arc::new(Vec::new()));
        }
        if let Some(cached) = self.inner.store.homes.fresh_search(query) {
            return Ok(cached);
        }
        let client = self.rental()?;
        let rows = self.guard(client.search_homes(query).await)?;
        Ok(self
            .inner
            .store
            .homes
            .store_search(query, rows.into_iter().map(Home::from).collect()))
    }

    pub async fn home(&self, id: i64) -> Result<Arc<Home>, CoreError> {
        let key = EntityId::Numeric(id);
        if let Some(cached) = self.inner.store.homes.fresh_detail(&key) {
            return Ok(cached);
        }
        let client = self.rental()?;
        let row = self.guard(client.get_home(id).await)?;
        Ok(self.inner.store.homes.store_detail(key, Home::from(row)))
    }

    pub async fn create_home(&self, req: CreateHomeRequest) -> Result<Arc<Home>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.create_home(&req.into()).await)?;
        let home = Home::from(row);
        self.inner.store.homes.invalidate_lists();
        Ok(self.inner.store.homes.store_detail(home.id.clone(), home))
    }

    pub async fn update_home(
        &self,
        id: i64,
        req: UpdateHomeRequest,
    ) -> Result<Arc<Home>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.update_home(id, &req.into()).await)?;
        let home = Home::from(row);
        self.inner.store.homes.invalidate_lists();
        self.inner
            .store
            .homes
            .invalidate_detail(&EntityId::Numeric(id));
        Ok(self
            .inner
            .store
            .homes
            .store_detail(EntityId::Numeric(id), home))
    }

    pub async fn delete_home(&self, id: i64) -> Result<(), CoreError> {
        let client = self.rental()?;
        self.guard(client.delete_home(id).await)?;
        self.inner.store.homes.invalidate_lists();
        self.inner
            .store
            .homes
            .invalidate_detail(&EntityId::Numeric(id));
        Ok(())
    }

    // ── Home contracts ───────────────────────────────────────────────

    pub async fn home_contracts(&self) -> Result<Arc<Vec<Arc<HomeContract>>>, CoreError> {
        if let Some(cached) = self.inner.store.home_contracts.fresh_list() {
            return Ok(cached);
        }
        let client = self.rental()?;
        let rows = self.guard(client.list_home_contracts().await)?;
        Ok(self
            .inner
            .store
            .home_contracts
            .store_list(rows.into_iter().map(HomeContract::from).collect()))
    }

    pub async fn home_contract(&self, id: i64) -> Result<Arc<HomeContract>, CoreError> {
        let key = EntityId::Numeric(id);
        if let Some(cached) = self.inner.store.home_contracts.fresh_detail(&key) {
            return Ok(cached);
        }
        let client = self.rental()?;
        let row = self.guard(client.get_home_contract(id).await)?;
        Ok(self
            .inner
            .store
            .home_contracts
            .store_detail(key, HomeContract::from(row)))
    }

    pub async fn create_home_contract(
        &self,
        req: CreateHomeContractRequest,
    ) -> Result<Arc<HomeContract>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.create_home_contract(&req.into()).await)?;
        let contract = HomeContract::from(row);
        self.inner.store.home_contracts.invalidate_lists();
        // A new lease changes aggregate figures too.
        self.inner.store.stats.clear();
        Ok(self
            .inner
            .store
            .home_contracts
            .store_detail(contract.id.clone(), contract))
    }

    pub async fn update_home_contract(
        &self,
        id: i64,
        req: UpdateHomeContractRequest,
    ) -> Result<Arc<HomeContract>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.update_home_contract(id, &req.into()).await)?;
        let contract = HomeContract::from(row);
        self.inner.store.home_contracts.invalidate_lists();
        self.inner
            .store
            .home_contracts
            .invalidate_detail(&EntityId::Numeric(id));
        self.inner.store.stats.clear();
        Ok(self
            .inner
            .store
            .home_contracts
            .store_detail(EntityId::Numeric(id), contract))
    }

    pub async fn delete_home_contract(&self, id: i64) -> Result<(), CoreError> {
        let client = self.rental()?;
        self.guard(client.delete_home_contract(id).await)?;
        self.inner.store.home_contracts.invalidate_lists();
        self.inner
            .store
            .home_contracts
            .invalidate_detail(&EntityId::Numeric(id));
        self.inner.store.stats.clear();
        Ok(())
    }

    // ── Service contracts ────────────────────────────────────────────

    pub async fn service_contracts(&self) -> Result<Arc<Vec<Arc<ServiceContract>>>, CoreError> {
        if let Some(cached) = self.inner.store.service_contracts.fresh_list() {
            return Ok(cached);
        }
        let client = self.rental()?;
        let rows = self.guard(client.list_service_contracts().await)?;
        Ok(self
            .inner
            .store
            .service_contracts
            .store_list(rows.into_iter().map(ServiceContract::from).collect()))
    }

    pub async fn service_contract(&self, id: i64) -> Result<Arc<ServiceContract>, CoreError> {
        let key = EntityId::Numeric(id);
        if let Some(cached) = self.inner.store.service_contracts.fresh_detail(&key) {
            return Ok(cached);
        }
        let client = self.rental()?;
        let row = self.guard(client.get_service_contract(id).await)?;
        Ok(self
            .inner
            .store
            .service_contracts
            .store_detail(key, ServiceContract::from(row)))
    }

    pub async fn create_service_contract(
        &self,
        req: CreateServiceContractRequest,
    ) -> Result<Arc<ServiceContract>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.create_service_contract(&req.into()).await)?;
        let contract = ServiceContract::from(row);
        self.inner.store.service_contracts.invalidate_lists();
        Ok(self
            .inner
            .store
            .service_contracts
            .store_detail(contract.id.clone(), contract))
    }

    pub async fn update_service_contract(
        &self,
        id: i64,
        req: UpdateServiceContractRequest,
    ) -> Result<Arc<ServiceContract>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.update_service_contract(id, &req.into()).await)?;
        let contract = ServiceContract::from(row);
        self.inner.store.service_contracts.invalidate_lists();
        self.inner
            .store
            .service_contracts
            .invalidate_detail(&EntityId::Numeric(id));
        Ok(self
            .inner
            .store
            .service_contracts
            .store_detail(EntityId::Numeric(id), contract))
    }

    pub async fn delete_service_contract(&self, id: i64) -> Result<(), CoreError> {
        let client = self.rental()?;
        self.guard(client.delete_service_contract(id).await)?;
        self.inner.store.service_contracts.invalidate_lists();
        self.inner
            .store
            .service_contracts
            .invalidate_detail(&EntityId::Numeric(id));
        Ok(())
    }

    // ── Services ─────────────────────────────────────────────────────

    pub async fn services(&self) -> Result<Arc<Vec<Arc<Service>>>, CoreError> {
        if let Some(cached) = self.inner.store.services.fresh_list() {
            return Ok(cached);
        }
        let client = self.rental()?;
        let rows = self.guard(client.list_services().await)?;
        Ok(self
            .inner
            .store
            .services
            .store_list(rows.into_iter().map(Service::from).collect()))
    }

    pub async fn service(&self, id: i64) -> Result<Arc<Service>, CoreError> {
        let key = EntityId::Numeric(id);
        if let Some(cached) = self.inner.store.services.fresh_detail(&key) {
            return Ok(cached);
        }
        let client = self.rental()?;
        let row = self.guard(client.get_service(id).await)?;
        Ok(self
            .inner
            .store
            .services
            .store_detail(key, Service::from(row)))
    }

    pub async fn create_service(
        &self,
        req: CreateServiceRequest,
    ) -> Result<Arc<Service>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.create_service(&req.into()).await)?;
        let service = Service::from(row);
        self.inner.store.services.invalidate_lists();
        Ok(self
            .inner
            .store
            .services
            .store_detail(service.id.clone(), service))
    }

    pub async fn update_service(
        &self,
        id: i64,
        req: UpdateServiceRequest,
    ) -> Result<Arc<Service>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.update_service(id, &req.into()).await)?;
        let service = Service::from(row);
        self.inner.store.services.invalidate_lists();
        self.inner
            .store
            .services
            .invalidate_detail(&EntityId::Numeric(id));
        Ok(self
            .inner
            .store
            .services
            .store_detail(EntityId::Numeric(id), service))
    }

    pub async fn delete_service(&self, id: i64) -> Result<(), CoreError> {
        let client = self.rental()?;
        self.guard(client.delete_service(id).await)?;
        self.inner.store.services.invalidate_lists();
        self.inner
            .store
            .services
            .invalidate_detail(&EntityId::Numeric(id));
        Ok(())
    }

    // ── Receivers ────────────────────────────────────────────────────

    pub async fn receivers(&self) -> Result<Arc<Vec<Arc<Receiver>>>, CoreError> {
        if let Some(cached) = self.inner.store.receivers.fresh_list() {
            return Ok(cached);
        }
        let client = self.rental()?;
        let rows = self.guard(client.list_receivers().await)?;
        Ok(self
            .inner
            .store
            .receivers
            .store_list(rows.into_iter().map(Receiver::from).collect()))
    }

    pub async fn receiver(&self, id: i64) -> Result<Arc<Receiver>, CoreError> {
        let key = EntityId::Numeric(id);
        if let Some(cached) = self.inner.store.receivers.fresh_detail(&key) {
            return Ok(cached);
        }
        let client = self.rental()?;
        let row = self.guard(client.get_receiver(id).await)?;
        Ok(self
            .inner
            .store
            .receivers
            .store_detail(key, Receiver::from(row)))
    }

    pub async fn create_receiver(
        &self,
        req: CreateReceiverRequest,
    ) -> Result<Arc<Receiver>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.create_receiver(&req.into()).await)?;
        let receiver = Receiver::from(row);
        self.inner.store.receivers.invalidate_lists();
        Ok(self
            .inner
            .store
            .receivers
            .store_detail(receiver.id.clone(), receiver))
    }

    pub async fn update_receiver(
        &self,
        id: i64,
        req: UpdateReceiverRequest,
    ) -> Result<Arc<Receiver>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.update_receiver(id, &req.into()).await)?;
        let receiver = Receiver::from(row);
        self.inner.store.receivers.invalidate_lists();
        self.inner
            .store
            .receivers
            .invalidate_detail(&EntityId::Numeric(id));
        Ok(self
            .inner
            .store
            .receivers
            .store_detail(EntityId::Numeric(id), receiver))
    }

    pub async fn delete_receiver(&self, id: i64) -> Result<(), CoreError> {
        let client = self.rental()?;
        self.guard(client.delete_receiver(id).await)?;
        self.inner.store.receivers.invalidate_lists();
        self.inner
            .store
            .receivers
            .invalidate_detail(&EntityId::Numeric(id));
        Ok(())
    }

    // ── Invoice payments ─────────────────────────────────────────────

    pub async fn invoice_payments(&self) -> Result<Arc<Vec<Arc<InvoicePayment>>>, CoreError> {
        if let Some(cached) = self.inner.store.invoices.fresh_list() {
            return Ok(cached);
        }
        let client = self.rental()?;
        let rows = self.guard(client.list_invoice_payments().await)?;
        Ok(self
            .inner
            .store
            .invoices
            .store_list(rows.into_iter().map(InvoicePayment::from).collect()))
    }

    /// Invoices scoped to one home contract. Cached under a
    /// parameterized search key (`[invoice, "search", contract:{id}]`).
    pub async fn invoice_payments_for_contract(
        &self,
        home_contract_id: i64,
    ) -> Result<Arc<Vec<Arc<InvoicePayment>>>, CoreError> {
        let key = format!("contract:{home_contract_id}");
        if let Some(cached) = self.inner.store.invoices.fresh_search(&key) {
            return Ok(cached);
        }
        let client = self.rental()?;
        let rows = self.guard(
            client
                .list_invoice_payments_for_contract(home_contract_id)
                .await,
        )?;
        Ok(self
            .inner
            .store
            .invoices
            .store_search(&key, rows.into_iter().map(InvoicePayment::from).collect()))
    }

    pub async fn invoice_payment(&self, id: i64) -> Result<Arc<InvoicePayment>, CoreError> {
        let key = EntityId::Numeric(id);
        if let Some(cached) = self.inner.store.invoices.fresh_detail(&key) {
            return Ok(cached);
        }
        let client = self.rental()?;
        let row = self.guard(client.get_invoice_payment(id).await)?;
        Ok(self
            .inner
            .store
            .invoices
            .store_detail(key, InvoicePayment::from(row)))
    }

    pub async fn create_invoice_payment(
        &self,
        req: CreateInvoicePaymentRequest,
    ) -> Result<Arc<InvoicePayment>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.create_invoice_payment(&req.into()).await)?;
        let invoice = InvoicePayment::from(row);
        self.inner.store.invoices.invalidate_lists();
        self.inner.store.stats.clear();
        Ok(self
            .inner
            .store
            .invoices
            .store_detail(invoice.id.clone(), invoice))
    }

    pub async fn update_invoice_payment(
        &self,
        id: i64,
        req: UpdateInvoicePaymentRequest,
    ) -> Result<Arc<InvoicePayment>, CoreError> {
        let client = self.rental()?;
        let row = self.guard(client.update_invoice_payment(id, &req.into()).await)?;
        let invoice = InvoicePayment::from(row);
        self.inner.store.invoices.invalidate_lists();
        self.inner
            .store
            .invoices
            .invalidate_detail(&EntityId::Numeric(id));
        self.inner.store.stats.clear();
        Ok(self
            .inner
            .store
            .invoices
            .store_detail(EntityId::Numeric(id), invoice))
    }

    pub async fn delete_invoice_payment(&self, id: i64) -> Result<(), CoreError> {
        let client = self.rental()?;
        self.guard(client.delete_invoice_payment(id).await)?;
        self.inner.store.invoices.invalidate_lists();
        self.inner
            .store
            .invoices
            .invalidate_detail(&EntityId::Numeric(id));
        self.inner.store.stats.clear();
        Ok(())
    }

    // ── Statistics ───────────────────────────────────────────────────

    pub async fn dashboard_stats(&self) -> Result<Arc<DashboardStats>, CoreError> {
        if let Some(cached) = self.inner.store.stats.fresh() {
            return Ok(cached);
        }
        let client = self.rental()?;
        let stats = self.guard(client.get_dashboard_stats().await)?;
        Ok(self.inner.store.stats.store(DashboardStats::from(stats)))
    }

    // ── MEV analytics ────────────────────────────────────────────────

    pub async fn mev_blocks(&self, limit: u32) -> Result<Arc<Vec<Arc<MevBlock>>>, CoreError> {
        let key = format!("limit:{limit}");
        if let Some(cached) = self.inner.store.mev_blocks.fresh_search(&key) {
            return Ok(cached);
        }
        let client = self.analytics()?;
        let rows = client.list_blocks(limit).await.map_err(CoreError::from)?;
        Ok(self
            .inner
            .store
            .mev_blocks
            .store_search(&key, rows.into_iter().map(MevBlock::from).collect()))
    }

    pub async fn mev_block(&self, number: u64) -> Result<Arc<MevBlock>, CoreError> {
        let key = EntityId::Text(number.to_string());
        if let Some(cached) = self.inner.store.mev_blocks.fresh_detail(&key) {
            return Ok(cached);
        }
        let client = self.analytics()?;
        let row = client.get_block(number).await.map_err(CoreError::from)?;
        Ok(self
            .inner
            .store
            .mev_blocks
            .store_detail(key, MevBlock::from(row)))
    }

    pub async fn mev_transactions(
        &self,
        limit: u32,
    ) -> Result<Arc<Vec<Arc<MevTransaction>>>, CoreError> {
        let key = format!("limit:{limit}");
        if let Some(cached) = self.inner.store.mev_transactions.fresh_search(&key) {
            return Ok(cached);
        }
        let client = self.analytics()?;
        let rows = client
            .list_transactions(limit)
            .await
            .map_err(CoreError::from)?;
        Ok(self
            .inner
            .store
            .mev_transactions
            .store_search(&key, rows.into_iter().map(MevTransaction::from).collect()))
    }

    pub async fn mev_transaction(&self, hash: &str) -> Result<Arc<MevTransaction>, CoreError> {
        let key = EntityId::Text(hash.to_owned());
        if let Some(cached) = self.inner.store.mev_transactions.fresh_detail(&key) {
            return Ok(cached);
        }
        let client = self.analytics()?;
        let row = client
            .get_transaction(hash)
            .await
            .map_err(CoreError::from)?;
        Ok(self
            .inner
            .store
            .mev_transactions
            .store_detail(key, MevTransaction::from(row)))
    }
}

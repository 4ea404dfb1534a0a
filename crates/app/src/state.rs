//! Application state management
//!
//! `AppState` is the single in-memory context a UI binds to: the configured
//! data source, the selection set, the browse session, the notice queue,
//! and the stubbed sign-in. Constructed explicitly and shared by reference;
//! there is no hidden global, so tests build isolated instances.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use uuid::Uuid;
use vitrine_core::{
    build_request, paginate, seed, AppConfig, BrowseSession, Catalog, ContactInfo, DataSource,
    DateRange, Error, InMemorySource, Notice, Reservation, Result, SelectionSet,
    SelectionSummary, SourceKind, Space, SpaceFilter, SpaceKind, User,
};
use vitrine_net::RemoteSource;

/// Main application state
pub struct AppState {
    config: AppConfig,
    source: Arc<dyn DataSource>,
    selection: Mutex<SelectionSet>,
    session: Mutex<BrowseSession>,
    notices: Mutex<Vec<Notice>>,
    current_user: Mutex<Option<User>>,
}

impl AppState {
    /// Wire up the data source the configuration names
    pub fn new(config: AppConfig) -> Result<Self> {
        let source: Arc<dyn DataSource> = match config.source.kind {
            SourceKind::Memory => {
                let mut source = InMemorySource::seeded();
                if config.source.latency_ms > 0 {
                    source =
                        source.with_latency(Duration::from_millis(config.source.latency_ms));
                }
                Arc::new(source)
            }
            SourceKind::Remote => {
                Arc::new(RemoteSource::from_addr(&config.source.remote_addr)?)
            }
        };
        tracing::info!(kind = ?config.source.kind, "Data source configured");
        Ok(Self::with_source(config, source))
    }

    /// Build around an explicit source (tests inject fakes here)
    pub fn with_source(config: AppConfig, source: Arc<dyn DataSource>) -> Self {
        let session = BrowseSession::new(config.catalog.page_size);
        Self {
            config,
            source,
            selection: Mutex::new(SelectionSet::new()),
            session: Mutex::new(session),
            notices: Mutex::new(Vec::new()),
            current_user: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn source(&self) -> Arc<dyn DataSource> {
        self.source.clone()
    }

    /// Fetch spaces and stores into the session catalog
    pub async fn load_catalog(&self) -> Result<Catalog> {
        let spaces = self.source.get_spaces().await?;
        let stores = self.source.get_stores().await?;
        Ok(Catalog::new(spaces, stores))
    }

    // ---- Selection -------------------------------------------------------

    /// Add a space to the selection, gating on availability.
    ///
    /// Non-available spaces are rejected before they reach the set, with a
    /// notice naming the current status.
    pub fn select_space(&self, space: &Space) -> Result<()> {
        if !space.is_selectable() {
            self.push_notice(Notice::space_unavailable(space));
            return Err(Error::SpaceUnavailable {
                id: space.id.clone(),
                status: space.status,
            });
        }

        let added = self.selection.lock().unwrap().add(space.clone());
        if added {
            self.push_notice(Notice::space_added(space));
        }
        Ok(())
    }

    pub fn deselect_space(&self, id: &str) {
        let mut selection = self.selection.lock().unwrap();
        let name = selection
            .spaces()
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.clone());
        if let Some(name) = name {
            selection.remove(id);
            drop(selection);
            self.push_notice(Notice::space_removed(&name));
        }
    }

    pub fn clear_selection(&self) {
        self.selection.lock().unwrap().clear();
        self.push_notice(Notice::selection_cleared());
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.lock().unwrap().contains(id)
    }

    pub fn selection_summary(&self) -> SelectionSummary {
        self.selection.lock().unwrap().summary()
    }

    pub fn selected_spaces(&self) -> Vec<Space> {
        self.selection.lock().unwrap().spaces().to_vec()
    }

    // ---- Browsing --------------------------------------------------------

    /// Edit the catalog filter; the session resets to page 1
    pub fn edit_filter(&self, edit: impl FnOnce(&mut SpaceFilter)) {
        self.session.lock().unwrap().edit_filter(edit);
    }

    pub fn clear_filters(&self) {
        self.session.lock().unwrap().clear_filters();
    }

    pub fn go_to_page(&self, page: usize) {
        self.session.lock().unwrap().go_to_page(page);
    }

    pub fn current_page(&self) -> usize {
        self.session.lock().unwrap().page()
    }

    /// The catalog slice the current page shows
    pub fn visible_spaces(&self, catalog: &Catalog) -> Vec<Space> {
        self.session.lock().unwrap().visible(catalog.spaces())
    }

    pub fn total_pages(&self, catalog: &Catalog) -> usize {
        self.session.lock().unwrap().total_pages(catalog.spaces())
    }

    /// First page of the home teaser grid: one optional kind, teaser-sized
    pub fn teaser_spaces(&self, catalog: &Catalog, kind: Option<SpaceKind>) -> Vec<Space> {
        let filtered = SpaceFilter::for_kind(kind).apply(catalog.spaces());
        paginate(&filtered, self.config.catalog.teaser_page_size, 1).to_vec()
    }

    // ---- Checkout --------------------------------------------------------

    /// Validate, assemble, and submit the reservation request.
    ///
    /// The selection is cleared only after the service accepts the request;
    /// a failed submission leaves the cart intact for another attempt.
    pub async fn submit_reservation(
        &self,
        period: DateRange,
        contact: &ContactInfo,
        notes: Option<String>,
    ) -> Result<Reservation> {
        let request = {
            let selection = self.selection.lock().unwrap();
            build_request(&selection, period, contact, notes, &self.config.policy())
        };
        let request = match request {
            Ok(request) => request,
            Err(err) => {
                self.push_notice(Notice::reservation_failed(&err));
                return Err(err);
            }
        };

        match self.source.reserve_space(request).await {
            Ok(reservation) => {
                self.selection.lock().unwrap().clear();
                self.push_notice(Notice::reservation_submitted());
                tracing::info!(reservation_id = %reservation.id, "Reservation submitted");
                Ok(reservation)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Reservation submission failed");
                self.push_notice(Notice::reservation_failed(&err));
                Err(err)
            }
        }
    }

    pub async fn reservations(&self) -> Result<Vec<Reservation>> {
        self.source.get_reservations().await
    }

    pub async fn cancel_reservation(&self, id: Uuid) -> Result<Reservation> {
        match self.source.cancel_reservation(id).await {
            Ok(reservation) => {
                self.push_notice(Notice::reservation_cancelled());
                Ok(reservation)
            }
            Err(err) => {
                self.push_notice(Notice::cancellation_failed(&err));
                Err(err)
            }
        }
    }

    // ---- Auth (stub) -----------------------------------------------------

    /// Stubbed sign-in: any credentials are accepted and map onto the demo
    /// account. Nothing downstream enforces authentication.
    pub fn sign_in(&self, email: &str, name: &str, company: &str) -> User {
        let user = User {
            id: seed::DEMO_USER_ID.into(),
            email: email.into(),
            name: name.into(),
            company: company.into(),
            role: "buyer".into(),
        };
        *self.current_user.lock().unwrap() = Some(user.clone());
        tracing::info!(email = %email, "Signed in");
        user
    }

    pub fn sign_out(&self) {
        *self.current_user.lock().unwrap() = None;
    }

    pub fn current_user(&self) -> Option<User> {
        self.current_user.lock().unwrap().clone()
    }

    // ---- Notices ---------------------------------------------------------

    fn push_notice(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    /// Hand accumulated toast content to the rendering layer
    pub fn drain_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vitrine_core::NoticeKind;

    fn memory_state() -> AppState {
        AppState::new(AppConfig::default()).unwrap()
    }

    fn valid_contact() -> ContactInfo {
        ContactInfo {
            company_name: "Tech Solutions LTDA".into(),
            contact_name: "Maria Silva".into(),
            email: "maria@techsolutions.com".into(),
            phone: "(92) 98765-4321".into(),
        }
    }

    fn valid_period() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_select_gates_on_availability() {
        let state = memory_state();
        let catalog = state.load_catalog().await.unwrap();

        let available = catalog.space("space-001").unwrap();
        state.select_space(available).unwrap();
        assert!(state.is_selected("space-001"));

        // space-003 is seeded as reserved; it must never reach the set
        let reserved = catalog.space("space-003").unwrap();
        let err = state.select_space(reserved).unwrap_err();
        assert!(matches!(err, Error::SpaceUnavailable { .. }));
        assert!(!state.is_selected("space-003"));

        let notices = state.drain_notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].kind, NoticeKind::Success);
        assert_eq!(notices[1].kind, NoticeKind::Error);
    }

    #[tokio::test]
    async fn test_double_select_adds_once_and_notices_once() {
        let state = memory_state();
        let catalog = state.load_catalog().await.unwrap();
        let space = catalog.space("space-001").unwrap();

        state.select_space(space).unwrap();
        state.select_space(space).unwrap();

        assert_eq!(state.selection_summary().count, 1);
        assert_eq!(state.drain_notices().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_clears_selection_on_success() {
        let state = memory_state();
        let catalog = state.load_catalog().await.unwrap();
        state
            .select_space(catalog.space("space-001").unwrap())
            .unwrap();

        let reservation = state
            .submit_reservation(valid_period(), &valid_contact(), None)
            .await
            .unwrap();
        assert_eq!(reservation.total_price, 8000);
        assert_eq!(state.selection_summary().count, 0);

        let notices = state.drain_notices();
        assert!(notices
            .iter()
            .any(|n| n.title == "Reservation submitted" && n.kind == NoticeKind::Success));
    }

    #[tokio::test]
    async fn test_failed_validation_keeps_selection() {
        let state = memory_state();
        let catalog = state.load_catalog().await.unwrap();
        state
            .select_space(catalog.space("space-001").unwrap())
            .unwrap();
        state.drain_notices();

        let mut contact = valid_contact();
        contact.email = "broken".into();
        let err = state
            .submit_reservation(valid_period(), &contact, None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::IncompleteContact { .. }));

        // Cart intact for another attempt
        assert_eq!(state.selection_summary().count, 1);
        let notices = state.drain_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
    }

    #[tokio::test]
    async fn test_empty_cart_submission_rejected() {
        let state = memory_state();
        let err = state
            .submit_reservation(valid_period(), &valid_contact(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EmptySelection));
    }

    #[tokio::test]
    async fn test_deselect_notices_by_name() {
        let state = memory_state();
        let catalog = state.load_catalog().await.unwrap();
        state
            .select_space(catalog.space("space-001").unwrap())
            .unwrap();
        state.drain_notices();

        state.deselect_space("space-001");
        let notices = state.drain_notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].detail.contains("Premium Endcap"));

        // Deselecting an absent ID stays quiet
        state.deselect_space("space-001");
        assert!(state.drain_notices().is_empty());
    }

    #[tokio::test]
    async fn test_filter_edit_resets_page() {
        let state = memory_state();
        state.go_to_page(4);
        assert_eq!(state.current_page(), 4);
        state.edit_filter(|f| f.search = "endcap".into());
        assert_eq!(state.current_page(), 1);
    }

    #[tokio::test]
    async fn test_teaser_is_capped_and_kind_scoped() {
        let state = memory_state();
        let catalog = state.load_catalog().await.unwrap();

        // Seed has 10 spaces; the teaser shows the configured 6
        let teaser = state.teaser_spaces(&catalog, None);
        assert_eq!(teaser.len(), state.config().catalog.teaser_page_size);

        let windows = state.teaser_spaces(&catalog, Some(SpaceKind::Window));
        assert!(!windows.is_empty());
        assert!(windows.iter().all(|s| s.kind == SpaceKind::Window));
    }

    #[tokio::test]
    async fn test_sign_in_stub_accepts_anything() {
        let state = memory_state();
        assert!(state.current_user().is_none());
        let user = state.sign_in("maria@techsolutions.com", "Maria Silva", "Tech Solutions");
        assert_eq!(user.id, seed::DEMO_USER_ID);
        assert!(state.current_user().is_some());
        state.sign_out();
        assert!(state.current_user().is_none());
    }

    #[test]
    fn test_remote_config_with_bad_addr_fails_fast() {
        let mut config = AppConfig::default();
        config.source.kind = SourceKind::Remote;
        config.source.remote_addr = "nowhere".into();
        assert!(matches!(AppState::new(config), Err(Error::Config(_))));
    }
}

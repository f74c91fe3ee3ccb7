use dioxus_logger::tracing;

use crate::{
    api::ApiClient,
    error::{auth::AuthError, Error},
    model::notification::SentNotificationDto,
    service::sequence::{RequestSequencer, Ticket},
};

pub const SENT_PAGE_SIZE: usize = 20;

/// A page the pager wants fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub ticket: Ticket,
    pub page: usize,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagerState {
    /// 1-based
    pub page: usize,
    pub notifications: Vec<SentNotificationDto>,
    /// Assumed until a page comes back empty
    pub has_more: bool,
    pub loading: bool,
    pub error: Option<String>,
}

/// History of delivered notifications, paged newest first
pub struct SentNotificationPager {
    state: PagerState,
    requests: RequestSequencer,
}

impl Default for SentNotificationPager {
    fn default() -> Self {
        Self::new()
    }
}

impl SentNotificationPager {
    pub fn new() -> Self {
        Self {
            state: PagerState {
                page: 1,
                notifications: Vec::new(),
                has_more: true,
                loading: false,
                error: None,
            },
            requests: RequestSequencer::new(),
        }
    }

    pub fn state(&self) -> &PagerState {
        &self.state
    }

    /// Request for the current page, e.g. on first render or a retry.
    pub fn start(&mut self) -> PageRequest {
        self.request(self.state.page)
    }

    /// Request for the next page, unless loading or no more pages are known.
    pub fn next_page(&mut self) -> Option<PageRequest> {
        if self.state.loading || !self.state.has_more {
            return None;
        }

        Some(self.request(self.state.page + 1))
    }

    /// Request for the previous page, unless loading or already on the first.
    pub fn previous_page(&mut self) -> Option<PageRequest> {
        if self.state.loading || self.state.page <= 1 {
            return None;
        }

        Some(self.request(self.state.page - 1))
    }

    fn request(&mut self, page: usize) -> PageRequest {
        self.state.page = page;
        self.state.loading = true;
        self.state.error = None;

        PageRequest {
            ticket: self.requests.next(),
            page,
            limit: SENT_PAGE_SIZE,
            offset: (page - 1) * SENT_PAGE_SIZE,
        }
    }

    /// Applies the outcome of `request`; returns `false` when it was superseded.
    ///
    /// An empty page ends pagination. A failure keeps the displayed page and leaves
    /// `has_more` unchanged.
    pub fn apply(
        &mut self,
        request: &PageRequest,
        result: Result<Vec<SentNotificationDto>, Error>,
    ) -> bool {
        if !self.requests.is_current(request.ticket) {
            return false;
        }

        self.state.loading = false;

        match result {
            Ok(notifications) => {
                self.state.has_more = !notifications.is_empty();
                self.state.notifications = notifications;
            }
            Err(e) => {
                tracing::error!(page = request.page, "Failed to fetch sent notifications: {}", e);
                self.state.error = Some(e.user_message());
            }
        }

        true
    }
}

/// Fetches the page described by `request` for the persisted user.
///
/// # Returns
/// - `Ok(Vec<SentNotificationDto>)` - The page, possibly empty
/// - `Err(Error::AuthError(AuthError::UserIdNotStored))` - No user ID is persisted; nothing was requested
pub async fn fetch_page(
    api: &ApiClient,
    request: &PageRequest,
) -> Result<Vec<SentNotificationDto>, Error> {
    let user_id = api.users().get().ok_or(AuthError::UserIdNotStored)?;

    api.fetch_sent_notifications(&user_id, request.limit, request.offset)
        .await
}

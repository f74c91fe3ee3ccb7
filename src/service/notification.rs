//! Notification rule management.
//!
//! Mutations never patch the local list. After each one the full list is fetched
//! again, and the result of an older fetch never replaces a newer one.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use dioxus_logger::tracing;

use crate::{
    api::ApiClient,
    error::{auth::AuthError, Error},
    model::{
        notification::{AddNotificationCommand, FilterRange, NotificationDto, NotificationFilter},
        real_estate::{BuildingType, TransactionType},
    },
    service::sequence::RequestSequencer,
};

/// Action currently running on one rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowAction {
    #[default]
    Idle,
    Enabling,
    Disabling,
    Deleting,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationsState {
    pub notifications: Vec<NotificationDto>,
    pub loading: bool,
    actions: HashMap<String, RowAction>,
}

impl NotificationsState {
    pub fn action(&self, id: &str) -> RowAction {
        self.actions.get(id).copied().unwrap_or_default()
    }
}

/// Per-user notification rules, shared between clones
#[derive(Clone)]
pub struct NotificationManager {
    api: Arc<ApiClient>,
    state: Arc<Mutex<NotificationsState>>,
    refreshes: Arc<RequestSequencer>,
}

impl NotificationManager {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(NotificationsState::default())),
            refreshes: Arc::new(RequestSequencer::new()),
        }
    }

    pub fn snapshot(&self) -> NotificationsState {
        self.lock().clone()
    }

    /// Fetches the full list of rules.
    ///
    /// # Returns
    /// - `Ok(Vec<NotificationDto>)` - The fetched list; stored unless a newer refresh finished first
    /// - `Err(Error::AuthError(AuthError::UserIdNotStored))` - No user ID is persisted
    /// - `Err(Error)` - The request failed; the previous list is kept
    pub async fn refresh(&self) -> Result<Vec<NotificationDto>, Error> {
        let ticket = self.refreshes.next();
        self.lock().loading = true;

        let result = match self.user_id() {
            Ok(user_id) => self.api.get_user_notifications(&user_id).await,
            Err(e) => Err(e),
        };

        if !self.refreshes.is_current(ticket) {
            tracing::debug!("Discarding superseded notification list");
            return result;
        }

        let mut state = self.lock();
        state.loading = false;
        match &result {
            Ok(notifications) => state.notifications = notifications.clone(),
            Err(e) => tracing::error!("Failed to fetch notifications: {}", e),
        }

        result
    }

    /// Creates a rule and refetches the list.
    pub async fn create(&self, command: &AddNotificationCommand) -> Result<(), Error> {
        let user_id = self.user_id()?;

        self.api.add_notification(&user_id, command).await?;
        tracing::info!(name = %command.name(), "Notification created");

        self.refresh().await?;
        Ok(())
    }

    /// Enables a disabled rule or disables an enabled one, then refetches the list.
    ///
    /// # Returns
    /// - `Ok(true)` - The toggle was sent
    /// - `Ok(false)` - Ignored because an action on this row is already running
    /// - `Err(Error)` - The rule is unknown or a request failed
    pub async fn toggle(&self, id: &str) -> Result<bool, Error> {
        let enabled = self
            .lock()
            .notifications
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.enabled)
            .ok_or_else(|| Error::Validation(format!("Notification {} not found", id)))?;

        let action = if enabled {
            RowAction::Disabling
        } else {
            RowAction::Enabling
        };

        self.run_row_action(id, action).await
    }

    /// Deletes a rule, then refetches the list.
    ///
    /// # Returns
    /// - `Ok(true)` - The delete was sent
    /// - `Ok(false)` - Ignored because an action on this row is already running
    pub async fn delete(&self, id: &str) -> Result<bool, Error> {
        self.run_row_action(id, RowAction::Deleting).await
    }

    async fn run_row_action(&self, id: &str, action: RowAction) -> Result<bool, Error> {
        if !self.begin_action(id, action) {
            tracing::debug!(id = %id, ?action, "Row is busy, ignoring action");
            return Ok(false);
        }

        let result = self.send_row_action(id, action).await;
        self.lock().actions.remove(id);
        result?;

        self.refresh().await?;
        Ok(true)
    }

    async fn send_row_action(&self, id: &str, action: RowAction) -> Result<(), Error> {
        let user_id = self.user_id()?;

        match action {
            RowAction::Enabling => self.api.enable_notification(&user_id, id).await,
            RowAction::Disabling => self.api.disable_notification(&user_id, id).await,
            RowAction::Deleting => self.api.delete_notification(&user_id, id).await,
            RowAction::Idle => Ok(()),
        }
    }

    /// Marks `id` busy unless another action is already running on it.
    fn begin_action(&self, id: &str, action: RowAction) -> bool {
        let mut state = self.lock();
        if state.action(id) != RowAction::Idle {
            return false;
        }

        state.actions.insert(id.to_string(), action);
        true
    }

    fn user_id(&self) -> Result<String, Error> {
        self.api
            .users()
            .get()
            .ok_or_else(|| AuthError::UserIdNotStored.into())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NotificationsState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Delivery channel selected in the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChannelKind {
    #[default]
    Email,
    Webhook,
    Discord,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 3] = [ChannelKind::Email, ChannelKind::Webhook, ChannelKind::Discord];

    /// Wire tag used by the create endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Webhook => "api",
            Self::Discord => "discord",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Webhook => "Webhook",
            Self::Discord => "Discord",
        }
    }
}

/// Raw text inputs of the "add notification" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationForm {
    pub name: String,
    pub channel: ChannelKind,
    pub email: String,
    pub url: String,
    pub webhook_id: String,
    pub token: String,
    pub building_type: BuildingType,
    pub transaction_type: TransactionType,
    pub size_from: String,
    pub size_to: String,
    pub price_from: String,
    pub price_to: String,
    /// Comma separated
    pub sub_types: String,
}

impl NotificationForm {
    /// Validates the inputs and builds the create command.
    ///
    /// Validation runs before any request, so a failure never reaches the API.
    pub fn to_command(&self) -> Result<AddNotificationCommand, Error> {
        if self.name.is_empty() {
            return Err(Error::Validation("Name is required".to_string()));
        }

        let filter = self.filter();

        match self.channel {
            ChannelKind::Email if self.email.is_empty() => {
                Err(Error::Validation("Email is required".to_string()))
            }
            ChannelKind::Email => Ok(AddNotificationCommand::email(&self.name, filter, &self.email)),
            ChannelKind::Webhook if self.url.is_empty() => {
                Err(Error::Validation("URL is required".to_string()))
            }
            ChannelKind::Webhook => Ok(AddNotificationCommand::webhook(&self.name, filter, &self.url)),
            ChannelKind::Discord if self.webhook_id.is_empty() || self.token.is_empty() => Err(
                Error::Validation("Webhook ID and Token are required".to_string()),
            ),
            ChannelKind::Discord => Ok(AddNotificationCommand::discord(
                &self.name,
                filter,
                &self.webhook_id,
                &self.token,
            )),
        }
    }

    pub fn filter(&self) -> NotificationFilter {
        let mut filter = NotificationFilter::new(self.building_type, self.transaction_type);

        if !self.size_from.is_empty() || !self.size_to.is_empty() {
            filter.size = Some(FilterRange {
                from: parse_float(&self.size_from),
                to: parse_float(&self.size_to),
            });
        }

        if !self.price_from.is_empty() || !self.price_to.is_empty() {
            filter.price = Some(FilterRange {
                from: parse_integer(&self.price_from),
                to: parse_integer(&self.price_to),
            });
        }

        if !self.sub_types.is_empty() {
            filter.sub_types = Some(
                self.sub_types
                    .split(',')
                    .map(|sub_type| sub_type.trim().to_string())
                    .collect(),
            );
        }

        filter
    }
}

fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integer bound; a fractional input is truncated.
fn parse_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();

    raw.parse::<i64>()
        .ok()
        .or_else(|| parse_float(raw).map(|v| v.trunc() as i64))
}

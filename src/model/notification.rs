use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{
    real_estate::{BuildingType, TransactionType},
    time::Timestamp,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Email,
    Webhook,
    Discord,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Webhook => "WEBHOOK",
            Self::Discord => "DISCORD",
        }
    }
}

/// Inclusive bound pair; either side may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterRange<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<T>,
}

impl<T> FilterRange<T> {
    /// Returns `None` when both bounds are open, so the field is omitted from the filter.
    pub fn new(from: Option<T>, to: Option<T>) -> Option<Self> {
        if from.is_none() && to.is_none() {
            None
        } else {
            Some(Self { from, to })
        }
    }
}

impl<T: fmt::Display> FilterRange<T> {
    /// Human readable form: `from - to`, `Min: from`, `Max: to` or `Any`.
    pub fn describe(range: Option<&Self>) -> String {
        match range.map(|r| (&r.from, &r.to)) {
            Some((Some(from), Some(to))) => format!("{} - {}", from, to),
            Some((Some(from), None)) => format!("Min: {}", from),
            Some((None, Some(to))) => format!("Max: {}", to),
            _ => "Any".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFilter {
    pub building_type: BuildingType,
    pub transaction_type: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<FilterRange<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<FilterRange<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_types: Option<Vec<String>>,
}

impl NotificationFilter {
    pub fn new(building_type: BuildingType, transaction_type: TransactionType) -> Self {
        Self {
            building_type,
            transaction_type,
            ..Default::default()
        }
    }
}

/// Delivery channel of a stored rule, discriminated by the `type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationChannel {
    Email {
        #[serde(default)]
        email: String,
    },
    Webhook {
        #[serde(default)]
        url: String,
    },
    Discord {
        #[serde(default, rename = "webhookId")]
        webhook_id: String,
        #[serde(default)]
        token: String,
    },
}

impl NotificationChannel {
    pub fn notification_type(&self) -> NotificationType {
        match self {
            Self::Email { .. } => NotificationType::Email,
            Self::Webhook { .. } => NotificationType::Webhook,
            Self::Discord { .. } => NotificationType::Discord,
        }
    }

    /// Label and value of the channel-specific destination.
    pub fn destination(&self) -> (&'static str, &str) {
        match self {
            Self::Email { email } => ("Email", email),
            Self::Webhook { url } => ("URL", url),
            Self::Discord { webhook_id, .. } => ("Discord Webhook ID", webhook_id),
        }
    }
}

/// A stored notification rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub user_id: String,
    pub filter: NotificationFilter,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub channel: NotificationChannel,
}

impl NotificationDto {
    pub fn notification_type(&self) -> NotificationType {
        self.channel.notification_type()
    }
}

/// Body of `POST /api/users/{userId}/notifications`
///
/// The wire tags differ from the stored [`NotificationType`]: `email`, `api` and `discord`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AddNotificationCommand {
    #[serde(rename = "email")]
    Email {
        name: String,
        filter: NotificationFilter,
        email: String,
    },
    #[serde(rename = "api")]
    Webhook {
        name: String,
        filter: NotificationFilter,
        url: String,
    },
    #[serde(rename = "discord")]
    Discord {
        name: String,
        filter: NotificationFilter,
        #[serde(rename = "webhookId")]
        webhook_id: String,
        token: String,
    },
}

impl AddNotificationCommand {
    pub fn email(name: impl Into<String>, filter: NotificationFilter, email: impl Into<String>) -> Self {
        Self::Email {
            name: name.into(),
            filter,
            email: email.into(),
        }
    }

    pub fn webhook(name: impl Into<String>, filter: NotificationFilter, url: impl Into<String>) -> Self {
        Self::Webhook {
            name: name.into(),
            filter,
            url: url.into(),
        }
    }

    pub fn discord(
        name: impl Into<String>,
        filter: NotificationFilter,
        webhook_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::Discord {
            name: name.into(),
            filter,
            webhook_id: webhook_id.into(),
            token: token.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Email { name, .. } | Self::Webhook { name, .. } | Self::Discord { name, .. } => {
                name
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentRealEstateDto {
    pub id: String,
    pub name: String,
    pub url: String,
    pub price: f64,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub provider: String,
}

/// A notification the server already delivered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentNotificationDto {
    pub notification_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub real_estate: SentRealEstateDto,
    #[serde(default)]
    pub sent_at: Option<Timestamp>,
}

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use crate::constant::{TEST_EMAIL, TEST_USERNAME};

fn timestamp() -> String {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .map(|t| t.to_rfc3339())
        .unwrap_or_default()
}

/// Create a mock user body.
///
/// # Arguments
/// - `user_id` - ID of the user
/// - `roles` - Role names, e.g. `["ADMIN"]`
///
/// # Returns
/// - `Value` - Body of `GET /api/users/me`
pub fn mock_user(user_id: &str, roles: &[&str]) -> Value {
    json!({
        "id": user_id,
        "username": TEST_USERNAME,
        "email": TEST_EMAIL,
        "roles": roles,
        "createdAt": timestamp(),
    })
}

/// Create a mock listing in Prague with stored coordinates and no duplicates.
pub fn mock_real_estate(id: &str, price: f64) -> Value {
    json!({
        "id": id,
        "fingerprint": format!("fp-{}", id),
        "name": "Prodej bytu 2+kk 54 m²",
        "url": format!("https://www.sreality.cz/detail/{}", id),
        "price": price,
        "pricePerM2": price / 54.0,
        "sizeInM2": 54.0,
        "currency": "CZK",
        "locality": {
            "city": "Praha",
            "district": "Vinohrady",
            "street": "Korunní",
            "streetNumber": "12",
            "latitude": 50.0755,
            "longitude": 14.4378
        },
        "mainCategory": "APARTMENT",
        "subCategory": "2+kk",
        "transactionType": "SALE",
        "images": [],
        "description": "Light flat close to the metro",
        "provider": "SREALITY",
        "duplicates": []
    })
}

/// Create `count` mock listings with IDs `re-0`, `re-1`, ...
pub fn mock_real_estates(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| mock_real_estate(&format!("re-{}", i), 5_000_000.0 + i as f64 * 10_000.0))
        .collect()
}

/// Create a mock email notification rule for apartments on sale.
pub fn mock_email_notification(id: &str, user_id: &str, name: &str, enabled: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "userId": user_id,
        "type": "EMAIL",
        "email": "a@b.com",
        "enabled": enabled,
        "filter": {
            "buildingType": "APARTMENT",
            "transactionType": "SALE"
        },
        "createdAt": timestamp(),
        "updatedAt": timestamp()
    })
}

/// Create a mock Discord notification rule with a price range.
pub fn mock_discord_notification(id: &str, user_id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "userId": user_id,
        "type": "DISCORD",
        "webhookId": "123456",
        "token": "discord-token",
        "enabled": true,
        "filter": {
            "buildingType": "HOUSE",
            "transactionType": "RENT",
            "price": { "from": 10000, "to": 25000 }
        }
    })
}

/// Create a mock delivered notification.
pub fn mock_sent_notification(notification_id: &str, user_id: &str, real_estate_id: &str) -> Value {
    json!({
        "notificationId": notification_id,
        "userId": user_id,
        "type": "EMAIL",
        "realEstate": {
            "id": real_estate_id,
            "name": "Prodej bytu 2+kk 54 m²",
            "url": format!("https://www.sreality.cz/detail/{}", real_estate_id),
            "price": 5_400_000.0,
            "city": "Praha",
            "image": null,
            "provider": "SREALITY"
        },
        "sentAt": timestamp()
    })
}

/// Create `count` mock delivered notifications.
pub fn mock_sent_notifications(user_id: &str, count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| mock_sent_notification(&format!("n-{}", i), user_id, &format!("re-{}", i)))
        .collect()
}

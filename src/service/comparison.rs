//! Price comparison across the providers listing the same property.

use crate::model::real_estate::{LocalityDto, RealEstateDto};

/// One provider's offer for a listing
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderOffer<'a> {
    pub provider: &'a str,
    pub price: f64,
    pub price_per_m2: f64,
    pub url: &'a str,
    pub images: &'a [String],
    /// Whether this is the listing itself rather than a duplicate
    pub is_original: bool,
}

/// Row of the price history table
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint<'a> {
    pub offer: ProviderOffer<'a>,
    /// Percentage change relative to the highest price; `None` for the highest itself
    pub change_percent: Option<f64>,
}

/// Minimum over the listing price and every duplicate price.
pub fn lowest_price(estate: &RealEstateDto) -> f64 {
    estate
        .duplicates
        .iter()
        .map(|duplicate| duplicate.price)
        .fold(estate.price, f64::min)
}

/// Providers whose duplicate is strictly cheaper than the listing.
pub fn lower_price_providers(estate: &RealEstateDto) -> Vec<&str> {
    estate
        .duplicates
        .iter()
        .filter(|duplicate| duplicate.price < estate.price)
        .map(|duplicate| duplicate.provider.as_str())
        .collect()
}

/// Whole-percent saving of `price` relative to the listing price.
pub fn savings_percent(estate: &RealEstateDto, price: f64) -> i64 {
    if estate.price <= 0.0 {
        return 0;
    }

    ((1.0 - price / estate.price) * 100.0).round() as i64
}

fn offers(estate: &RealEstateDto) -> Vec<ProviderOffer<'_>> {
    let original = ProviderOffer {
        provider: &estate.provider,
        price: estate.price,
        price_per_m2: estate.price_per_m2,
        url: &estate.url,
        images: &estate.images,
        is_original: true,
    };

    std::iter::once(original)
        .chain(estate.duplicates.iter().map(|duplicate| ProviderOffer {
            provider: &duplicate.provider,
            price: duplicate.price,
            price_per_m2: duplicate.price_per_m2,
            url: &duplicate.url,
            images: &duplicate.images,
            is_original: false,
        }))
        .collect()
}

/// All offers including the listing itself, cheapest first.
pub fn offers_by_price(estate: &RealEstateDto) -> Vec<ProviderOffer<'_>> {
    let mut offers = offers(estate);
    offers.sort_by(|a, b| a.price.total_cmp(&b.price));
    offers
}

/// All offers, most expensive first, each with its change from the highest price.
pub fn price_history(estate: &RealEstateDto) -> Vec<PricePoint<'_>> {
    let mut offers = offers(estate);
    offers.sort_by(|a, b| b.price.total_cmp(&a.price));

    let highest = offers.first().map(|offer| offer.price).unwrap_or_default();

    offers
        .into_iter()
        .enumerate()
        .map(|(index, offer)| {
            let change_percent = (index > 0 && highest > 0.0)
                .then(|| (offer.price - highest) / highest * 100.0);

            PricePoint {
                offer,
                change_percent,
            }
        })
        .collect()
}

/// Formats `price` with grouped thousands; `CZK` is shown as `Kč`.
pub fn format_currency(price: f64, currency: &str) -> String {
    let symbol = if currency == "CZK" { "Kč" } else { currency };
    let amount = group_thousands(price);

    if symbol.is_empty() {
        amount
    } else {
        format!("{} {}", amount, symbol)
    }
}

fn group_thousands(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let fraction = format!("{:.3}", abs.fract());
    let fraction = fraction.trim_start_matches('0').trim_end_matches('0');
    if fraction.len() > 1 {
        grouped.push_str(fraction);
    }

    format!("{}{}", sign, grouped)
}

/// Street, number, district and city joined by `, `, skipping blanks.
pub fn address_line(locality: &LocalityDto) -> String {
    [
        Some(locality.street.as_str()),
        locality.street_number.as_deref(),
        Some(locality.district.as_str()),
        Some(locality.city.as_str()),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

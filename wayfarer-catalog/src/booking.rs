use chrono::{Datelike, Duration, Local, NaiveDate};
use std::collections::BTreeMap;
use url::form_urlencoded;
use wayfarer_shared::{BookingSite, Package};

/// Builds search URLs on the partner booking sites for a package.
///
/// Pure template expansion. Check-in and check-out dates come from the stay
/// window the builder was created with.
#[derive(Debug, Clone)]
pub struct BookingLinkBuilder {
    check_in: NaiveDate,
    check_out: NaiveDate,
    adults: u32,
}

impl BookingLinkBuilder {
    pub fn new(check_in: NaiveDate, nights: u32, adults: u32) -> Self {
        Self {
            check_in,
            check_out: check_in + Duration::days(i64::from(nights)),
            adults,
        }
    }

    /// Stay window starting `lead_days` from today.
    pub fn from_today(lead_days: u32, nights: u32, adults: u32) -> Self {
        let check_in = Local::now().date_naive() + Duration::days(i64::from(lead_days));
        Self::new(check_in, nights, adults)
    }

    pub fn links_for(&self, package: &Package) -> BTreeMap<BookingSite, String> {
        BookingSite::ALL
            .into_iter()
            .map(|site| (site, self.link(site, package)))
            .collect()
    }

    pub fn link(&self, site: BookingSite, package: &Package) -> String {
        let destination = escape(&package.destination);
        let query = escape(&format!("{} {}", package.name, package.destination));
        let slug = escape(&slug(&package.destination));
        let (ci, co) = (self.check_in, self.check_out);

        match site {
            BookingSite::Expedia => format!(
                "https://www.expedia.com/Flights-Search?trip=roundtrip&leg1=from:,to:{}&passengers=adults:{},children:0,seniors:0,infantinlap:Y",
                destination, self.adults
            ),
            BookingSite::BookingCom => format!(
                "https://www.booking.com/searchresults.html?ss={}&checkin_year={}&checkin_month={}&checkin_monthday={}&checkout_year={}&checkout_month={}&checkout_monthday={}",
                destination,
                ci.year(), ci.month(), ci.day(),
                co.year(), co.month(), co.day()
            ),
            BookingSite::Agoda => format!(
                "https://www.agoda.com/search?city={}&checkIn={}&checkOut={}&rooms=1&adults={}&children=0",
                destination,
                ci.format("%Y-%m-%d"),
                co.format("%Y-%m-%d"),
                self.adults
            ),
            BookingSite::TripAdvisor => format!(
                "https://www.tripadvisor.com/Search?q={}&searchNearby=false",
                query
            ),
            BookingSite::Kayak => format!("https://www.kayak.com/flights/{}?sort=bestflight_a", destination),
            BookingSite::MakeMyTrip => format!("https://www.makemytrip.com/hotels/{}-hotels.html", slug),
            BookingSite::Cleartrip => format!("https://www.cleartrip.com/hotels/{}/", slug),
            BookingSite::Goibibo => format!("https://www.goibibo.com/hotels/{}/", slug),
        }
    }
}

/// Percent-encode for use inside a URL (spaces as `%20`).
fn escape(value: &str) -> String {
    // byte_serialize encodes a literal '+' as %2B, so every '+' left is a space
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// "Paris, France" -> "paris-france"
fn slug(destination: &str) -> String {
    destination
        .to_lowercase()
        .replace(',', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

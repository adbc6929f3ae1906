//! Booking-embed configuration. The Cal.com widget is a black box to the
//! rest of the site: it gets a link, a namespace, and a height, and nothing
//! is read back from it.

pub const CAL_LINK: &str = "infofuel.ca/30min";
pub const CAL_NAMESPACE: &str = "bookcall";
pub const CAL_EMBED_HEIGHT: &str = "620px";

/// Direct URL for the "open in a new tab" fallback link.
pub fn cal_booking_url() -> String {
    format!("https://cal.com/{CAL_LINK}")
}

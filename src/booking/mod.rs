//! Shared booking state and the (simulated) checkout domain.
//!
//! `BookingStore` is the one holder of in-flight booking details. Pages and
//! the date picker never share ambient state: the store is owned by the app
//! and handed to collaborators explicitly.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::picker::DateRange;
use crate::rooms::Room;

// ─── Booking store ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub room_id:       u32,
    pub room_name:     String,
    pub guests:        u32,
    pub nightly_price: u32,
    pub dates:         DateRange,
}

/// In-memory holder for the booking being assembled. Discarded on exit —
/// nothing is persisted.
#[derive(Debug, Default)]
pub struct BookingStore {
    details: Option<BookingDetails>,
}

impl BookingStore {
    pub fn details(&self) -> Option<&BookingDetails> {
        self.details.as_ref()
    }

    /// Prior stay dates, read by the picker when it mounts.
    pub fn dates(&self) -> Option<DateRange> {
        self.details.as_ref().map(|d| d.dates)
    }

    /// Select a room, keeping previously chosen dates when there are some.
    pub fn select_room(&mut self, room: &Room, default_dates: DateRange) {
        let dates  = self.dates().unwrap_or(default_dates);
        let guests = self
            .details
            .as_ref()
            .map(|d| d.guests.min(room.capacity))
            .unwrap_or(1);
        self.details = Some(BookingDetails {
            room_id:       room.id,
            room_name:     room.name.clone(),
            guests,
            nightly_price: room.price,
            dates,
        });
        tracing::debug!(room = %room.name, "room selected");
    }

    /// Committed-range sink for the picker.
    pub fn set_dates(&mut self, dates: DateRange) {
        if let Some(d) = self.details.as_mut() {
            d.dates = dates;
        }
    }

    pub fn set_guests(&mut self, guests: u32) {
        if let Some(d) = self.details.as_mut() {
            d.guests = guests.max(1);
        }
    }

    pub fn clear(&mut self) {
        self.details = None;
    }
}

// ─── Pricing ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fees {
    pub cleaning: u32,
    pub service:  u32,
}

impl Default for Fees {
    fn default() -> Self {
        Self { cleaning: 15, service: 10 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub nights:   i64,
    pub subtotal: u32,
    pub cleaning: u32,
    pub service:  u32,
    pub total:    u32,
}

/// Price a stay. A same-day range is quoted as one night so the summary
/// never shows a zero-dollar stay.
pub fn quote(nightly_price: u32, dates: DateRange, fees: Fees) -> Quote {
    let nights   = dates.nights().max(1);
    let subtotal = nightly_price * nights as u32;
    Quote {
        nights,
        subtotal,
        cleaning: fees.cleaning,
        service:  fees.service,
        total:    subtotal + fees.cleaning + fees.service,
    }
}

// ─── Guest form ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    SpecialRequests,
    CardName,
    CardNumber,
    CardExpiry,
    CardCvc,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName       => "First Name",
            Field::LastName        => "Last Name",
            Field::Email           => "Email",
            Field::Phone           => "Phone Number",
            Field::SpecialRequests => "Special Requests",
            Field::CardName        => "Name on Card",
            Field::CardNumber      => "Card Number",
            Field::CardExpiry      => "Expiry Date",
            Field::CardCvc         => "CVC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(Field),
    #[error("Email is invalid")]
    InvalidEmail,
    #[error("Card number must be 16 digits")]
    InvalidCardNumber,
    #[error("Expiry date must be in MM/YY format")]
    InvalidExpiry,
    #[error("CVC must be 3 or 4 digits")]
    InvalidCvc,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(f)       => *f,
            FieldError::InvalidEmail      => Field::Email,
            FieldError::InvalidCardNumber => Field::CardNumber,
            FieldError::InvalidExpiry     => Field::CardExpiry,
            FieldError::InvalidCvc        => Field::CardCvc,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GuestForm {
    pub first_name:       String,
    pub last_name:        String,
    pub email:            String,
    pub phone:            String,
    pub special_requests: String,
    pub card_name:        String,
    pub card_number:      String,
    pub card_expiry:      String,
    pub card_cvc:         String,
}

impl GuestForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName       => &self.first_name,
            Field::LastName        => &self.last_name,
            Field::Email           => &self.email,
            Field::Phone           => &self.phone,
            Field::SpecialRequests => &self.special_requests,
            Field::CardName        => &self.card_name,
            Field::CardNumber      => &self.card_number,
            Field::CardExpiry      => &self.card_expiry,
            Field::CardCvc         => &self.card_cvc,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName       => &mut self.first_name,
            Field::LastName        => &mut self.last_name,
            Field::Email           => &mut self.email,
            Field::Phone           => &mut self.phone,
            Field::SpecialRequests => &mut self.special_requests,
            Field::CardName        => &mut self.card_name,
            Field::CardNumber      => &mut self.card_number,
            Field::CardExpiry      => &mut self.card_expiry,
            Field::CardCvc         => &mut self.card_cvc,
        }
    }

    /// Step 1 — guest info. Mirrors the storefront rules: all fields but the
    /// special requests are required, email must look like `x@y.z`.
    pub fn validate_guest_info(&self) -> Vec<FieldError> {
        let mut errs = Vec::new();
        for f in [Field::FirstName, Field::LastName, Field::Email, Field::Phone] {
            if self.value(f).trim().is_empty() {
                errs.push(FieldError::Required(f));
            }
        }
        let email = self.email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            errs.push(FieldError::InvalidEmail);
        }
        errs
    }

    /// Step 2 — payment. 16-digit card number (spaces allowed), MM/YY
    /// expiry, 3-4 digit CVC. Nothing is ever charged.
    pub fn validate_payment(&self) -> Vec<FieldError> {
        let mut errs = Vec::new();

        if self.card_name.trim().is_empty() {
            errs.push(FieldError::Required(Field::CardName));
        }

        let number: String = self.card_number.chars().filter(|c| !c.is_whitespace()).collect();
        if number.is_empty() {
            errs.push(FieldError::Required(Field::CardNumber));
        } else if number.len() != 16 || !number.chars().all(|c| c.is_ascii_digit()) {
            errs.push(FieldError::InvalidCardNumber);
        }

        let expiry = self.card_expiry.trim();
        if expiry.is_empty() {
            errs.push(FieldError::Required(Field::CardExpiry));
        } else if !looks_like_expiry(expiry) {
            errs.push(FieldError::InvalidExpiry);
        }

        let cvc = self.card_cvc.trim();
        if cvc.is_empty() {
            errs.push(FieldError::Required(Field::CardCvc));
        } else if !(3..=4).contains(&cvc.len()) || !cvc.chars().all(|c| c.is_ascii_digit()) {
            errs.push(FieldError::InvalidCvc);
        }

        errs
    }

    pub fn card_last_four(&self) -> String {
        let digits: String = self.card_number.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect()
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else { return false };
    let Some((host, tld)) = domain.rsplit_once('.') else { return false };
    !local.is_empty()
        && !host.is_empty()
        && !tld.is_empty()
        && !s.chars().any(char::is_whitespace)
}

fn looks_like_expiry(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 5
        && bytes[2] == b'/'
        && bytes[..2].iter().all(u8::is_ascii_digit)
        && bytes[3..].iter().all(u8::is_ascii_digit)
}

/// Confirmation code shown when a booking "completes": 8 uppercase
/// alphanumerics derived from a fresh UUID.
pub fn confirmation_code() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(8)
        .collect::<String>()
        .to_uppercase()
}

// ─── Account mocks ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Upcoming,
    Completed,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming  => "upcoming",
            BookingStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PastBooking {
    pub room_name:   &'static str,
    pub status:      BookingStatus,
    pub check_in:    NaiveDate,
    pub check_out:   NaiveDate,
    pub guests:      u32,
    pub total_price: u32,
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub name:      &'static str,
    pub email:     &'static str,
    pub phone:     &'static str,
    pub join_date: &'static str,
}

pub fn mock_profile() -> Profile {
    Profile {
        name:      "Alex Johnson",
        email:     "alex.johnson@example.com",
        phone:     "+1 (555) 123-4567",
        join_date: "May 2023",
    }
}

pub fn mock_bookings() -> Vec<PastBooking> {
    vec![
        PastBooking {
            room_name:   "6-Bed Mixed Dormitory",
            status:      BookingStatus::Upcoming,
            check_in:    NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
            check_out:   NaiveDate::from_ymd_opt(2025, 7, 18).unwrap(),
            guests:      1,
            total_price: 117,
        },
        PastBooking {
            room_name:   "Private Double Room",
            status:      BookingStatus::Completed,
            check_in:    NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            check_out:   NaiveDate::from_ymd_opt(2025, 2, 13).unwrap(),
            guests:      2,
            total_price: 285,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rooms::load_rooms;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn range(a: NaiveDate, b: NaiveDate) -> DateRange {
        DateRange { start: a, end: b }
    }

    #[test]
    fn store_keeps_dates_across_room_changes() {
        let rooms   = load_rooms().unwrap();
        let default = range(d(2024, 4, 1), d(2024, 4, 3));
        let mut store = BookingStore::default();

        store.select_room(&rooms[0], default);
        store.set_dates(range(d(2024, 6, 10), d(2024, 6, 14)));
        store.select_room(&rooms[2], default);

        let det = store.details().unwrap();
        assert_eq!(det.room_id, rooms[2].id);
        assert_eq!(det.dates, range(d(2024, 6, 10), d(2024, 6, 14)));
    }

    #[test]
    fn guests_are_clamped_to_capacity_on_room_change() {
        let rooms   = load_rooms().unwrap();
        let default = range(d(2024, 4, 1), d(2024, 4, 3));
        let mut store = BookingStore::default();

        store.select_room(&rooms[2], default); // capacity 2
        store.set_guests(2);
        store.select_room(&rooms[0], default); // dorm bed, capacity 1
        assert_eq!(store.details().unwrap().guests, 1);
    }

    #[test]
    fn set_dates_without_a_room_is_a_noop() {
        let mut store = BookingStore::default();
        store.set_dates(range(d(2024, 4, 1), d(2024, 4, 3)));
        assert!(store.details().is_none());
    }

    #[test]
    fn quote_adds_fees_on_top_of_the_nightly_rate() {
        let q = quote(95, range(d(2024, 4, 10), d(2024, 4, 13)), Fees::default());
        assert_eq!(q.nights, 3);
        assert_eq!(q.subtotal, 285);
        assert_eq!(q.total, 285 + 15 + 10);
    }

    #[test]
    fn same_day_stay_is_quoted_as_one_night() {
        let q = quote(39, range(d(2024, 4, 10), d(2024, 4, 10)), Fees::default());
        assert_eq!(q.nights, 1);
        assert_eq!(q.subtotal, 39);
    }

    #[test]
    fn guest_info_requires_the_core_fields() {
        let form = GuestForm::default();
        let errs = form.validate_guest_info();
        assert_eq!(errs.len(), 4);
        assert!(errs.iter().all(|e| matches!(e, FieldError::Required(_))));
    }

    #[test]
    fn bad_email_is_rejected_with_a_typed_error() {
        let form = GuestForm {
            first_name: "Ada".into(),
            last_name:  "Lovelace".into(),
            email:      "not-an-email".into(),
            phone:      "+44 1234".into(),
            ..GuestForm::default()
        };
        assert_eq!(form.validate_guest_info(), vec![FieldError::InvalidEmail]);

        let ok = GuestForm { email: "ada@example.co.uk".into(), ..form };
        assert!(ok.validate_guest_info().is_empty());
    }

    #[test]
    fn payment_validation_matches_the_storefront_rules() {
        let mut form = GuestForm {
            card_name:   "Ada Lovelace".into(),
            card_number: "4242 4242 4242 4242".into(),
            card_expiry: "04/27".into(),
            card_cvc:    "123".into(),
            ..GuestForm::default()
        };
        assert!(form.validate_payment().is_empty());
        assert_eq!(form.card_last_four(), "4242");

        form.card_number = "1234".into();
        form.card_expiry = "2027-04".into();
        form.card_cvc    = "12".into();
        let errs = form.validate_payment();
        assert!(errs.contains(&FieldError::InvalidCardNumber));
        assert!(errs.contains(&FieldError::InvalidExpiry));
        assert!(errs.contains(&FieldError::InvalidCvc));
    }

    #[test]
    fn confirmation_codes_are_short_and_uppercase() {
        let code = confirmation_code();
        assert_eq!(code.len(), 8);
        assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}

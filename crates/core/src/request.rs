//! Reservation request builder - validation plus assembly
//!
//! Pure: validates the selection, the lease period, and the contact fields,
//! then assembles the outbound [`ReservationRequest`]. Submission itself is
//! the caller's job.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{ContactInfo, ReservationRequest};
use crate::selection::SelectionSet;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Brazilian mobile format: `(92) 98765-4321`
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{2}\) \d{5}-\d{4}$").unwrap());

/// Inclusive start / exclusive-end-agnostic lease period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// True when the two periods share at least one day
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

/// Reservation policy knobs, sourced from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationPolicy {
    pub min_lease_days: u32,
}

impl Default for ReservationPolicy {
    fn default() -> Self {
        Self { min_lease_days: 30 }
    }
}

/// Contact fields a validation failure can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    CompanyName,
    ContactName,
    Email,
    Phone,
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ContactField::CompanyName => "company name",
            ContactField::ContactName => "contact name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
        };
        write!(f, "{}", name)
    }
}

fn incomplete(field: ContactField, reason: &str) -> Error {
    Error::IncompleteContact {
        field,
        reason: reason.to_string(),
    }
}

/// Validate every required contact field, surfacing the first failure
/// per-field so the form can highlight it.
pub fn validate_contact(contact: &ContactInfo) -> Result<()> {
    if contact.company_name.trim().chars().count() < 2 {
        return Err(incomplete(
            ContactField::CompanyName,
            "must have at least 2 characters",
        ));
    }
    if contact.contact_name.trim().chars().count() < 3 {
        return Err(incomplete(
            ContactField::ContactName,
            "must have at least 3 characters",
        ));
    }
    if !EMAIL_RE.is_match(contact.email.trim()) {
        return Err(incomplete(ContactField::Email, "not a valid email address"));
    }
    if !PHONE_RE.is_match(contact.phone.trim()) {
        return Err(incomplete(
            ContactField::Phone,
            "expected format (00) 00000-0000",
        ));
    }
    Ok(())
}

fn validate_period(period: DateRange, policy: &ReservationPolicy) -> Result<()> {
    let days = period.duration_days();
    if days <= 0 || days < i64::from(policy.min_lease_days) {
        return Err(Error::InvalidDateRange {
            days,
            min_days: policy.min_lease_days,
        });
    }
    Ok(())
}

/// Build a reservation request from the current selection.
///
/// Fails with `EmptySelection`, `InvalidDateRange`, or `IncompleteContact`;
/// on success the request carries every selected space ID and the summed
/// monthly rate.
pub fn build_request(
    selection: &SelectionSet,
    period: DateRange,
    contact: &ContactInfo,
    notes: Option<String>,
    policy: &ReservationPolicy,
) -> Result<ReservationRequest> {
    if selection.is_empty() {
        return Err(Error::EmptySelection);
    }
    validate_period(period, policy)?;
    validate_contact(contact)?;

    Ok(ReservationRequest {
        space_ids: selection.space_ids(),
        start_date: period.start,
        end_date: period.end,
        total_price: selection.summary().total_price,
        contact: contact.clone(),
        notes,
    })
}

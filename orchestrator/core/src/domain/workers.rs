// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Workers
//!
//! Pure computations used by the domain handlers. Nothing in here performs
//! I/O or keeps state; the only entropy source is [`ReferenceIssuer`], which
//! handlers receive explicitly.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Invoice arithmetic, maintenance-calendar lookups, reference issuing

use chrono::{Datelike, NaiveDate};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

pub const DEFAULT_VAT_RATE: f64 = 0.18;

/// Day of month the travel lift is perpetually under maintenance.
pub const DEFAULT_BLOCKED_DAY: u32 = 15;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorkerError {
    #[error("Invalid amount: {0} (must be a finite, non-negative number)")]
    InvalidAmount(f64),

    #[error("Invalid VAT rate: {0} (must be between 0 and 1)")]
    InvalidVatRate(f64),
}

/// Result of [`calculate_invoice`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Invoice {
    pub subtotal: f64,
    pub vat: f64,
    pub total: f64,
    pub vat_rate: f64,
}

impl Invoice {
    /// VAT rate as a display percentage (0.18 -> 18.0)
    pub fn vat_percent(&self) -> f64 {
        self.vat_rate * 100.0
    }
}

/// `vat = amount * vat_rate`, `total = amount + vat`. No rounding is applied.
///
/// Amounts whose total overflows `f64` are rejected as invalid.
pub fn calculate_invoice(amount: f64, vat_rate: f64) -> Result<Invoice, WorkerError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(WorkerError::InvalidAmount(amount));
    }
    if !vat_rate.is_finite() || !(0.0..=1.0).contains(&vat_rate) {
        return Err(WorkerError::InvalidVatRate(vat_rate));
    }

    let vat = amount * vat_rate;
    if !(amount + vat).is_finite() {
        return Err(WorkerError::InvalidAmount(amount));
    }

    Ok(Invoice {
        subtotal: amount,
        vat,
        total: amount + vat,
        vat_rate,
    })
}

/// Fixed-blocklist stand-in for a real availability lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceCalendar {
    blocked_days: Vec<u32>,
}

impl MaintenanceCalendar {
    pub fn new(blocked_days: Vec<u32>) -> Self {
        Self { blocked_days }
    }

    pub fn blocked_days(&self) -> &[u32] {
        &self.blocked_days
    }

    /// True when the day-of-month of `date` is on the blocklist.
    ///
    /// A valid ISO date is read through chrono. Otherwise the digits after the
    /// last `-` are used, so `2025-02-30` still resolves to day 30. Strings
    /// without a day component (e.g. `tomorrow`) are never blocked.
    pub fn is_blocked(&self, date: &str) -> bool {
        match day_of_month(date) {
            Some(day) => self.blocked_days.contains(&day),
            None => false,
        }
    }
}

impl Default for MaintenanceCalendar {
    fn default() -> Self {
        Self::new(vec![DEFAULT_BLOCKED_DAY])
    }
}

/// Deterministic conflict predicate against the default calendar.
pub fn check_schedule_conflict(date: &str) -> bool {
    MaintenanceCalendar::default().is_blocked(date)
}

fn day_of_month(date: &str) -> Option<u32> {
    let date = date.trim();
    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(parsed.day());
    }

    let (_, tail) = date.rsplit_once('-')?;
    if tail.is_empty() || !tail.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    tail.parse().ok()
}

/// Source of identifiers embedded in simulated invoices and tickets.
pub trait ReferenceIssuer: Send + Sync {
    fn issue(&self, prefix: &str) -> String;
}

/// Production issuer backed by random UUIDs
#[derive(Debug, Default)]
pub struct RandomReferences;

impl ReferenceIssuer for RandomReferences {
    fn issue(&self, prefix: &str) -> String {
        let id = uuid::Uuid::new_v4().simple().to_string();
        format!("{}-{}", prefix, id[..8].to_uppercase())
    }
}

/// Counter-based issuer; identical call sequences yield identical references.
#[derive(Debug, Default)]
pub struct SequentialReferences {
    next: AtomicU64,
}

impl SequentialReferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReferenceIssuer for SequentialReferences {
    fn issue(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{:04}", prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_totals() {
        let invoice = calculate_invoice(500.0, DEFAULT_VAT_RATE).unwrap();
        assert_eq!(invoice.subtotal, 500.0);
        assert!((invoice.vat - 90.0).abs() < 1e-9);
        assert!((invoice.total - 590.0).abs() < 1e-9);
        assert!((invoice.vat_percent() - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_invoice_total_identity() {
        for amount in [0.0, 1.0, 13.37, 999.99, 1_000_000.0] {
            for rate in [0.0, 0.08, 0.18, 0.2, 1.0] {
                let invoice = calculate_invoice(amount, rate).unwrap();
                assert_eq!(invoice.total, amount + amount * rate);
                assert!(invoice.total >= amount);
            }
        }
    }

    #[test]
    fn test_invoice_rejects_bad_input() {
        assert_eq!(
            calculate_invoice(-1.0, 0.18),
            Err(WorkerError::InvalidAmount(-1.0))
        );
        assert!(calculate_invoice(f64::NAN, 0.18).is_err());
        assert!(calculate_invoice(f64::INFINITY, 0.18).is_err());
        assert_eq!(
            calculate_invoice(100.0, 1.5),
            Err(WorkerError::InvalidVatRate(1.5))
        );
        assert!(calculate_invoice(100.0, -0.1).is_err());
    }

    #[test]
    fn test_invoice_rejects_overflowing_total() {
        let amount = f64::MAX / 2.0;
        assert_eq!(
            calculate_invoice(amount, DEFAULT_VAT_RATE),
            Err(WorkerError::InvalidAmount(amount))
        );
        assert!(calculate_invoice(f64::MAX, 0.0).is_ok());
    }

    #[test]
    fn test_schedule_conflict_default_calendar() {
        assert!(check_schedule_conflict("2025-11-15"));
        assert!(!check_schedule_conflict("2025-11-20"));
        assert!(!check_schedule_conflict("2025-11-13"));
        assert!(!check_schedule_conflict("tomorrow"));
        assert!(!check_schedule_conflict(""));
    }

    #[test]
    fn test_schedule_conflict_is_stable() {
        for date in ["2025-11-15", "2025-11-20", "tomorrow", "2024-02-30"] {
            let first = check_schedule_conflict(date);
            for _ in 0..10 {
                assert_eq!(check_schedule_conflict(date), first);
            }
        }
    }

    #[test]
    fn test_calendar_reads_invalid_dates_by_suffix() {
        let calendar = MaintenanceCalendar::new(vec![30]);
        assert!(calendar.is_blocked("2025-02-30"));
        assert!(!calendar.is_blocked("2025-02-3x"));
        assert!(!calendar.is_blocked("no date here"));
    }

    #[test]
    fn test_sequential_references() {
        let issuer = SequentialReferences::new();
        assert_eq!(issuer.issue("INV"), "INV-0001");
        assert_eq!(issuer.issue("TICKET"), "TICKET-0002");
    }

    #[test]
    fn test_random_references_shape() {
        let reference = RandomReferences.issue("INV");
        assert!(reference.starts_with("INV-"));
        assert_eq!(reference.len(), "INV-".len() + 8);
    }
}

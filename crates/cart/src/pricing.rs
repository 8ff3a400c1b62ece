//! Checkout pricing helpers.
//!
//! Pure arithmetic for the order summary: percentage discount off the
//! snapshot subtotal, tax on the discounted amount, grand total. The backend
//! recomputes everything at order placement; these figures are display-side
//! only.

use bookstall_core::{DomainError, DomainResult, ValueObject};

use crate::snapshot::CartSnapshot;

/// Default sales-tax rate applied to the discounted subtotal.
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// Discount/tax parameters for a checkout summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckoutPricing {
    discount_percent: f64,
    tax_rate: f64,
}

impl Default for CheckoutPricing {
    fn default() -> Self {
        Self {
            discount_percent: 0.0,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl CheckoutPricing {
    pub fn new(discount_percent: f64, tax_rate: f64) -> DomainResult<Self> {
        if !(0.0..=100.0).contains(&discount_percent) {
            return Err(DomainError::validation(
                "discount must be between 0 and 100 percent",
            ));
        }
        if !(0.0..1.0).contains(&tax_rate) {
            return Err(DomainError::validation("tax rate must be in [0, 1)"));
        }
        Ok(Self {
            discount_percent,
            tax_rate,
        })
    }

    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn breakdown(&self, snapshot: &CartSnapshot) -> PriceBreakdown {
        let subtotal = snapshot.total_price();
        let discount = subtotal * self.discount_percent / 100.0;
        let tax = (subtotal - discount) * self.tax_rate;
        PriceBreakdown {
            subtotal,
            discount,
            tax,
            total: subtotal - discount + tax,
        }
    }
}

/// Itemized checkout figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub total: f64,
}

impl ValueObject for PriceBreakdown {}

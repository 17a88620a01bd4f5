//! Split-bill calculator.
//!
//! A `SplitDraft` is the ephemeral working state of one bill-splitting
//! interaction. Text from the form fields enters through explicit
//! parse-and-validate setters; the friend's share is always derived
//! from the bill total and the user's expense, never stored, so
//! `user_expense + friend_expense == bill_total` holds by construction
//! whenever a bill total is set.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

/// Which party fronted the money for the bill.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Payer {
    #[default]
    User,
    Friend,
}

/// Signed change to apply to the selected friend's balance.
///
/// Positive means the friend now owes the user more; negative means
/// the user now owes the friend more.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceDelta {
    pub amount: f64,
}

/// The ephemeral working state of one bill-splitting interaction.
///
/// Created fresh when a friend is selected and discarded on submit or
/// on selection change (see `UiMode::Splitting`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitDraft {
    bill_total: Option<f64>,
    user_expense: Option<f64>,
    payer: Payer,
}

impl SplitDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bill_total(&self) -> Option<f64> {
        self.bill_total
    }

    pub fn user_expense(&self) -> Option<f64> {
        self.user_expense
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }

    /// The friend's implied share: bill total minus the user's expense,
    /// an unset expense counting as zero. `None` until a bill total has
    /// been entered. Read-only; there is no setter.
    pub fn friend_expense(&self) -> Option<f64> {
        self.bill_total
            .map(|bill| bill - self.user_expense.unwrap_or(0.0))
    }

    /// Parses and stores the bill total. The empty string clears the
    /// field back to unset.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNumber` for non-numeric input; the stored value
    /// is unchanged.
    pub fn enter_bill_total(&mut self, input: &str) -> Result<()> {
        self.bill_total = parse_amount(input)?;
        Ok(())
    }

    /// Parses and stores the user's expense. The empty string clears
    /// the field back to unset.
    ///
    /// An expense greater than the current bill total is rejected and
    /// the prior valid value is retained; the value is never clamped to
    /// the maximum.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNumber` for non-numeric input and
    /// `ExpenseExceedsBill` for an over-bill amount; in both cases the
    /// stored value is unchanged.
    pub fn enter_user_expense(&mut self, input: &str) -> Result<()> {
        let parsed = parse_amount(input)?;
        if let Some(value) = parsed {
            let bill = self.bill_total.unwrap_or(0.0);
            if value > bill {
                return Err(TallyError::ExpenseExceedsBill {
                    attempted: value,
                    bill,
                });
            }
        }
        self.user_expense = parsed;
        Ok(())
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    /// Computes the balance delta for the selected friend.
    ///
    /// If the user paid, the friend owes the user their share
    /// (`+friend_expense`); if the friend paid, the user owes the
    /// friend the user's share (`-user_expense`).
    ///
    /// # Errors
    ///
    /// Returns `IncompleteInput` when the bill total is unset or zero,
    /// or the user expense is unset. The draft is unchanged; nothing is
    /// applied.
    pub fn settle(&self) -> Result<BalanceDelta> {
        let bill = match self.bill_total {
            Some(bill) if bill != 0.0 => bill,
            _ => return Err(TallyError::IncompleteInput),
        };
        let user_expense = self.user_expense.ok_or(TallyError::IncompleteInput)?;
        let friend_expense = bill - user_expense;

        let amount = match self.payer {
            Payer::User => friend_expense,
            Payer::Friend => -user_expense,
        };
        Ok(BalanceDelta { amount })
    }
}

fn parse_amount(input: &str) -> Result<Option<f64>> {
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse::<f64>()
        .map(Some)
        .map_err(|_| TallyError::invalid_number(input))
}

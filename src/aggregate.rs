// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over the entity collections. Everything here is
//! deterministic and side-effect free; the only ordering dependency is the
//! iteration order of the inputs.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Account, Category, ColorTag, Direction, Transaction};

/// Sum of all account balances; zero for an empty collection.
pub fn total_balance(accounts: &[Account]) -> Decimal {
    accounts.iter().map(|a| a.balance).sum()
}

/// Sum of amounts whose direction tag matches; zero for no matches.
pub fn sum_by_direction(transactions: &[Transaction], direction: Direction) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.direction == direction)
        .map(|t| t.amount)
        .sum()
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub id: String,
    pub name: String,
    pub color: ColorTag,
    pub total: Decimal,
}

/// Expense totals per category, in the order of the reference list.
/// Categories with nothing spent are left out entirely rather than shown as
/// zero-width slices.
pub fn category_breakdown(
    transactions: &[Transaction],
    categories: &[Category],
) -> Vec<CategoryTotal> {
    categories
        .iter()
        .filter_map(|cat| {
            let total: Decimal = transactions
                .iter()
                .filter(|t| t.direction == Direction::Expense && t.category_id == cat.id)
                .map(|t| t.amount)
                .sum();
            if total.is_zero() {
                None
            } else {
                Some(CategoryTotal {
                    id: cat.id.clone(),
                    name: cat.name.clone(),
                    color: cat.color,
                    total,
                })
            }
        })
        .collect()
}

/// Share of `category_sum` in `total_expense` as a percentage, rounded to
/// one decimal place. A zero total yields 0 rather than a NaN/Infinity
/// display artifact.
pub fn percentage_of_total(category_sum: Decimal, total_expense: Decimal) -> Decimal {
    if total_expense.is_zero() {
        return Decimal::ZERO;
    }
    (category_sum / total_expense * Decimal::ONE_HUNDRED).round_dp(1)
}

/// Bounded lazy prefix of the transaction sequence in caller-provided order
/// (newest-first under the posting policy). Re-derived on every call.
pub fn recent_transactions(
    transactions: &[Transaction],
    limit: usize,
) -> impl Iterator<Item = &Transaction> {
    transactions.iter().take(limit)
}

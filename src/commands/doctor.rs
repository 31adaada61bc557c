// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use crate::utils::pretty_table;
use anyhow::Result;

// The store upholds its invariants operationally; this sweep exists for
// ledgers that arrived from a hand-edited or older snapshot.
pub fn handle(store: &Store) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Transactions whose account no longer resolves
    for t in store.transactions() {
        if store.account(&t.account_id).is_none() {
            rows.push(vec![
                "orphan_transaction".into(),
                format!("{} -> {}", t.id, t.account_id),
            ]);
        }
    }

    // 2) Negative stored magnitudes
    for t in store.transactions() {
        if t.amount.is_sign_negative() {
            rows.push(vec![
                "negative_amount".into(),
                format!("{}: {}", t.id, t.amount),
            ]);
        }
    }

    // 3) Dangling category ids: tolerated at display time, still worth listing
    for t in store.transactions() {
        if store.category(&t.category_id).is_none() {
            rows.push(vec![
                "unknown_category".into(),
                format!("{} -> {}", t.id, t.category_id),
            ]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

// src/domain/finance.rs
use std::rc::Rc;

use chrono::NaiveDate;

use crate::datekey::{day_key, today};
use crate::entity::{new_id, Transaction, TxKind};
use crate::store::{Collection, Substrate};

use super::keys;

/// Input for a new transaction; `amount` arrives as raw user text and is
/// parsed (and possibly rejected) by `Finance::add`.
#[derive(Debug, Clone, Default)]
pub struct TxForm {
    pub kind: TxKind,
    pub amount: String,
    pub category: String,
    pub note: String,
}

/// Income/expense/net for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyTotals {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

/// Transaction ledger, newest first.
pub struct Finance {
    collection: Collection<Vec<Transaction>>,
    items: Vec<Transaction>,
}

impl Finance {
    pub fn open(substrate: Rc<dyn Substrate>) -> Self {
        let collection = Collection::new(substrate, keys::FINANCE);
        let items = collection.load(Vec::new());
        Self { collection, items }
    }

    /// Book a transaction on today's date. A zero or unparseable amount
    /// makes the whole add a no-op; nothing is inserted and the caller
    /// keeps its form.
    pub fn add(&mut self, form: &TxForm) -> Option<&Transaction> {
        self.add_on(form, today())
    }

    pub fn add_on(&mut self, form: &TxForm, date: NaiveDate) -> Option<&Transaction> {
        let amount = form.amount.trim().parse::<f64>().unwrap_or(0.0);
        if amount == 0.0 || amount.is_nan() {
            return None;
        }

        self.items.insert(
            0,
            Transaction {
                id: new_id(),
                date: day_key(date),
                kind: form.kind,
                amount,
                category: form.category.clone(),
                note: form.note.clone(),
            },
        );
        self.collection.save(&self.items);
        self.items.first()
    }

    /// Sum the month's transactions into income, expense and net. A pure
    /// fold over the full ledger on every call; the month filter is the
    /// day-key prefix match guaranteed by the date-key scheme.
    pub fn monthly_totals(&self, month: &str) -> MonthlyTotals {
        let mut totals = MonthlyTotals::default();
        for tx in self.items.iter().filter(|t| t.date.starts_with(month)) {
            match tx.kind {
                TxKind::Income => totals.income += tx.amount,
                TxKind::Expense => totals.expense += tx.amount,
            }
        }
        totals.net = totals.income - totals.expense;
        totals
    }

    pub fn remove(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        if self.items.len() != before {
            self.collection.save(&self.items);
        }
    }

    pub fn list(&self) -> &[Transaction] {
        &self.items
    }

    pub(crate) fn replace(&mut self, items: Vec<Transaction>) {
        self.items = items;
        self.collection.save(&self.items);
    }
}

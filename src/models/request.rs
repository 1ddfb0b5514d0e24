//! Inbound operation inputs
//!
//! Request bodies are loosely typed. Each input struct pulls its fields out of
//! a JSON value one at a time: a field that is missing or has the wrong JSON
//! type becomes `None`, and the service layer decides what `None` means for
//! that operation.

use serde_json::Value;

/// Body of a create-or-replace request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetInput {
    pub budget: Option<f64>,
}

impl BudgetInput {
    pub fn from_json(body: &Value) -> Self {
        Self {
            budget: number_field(body, "budget"),
        }
    }
}

/// Body of a partial update request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvelopePatch {
    pub budget: Option<f64>,
    pub spending: Option<f64>,
}

impl EnvelopePatch {
    pub fn from_json(body: &Value) -> Self {
        Self {
            budget: number_field(body, "budget"),
            spending: number_field(body, "spending"),
        }
    }
}

/// Body of a transfer request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferRequest {
    pub category_from: Option<String>,
    pub category_to: Option<String>,
    pub transfer_amt: Option<f64>,
}

impl TransferRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: f64) -> Self {
        Self {
            category_from: Some(from.into()),
            category_to: Some(to.into()),
            transfer_amt: Some(amount),
        }
    }

    pub fn from_json(body: &Value) -> Self {
        Self {
            category_from: string_field(body, "category_from"),
            category_to: string_field(body, "category_to"),
            transfer_amt: number_field(body, "transfer_amt"),
        }
    }
}

fn number_field(body: &Value, key: &str) -> Option<f64> {
    body.get(key).and_then(Value::as_f64)
}

fn string_field(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_string)
}

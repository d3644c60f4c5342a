use serde::{Deserialize, Serialize};

/// One billable unit on an invoice. `labour_charges` is optional on the wire
/// and defaults to zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub qty: f64,
    pub price: f64,
    #[serde(default)]
    pub labour_charges: f64,
}

impl LineItem {
    pub fn line_total(&self) -> f64 {
        self.qty * self.price + self.labour_charges
    }
}

//! Order calculator for custom t-shirt orders.
//!
//! The order form is read into an [`OrderForm`], validated, and priced as
//!
//! ```text
//! total = model price × quantity
//!       + Σ (extra price × quantity)   for each checked extra
//!       + shipping cost
//! ```
//!
//! [`OrderCalculator`] holds the two-state lifecycle of the summary panel:
//! `Unsubmitted` until a valid submit, `Summarized` afterwards, and back to
//! `Unsubmitted` on reset. A failed submit changes nothing.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ShopError, ShopResult};
use crate::money::Money;

/// Notice shown when the order form is incomplete
pub const INCOMPLETE_ORDER_NOTICE: &str =
    "Completa nombre, modelo, talla, color y cantidad (mínimo 1).";

/// Summary placeholder before any valid submit
pub const SUMMARY_PLACEHOLDER: &str = "Aún no has generado tu pedido.";

/// Customer label before any valid submit
pub const NO_CUSTOMER: &str = "—";

/// A t-shirt model with its unit price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOption {
    pub name: String,
    #[serde(deserialize_with = "crate::money::deserialize_loose")]
    pub unit_price: Money,
}

/// Optional per-garment extra (personalization, patches)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraOption {
    pub id: String,
    pub label: String,
    #[serde(deserialize_with = "crate::money::deserialize_loose")]
    pub unit_price: Money,
}

/// Delivery method with a flat cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    pub label: String,
    #[serde(deserialize_with = "crate::money::deserialize_loose")]
    pub cost: Money,
}

/// Values read from the order form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    pub customer_name: String,
    pub model: Option<ModelOption>,
    pub size: String,
    pub color: String,
    pub quantity: u32,
    /// Only the extras whose checkbox is checked
    pub extras: Vec<ExtraOption>,
    pub jersey_name: String,
    pub jersey_number: String,
    pub shipping: Option<ShippingOption>,
    pub instructions: String,
}

/// Read a quantity field; blank, negative or non-numeric input reads as 0.
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

impl OrderForm {
    /// Check required fields.
    ///
    /// # Errors
    ///
    /// `IncompleteOrder` when name, model, size or color is blank, or the
    /// quantity is below 1.
    pub fn validate(&self) -> ShopResult<()> {
        let model_missing = self
            .model
            .as_ref()
            .map_or(true, |m| m.name.trim().is_empty());

        if self.customer_name.trim().is_empty()
            || model_missing
            || self.size.trim().is_empty()
            || self.color.trim().is_empty()
            || self.quantity < 1
        {
            return Err(ShopError::IncompleteOrder(INCOMPLETE_ORDER_NOTICE.to_string()));
        }
        Ok(())
    }

    /// Validate and price the form.
    pub fn summarize(&self) -> ShopResult<OrderSummary> {
        self.validate()?;
        let model = self
            .model
            .clone()
            .ok_or_else(|| ShopError::IncompleteOrder(INCOMPLETE_ORDER_NOTICE.to_string()))?;

        let quantity = self.quantity;
        let extras_cost: Money = self.extras.iter().map(|e| e.unit_price.times(quantity)).sum();
        let shipping_cost = self.shipping.as_ref().map_or(Money::ZERO, |s| s.cost);
        let total = model.unit_price.times(quantity) + extras_cost + shipping_cost;

        Ok(OrderSummary {
            customer_name: self.customer_name.trim().to_string(),
            model,
            size: self.size.trim().to_string(),
            color: self.color.trim().to_string(),
            quantity,
            extras: self.extras.iter().map(|e| e.label.clone()).collect(),
            jersey_name: non_blank(&self.jersey_name),
            jersey_number: non_blank(&self.jersey_number),
            shipping_label: self.shipping.as_ref().map(|s| s.label.clone()),
            shipping_cost,
            instructions: non_blank(&self.instructions),
            total,
        })
    }
}

fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

/// One labeled line of the rendered summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryItem {
    pub label: &'static str,
    pub value: String,
}

/// Structured result of a valid submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub customer_name: String,
    pub model: ModelOption,
    pub size: String,
    pub color: String,
    pub quantity: u32,
    pub extras: Vec<String>,
    pub jersey_name: Option<String>,
    pub jersey_number: Option<String>,
    pub shipping_label: Option<String>,
    pub shipping_cost: Money,
    pub instructions: Option<String>,
    pub total: Money,
}

impl OrderSummary {
    /// Personalization line, present only when a name or number was given
    pub fn personalization(&self) -> Option<String> {
        let name = self.jersey_name.as_ref().map(|n| format!("Nombre: {}", n));
        let number = self.jersey_number.as_ref().map(|n| format!("Número: {}", n));
        match (name, number) {
            (Some(a), Some(b)) => Some(format!("{} | {}", a, b)),
            (a, b) => a.or(b),
        }
    }

    /// Itemized lines in display order
    pub fn items(&self) -> Vec<SummaryItem> {
        let mut items = vec![
            SummaryItem {
                label: "Modelo",
                value: format!(
                    "{} — {} c/u × {}",
                    self.model.name, self.model.unit_price, self.quantity
                ),
            },
            SummaryItem { label: "Talla", value: self.size.clone() },
            SummaryItem { label: "Color", value: self.color.clone() },
            SummaryItem {
                label: "Extras",
                value: if self.extras.is_empty() {
                    "Ninguno".to_string()
                } else {
                    self.extras.join(", ")
                },
            },
        ];

        if let Some(personalization) = self.personalization() {
            items.push(SummaryItem { label: "Personalización", value: personalization });
        }

        items.push(SummaryItem {
            label: "Envío",
            value: format!(
                "{} — {}",
                self.shipping_label.as_deref().unwrap_or("N/A"),
                self.shipping_cost
            ),
        });

        if let Some(instructions) = &self.instructions {
            items.push(SummaryItem { label: "Instrucciones", value: instructions.clone() });
        }

        items
    }
}

impl std::fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cliente: {}", self.customer_name)?;
        for item in self.items() {
            writeln!(f, "- {}: {}", item.label, item.value)?;
        }
        writeln!(f, "Total: {}", self.total)
    }
}

/// Lifecycle of the summary panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState<'a> {
    Unsubmitted,
    Summarized(&'a OrderSummary),
}

/// Order form controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderCalculator {
    summary: Option<OrderSummary>,
}

impl OrderCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and price a submitted form.
    ///
    /// On success the calculator moves to `Summarized`. On failure the
    /// current state (including any earlier summary) is left as it was.
    pub fn submit(&mut self, form: &OrderForm) -> ShopResult<&OrderSummary> {
        let summary = match form.summarize() {
            Ok(summary) => summary,
            Err(e) => {
                info!("Order submit rejected: {}", e);
                return Err(e);
            }
        };

        debug!(customer = %summary.customer_name, total = %summary.total, "Order summarized");
        Ok(self.summary.insert(summary))
    }

    /// Clear the summary and return to `Unsubmitted`
    pub fn reset(&mut self) {
        debug!("Order form reset");
        self.summary = None;
    }

    pub fn state(&self) -> OrderState<'_> {
        match &self.summary {
            Some(summary) => OrderState::Summarized(summary),
            None => OrderState::Unsubmitted,
        }
    }

    pub fn summary(&self) -> Option<&OrderSummary> {
        self.summary.as_ref()
    }

    /// Whether the confirmation action is available
    pub fn confirm_enabled(&self) -> bool {
        self.summary().is_some()
    }

    /// Customer name for the summary header
    pub fn customer_label(&self) -> &str {
        self.summary().map_or(NO_CUSTOMER, |s| s.customer_name.as_str())
    }

    /// Formatted total for the summary footer
    pub fn total_label(&self) -> String {
        self.summary().map_or(Money::ZERO, |s| s.total).to_string()
    }
}

//! Fill-up draft with last-writer-wins cost fields.
//!
//! Liters, price per liter and total cost form a triangle: whichever field the user set
//! last decides which of the other two is recomputed. This is an explicit dispatch on
//! the edited field, not a derived property, so the result depends on edit order.

/// The field that was just edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelField {
    /// Volume pumped
    Liters,
    /// Price per liter
    CostPerLiter,
    /// Amount paid
    TotalCost,
}

/// The cost triangle of a fill-up being entered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FuelDraft {
    /// Volume pumped
    pub liters: f64,
    /// Price per liter
    pub cost_per_liter: f64,
    /// Amount paid
    pub total_cost: f64,
}

impl FuelDraft {
    /// Sets `field` to `value` and recomputes the dependent field.
    ///
    /// - liters or price per liter: total = liters × price
    /// - total: price = total / liters, or 0 while liters is 0
    pub fn apply(&mut self, field: FuelField, value: f64) {
        match field {
            FuelField::Liters => {
                self.liters = value;
                self.total_cost = self.liters * self.cost_per_liter;
            }
            FuelField::CostPerLiter => {
                self.cost_per_liter = value;
                self.total_cost = self.liters * self.cost_per_liter;
            }
            FuelField::TotalCost => {
                self.total_cost = value;
                self.cost_per_liter = if self.liters > 0.0 {
                    self.total_cost / self.liters
                } else {
                    0.0
                };
            }
        }
    }

    /// Builder-style [`FuelDraft::apply`].
    #[must_use]
    pub fn with(mut self, field: FuelField, value: f64) -> Self {
        self.apply(field, value);
        self
    }

    /// Builds a draft from the optional values of a command, applied in the order
    /// liters, price per liter, total cost.
    #[must_use]
    pub fn from_inputs(liters: f64, cost_per_liter: Option<f64>, total_cost: Option<f64>) -> Self {
        let mut draft = Self::default().with(FuelField::Liters, liters);
        if let Some(price) = cost_per_liter {
            draft.apply(FuelField::CostPerLiter, price);
        }
        if let Some(total) = total_cost {
            draft.apply(FuelField::TotalCost, total);
        }
        draft
    }
}

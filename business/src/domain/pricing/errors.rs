use uuid::Uuid;

use crate::domain::errors::ErrorKind;
use crate::domain::shared::money::Money;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// The option does not belong to any group attached to the product.
    #[error("pricing.foreign_option")]
    ForeignOption(Uuid),
    #[error("pricing.missing_required_selection")]
    MissingRequiredSelection { group: String },
    #[error("pricing.too_many_selections")]
    TooManySelections { group: String },
    /// Adjustments pushed the price below zero.
    #[error("pricing.negative_unit_price")]
    NegativeUnitPrice { unit_price: Money },
}

impl PricingError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

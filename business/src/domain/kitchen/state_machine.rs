use serde::{Deserialize, Serialize};

use super::errors::KitchenError;

/// Lifecycle of an order. Stored and shown with the café's Spanish labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Received,
    InPreparation,
    ReadyForPickup,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Received,
        OrderStatus::InPreparation,
        OrderStatus::ReadyForPickup,
        OrderStatus::Cancelled,
    ];

    /// Shown in the kitchen queue.
    pub fn is_active(&self) -> bool {
        matches!(self, OrderStatus::Received | OrderStatus::InPreparation)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::ReadyForPickup | OrderStatus::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Received => "Recibido",
            OrderStatus::InPreparation => "En preparación",
            OrderStatus::ReadyForPickup => "Listo para recoger",
            OrderStatus::Cancelled => "Cancelado",
        }
    }

    pub fn can_transition_to(&self, to: OrderStatus) -> bool {
        TRANSITIONS.contains(&(*self, to))
    }

    pub fn transition(self, to: OrderStatus) -> Result<Transition, KitchenError> {
        if self.can_transition_to(to) {
            Ok(Transition { from: self, to })
        } else {
            Err(KitchenError::InvalidTransition { from: self, to })
        }
    }
}

const TRANSITIONS: [(OrderStatus, OrderStatus); 4] = [
    (OrderStatus::Received, OrderStatus::InPreparation),
    (OrderStatus::Received, OrderStatus::Cancelled),
    (OrderStatus::InPreparation, OrderStatus::ReadyForPickup),
    (OrderStatus::InPreparation, OrderStatus::Cancelled),
];

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid order status: {}", s))
    }
}

/// What the persistence side has to do for an allowed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEffect {
    UpdateStatus,
    /// Status change plus returning every item's quantity to stock.
    CancelAndRestock,
}

/// An allowed move between two statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: OrderStatus,
    pub to: OrderStatus,
}

impl Transition {
    pub fn effect(&self) -> TransitionEffect {
        match self.to {
            OrderStatus::Cancelled => TransitionEffect::CancelAndRestock,
            _ => TransitionEffect::UpdateStatus,
        }
    }

    pub fn notifies_customer(&self) -> bool {
        self.to == OrderStatus::ReadyForPickup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_allow_exactly_four_transitions() {
        let allowed: Vec<_> = OrderStatus::ALL
            .iter()
            .flat_map(|from| OrderStatus::ALL.iter().map(move |to| (*from, *to)))
            .filter(|(from, to)| from.can_transition_to(*to))
            .collect();

        assert_eq!(allowed.len(), 4);
        assert!(allowed.contains(&(OrderStatus::Received, OrderStatus::InPreparation)));
        assert!(allowed.contains(&(OrderStatus::InPreparation, OrderStatus::ReadyForPickup)));
    }

    #[test]
    fn should_reject_moving_ready_order_back_to_received() {
        let result = OrderStatus::ReadyForPickup.transition(OrderStatus::Received);
        assert!(matches!(
            result.unwrap_err(),
            KitchenError::InvalidTransition {
                from: OrderStatus::ReadyForPickup,
                to: OrderStatus::Received
            }
        ));
    }

    #[test]
    fn should_reject_cancelling_ready_order() {
        assert!(!OrderStatus::ReadyForPickup.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn should_reject_self_transitions() {
        for status in OrderStatus::ALL {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn should_never_leave_terminal_statuses() {
        for from in OrderStatus::ALL.into_iter().filter(|s| s.is_terminal()) {
            for to in OrderStatus::ALL {
                assert!(!from.can_transition_to(to));
            }
        }
    }

    #[test]
    fn should_restock_only_on_cancel() {
        let cancel = OrderStatus::Received
            .transition(OrderStatus::Cancelled)
            .unwrap();
        let start = OrderStatus::Received
            .transition(OrderStatus::InPreparation)
            .unwrap();

        assert_eq!(cancel.effect(), TransitionEffect::CancelAndRestock);
        assert_eq!(start.effect(), TransitionEffect::UpdateStatus);
        assert!(!start.notifies_customer());
    }

    #[test]
    fn should_notify_when_ready_for_pickup() {
        let ready = OrderStatus::InPreparation
            .transition(OrderStatus::ReadyForPickup)
            .unwrap();
        assert!(ready.notifies_customer());
    }

    #[test]
    fn should_parse_spanish_labels() {
        for status in OrderStatus::ALL {
            assert_eq!(status.to_string().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("Entregado".parse::<OrderStatus>().is_err());
    }
}

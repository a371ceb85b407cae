//! Option resolution and line pricing.
//!
//! The cart view and checkout both price lines through [`unit_price`] and
//! [`line_total`]; nothing else in the crate multiplies or sums prices.

use std::collections::HashSet;

use uuid::Uuid;

use super::errors::PricingError;
use crate::domain::catalog::model::{OptionGroup, SelectionMode, group_position};
use crate::domain::shared::money::Money;

/// When a selection is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// Adding to the cart: an empty required single-choice group falls back
    /// to its default option, which is then stored on the line.
    Cart,
    /// Placing the order: strict, no defaults are applied.
    Checkout,
}

/// An option accepted for a line, with its name and adjustment locked in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOption {
    pub id: Uuid,
    pub group_id: Uuid,
    pub name: String,
    pub price_adjustment: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSelection {
    /// Required groups first, then by group name; options by name inside a
    /// group. Snapshots keep this order.
    pub options: Vec<ResolvedOption>,
    pub adjustment_total: Money,
}

impl ResolvedSelection {
    pub fn option_ids(&self) -> Vec<Uuid> {
        self.options.iter().map(|o| o.id).collect()
    }

    pub fn unit_price(&self, base: &Money) -> Money {
        unit_price(base, self.options.iter().map(|o| &o.price_adjustment))
    }

    /// Unit price for a line that is about to be stored; never negative.
    pub fn payable_unit_price(&self, base: &Money) -> Result<Money, PricingError> {
        let unit_price = self.unit_price(base);
        if unit_price.is_negative() {
            return Err(PricingError::NegativeUnitPrice { unit_price });
        }
        Ok(unit_price)
    }
}

/// Base price plus every chosen adjustment.
pub fn unit_price<'a>(base: &Money, adjustments: impl IntoIterator<Item = &'a Money>) -> Money {
    adjustments
        .into_iter()
        .fold(base.clone(), |acc, adjustment| acc + adjustment)
}

pub fn line_total(unit_price: &Money, quantity: u32) -> Money {
    unit_price.times(quantity)
}

/// Validates `chosen` against the product's attached `groups` and prices it.
///
/// Duplicate ids are collapsed. Every id must belong to one of `groups`.
pub fn resolve_options(
    groups: &[OptionGroup],
    chosen: &[Uuid],
    mode: ResolveMode,
) -> Result<ResolvedSelection, PricingError> {
    let chosen: HashSet<Uuid> = chosen.iter().copied().collect();

    let known: HashSet<Uuid> = groups
        .iter()
        .flat_map(|g| g.options.iter().map(|o| o.id))
        .collect();

    let mut foreign: Vec<Uuid> = chosen
        .iter()
        .filter(|id| !known.contains(id))
        .copied()
        .collect();
    foreign.sort();
    if let Some(id) = foreign.first() {
        return Err(PricingError::ForeignOption(*id));
    }

    let mut ordered: Vec<&OptionGroup> = groups.iter().collect();
    ordered.sort_by(|a, b| {
        group_position(a.required, &a.name, a.id).cmp(&group_position(b.required, &b.name, b.id))
    });

    let mut options = Vec::new();
    for group in ordered {
        let picks: Vec<_> = group
            .options
            .iter()
            .filter(|o| chosen.contains(&o.id))
            .collect();

        if group.selection_mode == SelectionMode::Single && picks.len() > 1 {
            return Err(PricingError::TooManySelections {
                group: group.name.clone(),
            });
        }

        if picks.is_empty() && group.required {
            let fallback = match (mode, group.selection_mode) {
                (ResolveMode::Cart, SelectionMode::Single) => group.default_option(),
                _ => None,
            };
            match fallback {
                Some(option) => options.push(option),
                None => {
                    return Err(PricingError::MissingRequiredSelection {
                        group: group.name.clone(),
                    });
                }
            }
            continue;
        }

        options.extend(picks);
    }

    let options: Vec<ResolvedOption> = options
        .into_iter()
        .map(|o| ResolvedOption {
            id: o.id,
            group_id: o.group_id,
            name: o.name.clone(),
            price_adjustment: o.price_adjustment.clone(),
        })
        .collect();
    let adjustment_total: Money = options.iter().map(|o| &o.price_adjustment).sum();

    Ok(ResolvedSelection {
        options,
        adjustment_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::ProductOption;
    use proptest::prelude::*;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn group(name: &str, mode: SelectionMode, required: bool, opts: &[(&str, &str)]) -> OptionGroup {
        let id = Uuid::new_v4();
        let options = opts
            .iter()
            .map(|(n, adj)| ProductOption::from_repository(Uuid::new_v4(), id, n.to_string(), money(adj)))
            .collect();
        OptionGroup::from_repository(id, name.to_string(), mode, required, options)
    }

    fn option_id(group: &OptionGroup, name: &str) -> Uuid {
        group.options.iter().find(|o| o.name == name).unwrap().id
    }

    fn americano_groups() -> (OptionGroup, OptionGroup) {
        let size = group(
            "Tamaño",
            SelectionMode::Single,
            true,
            &[("Chico", "0.00"), ("Grande", "10.00")],
        );
        let extras = group("Extras", SelectionMode::Multiple, false, &[("Shot", "8.00")]);
        (size, extras)
    }

    #[test]
    fn should_price_americano_with_grande_and_shot() {
        let (size, extras) = americano_groups();
        let chosen = [option_id(&size, "Grande"), option_id(&extras, "Shot")];
        let groups = [size, extras];

        let selection = resolve_options(&groups, &chosen, ResolveMode::Checkout).unwrap();
        let unit = selection.unit_price(&money("30.00"));

        assert_eq!(selection.adjustment_total, money("18.00"));
        assert_eq!(unit, money("48.00"));
        assert_eq!(line_total(&unit, 2), money("96.00"));
        let names: Vec<_> = selection.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Grande", "Shot"]);
    }

    #[test]
    fn should_keep_required_choices_first_regardless_of_group_order() {
        let (size, extras) = americano_groups();
        let chosen = [option_id(&extras, "Shot"), option_id(&size, "Grande")];
        let groups = [extras, size];

        let selection = resolve_options(&groups, &chosen, ResolveMode::Checkout).unwrap();

        let names: Vec<_> = selection.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Grande", "Shot"]);
    }

    #[test]
    fn should_reject_discount_larger_than_base_price() {
        let discounts = group("Promo", SelectionMode::Multiple, false, &[("Descuento", "-2.50")]);
        let chosen = [option_id(&discounts, "Descuento")];
        let selection = resolve_options(&[discounts], &chosen, ResolveMode::Checkout).unwrap();

        let result = selection.payable_unit_price(&money("1.00"));

        assert_eq!(
            result.unwrap_err(),
            PricingError::NegativeUnitPrice {
                unit_price: money("-1.50")
            }
        );
        assert_eq!(selection.payable_unit_price(&money("2.50")).unwrap(), money("0.00"));
    }

    #[test]
    fn should_reject_foreign_option() {
        let (size, extras) = americano_groups();
        let stranger = Uuid::new_v4();

        let result = resolve_options(&[size, extras], &[stranger], ResolveMode::Cart);

        assert_eq!(result.unwrap_err(), PricingError::ForeignOption(stranger));
    }

    #[test]
    fn should_default_required_single_group_in_cart_mode() {
        let (size, extras) = americano_groups();
        let chico = option_id(&size, "Chico");

        let selection = resolve_options(&[size, extras], &[], ResolveMode::Cart).unwrap();

        assert_eq!(selection.option_ids(), vec![chico]);
        assert_eq!(selection.adjustment_total, Money::zero());
    }

    #[test]
    fn should_require_explicit_pick_at_checkout() {
        let (size, extras) = americano_groups();

        let result = resolve_options(&[size, extras], &[], ResolveMode::Checkout);

        assert_eq!(
            result.unwrap_err(),
            PricingError::MissingRequiredSelection {
                group: "Tamaño".to_string()
            }
        );
    }

    #[test]
    fn should_reject_two_picks_in_single_group() {
        let (size, extras) = americano_groups();
        let chosen = [option_id(&size, "Chico"), option_id(&size, "Grande")];

        let result = resolve_options(&[size, extras], &chosen, ResolveMode::Cart);

        assert!(matches!(
            result.unwrap_err(),
            PricingError::TooManySelections { .. }
        ));
    }

    #[test]
    fn should_reject_required_group_without_options_even_in_cart_mode() {
        let empty = group("Leche", SelectionMode::Single, true, &[]);

        let result = resolve_options(&[empty], &[], ResolveMode::Cart);

        assert!(matches!(
            result.unwrap_err(),
            PricingError::MissingRequiredSelection { .. }
        ));
    }

    #[test]
    fn should_collapse_duplicate_ids() {
        let (size, extras) = americano_groups();
        let grande = option_id(&size, "Grande");
        let shot = option_id(&extras, "Shot");

        let selection =
            resolve_options(&[size, extras], &[shot, grande, shot], ResolveMode::Checkout).unwrap();

        assert_eq!(selection.option_ids(), vec![grande, shot]);
        assert_eq!(selection.adjustment_total, money("18.00"));
    }

    #[test]
    fn should_accept_negative_adjustments() {
        let milk = group(
            "Leche",
            SelectionMode::Single,
            false,
            &[("Deslactosada", "-2.50")],
        );
        let chosen = [option_id(&milk, "Deslactosada")];

        let selection = resolve_options(&[milk], &chosen, ResolveMode::Checkout).unwrap();

        assert_eq!(selection.unit_price(&money("30.00")), money("27.50"));
    }

    #[test]
    fn should_resolve_same_price_in_cart_and_checkout_for_explicit_picks() {
        let (size, extras) = americano_groups();
        let chosen = [option_id(&size, "Grande")];
        let groups = [size, extras];

        let cart = resolve_options(&groups, &chosen, ResolveMode::Cart).unwrap();
        let checkout = resolve_options(&groups, &cart.option_ids(), ResolveMode::Checkout).unwrap();

        assert_eq!(cart, checkout);
    }

    proptest! {
        #[test]
        fn should_price_as_base_plus_sum_of_adjustments(
            base_cents in 0i64..100_000,
            adjustments in proptest::collection::vec(-5_000i64..5_000, 0..8),
            mask in proptest::collection::vec(any::<bool>(), 8),
            quantity in 1u32..20,
        ) {
            let cents = |c: i64| Money::new(bigdecimal::BigDecimal::new(c.into(), 2));
            let group_id = Uuid::new_v4();
            let options: Vec<ProductOption> = adjustments
                .iter()
                .enumerate()
                .map(|(i, c)| ProductOption::from_repository(Uuid::new_v4(), group_id, format!("opt-{i}"), cents(*c)))
                .collect();
            let extras = OptionGroup::from_repository(group_id, "Extras".into(), SelectionMode::Multiple, false, options);
            // Names sort as opt-0..opt-7, so option order matches the mask.
            let chosen: Vec<Uuid> = extras
                .options
                .iter()
                .zip(mask.iter())
                .filter(|(_, keep)| **keep)
                .map(|(o, _)| o.id)
                .collect();
            let expected_cents: i64 = base_cents + adjustments
                .iter()
                .zip(mask.iter())
                .filter(|(_, keep)| **keep)
                .map(|(c, _)| *c)
                .sum::<i64>();

            let base = cents(base_cents);
            let selection = resolve_options(std::slice::from_ref(&extras), &chosen, ResolveMode::Checkout).unwrap();
            let unit = selection.unit_price(&base);

            prop_assert_eq!(&unit, &cents(expected_cents));
            prop_assert_eq!(line_total(&unit, quantity), cents(expected_cents * i64::from(quantity)));
        }
    }
}

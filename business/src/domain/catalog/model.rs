use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CatalogError;
use crate::domain::shared::money::Money;

/// How many options of a group a single cart line may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Exactly one pick (at most one when the group is optional).
    Single,
    /// Zero or more picks.
    Multiple,
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionMode::Single => write!(f, "single"),
            SelectionMode::Multiple => write!(f, "multiple"),
        }
    }
}

impl std::str::FromStr for SelectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(SelectionMode::Single),
            "multiple" => Ok(SelectionMode::Multiple),
            _ => Err(format!("Invalid selection mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

impl Category {
    pub fn new(name: String) -> Result<Self, CatalogError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::NameEmpty);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
        })
    }

    pub fn from_repository(id: Uuid, name: String) -> Self {
        Self { id, name }
    }
}

/// A single customization choice inside an option group.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductOption {
    pub id: Uuid,
    pub group_id: Uuid,
    pub name: String,
    /// Signed; zero and negative adjustments are allowed.
    pub price_adjustment: Money,
}

impl ProductOption {
    pub fn new(group_id: Uuid, name: String, price_adjustment: Money) -> Result<Self, CatalogError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::NameEmpty);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            group_id,
            name,
            price_adjustment,
        })
    }

    pub fn from_repository(id: Uuid, group_id: Uuid, name: String, price_adjustment: Money) -> Self {
        Self {
            id,
            group_id,
            name,
            price_adjustment,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionGroup {
    pub id: Uuid,
    pub name: String,
    pub selection_mode: SelectionMode,
    pub required: bool,
    /// Sorted by name, then id.
    pub options: Vec<ProductOption>,
}

impl OptionGroup {
    pub fn new(
        name: String,
        selection_mode: SelectionMode,
        required: bool,
    ) -> Result<Self, CatalogError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::NameEmpty);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            selection_mode,
            required,
            options: Vec::new(),
        })
    }

    pub fn from_repository(
        id: Uuid,
        name: String,
        selection_mode: SelectionMode,
        required: bool,
        mut options: Vec<ProductOption>,
    ) -> Self {
        sort_options(&mut options);
        Self {
            id,
            name,
            selection_mode,
            required,
            options,
        }
    }

    /// The option a required single-choice group falls back to when the
    /// customer picks nothing: the first by name, ties broken by id.
    pub fn default_option(&self) -> Option<&ProductOption> {
        self.options
            .iter()
            .min_by(|a, b| option_position(&a.name, a.id).cmp(&option_position(&b.name, b.id)))
    }
}

/// Position of a group among a product's groups: required groups first, then
/// name, then id. Names compare bytewise, never by database collation.
///
/// Detail listings, resolved selections, order snapshots and the cart view
/// all follow this order.
pub fn group_position(required: bool, name: &str, id: Uuid) -> (bool, &str, Uuid) {
    (!required, name, id)
}

/// Position of an option inside its group: name, then id.
pub fn option_position(name: &str, id: Uuid) -> (&str, Uuid) {
    (name, id)
}

pub(crate) fn sort_options(options: &mut [ProductOption]) {
    options.sort_by(|a, b| option_position(&a.name, a.id).cmp(&option_position(&b.name, b.id)));
}

pub(crate) fn sort_groups(groups: &mut [OptionGroup]) {
    groups.sort_by(|a, b| {
        group_position(a.required, &a.name, a.id).cmp(&group_position(b.required, &b.name, b.id))
    });
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: Money,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    /// Opaque storage path; never interpreted.
    pub image_path: Option<String>,
    pub active: bool,
    pub special: bool,
    pub stock: u32,
    pub option_group_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NewProductProps {
    pub name: String,
    pub price: Money,
    pub category_id: Option<Uuid>,
    pub image_path: Option<String>,
    pub stock: u32,
    pub option_group_ids: Vec<Uuid>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, CatalogError> {
        let name = validate_product_fields(&props.name, &props.price)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            price: props.price,
            category_id: props.category_id,
            category_name: None,
            image_path: props.image_path,
            active: true,
            special: false,
            stock: props.stock,
            option_group_ids: dedup_ids(props.option_group_ids),
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies an admin edit, keeping identity, flags and creation time.
    pub fn revise(self, props: NewProductProps) -> Result<Self, CatalogError> {
        let name = validate_product_fields(&props.name, &props.price)?;
        let image_path = props.image_path.or(self.image_path);

        Ok(Self {
            name,
            price: props.price,
            category_id: props.category_id,
            category_name: None,
            image_path,
            stock: props.stock,
            option_group_ids: dedup_ids(props.option_group_ids),
            updated_at: Utc::now(),
            ..self
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        price: Money,
        category_id: Option<Uuid>,
        category_name: Option<String>,
        image_path: Option<String>,
        active: bool,
        special: bool,
        stock: u32,
        option_group_ids: Vec<Uuid>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            category_id,
            category_name,
            image_path,
            active,
            special,
            stock,
            option_group_ids,
            created_at,
            updated_at,
        }
    }
}

fn validate_product_fields(name: &str, price: &Money) -> Result<String, CatalogError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CatalogError::NameEmpty);
    }
    if price.is_negative() {
        return Err(CatalogError::NegativePrice);
    }
    Ok(name.to_string())
}

fn dedup_ids(ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

/// A product together with the option groups it may be customized with.
///
/// Groups are keyed by their id, never by display name: two groups sharing a
/// name remain distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    /// Required groups first, then by name and id.
    pub groups: Vec<OptionGroup>,
}

impl ProductDetail {
    pub fn new(product: Product, mut groups: Vec<OptionGroup>) -> Self {
        sort_groups(&mut groups);
        Self { product, groups }
    }
}

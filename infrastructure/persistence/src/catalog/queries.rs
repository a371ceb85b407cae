use std::collections::HashMap;

use sqlx::PgConnection;
use uuid::Uuid;

use business::domain::catalog::model::{OptionGroup, Product, ProductDetail};
use business::domain::errors::RepositoryError;

use super::entity::{OptionEntity, OptionGroupEntity, ProductEntity};
use crate::db::map_db_error;

/// Product columns plus the joined category name and the linked group ids.
pub(crate) const PRODUCT_SELECT: &str = r#"SELECT p.id, p.name, p.price, p.category_id, c.name AS category_name,
    p.image_path, p.active, p.special, p.stock,
    ARRAY(SELECT pog.group_id FROM product_option_groups pog WHERE pog.product_id = p.id ORDER BY pog.group_id) AS option_group_ids,
    p.created_at, p.updated_at
FROM products p
LEFT JOIN categories c ON c.id = p.category_id"#;

pub(crate) async fn fetch_product(
    conn: &mut PgConnection,
    id: Uuid,
) -> Result<Option<Product>, RepositoryError> {
    let entity = sqlx::query_as::<_, ProductEntity>(&format!("{} WHERE p.id = $1", PRODUCT_SELECT))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?;

    Ok(entity.map(|e| e.into_domain()))
}

/// Loads groups with their options. `None` loads every group.
pub(crate) async fn fetch_groups(
    conn: &mut PgConnection,
    ids: Option<&[Uuid]>,
) -> Result<Vec<OptionGroup>, RepositoryError> {
    let groups = match ids {
        Some(ids) => {
            sqlx::query_as::<_, OptionGroupEntity>(
                "SELECT id, name, selection_mode, required FROM option_groups WHERE id = ANY($1) ORDER BY name, id",
            )
            .bind(ids.to_vec())
            .fetch_all(&mut *conn)
            .await
        }
        None => {
            sqlx::query_as::<_, OptionGroupEntity>(
                "SELECT id, name, selection_mode, required FROM option_groups ORDER BY name, id",
            )
            .fetch_all(&mut *conn)
            .await
        }
    }
    .map_err(map_db_error)?;

    if groups.is_empty() {
        return Ok(Vec::new());
    }

    let group_ids: Vec<Uuid> = groups.iter().map(|g| g.id).collect();
    let options = sqlx::query_as::<_, OptionEntity>(
        "SELECT id, group_id, name, price_adjustment FROM options WHERE group_id = ANY($1)",
    )
    .bind(group_ids)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_db_error)?;

    let mut by_group: HashMap<Uuid, Vec<_>> = HashMap::new();
    for option in options {
        by_group
            .entry(option.group_id)
            .or_default()
            .push(option.into_domain());
    }

    Ok(groups
        .into_iter()
        .map(|g| {
            let options = by_group.remove(&g.id).unwrap_or_default();
            g.into_domain(options)
        })
        .collect())
}

/// The product with every linked option group, or `None` when it does not exist.
pub(crate) async fn fetch_product_detail(
    conn: &mut PgConnection,
    id: Uuid,
) -> Result<Option<ProductDetail>, RepositoryError> {
    let Some(product) = fetch_product(conn, id).await? else {
        return Ok(None);
    };

    let groups = if product.option_group_ids.is_empty() {
        Vec::new()
    } else {
        fetch_groups(conn, Some(product.option_group_ids.as_slice())).await?
    };

    Ok(Some(ProductDetail::new(product, groups)))
}

use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    /// Customer-facing product listing
    Menu,
    Cart,
    Orders,
    /// Product, category and option administration
    Catalog,
    /// Order queue for the counter staff
    Kitchen,
}

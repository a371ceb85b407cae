pub mod db;
pub mod catalog {
    pub mod category_repository;
    pub mod entity;
    pub mod option_group_repository;
    pub mod product_repository;
    pub(crate) mod queries;
}
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod order {
    pub mod checkout;
    pub mod entity;
    pub(crate) mod queries;
    pub mod repository;
}

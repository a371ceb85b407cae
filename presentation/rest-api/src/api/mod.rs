pub mod error;
pub mod security;
pub mod tags;

pub mod health {
    pub mod routes;
}

pub mod menu {
    pub mod routes;
}

pub mod catalog {
    pub mod category_routes;
    pub mod dto;
    pub mod error_mapper;
    pub mod option_group_routes;
    pub mod routes;
}

pub mod cart {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

pub mod order {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

pub mod kitchen {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

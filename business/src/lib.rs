pub mod application {
    pub mod cart {
        pub mod add_line;
        pub mod clear;
        pub mod list_lines;
        pub mod remove_line;
    }
    pub mod catalog {
        pub mod create_category;
        pub mod create_option;
        pub mod create_option_group;
        pub mod create_product;
        pub mod delete_category;
        pub mod delete_option;
        pub mod delete_option_group;
        pub mod delete_product;
        pub mod get_product_detail;
        pub mod list_categories;
        pub mod list_menu;
        pub mod list_option_groups;
        pub mod list_products;
        pub mod set_product_active;
        pub mod set_product_special;
        pub mod update_category;
        pub mod update_option;
        pub mod update_option_group;
        pub mod update_product;
    }
    pub mod kitchen {
        pub mod get_queue;
        pub mod notifications;
        pub mod transition;
    }
    pub mod order {
        pub mod get_detail;
        pub mod get_history;
        pub mod place;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod money;
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create_category;
            pub mod create_option;
            pub mod create_option_group;
            pub mod create_product;
            pub mod delete_category;
            pub mod delete_option;
            pub mod delete_option_group;
            pub mod delete_product;
            pub mod get_product_detail;
            pub mod list_categories;
            pub mod list_menu;
            pub mod list_option_groups;
            pub mod list_products;
            pub mod set_product_active;
            pub mod set_product_special;
            pub mod update_category;
            pub mod update_option;
            pub mod update_option_group;
            pub mod update_product;
        }
    }
    pub mod pricing {
        pub mod errors;
        pub mod resolver;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_line;
            pub mod clear;
            pub mod list_lines;
            pub mod remove_line;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_detail;
            pub mod get_history;
            pub mod place;
        }
    }
    pub mod kitchen {
        pub mod errors;
        pub mod events;
        pub mod repository;
        pub mod services;
        pub mod state_machine;
        pub mod use_cases {
            pub mod get_queue;
            pub mod transition;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use logger::TracingLogger;
use mailer::{HttpOrderNotifier, LogOnlyOrderNotifier, MailerClient};
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::catalog::category_repository::CategoryRepositoryPostgres;
use persistence::catalog::option_group_repository::OptionGroupRepositoryPostgres;
use persistence::catalog::product_repository::ProductRepositoryPostgres;
use persistence::order::checkout::PgCheckoutUnitOfWork;
use persistence::order::repository::OrderRepositoryPostgres;

use business::application::cart::add_line::AddCartLineUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::list_lines::ListCartLinesUseCaseImpl;
use business::application::cart::remove_line::RemoveCartLineUseCaseImpl;
use business::application::catalog::create_category::CreateCategoryUseCaseImpl;
use business::application::catalog::create_option::CreateOptionUseCaseImpl;
use business::application::catalog::create_option_group::CreateOptionGroupUseCaseImpl;
use business::application::catalog::create_product::CreateProductUseCaseImpl;
use business::application::catalog::delete_category::DeleteCategoryUseCaseImpl;
use business::application::catalog::delete_option::DeleteOptionUseCaseImpl;
use business::application::catalog::delete_option_group::DeleteOptionGroupUseCaseImpl;
use business::application::catalog::delete_product::DeleteProductUseCaseImpl;
use business::application::catalog::get_product_detail::GetProductDetailUseCaseImpl;
use business::application::catalog::list_categories::ListCategoriesUseCaseImpl;
use business::application::catalog::list_menu::ListMenuUseCaseImpl;
use business::application::catalog::list_option_groups::ListOptionGroupsUseCaseImpl;
use business::application::catalog::list_products::ListProductsUseCaseImpl;
use business::application::catalog::set_product_active::SetProductActiveUseCaseImpl;
use business::application::catalog::set_product_special::SetProductSpecialUseCaseImpl;
use business::application::catalog::update_category::UpdateCategoryUseCaseImpl;
use business::application::catalog::update_option::UpdateOptionUseCaseImpl;
use business::application::catalog::update_option_group::UpdateOptionGroupUseCaseImpl;
use business::application::catalog::update_product::UpdateProductUseCaseImpl;
use business::application::kitchen::get_queue::GetKitchenQueueUseCaseImpl;
use business::application::kitchen::notifications::OrderNotificationWorker;
use business::application::kitchen::transition::TransitionOrderUseCaseImpl;
use business::application::order::get_detail::GetOrderDetailUseCaseImpl;
use business::application::order::get_history::GetOrderHistoryUseCaseImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;
use business::domain::kitchen::services::OrderNotifier;

use crate::api::catalog::option_group_routes::OptionGroupUseCases;
use crate::api::security::JwtVerifier;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub menu_api: crate::api::menu::routes::MenuApi,
    pub product_admin_api: crate::api::catalog::routes::ProductAdminApi,
    pub category_api: crate::api::catalog::category_routes::CategoryApi,
    pub option_group_api: crate::api::catalog::option_group_routes::OptionGroupApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub order_api: crate::api::order::routes::OrderApi,
    pub kitchen_api: crate::api::kitchen::routes::KitchenApi,
    pub jwt_verifier: JwtVerifier,
}

impl DependencyContainer {
    /// Wires adapters into use cases and spawns the notification worker.
    /// Must run inside the tokio runtime.
    pub async fn new(pool: sqlx::PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger::new("use_case"));
        let health_api = crate::api::health::routes::Api::new(pool.clone());

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let option_group_repository = Arc::new(OptionGroupRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let unit_of_work = Arc::new(PgCheckoutUnitOfWork::new(pool));

        let notifier: Arc<dyn OrderNotifier> = match &config.mailer {
            Some(mailer) => Arc::new(HttpOrderNotifier::new(MailerClient::new(
                mailer.base_url.clone(),
                mailer.api_key.clone(),
                mailer.from_address.clone(),
            ))),
            None => {
                tracing::warn!("MAILER_BASE_URL not set, ready notifications are only logged");
                Arc::new(LogOnlyOrderNotifier::new(Arc::new(TracingLogger::new(
                    "mailer",
                ))))
            }
        };

        let (publisher, receiver) = OrderNotificationWorker::channel();
        let worker = OrderNotificationWorker {
            notifier,
            logger: Arc::new(TracingLogger::new("notifications")),
        };
        tokio::spawn(worker.run(receiver));

        // Menu and product use cases
        let list_menu_use_case = Arc::new(ListMenuUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_detail_use_case = Arc::new(GetProductDetailUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let list_products_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            option_group_repository: option_group_repository.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            option_group_repository: option_group_repository.clone(),
            logger: logger.clone(),
        });
        let set_active_use_case = Arc::new(SetProductActiveUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let set_special_use_case = Arc::new(SetProductSpecialUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Category use cases
        let list_categories_use_case = Arc::new(ListCategoriesUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let create_category_use_case = Arc::new(CreateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let update_category_use_case = Arc::new(UpdateCategoryUseCaseImpl {
            repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let delete_category_use_case = Arc::new(DeleteCategoryUseCaseImpl {
            repository: category_repository,
            logger: logger.clone(),
        });

        // Option group use cases
        let option_group_use_cases = OptionGroupUseCases {
            list: Arc::new(ListOptionGroupsUseCaseImpl {
                repository: option_group_repository.clone(),
                logger: logger.clone(),
            }),
            create: Arc::new(CreateOptionGroupUseCaseImpl {
                repository: option_group_repository.clone(),
                logger: logger.clone(),
            }),
            update: Arc::new(UpdateOptionGroupUseCaseImpl {
                repository: option_group_repository.clone(),
                logger: logger.clone(),
            }),
            delete: Arc::new(DeleteOptionGroupUseCaseImpl {
                repository: option_group_repository.clone(),
                logger: logger.clone(),
            }),
            create_option: Arc::new(CreateOptionUseCaseImpl {
                repository: option_group_repository.clone(),
                logger: logger.clone(),
            }),
            update_option: Arc::new(UpdateOptionUseCaseImpl {
                repository: option_group_repository.clone(),
                logger: logger.clone(),
            }),
            delete_option: Arc::new(DeleteOptionUseCaseImpl {
                repository: option_group_repository,
                logger: logger.clone(),
            }),
        };

        // Cart and checkout use cases
        let list_cart_use_case = Arc::new(ListCartLinesUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_cart_line_use_case = Arc::new(AddCartLineUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository,
            logger: logger.clone(),
        });
        let remove_cart_line_use_case = Arc::new(RemoveCartLineUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository,
            logger: logger.clone(),
        });
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            unit_of_work,
            logger: logger.clone(),
        });

        // Order history and kitchen use cases
        let get_history_use_case = Arc::new(GetOrderHistoryUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_order_detail_use_case = Arc::new(GetOrderDetailUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_queue_use_case = Arc::new(GetKitchenQueueUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let transition_use_case = Arc::new(TransitionOrderUseCaseImpl {
            repository: order_repository,
            publisher: Arc::new(publisher),
            logger,
        });

        let menu_api =
            crate::api::menu::routes::MenuApi::new(list_menu_use_case, get_detail_use_case);

        let product_admin_api = crate::api::catalog::routes::ProductAdminApi::new(
            list_products_use_case,
            create_product_use_case,
            update_product_use_case,
            set_active_use_case,
            set_special_use_case,
            delete_product_use_case,
        );

        let category_api = crate::api::catalog::category_routes::CategoryApi::new(
            list_categories_use_case,
            create_category_use_case,
            update_category_use_case,
            delete_category_use_case,
        );

        let option_group_api =
            crate::api::catalog::option_group_routes::OptionGroupApi::new(option_group_use_cases);

        let cart_api = crate::api::cart::routes::CartApi::new(
            list_cart_use_case,
            add_cart_line_use_case,
            remove_cart_line_use_case,
            clear_cart_use_case,
            place_order_use_case,
        );

        let order_api = crate::api::order::routes::OrderApi::new(
            get_history_use_case,
            get_order_detail_use_case,
        );

        let kitchen_api =
            crate::api::kitchen::routes::KitchenApi::new(get_queue_use_case, transition_use_case);

        Ok(Self {
            health_api,
            menu_api,
            product_admin_api,
            category_api,
            option_group_api,
            cart_api,
            order_api,
            kitchen_api,
            jwt_verifier: JwtVerifier::new(&config.auth.jwt_secret),
        })
    }
}

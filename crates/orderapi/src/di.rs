use crate::{
    abstract_trait::{
        order::{
            repository::{DynOrderCommandRepository, DynOrderQueryRepository},
            service::{DynOrderCommandService, DynOrderQueryService},
        },
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::{DynProductCommandService, DynProductQueryService},
        },
    },
    repository::{
        order::{OrderCommandRepository, OrderQueryRepository},
        product::{ProductCommandRepository, ProductQueryRepository},
    },
    service::{
        order::{OrderCommandService, OrderQueryService},
        product::{ProductCommandService, ProductQueryService},
    },
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"DynProductQueryService")
            .field("product_command", &"DynProductCommandService")
            .field("order_query", &"DynOrderQueryService")
            .field("order_command", &"DynOrderCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let product_query_repository =
            Arc::new(ProductQueryRepository::new(pool.clone())) as DynProductQueryRepository;
        let product_command_repository =
            Arc::new(ProductCommandRepository::new(pool.clone())) as DynProductCommandRepository;
        let order_query_repository =
            Arc::new(OrderQueryRepository::new(pool.clone())) as DynOrderQueryRepository;
        let order_command_repository =
            Arc::new(OrderCommandRepository::new(pool)) as DynOrderCommandRepository;

        let product_query =
            Arc::new(ProductQueryService::new(product_query_repository)) as DynProductQueryService;
        let product_command = Arc::new(ProductCommandService::new(product_command_repository))
            as DynProductCommandService;
        let order_query =
            Arc::new(OrderQueryService::new(order_query_repository)) as DynOrderQueryService;
        let order_command =
            Arc::new(OrderCommandService::new(order_command_repository)) as DynOrderCommandService;

        Self {
            product_query,
            product_command,
            order_query,
            order_command,
        }
    }
}

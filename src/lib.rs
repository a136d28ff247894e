pub mod config;
pub mod domain {
    pub mod assessment;
    pub mod return_request;
}
pub mod model;
pub mod repo;
pub mod analysis {
    pub mod condition;
    pub mod decision;
    pub mod fraud;
    pub mod prompts;
}
pub mod service {
    pub mod return_service;
}
pub mod http {
    pub mod handlers {
        pub mod history;
        pub mod returns;
    }
}

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub return_service: service::return_service::ReturnService,
    pub store: Arc<dyn repo::ReturnStore>,
}

use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    dashboard::value_objects::Dashboard,
};

#[cfg_attr(test, mockall::automock)]
pub trait DashboardService: Send + Sync {
    fn get_dashboard(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Dashboard, CoreError>> + Send;
}

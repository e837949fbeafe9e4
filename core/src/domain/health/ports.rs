use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::entities::{ReadinessStatus, SecretStatus},
};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn check_secret(&self, name: &str) -> Result<SecretStatus, CoreError>;

    fn readiness(&self) -> impl Future<Output = Result<ReadinessStatus, CoreError>> + Send;
}

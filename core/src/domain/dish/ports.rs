use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dish::{
        entities::{DishAnalysis, DishCatalogEntry},
        value_objects::{CatalogSource, IdentifyDishInput, VisionAnnotations},
    },
};

/// Client trait for the image labeling API
#[cfg_attr(test, mockall::automock)]
pub trait VisionClient: Send + Sync {
    fn annotate(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<VisionAnnotations, CoreError>> + Send;
}

/// Read-only access to the table of known dishes
#[cfg_attr(test, mockall::automock)]
pub trait DishCatalogRepository: Send + Sync {
    fn fetch_entries(&self) -> impl Future<Output = Result<Vec<DishCatalogEntry>, CoreError>> + Send;

    fn source(&self) -> CatalogSource;
}

#[cfg_attr(test, mockall::automock)]
pub trait DishAnalysisService: Send + Sync {
    fn identify_dish(
        &self,
        input: IdentifyDishInput,
    ) -> impl Future<Output = Result<DishAnalysis, CoreError>> + Send;
}

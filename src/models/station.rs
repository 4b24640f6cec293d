use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Station reference data keyed by station code.
pub type StationIndex = HashMap<String, StationRecord>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StationRecord {
    #[validate(length(min = 1))]
    pub code: String,

    pub name: String,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    pub river_basin: String,
    pub river: String,
    pub sea_region: String,

    #[validate(range(min = 0.0))]
    pub catchment_area: f64,

    #[validate(range(min = 0.0))]
    pub population_density: f64,

    pub altitude: i32,
}

impl StationRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: String,
        name: String,
        longitude: f64,
        latitude: f64,
        river_basin: String,
        river: String,
        sea_region: String,
        catchment_area: f64,
        population_density: f64,
        altitude: i32,
    ) -> Self {
        Self {
            code,
            name,
            longitude,
            latitude,
            river_basin,
            river,
            sea_region,
            catchment_area,
            population_density,
            altitude,
        }
    }
}

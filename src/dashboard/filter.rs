//! Row selection over the in-memory dataset

use crate::dataset::{Dataset, LaunchRecord};

use super::controls::{PayloadRange, SiteSelection};

/// Records launched from the selected site (all records for `ALL`)
pub fn select_site<'a>(dataset: &'a Dataset, site: &SiteSelection) -> Vec<&'a LaunchRecord> {
    dataset
        .iter()
        .filter(|record| site.matches(&record.launch_site))
        .collect()
}

/// Records whose payload lies in `range`, further restricted to `site`
pub fn select_payload_range<'a>(
    dataset: &'a Dataset,
    site: &SiteSelection,
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    dataset
        .iter()
        .filter(|record| range.contains(record.payload_mass_kg))
        .filter(|record| site.matches(&record.launch_site))
        .collect()
}

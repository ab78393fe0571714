use thiserror::Error;

use crate::domain::catalog::{
    CatalogResetReport, CatalogResetStep, CatalogSeedEntry, CatalogStatus, CatalogTable,
    SeededProduct,
};
use crate::repository::{CatalogMaintenance, CatalogStatusReader, RepositoryError};
use crate::services::{ServiceError, ServiceResult};

/// A reset that stopped before finishing.
///
/// Steps listed in `completed` have already been committed and are not
/// rolled back; running the reset again picks up from an emptier catalog.
#[derive(Debug, Error)]
#[error(
    "catalog reset stopped at `{failed_step}` after {count} completed steps",
    count = .completed.len()
)]
pub struct CatalogResetError {
    pub failed_step: CatalogResetStep,
    pub completed: Vec<CatalogResetStep>,
    #[source]
    pub source: RepositoryError,
}

/// Delete every catalog row, dependents first, then restart the identity
/// sequences of products, images and variants.
///
/// Each step commits on its own. The first failing step aborts the reset and
/// no later step runs.
pub fn reset_catalog<R>(repo: &R) -> Result<CatalogResetReport, CatalogResetError>
where
    R: CatalogMaintenance + ?Sized,
{
    let mut report = CatalogResetReport::default();
    let mut completed = Vec::new();

    for table in CatalogTable::DELETION_ORDER {
        let step = CatalogResetStep::DeleteRows(table);
        match repo.delete_all_rows(table) {
            Ok(rows) => {
                log::info!("Deleted {rows} rows from {table}");
                report.deleted.push((table, rows));
                completed.push(step);
            }
            Err(source) => {
                return Err(CatalogResetError {
                    failed_step: step,
                    completed,
                    source,
                });
            }
        }
    }

    for table in CatalogTable::IDENTITY_TABLES {
        let step = CatalogResetStep::ResetIdentity(table);
        match repo.reset_identity(table) {
            Ok(()) => {
                log::info!("Reset identity sequence of {table}");
                report.identities_reset.push(table);
                completed.push(step);
            }
            Err(source) => {
                return Err(CatalogResetError {
                    failed_step: step,
                    completed,
                    source,
                });
            }
        }
    }

    Ok(report)
}

/// Summarize the catalog: total count and, for a non-empty catalog, a few
/// sample products with images and the per-category breakdown.
pub fn catalog_status<R>(repo: &R) -> ServiceResult<CatalogStatus>
where
    R: CatalogStatusReader + ?Sized,
{
    let total_products = repo.count_products().map_err(ServiceError::from)?;

    if total_products == 0 {
        return Ok(CatalogStatus::empty());
    }

    let samples = repo
        .sample_products(CatalogStatus::SAMPLE_SIZE)
        .map_err(ServiceError::from)?;
    let categories = repo
        .count_products_by_category()
        .map_err(ServiceError::from)?;

    Ok(CatalogStatus {
        total_products,
        samples,
        categories,
    })
}

/// Insert every entry, one transaction per product. Stops at the first failure;
/// entries already inserted stay in place.
pub fn seed_catalog<R>(
    repo: &R,
    entries: &[CatalogSeedEntry],
) -> ServiceResult<Vec<SeededProduct>>
where
    R: CatalogMaintenance + ?Sized,
{
    let mut seeded = Vec::with_capacity(entries.len());

    for entry in entries {
        let created = repo.seed_entry(entry).map_err(ServiceError::from)?;
        log::debug!(
            "Seeded product #{} `{}` with {} images and {} variants",
            created.product_id,
            entry.product.name,
            created.image_ids.len(),
            created.variant_ids.len()
        );
        seeded.push(created);
    }

    log::info!("Seeded {} products", seeded.len());
    Ok(seeded)
}

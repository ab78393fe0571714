use mockall::mock;

use super::{CatalogMaintenance, CatalogStatusReader, ProductReader, RepositoryResult};
use crate::domain::{
    catalog::{CatalogSeedEntry, CatalogTable, CategoryCount, SeededProduct},
    product::{Product, ProductDetail, ProductListQuery, ProductWithImages},
};

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn get_product_detail(&self, id: i32) -> RepositoryResult<Option<ProductDetail>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<ProductWithImages>)>;
    }
}

mock! {
    pub CatalogMaintenance {}

    impl CatalogMaintenance for CatalogMaintenance {
        fn count_rows(&self, table: CatalogTable) -> RepositoryResult<i64>;
        fn delete_all_rows(&self, table: CatalogTable) -> RepositoryResult<usize>;
        fn reset_identity(&self, table: CatalogTable) -> RepositoryResult<()>;
        fn seed_entry(&self, entry: &CatalogSeedEntry) -> RepositoryResult<SeededProduct>;
    }
}

mock! {
    pub CatalogStatusReader {}

    impl CatalogStatusReader for CatalogStatusReader {
        fn count_products(&self) -> RepositoryResult<i64>;
        fn sample_products(&self, limit: i64) -> RepositoryResult<Vec<ProductWithImages>>;
        fn count_products_by_category(&self) -> RepositoryResult<Vec<CategoryCount>>;
    }
}

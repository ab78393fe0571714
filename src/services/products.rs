use serde::{Deserialize, Serialize};

use crate::domain::product::{ProductDetail, ProductListQuery, ProductWithImages};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::ProductReader;
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the product listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Optional category to restrict the listing to.
    pub category: Option<String>,
    /// Optional search string entered by the shopper.
    pub search: Option<String>,
    /// Page requested by the storefront (1-based).
    pub page: Option<usize>,
}

/// A page of the product listing.
#[derive(Debug, Serialize)]
pub struct ProductsPage {
    pub products: Paginated<ProductWithImages>,
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Loads one page of the product listing.
pub fn load_products_page<R>(repo: &R, query: ProductsQuery) -> ServiceResult<ProductsPage>
where
    R: ProductReader + ?Sized,
{
    let ProductsQuery {
        category,
        search,
        page,
    } = query;

    let category = category
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
    let search = search
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());

    let page = page.unwrap_or(1).max(1);
    let mut list_query = ProductListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(category) = category.as_ref() {
        list_query = list_query.category(category);
    }

    if let Some(term) = search.as_ref() {
        list_query = list_query.search(term);
    }

    let (total, items) = repo.list_products(list_query).map_err(ServiceError::from)?;

    Ok(ProductsPage {
        products: Paginated::new(items, page, total, DEFAULT_ITEMS_PER_PAGE),
        category,
        search,
    })
}

/// Loads everything the product page shows for `product_id`.
pub fn load_product<R>(repo: &R, product_id: i32) -> ServiceResult<ProductDetail>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_detail(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockProductReader;

    #[test]
    fn load_products_page_applies_filters_and_pagination() {
        let mut repo = MockProductReader::new();
        repo.expect_list_products()
            .times(1)
            .withf(|query| {
                assert_eq!(query.category.as_deref(), Some("apparel"));
                assert!(query.search.is_none());
                match &query.pagination {
                    Some(pagination) => {
                        assert_eq!(pagination.page, 2);
                        assert_eq!(pagination.per_page, DEFAULT_ITEMS_PER_PAGE);
                    }
                    None => panic!("expected pagination to be set"),
                }
                true
            })
            .returning(|_| Ok((30, Vec::new())));

        let page = load_products_page(
            &repo,
            ProductsQuery {
                category: Some(" apparel ".to_string()),
                search: Some("   ".to_string()),
                page: Some(2),
            },
        )
        .expect("page should load");

        assert_eq!(page.products.total_items, 30);
        assert_eq!(page.products.total_pages, 2);
        assert_eq!(page.category.as_deref(), Some("apparel"));
        assert!(page.search.is_none());
    }

    #[test]
    fn load_products_page_defaults_to_first_page() {
        let mut repo = MockProductReader::new();
        repo.expect_list_products()
            .withf(|query| query.pagination.map(|p| p.page) == Some(1))
            .returning(|_| Ok((0, Vec::new())));

        let page = load_products_page(&repo, ProductsQuery::default()).unwrap();

        assert_eq!(page.products.page, 1);
        assert!(page.products.items.is_empty());
    }

    #[test]
    fn load_product_maps_missing_row_to_not_found() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_detail().returning(|_| Ok(None));

        let result = load_product(&repo, 42);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}

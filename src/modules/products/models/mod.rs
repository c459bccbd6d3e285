mod pagination;
mod product;

pub use pagination::{
    last_page, PageMeta, Paginated, PaginationQuery, DEFAULT_LIMIT, DEFAULT_PAGE,
};
pub use product::{
    CreateProductRequest, Product, ProductChanges, UpdateProductRequest,
    ValidateProductsRequest, MAX_NAME_LENGTH,
};

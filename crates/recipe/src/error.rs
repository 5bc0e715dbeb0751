use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog format error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog {0} contains no readable recipes")]
    Empty(String),

    #[error("Recipe not found: {0}")]
    NotFound(u32),
}

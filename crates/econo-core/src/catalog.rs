//! # Product Catalog
//!
//! Read-only catalog abstraction plus the in-memory catalog the service ships
//! with. Handlers only see `dyn Catalog`, so a different backing store can be
//! swapped in without touching routing or authentication.

use crate::product::Product;

/// Read interface over a collection of products.
///
/// Implementations must be safe to read from any number of concurrent
/// requests. Mutation is out of scope; a mutable catalog would need its own
/// synchronization (e.g. `parking_lot::RwLock`) behind this trait.
pub trait Catalog: Send + Sync {
    /// All products, in catalog order.
    fn products(&self) -> &[Product];

    /// Find the product with the given slug, if any.
    fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products().iter().find(|p| p.slug == slug)
    }
}

/// Immutable, in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Build a catalog from an explicit product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in demo catalog.
    ///
    /// Ids are kept as published, including the two entries sharing `Id` 3.
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(1, "Scatterplot", "scatter-plot", "basic usage of scatterplots"),
            Product::new(2, "BoxPlot", "box-plot", "using box plots for distributions"),
            Product::new(
                3,
                "Time Series Analysis",
                "time-series-analysis",
                "charting series of data along an axis",
            ),
            Product::new(
                3,
                "Regression Analysis",
                "regression-analysis",
                "plotting regressions using static and series data",
            ),
            Product::new(
                4,
                "Cluster Analysis",
                "cluster-analysis",
                "plotting clusters of data to analyze different centroids",
            ),
            Product::new(
                5,
                "Decision Trees",
                "decision-trees",
                "creating a decision tree to analyze probability paths",
            ),
            Product::new(
                6,
                "Matrix Calculations",
                "matrix-calculations",
                "using packages to peform matrix calculations",
            ),
        ])
    }
}

impl Catalog for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}

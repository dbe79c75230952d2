//! The in-memory catalog store and its CSV ingestion path.
//!
//! Ingestion is forgiving on purpose: a malformed row is skipped with a
//! warning, and a source that cannot be read at all degrades to an empty
//! catalog rather than aborting startup.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use log::{info, warn};

use crate::data::{Product, ProductId};
use crate::error::Result;

/// The ordered, read-only collection of products the engine serves from.
///
/// Populated once at startup and never mutated afterwards; every other
/// structure in the crate refers to entries by [`ProductId`], the position
/// in the backing vector.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a catalog from a delimited file, degrading to an empty catalog
    /// (with a warning) if the source cannot be read at all.
    pub fn load(path: impl AsRef<Path>) -> Catalog {
        let path = path.as_ref();
        match Self::from_csv_path(path) {
            Ok(catalog) => {
                info!("loaded {} products from {}", catalog.len(), path.display());
                catalog
            }
            Err(err) => {
                warn!("failed to load catalog from {}: {err}", path.display());
                Catalog::default()
            }
        }
    }

    /// Read a catalog from a CSV file on disk.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Catalog> {
        Self::from_csv_reader(File::open(path)?)
    }

    /// Read a catalog from any CSV source.
    ///
    /// The first row is a header and is skipped. Each following row maps to
    /// one [`Product`] according to its width:
    ///
    /// - **5 columns**: brand, name, price, image URL, product URL
    /// - **8 columns**: the five above plus battery life, waterproof rating
    ///   and toothbrush type
    /// - **9 columns**: the five above plus review count, rating, stock
    ///   status and description
    ///
    /// Rows with fewer than five columns are skipped with a warning; wider
    /// rows are truncated to the nine known columns.
    pub fn from_csv_reader(reader: impl Read) -> Result<Catalog> {
        let mut csv_reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let mut products = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            match parse_record(&record) {
                Some(product) => products.push(product),
                None => warn!(
                    "skipping row with {} columns (need at least 5)",
                    record.len()
                ),
            }
        }
        Ok(Catalog::new(products))
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products paired with their ids, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &Product)> {
        self.products.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn parse_record(record: &csv::StringRecord) -> Option<Product> {
    if record.len() < 5 {
        return None;
    }
    let field = |i: usize| record.get(i).unwrap_or("").to_string();

    let mut product = Product {
        brand: field(0),
        name: field(1),
        price: field(2),
        image_url: field(3),
        product_url: field(4),
        review_count: "0".to_string(),
        rating: "0.0".to_string(),
        stock_status: "Unknown".to_string(),
        description: String::new(),
        ..Product::default()
    };

    match record.len() {
        8 => {
            product.battery_life = Some(field(5));
            product.waterproof_rating = Some(field(6));
            product.toothbrush_type = Some(field(7));
        }
        n if n >= 9 => {
            product.review_count = field(5);
            product.rating = field(6);
            product.stock_status = field(7);
            product.description = field(8);
        }
        _ => {}
    }
    Some(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_five_column_schema_defaults() {
        let csv = "Brand,Title,Price,Image URL,Product URL\n\
                   Oral-B,Oral-B Pro 1000,$39.99,http://img/1.png,http://shop/1\n";
        let catalog = Catalog::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);

        let product = catalog.get(0).unwrap();
        assert_eq!(product.brand, "Oral-B");
        assert_eq!(product.name, "Oral-B Pro 1000");
        assert_eq!(product.price, "$39.99");
        assert_eq!(product.review_count, "0");
        assert_eq!(product.rating, "0.0");
        assert_eq!(product.stock_status, "Unknown");
        assert_eq!(product.description, "");
        assert!(product.battery_life.is_none());
    }

    #[test]
    fn test_eight_column_schema_carries_facets() {
        let csv = "Brand,Title,Price,Image,Url,Battery,Waterproof,Type\n\
                   Philips,Sonicare 4100,$49.99,i,u,14,IPX7,Electric\n";
        let catalog = Catalog::from_csv_reader(csv.as_bytes()).unwrap();
        let product = catalog.get(0).unwrap();
        assert_eq!(product.battery_life.as_deref(), Some("14"));
        assert_eq!(product.waterproof_rating.as_deref(), Some("IPX7"));
        assert_eq!(product.toothbrush_type.as_deref(), Some("Electric"));
        // Review fields still take defaults in this schema.
        assert_eq!(product.review_count, "0");
    }

    #[test]
    fn test_nine_column_schema_carries_reviews() {
        let csv = "Brand,Title,Price,Image,Url,Reviews,Rating,Stock,Description\n\
                   Quip,Quip Metal,$25.00,i,u,1234,4.5,In Stock,A quiet brush\n";
        let catalog = Catalog::from_csv_reader(csv.as_bytes()).unwrap();
        let product = catalog.get(0).unwrap();
        assert_eq!(product.review_count, "1234");
        assert_eq!(product.rating, "4.5");
        assert_eq!(product.stock_status, "In Stock");
        assert_eq!(product.description, "A quiet brush");
        assert!(product.toothbrush_type.is_none());
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let csv = "Brand,Title,Price,Image URL,Product URL\n\
                   Oral-B,Pro 1000,$39.99,i,u\n\
                   BrokenRow,only-two\n\
                   Quip,Quip Metal,$25.00,i,u\n";
        let catalog = Catalog::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().brand, "Quip");
    }

    #[test]
    fn test_header_is_not_a_product() {
        let csv = "Brand,Title,Price,Image URL,Product URL\n";
        let catalog = Catalog::from_csv_reader(csv.as_bytes()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_missing_file_degrades_to_empty() {
        let catalog = Catalog::load("/no/such/catalog.csv");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Brand,Title,Price,Image URL,Product URL").unwrap();
        writeln!(file, "Oral-B,Pro 1000,$39.99,i,u").unwrap();
        file.flush().unwrap();

        let catalog = Catalog::load(file.path());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().name, "Pro 1000");
    }
}

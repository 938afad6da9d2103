use std::sync::OnceLock;

use txgen_core::PaymentMethod;

use crate::errors::GenerationError;

const LOCATIONS: &str = include_str!("../assets/locations.txt");
const NAMES: &str = include_str!("../assets/names.txt");
const PRODUCTS: &str = include_str!("../assets/products.txt");

/// Read-only reference tables that records are sampled from.
#[derive(Debug, Clone)]
pub struct Catalog {
    locations: Vec<String>,
    names: Vec<String>,
    products: Vec<String>,
    payment_methods: Vec<PaymentMethod>,
}

impl Catalog {
    pub fn new(
        locations: Vec<String>,
        names: Vec<String>,
        products: Vec<String>,
        payment_methods: Vec<PaymentMethod>,
    ) -> Result<Self, GenerationError> {
        if locations.is_empty() {
            return Err(GenerationError::EmptyCatalog("locations"));
        }
        if names.is_empty() {
            return Err(GenerationError::EmptyCatalog("names"));
        }
        if products.is_empty() {
            return Err(GenerationError::EmptyCatalog("products"));
        }
        if payment_methods.is_empty() {
            return Err(GenerationError::EmptyCatalog("payment_methods"));
        }
        Ok(Self {
            locations,
            names,
            products,
            payment_methods,
        })
    }

    /// The catalog compiled into the binary, parsed once per process.
    pub fn embedded() -> Result<&'static Catalog, GenerationError> {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        if let Some(catalog) = CATALOG.get() {
            return Ok(catalog);
        }

        let catalog = Catalog::new(
            read_lines(LOCATIONS),
            read_lines(NAMES),
            read_lines(PRODUCTS),
            PaymentMethod::ALL.to_vec(),
        )?;
        Ok(CATALOG.get_or_init(|| catalog))
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }
}

fn read_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

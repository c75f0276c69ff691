use serde::Deserialize;

/// Page size used when configuration does not override it
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size accepted from configuration
pub const MAX_PAGE_SIZE: u32 = 100;

/// Zero-based page selector over an ordered result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(number: u32, size: u32) -> Self {
        Self { number, size }
    }

    /// Number of rows to skip. Computed in u64 so `number * size` cannot overflow.
    pub fn offset(&self) -> u64 {
        u64::from(self.number) * u64::from(self.size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.size)
    }
}

/// `?page=N` query string, defaulting to the first page
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: u32,
}

//! Plain record types used with the collections: galaxies and chemical
//! elements. Both are simple field bags compared by value.

/// A galaxy and its distance from us in millions of light years.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Galaxy {
    pub name: String,
    pub mega_light_years: u32,
}

impl Galaxy {
    pub fn new(name: impl Into<String>, mega_light_years: u32) -> Self {
        Self {
            name: name.into(),
            mega_light_years,
        }
    }
}

/// A chemical element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    /// Chemical symbol, e.g. `"Ca"`.
    pub symbol: String,

    /// English name, e.g. `"Calcium"`.
    pub name: String,

    /// Number of protons.
    pub atomic_number: u32,
}

impl Element {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, atomic_number: u32) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            atomic_number,
        }
    }
}

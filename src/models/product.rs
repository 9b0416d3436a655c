//! Product records and the tabbed product list filter.

use serde::{Deserialize, Serialize};

/// Sale state reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    OnSale,
    SoldOut,
    Hidden,
}

impl ProductStatus {
    /// State offered by the owner's on-sale/sold-out toggle.
    ///
    /// Hidden products are put back on sale.
    pub fn toggled(self) -> Self {
        match self {
            Self::OnSale => Self::SoldOut,
            Self::SoldOut | Self::Hidden => Self::OnSale,
        }
    }
}

/// Product as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in the smallest currency unit (won).
    pub price: u64,
    #[serde(default)]
    pub image_url: Option<String>,
    /// External page the product was imported from.
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub status: ProductStatus,
    /// Peermall (tenant) that lists the product.
    pub peermall_slug: String,
    pub owner_id: String,
    /// Unix timestamp in seconds.
    #[serde(default)]
    pub created_at: Option<u64>,
}

/// Create/update payload for a product.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: u64,
    pub image_url: Option<String>,
    pub source_url: Option<String>,
    pub peermall_slug: String,
    /// New sale state; left unchanged by the backend when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
}

/// Validation failures for [`ProductDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductDraftError {
    MissingName,
    MissingPeermall,
    /// Price field was not a whole non-negative number.
    InvalidPrice,
}

impl std::fmt::Display for ProductDraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "product name is required"),
            Self::MissingPeermall => write!(f, "choose a peermall for this product"),
            Self::InvalidPrice => write!(f, "price must be a whole number"),
        }
    }
}

impl ProductDraft {
    /// Update payload that keeps `product` as is apart from its sale state.
    pub fn with_status(product: &Product, status: ProductStatus) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            source_url: product.source_url.clone(),
            peermall_slug: product.peermall_slug.clone(),
            status: Some(status),
        }
    }

    /// Parse a price typed by the user. Accepts thousands separators.
    pub fn parse_price(input: &str) -> Result<u64, ProductDraftError> {
        let digits: String = input.trim().chars().filter(|c| *c != ',').collect();
        digits
            .parse::<u64>()
            .map_err(|_| ProductDraftError::InvalidPrice)
    }

    /// Trim fields and reject drafts the backend would refuse.
    pub fn validated(mut self) -> Result<Self, ProductDraftError> {
        self.name = self.name.trim().to_string();
        self.peermall_slug = self.peermall_slug.trim().to_string();
        if self.name.is_empty() {
            return Err(ProductDraftError::MissingName);
        }
        if self.peermall_slug.is_empty() {
            return Err(ProductDraftError::MissingPeermall);
        }
        self.description = non_empty(self.description);
        self.image_url = non_empty(self.image_url);
        self.source_url = non_empty(self.source_url);
        Ok(self)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Tabs above a product list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProductTab {
    #[default]
    All,
    OnSale,
    SoldOut,
    /// Products owned by the signed-in user.
    Mine,
}

impl ProductTab {
    /// Tabs shown to anonymous visitors.
    pub const PUBLIC: [ProductTab; 3] = [Self::All, Self::OnSale, Self::SoldOut];

    /// Tabs shown to signed-in visitors.
    pub const SIGNED_IN: [ProductTab; 4] = [Self::All, Self::OnSale, Self::SoldOut, Self::Mine];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::OnSale => "On sale",
            Self::SoldOut => "Sold out",
            Self::Mine => "Mine",
        }
    }

    /// Whether `product` belongs under this tab.
    ///
    /// Hidden products only appear under [`ProductTab::Mine`].
    pub fn matches(self, product: &Product, user_id: Option<&str>) -> bool {
        match self {
            Self::All => product.status != ProductStatus::Hidden,
            Self::OnSale => product.status == ProductStatus::OnSale,
            Self::SoldOut => product.status == ProductStatus::SoldOut,
            Self::Mine => user_id.is_some_and(|id| product.owner_id == id),
        }
    }

    /// Products visible under this tab, in their original order.
    pub fn filter<'a>(self, products: &'a [Product], user_id: Option<&str>) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| self.matches(p, user_id))
            .collect()
    }
}

#[cfg(test)]
pub(crate) fn sample_product(id: &str, status: ProductStatus, owner: &str) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        description: None,
        price: 12_000,
        image_url: None,
        source_url: None,
        status,
        peermall_slug: "corner-shop".to_string(),
        owner_id: owner.to_string(),
        created_at: Some(1_704_067_200),
    }
}

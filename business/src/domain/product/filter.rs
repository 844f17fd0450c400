use std::cmp::Ordering;

use super::model::Product;
use super::value_objects::{SortField, SortOrder};
use crate::domain::shared::value_objects::CategoryId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    #[error("filter.invalid_category")]
    InvalidCategory,
    #[error("filter.invalid_price_min")]
    InvalidPriceMin,
    #[error("filter.invalid_price_max")]
    InvalidPriceMax,
    #[error("filter.invalid_sort_field")]
    InvalidSortField,
    #[error("filter.invalid_sort_order")]
    InvalidSortOrder,
}

/// Constraints applied to a product listing. Absent filters impose no constraint;
/// present ones are combined with logical AND. Ordering is always applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterConfiguration {
    pub category_id: Option<CategoryId>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl FilterConfiguration {
    /// Category constraint, ignoring the zero id used by "all categories".
    pub fn effective_category(&self) -> Option<CategoryId> {
        self.category_id.filter(|id| id.value() != 0)
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category_id) = self.effective_category()
            && product.category_id != category_id
        {
            return false;
        }
        if let Some(min) = self.price_min
            && product.price < min
        {
            return false;
        }
        if let Some(max) = self.price_max
            && product.price > max
        {
            return false;
        }
        true
    }

    /// Listing order: the requested field and direction, then id ascending on ties.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let primary = match self.sort_by {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Price => a.price.total_cmp(&b.price),
        };
        let primary = match self.sort_order {
            SortOrder::Ascending => primary,
            SortOrder::Descending => primary.reverse(),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// Raw filter panel values as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterInput {
    pub category_id: String,
    pub price_min: String,
    pub price_max: String,
    pub sort_by: String,
    pub sort_order: String,
}

impl Default for FilterInput {
    fn default() -> Self {
        Self {
            category_id: String::new(),
            price_min: String::new(),
            price_max: String::new(),
            sort_by: SortField::default().to_string(),
            sort_order: SortOrder::default().to_string(),
        }
    }
}

impl FilterInput {
    pub fn parse(&self) -> Result<FilterConfiguration, FilterError> {
        let category_id = optional(&self.category_id)
            .map(|raw| raw.parse::<i64>().map(CategoryId::new))
            .transpose()
            .map_err(|_| FilterError::InvalidCategory)?;

        let price_min = optional(&self.price_min)
            .map(parse_price)
            .transpose()
            .map_err(|_| FilterError::InvalidPriceMin)?;

        let price_max = optional(&self.price_max)
            .map(parse_price)
            .transpose()
            .map_err(|_| FilterError::InvalidPriceMax)?;

        let sort_by = match optional(&self.sort_by) {
            Some(raw) => raw
                .parse::<SortField>()
                .map_err(|_| FilterError::InvalidSortField)?,
            None => SortField::default(),
        };

        let sort_order = match optional(&self.sort_order) {
            Some(raw) => raw
                .parse::<SortOrder>()
                .map_err(|_| FilterError::InvalidSortOrder)?,
            None => SortOrder::default(),
        };

        Ok(FilterConfiguration {
            category_id,
            price_min,
            price_max,
            sort_by,
            sort_order,
        })
    }
}

fn optional(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_price(raw: &str) -> Result<f64, ()> {
    raw.parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or(())
}

use business::domain::product::filter::FilterConfiguration;

/// PostgREST query string for a filtered, ordered read of the products table.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    params: Vec<(String, String)>,
}

impl ProductQuery {
    pub fn from_filters(filters: &FilterConfiguration) -> Self {
        let mut params = vec![("select".to_string(), "*".to_string())];

        if let Some(category_id) = filters.effective_category() {
            params.push(("category_id".to_string(), format!("eq.{}", category_id)));
        }
        if let Some(min) = filters.price_min {
            params.push(("price".to_string(), format!("gte.{}", min)));
        }
        if let Some(max) = filters.price_max {
            params.push(("price".to_string(), format!("lte.{}", max)));
        }

        params.push((
            "order".to_string(),
            format!("{}.{},id.asc", filters.sort_by.column(), filters.sort_order),
        ));

        Self { params }
    }

    pub fn by_id(id: &str) -> Self {
        Self {
            params: vec![
                ("select".to_string(), "*".to_string()),
                ("id".to_string(), format!("eq.{}", id)),
            ],
        }
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

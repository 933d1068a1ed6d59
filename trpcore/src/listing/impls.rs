use std::ops::Deref;
use crate::listing::*;

impl ResourceKind {
    /// Page size applied when the request carries no usable `limit`.
    /// Articles have no fixed default in the reference contract; the 9
    /// here suits the 3-column blog grid and callers may override it
    /// through [`ListParams::resolve_with_default_limit`].
    pub fn default_limit(&self) -> i64 {
        match self {
            ResourceKind::Review => 10,
            ResourceKind::Video => 12,
            ResourceKind::Article => 9,
        }
    }

    /// Resolve a client-facing sort field name against the allow-list
    /// for this kind.  Unknown names fall back to the publish date
    /// rather than passing client text through to the query layer.
    fn sort_column(&self, name: &str) -> &'static str {
        match (self, name) {
            (ResourceKind::Review, "rating") => "rating",
            (ResourceKind::Review, "price") => "price",
            (ResourceKind::Review, "brand") => "brand",
            (ResourceKind::Review, "updatedDate") => "updated_date",
            (ResourceKind::Video, "views") => "views",
            (ResourceKind::Video, "duration") => "duration",
            (ResourceKind::Article, "views") => "views",
            (ResourceKind::Article, "updatedDate") => "updated_date",
            (_, "title") => "title",
            (_, "category") => "category",
            (_, "publishDate") => "publish_date",
            (_, other) => {
                log::debug!("unsupported sort field {other:?}, using publish_date");
                "publish_date"
            }
        }
    }
}

impl SortDirection {
    /// Only the literal `"asc"` selects ascending order; every other
    /// value, absent included, is descending.
    fn from_order(order: Option<&str>) -> Self {
        match order {
            Some("asc") => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

impl From<Vec<FilterClause>> for ListFilter {
    fn from(args: Vec<FilterClause>) -> Self {
        Self(args)
    }
}

impl Deref for ListFilter {
    type Target = Vec<FilterClause>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ListParams {
    pub fn resolve(&self, kind: ResourceKind) -> ListQuery {
        self.resolve_with_default_limit(kind, kind.default_limit())
    }

    /// Resolve these parameters into a normalized storage query.
    ///
    /// Pure function of the inputs: page/limit fall back to defaults on
    /// any parse failure or non-positive value, filter clauses apply
    /// only to the fields the kind supports, and the sort name goes
    /// through the per-kind allow-list.  `limit` is deliberately left
    /// uncapped to match the reference contract.
    pub fn resolve_with_default_limit(
        &self,
        kind: ResourceKind,
        default_limit: i64,
    ) -> ListQuery {
        let page = parse_positive(self.page.as_deref(), 1);
        let limit = parse_positive(self.limit.as_deref(), default_limit);

        let mut clauses = Vec::new();
        if kind == ResourceKind::Review {
            if let Some(brand) = non_empty(self.brand.as_deref()) {
                clauses.push(FilterClause::Brand(brand.to_string()));
            }
        }
        if let Some(category) = non_empty(self.category.as_deref()) {
            clauses.push(FilterClause::Category(category.to_string()));
        }
        if matches!(kind, ResourceKind::Video | ResourceKind::Article) {
            if let Some(tag) = non_empty(self.tag.as_deref()) {
                clauses.push(FilterClause::Tag(tag.to_string()));
            }
        }
        if kind == ResourceKind::Review {
            // non-numeric minRating means no rating bound at all
            if let Some(min_rating) = self.min_rating
                .as_deref()
                .and_then(|v| v.trim().parse::<f64>().ok())
            {
                clauses.push(FilterClause::MinRating(min_rating));
            }
        }

        let sort = non_empty(self.sort.as_deref()).unwrap_or("publishDate");
        ListQuery {
            filter: clauses.into(),
            sort_column: kind.sort_column(sort),
            direction: SortDirection::from_order(self.order.as_deref()),
            page,
            limit,
            // page and limit parse as any positive i64; saturate rather
            // than overflow so an absurd page lands past the data
            skip: (page - 1).saturating_mul(limit),
        }
    }
}

impl Pagination {
    /// `pages = ceil(total / limit)`; zero matches means zero pages.
    /// The requested page is echoed even when it lies past the data.
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        Self {
            total,
            page,
            limit,
            pages: (total as u64).div_ceil(limit as u64) as i64,
        }
    }
}

fn parse_positive(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod testing {
    use crate::listing::{
        FilterClause,
        ListParams,
        Pagination,
        ResourceKind,
        SortDirection,
    };

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        let mut params = ListParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "page" => params.page = value,
                "limit" => params.limit = value,
                "brand" => params.brand = value,
                "category" => params.category = value,
                "tag" => params.tag = value,
                "minRating" => params.min_rating = value,
                "sort" => params.sort = value,
                "order" => params.order = value,
                other => panic!("unhandled parameter {other}"),
            }
        }
        params
    }

    #[test]
    fn defaults() {
        let query = ListParams::default().resolve(ResourceKind::Review);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert_eq!(query.skip, 0);
        assert!(query.filter.is_empty());
        assert_eq!(query.sort_column, "publish_date");
        assert_eq!(query.direction, SortDirection::Descending);

        let query = ListParams::default().resolve(ResourceKind::Video);
        assert_eq!(query.limit, 12);

        let query = ListParams::default()
            .resolve_with_default_limit(ResourceKind::Article, 9);
        assert_eq!(query.limit, 9);
    }

    #[test]
    fn malformed_page_and_limit() {
        for bad in ["abc", "", "0", "-3", "2.5"] {
            let query = params(&[("page", bad), ("limit", bad)])
                .resolve(ResourceKind::Review);
            assert_eq!(query.page, 1, "page {bad:?}");
            assert_eq!(query.limit, 10, "limit {bad:?}");
            assert_eq!(query.skip, 0);
        }
    }

    #[test]
    fn skip_math() {
        let query = params(&[("page", "2"), ("limit", "5")])
            .resolve(ResourceKind::Review);
        assert_eq!(query.skip, 5);

        let query = params(&[("page", "999")])
            .resolve(ResourceKind::Review);
        assert_eq!(query.page, 999);
        assert_eq!(query.skip, 9980);
    }

    #[test]
    fn extreme_page_and_limit() {
        let max = i64::MAX.to_string();

        // skip saturates instead of overflowing; the window lies past
        // any data so the page comes back empty, page still echoed
        let query = params(&[("page", max.as_str())])
            .resolve(ResourceKind::Review);
        assert_eq!(query.page, i64::MAX);
        assert_eq!(query.skip, i64::MAX);

        let query = params(&[("page", "2"), ("limit", max.as_str())])
            .resolve(ResourceKind::Review);
        assert_eq!(query.limit, i64::MAX);
        assert_eq!(query.skip, i64::MAX);

        assert_eq!(Pagination::new(3, 1, i64::MAX).pages, 1);
        assert_eq!(Pagination::new(i64::MAX, 1, 1).pages, i64::MAX);
    }

    #[test]
    fn order_normalization() {
        let query = params(&[("order", "asc")]).resolve(ResourceKind::Review);
        assert_eq!(query.direction, SortDirection::Ascending);

        // anything but the literal "asc" stays descending
        for other in ["desc", "", "ASC", "Asc", "foo"] {
            let query = params(&[("order", other)]).resolve(ResourceKind::Review);
            assert_eq!(query.direction, SortDirection::Descending, "order {other:?}");
        }
        let query = ListParams::default().resolve(ResourceKind::Review);
        assert_eq!(query.direction, SortDirection::Descending);
    }

    #[test]
    fn conjunctive_filter() {
        let query = params(&[("brand", "Apple"), ("category", "Smartphone")])
            .resolve(ResourceKind::Review);
        assert_eq!(&*query.filter, &[
            FilterClause::Brand("Apple".to_string()),
            FilterClause::Category("Smartphone".to_string()),
        ]);
    }

    #[test]
    fn empty_values_filter_nothing() {
        let query = params(&[("brand", ""), ("category", "")])
            .resolve(ResourceKind::Review);
        assert!(query.filter.is_empty());
    }

    #[test]
    fn min_rating_leniency() {
        let query = params(&[("minRating", "4.5")]).resolve(ResourceKind::Review);
        assert_eq!(&*query.filter, &[FilterClause::MinRating(4.5)]);

        let query = params(&[("minRating", "abc")]).resolve(ResourceKind::Review);
        assert!(query.filter.is_empty());
    }

    #[test]
    fn kind_gates_filter_fields() {
        // brand and minRating are review-only; tag is for videos and
        // articles
        let query = params(&[("brand", "Apple"), ("minRating", "4"), ("tag", "5G")])
            .resolve(ResourceKind::Video);
        assert_eq!(&*query.filter, &[FilterClause::Tag("5G".to_string())]);

        let query = params(&[("tag", "5G")]).resolve(ResourceKind::Review);
        assert!(query.filter.is_empty());
    }

    #[test]
    fn sort_allow_list() {
        let query = params(&[("sort", "views")]).resolve(ResourceKind::Video);
        assert_eq!(query.sort_column, "views");

        let query = params(&[("sort", "rating")]).resolve(ResourceKind::Review);
        assert_eq!(query.sort_column, "rating");

        // views is not a review field; unknown names fall back
        let query = params(&[("sort", "views")]).resolve(ResourceKind::Review);
        assert_eq!(query.sort_column, "publish_date");

        let query = params(&[("sort", "slug; DROP TABLE review")])
            .resolve(ResourceKind::Review);
        assert_eq!(query.sort_column, "publish_date");
    }

    #[test]
    fn resolution_is_idempotent() {
        let params = params(&[
            ("page", "3"),
            ("limit", "7"),
            ("brand", "Sony"),
            ("minRating", "3.5"),
            ("sort", "rating"),
            ("order", "asc"),
        ]);
        assert_eq!(
            params.resolve(ResourceKind::Review),
            params.resolve(ResourceKind::Review),
        );
    }

    #[test]
    fn pagination_envelope() {
        assert_eq!(Pagination::new(0, 1, 10).pages, 0);
        assert_eq!(Pagination::new(1, 1, 10).pages, 1);
        assert_eq!(Pagination::new(10, 1, 10).pages, 1);
        assert_eq!(Pagination::new(21, 1, 10).pages, 3);
        assert_eq!(Pagination::new(12, 2, 5).pages, 3);

        // page echoed, not clamped
        let pagination = Pagination::new(3, 999, 10);
        assert_eq!(pagination, Pagination {
            total: 3,
            page: 999,
            limit: 10,
            pages: 1,
        });
    }
}

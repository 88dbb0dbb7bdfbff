#[cfg(test)]
mod tests {
    use super::super::category::*;
    use super::super::table::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbols_are_unique_across_categories() {
        let mut seen = HashSet::new();
        for symbol in CATEGORY_TABLE.symbols() {
            assert!(seen.insert(symbol), "duplicate unit symbol: {}", symbol);
        }
    }

    #[test]
    fn test_every_listed_unit_resolves_to_its_group() {
        for group in CATEGORY_TABLE.groups() {
            for unit in &group.units {
                assert_eq!(category_of(unit.symbol), Some(group.category));
            }
        }
    }

    #[test]
    fn test_category_names() {
        assert_eq!(category_name_of("g"), "mass");
        assert_eq!(category_name_of("Kg"), "mass");
        assert_eq!(category_name_of("ml"), "volume");
        assert_eq!(category_name_of("L"), "volume");
        assert_eq!(category_name_of("cm"), "length");
        assert_eq!(category_name_of("m"), "length");
        assert_eq!(category_name_of("box"), "count");
    }

    #[test]
    fn test_unlisted_symbol_is_not_found() {
        assert_eq!(category_of("oz"), None);
        assert_eq!(category_name_of("oz"), NONE_FOUND);
        assert_eq!(category_name_of(""), "none found");
        // Lookup is exact, like picking from a select box
        assert_eq!(category_of("kg"), None);
    }

    #[test]
    fn test_base_units_have_factor_one() {
        for category in Category::ALL {
            assert_eq!(CATEGORY_TABLE.factor_of(category.base_unit()), Some(1.0));
            assert_eq!(category_of(category.base_unit()), Some(category));
        }
        assert_eq!(CATEGORY_TABLE.factor_of("Kg"), Some(1000.0));
        assert_eq!(CATEGORY_TABLE.factor_of("m"), Some(100.0));
    }

    #[test]
    fn test_units_keep_table_order() {
        let mass: Vec<_> = CATEGORY_TABLE
            .units(Category::Mass)
            .iter()
            .map(|u| u.symbol)
            .collect();
        assert_eq!(mass, vec!["g", "Kg"]);

        let categories: Vec<_> = CATEGORY_TABLE.groups().iter().map(|g| g.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }
}

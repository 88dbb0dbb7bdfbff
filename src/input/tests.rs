#[cfg(test)]
mod tests {
    use super::super::loader::*;
    use crate::compare::{compare, CompareError};
    use crate::numeric::NumberInput;

    #[test]
    fn test_load_products_file() {
        let content = r#"
[[product]]
name = "rice"
quantity = 1000
unit = "g"
price = "$20.00"

[[product]]
name = "beans"
quantity = "500"
unit = "g"
price = 11
"#;

        let entries = load_entries_from_str(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 0);
        assert_eq!(entries[1].id, 1);
        assert_eq!(entries[0].quantity, NumberInput::Number(1000.0));
        assert_eq!(entries[0].price, NumberInput::Text("$20.00".to_string()));

        let result = compare(&entries).unwrap();
        assert_eq!(result.winner().entry.name, "Rice");
    }

    #[test]
    fn test_missing_fields_become_blank() {
        let content = r#"
[[product]]
name = "rice"
quantity = 1
price = 2

[[product]]
name = "beans"
"#;

        let entries = load_entries_from_str(content).unwrap();
        assert_eq!(entries[0].unit, "");
        assert!(entries[1].quantity.is_blank());
        assert_eq!(
            compare(&entries),
            Err(CompareError::MissingUnit { product: 1 })
        );
    }

    #[test]
    fn test_empty_file_has_no_products() {
        assert!(load_entries_from_str("").unwrap().is_empty());
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            load_entries_from_str("[[product]\nname ="),
            Err(InputError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_product_spec() {
        let entry = parse_product_spec(3, "Olive oil; 1 ; L ; $1,234.50").unwrap();
        assert_eq!(entry.id, 3);
        assert_eq!(entry.name, "Olive oil");
        assert_eq!(entry.unit, "L");
        assert_eq!(entry.price, NumberInput::Text("$1,234.50".to_string()));

        assert!(matches!(
            parse_product_spec(0, "Olive oil;1;L"),
            Err(InputError::BadSpec { .. })
        ));
    }

    #[test]
    fn test_parse_product_specs_numbers_slots() {
        let specs = ["a;1;g;1", "b;2;g;1"];
        let entries = parse_product_specs(&specs).unwrap();
        assert_eq!(entries[1].id, 1);
        assert_eq!(entries[1].name, "b");
    }

    #[test]
    fn test_load_demo_file() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("demos")
            .join("products.toml");
        let entries = load_entries_from_file(path).unwrap();
        assert_eq!(entries.len(), 3);

        let result = compare(&entries).unwrap();
        assert_eq!(result.winner().entry.name, "Rice, family bag");
        assert_eq!(result.entries[2].entry.quantity, 2.5);
        assert_eq!(result.entries[2].entry.price, 1234.0);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_entries_from_file("does/not/exist.toml"),
            Err(InputError::Io(_))
        ));
    }
}

//! Library tests for currency formatting and the money field.

use fieldkit::adapters::{ControlledField, FieldController, FieldError, FieldProps, MoneyField, MoneyFieldConfig};
use fieldkit::error::ConfigError;
use fieldkit::models::{MoneyAmount, Separators};
use fieldkit::services::{format_money, parse_money_input, MoneyFormatter};

fn br() -> Separators {
    Separators::parse(",", ".").unwrap()
}

#[test]
fn test_grouping_examples() {
    assert_eq!(format_money(Some(0.0), &br()), "0,00");
    assert_eq!(format_money(Some(100.5), &br()), "100,50");
    assert_eq!(format_money(Some(10000.0), &br()), "10.000,00");
    assert_eq!(format_money(None, &br()), "");
}

#[test]
fn test_round_trip_every_cent_up_to_ten_units() {
    let seps = br();
    for cents in 0..=1000_i64 {
        let value = MoneyAmount::from_minor(cents).to_major();
        assert_eq!(
            parse_money_input(&format_money(Some(value), &seps)),
            value,
            "{cents} cents"
        );
    }
}

#[test]
fn test_round_trip_large_amounts() {
    let seps = br();
    for value in [123_456.78, 1_000_000.0, 99_999_999.99, 4_503_599_627.37] {
        assert_eq!(parse_money_input(&format_money(Some(value), &seps)), value);
    }
}

#[test]
fn test_separator_validation() {
    assert_eq!(Separators::parse(",", ","), Err(ConfigError::SeparatorsEqual(',')));
    assert!(matches!(
        Separators::parse("", "."),
        Err(ConfigError::EmptySeparator { role: "decimal" })
    ));
    assert!(matches!(
        Separators::parse(",", ".."),
        Err(ConfigError::MultiCharSeparator { role: "thousand", .. })
    ));
    assert!(matches!(
        Separators::parse("0", "."),
        Err(ConfigError::DigitSeparator { role: "decimal", value: '0' })
    ));
}

#[test]
fn test_same_value_differs_by_configuration() {
    let us = MoneyFormatter::from_config(".", ",", "$").unwrap();
    let br = MoneyFormatter::default();
    assert_eq!(us.format(Some(1234.5)), "1,234.50");
    assert_eq!(br.format(Some(1234.5)), "1.234,50");
}

#[test]
fn test_money_field_with_form_state() {
    let field = MoneyField::new(MoneyFieldConfig::default());
    let mut price = ControlledField::with_default("price", 0.0);
    let props = FieldProps {
        helper_text: Some("Gross amount".to_string()),
        ..FieldProps::labeled("Price")
    };

    // Each keystroke re-reads the whole text
    for typed in ["1", "0,12", "1,23", "12,34"] {
        field.handle_input(&mut price, typed);
    }
    assert_eq!(price.value(), Some(&12.34));
    assert_eq!(field.display_for(&price), "12,34");
    assert_eq!(field.prefix(), "R$");
    assert!(price.is_dirty());

    price.set_error(FieldError::new("max", "Maximum is 10,00"));
    let view = props.resolve(price.error());
    assert!(view.error);
    assert_eq!(view.helper_text.as_deref(), Some("Maximum is 10,00"));

    price.reset();
    assert_eq!(field.display_for(&price), "0,00");
    assert!(props.resolve(price.error()).helper_text.as_deref() == Some("Gross amount"));
}

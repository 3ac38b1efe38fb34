use serde_json::json;

use super::*;
use crate::options::TextStyleOpts;

#[test]
fn typed_input_renders_builder_mapping() {
    let style = TextStyleOpts::new().color("#333").font_size(14);
    let input: OptsInput<TextStyleOpts> = style.clone().into();
    assert_eq!(input.to_opts(), style.opts());
}

#[test]
fn raw_mapping_passes_through_unchanged() {
    let raw = json!({"color": "#333", "customKey": [1, 2]});
    let input: OptsInput<TextStyleOpts> = raw.clone().into();
    assert_eq!(input.to_opts(), raw);
}

#[test]
fn raw_map_converts_to_object() {
    let mut map = Map::new();
    map.insert("fontSize".to_string(), json!(18));
    let input: OptsInput<TextStyleOpts> = map.into();
    assert_eq!(input.to_opts(), json!({"fontSize": 18}));
}

#[test]
fn default_is_null() {
    let input = OptsInput::<TextStyleOpts>::default();
    assert_eq!(input, OptsInput::none());
    assert_eq!(input.to_opts(), Value::Null);
}

#[test]
fn typed_and_equivalent_raw_yield_same_mapping() {
    let typed: OptsInput<TextStyleOpts> = TextStyleOpts::new().font_weight("bold").into();
    let raw: OptsInput<TextStyleOpts> = typed.to_opts().into();
    assert_eq!(typed.to_opts(), raw.to_opts());
}

mod is_unset_tests {
    use super::*;

    #[test]
    fn null_false_and_empty_are_unset() {
        assert!(is_unset(&Value::Null));
        assert!(is_unset(&json!(false)));
        assert!(is_unset(&json!({})));
        assert!(is_unset(&json!([])));
        assert!(is_unset(&json!("")));
    }

    #[test]
    fn zero_numbers_are_unset() {
        assert!(is_unset(&json!(0)));
        assert!(is_unset(&json!(0.0)));
        assert!(is_unset(&json!(-0.0)));
    }

    #[test]
    fn populated_values_are_set() {
        assert!(!is_unset(&json!({"show": false})));
        assert!(!is_unset(&json!(true)));
        assert!(!is_unset(&json!(1)));
        assert!(!is_unset(&json!(0.001)));
        assert!(!is_unset(&json!(["a"])));
    }
}

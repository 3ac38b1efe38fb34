use serde_json::json;

use super::*;

mod text_style_tests {
    use super::*;

    #[test]
    fn default_has_all_keys_null() {
        let opts = TextStyleOpts::default().opts();
        assert_eq!(
            opts,
            json!({
                "color": null,
                "fontStyle": null,
                "fontWeight": null,
                "fontFamily": null,
                "fontSize": null,
                "align": null,
                "verticalAlign": null,
                "lineHeight": null,
            })
        );
    }

    #[test]
    fn setters_fill_schema_keys() {
        let opts = TextStyleOpts::new()
            .color("#fff")
            .font_size(14)
            .font_weight("bold")
            .vertical_align("middle")
            .line_height(1.5)
            .opts();
        assert_eq!(opts["color"], "#fff");
        assert_eq!(opts["fontSize"], 14);
        assert_eq!(opts["fontWeight"], "bold");
        assert_eq!(opts["verticalAlign"], "middle");
        assert_eq!(opts["lineHeight"], 1.5);
    }

    #[test]
    fn keys_keep_schema_order() {
        let opts = TextStyleOpts::new().opts();
        let keys: Vec<&str> = opts.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "color",
                "fontStyle",
                "fontWeight",
                "fontFamily",
                "fontSize",
                "align",
                "verticalAlign",
                "lineHeight"
            ]
        );
    }
}

mod line_style_tests {
    use super::*;

    #[test]
    fn default_values() {
        assert_eq!(
            LineStyleOpts::default().opts(),
            json!({
                "show": true,
                "width": 1,
                "opacity": 1,
                "curveness": 0,
                "type": "solid",
                "color": null,
            })
        );
    }

    #[test]
    fn curve_maps_to_curveness() {
        let opts = LineStyleOpts::new().curve(0.3).type_("dashed").opts();
        assert_eq!(opts["curveness"], 0.3);
        assert_eq!(opts["type"], "dashed");
    }
}

mod split_line_tests {
    use super::*;

    #[test]
    fn default_is_hidden_with_default_line_style() {
        let opts = SplitLineOpts::default().opts();
        assert_eq!(opts["show"], false);
        assert_eq!(opts["lineStyle"], LineStyleOpts::default().opts());
    }

    #[test]
    fn raw_line_style_passes_through() {
        let opts = SplitLineOpts::new()
            .show(true)
            .linestyle_opts(json!({"color": "#ccc"}))
            .opts();
        assert_eq!(opts, json!({"show": true, "lineStyle": {"color": "#ccc"}}));
    }

    #[test]
    fn typed_and_raw_line_style_match() {
        let style = LineStyleOpts::new().width(2).color("#ccc");
        let typed = SplitLineOpts::new().linestyle_opts(style.clone()).opts();
        let raw = SplitLineOpts::new().linestyle_opts(style.opts()).opts();
        assert_eq!(typed, raw);
    }
}

mod label_tests {
    use super::*;

    #[test]
    fn default_values() {
        let opts = LabelOpts::default().opts();
        assert_eq!(opts["show"], true);
        assert_eq!(opts["position"], "top");
        assert_eq!(opts["fontSize"], 12);
        assert_eq!(opts["margin"], 8);
        assert!(opts["rotate"].is_null());
        assert!(opts["formatter"].is_null());
        assert_eq!(opts.as_object().unwrap().len(), 13);
    }

    #[test]
    fn horizontal_align_maps_to_align() {
        let opts = LabelOpts::new().horizontal_align("left").opts();
        assert_eq!(opts["align"], "left");
    }

    #[test]
    fn interval_accepts_number_or_keyword() {
        assert_eq!(LabelOpts::new().interval(0).opts()["interval"], 0);
        assert_eq!(LabelOpts::new().interval("auto").opts()["interval"], "auto");
    }
}

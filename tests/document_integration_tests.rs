//! End-to-end assembly of an option document from the public builders.

use chart_opts::OptionBuilder;
use chart_opts::options::{
    AxisOpts, ChartOptions, DataZoomOpts, GlobalOpts, InitOpts, LegendOpts, LineStyleOpts,
    SplitLineOpts, TextStyleOpts, ThemeType, TitleOpts, ToolBoxFeatureOpts, ToolboxOpts,
    TooltipOpts, VisualMapOpts,
};
use serde_json::{Value, json};

fn line_chart_globals() -> GlobalOpts {
    GlobalOpts::new()
        .title_opts(
            TitleOpts::new()
                .title("Temperature")
                .subtitle("Weekly")
                .title_textstyle_opts(TextStyleOpts::new().font_size(18)),
        )
        .toolbox_opts(ToolboxOpts::new().feature(ToolBoxFeatureOpts::new()))
        .tooltip_opts(TooltipOpts::new().trigger("axis"))
        .legend_opts(LegendOpts::new().pos_top("5%"))
        .xaxis_opts(AxisOpts::new().type_("category").boundary_gap(false))
        .yaxis_opts(
            AxisOpts::new()
                .type_("value")
                .formatter("{value} °C")
                .splitline_opts(
                    SplitLineOpts::new()
                        .show(true)
                        .linestyle_opts(LineStyleOpts::new().type_("dashed")),
                ),
        )
        .datazoom_opts(DataZoomOpts::new())
}

#[test]
fn line_chart_document_has_renderer_keys() {
    let doc = ChartOptions::new(InitOpts::new().theme(ThemeType::MACARONS))
        .set_global_opts(line_chart_globals())
        .set_option(
            "series",
            json!([{"type": "line", "data": [11, 11, 15, 13, 12, 13, 10]}]),
        );
    let opts = doc.options();

    assert_eq!(doc.init_opts().theme, "macarons");
    assert_eq!(opts["title"][0]["textStyle"]["fontSize"], 18);
    assert_eq!(opts["toolbox"]["feature"]["saveAsImage"]["show"], true);
    assert_eq!(opts["tooltip"]["axisPointer"]["type"], "line");
    assert_eq!(opts["legend"][0]["top"], "5%");
    assert_eq!(opts["xAxis"][0]["boundaryGap"], false);
    assert_eq!(opts["yAxis"][0]["axisLabel"]["formatter"], "{value} °C");
    assert_eq!(opts["yAxis"][0]["splitLine"]["lineStyle"]["type"], "dashed");
    assert_eq!(opts["dataZoom"][0]["start"], 20);
    assert_eq!(opts["series"][0]["type"], "line");
    assert!(opts.get("backgroundColor").is_none());
}

#[test]
fn raw_mappings_produce_identical_document() {
    let typed = ChartOptions::default().set_global_opts(line_chart_globals());

    let raw_split = SplitLineOpts::new()
        .show(true)
        .linestyle_opts(LineStyleOpts::new().type_("dashed"))
        .opts();
    let raw = ChartOptions::default().set_global_opts(
        GlobalOpts::new()
            .title_opts(
                TitleOpts::new()
                    .title("Temperature")
                    .subtitle("Weekly")
                    .title_textstyle_opts(TextStyleOpts::new().font_size(18).opts()),
            )
            .toolbox_opts(ToolboxOpts::new().feature(ToolBoxFeatureOpts::new().opts()))
            .tooltip_opts(TooltipOpts::new().trigger("axis"))
            .legend_opts(LegendOpts::new().pos_top("5%"))
            .xaxis_opts(AxisOpts::new().type_("category").boundary_gap(false))
            .yaxis_opts(
                AxisOpts::new()
                    .type_("value")
                    .formatter("{value} °C")
                    .splitline_opts(raw_split),
            )
            .datazoom_opts(DataZoomOpts::new()),
    );

    assert_eq!(typed.to_json().unwrap(), raw.to_json().unwrap());
}

#[test]
fn piecewise_visual_map_serializes_pieces() {
    let pieces = json!([
        {"min": 1500},
        {"min": 900, "max": 1500},
        {"max": 900, "label": "low"},
    ]);
    let doc = ChartOptions::default().set_global_opts(
        GlobalOpts::new().visualmap_opts(
            VisualMapOpts::new()
                .piecewise(true)
                .pieces(pieces.clone())
                .max(2000),
        ),
    );

    let parsed: Value = serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();
    assert_eq!(parsed["visualMap"]["type"], "piecewise");
    assert_eq!(parsed["visualMap"]["pieces"], pieces);
    assert_eq!(parsed["visualMap"]["max"], 2000);
}

#[test]
fn serialized_json_keeps_null_placeholders() {
    let json = ChartOptions::default()
        .set_global_opts(GlobalOpts::new().title_opts(TitleOpts::new()))
        .to_json()
        .unwrap();
    assert_eq!(
        json,
        r#"{"title":[{"text":null,"subtext":null,"left":null,"right":null,"top":null,"bottom":null,"textStyle":null,"subtextStyle":null}]}"#
    );
}

use serde_json::json;

use super::*;

#[test]
fn default_values() {
    assert_eq!(
        DataZoomOpts::default().opts(),
        json!({
            "show": true,
            "type": "slider",
            "start": 20,
            "end": 80,
            "orient": "horizontal",
            "xAxisIndex": 0,
            "yAxisIndex": 0,
        })
    );
}

#[test]
fn inside_zoom_on_vertical_axis() {
    let opts = DataZoomOpts::new()
        .type_("inside")
        .orient("vertical")
        .range_start(0)
        .range_end(100)
        .yaxis_index(1)
        .opts();
    assert_eq!(opts["type"], "inside");
    assert_eq!(opts["orient"], "vertical");
    assert_eq!(opts["start"], 0);
    assert_eq!(opts["end"], 100);
    assert_eq!(opts["yAxisIndex"], 1);
    assert_eq!(opts["xAxisIndex"], 0);
}

#[test]
fn fractional_range_is_kept() {
    let opts = DataZoomOpts::new().range_start(12.5).opts();
    assert_eq!(opts["start"], 12.5);
}

use serde_json::json;

use super::*;

mod grid_opts_tests {
    use super::*;

    #[test]
    fn default_has_all_keys_null() {
        assert_eq!(
            GridOpts::default().opts(),
            json!({
                "left": null,
                "top": null,
                "right": null,
                "bottom": null,
                "width": null,
                "height": null,
            })
        );
    }

    #[test]
    fn positions_and_size() {
        let opts = GridOpts::new()
            .pos_left("10%")
            .pos_bottom("60%")
            .width(400)
            .height(250.5)
            .opts();
        assert_eq!(opts["left"], "10%");
        assert_eq!(opts["bottom"], "60%");
        assert_eq!(opts["width"], 400);
        assert_eq!(opts["height"], 250.5);
    }
}

mod grid3d_tests {
    use super::*;

    #[test]
    fn default_values() {
        assert_eq!(
            Grid3DOpts::default().opts(),
            json!({
                "boxWidth": 200,
                "boxHeight": 100,
                "boxDepth": 80,
                "viewControl": {
                    "autoRotate": false,
                    "autoRotateSpeed": 10,
                    "rotateSensitivity": 1,
                },
            })
        );
    }

    #[test]
    fn rotation_settings_go_under_view_control() {
        let opts = Grid3DOpts::new().rotate(true).rotate_speed(20).opts();
        assert_eq!(opts["viewControl"]["autoRotate"], true);
        assert_eq!(opts["viewControl"]["autoRotateSpeed"], 20);
    }
}

mod axis3d_tests {
    use super::*;

    #[test]
    fn default_values() {
        assert_eq!(
            Axis3DOpts::default().opts(),
            json!({
                "data": null,
                "name": null,
                "nameGap": 20,
                "nameTextStyle": {"fontSize": 16},
                "type": null,
                "min": null,
                "max": null,
                "axisLabel": {"margin": 8, "interval": null},
            })
        );
    }

    #[test]
    fn category_data_and_labels() {
        let opts = Axis3DOpts::new()
            .type_("category")
            .data(["12a", "1a", "2a"])
            .name_size(12)
            .interval(0)
            .margin(4)
            .opts();
        assert_eq!(opts["type"], "category");
        assert_eq!(opts["data"], json!(["12a", "1a", "2a"]));
        assert_eq!(opts["nameTextStyle"]["fontSize"], 12);
        assert_eq!(opts["axisLabel"], json!({"margin": 4, "interval": 0}));
    }
}

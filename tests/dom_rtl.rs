const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>محلل العناوين</title></head>
<body class="bg-light">
  <div class="dropdown"><ul class="dropdown-menu"><li>خيار</li></ul></div>
  <button data-bs-toggle="tooltip" title="مساعدة">؟</button>
  <button data-bs-toggle="tooltip" data-bs-placement="top" title="أعلى">!</button>
  <div class="carousel">
    <button class="carousel-control-prev"></button>
    <button class="carousel-control-next"></button>
  </div>
  <div class="modal"><div class="modal-header"><h5>عنوان</h5><button class="btn-close"></button></div></div>
  <div class="input-group">
    <span class="input-group-text">@</span>
    <input type="text" class="form-control" value="قناتي">
  </div>
  <div class="form-check"><input class="form-check-input" type="checkbox"></div>
  <input type="text" id="english" value="my channel">
  <input type="text" id="digits" value="2024">
  <canvas id="performanceChart" data-channel-art="8" data-thumbnails="6" data-titles="7"></canvas>
  <canvas id="scoreDistributionChart"></canvas>
</body>
</html>"#;

#[cfg(test)]
mod passing {
    use super::PAGE;
    use arabic_core::charts::{attach_chart_configs, CHART_CONFIG_ATTR};
    use arabic_core::dom::{apply_rtl_layout, DomAdapter, HtmlDocument, RtlReport, Selector};

    #[test]
    fn report_counts() {
        let doc = HtmlDocument::parse(PAGE).unwrap();
        let report = apply_rtl_layout(&doc);

        assert_eq!(
            report,
            RtlReport {
                dropdowns: 1,
                tooltips: 1,
                carousel_controls: 2,
                modals: 1,
                input_groups: 1,
                form_checks: 1,
                aligned_inputs: 2,
            }
        );
    }

    #[test]
    fn document_direction() {
        let doc = HtmlDocument::parse(PAGE).unwrap();
        apply_rtl_layout(&doc);

        let root = doc.root().unwrap();
        assert_eq!(doc.attribute(&root, "dir").as_deref(), Some("rtl"));
        assert_eq!(doc.attribute(&root, "lang").as_deref(), Some("ar"));

        let body = doc.body().unwrap();
        assert!(doc.has_class(&body, "bg-light"));
        assert!(doc.has_class(&body, "arabic-text"));
    }

    #[test]
    fn tooltip_placement_kept_when_explicit() {
        let doc = HtmlDocument::parse(PAGE).unwrap();
        apply_rtl_layout(&doc);

        let placements: Vec<Option<String>> = doc
            .select_all(&Selector::Attr("data-bs-toggle", "tooltip"))
            .iter()
            .map(|t| doc.attribute(t, "data-bs-placement"))
            .collect();
        assert_eq!(placements, vec![Some("right".to_string()), Some("top".to_string())]);
    }

    #[test]
    fn inputs_follow_their_script() {
        let doc = HtmlDocument::parse(PAGE).unwrap();
        apply_rtl_layout(&doc);

        let group_input = doc
            .select_within(
                &doc.select_all(&Selector::Class("input-group")).remove(0),
                &Selector::Class("form-control"),
            )
            .unwrap();
        assert_eq!(doc.style_property(&group_input, "direction").as_deref(), Some("rtl"));
        assert_eq!(
            doc.style_property(&group_input, "border-radius").as_deref(),
            Some("0 0.375rem 0.375rem 0")
        );

        let english = doc.element_by_id("english").unwrap();
        assert_eq!(doc.style_property(&english, "text-align").as_deref(), Some("left"));

        let digits = doc.element_by_id("digits").unwrap();
        assert_eq!(doc.attribute(&digits, "style"), None);
    }

    #[test]
    fn modal_close_button_moves() {
        let doc = HtmlDocument::parse(PAGE).unwrap();
        apply_rtl_layout(&doc);

        let close = doc.select_all(&Selector::Class("btn-close")).remove(0);
        assert_eq!(doc.style_property(&close, "margin-right").as_deref(), Some("auto"));
        let header = doc.select_all(&Selector::Class("modal-header")).remove(0);
        assert_eq!(doc.style_property(&header, "text-align").as_deref(), Some("right"));
    }

    #[test]
    fn serialized_output() {
        let doc = HtmlDocument::parse(PAGE).unwrap();
        apply_rtl_layout(&doc);
        assert_eq!(attach_chart_configs(&doc), 2);

        let html = doc.to_html().unwrap();
        assert!(html.contains(r#"<html dir="rtl" lang="ar">"#));
        assert!(html.contains(CHART_CONFIG_ATTR));
        assert!(html.contains("محلل العناوين"));
    }
}

#[cfg(test)]
mod failing {
    use arabic_core::dom::{apply_rtl_layout, DomAdapter, HtmlDocument, RtlReport};

    #[test]
    fn fragment_without_components() {
        let doc = HtmlDocument::parse("<p>نص فقط</p>").unwrap();
        let report = apply_rtl_layout(&doc);

        assert_eq!(report, RtlReport::default());
        // html5ever still builds <html> and <body> around a fragment
        assert!(doc.root().is_some());
    }

    #[test]
    fn empty_document() {
        let doc = HtmlDocument::parse("").unwrap();
        assert_eq!(apply_rtl_layout(&doc), RtlReport::default());
    }
}

// File: src/dom/rtl.rs
use crate::core::script::{input_direction, is_arabic};
use crate::core::types::TextDirection;
use crate::dom::{DomAdapter, Selector};
use crate::keyboard::KeyboardLayout;
use serde::Serialize;

const KEYBOARD_INDICATOR_ID: &str = "keyboard-indicator";
const INPUT_GROUP_RADIUS: &str = "0.375rem 0 0 0.375rem";
const INPUT_CONTROL_RADIUS: &str = "0 0.375rem 0.375rem 0";
const FORM_CHECK_INDENT: &str = "1.25em";

/// How many elements each pass of [`apply_rtl_layout`] touched.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RtlReport {
    pub dropdowns: usize,
    pub tooltips: usize,
    pub carousel_controls: usize,
    pub modals: usize,
    pub input_groups: usize,
    pub form_checks: usize,
    pub aligned_inputs: usize,
}

/// Rewrites a loaded page for right-to-left reading.
///
/// Every pass looks its elements up itself and skips what is missing, so a
/// page without modals or carousels is left alone in those places.
pub fn apply_rtl_layout<D: DomAdapter>(dom: &D) -> RtlReport {
    set_document_direction(dom);

    let report = RtlReport {
        dropdowns: fix_dropdowns(dom),
        tooltips: fix_tooltip_placement(dom),
        carousel_controls: fix_carousel_controls(dom),
        modals: fix_modals(dom),
        input_groups: fix_input_groups(dom),
        form_checks: fix_form_checks(dom),
        aligned_inputs: align_text_inputs(dom),
    };
    tracing::debug!(?report, "applied RTL layout");
    report
}

fn set_document_direction<D: DomAdapter>(dom: &D) {
    if let Some(root) = dom.root() {
        dom.set_attribute(&root, "dir", "rtl");
        dom.set_attribute(&root, "lang", "ar");
    }
    if let Some(body) = dom.body() {
        dom.add_class(&body, "arabic-text");
    }
}

fn fix_dropdowns<D: DomAdapter>(dom: &D) -> usize {
    let menus = dom.select_all(&Selector::Class("dropdown-menu"));
    for menu in &menus {
        dom.set_style(menu, "right", "0");
        dom.set_style(menu, "left", "auto");
    }
    menus.len()
}

/// Tooltip triggers without an explicit placement open to the right.
fn fix_tooltip_placement<D: DomAdapter>(dom: &D) -> usize {
    let mut placed = 0;
    for trigger in dom.select_all(&Selector::Attr("data-bs-toggle", "tooltip")) {
        let has_placement = dom
            .attribute(&trigger, "data-bs-placement")
            .map(|p| !p.is_empty())
            .unwrap_or(false);
        if !has_placement {
            dom.set_attribute(&trigger, "data-bs-placement", "right");
            placed += 1;
        }
    }
    placed
}

fn fix_carousel_controls<D: DomAdapter>(dom: &D) -> usize {
    let prevs = dom.select_all(&Selector::Class("carousel-control-prev"));
    for prev in &prevs {
        dom.set_style(prev, "right", "0");
        dom.set_style(prev, "left", "auto");
    }

    let nexts = dom.select_all(&Selector::Class("carousel-control-next"));
    for next in &nexts {
        dom.set_style(next, "left", "0");
        dom.set_style(next, "right", "auto");
    }
    prevs.len() + nexts.len()
}

fn fix_modals<D: DomAdapter>(dom: &D) -> usize {
    let modals = dom.select_all(&Selector::Class("modal"));
    for modal in &modals {
        if let Some(close) = dom.select_within(modal, &Selector::Class("btn-close")) {
            dom.set_style(&close, "margin-left", "0");
            dom.set_style(&close, "margin-right", "auto");
        }
        if let Some(header) = dom.select_within(modal, &Selector::Class("modal-header")) {
            dom.set_style(&header, "text-align", "right");
        }
    }
    modals.len()
}

fn fix_input_groups<D: DomAdapter>(dom: &D) -> usize {
    let groups = dom.select_all(&Selector::Class("input-group"));
    for group in &groups {
        if let Some(addon) = dom.select_within(group, &Selector::Class("input-group-text")) {
            dom.set_style(&addon, "border-radius", INPUT_GROUP_RADIUS);
        }
        if let Some(input) = dom.select_within(group, &Selector::Class("form-control")) {
            dom.set_style(&input, "border-radius", INPUT_CONTROL_RADIUS);
        }
    }
    groups.len()
}

fn fix_form_checks<D: DomAdapter>(dom: &D) -> usize {
    let checks = dom.select_all(&Selector::Class("form-check"));
    for check in &checks {
        dom.set_style(check, "padding-right", FORM_CHECK_INDENT);
        dom.set_style(check, "padding-left", "0");
        if let Some(input) = dom.select_within(check, &Selector::Class("form-check-input")) {
            dom.set_style(&input, "margin-right", &format!("-{FORM_CHECK_INDENT}"));
            dom.set_style(&input, "margin-left", "0");
        }
    }
    checks.len()
}

fn align_text_inputs<D: DomAdapter>(dom: &D) -> usize {
    dom.select_all(&Selector::TextInput)
        .iter()
        .filter(|input| {
            let value = dom.input_value(input);
            align_input(dom, input, &value).is_some()
        })
        .count()
}

fn set_direction<D: DomAdapter>(dom: &D, node: &D::Node, direction: TextDirection) {
    dom.set_style(node, "text-align", direction.text_align());
    dom.set_style(node, "direction", direction.as_str());
}

/// Input handler: follow the script of what the user has typed so far.
/// Text with neither Arabic nor Latin letters leaves the field unchanged.
pub fn align_input<D: DomAdapter>(dom: &D, node: &D::Node, text: &str) -> Option<TextDirection> {
    let direction = input_direction(text)?;
    set_direction(dom, node, direction);
    Some(direction)
}

/// Paste handler: pasted Arabic switches the field to RTL, nothing else
/// switches it back.
pub fn align_after_paste<D: DomAdapter>(dom: &D, node: &D::Node, text: &str) -> bool {
    if is_arabic(text) {
        set_direction(dom, node, TextDirection::Rtl);
        true
    } else {
        false
    }
}

/// Applies a keyboard mode to the focused field (if it is an input or
/// textarea) and to the mode indicator.
pub fn apply_keyboard_layout<D: DomAdapter>(dom: &D, active: Option<&D::Node>, layout: &KeyboardLayout) {
    if let Some(node) = active {
        let is_field = dom
            .tag_name(node)
            .map(|tag| tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea"))
            .unwrap_or(false);
        if is_field {
            set_direction(dom, node, layout.direction);
            dom.set_attribute(node, "lang", layout.lang);
        }
    }

    if let Some(indicator) = dom.element_by_id(KEYBOARD_INDICATOR_ID) {
        dom.set_text_content(&indicator, layout.indicator_text);
        dom.set_attribute(&indicator, "title", layout.indicator_title);
    }
}

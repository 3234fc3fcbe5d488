use pagedom::Element;

const TOPICS: &[(&str, &[&str])] = &[
    (
        "What is this?",
        &[
            "A page of collapsible panels.",
            "Each panel keeps its state in an `open` marker.",
        ],
    ),
    (
        "Keyboard",
        &[
            "Tab and Shift+Tab move between panels.",
            "Enter or Space toggles the focused panel.",
        ],
    ),
    (
        "Mouse",
        &["Click a panel title to toggle it."],
    ),
    (
        "Focus order",
        &[
            "This panel ships with tabindex=\"1\" in its markup,",
            "so it comes first and keeps its value.",
        ],
    ),
];

/// Build the page markup with `count` panels.
///
/// The first panel starts open and the fourth carries its own `tabindex`.
pub fn build(count: usize) -> Element {
    let panels = (0..count).map(|i| {
        let (title, body) = TOPICS[i % TOPICS.len()];
        let mut panel = Element::new("details")
            .id(format!("panel-{i}"))
            .class("collapse")
            .child(Element::new("summary").class("collapse-title").content(title))
            .child(
                Element::div()
                    .class("collapse-content")
                    .children(body.iter().map(|line| Element::text(*line))),
            );
        if i == 0 {
            panel = panel.flag("open");
        }
        if i % TOPICS.len() == 3 {
            panel = panel.attr("tabindex", "1");
        }
        panel
    });

    Element::new("body")
        .child(Element::new("h1").content("collapse demo"))
        .children(panels)
}

use collapse::{PanelState, ToggleBinder};
use pagedom::{Document, DomError, NodeId, Tree};
use unicode_width::UnicodeWidthChar;

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    /// Node a click on this row is delivered to.
    pub target: Option<NodeId>,
    pub focused: bool,
}

impl Line {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: None,
            focused: false,
        }
    }
}

/// Flatten the page into rows. Panels show a title row and, when open,
/// their remaining text indented below it.
pub fn lines(
    doc: &Document,
    binder: &ToggleBinder,
    focused: Option<NodeId>,
) -> Result<Vec<Line>, DomError> {
    let tree = doc.tree();
    let mut out = Vec::new();

    for &child in tree.children(tree.root())? {
        if binder.container_selector().matches(tree.node(child)?) {
            panel_lines(tree, binder, child, focused == Some(child), &mut out)?;
        } else {
            let mut texts = Vec::new();
            collect_text(tree, child, None, &mut texts)?;
            out.extend(texts.into_iter().map(Line::plain));
        }
        out.push(Line::plain(""));
    }

    Ok(out)
}

fn panel_lines(
    tree: &Tree,
    binder: &ToggleBinder,
    panel: NodeId,
    focused: bool,
    out: &mut Vec<Line>,
) -> Result<(), DomError> {
    let state = PanelState::read(tree, panel)?;
    let title = tree.query_selector(panel, binder.title_selector())?;

    let marker = if state.is_open() { '▾' } else { '▸' };
    let label = match title {
        Some(title) => {
            let mut texts = Vec::new();
            collect_text(tree, title, None, &mut texts)?;
            texts.join(" ")
        }
        None => String::new(),
    };
    out.push(Line {
        text: format!("{marker} {label}"),
        target: title,
        focused,
    });

    if state.is_open() {
        let mut texts = Vec::new();
        collect_text(tree, panel, title, &mut texts)?;
        out.extend(texts.into_iter().map(|t| Line {
            text: format!("    {t}"),
            target: None,
            focused,
        }));
    }
    Ok(())
}

/// Pre-order text of `node`'s subtree, skipping the subtree rooted at `skip`.
fn collect_text(
    tree: &Tree,
    node: NodeId,
    skip: Option<NodeId>,
    out: &mut Vec<String>,
) -> Result<(), DomError> {
    if skip == Some(node) {
        return Ok(());
    }
    if let Some(text) = &tree.node(node)?.text {
        out.push(text.clone());
    }
    for &child in tree.children(node)? {
        collect_text(tree, child, skip, out)?;
    }
    Ok(())
}

/// Cut `text` to at most `width` terminal columns.
pub fn truncate(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedom::Element;

    fn page() -> Element {
        Element::new("body")
            .child(
                Element::div()
                    .class("collapse")
                    .child(Element::div().class("collapse-title").content("Title"))
                    .child(Element::text("Body")),
            )
            .child(Element::text("Footer"))
    }

    #[test]
    fn test_closed_panel_hides_body() {
        let doc = Document::new(page());
        let rows = lines(&doc, &ToggleBinder::default(), None).unwrap();
        let texts: Vec<&str> = rows.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["▸ Title", "", "Footer", ""]);
        assert!(rows[0].target.is_some());
    }

    #[test]
    fn test_open_panel_shows_body_indented() {
        let mut doc = Document::new(page());
        let panel = doc.query_selector_all(ToggleBinder::default().container_selector())[0];
        doc.set_attribute(panel, "open", "").unwrap();

        let rows = lines(&doc, &ToggleBinder::default(), Some(panel)).unwrap();
        assert_eq!(rows[0].text, "▾ Title");
        assert_eq!(rows[1].text, "    Body");
        assert!(rows[0].focused && rows[1].focused);
    }

    #[test]
    fn test_truncate_counts_columns() {
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("日本語", 5), "日本");
        assert_eq!(truncate("ab", 10), "ab");
    }
}

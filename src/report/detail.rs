//! Full report for a single build.

use super::document::ReportDocument;
use super::layout::{Layout, TEXT_MARGIN};

/// Render the detail view of one build.
pub fn render_detail(doc: &ReportDocument, layout: &Layout) -> String {
    let border = layout.border();
    let wrapper = layout.preserving_wrapper();
    let description = layout.text_wrapper().fill(&doc.description);

    let comments = match doc.comments() {
        Some(comments) => format!("\n    Build comments:\n{}\n", wrapper.fill(comments)),
        None => String::new(),
    };

    let dependencies = if doc.run_dependencies.is_empty() {
        String::new()
    } else {
        format!(
            "\n    This module also loads:\n{}\n",
            wrapper.fill(&doc.run_dependencies.join(" "))
        )
    };

    let stack_activation = match doc.build_stack_activation() {
        Some(activation) => format!(
            "\n    {} activation:\n{}\n",
            doc.build_stack,
            wrapper.fill(activation)
        ),
        None => String::new(),
    };

    let load_lines = doc
        .activation
        .replace('\n', &format!("\n{}", " ".repeat(TEXT_MARGIN)));

    format!(
        "\n{border}\n  {title} : {name}\n{border}\n    Build flavor: {stack}\n    Description:\n{description}\n{comments}\n    This module can be loaded as follows:\n      {load_lines}\n{dependencies}\n{stack_activation}\n\n",
        border = border,
        title = doc.title,
        name = doc.name,
        stack = doc.build_stack,
        description = description,
        comments = comments,
        load_lines = load_lines,
        dependencies = dependencies,
        stack_activation = stack_activation,
    )
}

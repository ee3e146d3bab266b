//! Summary report for searches matching several builds.
//!
//! Builds are grouped by application title, then by build flavor, keeping
//! the order in which each group was first seen.

use super::document::ReportDocument;
use super::layout::{Layout, TEXT_MARGIN};

/// Marker placed before preferred builds.
pub const PREFERRED_MARKER: &str = "* ";

/// Legend printed under applications with a preferred build.
pub const PREFERRED_LEGEND: &str = "* denotes preferred build.";

/// Width the build name is dot-padded to in version lines.
const NAME_COLUMN: usize = 40;

/// Builds of one application, grouped by flavor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationGroup {
    pub title: String,
    /// Description of the last build seen for this application.
    pub description: String,
    /// `(flavor, wrapped version lines)` in first-seen order.
    pub flavors: Vec<(String, Vec<String>)>,
    pub has_preferred: bool,
}

impl ApplicationGroup {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            flavors: Vec::new(),
            has_preferred: false,
        }
    }

    fn add(&mut self, doc: &ReportDocument, version_line: String) {
        self.description = doc.description.clone();
        self.has_preferred |= doc.preferred_build;

        match self.flavors.iter_mut().find(|(f, _)| *f == doc.build_stack) {
            Some((_, lines)) => lines.push(version_line),
            None => self
                .flavors
                .push((doc.build_stack.clone(), vec![version_line])),
        }
    }
}

/// Group documents by application and flavor.
pub fn group_applications(docs: &[ReportDocument], layout: &Layout) -> Vec<ApplicationGroup> {
    let version_wrapper = layout.version_wrapper();
    let mut apps: Vec<ApplicationGroup> = Vec::new();

    for doc in docs {
        let line = version_wrapper.fill(&version_line(doc));
        let index = match apps.iter().position(|a| a.title == doc.title) {
            Some(index) => index,
            None => {
                apps.push(ApplicationGroup::new(&doc.title));
                apps.len() - 1
            }
        };
        apps[index].add(doc, line);
    }

    apps
}

/// Unwrapped version line for one build.
fn version_line(doc: &ReportDocument) -> String {
    let marker = if doc.preferred_build {
        PREFERRED_MARKER
    } else {
        ""
    };
    format!(
        "{margin}{marker}{name:.<width$} {comments}",
        margin = " ".repeat(TEXT_MARGIN),
        marker = marker,
        name = doc.name,
        width = NAME_COLUMN,
        comments = doc.comments().unwrap_or(""),
    )
}

/// Render one block per application.
///
/// Every block's usage example names the last build in `docs`, whichever
/// application it belongs to.
pub fn render_consolidated(docs: &[ReportDocument], layout: &Layout) -> Vec<String> {
    let Some(example) = docs.last() else {
        return Vec::new();
    };

    group_applications(docs, layout)
        .iter()
        .map(|app| render_application(app, example, layout))
        .collect()
}

fn render_application(
    app: &ApplicationGroup,
    example: &ReportDocument,
    layout: &Layout,
) -> String {
    let border = layout.border();
    let flavor_wrapper = layout.flavor_wrapper();

    let versions = app
        .flavors
        .iter()
        .map(|(flavor, lines)| {
            let mut block = vec![flavor_wrapper.fill(flavor)];
            block.extend(lines.iter().cloned());
            block.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n");

    let legend = if app.has_preferred {
        PREFERRED_LEGEND
    } else {
        ""
    };

    format!(
        "\n{border}\n  {title}\n{border}\n    Description:\n{description}\n\n    Versions:\n{versions}\n\n\n    To find detailed information about a module, search the full name.\n\n      module-query {example}\n\n    You may need to specify the build \"flavor\" to get a single record\n\n      module-query {example} --flavor '{example_flavor}'\n\n    {legend}\n\n\n    ",
        border = border,
        title = app.title,
        description = layout.text_wrapper().fill(&app.description),
        versions = versions,
        example = example.name,
        example_flavor = example.build_stack,
        legend = legend,
    )
}

use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;
use std::path::{Component, Path};

use super::ScanReport;
use super::html_template::{FILE_ICON, FOLDER_ICON, HTML_FOOTER, HTML_HEADER};

/// File name of the page for the scan root.
pub const ROOT_PAGE: &str = "index.html";

/// A directory or file of the scanned tree with the code lines under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub code: usize,
    /// Code lines per language under this node.
    pub languages: BTreeMap<String, usize>,
    pub children: Vec<TreeNode>,
    is_dir: bool,
}

impl TreeNode {
    fn new(name: &str, is_dir: bool) -> Self {
        Self {
            name: name.to_string(),
            code: 0,
            languages: BTreeMap::new(),
            children: Vec::new(),
            is_dir,
        }
    }

    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Builds the tree of every reported file. Directory totals are summed
    /// from their children, and children are ordered by code lines
    /// descending, then name.
    #[must_use]
    pub fn from_report(report: &ScanReport) -> Self {
        let mut root = Self::new(".", true);

        for file in &report.files {
            let parts = path_parts(&file.path);
            let Some((leaf, dirs)) = parts.split_last() else {
                continue;
            };
            let mut node = &mut root;
            for dir in dirs {
                node = node.child_dir(dir);
            }
            let mut leaf_node = Self::new(leaf, false);
            leaf_node.code = file.stats.code;
            leaf_node
                .languages
                .insert(file.language.clone(), file.stats.code);
            node.children.push(leaf_node);
        }

        root.sum_up();
        root.sort_children();
        root
    }

    fn child_dir(&mut self, name: &str) -> &mut Self {
        let idx = if let Some(idx) = self
            .children
            .iter()
            .position(|c| c.is_dir && c.name == name)
        {
            idx
        } else {
            self.children.push(Self::new(name, true));
            self.children.len() - 1
        };
        &mut self.children[idx]
    }

    fn sum_up(&mut self) {
        if !self.is_dir {
            return;
        }
        let mut code = 0;
        let mut languages = BTreeMap::new();
        for child in &mut self.children {
            child.sum_up();
            code += child.code;
            for (language, lines) in &child.languages {
                *languages.entry(language.clone()).or_insert(0) += lines;
            }
        }
        self.code = code;
        self.languages = languages;
    }

    fn sort_children(&mut self) {
        self.children
            .sort_by(|a, b| b.code.cmp(&a.code).then_with(|| a.name.cmp(&b.name)));
        for child in &mut self.children {
            child.sort_children();
        }
    }

    /// Languages under this node, most code lines first.
    #[must_use]
    pub fn language_breakdown(&self) -> Vec<(&str, usize)> {
        let mut pairs: Vec<(&str, usize)> = self
            .languages
            .iter()
            .map(|(language, &lines)| (language.as_str(), lines))
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        pairs
    }
}

fn path_parts(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect()
}

/// One generated HTML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPage {
    pub file_name: String,
    pub content: String,
}

/// Renders one page per directory, starting with [`ROOT_PAGE`]. Each page
/// lists the directory's children with their code lines, links into
/// subdirectory pages and back to the parent, and breaks the total down by
/// language.
#[must_use]
pub fn render_pages(report: &ScanReport) -> Vec<HtmlPage> {
    let root = TreeNode::from_report(report);
    let mut used = HashSet::from([ROOT_PAGE.to_string()]);
    let mut pages = Vec::new();
    render_dir(&root, &[], ROOT_PAGE, None, &mut used, &mut pages);
    pages
}

fn render_dir<'a>(
    node: &'a TreeNode,
    trail: &[&'a str],
    page: &str,
    parent_page: Option<&str>,
    used: &mut HashSet<String>,
    pages: &mut Vec<HtmlPage>,
) {
    let child_pages: Vec<Option<String>> = node
        .children
        .iter()
        .map(|child| {
            child
                .is_dir
                .then(|| unique_page_name(trail, &child.name, used))
        })
        .collect();

    pages.push(HtmlPage {
        file_name: page.to_string(),
        content: render_page(node, trail, parent_page, &child_pages),
    });

    for (child, child_page) in node.children.iter().zip(&child_pages) {
        if let Some(child_page) = child_page {
            let mut child_trail = trail.to_vec();
            child_trail.push(child.name.as_str());
            render_dir(child, &child_trail, child_page, Some(page), used, pages);
        }
    }
}

/// `index-<dir>-<dir>.html`, with a numeric suffix if two paths flatten to
/// the same name.
fn unique_page_name(trail: &[&str], name: &str, used: &mut HashSet<String>) -> String {
    let stem = std::iter::once("index")
        .chain(trail.iter().copied())
        .chain(std::iter::once(name))
        .map(file_name_safe)
        .collect::<Vec<_>>()
        .join("-");

    let mut candidate = format!("{stem}.html");
    let mut suffix = 2;
    while !used.insert(candidate.clone()) {
        candidate = format!("{stem}-{suffix}.html");
        suffix += 1;
    }
    candidate
}

fn file_name_safe(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn display_path(trail: &[&str]) -> String {
    if trail.is_empty() {
        ".".to_string()
    } else {
        trail.join("/")
    }
}

fn render_page(
    node: &TreeNode,
    trail: &[&str],
    parent_page: Option<&str>,
    child_pages: &[Option<String>],
) -> String {
    let path = html_escape(&display_path(trail));
    let mut output = HTML_HEADER.replace("{title}", &format!("File Tree Report: {path}"));
    output.push_str("        <h1>File Tree Report</h1>\n");

    let up_link = parent_page
        .map(|parent| format!(r#" <a href="{}">&larr; up</a>"#, html_escape(parent)))
        .unwrap_or_default();
    writeln!(
        output,
        r#"        <p class="current-path">Current path: <span class="path">{path}</span>{up_link}</p>"#
    )
    .ok();

    write_children_table(&mut output, node, child_pages);
    write_language_table(&mut output, node);
    output.push_str(HTML_FOOTER);
    output
}

fn write_children_table(output: &mut String, node: &TreeNode, child_pages: &[Option<String>]) {
    output.push_str("        <table>\n");
    output.push_str(
        "            <thead><tr><th>Name</th><th class=\"number\">Code Lines</th></tr></thead>\n",
    );
    output.push_str("            <tbody>\n");
    for (child, child_page) in node.children.iter().zip(child_pages) {
        let name = html_escape(&child.name);
        let cell = match child_page {
            Some(page) => format!(
                r#"<span class="icon">{FOLDER_ICON}</span><a href="{}">{name}</a>"#,
                html_escape(page)
            ),
            None => format!(r#"<span class="icon">{FILE_ICON}</span>{name}"#),
        };
        writeln!(
            output,
            r#"                <tr><td>{cell}</td><td class="number">{}</td></tr>"#,
            child.code
        )
        .ok();
    }
    output.push_str("            </tbody>\n");
    writeln!(
        output,
        r#"            <tfoot><tr><th>Total</th><th class="number">{}</th></tr></tfoot>"#,
        node.code
    )
    .ok();
    output.push_str("        </table>\n");
}

fn write_language_table(output: &mut String, node: &TreeNode) {
    output.push_str("        <h2>Languages</h2>\n");
    output.push_str("        <table>\n");
    output.push_str(
        "            <thead><tr><th>Language</th><th class=\"number\">Code Lines</th></tr></thead>\n",
    );
    output.push_str("            <tbody>\n");
    for (language, lines) in node.language_breakdown() {
        writeln!(
            output,
            r#"                <tr><td>{}</td><td class="number">{lines}</td></tr>"#,
            html_escape(language)
        )
        .ok();
    }
    output.push_str("            </tbody>\n");
    output.push_str("        </table>\n");
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;

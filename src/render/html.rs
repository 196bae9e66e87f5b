use folio_idf::{Content, Node, NodeKind, StyleDescriptor};
use folio_render_core::glue::{glue_row_style, row_style_for};
use folio_render_core::{Backend, HookTable, RenderContext, RenderError, Resolver};
use folio_style::{
    BorderWeight, FillPattern, HorizontalAlign, StyleAttrs, StyleError, StyleExtension,
    VerticalAlign,
};
use folio_types::Color;
use itertools::Itertools;
use std::any::Any;
use std::fmt::Write;

/// HTML class names carried by a style, written to the `class` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CssClasses(pub Vec<String>);

impl CssClasses {
    /// Parses `.a .b` or `a b`.
    pub fn parse(s: &str) -> Self {
        CssClasses(
            s.split_whitespace()
                .map(|class| class.trim_start_matches('.').to_string())
                .filter(|class| !class.is_empty())
                .collect(),
        )
    }

    pub fn into_attrs(self) -> StyleAttrs {
        StyleAttrs::Extension(Box::new(self))
    }
}

impl StyleExtension for CssClasses {
    fn name(&self) -> &'static str {
        "css-classes"
    }

    fn try_clone(&self) -> Result<Box<dyn StyleExtension>, StyleError> {
        Ok(Box::new(self.clone()))
    }

    fn eq_extension(&self, other: &dyn StyleExtension) -> bool {
        other.as_any().downcast_ref::<CssClasses>() == Some(self)
    }

    /// The class list is a single slot: an empty list takes the donor's.
    fn join_from(&mut self, donor: &dyn StyleExtension) -> bool {
        match donor.as_any().downcast_ref::<CssClasses>() {
            Some(donor) => {
                if self.0.is_empty() {
                    self.0 = donor.0.clone();
                }
                true
            }
            None => false,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Renders a document as an HTML fragment with inline CSS.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    out: String,
    indent: usize,
    depth: usize,
    glue_rows: bool,
    row_style: Option<StyleDescriptor>,
}

impl HtmlRenderer {
    pub fn new(indent: usize, glue_rows: bool) -> Self {
        Self {
            indent,
            glue_rows,
            ..Self::default()
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn pad(&mut self) {
        let width = self.depth * self.indent;
        self.out.extend(std::iter::repeat_n(' ', width));
    }

    fn element(
        &mut self,
        tag: &str,
        attrs: &str,
        text: &str,
    ) -> Result<(), RenderError> {
        self.pad();
        writeln!(self.out, "<{tag}{attrs}>{}</{tag}>", escape_html(text))?;
        Ok(())
    }

    fn title(
        &mut self,
        node: &Node,
        style: Option<&StyleDescriptor>,
        resolver: &Resolver<'_>,
    ) -> Result<(), RenderError> {
        let attrs = attributes(style, resolver.context(), Some("title"));
        self.element("h1", &attrs, node.text().unwrap_or_default())
    }

    fn heading(
        &mut self,
        node: &Node,
        style: Option<&StyleDescriptor>,
        resolver: &Resolver<'_>,
    ) -> Result<(), RenderError> {
        let level = node.heading_level().unwrap_or(1).clamp(1, 6);
        let attrs = attributes(style, resolver.context(), None);
        self.element(&format!("h{}", level), &attrs, node.text().unwrap_or_default())
    }

    fn paragraph(
        &mut self,
        node: &Node,
        style: Option<&StyleDescriptor>,
        resolver: &Resolver<'_>,
    ) -> Result<(), RenderError> {
        let attrs = attributes(style, resolver.context(), None);
        self.element("p", &attrs, node.text().unwrap_or_default())
    }

    fn footer(
        &mut self,
        node: &Node,
        style: Option<&StyleDescriptor>,
        resolver: &Resolver<'_>,
    ) -> Result<(), RenderError> {
        let attrs = attributes(style, resolver.context(), None);
        self.element("footer", &attrs, node.text().unwrap_or_default())
    }

    fn cell(
        &mut self,
        node: &Node,
        style: Option<&StyleDescriptor>,
        resolver: &Resolver<'_>,
    ) -> Result<(), RenderError> {
        let tag = match node.kind() {
            NodeKind::HeaderCell => "th",
            _ => "td",
        };
        let attrs = if self.glue_rows {
            let glued = glue_row_style(resolver, self.row_style.as_ref(), node)?;
            attributes(glued.as_ref(), resolver.context(), None)
        } else {
            attributes(style, resolver.context(), None)
        };
        self.element(tag, &attrs, node.text().unwrap_or_default())
    }

    fn separator(
        &mut self,
        _node: &Node,
        style: Option<&StyleDescriptor>,
        resolver: &Resolver<'_>,
    ) -> Result<(), RenderError> {
        let attrs = attributes(style, resolver.context(), None);
        self.pad();
        writeln!(self.out, "<hr{}>", attrs)?;
        Ok(())
    }

    fn picture(
        &mut self,
        node: &Node,
        style: Option<&StyleDescriptor>,
        resolver: &Resolver<'_>,
    ) -> Result<(), RenderError> {
        let Some(Content::Picture { source, caption }) = node.content() else {
            return Err(RenderError::Backend(format!(
                "{} node carries no picture",
                node.kind()
            )));
        };
        let attrs = attributes(style, resolver.context(), None);
        let alt = caption.as_deref().unwrap_or_default();
        self.pad();
        write!(
            self.out,
            "<figure{}><img src=\"{}\" alt=\"{}\">",
            attrs,
            escape_attr(source.as_str()),
            escape_attr(alt)
        )?;
        if let Some(caption) = caption {
            write!(self.out, "<figcaption>{}</figcaption>", escape_html(caption))?;
        }
        self.out.push_str("</figure>\n");
        Ok(())
    }
}

fn composite_tag(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Document => "article",
        NodeKind::Table => "table",
        NodeKind::TableRow | NodeKind::HeaderRow => "tr",
        _ => "div",
    }
}

impl Backend for HtmlRenderer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn hooks() -> HookTable<Self> {
        HookTable::new()
            .on(NodeKind::Title, HtmlRenderer::title)
            .on(NodeKind::Heading, HtmlRenderer::heading)
            .on(NodeKind::Paragraph, HtmlRenderer::paragraph)
            .on(NodeKind::Footer, HtmlRenderer::footer)
            .on_each(&[NodeKind::TableCell, NodeKind::HeaderCell], HtmlRenderer::cell)
            .on(NodeKind::Separator, HtmlRenderer::separator)
            .on(NodeKind::Picture, HtmlRenderer::picture)
    }

    fn begin_composite(&mut self, node: &Node, resolver: &Resolver<'_>) -> Result<(), RenderError> {
        let style = resolver.prepare_style_from(node)?;
        let mut attrs = attributes(style.as_deref(), resolver.context(), None);
        match node.kind() {
            // A locale in the document's own style is already written by
            // `attributes`; the context locale only fills its absence.
            NodeKind::Document => {
                let hinted = style
                    .as_deref()
                    .and_then(|style| style.attrs().text())
                    .is_some_and(|text| text.locale.is_some());
                if !hinted && let Some(locale) = resolver.context().locale() {
                    write!(attrs, " lang=\"{}\"", escape_attr(locale))?;
                }
            }
            NodeKind::TableRow | NodeKind::HeaderRow if self.glue_rows => {
                self.row_style = row_style_for(resolver, node)?;
            }
            _ => {}
        }
        self.pad();
        writeln!(self.out, "<{}{}>", composite_tag(node.kind()), attrs)?;
        self.depth += 1;
        Ok(())
    }

    fn end_composite(&mut self, node: &Node, _resolver: &Resolver<'_>) -> Result<(), RenderError> {
        if matches!(node.kind(), NodeKind::TableRow | NodeKind::HeaderRow) {
            self.row_style = None;
        }
        self.depth = self.depth.saturating_sub(1);
        self.pad();
        writeln!(self.out, "</{}>", composite_tag(node.kind()))?;
        Ok(())
    }
}

/// ` class="…" style="…" lang="…"`, each only when non-empty.
fn attributes(
    style: Option<&StyleDescriptor>,
    ctx: &RenderContext,
    class: Option<&str>,
) -> String {
    let mut classes: Vec<&str> = class.into_iter().collect();
    let mut css = Vec::new();
    let mut lang = None;
    if let Some(style) = style {
        if let Some(ext) = style
            .attrs()
            .extension()
            .and_then(|ext| ext.as_any().downcast_ref::<CssClasses>())
        {
            classes.extend(ext.0.iter().map(String::as_str));
        }
        css = css_declarations(style, ctx);
        lang = style.attrs().text().and_then(|text| text.locale.as_deref());
    }

    let mut out = String::new();
    if !classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", escape_attr(&classes.join(" "))));
    }
    if !css.is_empty() {
        out.push_str(&format!(" style=\"{}\"", escape_attr(&css.iter().join("; "))));
    }
    if let Some(lang) = lang {
        out.push_str(&format!(" lang=\"{}\"", escape_attr(lang)));
    }
    out
}

/// Inline CSS for the text and layout halves of a style.
pub fn css_declarations(style: &StyleDescriptor, ctx: &RenderContext) -> Vec<String> {
    let mut decls = Vec::new();
    if let Some(text) = style.attrs().text() {
        if let Some(family) = &text.font_family {
            let name = ctx.font_name(family);
            if name.contains(' ') {
                decls.push(format!("font-family: '{}'", name));
            } else {
                decls.push(format!("font-family: {}", name));
            }
        }
        if let Some(size) = text.font_size {
            decls.push(format!("font-size: {}pt", size));
        }
        if let Some(bold) = text.bold {
            decls.push(format!("font-weight: {}", if bold { "bold" } else { "normal" }));
        }
        if let Some(italic) = text.italic {
            decls.push(format!("font-style: {}", if italic { "italic" } else { "normal" }));
        }
        if let Some(underline) = text.underline {
            decls.push(format!(
                "text-decoration: {}",
                if underline { "underline" } else { "none" }
            ));
        }
        if let Some(color) = &text.color {
            decls.push(format!("color: {}", color));
        }
    }

    if let Some(layout) = style.attrs().layout() {
        for (edge, border) in layout.borders() {
            let Some(border) = border else { continue };
            if border.is_none() {
                decls.push(format!("border-{}: none", edge));
            } else {
                decls.push(format!(
                    "border-{}: {}pt {} {}",
                    edge,
                    border.weight.width_pt(),
                    border_style(border.weight),
                    border.color.as_ref().unwrap_or(&Color::BLACK)
                ));
            }
        }
        if layout.fill_pattern != Some(FillPattern::None)
            && let Some(background) = &layout.background
        {
            decls.push(format!("background-color: {}", background));
        }
        if let Some(align) = layout.horizontal_align {
            let value = match align {
                HorizontalAlign::Left | HorizontalAlign::Fill => "left",
                HorizontalAlign::Center => "center",
                HorizontalAlign::Right => "right",
                HorizontalAlign::Justify => "justify",
            };
            decls.push(format!("text-align: {}", value));
        }
        if let Some(align) = layout.vertical_align {
            let value = match align {
                VerticalAlign::Top => "top",
                VerticalAlign::Middle => "middle",
                VerticalAlign::Bottom => "bottom",
            };
            decls.push(format!("vertical-align: {}", value));
        }
        if let Some(width) = &layout.width {
            decls.push(format!("width: {}", width));
        }
        if let Some(height) = &layout.height {
            decls.push(format!("height: {}", height));
        }
        if layout.shrink_to_fit == Some(true) {
            decls.push("white-space: nowrap".to_string());
        }
        let transforms: Vec<String> = layout
            .rotation
            .map(|deg| format!("rotate({}deg)", deg))
            .into_iter()
            .chain(layout.scale.map(|s| format!("scale({})", s)))
            .collect();
        if !transforms.is_empty() {
            decls.push(format!("transform: {}", transforms.join(" ")));
        }
    }
    decls
}

fn border_style(weight: BorderWeight) -> &'static str {
    match weight {
        BorderWeight::Dashed => "dashed",
        BorderWeight::Dotted => "dotted",
        BorderWeight::Double => "double",
        _ => "solid",
    }
}

fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

//! Project detail widget: full entry with images, documents, and links

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use folio_app::router::{AffordanceId, ImageSource, ProjectDetailView, RenderPass};
use folio_core::catalog::ContentFragment;

use crate::theme::styles;
use crate::widgets::{affordance_index, affordance_line, render_lines, separator};

/// Detail view for a single project
pub struct ProjectDetailWidget<'a> {
    view: &'a ProjectDetailView,
    pass: &'a RenderPass,
    cursor: usize,
    scroll: u16,
}

impl<'a> ProjectDetailWidget<'a> {
    pub fn new(
        view: &'a ProjectDetailView,
        pass: &'a RenderPass,
        cursor: usize,
        scroll: u16,
    ) -> Self {
        Self {
            view,
            pass,
            cursor,
            scroll,
        }
    }

    fn selected(&self, id: &AffordanceId) -> bool {
        affordance_index(self.pass, id) == Some(self.cursor)
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.push(affordance_line(
            "← Back to projects",
            self.selected(&AffordanceId::Back),
        ));
        lines.push(Line::default());

        let (icon, icon_style) = styles::status_indicator(self.view.status);
        let mut title = Line::default();
        title.push_span(Span::styled(
            format!("Project: {}", self.view.title),
            styles::accent_bold(),
        ));
        title.push_span(Span::raw("  "));
        title.push_span(Span::styled(
            format!("{icon} {}", self.view.status.label()),
            icon_style,
        ));
        lines.push(title);
        lines.push(Line::default());

        lines.push(Line::from(Span::styled(
            self.view.summary.clone(),
            styles::text_primary(),
        )));
        lines.push(Line::default());

        for fragment in &self.view.details {
            match fragment {
                ContentFragment::Subheading(text) => {
                    lines.push(Line::from(Span::styled(text.clone(), styles::heading())));
                }
                ContentFragment::Text(text) => {
                    lines.push(Line::from(Span::styled(
                        text.clone(),
                        styles::text_primary(),
                    )));
                    lines.push(Line::default());
                }
                ContentFragment::Bullets(items) => {
                    for item in items {
                        lines.push(Line::from(Span::styled(
                            format!("  • {item}"),
                            styles::text_secondary(),
                        )));
                    }
                    lines.push(Line::default());
                }
            }
        }

        if !self.view.images.is_empty() {
            lines.push(separator());
            lines.push(Line::from(Span::styled("Images", styles::heading())));
            for image in &self.view.images {
                let mut line = Line::default();
                line.push_span(Span::styled(
                    format!("  {} ", image.logical_name),
                    styles::text_secondary(),
                ));
                match &image.source {
                    ImageSource::Local(path) => {
                        line.push_span(Span::styled(
                            format!("({})", path.display()),
                            styles::text_muted(),
                        ));
                    }
                    ImageSource::Remote(url) => {
                        line.push_span(Span::styled(url.to_string(), styles::link()));
                    }
                }
                lines.push(line);
            }
            lines.push(Line::default());
        }

        for document in &self.view.documents {
            let id = AffordanceId::SaveProjectFile {
                project_id: self.view.id.clone(),
                logical_name: document.file_name.clone(),
            };
            let mut line = affordance_line("View Document", self.selected(&id));
            line.push_span(Span::styled(
                format!("  → {}", document.file_name),
                styles::text_muted(),
            ));
            lines.push(line);
        }

        if !self.view.links.is_empty() {
            lines.push(separator());
            for link in &self.view.links {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}: ", link.label), styles::text_secondary()),
                    Span::styled(link.url.clone(), styles::link()),
                ]));
            }
        }

        lines
    }
}

impl Widget for ProjectDetailWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_lines(self.build_lines(), self.scroll, area, buf);
    }
}

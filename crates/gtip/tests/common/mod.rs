//! Recording host shared by the integration tests.

#![allow(dead_code)]

use gtip::{
    EditorHost, Location, PanelContent, PanelHost, PanelOptions, Point, RawMessage, Rect,
    Severity, ViewId, ViewportMetrics,
};

pub const EDITOR: ViewId = ViewId(1);

/// Every side effect the controller asked the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetCursor(Location),
    Center(Location),
    Status(String),
    Create(ViewId, Rect),
    Destroy(ViewId),
    Content(ViewId),
    Geometry(ViewId, Rect),
    Focus(ViewId),
}

/// A live panel as the host sees it.
#[derive(Debug, Clone)]
pub struct Panel {
    pub id: ViewId,
    pub rect: Rect,
    pub content: PanelContent,
    pub options: PanelOptions,
}

/// Editor with a fixed screen and no scrolling: a location maps to the cell
/// `(column, line - top)`.
#[derive(Debug)]
pub struct FakeHost {
    pub messages: Vec<RawMessage>,
    pub cursor: Location,
    pub metrics: ViewportMetrics,
    pub top: u32,
    pub active: ViewId,
    pub panels: Vec<Panel>,
    pub calls: Vec<Call>,
    next_panel: u64,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            cursor: Location::default(),
            metrics: ViewportMetrics::new(80, 25, 1),
            top: 0,
            active: EDITOR,
            panels: Vec::new(),
            calls: Vec::new(),
            next_panel: 100,
        }
    }
}

impl FakeHost {
    pub fn with_messages(messages: Vec<RawMessage>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    pub fn status(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Status(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn panel(&self) -> Option<&Panel> {
        assert!(self.panels.len() <= 1, "more than one panel open");
        self.panels.first()
    }

    pub fn created(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Create(..)))
            .count()
    }
}

pub fn msg(line: u32, column: u32, severity: Severity, owner: &str, text: &str) -> RawMessage {
    RawMessage::new(text, Location::new(line, column), severity, owner)
}

impl EditorHost for FakeHost {
    fn messages(&self) -> Vec<RawMessage> {
        self.messages.clone()
    }

    fn cursor(&self) -> Location {
        self.cursor
    }

    fn set_cursor(&mut self, at: Location) {
        self.cursor = at;
        self.calls.push(Call::SetCursor(at));
    }

    fn center_on(&mut self, at: Location) {
        self.calls.push(Call::Center(at));
    }

    fn viewport_metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    fn screen_point(&self, at: Location) -> Point {
        let row = at.line.saturating_sub(self.top);
        Point::new(
            u16::try_from(at.column).unwrap_or(u16::MAX),
            u16::try_from(row).unwrap_or(u16::MAX),
        )
    }

    fn active_view(&self) -> ViewId {
        self.active
    }

    fn show_status(&mut self, message: &str) {
        self.calls.push(Call::Status(message.to_string()));
    }
}

impl PanelHost for FakeHost {
    fn create_panel(&mut self, content: &PanelContent, rect: Rect, options: &PanelOptions) -> ViewId {
        self.next_panel += 1;
        let id = ViewId(self.next_panel);
        self.panels.push(Panel {
            id,
            rect,
            content: content.clone(),
            options: options.clone(),
        });
        self.calls.push(Call::Create(id, rect));
        id
    }

    fn destroy_panel(&mut self, panel: ViewId) {
        self.panels.retain(|p| p.id != panel);
        self.calls.push(Call::Destroy(panel));
    }

    fn update_panel_content(&mut self, panel: ViewId, content: &PanelContent) {
        if let Some(p) = self.panels.iter_mut().find(|p| p.id == panel) {
            p.content = content.clone();
        }
        self.calls.push(Call::Content(panel));
    }

    fn update_panel_geometry(&mut self, panel: ViewId, rect: Rect) {
        if let Some(p) = self.panels.iter_mut().find(|p| p.id == panel) {
            p.rect = rect;
        }
        self.calls.push(Call::Geometry(panel, rect));
    }

    fn focus_view(&mut self, view: ViewId) {
        self.active = view;
        self.calls.push(Call::Focus(view));
    }
}

//! Page layout: positions every box of the page for a viewport width.
//!
//! The header and drawer are fixed to the viewport and use screen
//! coordinates. Everything else (sections, footer) uses page coordinates
//! and is shifted by the scroll offset when drawn. Section bounds are
//! derived here and nowhere else.

use greenhope_types::backend::TextMeasure;

use crate::content::{Block, CardFill, Entry, Icon, Page, TextStyle};
use crate::section::{SectionBounds, SectionId};
use crate::theme::Tone;

/// Height of the fixed header bar.
pub const HEADER_HEIGHT: u32 = 64;
/// Horizontal padding of the header, the page container and the drawer.
pub const EDGE_PADDING: i32 = 16;
/// Top padding of the main column; keeps the first section clear of the
/// header.
pub const MAIN_PADDING_TOP: i32 = 96;
/// Bottom padding of the main column.
pub const MAIN_PADDING_BOTTOM: i32 = 16;
/// Margin below each section.
pub const SECTION_MARGIN: i32 = 96;
/// Gap between a section heading and its body.
pub const HEADING_GAP: i32 = 32;
/// Margin above the footer.
pub const FOOTER_MARGIN: i32 = 48;
/// Inner padding of the footer.
pub const FOOTER_PADDING: i32 = 32;
/// Widest the content column gets.
pub const MAX_CONTENT_WIDTH: u32 = 1280;
/// Space between desktop navigation entries.
pub const NAV_SPACING: u32 = 16;
/// Side of the hamburger button.
pub const MENU_BUTTON_SIZE: u32 = 24;
/// Height of one drawer entry.
pub const DRAWER_ENTRY_HEIGHT: u32 = 40;
/// Gap between stacked children of a card.
pub const CARD_CHILD_GAP: u32 = 16;

pub const TITLE_SIZE: u16 = 24;
pub const HEADING_SIZE: u16 = 32;
pub const NAV_SIZE: u16 = 16;

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    /// Whether `(px, py)` lies inside (right and bottom edges excluded).
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Whether the vertical span overlaps `[top, bottom)`.
    pub const fn overlaps_rows(&self, top: i32, bottom: i32) -> bool {
        self.y < bottom && self.bottom() > top
    }
}

/// How a layout item is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paint {
    /// Solid fill.
    Fill(Tone),
    /// One-pixel outline.
    Border(Tone),
    /// A single line of text, top-left aligned in the rect.
    Text { text: String, size: u16, tone: Tone },
    /// Pictogram scaled to the rect.
    Icon(Icon, Tone),
    /// List bullet.
    Disc(Tone),
}

/// A positioned, painted box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageItem {
    pub rect: Rect,
    pub paint: Paint,
}

/// Fixed header geometry (screen coordinates).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    pub bar: Rect,
    pub title: PageItem,
    /// Desktop navigation entries; empty on narrow viewports.
    pub nav: Vec<(SectionId, Rect)>,
    /// Hamburger button; present only on narrow viewports.
    pub menu_button: Option<Rect>,
}

/// Drawer geometry (screen coordinates), used while the menu is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerLayout {
    pub panel: Rect,
    pub entries: Vec<(SectionId, Rect)>,
}

/// The laid-out page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u32,
    pub narrow: bool,
    pub header: HeaderLayout,
    pub drawer: DrawerLayout,
    /// Page-coordinate items in paint order.
    pub items: Vec<PageItem>,
    /// Decorative links and where they were placed (page coordinates).
    pub links: Vec<(&'static str, Rect)>,
    pub content_height: i32,
    sections: Vec<(SectionId, SectionBounds)>,
}

impl PageLayout {
    /// Lay out `page` for a viewport `width` pixels wide.
    pub fn build(page: &Page, width: u32, narrow: bool, measure: &dyn TextMeasure) -> Self {
        let header = layout_header(page, width, narrow, measure);
        let drawer = layout_drawer(width);

        let mut builder = Builder {
            measure,
            narrow,
            items: Vec::new(),
            links: Vec::new(),
        };

        let (column_x, column_w) = content_column(width, EDGE_PADDING);
        let mut sections = Vec::with_capacity(page.sections.len());
        let mut y = MAIN_PADDING_TOP;
        for section in &page.sections {
            let top = y;
            let heading_h = builder.text(
                section.heading,
                HEADING_SIZE,
                Tone::Heading,
                column_x,
                y,
                column_w,
            );
            let body_y = top + heading_h as i32 + HEADING_GAP;
            let body_h = builder.block(&section.body, column_x, body_y, column_w, 0);
            let height = body_y + body_h as i32 - top;
            sections.push((section.id, SectionBounds::new(top, height)));
            y = top + height + SECTION_MARGIN;
        }
        y += MAIN_PADDING_BOTTOM + FOOTER_MARGIN;

        let content_height = builder.footer(page, y, width);
        log::debug!(
            "Laid out page at {width}px ({}): content height {content_height}",
            if narrow { "narrow" } else { "wide" }
        );

        Self {
            width,
            narrow,
            header,
            drawer,
            items: builder.items,
            links: builder.links,
            content_height,
            sections,
        }
    }

    /// Rendered bounds of a section.
    pub fn section_bounds(&self, id: SectionId) -> Option<SectionBounds> {
        self.sections
            .iter()
            .find(|(s, _)| *s == id)
            .map(|(_, bounds)| *bounds)
    }

    /// All laid-out sections in document order.
    pub fn sections(&self) -> &[(SectionId, SectionBounds)] {
        &self.sections
    }

    /// Desktop navigation entry under a screen point.
    pub fn nav_at(&self, x: i32, y: i32) -> Option<SectionId> {
        hit(&self.header.nav, x, y)
    }

    /// Whether a screen point is on the hamburger button.
    pub fn menu_button_at(&self, x: i32, y: i32) -> bool {
        self.header.menu_button.is_some_and(|r| r.contains(x, y))
    }

    /// Drawer entry under a screen point.
    pub fn drawer_entry_at(&self, x: i32, y: i32) -> Option<SectionId> {
        hit(&self.drawer.entries, x, y)
    }

    /// Decorative link under a page point.
    pub fn link_at(&self, x: i32, page_y: i32) -> Option<&'static str> {
        self.links
            .iter()
            .find(|(_, r)| r.contains(x, page_y))
            .map(|(label, _)| *label)
    }
}

fn hit(entries: &[(SectionId, Rect)], x: i32, y: i32) -> Option<SectionId> {
    entries
        .iter()
        .find(|(_, r)| r.contains(x, y))
        .map(|(id, _)| *id)
}

/// Left edge and width of the centered content column.
fn content_column(width: u32, padding: i32) -> (i32, u32) {
    let outer = width.min(MAX_CONTENT_WIDTH);
    let x = (width - outer) as i32 / 2 + padding;
    (x, outer.saturating_sub(2 * padding as u32).max(1))
}

fn layout_header(page: &Page, width: u32, narrow: bool, measure: &dyn TextMeasure) -> HeaderLayout {
    let line_h = measure.line_height(NAV_SIZE);
    let title_h = measure.line_height(TITLE_SIZE);
    let title = PageItem {
        rect: Rect::new(
            EDGE_PADDING,
            (HEADER_HEIGHT.saturating_sub(title_h) / 2) as i32,
            measure.measure_text(page.title, TITLE_SIZE),
            title_h,
        ),
        paint: Paint::Text {
            text: page.title.to_string(),
            size: TITLE_SIZE,
            tone: Tone::OnPrimary,
        },
    };

    let mut nav = Vec::new();
    let mut menu_button = None;
    let right = width as i32 - EDGE_PADDING;
    if narrow {
        menu_button = Some(Rect::new(
            right - MENU_BUTTON_SIZE as i32,
            (HEADER_HEIGHT - MENU_BUTTON_SIZE) as i32 / 2,
            MENU_BUTTON_SIZE,
            MENU_BUTTON_SIZE,
        ));
    } else {
        let y = (HEADER_HEIGHT.saturating_sub(line_h) / 2) as i32;
        let mut x = right;
        for id in SectionId::ALL.iter().rev() {
            let w = measure.measure_text(id.label(), NAV_SIZE);
            x -= w as i32;
            nav.push((*id, Rect::new(x, y, w, line_h)));
            x -= NAV_SPACING as i32;
        }
        nav.reverse();
    }

    HeaderLayout {
        bar: Rect::new(0, 0, width, HEADER_HEIGHT),
        title,
        nav,
        menu_button,
    }
}

fn layout_drawer(width: u32) -> DrawerLayout {
    let entries: Vec<(SectionId, Rect)> = SectionId::ALL
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let y = HEADER_HEIGHT as i32 + EDGE_PADDING + (i as u32 * DRAWER_ENTRY_HEIGHT) as i32;
            (
                *id,
                Rect::new(
                    EDGE_PADDING,
                    y,
                    width.saturating_sub(2 * EDGE_PADDING as u32),
                    DRAWER_ENTRY_HEIGHT,
                ),
            )
        })
        .collect();
    let height = 2 * EDGE_PADDING as u32 + entries.len() as u32 * DRAWER_ENTRY_HEIGHT;
    DrawerLayout {
        panel: Rect::new(0, HEADER_HEIGHT as i32, width, height),
        entries,
    }
}

/// Break `text` into lines no wider than `max_width`.
///
/// Words are kept whole where possible; a word wider than the line is
/// split between characters.
pub fn wrap_text(text: &str, max_width: u32, size: u16, measure: &dyn TextMeasure) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if line.is_empty() || measure.measure_text(&candidate, size) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
        while line.chars().count() > 1 && measure.measure_text(&line, size) > max_width {
            let split = longest_fitting_prefix(&line, max_width, size, measure);
            let rest = line.split_off(split);
            lines.push(std::mem::replace(&mut line, rest));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Byte index ending the longest prefix of `s` that fits (at least one
/// character).
fn longest_fitting_prefix(s: &str, max_width: u32, size: u16, measure: &dyn TextMeasure) -> usize {
    let mut end = s.chars().next().map_or(0, char::len_utf8);
    for (i, ch) in s.char_indices().skip(1) {
        let next = i + ch.len_utf8();
        if measure.measure_text(&s[..next], size) > max_width {
            break;
        }
        end = next;
    }
    end
}

fn text_metrics(style: TextStyle) -> (u16, Tone) {
    match style {
        TextStyle::Body | TextStyle::Lead | TextStyle::EntryTitle => (16, Tone::Text),
        TextStyle::Muted => (16, Tone::TextMuted),
        TextStyle::CardTitle => (24, Tone::Subheading),
        TextStyle::FooterTitle => (24, Tone::OnPrimary),
        TextStyle::FooterText => (16, Tone::OnPrimary),
    }
}

struct Builder<'a> {
    measure: &'a dyn TextMeasure,
    narrow: bool,
    items: Vec<PageItem>,
    links: Vec<(&'static str, Rect)>,
}

impl Builder<'_> {
    /// Emit wrapped text. Returns its height.
    fn text(&mut self, text: &str, size: u16, tone: Tone, x: i32, y: i32, w: u32) -> u32 {
        let line_h = self.measure.line_height(size);
        let lines = wrap_text(text, w, size, self.measure);
        let count = lines.len() as u32;
        for (i, line) in lines.into_iter().enumerate() {
            let line_w = self.measure.measure_text(&line, size);
            self.items.push(PageItem {
                rect: Rect::new(x, y + (i as u32 * line_h) as i32, line_w, line_h),
                paint: Paint::Text {
                    text: line,
                    size,
                    tone,
                },
            });
        }
        count * line_h
    }

    /// Height `block` would take at width `w`, without emitting it.
    fn measure_block(&mut self, block: &Block, w: u32) -> u32 {
        let items = self.items.len();
        let links = self.links.len();
        let h = self.block(block, 0, 0, w, 0);
        self.items.truncate(items);
        self.links.truncate(links);
        h
    }

    /// Emit `block` at `(x, y)` within width `w`. Cards grow to at least
    /// `min_h`. Returns the height used.
    fn block(&mut self, block: &Block, x: i32, y: i32, w: u32, min_h: u32) -> u32 {
        match block {
            Block::Text { text, style } => {
                let (size, tone) = text_metrics(*style);
                self.text(text, size, tone, x, y, w)
            },
            Block::Bullets(items) => self.bullets(items, x, y, w),
            Block::IconList(items) => self.icon_list(items, x, y, w),
            Block::Entries(entries) => self.entries(entries, x, y, w),
            Block::Links(labels) => self.link_list(labels, x, y, w),
            Block::Card {
                fill,
                padding,
                children,
            } => self.card(*fill, *padding, children, x, y, w, min_h),
            Block::Grid {
                columns,
                gap,
                children,
            } => self.grid(*columns, *gap, children, x, y, w),
            Block::Stack { gap, children } => self.stack(*gap, children, x, y, w),
        }
    }

    fn stack(&mut self, gap: u32, children: &[Block], x: i32, y: i32, w: u32) -> u32 {
        let mut h = 0;
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                h += gap;
            }
            h += self.block(child, x, y + h as i32, w, 0);
        }
        h
    }

    #[allow(clippy::too_many_arguments)]
    fn card(
        &mut self,
        fill: CardFill,
        padding: u32,
        children: &[Block],
        x: i32,
        y: i32,
        w: u32,
        min_h: u32,
    ) -> u32 {
        let background = self.items.len();
        let inner_w = w.saturating_sub(2 * padding).max(1);
        let inner_h = self.stack(
            CARD_CHILD_GAP,
            children,
            x + padding as i32,
            y + padding as i32,
            inner_w,
        );
        let rect = Rect::new(x, y, w, (inner_h + 2 * padding).max(min_h));
        let tone = match fill {
            CardFill::Plain => Tone::Background,
            CardFill::Surface => Tone::Surface,
            CardFill::SurfaceAlt => Tone::SurfaceAlt,
        };
        self.items.insert(
            background,
            PageItem {
                rect,
                paint: Paint::Fill(tone),
            },
        );
        if fill == CardFill::Plain {
            self.items.insert(
                background + 1,
                PageItem {
                    rect,
                    paint: Paint::Border(Tone::Border),
                },
            );
        }
        rect.h
    }

    fn grid(&mut self, columns: u32, gap: u32, children: &[Block], x: i32, y: i32, w: u32) -> u32 {
        let columns = if self.narrow { 1 } else { columns.max(1) };
        let col_w = (w.saturating_sub(gap * (columns - 1)) / columns).max(1);
        let mut h = 0;
        for (row, cells) in children.chunks(columns as usize).enumerate() {
            if row > 0 {
                h += gap;
            }
            let row_h = cells
                .iter()
                .map(|cell| self.measure_block(cell, col_w))
                .max()
                .unwrap_or(0);
            for (col, cell) in cells.iter().enumerate() {
                let cell_x = x + (col as u32 * (col_w + gap)) as i32;
                self.block(cell, cell_x, y + h as i32, col_w, row_h);
            }
            h += row_h;
        }
        h
    }

    fn bullets(&mut self, items: &[&'static str], x: i32, y: i32, w: u32) -> u32 {
        const INDENT: u32 = 32;
        const GAP: u32 = 8;
        let line_h = self.measure.line_height(16);
        let mut h = 0;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                h += GAP;
            }
            let item_y = y + h as i32;
            self.items.push(PageItem {
                rect: Rect::new(x + 14, item_y + (line_h as i32 - 6) / 2, 6, 6),
                paint: Paint::Disc(Tone::Text),
            });
            h += self.text(
                item,
                16,
                Tone::Text,
                x + INDENT as i32,
                item_y,
                w.saturating_sub(INDENT).max(1),
            );
        }
        h
    }

    fn icon_list(&mut self, items: &[(Icon, &'static str)], x: i32, y: i32, w: u32) -> u32 {
        const ICON: u32 = 16;
        const GAP: u32 = 8;
        let line_h = self.measure.line_height(16);
        let mut h = 0;
        for (i, (icon, label)) in items.iter().enumerate() {
            if i > 0 {
                h += GAP;
            }
            let item_y = y + h as i32;
            self.items.push(PageItem {
                rect: Rect::new(x, item_y + (line_h - ICON) as i32 / 2, ICON, ICON),
                paint: Paint::Icon(*icon, Tone::Icon(*icon)),
            });
            let indent = ICON + GAP;
            h += self.text(
                label,
                16,
                Tone::Text,
                x + indent as i32,
                item_y,
                w.saturating_sub(indent).max(1),
            );
        }
        h
    }

    fn entries(&mut self, entries: &[Entry], x: i32, y: i32, w: u32) -> u32 {
        const BADGE: u32 = 40;
        const ICON: u32 = 24;
        const INDENT: u32 = BADGE + 16;
        const GAP: u32 = 16;
        let text_w = w.saturating_sub(INDENT).max(1);
        let mut h = 0;
        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                h += GAP;
            }
            let entry_y = y + h as i32;
            let badge = Rect::new(x, entry_y + 4, BADGE, BADGE);
            self.items.push(PageItem {
                rect: badge,
                paint: Paint::Fill(Tone::IconBadge),
            });
            let inset = ((BADGE - ICON) / 2) as i32;
            self.items.push(PageItem {
                rect: Rect::new(badge.x + inset, badge.y + inset, ICON, ICON),
                paint: Paint::Icon(entry.icon, Tone::Primary),
            });
            let text_x = x + INDENT as i32;
            let (size, tone) = text_metrics(TextStyle::EntryTitle);
            let title_h = self.text(entry.title, size, tone, text_x, entry_y, text_w);
            let (size, tone) = text_metrics(TextStyle::Muted);
            let body_h = self.text(entry.text, size, tone, text_x, entry_y + title_h as i32, text_w);
            h += (title_h + body_h).max(BADGE + 4);
        }
        h
    }

    fn link_list(&mut self, labels: &[&'static str], x: i32, y: i32, w: u32) -> u32 {
        const GAP: u32 = 8;
        let (size, tone) = text_metrics(TextStyle::FooterText);
        let mut h = 0;
        for (i, label) in labels.iter().enumerate() {
            if i > 0 {
                h += GAP;
            }
            let first = self.items.len();
            let link_y = y + h as i32;
            h += self.text(label, size, tone, x, link_y, w);
            if let Some(item) = self.items.get(first) {
                self.links.push((*label, item.rect));
            }
        }
        h
    }

    /// Emit the footer starting at `top`. Returns the page bottom.
    fn footer(&mut self, page: &Page, top: i32, width: u32) -> i32 {
        let background = self.items.len();
        let (column_x, column_w) = content_column(width, FOOTER_PADDING);
        let mut y = top + FOOTER_PADDING;
        y += self.block(&page.footer, column_x, y, column_w, 0) as i32;
        y += FOOTER_PADDING;

        let (size, tone) = text_metrics(TextStyle::FooterText);
        let measure = self.measure;
        let line_h = measure.line_height(size);
        for line in page
            .closing
            .iter()
            .flat_map(|text| wrap_text(text, column_w, size, measure))
        {
            let line_w = measure.measure_text(&line, size);
            let x = column_x + (column_w as i32 - line_w as i32).max(0) / 2;
            self.items.push(PageItem {
                rect: Rect::new(x, y, line_w, line_h),
                paint: Paint::Text {
                    text: line,
                    size,
                    tone,
                },
            });
            y += line_h as i32;
        }
        let bottom = y + FOOTER_PADDING;

        self.items.insert(
            background,
            PageItem {
                rect: Rect::new(0, top, width, (bottom - top) as u32),
                paint: Paint::Fill(Tone::Primary),
            },
        );
        bottom
    }
}

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs;
use std::path::Path;

const FONT: Name<'static> = Name(b"F1");

/// Approximate Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.55;

/// A4 portrait geometry and type sizes, in points.
#[derive(Debug, Clone, Copy)]
struct Layout {
    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    body_size: f32,
    header_size: f32,
    title_size: f32,
}

const A4: Layout = Layout {
    page_w: 595.0,
    page_h: 842.0,
    margin: 40.0,
    row_h: 18.0,
    body_size: 9.0,
    header_size: 10.0,
    title_size: 14.0,
};

impl Layout {
    fn usable_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    /// Baseline of the table's header row.
    fn table_top(&self) -> f32 {
        self.page_h - self.margin - 40.0
    }

    fn rows_per_page(&self) -> usize {
        let space = self.table_top() - self.row_h - self.margin;
        ((space / self.row_h).floor() as usize + 1).max(1)
    }
}

/// Paginated results table written with pdf-writer's Type1 Helvetica.
pub struct PdfTable {
    pdf: Pdf,
    layout: Layout,
    catalog: Ref,
    page_tree: Ref,
    font: Ref,
    pages: Vec<Ref>,
    next_ref: i32,
}

impl Default for PdfTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfTable {
    pub fn new() -> Self {
        let catalog = Ref::new(1);
        let page_tree = Ref::new(2);
        let font = Ref::new(3);

        let mut pdf = Pdf::new();
        pdf.type1_font(font)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            layout: A4,
            catalog,
            page_tree,
            font,
            pages: Vec::new(),
            next_ref: 4,
        }
    }

    fn alloc(&mut self) -> Ref {
        let r = Ref::new(self.next_ref);
        self.next_ref += 1;
        r
    }

    /// Adds a page object and stores `content` as its stream.
    fn push_page(&mut self, content: Content) {
        let page = self.alloc();
        let stream = self.alloc();
        let l = self.layout;

        {
            let mut p = self.pdf.page(page);
            p.parent(self.page_tree)
                .media_box(Rect::new(0.0, 0.0, l.page_w, l.page_h))
                .contents(stream);
            p.resources().fonts().pair(FONT, self.font);
        }
        self.pdf.stream(stream, &content.finish());
        self.pages.push(page);
    }

    /// Writes `rows` under `headers`, as many pages as needed. The title,
    /// the optional caption and the header row repeat on every page.
    pub fn write_table(
        &mut self,
        title: &str,
        caption: Option<&str>,
        headers: &[String],
        rows: &[Vec<String>],
    ) {
        let l = self.layout;
        let widths = column_widths(&l, headers, rows);
        let chunk = l.rows_per_page();

        let mut chunks: Vec<&[Vec<String>]> = rows.chunks(chunk).collect();
        if chunks.is_empty() {
            chunks.push(&[]);
        }

        for (ix, body) in chunks.iter().enumerate() {
            let mut content = Content::new();

            text(&mut content, l.margin, l.page_h - l.margin, l.title_size, title);
            if let Some(caption) = caption {
                text(&mut content, l.margin, l.page_h - l.margin - 16.0, l.body_size, caption);
            }
            let footer = format!("Page {}/{}", ix + 1, chunks.len());
            text(&mut content, l.page_w - l.margin - 50.0, l.margin - 25.0, l.body_size, &footer);

            let mut y = l.table_top();
            band(&mut content, &l, y, &widths, 0.85);
            row(&mut content, &l, y, &widths, headers, l.header_size);

            for (n, cells) in body.iter().enumerate() {
                y -= l.row_h;
                if n % 2 == 0 {
                    band(&mut content, &l, y, &widths, 0.96);
                }
                row(&mut content, &l, y, &widths, cells, l.body_size);
            }

            self.push_page(content);
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog).pages(self.page_tree);
        let count = self.pages.len() as i32;
        self.pdf
            .pages(self.page_tree)
            .count(count)
            .kids(self.pages.iter().copied());

        fs::write(path, self.pdf.finish())
    }
}

fn text(content: &mut Content, x: f32, y: f32, size: f32, s: &str) {
    let bytes = win_ansi(s);
    content
        .begin_text()
        .set_font(FONT, size)
        .next_line(x, y)
        .show(Str(&bytes))
        .end_text();
}

fn band(content: &mut Content, l: &Layout, y: f32, widths: &[f32], gray: f32) {
    let w: f32 = widths.iter().sum();
    content.save_state();
    content.set_fill_rgb(gray, gray, gray + 0.03);
    content.rect(l.margin, y, w, l.row_h);
    content.fill_nonzero();
    content.restore_state();
}

/// One table row: cell texts cut to fit, then the grid lines around them.
fn row(content: &mut Content, l: &Layout, y: f32, widths: &[f32], cells: &[String], size: f32) {
    let mut x = l.margin;
    for (ix, w) in widths.iter().enumerate() {
        let cell = cells.get(ix).map(String::as_str).unwrap_or("");
        text(content, x + 3.0, y + 5.0, size, &fit_text(cell, w - 6.0, size));
        x += w;
    }

    content.save_state();
    content.set_stroke_rgb(0.65, 0.65, 0.65);
    content.rect(l.margin, y, x - l.margin, l.row_h);
    let mut edge = l.margin;
    for w in &widths[..widths.len().saturating_sub(1)] {
        edge += w;
        content.move_to(edge, y);
        content.line_to(edge, y + l.row_h);
    }
    content.stroke();
    content.restore_state();
}

/// Widths from the longest text per column, shrunk to fit the page.
fn column_widths(l: &Layout, headers: &[String], rows: &[Vec<String>]) -> Vec<f32> {
    let glyph = l.body_size * AVG_GLYPH_WIDTH;
    let measure = |s: &str| s.chars().count() as f32 * glyph + 8.0;

    let mut widths: Vec<f32> = headers.iter().map(|h| measure(h)).collect();
    for cells in rows {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = w.max(measure(cell));
        }
    }

    let total: f32 = widths.iter().sum();
    if total > l.usable_width() {
        let scale = l.usable_width() / total;
        widths.iter_mut().for_each(|w| *w *= scale);
    }
    widths
}

/// Latin-1 subset of WinAnsi; everything else becomes '?'.
fn win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

/// Cuts `s` so it fits `width` points, marking the cut with "..".
fn fit_text(s: &str, width: f32, size: f32) -> String {
    let max_chars = (width / (size * AVG_GLYPH_WIDTH)).floor().max(0.0) as usize;
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(max_chars.saturating_sub(2)).collect();
    cut.push_str("..");
    cut
}

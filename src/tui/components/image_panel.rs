use crate::tui::{Action, Component, Theme};
use color_eyre::Result;
use image::{imageops::FilterType, RgbImage};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rough pixel width of one terminal cell, used to turn a pixel width into columns
const CELL_WIDTH_PX: u32 = 8;

/// What the image panel currently shows
#[derive(Debug, Clone, Default)]
pub enum ImageState {
    /// No row selected yet
    #[default]
    Empty,
    /// Decoded image ready to draw
    Ready { image: RgbImage, caption: String },
    /// The link was signed but the download or decode failed
    Broken { caption: String, reason: String },
    /// No link could be signed
    Unavailable { reason: String },
}

/// Draws the selected case image with half-block characters
pub struct ImagePanel {
    state: ImageState,
    width_columns: u16,
    supported_actions: Vec<Action>,
}

impl ImagePanel {
    /// `image_width_px` is the nominal display width, capped at `max_columns` cells
    pub fn new(image_width_px: u32, max_columns: u16) -> Self {
        let columns = (image_width_px / CELL_WIDTH_PX).clamp(4, max_columns.max(4) as u32);
        Self {
            state: ImageState::Empty,
            width_columns: columns as u16,
            supported_actions: Vec::new(),
        }
    }

    pub fn set_state(&mut self, state: ImageState) {
        self.state = state;
    }

    pub fn state(&self) -> &ImageState {
        &self.state
    }

    /// Outer width the shell should reserve, borders included
    pub fn preferred_width(&self) -> u16 {
        self.width_columns + 2
    }

    /// Paint `img` scaled into `area`, two pixel rows per cell
    fn paint(img: &RgbImage, area: Rect, buf: &mut Buffer) {
        let (src_w, src_h) = img.dimensions();
        if src_w == 0 || src_h == 0 || area.width == 0 || area.height == 0 {
            return;
        }
        let mut w = area.width as u32;
        let mut h = (w * src_h).div_ceil(src_w).max(1);
        let max_h = area.height as u32 * 2;
        if h > max_h {
            h = max_h;
            w = (h * src_w / src_h).max(1);
        }
        let scaled = image::imageops::resize(img, w, h, FilterType::Triangle);
        let x_offset = (area.width as u32 - w) / 2;

        for cell_y in 0..h.div_ceil(2) {
            for x in 0..w {
                let top = scaled.get_pixel(x, cell_y * 2);
                let bottom = if cell_y * 2 + 1 < h {
                    scaled.get_pixel(x, cell_y * 2 + 1)
                } else {
                    top
                };
                let pos = Position::new(area.x + (x + x_offset) as u16, area.y + cell_y as u16);
                if let Some(cell) = buf.cell_mut(pos) {
                    cell.set_char('▀')
                        .set_fg(Color::Rgb(top[0], top[1], top[2]))
                        .set_bg(Color::Rgb(bottom[0], bottom[1], bottom[2]));
                }
            }
        }
    }
}

impl Component for ImagePanel {
    fn handle_action(&mut self, _action: Action) -> Result<bool> {
        Ok(false)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = Theme::default();
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Image")
            .border_style(theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let message = |text: String, style: Style| {
            Paragraph::new(Text::styled(text, style)).wrap(Wrap { trim: true })
        };
        let caption_area = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        let picture_area = Rect {
            height: inner.height - 1,
            ..inner
        };

        match &self.state {
            ImageState::Empty => {
                frame.render_widget(message("No row selected".into(), theme.muted_style()), inner);
            }
            ImageState::Ready { image, caption } => {
                Self::paint(image, picture_area, frame.buffer_mut());
                frame.render_widget(
                    Paragraph::new(Line::styled(caption.as_str(), theme.muted_style()).centered()),
                    caption_area,
                );
            }
            ImageState::Broken { caption, reason } => {
                frame.render_widget(
                    message(format!("⚠ broken image\n{reason}"), theme.warning_style()),
                    picture_area,
                );
                frame.render_widget(
                    Paragraph::new(Line::styled(caption.as_str(), theme.muted_style()).centered()),
                    caption_area,
                );
            }
            ImageState::Unavailable { reason } => {
                frame.render_widget(
                    message(format!("No image: {reason}"), theme.error_style()),
                    inner,
                );
            }
        }
    }

    fn supported_actions(&self) -> &[Action] {
        &self.supported_actions
    }

    fn name(&self) -> &str {
        "ImagePanel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(panel: &mut ImagePanel, w: u16, h: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        terminal.draw(|f| panel.render(f, f.area())).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_width_from_pixels() {
        assert_eq!(ImagePanel::new(300, 48).preferred_width(), 37 + 2);
        assert_eq!(ImagePanel::new(300, 20).preferred_width(), 20 + 2);
    }

    #[test]
    fn test_ready_image_paints_half_blocks() {
        let mut panel = ImagePanel::new(300, 48);
        panel.set_state(ImageState::Ready {
            image: RgbImage::from_pixel(8, 8, image::Rgb([255, 0, 0])),
            caption: "nevus - A1".into(),
        });
        let buf = draw(&mut panel, 12, 10);

        let cell = &buf[(1u16, 1u16)];
        assert_eq!(cell.symbol(), "▀");
        assert!(matches!(cell.fg, Color::Rgb(r, g, _) if r > 250 && g < 5));
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("nevus - A1"));
    }

    #[test]
    fn test_broken_image_shows_caption_and_reason() {
        let mut panel = ImagePanel::new(300, 48);
        panel.set_state(ImageState::Broken {
            caption: "melanoma - B2".into(),
            reason: "404".into(),
        });
        let buf = draw(&mut panel, 30, 8);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("broken image"));
        assert!(text.contains("melanoma - B2"));
    }
}

//! Home, exercise-list, and exercise-detail screens in one 320x480
//! window. Buttons are drawn rectangles; a click is the press edge of
//! the left mouse button inside a button's bounds.

use anyhow::Result;
use colored::*;
use image::{ImageBuffer, Rgb};

use crate::config::AppConfig;
use crate::detection;
use crate::draw;
use crate::exercises;
use crate::font;
use crate::output::WindowOutput;
use crate::ttf::FontRenderer;

const WINDOW_WIDTH: usize = 320;
const WINDOW_HEIGHT: usize = 480;

const BACKGROUND: draw::Color = (240, 244, 248);
const TEXT_DARK: draw::Color = (40, 40, 40);
const WHITE: draw::Color = (255, 255, 255);
const GREEN: draw::Color = (76, 175, 80);
const AMBER: draw::Color = (255, 193, 7);
const RED: draw::Color = (244, 67, 54);
const ERROR_RED: draw::Color = (211, 47, 47);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Home,
    ExerciseList,
    ExerciseDetail(usize),
}

#[derive(Debug, Clone, Copy)]
enum Action {
    StartDetection,
    OpenExercises,
    OpenDetail(usize),
    Back(Screen),
    Exit,
}

struct Button {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    action: Action,
}

impl Button {
    fn contains(&self, mx: f32, my: f32) -> bool {
        let (mx, my) = (mx as i32, my as i32);
        mx >= self.x && mx < self.x + self.w && my >= self.y && my < self.y + self.h
    }
}

/// Word-wrap to a maximum of `max_chars` per line. Overlong single words get
/// their own line rather than being split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Load an illustration and shrink it to fit the given box, keeping
/// aspect ratio. None on any read/decode failure.
fn load_illustration(path: &str, max_w: u32, max_h: u32) -> Option<ImageBuffer<Rgb<u8>, Vec<u8>>> {
    match image::open(path) {
        Ok(img) => Some(img.resize(max_w, max_h, image::imageops::FilterType::Triangle).to_rgb8()),
        Err(e) => {
            println!("{}", format!("Error loading image {}: {}", path, e).yellow());
            None
        }
    }
}

pub struct HomeUi {
    window: WindowOutput,
    buffer: Vec<u8>,
    screen: Screen,
    mouse_was_down: bool,
    font: Option<FontRenderer>,
    font_size: f32,
    text_scale: usize,
    logo: Option<ImageBuffer<Rgb<u8>, Vec<u8>>>,
    // Illustration for the currently shown detail screen; the inner
    // Option records a load failure so we do not retry every frame.
    detail_image: Option<(usize, Option<ImageBuffer<Rgb<u8>, Vec<u8>>>)>,
    config: AppConfig,
}

impl HomeUi {
    pub fn new(config: AppConfig) -> Result<Self> {
        let window = WindowOutput::new("PostureFit", WINDOW_WIDTH, WINDOW_HEIGHT)?;
        let font = FontRenderer::try_load(&config.ui.font_family);
        // Missing logo is fine; the home screen just shows text.
        let logo = load_illustration("assets/logo.png", 300, 160);

        Ok(Self {
            window,
            buffer: vec![0; WINDOW_WIDTH * WINDOW_HEIGHT * 3],
            screen: Screen::Home,
            mouse_was_down: false,
            font_size: config.ui.font_size_pt as f32,
            text_scale: config.ui.text_scale,
            font,
            logo,
            detail_image: None,
            config,
        })
    }

    /// UI event loop. Returns when Exit is clicked or the window closes.
    pub fn run(&mut self) -> Result<()> {
        while self.window.is_open() {
            let buttons = self.render();

            let mouse_down = self.window.mouse_down();
            if mouse_down && !self.mouse_was_down {
                if let Some((mx, my)) = self.window.mouse_pos() {
                    if let Some(action) = buttons
                        .iter()
                        .find(|b| b.contains(mx, my))
                        .map(|b| b.action)
                    {
                        if !self.handle(action) {
                            return Ok(());
                        }
                    }
                }
            }
            self.mouse_was_down = mouse_down;

            self.window.update(&self.buffer)?;
        }
        Ok(())
    }

    /// Returns false when the app should exit.
    fn handle(&mut self, action: Action) -> bool {
        match action {
            Action::StartDetection => {
                // Fire-and-forget worker; never joined. A second click
                // while one is running spawns a loop that fails to open
                // the busy camera and winds down on its own.
                let config = self.config.clone();
                std::thread::spawn(move || {
                    if let Err(e) = detection::run(&config) {
                        println!("{}", format!("Detection ended: {:#}", e).yellow());
                    }
                });
            }
            Action::OpenExercises => self.screen = Screen::ExerciseList,
            Action::OpenDetail(index) => {
                self.screen = Screen::ExerciseDetail(index);
                self.detail_image = None;
            }
            Action::Back(to) => self.screen = to,
            Action::Exit => return false,
        }
        true
    }

    fn render(&mut self) -> Vec<Button> {
        draw::fill(&mut self.buffer, BACKGROUND);
        match self.screen {
            Screen::Home => self.render_home(),
            Screen::ExerciseList => self.render_exercise_list(),
            Screen::ExerciseDetail(index) => self.render_exercise_detail(index),
        }
    }

    fn render_home(&mut self) -> Vec<Button> {
        self.draw_centered_text("Welcome to PostureFit", 24, GREEN);

        if let Some(logo) = &self.logo {
            let x = (WINDOW_WIDTH as i32 - logo.width() as i32) / 2;
            draw::blit_image(&mut self.buffer, WINDOW_WIDTH, WINDOW_HEIGHT, x, 50, logo);
        }

        let buttons = vec![
            self.button(60, 240, 200, 44, "Detect Posture", GREEN, Action::StartDetection),
            self.button(60, 304, 200, 44, "Instant Exercises", AMBER, Action::OpenExercises),
            self.button(60, 390, 200, 44, "Exit", RED, Action::Exit),
        ];
        buttons
    }

    fn render_exercise_list(&mut self) -> Vec<Button> {
        self.draw_centered_text("Instant Exercises", 24, TEXT_DARK);

        let mut buttons = Vec::new();
        let mut y = 80;
        for (index, exercise) in exercises::CATALOG.iter().enumerate() {
            buttons.push(self.button(40, y, 240, 48, exercise.name, AMBER, Action::OpenDetail(index)));
            y += 68;
        }
        buttons.push(self.button(100, 410, 120, 40, "< Back", GREEN, Action::Back(Screen::Home)));
        buttons
    }

    fn render_exercise_detail(&mut self, index: usize) -> Vec<Button> {
        let exercise = &exercises::CATALOG[index];
        self.draw_centered_text(exercise.name, 16, TEXT_DARK);

        // Load once per visit; remember failures.
        if self.detail_image.as_ref().map(|(i, _)| *i) != Some(index) {
            self.detail_image = Some((index, load_illustration(exercise.image_path, 250, 150)));
        }

        let mut y = 50;
        if let Some((_, Some(img))) = &self.detail_image {
            let x = (WINDOW_WIDTH as i32 - img.width() as i32) / 2;
            draw::blit_image(&mut self.buffer, WINDOW_WIDTH, WINDOW_HEIGHT, x, y, img);
            y += img.height() as i32 + 20;
        } else {
            // Inline substitute for an unreadable image; the program
            // carries on.
            self.draw_centered_text("Error loading image.", y as usize + 60, ERROR_RED);
            y += 150;
        }

        for line in wrap_text(exercise.description, 34) {
            self.draw_text(16, y as usize, &line, TEXT_DARK);
            y += self.line_height() as i32 + 2;
        }

        vec![self.button(100, 410, 120, 40, "< Back", GREEN, Action::Back(Screen::ExerciseList))]
    }

    fn button(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        label: &'static str,
        fill: draw::Color,
        action: Action,
    ) -> Button {
        draw::fill_rect(&mut self.buffer, WINDOW_WIDTH, WINDOW_HEIGHT, x, y, w, h, fill);
        let text_w = self.measure_width(label) as i32;
        let text_h = self.line_height() as i32;
        let tx = x + (w - text_w).max(0) / 2;
        let ty = y + (h - text_h).max(0) / 2;
        self.draw_text(tx as usize, ty as usize, label, WHITE);
        Button { x, y, w, h, action }
    }

    fn draw_text(&mut self, x: usize, y: usize, text: &str, color: draw::Color) {
        if let Some(fr) = &self.font {
            fr.draw_text(&mut self.buffer, WINDOW_WIDTH, WINDOW_HEIGHT, x, y, text, color, self.font_size);
        } else {
            font::draw_text_line(&mut self.buffer, WINDOW_WIDTH, WINDOW_HEIGHT, x, y, text, color, self.text_scale);
        }
    }

    fn draw_centered_text(&mut self, text: &str, y: usize, color: draw::Color) {
        let w = self.measure_width(text);
        let x = (WINDOW_WIDTH.saturating_sub(w)) / 2;
        self.draw_text(x, y, text, color);
    }

    fn measure_width(&self, text: &str) -> usize {
        match &self.font {
            Some(fr) => fr.measure_width(text, self.font_size),
            None => font::measure_text_width(text, self.text_scale),
        }
    }

    fn line_height(&self) -> usize {
        match &self.font {
            Some(fr) => fr.measure_height(self.font_size),
            None => font::line_height(self.text_scale),
        }
    }
}

pub fn run(config: AppConfig) -> Result<()> {
    HomeUi::new(config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_hit_testing() {
        let button = Button { x: 10, y: 20, w: 100, h: 40, action: Action::Exit };
        assert!(button.contains(10.0, 20.0));
        assert!(button.contains(60.0, 40.0));
        assert!(!button.contains(110.0, 40.0));
        assert!(!button.contains(60.0, 60.0));
        assert!(!button.contains(5.0, 25.0));
    }

    #[test]
    fn wrapping_respects_the_line_limit() {
        let lines = wrap_text("Gently tilt your head to one side and hold", 16);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 16, "line too long: {:?}", line);
        }
    }

    #[test]
    fn wrapping_keeps_overlong_words_whole() {
        let lines = wrap_text("a supercalifragilistic word", 10);
        assert!(lines.contains(&"supercalifragilistic".to_string()));
    }

    #[test]
    fn wrapping_empty_text_yields_no_lines() {
        assert!(wrap_text("", 20).is_empty());
    }
}

use crossterm::event::DisableFocusChange;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableFocusChange;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::text::Text;
use ratatui_carousel::crossterm_input::input_event_from_crossterm;
use ratatui_carousel::prelude::*;
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    init_tracing()?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    res
}

/// Logs go to the file named by `CAROUSEL_LOG`; the terminal itself is busy drawing.
fn init_tracing() -> io::Result<()> {
    let Ok(path) = std::env::var("CAROUSEL_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(path)?;
    let filter = EnvFilter::try_from_env("CAROUSEL_LOG_FILTER")
        .unwrap_or_else(|_| EnvFilter::new("ratatui_carousel_core=trace"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();
    Ok(())
}

fn slides() -> Vec<CarouselItem> {
    let palette = [
        Style::default().on_blue(),
        Style::default().on_magenta(),
        Style::default().on_green(),
        Style::default().on_red(),
        Style::default().on_cyan(),
    ];
    palette
        .into_iter()
        .enumerate()
        .map(|(i, style)| {
            let text = Text::from(vec![
                Line::from(format!("Slide {}", i + 1)).bold(),
                Line::from("←/→ or click the chevrons"),
            ]);
            CarouselItem::new(text)
                .with_basis(SlideBasis::Percent(80))
                .with_style(style)
        })
        .collect()
}

fn run<B: Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    let theme = Theme::default();
    let items = slides();
    let options = CarouselOptions {
        title: Some(" Carousel (←/→, o: orientation, q) ".to_string()),
        ..Default::default()
    };
    let mut carousel =
        Carousel::with_options(CarouselConfig::new(), VirtualizerEngineFactory, options);
    carousel.focus();
    let content = CarouselContent::new();
    let mut prev = CarouselButton::previous();
    let mut next = CarouselButton::next();

    loop {
        let mut render_err = None;
        terminal.draw(|f| {
            let [main, status] =
                Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(f.area());
            let buf = f.buffer_mut();

            let inner = carousel.render(main, buf, &theme);
            let layout = CarouselLayout::split(inner, carousel.orientation());
            let scope = carousel.scope();
            let rendered = content
                .render(layout.content, buf, &scope, &items, &theme)
                .and_then(|_| prev.render(layout.prev, buf, &scope, &theme))
                .and_then(|_| next.render(layout.next, buf, &scope, &theme));
            if let Err(err) = rendered {
                render_err = Some(err);
            }

            let snap = carousel.api().map_or(0, |api| api.selected_snap());
            let status_line = format!(
                "slide={}  prev={}  next={}  focused={}",
                snap + 1,
                carousel.can_scroll_prev(),
                carousel.can_scroll_next(),
                carousel.is_focused(),
            );
            buf.set_span(status.x, status.y, &Span::raw(status_line), status.width);
        })?;
        if let Some(err) = render_err {
            return Err(io::Error::other(err));
        }
        carousel.sync();

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let ev = crossterm::event::read()?;
        if let Event::Key(key) = &ev {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('o') => {
                        let orientation = match carousel.orientation() {
                            Orientation::Horizontal => Orientation::Vertical,
                            Orientation::Vertical => Orientation::Horizontal,
                        };
                        carousel.set_config(CarouselConfig::new().with_orientation(orientation));
                        continue;
                    }
                    _ => {}
                }
            }
        }

        let Some(ev) = input_event_from_crossterm(ev) else {
            continue;
        };
        if carousel.handle_event(&ev).is_consumed() {
            continue;
        }
        let scope = carousel.scope();
        for button in [&prev, &next] {
            if button
                .handle_event(&ev, &scope)
                .map_err(io::Error::other)?
                .is_consumed()
            {
                break;
            }
        }
    }
}

//! rangepanel — interactive generator control panel.
//!
//! Edits an on/off flag plus either two independent percentage sliders
//! (load, battery fill) or one dual-handle charge window, then prints the
//! edited values on exit. All editing happens in memory; nothing persists.

use std::io::{self, stdout};

use anyhow::Result;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use rangepanel_core::panel::MIN_GAP;
use rangepanel_core::{ControlSpec, Panel, SettingsBinding};
use rangepanel_tui::{run, PanelLayout, PanelText};

#[derive(Parser)]
#[command(name = "rangepanel", about = "Interactive generator control panel")]
struct Args {
    /// Edit one dual-handle charge window instead of two independent sliders
    #[arg(long)]
    range: bool,

    /// Start with the generator enabled
    #[arg(long)]
    enabled: bool,

    /// Starting load / low-handle percentage
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(i32).range(0..=100))]
    low: i32,

    /// Starting fill / high-handle percentage
    #[arg(long, default_value_t = 75, value_parser = clap::value_parser!(i32).range(0..=100))]
    high: i32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut enabled = args.enabled;
    let mut low = args.low;
    let mut high = args.high;
    if args.range && high < low + MIN_GAP {
        high = (low + MIN_GAP).min(100);
    }

    let (controls, labels): (Vec<ControlSpec>, Vec<&str>) = if args.range {
        (
            vec![ControlSpec::Toggle, ControlSpec::Slider { handles: 2 }],
            vec!["Enabled", "Keep charge between"],
        )
    } else {
        (
            vec![
                ControlSpec::Toggle,
                ControlSpec::Slider { handles: 1 },
                ControlSpec::Slider { handles: 1 },
            ],
            vec![
                "Enabled",
                "Generator load (% of maximum)",
                "Fill battery until %",
            ],
        )
    };
    let text = PanelText {
        title: " Generator controls ",
        labels: &labels,
    };

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = {
        let binding = SettingsBinding::new(&mut enabled, vec![&mut low, &mut high]);
        let mut panel = Panel::new(controls, binding);
        run(&mut terminal, &mut panel, &text, &PanelLayout::default())
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    println!("enabled: {enabled}");
    if args.range {
        println!("charge window: {low}%..{high}%");
    } else {
        println!("load: {low}%");
        println!("battery fill: {high}%");
    }

    result
}

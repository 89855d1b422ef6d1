//! Drive a text input and a validated number input from scripted key presses.
//!
//! Run with `cargo run -p formkit --example text_input`; logs go to
//! `text_input.log`.

use std::fs::File;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use formkit::formdom::KeyboardEvent;
use formkit::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("text_input.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut text = UiTextInput::new();
    text.on_change(|detail| println!("change: {:?}", detail.value));
    text.on_keydown(|ev| println!("keydown: {:?}", ev.key));

    text.focus();
    for code in [KeyCode::Char('h'), KeyCode::Char('i'), KeyCode::Char('!'), KeyCode::Backspace] {
        let ev: KeyboardEvent = KeyEvent::new(code, KeyModifiers::NONE).into();
        text.press_key(ev.key, ev.modifiers);
    }
    text.blur();
    println!("{}", text.to_html());

    let mut quantity = UiInput::from_config(
        InputConfig::new()
            .input_type(InputType::Number)
            .name("quantity")
            .min("1")
            .max("10")
            .required(true)
            .value(12),
    );
    println!("{}", quantity.to_html());
    if !quantity.report_validity().await {
        println!("invalid: {}", quantity.native().shown_message().unwrap_or_default());
    }

    quantity.user_input("4");
    println!("valid after edit: {}", quantity.report_validity().await);

    Ok(())
}

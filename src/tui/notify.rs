//! Modal notifications.

use crossterm::event::{self, Event, KeyEventKind};

use crate::terminal::{Frame, GREY, RESET};
use crate::widget::Notifier;

/// Draws the message in a box and blocks until a key is pressed.
pub struct ModalNotifier;

impl Notifier for ModalNotifier {
    fn notify(&mut self, message: &str) {
        let mut frame = Frame::new();
        frame
            .top("Notice")
            .blank()
            .line_center(message)
            .blank()
            .line_center(&format!("{GREY}press any key{RESET}"))
            .bottom();
        frame.print();
        wait_for_key();
    }
}

pub fn wait_for_key() {
    loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break,
            Ok(_) => continue,
            Err(_) => break,
        }
    }
}

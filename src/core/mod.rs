//! The headless editing engine: styled document, undo history, selection,
//! clipboard, and command dispatch, plus the data models behind the menu
//! bar, toolbar, prompts, and dialogs. Nothing in here touches the
//! terminal, which is what keeps the whole engine testable.

pub mod app;
pub mod clipboard;
pub mod command;
pub mod commands;
pub mod dialog;
pub mod dispatcher;
pub mod document;
pub mod history;
pub mod input;
pub mod menu;
pub mod prompt;
pub mod selection;
pub mod style;
pub mod toolbar;
pub mod utf8;
pub mod view;

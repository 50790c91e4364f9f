//! Event routing
//!
//! Routes terminal events (input, resize, mouse) to the surface that owns
//! them. Keyboard focus follows a fixed precedence: an open dialog grabs
//! every key, then an active prompt, then the menu bar, and only then does
//! the key binding table apply.

use crate::core::app::App;
use crate::core::dialog::Dialog;
use crate::core::dispatcher::{DispatchResult, dispatch};
use crate::core::input::{InputEvent, Key, KeyLookup, KeyMap, MouseButton, MouseEvent, MouseEventKind};
use crate::core::menu::{MENU_BAR_HEIGHT_CELLS, MenuItem};
use crate::core::prompt::{PromptResult, PromptState, handle_prompt_action};
use crate::terminal::display::{Display, TEXT_TOP_ROW, text_area_rows};
use crate::terminal::events::EditorEvent;

/// Route one event. Returns true when the editor should exit.
pub fn process_terminal_event(
    app: &mut App,
    display: &mut Display,
    keymap: &KeyMap,
    event: EditorEvent,
) -> Result<bool, Box<dyn std::error::Error>> {
    match event {
        EditorEvent::Input(input) => handle_key_event(app, display, keymap, &input),
        EditorEvent::Resize(cols, rows) => {
            display.update_size(cols, rows);
            app.view
                .set_dimensions(cols as usize, text_area_rows(rows));
            app.view.scroll_to_caret(&app.document);
            display.dirty = true;
            Ok(false)
        }
        EditorEvent::Mouse(mouse) => Ok(handle_mouse_event(app, display, &mouse)),
        EditorEvent::None => Ok(false),
    }
}

fn handle_key_event(
    app: &mut App,
    display: &mut Display,
    keymap: &KeyMap,
    input: &InputEvent,
) -> Result<bool, Box<dyn std::error::Error>> {
    // Any key dismisses a dialog; the key itself is swallowed
    if app.dialog.is_some() {
        app.dialog = None;
        display.dirty = true;
        return Ok(false);
    }

    if app.prompt.is_some() {
        return handle_prompt_input(app, display, input);
    }

    if app.menu_bar.is_open() {
        return Ok(handle_menu_input(app, display, input));
    }

    handle_edit_input(app, display, keymap, input)
}

/// Feed a key to the active prompt and run the pending action on confirm
fn handle_prompt_input(
    app: &mut App,
    display: &mut Display,
    input: &InputEvent,
) -> Result<bool, Box<dyn std::error::Error>> {
    display.dirty = true;
    let Some(state) = app.prompt.as_mut() else {
        return Ok(false);
    };
    match state.handle_key(input) {
        PromptResult::Continue => Ok(false),
        PromptResult::Confirmed(text) => {
            let action = state.action;
            app.prompt = None;
            let exit = handle_prompt_action(app, action, text)?;
            Ok(exit)
        }
        PromptResult::Cancelled => {
            app.prompt = None;
            Ok(false)
        }
    }
}

/// Keyboard navigation of the open menu. Unrecognized keys close the menu
/// and are swallowed rather than reaching the text area.
fn handle_menu_input(app: &mut App, display: &mut Display, input: &InputEvent) -> bool {
    display.dirty = true;
    match input.key {
        Key::Esc | Key::F(10) => app.menu_bar.close(),
        Key::Up => {
            if let Some(menu) = app.menu_bar.active() {
                menu.select_prev();
            }
        }
        Key::Down => {
            if let Some(menu) = app.menu_bar.active() {
                menu.select_next();
            }
        }
        Key::Left => app.menu_bar.prev_menu(),
        Key::Right => app.menu_bar.next_menu(),
        Key::Enter => {
            if let Some(command) = app.menu_bar.execute_selected() {
                let result = dispatch(app, Some(command), None);
                return apply_dispatch_result(app, display, result);
            }
        }
        _ => app.menu_bar.close(),
    }
    false
}

/// Normal editing: resolve the key through the binding table
fn handle_edit_input(
    app: &mut App,
    display: &mut Display,
    keymap: &KeyMap,
    input: &InputEvent,
) -> Result<bool, Box<dyn std::error::Error>> {
    match keymap.lookup(input) {
        KeyLookup::Command(name) => {
            let result = dispatch(app, Some(&name), None);
            Ok(apply_dispatch_result(app, display, result))
        }
        KeyLookup::InsertChar(c) => {
            let result = dispatch(app, None, Some(c));
            Ok(apply_dispatch_result(app, display, result))
        }
        KeyLookup::Unbound => Ok(false),
    }
}

/// Fold a dispatch result back into application state. Returns true when
/// the command asked to exit.
fn apply_dispatch_result(app: &mut App, display: &mut Display, result: DispatchResult) -> bool {
    match result {
        DispatchResult::Exit => return true,
        DispatchResult::Success | DispatchResult::NotHandled => {}
        DispatchResult::NeedsInput {
            prompt,
            prefill,
            action,
        } => {
            app.prompt = Some(PromptState::with_input(&prompt, &prefill, action));
        }
        DispatchResult::Info(text) => app.message = Some(text),
        DispatchResult::Alert { title, message } => {
            app.dialog = Some(Dialog::new(&title, &message));
        }
    }
    display.dirty = true;
    false
}

fn handle_mouse_event(app: &mut App, display: &mut Display, mouse: &MouseEvent) -> bool {
    // A dialog swallows the mouse; a click dismisses it like a key press
    if app.dialog.is_some() {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            app.dialog = None;
            display.dirty = true;
        }
        return false;
    }
    // The prompt is keyboard-only
    if app.prompt.is_some() {
        return false;
    }

    let x = mouse.column as usize;
    let y = mouse.row as usize;

    match mouse.kind {
        MouseEventKind::Moved => {
            if app.menu_bar.is_open() {
                menu_hover(app, x, y);
                display.dirty = true;
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            display.dirty = true;

            if y == 0 {
                menu_bar_click(app, x);
                return false;
            }
            if app.menu_bar.is_open() {
                // Inside the dropdown activates the item, anywhere else closes
                let command = dropdown_click(app, x, y);
                app.menu_bar.close();
                if let Some(command) = command {
                    let result = dispatch(app, Some(command), None);
                    return apply_dispatch_result(app, display, result);
                }
                return false;
            }
            if y == MENU_BAR_HEIGHT_CELLS {
                if let Some(command) = app.toolbar.command_at(x) {
                    let result = dispatch(app, Some(command), None);
                    return apply_dispatch_result(app, display, result);
                }
                return false;
            }
            if let Some(row) = text_area_row(display, y) {
                let pos = app.view.char_at(&app.document, x, row);
                if mouse.shift {
                    app.select_to(pos);
                } else {
                    app.clear_selection();
                }
                app.view.move_to(&app.document, pos);
                app.reset_typing_style();
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            // Clamp to the text area so dragging over the chrome keeps selecting
            let rows = text_area_rows(display.height());
            if rows > 0 {
                let row = y.saturating_sub(TEXT_TOP_ROW).min(rows - 1);
                let pos = app.view.char_at(&app.document, x, row);
                app.select_to(pos);
                app.view.move_to(&app.document, pos);
                display.dirty = true;
            }
        }
        MouseEventKind::ScrollUp => {
            app.view.scroll_by(&app.document, -3);
            display.dirty = true;
        }
        MouseEventKind::ScrollDown => {
            app.view.scroll_by(&app.document, 3);
            display.dirty = true;
        }
        _ => {}
    }
    false
}

/// Text-area row under a screen row, if the point is inside the text area
fn text_area_row(display: &Display, y: usize) -> Option<usize> {
    let rows = text_area_rows(display.height());
    if y >= TEXT_TOP_ROW && y < TEXT_TOP_ROW + rows {
        Some(y - TEXT_TOP_ROW)
    } else {
        None
    }
}

/// Click on the menu bar row: toggle the title under the pointer
fn menu_bar_click(app: &mut App, x: usize) {
    for (idx, (_, start, end)) in app.menu_bar.layout().iter().enumerate() {
        if x >= *start && x < *end {
            if app.menu_bar.active_menu == Some(idx) {
                app.menu_bar.close();
            } else {
                app.menu_bar.open_menu(idx);
            }
            return;
        }
    }
    app.menu_bar.close();
}

/// Command under a click in the open dropdown, if it hit an action item
fn dropdown_click(app: &App, x: usize, y: usize) -> Option<&'static str> {
    let idx = app.menu_bar.active_menu?;
    let (_, menu_x, _) = app.menu_bar.layout()[idx];
    let menu = &app.menu_bar.menus[idx];
    let rel_y = y.checked_sub(1)?;
    if x < menu_x || x >= menu_x + menu.render_width() || rel_y >= menu.items.len() {
        return None;
    }
    match &menu.items[rel_y] {
        MenuItem::Action { command, .. } => Some(*command),
        MenuItem::Separator => None,
    }
}

/// While a menu is open, moving the pointer scrubs across titles and
/// highlights the dropdown item under it
fn menu_hover(app: &mut App, x: usize, y: usize) {
    if y == 0 {
        for (idx, (_, start, end)) in app.menu_bar.layout().iter().enumerate() {
            if x >= *start && x < *end {
                if app.menu_bar.active_menu != Some(idx) {
                    app.menu_bar.open_menu(idx);
                }
                return;
            }
        }
        return;
    }
    let Some(idx) = app.menu_bar.active_menu else {
        return;
    };
    let (_, menu_x, _) = app.menu_bar.layout()[idx];
    let menu = &mut app.menu_bar.menus[idx];
    let Some(rel_y) = y.checked_sub(1) else {
        return;
    };
    if x >= menu_x
        && x < menu_x + menu.render_width()
        && rel_y < menu.items.len()
        && matches!(menu.items[rel_y], MenuItem::Action { .. })
    {
        menu.selected = Some(rel_y);
    }
}

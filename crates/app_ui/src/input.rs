//! Keybinding resolution

use app_core::{Command, CommandId};
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key, ModifiersState, NamedKey};

/// Maps key presses to commands
///
/// Only commands that take no parameters can be bound; path-carrying
/// actions come from the file table.
pub struct InputHandler {
    /// Lowercased key string -> command ID
    bindings: HashMap<String, String>,

    modifiers: ModifiersState,
}

impl InputHandler {
    /// Build from the config's command -> keys map
    pub fn new(bindings: HashMap<String, Vec<String>>) -> Self {
        let mut key_to_command = HashMap::new();

        for (command, keys) in bindings {
            if !is_bindable(&command) {
                tracing::warn!("Command {} cannot be bound to a key", command);
                continue;
            }
            for key in keys {
                key_to_command.insert(key.to_lowercase(), command.clone());
            }
        }

        Self {
            bindings: key_to_command,
            modifiers: ModifiersState::empty(),
        }
    }

    pub fn update_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    pub fn handle_key(&self, event: &KeyEvent) -> Option<Command> {
        if event.state != ElementState::Pressed {
            return None;
        }
        self.resolve(&event.logical_key)
    }

    pub fn resolve(&self, key: &Key) -> Option<Command> {
        let key_str = key_to_string(key)?;
        let full_key = build_key_string(self.modifiers, &key_str);

        tracing::debug!("Key pressed: {}", full_key);

        self.bindings
            .get(&full_key.to_lowercase())
            .map(|cmd_id| Command::new(cmd_id))
    }
}

fn is_bindable(command: &str) -> bool {
    matches!(
        command,
        CommandId::FILE_REFRESH | CommandId::NAV_UP_LEVEL | CommandId::APP_EXIT
    )
}

/// "Ctrl+Alt+Shift+Super+<key>" with only the held modifiers
fn build_key_string(modifiers: ModifiersState, key: &str) -> String {
    let mut parts = Vec::new();

    if modifiers.control_key() {
        parts.push("Ctrl");
    }
    if modifiers.alt_key() {
        parts.push("Alt");
    }
    if modifiers.shift_key() {
        parts.push("Shift");
    }
    if modifiers.super_key() {
        parts.push("Super");
    }

    parts.push(key);
    parts.join("+")
}

fn key_to_string(key: &Key) -> Option<String> {
    let name = match key {
        Key::Named(named) => match named {
            NamedKey::Enter => "Return".to_string(),
            NamedKey::Backspace => "Backspace".to_string(),
            NamedKey::Escape => "Escape".to_string(),
            NamedKey::ArrowUp => "Up".to_string(),
            NamedKey::ArrowDown => "Down".to_string(),
            NamedKey::ArrowLeft => "Left".to_string(),
            NamedKey::ArrowRight => "Right".to_string(),
            NamedKey::Home => "Home".to_string(),
            NamedKey::End => "End".to_string(),
            other => format!("{:?}", other),
        },
        Key::Character(c) => c.to_string(),
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> InputHandler {
        let mut bindings = HashMap::new();
        bindings.insert(CommandId::FILE_REFRESH.to_string(), vec!["F5".to_string(), "Ctrl+r".to_string()]);
        bindings.insert(CommandId::NAV_UP_LEVEL.to_string(), vec!["Backspace".to_string()]);
        bindings.insert(CommandId::NAV_SELECT_ENTRY.to_string(), vec!["Space".to_string()]);
        InputHandler::new(bindings)
    }

    #[test]
    fn test_named_keys() {
        let handler = handler();
        let cmd = handler.resolve(&Key::Named(NamedKey::F5)).unwrap();
        assert_eq!(cmd.id.as_str(), CommandId::FILE_REFRESH);

        let cmd = handler.resolve(&Key::Named(NamedKey::Backspace)).unwrap();
        assert_eq!(cmd.id.as_str(), CommandId::NAV_UP_LEVEL);
    }

    #[test]
    fn test_modifiers_are_part_of_the_binding() {
        let mut handler = handler();
        let r = Key::Character("r".into());
        assert!(handler.resolve(&r).is_none());

        handler.update_modifiers(ModifiersState::CONTROL);
        let cmd = handler.resolve(&r).unwrap();
        assert_eq!(cmd.id.as_str(), CommandId::FILE_REFRESH);
    }

    #[test]
    fn test_path_commands_are_not_bindable() {
        let handler = handler();
        assert!(handler.resolve(&Key::Named(NamedKey::Space)).is_none());
    }

    #[test]
    fn test_key_string() {
        assert_eq!(build_key_string(ModifiersState::ALT, "Up"), "Alt+Up");
        assert_eq!(build_key_string(ModifiersState::empty(), "F5"), "F5");
    }
}

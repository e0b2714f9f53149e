//! Message union and reply types.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::identifiers::TabId;

use super::TabDescriptor;

// ============================================================================
// Message
// ============================================================================

/// Every message exchanged between the controller and a renderer.
///
/// There are no sequence numbers: delivery is at most once and ordered per
/// channel, and nothing here depends on more than that.
///
/// # Format
///
/// ```json
/// { "action": "showMenu", "tabs": [ ... ] }
/// { "action": "hideMenu" }
/// { "action": "activateTab", "tabId": 12 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Message {
    /// Show the menu, or hide it if one is already visible.
    ShowMenu {
        /// Tabs to list, in display order.
        tabs: Vec<TabDescriptor>,
    },

    /// Hide the menu if visible.
    HideMenu,

    /// Make the given tab the active one in its window.
    ActivateTab {
        /// Tab chosen by the user.
        #[serde(rename = "tabId")]
        tab_id: TabId,
    },
}

impl Message {
    /// Returns the wire name of this message.
    #[inline]
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::ShowMenu { .. } => "showMenu",
            Self::HideMenu => "hideMenu",
            Self::ActivateTab { .. } => "activateTab",
        }
    }

    /// Returns `true` if the receiver answers this message with a [`MenuReply`].
    #[inline]
    #[must_use]
    pub fn expects_reply(&self) -> bool {
        !matches!(self, Self::ActivateTab { .. })
    }
}

// ============================================================================
// MenuReply
// ============================================================================

/// Menu visibility after the renderer handled a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuStatus {
    /// A menu is now visible.
    Shown,
    /// No menu is visible.
    Hidden,
}

/// Renderer reply to `showMenu` and `hideMenu`.
///
/// # Format
///
/// ```json
/// { "status": "shown" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuReply {
    /// Resulting visibility.
    pub status: MenuStatus,
}

impl MenuReply {
    /// Reply for a menu that is now visible.
    #[inline]
    #[must_use]
    pub const fn shown() -> Self {
        Self {
            status: MenuStatus::Shown,
        }
    }

    /// Reply for a menu that is now hidden.
    #[inline]
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            status: MenuStatus::Hidden,
        }
    }

    /// Returns `true` if a menu is visible.
    #[inline]
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.status == MenuStatus::Shown
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_menu_format() {
        let message = Message::ShowMenu {
            tabs: vec![TabDescriptor::new(TabId::new(1), "One")],
        };
        let json = serde_json::to_value(&message).expect("serialize");

        assert_eq!(json["action"], "showMenu");
        assert_eq!(json["tabs"][0]["id"], 1);
        assert_eq!(json["tabs"][0]["title"], "One");
    }

    #[test]
    fn test_hide_menu_format() {
        let json = serde_json::to_string(&Message::HideMenu).expect("serialize");
        assert_eq!(json, r#"{"action":"hideMenu"}"#);
    }

    #[test]
    fn test_activate_tab_parse() {
        let message: Message =
            serde_json::from_str(r#"{"action":"activateTab","tabId":12}"#).expect("parse");
        assert_eq!(
            message,
            Message::ActivateTab {
                tab_id: TabId::new(12)
            }
        );
        assert!(!message.expects_reply());
    }

    #[test]
    fn test_unknown_action_rejected() {
        let result = serde_json::from_str::<Message>(r#"{"action":"closeTab","tabId":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_action_names() {
        assert_eq!(Message::HideMenu.action(), "hideMenu");
        assert_eq!(Message::ShowMenu { tabs: Vec::new() }.action(), "showMenu");
        assert!(Message::HideMenu.expects_reply());
    }

    #[test]
    fn test_reply_format() {
        assert_eq!(
            serde_json::to_string(&MenuReply::shown()).expect("serialize"),
            r#"{"status":"shown"}"#
        );

        let reply: MenuReply = serde_json::from_str(r#"{"status":"hidden"}"#).expect("parse");
        assert!(!reply.is_shown());
    }
}

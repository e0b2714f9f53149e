//! Per-page renderer state machine.
//!
//! A [`Renderer`] owns everything mutable on its page side: the last pointer
//! position and the menu state. The overlay handle lives inside
//! [`MenuState::Visible`], so there is no visibility flag that could disagree
//! with the document. Every closing path goes through
//! [`Renderer::remove_context_menu`].

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use tracing::{debug, info, warn};

use crate::identifiers::{OverlayHandle, TabId};
use crate::protocol::{MenuReply, Message, TabDescriptor};
use crate::transport::ControllerPort;

use super::menu::Overlay;
use super::options::MenuOptions;
use super::page::{ClickTarget, Page, PageEvent};
use super::position::{Placement, Point, place_menu};
use super::theme::{ColorScheme, Palette, stylesheet};

// ============================================================================
// MenuState
// ============================================================================

/// A menu that is on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenMenu {
    /// Overlay element in the page.
    pub handle: OverlayHandle,
    /// Tab for each row, by row index.
    pub rows: Vec<TabId>,
    /// Palette the menu was built with.
    pub palette: Palette,
    /// Where the menu was placed.
    pub placement: Placement,
}

/// Menu visibility.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MenuState {
    /// No overlay in the page.
    #[default]
    Hidden,
    /// Exactly one overlay in the page.
    Visible(OpenMenu),
}

impl MenuState {
    /// Returns `true` if a menu is on the page.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }
}

// ============================================================================
// ClickOutcome
// ============================================================================

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A row was chosen; activation was requested and the menu closed.
    Activated(TabId),
    /// The outside-click listener closed the menu.
    Dismissed,
    /// No menu was open.
    Ignored,
}

// ============================================================================
// Renderer
// ============================================================================

/// The menu renderer for one page.
pub struct Renderer<P: Page> {
    page: P,
    options: MenuOptions,
    controller: ControllerPort,
    pointer: Point,
    state: MenuState,
}

impl<P: Page> fmt::Debug for Renderer<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("pointer", &self.pointer)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<P: Page> Renderer<P> {
    /// Creates a renderer for a freshly loaded page.
    pub fn new(page: P, options: MenuOptions, controller: ControllerPort) -> Self {
        info!(overlay_id = %options.overlay_id, "Tab list menu: content script loaded");
        Self {
            page,
            options,
            controller,
            pointer: Point::default(),
            state: MenuState::Hidden,
        }
    }
}

// ============================================================================
// Renderer - Accessors
// ============================================================================

impl<P: Page> Renderer<P> {
    /// Returns the last known pointer position.
    #[inline]
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Returns the menu state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Returns `true` if a menu is on the page.
    #[inline]
    #[must_use]
    pub fn is_menu_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Returns the page.
    #[inline]
    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Returns the options.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &MenuOptions {
        &self.options
    }
}

// ============================================================================
// Renderer - Messages
// ============================================================================

impl<P: Page> Renderer<P> {
    /// Handles a message from the controller.
    ///
    /// Returns the reply for messages that expect one.
    pub fn handle_message(&mut self, message: Message) -> Option<MenuReply> {
        debug!(action = message.action(), "Message received");

        match message {
            Message::ShowMenu { tabs } => Some(self.toggle_menu(&tabs)),
            Message::HideMenu => Some(self.hide_menu()),
            Message::ActivateTab { tab_id } => {
                warn!(%tab_id, "activateTab sent to a renderer, ignoring");
                None
            }
        }
    }

    /// Shows a menu listing `tabs`, or closes the visible one.
    pub fn toggle_menu(&mut self, tabs: &[TabDescriptor]) -> MenuReply {
        if self.state.is_visible() {
            self.remove_context_menu();
            return MenuReply::hidden();
        }

        self.ensure_styles();
        self.show_context_menu(tabs);
        MenuReply::shown()
    }

    /// Closes the menu if one is open.
    pub fn hide_menu(&mut self) -> MenuReply {
        if self.state.is_visible() {
            self.remove_context_menu();
        }
        MenuReply::hidden()
    }
}

// ============================================================================
// Renderer - Page Events
// ============================================================================

impl<P: Page> Renderer<P> {
    /// Handles a document event.
    ///
    /// Returns the click outcome for clicks.
    pub fn handle_event(&mut self, event: PageEvent) -> Option<ClickOutcome> {
        match event {
            PageEvent::PointerMove(at) => {
                self.on_pointer_move(at);
                None
            }
            PageEvent::Click(target) => Some(self.on_click(target)),
            PageEvent::VisibilityChange { hidden } => {
                self.on_visibility_change(hidden);
                None
            }
        }
    }

    /// Records the pointer position. Last value wins.
    #[inline]
    pub fn on_pointer_move(&mut self, at: Point) {
        self.pointer = at;
    }

    /// Handles a click.
    ///
    /// A row click stops propagation, so the outside-click listener never
    /// sees it.
    pub fn on_click(&mut self, target: ClickTarget) -> ClickOutcome {
        if let ClickTarget::Row { overlay, index } = target
            && let Some(tab_id) = self.row_tab(overlay, index)
        {
            return self.activate_row(tab_id);
        }

        if self.state.is_visible() {
            debug!("Outside click, closing menu");
            self.remove_context_menu();
            ClickOutcome::Dismissed
        } else {
            ClickOutcome::Ignored
        }
    }

    /// Closes the menu when the page becomes hidden.
    pub fn on_visibility_change(&mut self, hidden: bool) {
        if hidden && self.state.is_visible() {
            debug!("Page hidden, closing menu");
            self.remove_context_menu();
        }
    }

    /// Looks up the tab behind a row of the open menu.
    fn row_tab(&self, overlay: OverlayHandle, index: usize) -> Option<TabId> {
        match &self.state {
            MenuState::Visible(open) if open.handle == overlay => open.rows.get(index).copied(),
            _ => None,
        }
    }

    /// Requests activation and closes the menu without waiting.
    fn activate_row(&mut self, tab_id: TabId) -> ClickOutcome {
        debug!(%tab_id, "Row clicked");

        if let Err(e) = self.controller.activate_tab(tab_id) {
            debug!(%tab_id, error = %e, "activateTab not delivered");
        }

        self.remove_context_menu();
        ClickOutcome::Activated(tab_id)
    }
}

// ============================================================================
// Renderer - Menu Lifecycle
// ============================================================================

impl<P: Page> Renderer<P> {
    /// Removes the menu, clears the state and detaches the outside-click
    /// listener. Safe to call when no menu is open.
    pub fn remove_context_menu(&mut self) {
        if let MenuState::Visible(open) = std::mem::take(&mut self.state) {
            self.page.detach_overlay(open.handle);
            debug!(overlay = %open.handle, "Menu removed");
        }
        self.page.set_outside_click_listener(false);
    }

    /// Injects the stylesheet unless the page already has it.
    fn ensure_styles(&mut self) {
        if self.page.contains_element(&self.options.style_id) {
            return;
        }

        let css = stylesheet(&self.options);
        self.page.insert_style(&self.options.style_id, &css);
        debug!(style_id = %self.options.style_id, "Styles injected");
    }

    /// Builds, attaches and places a menu at the cached pointer position.
    fn show_context_menu(&mut self, tabs: &[TabDescriptor]) {
        self.remove_context_menu();

        let palette = ColorScheme::from_prefers_dark(self.page.prefers_dark_scheme()).palette();
        let overlay = Overlay::build(tabs, palette, &self.options);
        let rows = overlay.tab_ids();

        let handle = self.page.attach_overlay(&overlay);
        let size = self.page.overlay_size(handle).unwrap_or_default();
        let placement = place_menu(self.pointer, size, self.page.viewport());
        self.page.place_overlay(handle, placement.origin);
        self.page.set_outside_click_listener(true);

        debug!(
            overlay = %handle,
            rows = rows.len(),
            x = placement.origin.x,
            y = placement.origin.y,
            flipped_x = placement.flipped_x,
            flipped_y = placement.flipped_y,
            "Menu shown"
        );

        self.state = MenuState::Visible(OpenMenu {
            handle,
            rows,
            palette,
            placement,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::renderer::HeadlessPage;
    use crate::renderer::position::Size;
    use crate::transport::{Inbox, channel};

    fn tabs(n: usize) -> Vec<TabDescriptor> {
        (0..n)
            .map(|i| {
                let tab = TabDescriptor::new(TabId::new(i as i32 + 1), format!("Tab {i}"));
                if i % 2 == 0 {
                    tab.with_icon(format!("https://site{i}.test/favicon.ico"))
                } else {
                    tab
                }
            })
            .collect()
    }

    fn renderer(page: HeadlessPage) -> (Renderer<HeadlessPage>, Inbox) {
        let (port, inbox) = channel();
        (
            Renderer::new(page, MenuOptions::new(), ControllerPort::new(port)),
            inbox,
        )
    }

    fn sized_page() -> HeadlessPage {
        HeadlessPage::new(1000.0, 800.0).with_menu_size(Size::new(150.0, 200.0))
    }

    /// State and document agree: visible iff one overlay and a listener.
    fn assert_consistent(renderer: &Renderer<HeadlessPage>) {
        let page = renderer.page();
        let visible = renderer.is_menu_visible();
        assert_eq!(page.overlay_count(), usize::from(visible));
        assert_eq!(page.has_outside_click_listener(), visible);
    }

    #[test]
    fn test_show_then_toggle_off() {
        let page = sized_page();
        let (mut renderer, _inbox) = renderer(page.clone());

        assert_eq!(renderer.toggle_menu(&tabs(3)), MenuReply::shown());
        assert_eq!(page.overlay_count(), 1);
        assert_consistent(&renderer);

        assert_eq!(renderer.toggle_menu(&tabs(3)), MenuReply::hidden());
        assert_eq!(page.overlay_count(), 0);
        assert_consistent(&renderer);
    }

    #[test]
    fn test_hide_menu_always_replies_hidden() {
        let (mut renderer, _inbox) = renderer(sized_page());

        assert_eq!(renderer.hide_menu(), MenuReply::hidden());
        renderer.toggle_menu(&tabs(1));
        assert_eq!(renderer.hide_menu(), MenuReply::hidden());
        assert!(!renderer.is_menu_visible());
        assert_consistent(&renderer);
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let page = sized_page();
        let (mut renderer, _inbox) = renderer(page.clone());
        renderer.toggle_menu(&tabs(2));

        renderer.remove_context_menu();
        let once = renderer.state().clone();
        renderer.remove_context_menu();

        assert_eq!(renderer.state(), &once);
        assert_eq!(renderer.state(), &MenuState::Hidden);
        assert_eq!(page.overlay_count(), 0);
        assert!(!page.has_outside_click_listener());
    }

    #[test]
    fn test_row_count_and_leading() {
        let page = sized_page();
        let (mut renderer, _inbox) = renderer(page.clone());
        renderer.toggle_menu(&tabs(5));

        let attached = page.overlay().expect("overlay");
        assert_eq!(attached.overlay.row_count(), 5);
        let icons = attached
            .overlay
            .rows
            .iter()
            .filter(|r| r.leading.is_icon())
            .count();
        assert_eq!(icons, 3);
        assert_eq!(attached.overlay.icon_size_px, 16);
    }

    #[test]
    fn test_menu_opens_at_pointer() {
        let page = sized_page();
        let (mut renderer, _inbox) = renderer(page.clone());

        renderer.on_pointer_move(Point::new(10.0, 10.0));
        renderer.on_pointer_move(Point::new(100.0, 100.0));
        renderer.toggle_menu(&tabs(1));

        assert_eq!(
            page.overlay().and_then(|o| o.origin),
            Some(Point::new(100.0, 100.0))
        );
    }

    #[test]
    fn test_menu_flips_near_corner() {
        let page = sized_page();
        let (mut renderer, _inbox) = renderer(page.clone());

        renderer.on_pointer_move(Point::new(900.0, 700.0));
        renderer.toggle_menu(&tabs(1));

        assert_eq!(
            page.overlay().and_then(|o| o.origin),
            Some(Point::new(750.0, 500.0))
        );
    }

    #[test]
    fn test_palette_follows_scheme_at_build_time() {
        let page = sized_page().with_dark_scheme(true);
        let (mut renderer, _inbox) = renderer(page.clone());

        renderer.toggle_menu(&tabs(1));
        page.set_dark_scheme(false);

        match renderer.state() {
            MenuState::Visible(open) => assert_eq!(open.palette, Palette::DARK),
            MenuState::Hidden => panic!("menu should be visible"),
        }
        let attached = page.overlay().expect("overlay");
        assert!(attached.inline_style.contains("#333"));

        renderer.remove_context_menu();
        renderer.toggle_menu(&tabs(1));
        let attached = page.overlay().expect("overlay");
        assert_eq!(attached.overlay.palette, Palette::LIGHT);
    }

    #[test]
    fn test_styles_injected_once() {
        let page = sized_page();
        let (mut renderer, _inbox) = renderer(page.clone());

        for _ in 0..3 {
            assert!(renderer.toggle_menu(&tabs(2)).is_shown());
            assert!(!renderer.toggle_menu(&tabs(2)).is_shown());
        }
        assert_eq!(page.style_count("tab-list-menu-style"), 1);
    }

    #[test]
    fn test_existing_style_marker_respected() {
        let mut page = sized_page();
        page.insert_style("tab-list-menu-style", "/* from an earlier renderer */");
        let (mut renderer, _inbox) = renderer(page.clone());

        renderer.toggle_menu(&tabs(1));
        assert_eq!(page.style_count("tab-list-menu-style"), 1);
    }

    #[test]
    fn test_outside_click_dismisses() {
        let page = sized_page();
        let (mut renderer, _inbox) = renderer(page.clone());

        assert_eq!(renderer.on_click(ClickTarget::Elsewhere), ClickOutcome::Ignored);

        renderer.toggle_menu(&tabs(2));
        assert_eq!(
            renderer.on_click(ClickTarget::Elsewhere),
            ClickOutcome::Dismissed
        );
        assert_eq!(page.overlay_count(), 0);
        assert_consistent(&renderer);
    }

    #[tokio::test]
    async fn test_row_click_activates_and_closes() {
        let page = sized_page();
        let (mut renderer, mut inbox) = renderer(page.clone());
        renderer.toggle_menu(&tabs(3));
        let handle = page.overlay().expect("overlay").handle;

        let outcome = renderer.on_click(ClickTarget::Row {
            overlay: handle,
            index: 1,
        });

        assert_eq!(outcome, ClickOutcome::Activated(TabId::new(2)));
        assert_eq!(page.overlay_count(), 0);
        assert_consistent(&renderer);

        let incoming = inbox.recv().await.expect("activateTab");
        assert_eq!(
            incoming.message,
            Message::ActivateTab {
                tab_id: TabId::new(2)
            }
        );
    }

    #[test]
    fn test_row_click_without_controller_still_closes() {
        let page = sized_page();
        let (mut renderer, inbox) = renderer(page.clone());
        drop(inbox);

        renderer.toggle_menu(&tabs(1));
        let handle = page.overlay().expect("overlay").handle;
        let outcome = renderer.on_click(ClickTarget::Row {
            overlay: handle,
            index: 0,
        });

        assert_eq!(outcome, ClickOutcome::Activated(TabId::new(1)));
        assert!(!renderer.is_menu_visible());
    }

    #[test]
    fn test_stale_row_click_is_outside_click() {
        let page = sized_page();
        let (mut renderer, _inbox) = renderer(page.clone());
        renderer.toggle_menu(&tabs(2));

        let outcome = renderer.on_click(ClickTarget::Row {
            overlay: OverlayHandle::new(999),
            index: 0,
        });
        assert_eq!(outcome, ClickOutcome::Dismissed);
    }

    #[test]
    fn test_hidden_page_closes_menu() {
        let (mut renderer, _inbox) = renderer(sized_page());
        renderer.toggle_menu(&tabs(1));

        renderer.handle_event(PageEvent::VisibilityChange { hidden: false });
        assert!(renderer.is_menu_visible());

        renderer.handle_event(PageEvent::VisibilityChange { hidden: true });
        assert!(!renderer.is_menu_visible());
        assert_consistent(&renderer);
    }

    #[test]
    fn test_hidden_page_without_menu_is_noop() {
        let page = sized_page();
        let (mut renderer, _inbox) = renderer(page.clone());

        renderer.on_visibility_change(true);
        assert!(!renderer.is_menu_visible());
        assert_eq!(page.overlay_count(), 0);

        renderer.toggle_menu(&tabs(1));
        renderer.on_visibility_change(true);
        assert_eq!(page.overlay_count(), 0);
        assert!(!page.has_outside_click_listener());
    }

    #[test]
    fn test_activate_tab_message_ignored() {
        let (mut renderer, _inbox) = renderer(sized_page());
        let reply = renderer.handle_message(Message::ActivateTab {
            tab_id: TabId::new(1),
        });
        assert_eq!(reply, None);
        assert!(!renderer.is_menu_visible());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Show(usize),
        Hide,
        Remove,
        ClickOutside,
        ClickRow(usize),
        Move(f64, f64),
        Hidden,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..6).prop_map(Op::Show),
            Just(Op::Hide),
            Just(Op::Remove),
            Just(Op::ClickOutside),
            (0usize..6).prop_map(Op::ClickRow),
            (0.0f64..1200.0, 0.0f64..1000.0).prop_map(|(x, y)| Op::Move(x, y)),
            Just(Op::Hidden),
        ]
    }

    proptest! {
        #[test]
        fn prop_overlay_count_never_exceeds_one(ops in prop::collection::vec(op(), 0..40)) {
            let page = HeadlessPage::new(1000.0, 800.0);
            let (mut renderer, _inbox) = renderer(page.clone());

            for op in ops {
                let was_visible = renderer.is_menu_visible();
                match op {
                    Op::Show(n) => {
                        let reply = renderer.toggle_menu(&tabs(n));
                        prop_assert_eq!(reply.is_shown(), !was_visible);
                    }
                    Op::Hide => {
                        prop_assert_eq!(renderer.hide_menu(), MenuReply::hidden());
                    }
                    Op::Remove => renderer.remove_context_menu(),
                    Op::ClickOutside => {
                        renderer.on_click(ClickTarget::Elsewhere);
                    }
                    Op::ClickRow(index) => {
                        if let Some(attached) = page.overlay() {
                            renderer.on_click(ClickTarget::Row { overlay: attached.handle, index });
                        }
                    }
                    Op::Move(x, y) => renderer.on_pointer_move(Point::new(x, y)),
                    Op::Hidden => renderer.on_visibility_change(true),
                }

                prop_assert!(page.overlay_count() <= 1);
                prop_assert_eq!(page.overlay_count(), usize::from(renderer.is_menu_visible()));
                prop_assert_eq!(page.has_outside_click_listener(), renderer.is_menu_visible());
                prop_assert!(page.style_count("tab-list-menu-style") <= 1);
            }
        }
    }
}

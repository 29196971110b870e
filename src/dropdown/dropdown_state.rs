use std::fmt;

use crate::layout::DropdownRegions;
use crate::listeners::{GlobalEvent, ListenerGuard, ListenerRegistry};
use crate::options::OptionList;
use crate::panel::PanelState;
use crate::scroll::ScrollState;
use crate::selection::{self, ClickModifiers, SelectMode, Selection};

use super::bar_view::{self, BarView};

/// Called with the new selection after every change
pub type ChangeCallback = Box<dyn FnMut(&Selection)>;

/// Default number of option rows shown before the panel scrolls
pub const DEFAULT_PANEL_HEIGHT: u16 = 8;

/// Construction options for a [`Dropdown`]
pub struct DropdownProps {
    pub options: OptionList,
    pub select_multiple: bool,
    pub placeholder: String,
    pub panel_height: u16,
    pub on_change: Option<ChangeCallback>,
}

impl DropdownProps {
    pub fn new(options: OptionList) -> Self {
        Self {
            options,
            select_multiple: false,
            placeholder: String::new(),
            panel_height: DEFAULT_PANEL_HEIGHT,
            on_change: None,
        }
    }

    pub fn select_multiple(mut self, select_multiple: bool) -> Self {
        self.select_multiple = select_multiple;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn panel_height(mut self, rows: u16) -> Self {
        self.panel_height = rows.max(1);
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(&Selection) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }
}

/// A mounted dropdown
///
/// Mounting registers an outside-click listener and an Escape listener with the
/// screen's [`ListenerRegistry`]; both are released when the dropdown is unmounted
/// or dropped, open or not.
pub struct Dropdown {
    options: OptionList,
    mode: SelectMode,
    placeholder: String,
    panel_height: u16,
    selection: Selection,
    panel: PanelState,
    on_change: Option<ChangeCallback>,
    listeners: Vec<ListenerGuard>,
    pub scroll: ScrollState,
    pub regions: DropdownRegions,
}

impl Dropdown {
    pub fn mount(props: DropdownProps, registry: &ListenerRegistry) -> Self {
        let panel = PanelState::new();

        let click_panel = panel.clone();
        let key_panel = panel.clone();
        let listeners = vec![
            registry.subscribe(move |event| {
                if let GlobalEvent::Click { column, row } = event {
                    click_panel.on_global_click(*column, *row);
                }
            }),
            registry.subscribe(move |event| {
                if let GlobalEvent::KeyUp(code) = event {
                    key_panel.on_global_key_up(*code);
                }
            }),
        ];

        let mut dropdown = Self {
            options: props.options,
            mode: SelectMode::from(props.select_multiple),
            placeholder: props.placeholder,
            panel_height: props.panel_height,
            selection: Selection::empty(),
            panel,
            on_change: props.on_change,
            listeners,
            scroll: ScrollState::new(),
            regions: DropdownRegions::new(),
        };

        #[cfg(debug_assertions)]
        log::debug!(
            "Mounted dropdown: {} options, {:?}",
            dropdown.options.len(),
            dropdown.mode
        );

        dropdown.notify();
        dropdown
    }

    /// Apply a click on option `index`
    ///
    /// # Panics
    /// Panics if `index` is out of range for the current options.
    pub fn click_option(&mut self, index: usize, modifiers: ClickModifiers) {
        let next = selection::next_selection(
            &self.selection,
            index,
            &self.options,
            modifiers,
            self.mode,
        );
        self.replace_selection(next);
    }

    /// Select every option, or clear when all are selected. No-op in single mode.
    pub fn toggle_all(&mut self) {
        if !self.mode.is_multiple() {
            return;
        }
        let next = selection::toggle_all(&self.selection, &self.options);
        self.replace_selection(next);
    }

    /// Swap in a new option list; a different list clears the selection
    pub fn set_options(&mut self, options: OptionList) {
        if self.options.same_list(&options) {
            return;
        }

        #[cfg(debug_assertions)]
        log::debug!("Option list replaced ({} options)", options.len());

        self.options = options;
        self.scroll.reset();
        self.replace_selection(Selection::empty());
    }

    pub fn toggle_open(&mut self) {
        self.panel.toggle();
    }

    pub fn close(&mut self) {
        self.panel.close();
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn panel_height(&self) -> u16 {
        self.panel_height
    }

    pub fn summary_text(&self) -> String {
        bar_view::summary_text(&self.selection, &self.options, &self.placeholder)
    }

    pub fn bar_view(&self) -> BarView {
        bar_view::bar_view(
            &self.selection,
            &self.options,
            &self.placeholder,
            self.is_open(),
            self.mode,
        )
    }

    /// Number of global listeners this dropdown still holds
    pub fn active_listeners(&self) -> usize {
        self.listeners
            .iter()
            .filter(|guard| !guard.is_released())
            .count()
    }

    /// Release the global listeners and drop the widget
    pub fn unmount(mut self) {
        for guard in &mut self.listeners {
            guard.release();
        }

        #[cfg(debug_assertions)]
        log::debug!("Unmounted dropdown");
    }

    fn replace_selection(&mut self, next: Selection) {
        self.selection = next;

        #[cfg(debug_assertions)]
        log::debug!(
            "Selection changed: {:?}",
            self.selection.indices().collect::<Vec<_>>()
        );

        self.notify();
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.selection);
        }
    }
}

impl fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dropdown")
            .field("options", &self.options.len())
            .field("mode", &self.mode)
            .field("placeholder", &self.placeholder)
            .field("selection", &self.selection)
            .field("open", &self.is_open())
            .field("listeners", &self.active_listeners())
            .finish()
    }
}

#[cfg(test)]
#[path = "dropdown_state_tests.rs"]
mod dropdown_state_tests;

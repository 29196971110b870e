use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;

use crate::config::Config;
use crate::dropdown::{Dropdown, DropdownProps};
use crate::listeners::ListenerRegistry;
use crate::options::OptionList;
use crate::selection::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print every dropdown's selection as JSON after the terminal is restored
    Selections,
}

/// One dropdown hosted by the demo, with the last payload its callback received
pub struct DemoDropdown {
    pub name: &'static str,
    pub heading: String,
    pub dropdown: Dropdown,
    pub last_change: Rc<RefCell<String>>,
}

impl DemoDropdown {
    fn mount(
        name: &'static str,
        heading: String,
        props: DropdownProps,
        registry: &ListenerRegistry,
    ) -> Self {
        let last_change = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&last_change);
        let props = props.on_change(move |selection| {
            let payload = match selection.to_json() {
                Ok(json) => json.to_string(),
                Err(e) => format!("unserializable selection: {}", e),
            };

            #[cfg(debug_assertions)]
            log::debug!("onChange[{}]: {}", name, payload);

            *sink.borrow_mut() = payload;
        });

        Self {
            name,
            heading,
            dropdown: Dropdown::mount(props, registry),
            last_change,
        }
    }
}

/// Demo host: a multi-select and a single-select dropdown over the same options
pub struct App {
    pub registry: ListenerRegistry,
    pub dropdowns: Vec<DemoDropdown>,
    pub warning: Option<String>,
    pub output_mode: Option<OutputMode>,
    pub should_quit: bool,
    /// Whether the terminal reports key releases; otherwise presses stand in for them
    pub key_release_events: bool,
}

impl App {
    pub fn new(options: OptionList, config: &Config) -> Self {
        let registry = ListenerRegistry::new();
        let count = options.len();

        let props = |select_multiple: bool| {
            DropdownProps::new(options.clone())
                .select_multiple(select_multiple)
                .placeholder(config.dropdown.placeholder.clone())
                .panel_height(config.dropdown.panel_height)
        };

        let dropdowns = vec![
            DemoDropdown::mount(
                "multiple",
                format!("Multiple Select with {} items", count),
                props(true),
                &registry,
            ),
            DemoDropdown::mount(
                "single",
                format!("Single Select with {} items", count),
                props(false),
                &registry,
            ),
        ];

        Self {
            registry,
            dropdowns,
            warning: None,
            output_mode: None,
            should_quit: false,
            key_release_events: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    /// Every dropdown's current selection, keyed by dropdown name
    pub fn selections_json(&self) -> serde_json::Result<Value> {
        let selections: BTreeMap<&str, &Selection> = self
            .dropdowns
            .iter()
            .map(|demo| (demo.name, demo.dropdown.selection()))
            .collect();
        serde_json::to_value(selections)
    }
}

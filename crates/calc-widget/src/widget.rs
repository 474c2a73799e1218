//! Calculator widget
//!
//! Mounts the keypad into a [`MockDom`], routes the custom events raised by
//! `calc-button` clicks into a [`CalculatorEngine`] and re-renders the log and
//! current value after every event.

use tracing::{debug, warn};

use crate::core::{CalculatorEngine, EngineConfig, RawSignal, SignalSink};
use crate::dom::{DomElement, DomResult, MockDom};
use crate::keypad::{CalcButton, Keypad};

/// ID of the log view
pub const LOG_ID: &str = "calc-log";
/// ID of the current value display
pub const CURRENT_VALUE_ID: &str = "calc-current-value";

/// Widget: engine plus rendered view
#[derive(Debug)]
pub struct CalculatorWidget {
    engine: CalculatorEngine,
    dom: MockDom,
    keypad: Keypad,
    visible_rows: usize,
    rendered_log_len: usize,
}

impl Default for CalculatorWidget {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CalculatorWidget {
    /// Rows the log view shows at once
    pub const DEFAULT_VISIBLE_ROWS: usize = 7;

    /// Creates a widget in a fresh document
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let mut dom = MockDom::new();
        if let Err(err) = dom.define(CalcButton::TAG, CalcButton::click_behavior) {
            warn!(%err, "calc-button registration failed");
        }
        Self::build(dom, config)
    }

    /// Creates a widget in an existing document, registering `calc-button`
    ///
    /// Fails if the document already defines the tag.
    pub fn with_dom(mut dom: MockDom, config: EngineConfig) -> DomResult<Self> {
        dom.define(CalcButton::TAG, CalcButton::click_behavior)?;
        Ok(Self::build(dom, config))
    }

    fn build(mut dom: MockDom, config: EngineConfig) -> Self {
        let keypad = Keypad::new();
        let root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator")
            .with_child(DomElement::new("div").with_id(LOG_ID).with_class("log"))
            .with_child(
                DomElement::new("div")
                    .with_id(CURRENT_VALUE_ID)
                    .with_class("current-value"),
            )
            .with_child(keypad.create_keypad_element());
        dom.mount(root);

        let mut widget = Self {
            engine: CalculatorEngine::with_config(config),
            dom,
            keypad,
            visible_rows: Self::DEFAULT_VISIBLE_ROWS,
            rendered_log_len: 0,
        };
        widget.sync_dom();
        widget
    }

    /// Sets how many log rows are visible
    #[must_use]
    pub fn with_visible_rows(mut self, rows: usize) -> Self {
        self.visible_rows = rows;
        self.scroll_log_to_bottom();
        self
    }

    /// Clicks a keypad element by ID
    pub fn click(&mut self, element_id: &str) -> DomResult<()> {
        if let Some(event) = self.dom.click(element_id)? {
            match RawSignal::try_from(&event) {
                Ok(signal) => self.engine.handle(&signal),
                Err(err) => debug!(%err, "custom event ignored"),
            }
        }
        self.sync_dom();
        Ok(())
    }

    /// Presses a keyboard key
    pub fn key_press(&mut self, key: &str) {
        self.dom.key_press(key);
        if let Some(signal) = Keypad::key_to_signal(key) {
            self.engine.handle(&signal);
        }
        self.sync_dom();
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the document
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the number of visible log rows
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Rendered text of the log view
    #[must_use]
    pub fn log_text(&self) -> &str {
        self.dom.get_element_text(LOG_ID).unwrap_or_default()
    }

    /// Rendered text of the current value display
    #[must_use]
    pub fn current_value_text(&self) -> &str {
        self.dom.get_element_text(CURRENT_VALUE_ID).unwrap_or_default()
    }

    /// Scroll offset of the log view
    #[must_use]
    pub fn log_scroll_top(&self) -> usize {
        self.dom.get_element(LOG_ID).map_or(0, |e| e.scroll_top)
    }

    /// Log lines currently inside the visible window
    #[must_use]
    pub fn visible_log_lines(&self) -> &[String] {
        let lines = self.engine.log_lines().as_slice();
        let start = self.log_scroll_top().min(lines.len());
        let end = (start + self.visible_rows).min(lines.len());
        &lines[start..end]
    }

    fn sync_dom(&mut self) {
        let current = self.engine.current_value();
        let shown = if current.is_empty() { " " } else { current };
        self.dom.set_element_text(CURRENT_VALUE_ID, shown);

        let log = self.engine.log_lines();
        if log.len() != self.rendered_log_len {
            self.dom.set_element_text(LOG_ID, &log.export_formatted());
            self.rendered_log_len = log.len();
            self.scroll_log_to_bottom();
        }
    }

    fn scroll_log_to_bottom(&mut self) {
        let bottom = self.rendered_log_len.saturating_sub(self.visible_rows);
        if let Some(log) = self.dom.get_element_mut(LOG_ID) {
            log.scroll_top = bottom;
        }
    }
}

impl SignalSink for CalculatorWidget {
    fn receive(&mut self, signal: &RawSignal) {
        self.engine.handle(signal);
        self.sync_dom();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EqualLogStyle, Phase};
    use crate::dom::{DomError, DomEvent};

    fn click_all(widget: &mut CalculatorWidget, ids: &[&str]) {
        for id in ids {
            widget.click(id).unwrap();
        }
    }

    #[test]
    fn test_fresh_widget_renders_blank_value() {
        let widget = CalculatorWidget::default();
        assert_eq!(widget.current_value_text(), " ");
        assert_eq!(widget.log_text(), "");
        assert_eq!(widget.log_scroll_top(), 0);
        assert!(widget.dom().is_defined("calc-button"));
    }

    #[test]
    fn test_keypad_mounted() {
        let widget = CalculatorWidget::default();
        assert!(widget.dom().get_element("btn-0").is_some());
        assert!(widget.dom().get_element("btn-equal").is_some());
        assert!(widget.dom().get_element("calc-keypad").is_some());
        assert_eq!(widget.keypad().button_count(), 17);
    }

    #[test]
    fn test_click_digits_updates_display() {
        let mut widget = CalculatorWidget::default();
        click_all(&mut widget, &["btn-1", "btn-2"]);
        assert_eq!(widget.current_value_text(), "12");
        assert_eq!(widget.engine().current_value(), "12");
    }

    #[test]
    fn test_click_scenario_renders_log() {
        let mut widget = CalculatorWidget::default();
        click_all(&mut widget, &["btn-1", "btn-2", "btn-add", "btn-3", "btn-equal"]);
        assert_eq!(widget.current_value_text(), "15");
        assert_eq!(widget.log_text(), "12\n+\n3\n=3");
        assert_eq!(widget.engine().phase(), Phase::Idle);
    }

    #[test]
    fn test_click_records_custom_events() {
        let mut widget = CalculatorWidget::default();
        widget.click("btn-7").unwrap();
        let history = widget.dom().event_history();
        assert_eq!(history.len(), 2);
        assert!(matches!(
            &history[1],
            DomEvent::Custom { event, .. } if event.name == "digit" && event.detail == "7"
        ));
    }

    #[test]
    fn test_click_non_button_element() {
        let mut widget = CalculatorWidget::default();
        widget.click(LOG_ID).unwrap();
        assert_eq!(widget.engine().current_value(), "");
    }

    #[test]
    fn test_click_missing_element_errors() {
        let mut widget = CalculatorWidget::default();
        assert_eq!(
            widget.click("btn-sqrt"),
            Err(DomError::ElementNotFound("btn-sqrt".into()))
        );
    }

    #[test]
    fn test_key_press_routes_through_keypad_map() {
        let mut widget = CalculatorWidget::default();
        for key in ["9", "/", "3", "Enter"] {
            widget.key_press(key);
        }
        assert_eq!(widget.current_value_text(), "3");
        widget.key_press("Escape");
        assert_eq!(widget.current_value_text(), " ");
        widget.key_press("F1");
        assert_eq!(widget.dom().event_history().len(), 6);
    }

    #[test]
    fn test_log_scrolls_to_bottom() {
        let mut widget = CalculatorWidget::default().with_visible_rows(3);
        click_all(&mut widget, &["btn-1", "btn-add", "btn-2", "btn-equal"]);
        assert_eq!(widget.engine().log_lines().len(), 4);
        assert_eq!(widget.log_scroll_top(), 1);
        assert_eq!(
            widget.visible_log_lines(),
            ["+".to_string(), "2".to_string(), "=2".to_string()]
        );
    }

    #[test]
    fn test_scroll_unchanged_without_new_lines() {
        let mut widget = CalculatorWidget::default().with_visible_rows(1);
        click_all(&mut widget, &["btn-1", "btn-add"]);
        assert_eq!(widget.log_scroll_top(), 1);
        click_all(&mut widget, &["btn-5", "btn-backspace", "btn-reset"]);
        assert_eq!(widget.log_scroll_top(), 1);
    }

    #[test]
    fn test_document_tree_shows_rendered_log() {
        let mut widget = CalculatorWidget::default().with_visible_rows(2);
        click_all(&mut widget, &["btn-4", "btn-sub", "btn-1", "btn-equal"]);
        let log = widget
            .dom()
            .root()
            .descendants()
            .into_iter()
            .find(|e| e.id == LOG_ID)
            .unwrap();
        assert_eq!(log.text_content, "4\n-\n1\n=1");
        assert_eq!(log.scroll_top, 2);
        let value = widget
            .dom()
            .root()
            .descendants()
            .into_iter()
            .find(|e| e.id == CURRENT_VALUE_ID)
            .unwrap();
        assert_eq!(value.text_content, "3");
    }

    #[test]
    fn test_with_dom_registers_once() {
        let mut dom = MockDom::new();
        assert!(dom.define(CalcButton::TAG, CalcButton::click_behavior).is_ok());
        let result = CalculatorWidget::with_dom(dom, EngineConfig::default());
        assert!(matches!(result, Err(DomError::AlreadyDefined(_))));

        let widget = CalculatorWidget::with_dom(MockDom::new(), EngineConfig::default()).unwrap();
        assert_eq!(widget.visible_rows(), CalculatorWidget::DEFAULT_VISIBLE_ROWS);
    }

    #[test]
    fn test_result_log_style_rendered() {
        let config = EngineConfig::new().with_equal_log(EqualLogStyle::Result);
        let mut widget = CalculatorWidget::new(config);
        click_all(&mut widget, &["btn-6", "btn-multiply", "btn-7", "btn-equal"]);
        assert_eq!(widget.log_text(), "6\n*\n7\n=42");
    }

    #[test]
    fn test_signal_sink_ignores_unknown_operator() {
        let mut widget = CalculatorWidget::default();
        widget.receive(&RawSignal::digit("4"));
        widget.receive(&RawSignal::operator("percent"));
        assert_eq!(widget.current_value_text(), "4");
        assert_eq!(widget.log_text(), "");
    }
}

use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::config::PageConfig;
use crate::dom;

/// A stat like "500+" split into the number to count up to and what follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTarget {
    pub value: f64,
    pub suffix: String,
    pub original: String,
}

impl StatTarget {
    /// `None` unless the text starts with a digit.
    pub fn parse(text: &str) -> Option<Self> {
        let digits_end = text
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        if digits_end == 0 {
            return None;
        }
        // f64 so very long numbers still animate instead of being skipped
        let value = text[..digits_end].parse::<f64>().ok()?;
        Some(StatTarget {
            value,
            suffix: text[digits_end..].to_string(),
            original: text.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct StatTween {
    target: StatTarget,
    increment: f64,
    current: f64,
    done: bool,
}

impl StatTween {
    pub fn new(target: StatTarget, steps: u32) -> Self {
        let increment = target.value / f64::from(steps.max(1));
        StatTween {
            target,
            increment,
            current: 0.0,
            done: false,
        }
    }

    /// Advances one tick and returns the text to show, `None` once finished.
    pub fn step(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target.value {
            self.current = self.target.value;
            self.done = true;
            return Some(self.target.original.clone());
        }
        Some(format!("{}{}", self.current.floor(), self.target.suffix))
    }
}

fn animate(stat: Element, target: StatTarget, steps: u32, tick_ms: u32) {
    spawn_local(async move {
        let mut tween = StatTween::new(target, steps);
        loop {
            TimeoutFuture::new(tick_ms).await;
            match tween.step() {
                Some(display) => stat.set_text_content(Some(&display)),
                None => break,
            }
        }
    });
}

pub fn animate_stats(document: &Document, config: &PageConfig) {
    for stat in dom::query_all(document, &config.stat_selector) {
        let text = stat.text_content().unwrap_or_default();
        match StatTarget::parse(&text) {
            Some(target) => animate(stat, target, config.stat_steps, config.stat_tick_ms),
            None => debug!("skipping non-numeric stat {:?}", text),
        }
    }
}

/// Waits out the start delay, then counts every stat up.
pub fn start_after_delay(document: Document, config: PageConfig) {
    spawn_local(async move {
        TimeoutFuture::new(config.stat_start_delay_ms).await;
        animate_stats(&document, &config);
    });
}

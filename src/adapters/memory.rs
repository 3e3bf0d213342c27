use crate::domain::ports::{Checkbox, HintElement, Notifier, TextField};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Default)]
struct FieldState {
    value: String,
    disabled: bool,
}

/// 記憶體中的欄位，clone 之後共用同一份狀態
#[derive(Debug, Clone, Default)]
pub struct MemoryField {
    state: Arc<Mutex<FieldState>>,
}

impl MemoryField {
    pub fn new(value: &str) -> Self {
        Self {
            state: Arc::new(Mutex::new(FieldState {
                value: value.to_string(),
                disabled: false,
            })),
        }
    }

    pub fn is_disabled(&self) -> bool {
        lock(&self.state).disabled
    }
}

impl TextField for MemoryField {
    fn value(&self) -> String {
        lock(&self.state).value.clone()
    }

    fn set_value(&self, value: &str) {
        lock(&self.state).value = value.to_string();
    }

    fn set_disabled(&self, disabled: bool) {
        lock(&self.state).disabled = disabled;
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryCheckbox {
    checked: Arc<AtomicBool>,
}

impl MemoryCheckbox {
    pub fn new(checked: bool) -> Self {
        Self {
            checked: Arc::new(AtomicBool::new(checked)),
        }
    }

    pub fn set_checked(&self, checked: bool) {
        self.checked.store(checked, Ordering::SeqCst);
    }
}

impl Checkbox for MemoryCheckbox {
    fn is_checked(&self) -> bool {
        self.checked.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryHint {
    border: Arc<Mutex<Option<String>>>,
}

impl MemoryHint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border(&self) -> Option<String> {
        lock(&self.border).clone()
    }
}

impl HintElement for MemoryHint {
    fn set_border(&self, style: &str) {
        *lock(&self.border) = Some(style.to_string());
    }
}

/// 收集所有通知，測試用
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        lock(&self.messages).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        lock(&self.messages).push(message.to_string());
    }
}

/// CLI 用：通知寫到 stderr 並記錄日誌
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!("🔔 {}", message);
        eprintln!("⚠️  {}", message);
    }
}
